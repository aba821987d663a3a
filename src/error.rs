#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntegerError {
    #[error("invalid decimal literal: {0}")]
    InvalidFormat(&'static str),
    #[error("attempt to divide by zero")]
    DivideByZero,
    #[error("cannot allocate {limbs} limbs")]
    AllocationFailure { limbs: usize },
}

pub type Result<T> = std::result::Result<T, BigIntegerError>;
