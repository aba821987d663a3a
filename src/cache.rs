use lazy_static::*;

use crate::BigInteger;
use crate::constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInteger; MAX_CONSTANT + 1] = [
        BigInteger::from_limbs(vec![0] , false),
        BigInteger::from_limbs(vec![1] , false),
        BigInteger::from_limbs(vec![2] , false),
        BigInteger::from_limbs(vec![3] , false),
        BigInteger::from_limbs(vec![4] , false),
        BigInteger::from_limbs(vec![5] , false),
        BigInteger::from_limbs(vec![6] , false),
        BigInteger::from_limbs(vec![7] , false),
        BigInteger::from_limbs(vec![8] , false),
        BigInteger::from_limbs(vec![9] , false),
        BigInteger::from_limbs(vec![10], false),
        BigInteger::from_limbs(vec![11], false),
        BigInteger::from_limbs(vec![12], false),
        BigInteger::from_limbs(vec![13], false),
        BigInteger::from_limbs(vec![14], false),
        BigInteger::from_limbs(vec![15], false),
        BigInteger::from_limbs(vec![16], false),
    ];
    pub static ref NEG_CACHE: [BigInteger; MAX_CONSTANT + 1] = [
        BigInteger::from_limbs(vec![0] , true),
        BigInteger::from_limbs(vec![1] , true),
        BigInteger::from_limbs(vec![2] , true),
        BigInteger::from_limbs(vec![3] , true),
        BigInteger::from_limbs(vec![4] , true),
        BigInteger::from_limbs(vec![5] , true),
        BigInteger::from_limbs(vec![6] , true),
        BigInteger::from_limbs(vec![7] , true),
        BigInteger::from_limbs(vec![8] , true),
        BigInteger::from_limbs(vec![9] , true),
        BigInteger::from_limbs(vec![10], true),
        BigInteger::from_limbs(vec![11], true),
        BigInteger::from_limbs(vec![12], true),
        BigInteger::from_limbs(vec![13], true),
        BigInteger::from_limbs(vec![14], true),
        BigInteger::from_limbs(vec![15], true),
        BigInteger::from_limbs(vec![16], true),
    ];
    pub static ref ONE: BigInteger = POS_CACHE[1].clone();
}
