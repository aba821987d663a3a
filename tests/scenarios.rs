use big_integer::{BigInteger, BigIntegerError};

fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn multiplication_of_mixed_width_operands() {
    assert_eq!(
        big("123456789123456789") * big("987654321"),
        big("121932631234567900112635269")
    );
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(big("-7") / big("3"), big("-2"));
    assert_eq!(big("-7") % big("3"), big("-1"));
}

#[test]
fn shift_left_crosses_limb_boundary() {
    assert_eq!(big("1") << 64, big("18446744073709551616"));
    assert_eq!((big("1") << 64).to_string(), "18446744073709551616");
}

#[test]
fn zero_has_single_representation() {
    let zero = big("0");
    let neg_zero = big("-0");
    assert_eq!(zero, neg_zero);
    assert_eq!(zero, BigInteger::default());
    assert_eq!(zero.to_string(), "0");
    assert_eq!(neg_zero.to_string(), "0");
    assert!(!neg_zero.is_negative());
}

#[test]
fn malformed_text_is_rejected() {
    for s in ["", "-", "+", "12x", "1 2", "0x10", "١٢"] {
        assert!(
            matches!(s.parse::<BigInteger>(), Err(BigIntegerError::InvalidFormat(_))),
            "accepted {:?}",
            s
        );
    }
}

#[test]
fn division_by_zero_is_an_error() {
    let five = big("5");
    let zero = big("0");
    assert_eq!(five.checked_div(&zero), Err(BigIntegerError::DivideByZero));
    assert_eq!(five.checked_rem(&zero), Err(BigIntegerError::DivideByZero));
    assert!(std::panic::catch_unwind(|| &five / &zero).is_err());
    assert!(std::panic::catch_unwind(|| &five % &zero).is_err());
}

#[test]
fn additive_inverse_is_canonical_zero() {
    for s in ["0", "1", "-1", "4294967296", "-340282366920938463463374607431768211457"] {
        let a = big(s);
        let sum = &a + &(-&a);
        assert_eq!(sum, BigInteger::default());
        assert!(!sum.is_negative());
    }
}

#[test]
fn not_is_negated_successor() {
    for s in ["0", "7", "-7", "4294967295", "-4294967296", "18446744073709551616"] {
        let a = big(s);
        let mut successor = a.clone();
        successor.increment();
        assert_eq!(!&a, -successor);
        assert_eq!(!!a.clone(), a);
    }
}

#[test]
fn factorial_round_trips_through_text() {
    let mut product = BigInteger::from(1);
    for i in 1..=50_u32 {
        product *= BigInteger::from(i);
    }
    let text = product.to_string();
    assert_eq!(
        text,
        "30414093201713378043612608166064768844377641568960512000000000000"
    );
    assert_eq!(big(&text), product);

    let mut quotient = product;
    for i in (1..=50_u32).rev() {
        let (q, r) = quotient.div_rem(&BigInteger::from(i)).unwrap();
        assert!(r.is_zero());
        quotient = q;
    }
    assert_eq!(quotient, BigInteger::from(1));
}

#[test]
fn operators_accept_every_operand_form() {
    let a = big("1000");
    let b = big("-7");
    assert_eq!(&a + &b, big("993"));
    assert_eq!(a.clone() + &b, big("993"));
    assert_eq!(&a + b.clone(), big("993"));
    assert_eq!(a.clone() + b.clone(), big("993"));
    assert_eq!(&a * &b, big("-7000"));
    assert_eq!(&a / &b, big("-142"));
    assert_eq!(&a % &b, big("6"));
    assert_eq!(&a & &b, big("1000"));
    assert_eq!(&a | &b, big("-7"));
    assert_eq!(&a ^ &b, big("-1007"));

    let mut c = a.clone();
    c += &b;
    c -= b.clone();
    c *= &b;
    c /= &b;
    c %= big("300");
    assert_eq!(c, big("100"));
}

#[test]
fn display_writes_to_any_sink() {
    use std::fmt::Write;

    let mut out = String::new();
    write!(out, "[{}|{:>8}]", big("-12345678901234567890"), big("42")).unwrap();
    assert_eq!(out, "[-12345678901234567890|      42]");
}
