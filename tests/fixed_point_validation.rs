use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use proptest::prelude::*;
use scaled_batch::math::fixed_point::{average, average_present, ceil_div};
use scaled_batch::math::units::{average_amounts, format_units, ScaledAmount};
use scaled_batch::UtilError;

fn bi(v: i64) -> BigInt {
    BigInt::from(v)
}

#[test]
fn test_average_slot_count_semantics() {
    println!("=== AVERAGE OVER OPTIONAL SCALED INTEGERS ===");

    let full = vec![Some(bi(10)), Some(bi(20)), None];
    let sparse = vec![Some(bi(9)), None];

    let by_slots = average(&sparse).unwrap();
    let by_present = average_present(&sparse).unwrap();
    println!("  [9, None] -> slots: {}, present: {}", by_slots, by_present);

    assert_eq!(average(&full).unwrap(), bi(10));
    // absent slots still count toward the denominator
    assert_eq!(by_slots, bi(4));
    assert_eq!(by_present, bi(9));
    assert_eq!(average(&[]), Err(UtilError::DivisionByZero));
}

#[test]
fn test_average_token_prices_in_wei() {
    // three quotes in 18-decimal units, one venue missing
    let quotes = vec![
        Some(ScaledAmount::parse("3000.5", 18).unwrap()),
        None,
        Some(ScaledAmount::parse("2999.5", 18).unwrap()),
    ];
    let avg = average_amounts(&quotes, 18).unwrap();
    println!("  average quote: {}", avg);
    assert_eq!(avg.to_string(), "2000");
    assert_eq!(format_units(&avg.raw, 18).unwrap(), "2000");
}

#[test]
fn test_ceil_div_examples() {
    assert_eq!(ceil_div(&bi(7), &bi(2)).unwrap(), bi(4));
    assert_eq!(ceil_div(&bi(-7), &bi(2)).unwrap(), bi(-4));
    assert_eq!(ceil_div(&bi(6), &bi(2)).unwrap(), bi(3));
    assert_eq!(ceil_div(&bi(5), &bi(0)), Err(UtilError::DivisionByZero));
    assert!(matches!(ceil_div(&bi(5), &bi(-1)), Err(UtilError::InvalidArgument(_))));
}

proptest! {
    /// Property: deterministic, and the quotient covers `a` with less than one divisor of slack
    #[test]
    fn prop_ceil_div_rounds_away_from_zero(a in any::<i64>(), b in 1i64..1_000_000) {
        let (a, b) = (bi(a), bi(b));
        let q = ceil_div(&a, &b).unwrap();
        prop_assert_eq!(&q, &ceil_div(&a, &b).unwrap());
        let covered = &q * &b;
        let slack = (&covered - &a).abs();
        prop_assert!(slack < b);
        if a.is_negative() {
            prop_assert!(covered <= a);
        } else {
            prop_assert!(covered >= a);
        }
        prop_assert!(q.is_zero() || q.is_negative() == a.is_negative());
    }

    /// Property: averaging is deterministic and bounded by the extremes / slot count
    #[test]
    fn prop_average_deterministic(
        vals in prop::collection::vec(prop::option::of(any::<i64>()), 1..50),
    ) {
        let slots: Vec<Option<BigInt>> = vals.iter().map(|v| v.map(BigInt::from)).collect();
        let first = average(&slots).unwrap();
        prop_assert_eq!(&first, &average(&slots).unwrap());

        let sum: BigInt = slots.iter().flatten().sum();
        let n = BigInt::from(slots.len());
        prop_assert!((&first * &n - &sum).abs() < n);
    }
}
