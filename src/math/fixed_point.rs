// BigInt fixed-point helpers: averaging and directional division
// ----------------------------------------------------------------
// Values are scaled integers (raw units); the scale factor is implicit and never touched
// here. Everything is exact BigInt arithmetic, so there is no overflow to guard against.
//
// Notes:
// - `/` on BigInt truncates toward zero, same as Rust primitive integers.
// - `average` divides by the number of slots, absent ones included. `average_present`
//   divides by the number of present values. Pick explicitly.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{UtilError, UtilResult};

/// Rounding direction for [`div_round`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rounding {
    TowardZero,
    AwayFromZero,
    Floor,
    Ceil,
}

// -------------------------------- Averages ----------------------------------

/// Sum of present values divided by the total slot count (truncating).
///
/// `[9, None]` averages to `4`, not `9`.
pub fn average(values: &[Option<BigInt>]) -> UtilResult<BigInt> {
    if values.is_empty() {
        return Err(UtilError::DivisionByZero);
    }
    let sum: BigInt = values.iter().flatten().sum();
    Ok(sum / BigInt::from(values.len()))
}

/// Sum of present values divided by the number of present values (truncating).
pub fn average_present(values: &[Option<BigInt>]) -> UtilResult<BigInt> {
    let (sum, count) = values
        .iter()
        .flatten()
        .fold((BigInt::zero(), 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return Err(UtilError::DivisionByZero);
    }
    Ok(sum / BigInt::from(count))
}

// -------------------------------- Division ----------------------------------

/// `a / b` with any remainder pushing the magnitude up, sign preserved.
///
/// `b` must be positive: zero is `DivisionByZero`, negative is `InvalidArgument`.
pub fn ceil_div(a: &BigInt, b: &BigInt) -> UtilResult<BigInt> {
    if b.is_zero() {
        return Err(UtilError::DivisionByZero);
    }
    if b.is_negative() {
        return Err(UtilError::invalid(format!(
            "ceil_div divisor must be positive, got {}",
            b
        )));
    }
    let one = BigInt::one();
    let q = if a.is_negative() {
        (a - b + &one) / b
    } else {
        (a + b - &one) / b
    };
    Ok(q)
}

/// Integer division with an explicit rounding direction.
///
/// `AwayFromZero` shares [`ceil_div`]'s contract (positive divisor only); the other modes
/// accept any nonzero divisor.
pub fn div_round(a: &BigInt, b: &BigInt, rounding: Rounding) -> UtilResult<BigInt> {
    if b.is_zero() {
        return Err(UtilError::DivisionByZero);
    }
    let q = match rounding {
        Rounding::TowardZero => a / b,
        Rounding::AwayFromZero => return ceil_div(a, b),
        Rounding::Floor => a.div_floor(b),
        Rounding::Ceil => a.div_ceil(b),
    };
    Ok(q)
}

// ---------------------------------- Tests ------------------------------------
