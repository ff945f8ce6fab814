// Raw <-> human unit conversions for scaled integers
// ---------------------------------------------------
// A raw amount `r` with `d` decimals represents r / 10^d (e.g. 1_500_000 with 6 decimals
// is 1.5). Conversions here are exact string/BigInt work; `rust_decimal` is only a
// bridge for callers that want a Decimal, and is range-limited (96-bit mantissa, scale <= 28).
//
// Decimals are capped at MAX_DECIMALS; 10^77 is the largest power of ten a U256 holds.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{UtilError, UtilResult};
use crate::math::fixed_point::average;

/// Largest supported number of decimals.
pub const MAX_DECIMALS: u32 = 77;

/// Reject decimals above [`MAX_DECIMALS`].
pub fn check_decimals(decimals: u32) -> UtilResult<u32> {
    if decimals > MAX_DECIMALS {
        return Err(UtilError::invalid(format!(
            "{} decimals exceeds the maximum of {}",
            decimals, MAX_DECIMALS
        )));
    }
    Ok(decimals)
}

#[inline]
fn pow10(decimals: u32) -> BigInt {
    BigInt::from(10u8).pow(decimals)
}

// ------------------------------- Conversions ---------------------------------

/// Render `raw` as a decimal string, trimming trailing fractional zeros.
pub fn format_units(raw: &BigInt, decimals: u32) -> UtilResult<String> {
    let decimals = check_decimals(decimals)?;
    let (int_part, frac_part) = raw.abs().div_rem(&pow10(decimals));
    let sign = if raw.is_negative() { "-" } else { "" };

    if frac_part.is_zero() {
        return Ok(format!("{}{}", sign, int_part));
    }
    let frac = format!("{:0>width$}", frac_part.to_string(), width = decimals as usize);
    Ok(format!("{}{}.{}", sign, int_part, frac.trim_end_matches('0')))
}

/// Parse a human decimal string into raw units. Excess fractional digits are an error.
pub fn parse_units(text: &str, decimals: u32) -> UtilResult<BigInt> {
    let decimals = check_decimals(decimals)?;
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let malformed = (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part);
    if malformed {
        return Err(UtilError::invalid(format!("not a decimal amount: {:?}", text)));
    }
    if frac_part.len() > decimals as usize {
        return Err(UtilError::invalid(format!(
            "{:?} has more than {} fractional digits",
            text, decimals
        )));
    }

    let digits = format!(
        "{}{:0<width$}",
        if int_part.is_empty() { "0" } else { int_part },
        frac_part,
        width = decimals as usize
    );
    let magnitude: BigInt = digits
        .parse()
        .map_err(|_| UtilError::invalid(format!("not a decimal amount: {:?}", text)))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Raw units -> `Decimal`. Fails when the value does not fit a Decimal.
pub fn to_decimal(raw: &BigInt, decimals: u32) -> UtilResult<Decimal> {
    let decimals = check_decimals(decimals)?;
    let mantissa = raw
        .to_i128()
        .ok_or_else(|| UtilError::invalid(format!("{} does not fit in a Decimal", raw)))?;
    Decimal::try_from_i128_with_scale(mantissa, decimals)
        .map(|d| d.normalize())
        .map_err(|e| UtilError::invalid(format!("{} with {} decimals: {}", raw, decimals, e)))
}

/// `Decimal` -> raw units, dropping precision beyond `decimals` (toward zero).
pub fn from_decimal(value: Decimal, decimals: u32) -> UtilResult<BigInt> {
    let decimals = check_decimals(decimals)?;
    let mantissa = BigInt::from(value.mantissa());
    let scale = value.scale();
    let raw = if scale <= decimals {
        mantissa * pow10(decimals - scale)
    } else {
        mantissa / pow10(scale - decimals)
    };
    Ok(raw)
}

// ------------------------------- Value type ----------------------------------

/// A raw integer together with the number of decimals it is scaled by.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaledAmount {
    #[cfg_attr(feature = "serde", serde(with = "raw_string"))]
    pub raw: BigInt,
    pub decimals: u32,
}

impl ScaledAmount {
    pub fn new(raw: impl Into<BigInt>, decimals: u32) -> Self {
        Self {
            raw: raw.into(),
            decimals,
        }
    }

    pub fn parse(text: &str, decimals: u32) -> UtilResult<Self> {
        Ok(Self {
            raw: parse_units(text, decimals)?,
            decimals,
        })
    }

    pub fn from_decimal(value: Decimal, decimals: u32) -> UtilResult<Self> {
        Ok(Self {
            raw: from_decimal(value, decimals)?,
            decimals,
        })
    }

    pub fn to_decimal(&self) -> UtilResult<Decimal> {
        to_decimal(&self.raw, self.decimals)
    }
}

impl fmt::Display for ScaledAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match format_units(&self.raw, self.decimals) {
            Ok(text) => f.write_str(&text),
            // out-of-range scale: show the raw value with its exponent
            Err(_) => write!(f, "{}e-{}", self.raw, self.decimals),
        }
    }
}

/// Slot-count average of amounts that must all carry `decimals`.
pub fn average_amounts(
    values: &[Option<ScaledAmount>],
    decimals: u32,
) -> UtilResult<ScaledAmount> {
    let mut raws = Vec::with_capacity(values.len());
    for value in values {
        match value {
            Some(v) if v.decimals != decimals => {
                return Err(UtilError::ScaleMismatch {
                    left: decimals,
                    right: v.decimals,
                });
            }
            Some(v) => raws.push(Some(v.raw.clone())),
            None => raws.push(None),
        }
    }
    Ok(ScaledAmount {
        raw: average(&raws)?,
        decimals,
    })
}

#[cfg(feature = "serde")]
mod raw_string {
    use num_bigint::BigInt;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------- Tests ------------------------------------
