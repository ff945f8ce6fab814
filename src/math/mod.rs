pub mod fixed_point;
pub mod units;

pub use fixed_point::{average, average_present, ceil_div, div_round, Rounding};
pub use units::{
    average_amounts, check_decimals, format_units, from_decimal, parse_units, to_decimal,
    ScaledAmount, MAX_DECIMALS,
};
