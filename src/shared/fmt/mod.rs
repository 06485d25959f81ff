//! Display formatting: numbers, decimals, currency amounts and date labels.

pub mod date;
pub mod decimal;
pub mod num;
