pub mod cards;
pub mod category;
pub mod date;
pub mod normalize;
pub mod search;
pub mod top;
pub mod types;
pub mod window;

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals).unwrap_or(2);
    let factor = 10_f64.powi(exponent);
    (value * factor).round() / factor
}
