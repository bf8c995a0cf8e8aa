pub mod calculator;

pub use calculator::{ConstantProductCalculator, PriceCalculator};
