pub mod calculator;
pub mod loader;
pub mod models;

pub use calculator::{PriceCalculator, Quote};
pub use loader::{load_price_table, parse_price_table, PricingError};
pub use models::{CalcItem, PriceTable, PriceTier};
