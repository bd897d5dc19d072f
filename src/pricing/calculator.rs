use crate::pricing::models::{CalcItem, PriceTable};
use std::sync::Arc;

/// Result of pricing a list of items
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quote {
    pub total: f64,
    pub priced_items: usize,
    /// Items whose weight matched no tier and were priced at 0
    pub unpriced_items: usize,
}

/// Calculator for computing item totals from the tiered price table
#[derive(Debug, Clone)]
pub struct PriceCalculator {
    table: Arc<PriceTable>,
}

impl PriceCalculator {
    /// Create a new price calculator
    pub fn new(table: Arc<PriceTable>) -> Self {
        Self { table }
    }

    /// Unit price for `weight`, or 0 when no tier matches
    pub fn unit_price(&self, weight: f64) -> f64 {
        self.table.find_tier(weight).map_or(0.0, |tier| tier.price)
    }

    /// Unit price multiplied by weight
    pub fn extended_price(&self, weight: f64) -> f64 {
        charge(self.unit_price(weight), weight)
    }

    /// Sum the extended price of every item, in order
    pub fn quote(&self, items: &[CalcItem]) -> Quote {
        let mut quote = Quote::default();

        for item in items {
            match self.table.find_tier(item.weight) {
                Some(tier) => {
                    quote.total += charge(tier.price, item.weight);
                    quote.priced_items += 1;
                }
                None => quote.unpriced_items += 1,
            }
        }

        quote
    }
}

fn charge(unit_price: f64, weight: f64) -> f64 {
    unit_price * weight
}
