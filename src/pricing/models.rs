use serde::{Deserialize, Serialize};

/// A weight range mapped to a unit price.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub min: f64,
    pub max: f64,
    pub price: f64,
}

impl PriceTier {
    pub fn new(min: f64, max: f64, price: f64) -> Self {
        Self { min, max, price }
    }

    /// Whether `weight` falls inside `[min, max]`
    pub fn contains(&self, weight: f64) -> bool {
        self.min <= weight && weight <= self.max
    }

    /// An inverted tier never matches any weight
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// Ordered collection of price tiers, immutable once loaded.
///
/// Lookups walk the tiers in file order and stop at the first match, so
/// overlapping tiers resolve deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    tiers: Vec<PriceTier>,
}

impl PriceTable {
    pub fn new(tiers: Vec<PriceTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[PriceTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// First tier containing `weight`, if any
    pub fn find_tier(&self, weight: f64) -> Option<&PriceTier> {
        self.tiers.iter().find(|tier| tier.contains(weight))
    }
}

/// A line item submitted to `/calc`. Only `weight` is consumed; any other
/// fields in the request object are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CalcItem {
    pub weight: f64,
}
