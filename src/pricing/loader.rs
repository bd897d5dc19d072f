use crate::pricing::models::PriceTable;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while loading the price table at startup
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Failed to read price table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse price table {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the price table file.
///
/// Called once before the server binds its listener; any error here aborts
/// startup.
pub fn load_price_table(path: &Path) -> Result<PriceTable, PricingError> {
    info!("Loading price table from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| PricingError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Read {} bytes of price table data", content.len());

    let table = parse_price_table(&content).map_err(|source| PricingError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} price tiers", table.len());
    Ok(table)
}

/// Parse a JSON array of `{min, max, price}` tiers.
///
/// Tier overlap and coverage are not checked. Tiers that can never match
/// are reported in the log but kept so that table order is preserved.
pub fn parse_price_table(json: &str) -> Result<PriceTable, serde_json::Error> {
    let table: PriceTable = serde_json::from_str(json)?;

    if table.is_empty() {
        warn!("Price table is empty; every weight will be priced at 0");
    }

    for (idx, tier) in table.tiers().iter().enumerate() {
        if tier.is_inverted() {
            warn!(
                tier = idx,
                min = tier.min,
                max = tier.max,
                "Price tier has min > max and will never match"
            );
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::PriceTier;
    use std::io::Write;

    #[test]
    fn test_parse_price_table_preserves_order() {
        let json = r#"[
            {"min": 10, "max": 20, "price": 4},
            {"min": 0, "max": 10, "price": 5}
        ]"#;

        let table = parse_price_table(json).unwrap();
        assert_eq!(
            table.tiers(),
            &[PriceTier::new(10.0, 20.0, 4.0), PriceTier::new(0.0, 10.0, 5.0)]
        );
    }

    #[test]
    fn test_parse_price_table_accepts_empty_array() {
        let table = parse_price_table("[]").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_price_table_rejects_object() {
        assert!(parse_price_table(r#"{"min": 0, "max": 1, "price": 1}"#).is_err());
    }

    #[test]
    fn test_parse_price_table_rejects_missing_field() {
        assert!(parse_price_table(r#"[{"min": 0, "max": 1}]"#).is_err());
    }

    #[test]
    fn test_load_price_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"min": 0, "max": 10, "price": 5}}]"#).unwrap();

        let table = load_price_table(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.tiers()[0].price, 5.0);
    }

    #[test]
    fn test_load_price_table_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_price_table(&path).unwrap_err();
        assert!(matches!(err, PricingError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_price_table_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{\"min\": 0,").unwrap();

        let err = load_price_table(file.path()).unwrap_err();
        assert!(matches!(err, PricingError::Parse { .. }));
    }
}
