//! # Scan Simulation
//!
//! The cashier page has no camera. A code is typed in and matched against a
//! fixed catalog of counter items.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// An entry in the scan catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScanProduct {
    pub id: String,
    pub name: String,
    pub price: Money,
}

impl ScanProduct {
    fn new(id: &str, name: &str, baht: i64) -> Self {
        ScanProduct {
            id: id.to_string(),
            name: name.to_string(),
            price: Money::from_major(baht),
        }
    }
}

/// Fixed, read-only lookup table of scannable products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCatalog {
    products: Vec<ScanProduct>,
}

impl ScanCatalog {
    pub fn new(products: Vec<ScanProduct>) -> Self {
        ScanCatalog { products }
    }

    /// The five counter items the cashier page ships with.
    pub fn mock() -> Self {
        Self::new(vec![
            ScanProduct::new("001", "กาแฟร้อน", 45),
            ScanProduct::new("002", "ชาเย็น", 35),
            ScanProduct::new("003", "น้ำส้มสด", 40),
            ScanProduct::new("004", "ขนมปัง", 25),
            ScanProduct::new("005", "บิสกิต", 30),
        ])
    }

    pub fn products(&self) -> &[ScanProduct] {
        &self.products
    }

    /// Exact id match after trimming surrounding whitespace.
    pub fn lookup(&self, code: &str) -> Option<&ScanProduct> {
        let code = code.trim();
        self.products.iter().find(|p| p.id == code)
    }
}

impl Default for ScanCatalog {
    fn default() -> Self {
        Self::mock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_catalog() {
        let catalog = ScanCatalog::mock();
        assert_eq!(catalog.products().len(), 5);

        let prices: Vec<i64> = catalog.products().iter().map(|p| p.price.major()).collect();
        assert_eq!(prices, vec![45, 35, 40, 25, 30]);
    }

    #[test]
    fn test_lookup_trims() {
        let catalog = ScanCatalog::mock();
        assert_eq!(catalog.lookup(" 003 ").unwrap().name, "น้ำส้มสด");
        assert!(catalog.lookup("006").is_none());
        assert!(catalog.lookup("").is_none());
        assert!(catalog.lookup("01").is_none());
    }
}
