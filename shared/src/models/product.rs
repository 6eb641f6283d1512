//! Stock derivation for catalogued parts

use serde::{Deserialize, Serialize};

/// Stock status relative to a product's low-stock threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "OK")]
    Ok,
}

impl StockStatus {
    /// Classify a stock level against the threshold. The boundary is
    /// inclusive: stock exactly at the threshold is LOW.
    pub fn for_stock(stock: i64, threshold: i32) -> Self {
        if stock <= i64::from(threshold) {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Low => "LOW",
            StockStatus::Ok => "OK",
        }
    }
}

/// Net quantity on hand: purchased minus sold. May go negative when a
/// product is oversold; nothing forbids that.
pub fn current_stock(purchased: i64, sold: i64) -> i64 {
    purchased - sold
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stock_is_purchases_minus_sales() {
        assert_eq!(current_stock(10, 4), 6);
        assert_eq!(current_stock(0, 0), 0);
    }

    #[test]
    fn oversold_stock_goes_negative() {
        assert_eq!(current_stock(2, 5), -3);
    }

    #[test]
    fn status_boundary_is_inclusive() {
        // stock == threshold reports LOW
        assert_eq!(StockStatus::for_stock(3, 3), StockStatus::Low);
        assert_eq!(StockStatus::for_stock(4, 3), StockStatus::Ok);
        assert_eq!(StockStatus::for_stock(2, 3), StockStatus::Low);
    }

    #[test]
    fn status_with_zero_threshold() {
        assert_eq!(StockStatus::for_stock(0, 0), StockStatus::Low);
        assert_eq!(StockStatus::for_stock(1, 0), StockStatus::Ok);
        assert_eq!(StockStatus::for_stock(-1, 0), StockStatus::Low);
    }

    #[test]
    fn status_strings() {
        assert_eq!(StockStatus::Low.as_str(), "LOW");
        assert_eq!(StockStatus::Ok.as_str(), "OK");
    }

    proptest! {
        /// Status is LOW exactly when stock <= threshold
        #[test]
        fn prop_status_matches_comparison(stock in -1000i64..1000, threshold in 0i32..100) {
            let status = StockStatus::for_stock(stock, threshold);
            if stock <= i64::from(threshold) {
                prop_assert_eq!(status, StockStatus::Low);
            } else {
                prop_assert_eq!(status, StockStatus::Ok);
            }
        }

        /// Stock derivation is exact integer arithmetic
        #[test]
        fn prop_stock_roundtrip(purchased in 0i64..10_000, sold in 0i64..10_000) {
            prop_assert_eq!(current_stock(purchased, sold) + sold, purchased);
        }
    }
}
