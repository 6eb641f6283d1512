//! Financial summary tests
//!
//! Tests for the ledger-wide aggregate computation:
//! - revenue, COGS, and overhead sums combine into the two profit lines
//! - an empty ledger yields all zeros
//! - COGS is valued at the product's currently recorded cost

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::models::FinancialSummary;
use std::str::FromStr;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// The worked example: one sale of 2 units at 50, one purchase batch
    /// with 10 overhead, product cost on record 20
    #[test]
    fn test_worked_example() {
        let revenue = dec("50") * dec("2");
        let cogs = dec("20") * dec("2");
        let transport = dec("10");

        let summary = FinancialSummary::from_totals(revenue, cogs, transport);

        assert_eq!(summary.total_revenue, dec("100"));
        assert_eq!(summary.total_cogs, dec("40"));
        assert_eq!(summary.total_gross_profit, dec("60"));
        assert_eq!(summary.total_transport_other_costs, dec("10"));
        assert_eq!(summary.net_profit, dec("50"));
    }

    /// No transactions at all: every line is zero
    #[test]
    fn test_empty_ledger() {
        let summary =
            FinancialSummary::from_totals(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);

        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.total_cogs, Decimal::ZERO);
        assert_eq!(summary.total_gross_profit, Decimal::ZERO);
        assert_eq!(summary.total_transport_other_costs, Decimal::ZERO);
        assert_eq!(summary.net_profit, Decimal::ZERO);
    }

    /// Sales valued at the current recorded cost: re-pricing a product's
    /// cost re-prices the COGS of every past sale
    #[test]
    fn test_cogs_uses_current_cost() {
        let sold_quantity = dec("4");

        let before = FinancialSummary::from_totals(
            dec("200"),
            dec("20") * sold_quantity,
            Decimal::ZERO,
        );
        let after = FinancialSummary::from_totals(
            dec("200"),
            dec("25") * sold_quantity,
            Decimal::ZERO,
        );

        assert_eq!(before.total_gross_profit, dec("120"));
        assert_eq!(after.total_gross_profit, dec("100"));
    }

    /// Overhead only comes from purchases and only reduces net profit
    #[test]
    fn test_overhead_hits_net_only() {
        let summary = FinancialSummary::from_totals(dec("100"), dec("40"), dec("15"));

        assert_eq!(summary.total_gross_profit, dec("60"));
        assert_eq!(summary.net_profit, dec("45"));
    }

    /// A loss-making ledger produces negative profit lines
    #[test]
    fn test_negative_profit() {
        let summary = FinancialSummary::from_totals(dec("30"), dec("50"), dec("5"));

        assert_eq!(summary.total_gross_profit, dec("-20"));
        assert_eq!(summary.net_profit, dec("-25"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for summed money amounts
    fn total_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=10_000_000).prop_map(|n| Decimal::new(n, 2)) // 0.00 to 100000.00
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Gross profit is exactly revenue minus COGS
        #[test]
        fn prop_gross_profit_identity(
            revenue in total_strategy(),
            cogs in total_strategy(),
            transport in total_strategy()
        ) {
            let summary = FinancialSummary::from_totals(revenue, cogs, transport);
            prop_assert_eq!(summary.total_gross_profit, revenue - cogs);
        }

        /// Net profit is gross profit minus purchase overheads
        #[test]
        fn prop_net_profit_identity(
            revenue in total_strategy(),
            cogs in total_strategy(),
            transport in total_strategy()
        ) {
            let summary = FinancialSummary::from_totals(revenue, cogs, transport);
            prop_assert_eq!(
                summary.net_profit,
                summary.total_gross_profit - summary.total_transport_other_costs
            );
        }

        /// With zero COGS and zero overhead, both profit lines equal revenue
        #[test]
        fn prop_pure_revenue(revenue in total_strategy()) {
            let summary =
                FinancialSummary::from_totals(revenue, Decimal::ZERO, Decimal::ZERO);
            prop_assert_eq!(summary.total_gross_profit, revenue);
            prop_assert_eq!(summary.net_profit, revenue);
        }

        /// Summation is linear: splitting a ledger in two and adding the
        /// summaries matches summarizing the whole
        #[test]
        fn prop_summary_linearity(
            r1 in total_strategy(), c1 in total_strategy(), t1 in total_strategy(),
            r2 in total_strategy(), c2 in total_strategy(), t2 in total_strategy()
        ) {
            let combined = FinancialSummary::from_totals(r1 + r2, c1 + c2, t1 + t2);
            let first = FinancialSummary::from_totals(r1, c1, t1);
            let second = FinancialSummary::from_totals(r2, c2, t2);

            prop_assert_eq!(combined.net_profit, first.net_profit + second.net_profit);
            prop_assert_eq!(
                combined.total_gross_profit,
                first.total_gross_profit + second.total_gross_profit
            );
        }
    }
}
