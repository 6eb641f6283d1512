//! Financial summary over the transaction ledger

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate financials across all recorded transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_revenue: Decimal,
    pub total_cogs: Decimal,
    pub total_gross_profit: Decimal,
    pub total_transport_other_costs: Decimal,
    pub net_profit: Decimal,
}

impl FinancialSummary {
    /// Derive both profit lines from the three summed inputs.
    ///
    /// COGS is valued at each product's currently recorded purchase cost,
    /// not the cost in effect when the sale happened.
    pub fn from_totals(revenue: Decimal, cogs: Decimal, transport_other: Decimal) -> Self {
        let gross_profit = revenue - cogs;
        Self {
            total_revenue: revenue,
            total_cogs: cogs,
            total_gross_profit: gross_profit,
            total_transport_other_costs: transport_other,
            net_profit: gross_profit - transport_other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn worked_example() {
        // sale of 2 units at 50, purchase batch with 10 overhead,
        // product cost on record is 20
        let summary = FinancialSummary::from_totals(dec("100"), dec("40"), dec("10"));
        assert_eq!(summary.total_revenue, dec("100"));
        assert_eq!(summary.total_cogs, dec("40"));
        assert_eq!(summary.total_gross_profit, dec("60"));
        assert_eq!(summary.total_transport_other_costs, dec("10"));
        assert_eq!(summary.net_profit, dec("50"));
    }

    #[test]
    fn empty_ledger_is_all_zeros() {
        let summary = FinancialSummary::from_totals(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
        assert_eq!(summary.total_gross_profit, Decimal::ZERO);
        assert_eq!(summary.net_profit, Decimal::ZERO);
    }

    #[test]
    fn net_profit_can_go_negative() {
        let summary = FinancialSummary::from_totals(dec("10"), dec("8"), dec("5"));
        assert_eq!(summary.total_gross_profit, dec("2"));
        assert_eq!(summary.net_profit, dec("-3"));
    }
}
