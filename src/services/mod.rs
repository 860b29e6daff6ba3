pub mod balance_calculator;
pub mod settlement_planner;
pub mod settlement_report;
pub mod split_allocator;

pub use balance_calculator::BalanceCalculator;
pub use settlement_planner::SettlementPlanner;
pub use settlement_report::SettlementReport;
pub use split_allocator::{allocate_splits, SplitError, SplitRequest};

use crate::model::Money;
use rust_decimal::Decimal;

/// Tolerance for comparing working balances against zero.
///
/// One minor unit (0.01). Applied everywhere a balance is classified as
/// settled or open; exact equality is never used on accumulated amounts.
pub fn settlement_epsilon() -> Money {
    Money::new(Decimal::new(1, 2))
}
