use crate::model::{Balance, Expense, Member, Settlement};
use crate::services::{BalanceCalculator, SettlementPlanner};
use serde::{Deserialize, Serialize};

/// The combined output a trip's balances view is built from: the computed
/// balances plus the transfer plan that settles them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    pub balances: Vec<Balance>,
    pub settlements: Vec<Settlement>,
}

impl SettlementReport {
    /// Runs the balance calculator and feeds its output to the planner.
    ///
    /// Pure composition over a point-in-time snapshot; the caller is
    /// responsible for loading a consistent roster and expense list.
    pub fn build(members: &[Member], expenses: &[Expense]) -> Self {
        let balances = BalanceCalculator.calculate(members, expenses);
        let settlements = SettlementPlanner.plan(&balances);
        Self {
            balances,
            settlements,
        }
    }
}
