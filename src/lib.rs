//! Balance and settlement engine for a shared-trip expense tracker.
//!
//! Two pure services compose in sequence: [`BalanceCalculator`] turns a
//! member roster and its recorded expense splits into per-member net
//! balances, and [`SettlementPlanner`] turns those balances into a greedy
//! list of debtor-to-creditor transfers. [`SettlementReport::build`] is the
//! composition a route handler calls.
//!
//! Persistence, authentication, and the HTTP surface live upstream; this
//! crate only consumes in-memory snapshots and returns plain records.

#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Balance, Expense, ExpenseSplit, Member, MemberId, Money, Settlement, SplitType,
};
pub use services::{
    allocate_splits, settlement_epsilon, BalanceCalculator, SettlementPlanner, SettlementReport,
    SplitError, SplitRequest,
};
