use crate::model::{Balance, Money, Settlement};
use crate::services::settlement_epsilon;

/// Plans pairwise transfers that settle a trip's balances.
///
/// Greedy largest-creditor/largest-debtor matching. The ordering keeps the
/// transfer list short in practice but is a heuristic, not a proven minimum
/// transaction count.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Produces an ordered transfer list that drives every balance to within
    /// one minor unit of zero.
    ///
    /// Works on local copies of the balances; the caller's slice is never
    /// mutated. Total on any finite input: when the creditor and debtor
    /// totals disagree (malformed upstream data) the walk still terminates in
    /// `O(creditors + debtors)` steps and the residual is logged.
    pub fn plan(&self, balances: &[Balance]) -> Vec<Settlement> {
        let epsilon = settlement_epsilon();

        let mut creditors: Vec<Balance> = balances
            .iter()
            .filter(|balance| balance.balance > epsilon)
            .cloned()
            .collect();
        let mut debtors: Vec<Balance> = balances
            .iter()
            .filter(|balance| balance.balance < -epsilon)
            .cloned()
            .collect();

        // Stable sorts: equal balances keep roster order, so the plan is
        // deterministic for identical input order.
        creditors.sort_by(|a, b| b.balance.cmp(&a.balance));
        debtors.sort_by(|a, b| a.balance.cmp(&b.balance));

        tracing::debug!(
            creditor_count = creditors.len(),
            debtor_count = debtors.len(),
            "planning settlements"
        );

        let mut settlements = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < creditors.len() && j < debtors.len() {
            let amount = creditors[i].balance.min(-debtors[j].balance);

            if amount > epsilon {
                settlements.push(Settlement {
                    from: debtors[j].member_id.clone(),
                    to: creditors[i].member_id.clone(),
                    amount: amount.round2(),
                    from_name: debtors[j].member_name.clone(),
                    to_name: creditors[i].member_name.clone(),
                });

                creditors[i].balance -= amount;
                debtors[j].balance += amount;
            }

            let creditor_closed = creditors[i].balance.abs() < epsilon;
            let debtor_closed = debtors[j].balance.abs() < epsilon;
            if creditor_closed {
                i += 1;
            }
            if debtor_closed {
                j += 1;
            }
            if !creditor_closed && !debtor_closed {
                // Sub-epsilon pairing: neither side can close, so force the
                // smaller remainder forward to guarantee termination.
                debug_assert!(amount <= epsilon);
                if creditors[i].balance <= debtors[j].balance.abs() {
                    i += 1;
                } else {
                    j += 1;
                }
            }
        }

        let residual: Money = creditors
            .iter()
            .skip(i)
            .chain(debtors.iter().skip(j))
            .map(|balance| balance.balance.abs())
            .sum();
        if residual > epsilon {
            tracing::warn!(
                residual = %residual,
                "settlement plan left unmatched balances; upstream totals are imbalanced"
            );
        }

        settlements
    }
}
