use crate::model::{Balance, Expense, Member, MemberId, Money};
use fxhash::FxHashMap;

/// Computes per-member net balances from a trip's roster and expenses.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Accumulates one signed balance per roster member.
    ///
    /// Each expense credits its payer with the full amount and debits every
    /// split's member with that member's share. Accumulation runs at decimal
    /// precision; each balance is rounded to the minor unit once, at emission.
    ///
    /// Members referenced by an expense but absent from `members` accumulate
    /// in the working map and are dropped at emission, which walks the roster
    /// in input order. Roster members with no activity emit a zero balance.
    pub fn calculate(&self, members: &[Member], expenses: &[Expense]) -> Vec<Balance> {
        let mut balances: FxHashMap<MemberId, Money> = members
            .iter()
            .map(|member| (member.id.clone(), Money::ZERO))
            .collect();

        for expense in expenses {
            *balances
                .entry(expense.paid_by.clone())
                .or_insert(Money::ZERO) += expense.amount;

            for split in &expense.splits {
                *balances
                    .entry(split.member_id.clone())
                    .or_insert(Money::ZERO) -= split.amount;
            }
        }

        members
            .iter()
            .map(|member| Balance {
                member_id: member.id.clone(),
                member_name: member.name.clone(),
                balance: balances
                    .get(&member.id)
                    .copied()
                    .unwrap_or(Money::ZERO)
                    .round2(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExpenseSplit;
    use rstest::{fixture, rstest};

    #[fixture]
    fn calculator() -> BalanceCalculator {
        BalanceCalculator
    }

    fn trio() -> Vec<Member> {
        vec![
            Member::new("a", "Alice"),
            Member::new("b", "Bob"),
            Member::new("c", "Carol"),
        ]
    }

    fn expense(paid_by: &str, amount: i64, splits: &[(&str, i64)]) -> Expense {
        Expense {
            paid_by: MemberId::new(paid_by),
            amount: Money::from_minor_units(amount),
            splits: splits
                .iter()
                .map(|&(member_id, amount)| ExpenseSplit {
                    member_id: MemberId::new(member_id),
                    amount: Money::from_minor_units(amount),
                })
                .collect(),
        }
    }

    fn assert_balances(actual: &[Balance], expected: &[(&str, i64)]) {
        let got: Vec<(&str, Money)> = actual
            .iter()
            .map(|balance| (balance.member_id.as_str(), balance.balance))
            .collect();
        let want: Vec<(&str, Money)> = expected
            .iter()
            .map(|&(id, units)| (id, Money::from_minor_units(units)))
            .collect();
        assert_eq!(got, want);
    }

    #[rstest]
    fn no_expenses_yields_all_zero(calculator: BalanceCalculator) {
        let balances = calculator.calculate(&trio(), &[]);
        assert_balances(&balances, &[("a", 0), ("b", 0), ("c", 0)]);
    }

    #[rstest]
    #[case::equal_split_payer(
        vec![expense("a", 9000, &[("a", 3000), ("b", 3000), ("c", 3000)])],
        &[("a", 6000), ("b", -3000), ("c", -3000)]
    )]
    #[case::two_expenses(
        vec![
            expense("a", 10_000, &[("a", 4000), ("b", 3000), ("c", 3000)]),
            expense("b", 6000, &[("a", 2000), ("b", 2000), ("c", 2000)]),
        ],
        &[("a", 4000), ("b", 1000), ("c", -5000)]
    )]
    #[case::rounding_shortfall_propagates(
        vec![expense("a", 10_000, &[("a", 3333), ("b", 3333), ("c", 3333)])],
        &[("a", 6667), ("b", -3333), ("c", -3333)]
    )]
    fn accumulates_expenses(
        calculator: BalanceCalculator,
        #[case] expenses: Vec<Expense>,
        #[case] expected: &[(&str, i64)],
    ) {
        let balances = calculator.calculate(&trio(), &expenses);
        assert_balances(&balances, expected);
    }

    #[rstest]
    fn self_paid_self_split_nets_to_zero(calculator: BalanceCalculator) {
        let members = vec![Member::new("a", "Alice")];
        let expenses = vec![expense("a", 5000, &[("a", 5000)])];
        let balances = calculator.calculate(&members, &expenses);
        assert_balances(&balances, &[("a", 0)]);
    }

    #[rstest]
    fn unknown_member_references_are_not_emitted(calculator: BalanceCalculator) {
        // "ghost" fronts the money and takes a share but is not on the roster.
        let expenses = vec![expense(
            "ghost",
            6000,
            &[("a", 2000), ("b", 2000), ("ghost", 2000)],
        )];
        let balances = calculator.calculate(&trio(), &expenses);
        assert_balances(&balances, &[("a", -2000), ("b", -2000), ("c", 0)]);
    }

    #[rstest]
    fn emission_preserves_roster_order_and_names(calculator: BalanceCalculator) {
        let members = vec![
            Member::new("z", "Zoe"),
            Member::new("a", "Alice"),
            Member::new("m", "Mallory"),
        ];
        let balances = calculator.calculate(&members, &[]);
        let names: Vec<&str> = balances
            .iter()
            .map(|balance| balance.member_name.as_str())
            .collect();
        assert_eq!(names, ["Zoe", "Alice", "Mallory"]);
    }
}
