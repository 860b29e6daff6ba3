use crate::model::{ExpenseSplit, Member, MemberId, Money, SplitType};
use rust_decimal::Decimal;
use thiserror::Error;

/// A caller-requested share, used by custom and percentage splits.
///
/// For [`SplitType::Custom`] `amount` is a money amount; for
/// [`SplitType::Percentage`] it is a percentage of the expense total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitRequest {
    pub member_id: MemberId,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("cannot split an expense across an empty roster")]
    EmptyRoster,
    #[error("{split_type} splits require per-member entries")]
    MissingSplits { split_type: SplitType },
}

/// Divides an expense's amount into per-member shares.
///
/// Equal splits charge every roster member `round2(amount / n)`. The
/// per-share rounding shortfall (100 over three members leaves 0.01
/// unassigned) is expected and deliberately not corrected; the balance
/// stage tolerates it via the settlement epsilon.
pub fn allocate_splits(
    split_type: SplitType,
    amount: Money,
    members: &[Member],
    requested: &[SplitRequest],
) -> Result<Vec<ExpenseSplit>, SplitError> {
    match split_type {
        SplitType::Equal => {
            if members.is_empty() {
                return Err(SplitError::EmptyRoster);
            }
            let share =
                Money::new(amount.as_decimal() / Decimal::from(members.len() as u64)).round2();
            Ok(members
                .iter()
                .map(|member| ExpenseSplit {
                    member_id: member.id.clone(),
                    amount: share,
                })
                .collect())
        }
        SplitType::Custom => {
            if requested.is_empty() {
                return Err(SplitError::MissingSplits { split_type });
            }
            Ok(requested
                .iter()
                .map(|request| ExpenseSplit {
                    member_id: request.member_id.clone(),
                    amount: Money::new(request.amount),
                })
                .collect())
        }
        SplitType::Percentage => {
            if requested.is_empty() {
                return Err(SplitError::MissingSplits { split_type });
            }
            Ok(requested
                .iter()
                .map(|request| ExpenseSplit {
                    member_id: request.member_id.clone(),
                    amount: Money::new(
                        request.amount / Decimal::ONE_HUNDRED * amount.as_decimal(),
                    )
                    .round2(),
                })
                .collect())
        }
    }
}
