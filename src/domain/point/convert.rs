//! Conversions: point transactions → point history entries.

use super::wire::{PointTransactionResponse, PointTransactionType};
use super::{GroupedPointHistory, PointHistoryItem, PointHistoryType, PointSource};
use crate::shared::format_dot_date;
use std::collections::BTreeMap;

pub fn convert_point_transaction(tx: &PointTransactionResponse) -> PointHistoryItem {
    let source = PointSource::from_backend(&tx.source);
    let history_type = PointHistoryType::from(tx.transaction_type);

    let amount = match tx.transaction_type {
        PointTransactionType::Used => tx.amount.saturating_neg(),
        PointTransactionType::Earned | PointTransactionType::Other => tx.amount,
    };

    PointHistoryItem {
        id: tx.id.to_string(),
        date: format_dot_date(&tx.created_at),
        history_type,
        title: format!("{} {}", source.label(), history_type.label()),
        description: tx.reason.clone(),
        amount,
    }
}

/// Convert and group transactions by calendar date, newest date first.
///
/// Entries inside a group keep their input order.
pub fn group_point_history_by_date<'a>(
    transactions: impl IntoIterator<Item = &'a PointTransactionResponse>,
) -> Vec<GroupedPointHistory> {
    let mut grouped: BTreeMap<String, Vec<PointHistoryItem>> = BTreeMap::new();
    for tx in transactions {
        let item = convert_point_transaction(tx);
        grouped.entry(item.date.clone()).or_default().push(item);
    }

    // `YYYY.MM.DD` is fixed width, so string order is date order.
    grouped
        .into_iter()
        .rev()
        .map(|(date, items)| GroupedPointHistory { date, items })
        .collect()
}

impl From<&PointTransactionResponse> for PointHistoryItem {
    fn from(tx: &PointTransactionResponse) -> Self {
        convert_point_transaction(tx)
    }
}
