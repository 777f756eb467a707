use bigdecimal::BigDecimal;

use tally_billing::{GroupKey, LineItemGroup, append_items};
use tally_core::position_by_id;

/// Ordered set of groups, merged by key.
///
/// Groups keep the position of their first appearance. A group whose key is
/// already present has its items appended to the existing group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupBook {
    groups: Vec<LineItemGroup>,
}

impl GroupBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[LineItemGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, key: &GroupKey) -> Option<&LineItemGroup> {
        position_by_id(&self.groups, key).map(|idx| &self.groups[idx])
    }

    pub fn merge(&mut self, group: LineItemGroup) {
        match position_by_id(&self.groups, group.key()) {
            Some(idx) => {
                tracing::debug!(
                    key = %group.key(),
                    appended = group.len(),
                    "appending items to existing group"
                );
                append_items(&mut self.groups[idx], group.into_items());
            }
            None => {
                tracing::debug!(key = %group.key(), items = group.len(), "new group");
                self.groups.push(group);
            }
        }
    }

    pub fn merge_all<I>(&mut self, groups: I)
    where
        I: IntoIterator<Item = LineItemGroup>,
    {
        for group in groups {
            self.merge(group);
        }
    }

    /// Exact sum of every group's total.
    pub fn grand_total(&self) -> BigDecimal {
        self.groups
            .iter()
            .fold(tally_core::decimal::zero(), |acc, g| acc + g.total())
    }
}
