use bigdecimal::BigDecimal;

use tally_core::Entity;

use crate::aggregator::compute_total;
use crate::item::LineItem;

/// Key of a line-item group (a code or category name).
///
/// Uniqueness is not enforced by the domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A keyed, ordered collection of line items.
///
/// The group's total is derived on every call to [`LineItemGroup::total`]; there
/// is no stored total that could go stale. Items are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemGroup {
    key: GroupKey,
    items: Vec<LineItem>,
}

impl LineItemGroup {
    pub fn new(key: GroupKey, items: Vec<LineItem>) -> Self {
        Self { key, items }
    }

    pub fn key(&self) -> &GroupKey {
        &self.key
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact sum of `unit_price × quantity` over the current items.
    pub fn total(&self) -> BigDecimal {
        compute_total(&self.items)
    }

    /// Concatenate `new_items` after the existing items.
    pub fn append_items<I>(&mut self, new_items: I)
    where
        I: IntoIterator<Item = LineItem>,
    {
        self.items.extend(new_items);
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }
}

impl Entity for LineItemGroup {
    type Id = GroupKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn item(name: &str, price: &str, quantity: &str) -> LineItem {
        LineItem::new(name, dec(price), dec(quantity))
    }

    #[test]
    fn new_group_keeps_initial_items() {
        let group = LineItemGroup::new(
            GroupKey::new("FRUIT"),
            vec![item("apple", "0.5", "4"), item("pear", "0.75", "2")],
        );
        assert_eq!(group.key().as_str(), "FRUIT");
        assert_eq!(group.id(), &GroupKey::new("FRUIT"));
        assert_eq!(group.len(), 2);
        assert_eq!(group.total(), dec("3.5"));
    }

    #[test]
    fn empty_group_totals_to_zero() {
        let group = LineItemGroup::new("EMPTY".into(), Vec::new());
        assert!(group.is_empty());
        assert_eq!(group.total(), dec("0"));
    }

    #[test]
    fn total_follows_appends() {
        let mut group = LineItemGroup::new("G".into(), vec![item("a", "1", "1")]);
        assert_eq!(group.total(), dec("1"));

        group.append_items(vec![item("b", "2.5", "2")]);
        assert_eq!(group.total(), dec("6"));

        group.append_items(Vec::new());
        assert_eq!(group.total(), dec("6"));
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn append_preserves_existing_then_new_order() {
        let mut group = LineItemGroup::new(
            "G".into(),
            vec![item("a", "1", "1"), item("b", "1", "1")],
        );
        group.append_items(vec![item("c", "1", "1"), item("d", "1", "1")]);

        let names: Vec<&str> = group.items().iter().map(LineItem::name).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn duplicate_names_are_kept() {
        let mut group = LineItemGroup::new("G".into(), vec![item("same", "1", "1")]);
        group.append_items(vec![item("same", "1", "1")]);
        assert_eq!(group.len(), 2);
        assert_eq!(group.total(), dec("2"));
    }

    #[test]
    fn display_key_is_verbatim() {
        assert_eq!(GroupKey::new("A-01 bulk").to_string(), "A-01 bulk");
    }
}
