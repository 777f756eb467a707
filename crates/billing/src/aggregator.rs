//! Exact total of a sequence of line items.

use bigdecimal::BigDecimal;

use crate::group::LineItemGroup;
use crate::item::LineItem;

/// Sum of `unit_price × quantity` over `items`.
///
/// Folds left-to-right from exact zero. An empty slice totals to zero. Never
/// fails and never goes through binary floating point.
pub fn compute_total(items: &[LineItem]) -> BigDecimal {
    items
        .iter()
        .fold(tally_core::decimal::zero(), |acc, item| acc + item.line_total())
}

/// Append `new_items` after the group's existing items, in their given order.
///
/// No total is computed or cached; call [`compute_total`] (or
/// [`LineItemGroup::total`]) afterwards.
pub fn append_items<I>(group: &mut LineItemGroup, new_items: I)
where
    I: IntoIterator<Item = LineItem>,
{
    group.append_items(new_items);
}
