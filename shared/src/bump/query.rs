//! Derived docket view state
//!
//! Nothing here is stored: callers recompute from the product list whenever
//! the search text or a product changes.

use crate::models::{BumpOrder, BumpOrderProduct};

/// Case-insensitive match on product name, note or add-on names.
/// An empty search matches everything.
pub fn matches_search(product: &BumpOrderProduct, search: Option<&str>) -> bool {
    let needle = match search.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return true,
    };
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    hit(&product.name)
        || product.note.as_deref().is_some_and(hit)
        || product.add_ons.iter().any(|a| hit(&a.name))
}

pub fn visible_products<'a>(
    order: &'a BumpOrder,
    search: Option<&'a str>,
) -> impl Iterator<Item = &'a BumpOrderProduct> + 'a {
    order
        .products
        .iter()
        .filter(move |p| matches_search(p, search))
}

/// Every product visible under `search` is prepared.
///
/// False when nothing is visible. Independent of `order.status`: a docket
/// can be fully prepared while still active.
pub fn filtered_items_completed(order: &BumpOrder, search: Option<&str>) -> bool {
    let mut visible = visible_products(order, search).peekable();
    visible.peek().is_some() && visible.all(BumpOrderProduct::is_prepared)
}

pub fn all_items_completed(order: &BumpOrder) -> bool {
    filtered_items_completed(order, None)
}
