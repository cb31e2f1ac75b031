//! Presentational projection of an action outcome.
//!
//! The view layer renders whatever this module hands it; on failure (or
//! before the first trigger) there is no section at all, never a partial one.

use stocklink_upstream::InventoryData;

use crate::action::ActionOutcome;

pub const SECTION_HEADING: &str = "Inventory Items";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub heading: &'static str,
    pub rows: Vec<ItemRow>,
}

/// One item row: id, sku, tracked as Yes/No, and one rendered line per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: String,
    pub sku: String,
    pub tracked: &'static str,
    pub levels: Vec<String>,
}

/// Project an outcome into the view, or `None` when there is nothing to show.
///
/// An empty item list still yields the section (heading with no rows); an
/// item with no levels yields a row with an empty levels region.
pub fn inventory_view(outcome: &ActionOutcome) -> Option<InventoryView> {
    let data = outcome.inventory()?;

    Some(InventoryView {
        heading: SECTION_HEADING,
        rows: item_rows(data),
    })
}

fn item_rows(data: &InventoryData) -> Vec<ItemRow> {
    data.inventory_items
        .edges
        .iter()
        .map(|edge| {
            let node = &edge.node;
            ItemRow {
                id: node.id.clone(),
                sku: node.sku.clone(),
                tracked: if node.tracked { "Yes" } else { "No" },
                levels: node
                    .inventory_levels
                    .edges
                    .iter()
                    .map(|level| {
                        level
                            .node
                            .quantities
                            .iter()
                            .map(|q| format!("{}: {}", q.name, q.quantity))
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stocklink_upstream::{Connection, Edge, ItemNode, LevelNode, Quantity};

    fn item(id: &str, sku: &str, tracked: bool, levels: usize, quantity: i64) -> ItemNode {
        ItemNode {
            id: id.to_string(),
            sku: sku.to_string(),
            tracked,
            inventory_levels: Connection {
                edges: (0..levels)
                    .map(|_| Edge {
                        node: LevelNode {
                            quantities: vec![Quantity {
                                name: "available".to_string(),
                                quantity,
                            }],
                        },
                    })
                    .collect(),
            },
        }
    }

    fn data(items: Vec<ItemNode>) -> InventoryData {
        InventoryData {
            inventory_items: Connection {
                edges: items.into_iter().map(|node| Edge { node }).collect(),
            },
        }
    }

    #[test]
    fn renders_one_row_per_item() {
        let outcome = ActionOutcome::Fetched(data(vec![
            item("i1", "WID-1", true, 1, 42),
            item("i2", "", false, 0, 0),
        ]));

        let view = inventory_view(&outcome).unwrap();
        assert_eq!(view.heading, SECTION_HEADING);
        assert_eq!(view.rows.len(), 2);

        assert_eq!(view.rows[0].id, "i1");
        assert_eq!(view.rows[0].sku, "WID-1");
        assert_eq!(view.rows[0].tracked, "Yes");
        assert_eq!(view.rows[0].levels, vec!["available: 42".to_string()]);
    }

    #[test]
    fn item_with_no_levels_renders_an_empty_levels_region() {
        let outcome = ActionOutcome::Fetched(data(vec![item("i1", "WID-1", false, 0, 0)]));

        let view = inventory_view(&outcome).unwrap();
        assert_eq!(view.rows[0].tracked, "No");
        assert!(view.rows[0].levels.is_empty());
    }

    #[test]
    fn empty_item_list_keeps_the_section_heading() {
        let outcome = ActionOutcome::Fetched(data(vec![]));

        let view = inventory_view(&outcome).unwrap();
        assert_eq!(view.heading, SECTION_HEADING);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn failure_renders_no_section() {
        let outcome = ActionOutcome::Failed {
            error: "upstream_error".to_string(),
        };
        assert!(inventory_view(&outcome).is_none());
    }

    proptest! {
        // Round trip at page-size scale: N items with M levels each and a
        // single "available" quantity render as N rows of M level lines.
        #[test]
        fn renders_every_item_and_level(n in 0usize..=10, m in 0usize..=5, q in 0i64..100_000) {
            let items = (0..n)
                .map(|i| item(&format!("i{}", i), &format!("SKU-{}", i), i % 2 == 0, m, q))
                .collect();
            let outcome = ActionOutcome::Fetched(data(items));

            let view = inventory_view(&outcome).unwrap();
            prop_assert_eq!(view.rows.len(), n);
            for row in &view.rows {
                prop_assert_eq!(row.levels.len(), m);
                for level in &row.levels {
                    prop_assert_eq!(level, &format!("available: {}", q));
                }
            }
        }
    }
}
