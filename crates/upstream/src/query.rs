//! The fixed inventory read query.
//!
//! The document is a static contract: pagination and the quantity filter are
//! constants, not caller input. No query builder is warranted here.

/// Items fetched per trigger.
pub const ITEMS_PAGE_SIZE: u32 = 10;

/// Stock levels fetched per item.
pub const LEVELS_PAGE_SIZE: u32 = 5;

/// The single quantity name the query filters to.
pub const AVAILABLE_QUANTITY: &str = "available";

/// The query document sent on every trigger.
pub const INVENTORY_QUERY: &str = r#"
query inventoryItems {
  inventoryItems(first: 10) {
    edges {
      node {
        id
        sku
        tracked
        inventoryLevels(first: 5) {
          edges {
            node {
              quantities(names: ["available"]) {
                name
                quantity
              }
            }
          }
        }
      }
    }
  }
}
"#;
