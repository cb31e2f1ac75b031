//! Typed model of the upstream query envelope.
//!
//! These types mirror the wire shape exactly (camelCase connection/edge/node
//! nesting) so the `data` field round-trips to the client without reshaping.
//! Item ids are passed through as-is; uniqueness is upstream's concern.

use serde::{Deserialize, Serialize};

/// Top-level wrapper returned by the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryEnvelope {
    pub data: Option<InventoryData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<UpstreamErrorInfo>>,
}

/// One entry of the envelope's `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamErrorInfo {
    pub message: String,
}

/// The `data` payload of a successful inventory query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryData {
    pub inventory_items: Connection<ItemNode>,
}

/// Generic connection wrapper (`{ "edges": [...] }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// One inventory item, insertion order as returned by upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemNode {
    /// Opaque, upstream-assigned identifier.
    pub id: String,
    /// May be empty.
    #[serde(default)]
    pub sku: String,
    pub tracked: bool,
    pub inventory_levels: Connection<LevelNode>,
}

/// One stock level: its quantities, filtered by the query to "available".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelNode {
    pub quantities: Vec<Quantity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    pub name: String,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_body() -> &'static str {
        r#"{
          "data": {
            "inventoryItems": {
              "edges": [
                {
                  "node": {
                    "id": "gid://upstream/InventoryItem/1",
                    "sku": "WID-1",
                    "tracked": true,
                    "inventoryLevels": {
                      "edges": [
                        { "node": { "quantities": [ { "name": "available", "quantity": 42 } ] } }
                      ]
                    }
                  }
                }
              ]
            }
          }
        }"#
    }

    #[test]
    fn decodes_success_envelope() {
        let envelope: QueryEnvelope = serde_json::from_str(success_body()).unwrap();
        let data = envelope.data.unwrap();

        assert_eq!(data.inventory_items.edges.len(), 1);
        let item = &data.inventory_items.edges[0].node;
        assert_eq!(item.id, "gid://upstream/InventoryItem/1");
        assert_eq!(item.sku, "WID-1");
        assert!(item.tracked);

        let level = &item.inventory_levels.edges[0].node;
        assert_eq!(level.quantities[0].name, "available");
        assert_eq!(level.quantities[0].quantity, 42);
    }

    #[test]
    fn decodes_envelope_with_errors_and_null_data() {
        let body = r#"{ "data": null, "errors": [ { "message": "throttled" } ] }"#;
        let envelope: QueryEnvelope = serde_json::from_str(body).unwrap();

        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors.unwrap()[0].message, "throttled");
    }

    #[test]
    fn decodes_empty_edge_list() {
        let body = r#"{ "data": { "inventoryItems": { "edges": [] } } }"#;
        let envelope: QueryEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.data.unwrap().inventory_items.edges.is_empty());
    }

    #[test]
    fn missing_sku_decodes_as_empty_string() {
        let body = r#"{
          "data": { "inventoryItems": { "edges": [
            { "node": { "id": "i1", "tracked": false, "inventoryLevels": { "edges": [] } } }
          ] } }
        }"#;
        let envelope: QueryEnvelope = serde_json::from_str(body).unwrap();
        let data = envelope.data.unwrap();
        assert_eq!(data.inventory_items.edges[0].node.sku, "");
    }

    #[test]
    fn data_serializes_back_to_the_wire_shape() {
        let envelope: QueryEnvelope = serde_json::from_str(success_body()).unwrap();
        let data = envelope.data.unwrap();

        let json = serde_json::to_value(&data).unwrap();
        assert!(json["inventoryItems"]["edges"][0]["node"]["inventoryLevels"].is_object());
        assert_eq!(json["inventoryItems"]["edges"][0]["node"]["sku"], "WID-1");
    }
}
