//! Projection from raw nested order records to flat production items.

use crate::constants::{DESCRIPTION_PLACEHOLDER, NAME_PLACEHOLDER};
use crate::store::OrderRecord;

use super::ProductionItem;

/// Flattens nested order records into UI-ready production items.
///
/// One input item yields exactly one output item; an order with no items
/// yields nothing. Missing customer/material names and missing descriptions
/// are substituted with fixed placeholders, never left empty. All other
/// fields are explicit 1:1 renames.
pub fn project_orders(orders: &[OrderRecord]) -> Vec<ProductionItem> {
    orders
        .iter()
        .flat_map(|order| {
            let customer_name = order
                .customer
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| NAME_PLACEHOLDER.to_string());

            order.items.iter().map(move |item| ProductionItem {
                id: item.id,
                order_ref: order.order_ref.clone(),
                customer_name: customer_name.clone(),
                description: item
                    .description
                    .clone()
                    .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string()),
                material_name: item
                    .material
                    .as_ref()
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
                length: item.length,
                width: item.width,
                quantity: item.quantity,
                status: item.status.clone(),
                created_at: item.created_at,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::store::{CustomerRecord, MaterialRecord, OrderItemRecord};

    fn order_with_items(order_ref: &str, items: Vec<OrderItemRecord>) -> OrderRecord {
        OrderRecord {
            order_ref: order_ref.to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 6, 2, 0, 0).unwrap(),
            order_date: None,
            customer: Some(CustomerRecord {
                name: "Citra Lestari".to_string(),
            }),
            items,
        }
    }

    fn item_record(id: i64) -> OrderItemRecord {
        OrderItemRecord {
            id,
            description: Some("Cetak Spanduk 5x2m".to_string()),
            quantity: 1,
            status: "Proses".into(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 6, 2, 0, 0).unwrap(),
            length: None,
            width: None,
            material: Some(MaterialRecord {
                name: "Flexi 280g".to_string(),
            }),
        }
    }

    #[test]
    fn test_projection_is_one_to_one() {
        let orders = vec![order_with_items(
            "INV-1",
            vec![item_record(1), item_record(2)],
        )];

        let items = project_orders(&orders);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.order_ref == "INV-1"));
        assert_eq!(items[0].customer_name, "Citra Lestari");
        assert_eq!(items[0].material_name, "Flexi 280g");
    }

    #[test]
    fn test_order_without_items_projects_nothing() {
        let orders = vec![order_with_items("INV-2", vec![])];
        assert!(project_orders(&orders).is_empty());
    }

    #[test]
    fn test_missing_names_get_placeholders() {
        let mut order = order_with_items("INV-3", vec![item_record(7)]);
        order.customer = None;
        order.items[0].description = None;
        order.items[0].material = None;

        let items = project_orders(&[order]);
        assert_eq!(items[0].customer_name, NAME_PLACEHOLDER);
        assert_eq!(items[0].description, DESCRIPTION_PLACEHOLDER);
        assert_eq!(items[0].material_name, NAME_PLACEHOLDER);
    }
}
