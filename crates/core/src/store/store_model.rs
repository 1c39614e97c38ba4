//! Raw wire records as returned by the store's nested queries.
//!
//! Field names follow the store schema (`no_nota`, `deskripsi_pesanan`,
//! `panjang`, `lebar`, `bahan`); the serde renames keep the Rust side
//! readable while matching the payload byte for byte.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::items::ProductionStatus;

/// One order as returned by the nested production query.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "no_nota")]
    pub order_ref: String,
    pub created_at: DateTime<Utc>,
    /// Order date as recorded by the front office; not used by the queue.
    #[serde(rename = "tanggal", default)]
    pub order_date: Option<NaiveDate>,
    #[serde(rename = "customers")]
    pub customer: Option<CustomerRecord>,
    #[serde(rename = "order_items", default)]
    pub items: Vec<OrderItemRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaterialRecord {
    pub name: String,
}

/// One production item nested inside an [`OrderRecord`].
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemRecord {
    pub id: i64,
    #[serde(rename = "deskripsi_pesanan")]
    pub description: Option<String>,
    #[serde(rename = "qty")]
    pub quantity: u32,
    #[serde(rename = "status_produksi")]
    pub status: ProductionStatus,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "panjang")]
    pub length: Option<Decimal>,
    #[serde(rename = "lebar")]
    pub width: Option<Decimal>,
    #[serde(rename = "bahan")]
    pub material: Option<MaterialRecord>,
}

/// The most recent display settings row.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettingsRecord {
    #[serde(rename = "youtube_url", default)]
    pub video_urls: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_record_deserialization() {
        let json = r#"{
            "no_nota": "INV-100234",
            "created_at": "2026-08-06T02:15:00+00:00",
            "tanggal": "2026-08-06",
            "customers": { "name": "Budi Santoso" },
            "order_items": [
                {
                    "id": 41,
                    "deskripsi_pesanan": "Banner 3x1m",
                    "qty": 2,
                    "status_produksi": "Proses",
                    "created_at": "2026-08-06T02:15:00+00:00",
                    "panjang": 3.0,
                    "lebar": 1.0,
                    "bahan": { "name": "Flexi 280g" }
                },
                {
                    "id": 42,
                    "deskripsi_pesanan": null,
                    "qty": 10,
                    "status_produksi": "Belum Dikerjakan",
                    "created_at": "2026-08-06T02:16:00+00:00",
                    "panjang": null,
                    "lebar": null,
                    "bahan": null
                }
            ]
        }"#;

        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_ref, "INV-100234");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.customer.as_ref().unwrap().name, "Budi Santoso");
        assert_eq!(order.items[0].status.as_str(), "Proses");
        assert!(order.items[1].description.is_none());
        assert!(order.items[1].material.is_none());
    }

    #[test]
    fn test_order_record_without_items() {
        let json = r#"{
            "no_nota": "INV-100235",
            "created_at": "2026-08-06T03:00:00+00:00",
            "customers": null
        }"#;

        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert!(order.items.is_empty());
        assert!(order.customer.is_none());
        assert!(order.order_date.is_none());
    }

    #[test]
    fn test_display_settings_record_deserialization() {
        let json = r#"{ "youtube_url": ["https://youtu.be/dQw4w9WgXcQ"] }"#;
        let record: DisplaySettingsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.video_urls.unwrap().len(), 1);

        let empty: DisplaySettingsRecord = serde_json::from_str("{}").unwrap();
        assert!(empty.video_urls.is_none());
    }
}
