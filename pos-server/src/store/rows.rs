//! Row layouts of the three table files
//!
//! | File | Columns |
//! |------|---------|
//! | menu | `name,category,price,available` |
//! | tables | `table_id,seats,occupied` |
//! | orders | `order_id,table_id,total,items_json,customer_name,status[,created_at[,notes]]` |

use csv::StringRecord;
use shared::models::{DiningTable, MenuItem, Order, OrderStatus};
use std::collections::BTreeMap;

use super::csv_file::{CsvRow, decode_amount, decode_bool, encode_amount, encode_bool, expect_columns};

impl CsvRow for MenuItem {
    fn from_record(record: &StringRecord) -> Result<Self, String> {
        expect_columns(record, 4, 4)?;
        let name = required(&record[0], "name")?;
        Ok(MenuItem {
            name,
            category: record[1].to_string(),
            price: decode_amount(&record[2], "price")?,
            available: decode_bool(&record[3], "available")?,
        })
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.category.clone(),
            encode_amount(self.price),
            encode_bool(self.available),
        ]
    }
}

impl CsvRow for DiningTable {
    fn from_record(record: &StringRecord) -> Result<Self, String> {
        expect_columns(record, 3, 3)?;
        let table_id = required(&record[0], "table_id")?;
        let seats: u32 = record[1]
            .trim()
            .parse()
            .map_err(|_| format!("seats: not a non-negative integer: {:?}", &record[1]))?;
        if seats == 0 {
            return Err("seats: must be positive".to_string());
        }
        Ok(DiningTable {
            table_id,
            seats,
            occupied: decode_bool(&record[2], "occupied")?,
        })
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.table_id.clone(),
            self.seats.to_string(),
            encode_bool(self.occupied),
        ]
    }
}

impl CsvRow for Order {
    fn from_record(record: &StringRecord) -> Result<Self, String> {
        expect_columns(record, 6, 8)?;
        let order_id = required(&record[0], "order_id")?;

        let items_json = record[3].trim();
        let items: BTreeMap<String, u32> = if items_json.is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(items_json).map_err(|e| format!("items: {e}"))?
        };
        if let Some((name, _)) = items.iter().find(|(_, qty)| **qty == 0) {
            return Err(format!("items: quantity of {name:?} must be positive"));
        }

        let status: OrderStatus = record[5].trim().parse().map_err(|e| format!("status: {e}"))?;

        let created_at = match record.get(6).map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| format!("created_at: not a timestamp: {raw:?}"))?,
            ),
        };

        Ok(Order {
            order_id,
            table_id: record[1].to_string(),
            total: decode_amount(&record[2], "total")?,
            items,
            customer_name: record[4].to_string(),
            status,
            created_at,
            notes: record.get(7).unwrap_or_default().to_string(),
        })
    }

    fn to_record(&self) -> Vec<String> {
        // BTreeMap<String, u32> always serializes
        let items_json = serde_json::to_string(&self.items).unwrap_or_else(|_| "{}".into());
        vec![
            self.order_id.clone(),
            self.table_id.clone(),
            encode_amount(self.total),
            items_json,
            self.customer_name.clone(),
            self.status.to_string(),
            self.created_at.map(|t| t.to_string()).unwrap_or_default(),
            self.notes.clone(),
        ]
    }
}

fn required(field: &str, column: &str) -> Result<String, String> {
    if field.trim().is_empty() {
        return Err(format!("{column}: must not be empty"));
    }
    Ok(field.to_string())
}
