//! Flattened order form decoding
//!
//! HTML forms post order lines as indexed keys:
//!
//! ```text
//! table_id=T1&customer_name=Ann&items[0][name]=Burger&items[0][quantity]=2
//! ```
//!
//! [`decode_order_form`] rebuilds a [`PlaceOrderRequest`] with the lines in
//! ascending index order, so "last line wins" in intake means "highest index
//! wins".

use shared::error::ErrorCode;
use shared::models::{OrderLineInput, PlaceOrderRequest, QuantityInput};
use std::collections::BTreeMap;

use crate::utils::{PosError, PosResult};

#[derive(Default)]
struct PartialLine {
    name: Option<String>,
    quantity: Option<String>,
}

/// Build a structured request from urlencoded pairs
///
/// Unknown keys are ignored. Lines without a name are dropped.
pub fn decode_order_form(pairs: Vec<(String, String)>) -> PosResult<PlaceOrderRequest> {
    let mut request = PlaceOrderRequest {
        table_id: String::new(),
        customer_name: String::new(),
        notes: String::new(),
        items: Vec::new(),
    };
    let mut lines: BTreeMap<u64, PartialLine> = BTreeMap::new();

    for (key, value) in pairs {
        match key.as_str() {
            "table_id" => request.table_id = value,
            "customer_name" => request.customer_name = value,
            "notes" => request.notes = value,
            _ => {
                let Some((index, field)) = split_item_key(&key)? else {
                    continue;
                };
                let line = lines.entry(index).or_default();
                match field {
                    "name" => line.name = Some(value),
                    "quantity" => line.quantity = Some(value),
                    _ => {}
                }
            }
        }
    }

    request.items = lines
        .into_values()
        .filter_map(|line| {
            line.name.map(|name| OrderLineInput {
                name,
                quantity: line.quantity.map(QuantityInput::Text),
            })
        })
        .collect();
    Ok(request)
}

/// `items[3][name]` -> `(3, "name")`; keys outside `items[..]` -> `None`
fn split_item_key(key: &str) -> PosResult<Option<(u64, &str)>> {
    let Some(rest) = key.strip_prefix("items[") else {
        return Ok(None);
    };
    let malformed = || {
        PosError::Validation(
            ErrorCode::InvalidFormat,
            format!("malformed order line key: {key:?}"),
        )
    };

    let (index, rest) = rest.split_once(']').ok_or_else(malformed)?;
    let field = rest
        .strip_prefix('[')
        .and_then(|f| f.strip_suffix(']'))
        .ok_or_else(malformed)?;
    let index: u64 = index.trim().parse().map_err(|_| {
        PosError::Validation(
            ErrorCode::InvalidFormat,
            format!("order line index must be a number, got {index:?}"),
        )
    })?;
    Ok(Some((index, field)))
}
