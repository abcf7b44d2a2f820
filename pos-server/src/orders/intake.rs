//! Order intake
//!
//! Turns a [`PlaceOrderRequest`] into a pending [`Order`]:
//!
//! 1. collapse the lines into `name -> quantity`, later lines win
//! 2. drop items that are not on the menu or not available
//! 3. resolve the surviving quantities
//! 4. reject an empty selection, then an unknown table
//! 5. price the items at current menu prices
//! 6. mint an id, append the order, occupy the table, persist both files

use rand::Rng;
use rust_decimal::Decimal;
use shared::error::ErrorCode;
use shared::models::{
    MenuItem, Order, OrderLineInput, OrderReceipt, OrderStatus, PlaceOrderRequest, QuantityInput,
};
use std::collections::BTreeMap;

use super::id::mint_order_id;
use super::money;
use crate::store::{PosStore, StoreTable};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, MAX_QUANTITY, validate_text_len};
use crate::utils::{PosError, PosResult};

/// Place an order; nothing is mutated unless the whole placement succeeds
pub fn place_order<R: Rng + ?Sized>(
    store: &mut PosStore,
    request: PlaceOrderRequest,
    rng: &mut R,
) -> PosResult<OrderReceipt> {
    validate_text_len(&request.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_text_len(&request.notes, "notes", MAX_NOTE_LEN)?;

    let requested = collapse_lines(&request.items);
    let items = select_orderable(store.menu(), requested)
        .into_iter()
        .map(|(name, quantity)| {
            let quantity = resolve_quantity(&name, quantity.as_ref())?;
            Ok((name, quantity))
        })
        .collect::<PosResult<BTreeMap<String, u32>>>()?;
    if items.is_empty() {
        return Err(PosError::NoValidItems);
    }

    let table_id = request.table_id.trim().to_string();
    if !store.tables().contains_key(&table_id) {
        return Err(PosError::InvalidTable(table_id));
    }

    let total = price_items(store.menu(), &items);

    let order = store.transact(&[StoreTable::Orders, StoreTable::Tables], |s| {
        let order_id = mint_order_id(rng, |id| s.orders.iter().any(|o| o.order_id == id))?;

        let order = Order {
            order_id,
            table_id: table_id.clone(),
            total: money::to_f64(total),
            items,
            customer_name: request.customer_name,
            status: OrderStatus::Pending,
            created_at: Some(shared::util::now_millis()),
            notes: request.notes,
        };
        s.orders.push(order.clone());

        if let Some(table) = s.tables.get_mut(&table_id)
            && !table.occupied
        {
            table.occupied = true;
        }
        Ok(order)
    })?;

    tracing::info!(
        order_id = %order.order_id,
        table_id = %order.table_id,
        total = order.total,
        lines = order.items.len(),
        "Order placed"
    );

    Ok(OrderReceipt {
        message: format!(
            "Order {} placed for Table {}. Total: ${:.2}",
            order.order_id, order.table_id, order.total
        ),
        order_id: order.order_id,
        table_id: order.table_id,
        total: order.total,
    })
}

/// `name -> raw quantity`, the last line for a name wins
///
/// Lines with a blank name are skipped. Quantities are resolved later, so a
/// line that a later one replaces never fails the order.
fn collapse_lines(lines: &[OrderLineInput]) -> BTreeMap<String, Option<QuantityInput>> {
    let mut items = BTreeMap::new();
    for line in lines {
        let name = line.name.trim();
        if name.is_empty() {
            continue;
        }
        items.insert(name.to_string(), line.quantity.clone());
    }
    items
}

/// A missing or non-numeric quantity means 1; a non-positive or oversized
/// one is rejected.
fn resolve_quantity(name: &str, quantity: Option<&QuantityInput>) -> PosResult<u32> {
    let Some(quantity) = quantity.and_then(|q| q.as_integer()) else {
        return Ok(1);
    };
    if quantity <= 0 {
        return Err(PosError::Validation(
            ErrorCode::InvalidQuantity,
            format!("quantity must be positive (item {name:?}, got {quantity})"),
        ));
    }
    if quantity > MAX_QUANTITY {
        return Err(PosError::Validation(
            ErrorCode::InvalidQuantity,
            format!("quantity exceeds maximum allowed ({MAX_QUANTITY}) for item {name:?}"),
        ));
    }
    // bounded by MAX_QUANTITY
    Ok(quantity as u32)
}

fn select_orderable<Q>(
    menu: &BTreeMap<String, MenuItem>,
    requested: BTreeMap<String, Q>,
) -> BTreeMap<String, Q> {
    requested
        .into_iter()
        .filter(|(name, _)| {
            let orderable = menu.get(name).is_some_and(|item| item.available);
            if !orderable {
                tracing::debug!(item = %name, "Dropping unknown or unavailable item");
            }
            orderable
        })
        .collect()
}

/// Σ current price × quantity; every name must be on the menu
fn price_items(menu: &BTreeMap<String, MenuItem>, items: &BTreeMap<String, u32>) -> Decimal {
    items
        .iter()
        .filter_map(|(name, qty)| menu.get(name).map(|item| money::line_total(item.price, *qty)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StorePaths;
    use rand::rngs::mock::StepRng;
    use shared::models::DiningTable;

    fn seeded_store(dir: &tempfile::TempDir) -> PosStore {
        let mut store = PosStore::open(StorePaths::in_dir(dir.path())).unwrap();
        for (name, category, price, available) in [
            ("Burger", "Food", 8.0, true),
            ("Cola", "Drinks", 2.5, true),
            ("Soup", "Food", 5.0, false),
        ] {
            store.menu.insert(
                name.into(),
                MenuItem {
                    name: name.into(),
                    category: category.into(),
                    price,
                    available,
                },
            );
        }
        store.tables.insert(
            "T1".into(),
            DiningTable {
                table_id: "T1".into(),
                seats: 4,
                occupied: false,
            },
        );
        store.save(StoreTable::Menu).unwrap();
        store.save(StoreTable::Tables).unwrap();
        store
    }

    fn line(name: &str, quantity: Option<QuantityInput>) -> OrderLineInput {
        OrderLineInput {
            name: name.into(),
            quantity,
        }
    }

    fn request(table_id: &str, items: Vec<OrderLineInput>) -> PlaceOrderRequest {
        PlaceOrderRequest {
            table_id: table_id.into(),
            customer_name: "Ann".into(),
            notes: String::new(),
            items,
        }
    }

    #[test]
    fn test_burger_for_two() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded_store(&dir);

        let receipt = place_order(
            &mut store,
            request("T1", vec![line("Burger", Some(QuantityInput::Number(2)))]),
            &mut rand::thread_rng(),
        )
        .unwrap();

        assert_eq!(receipt.total, 16.0);
        assert_eq!(
            receipt.message,
            format!("Order {} placed for Table T1. Total: $16.00", receipt.order_id)
        );

        let reloaded = PosStore::open(StorePaths::in_dir(dir.path())).unwrap();
        let order = &reloaded.orders()[0];
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items, BTreeMap::from([("Burger".to_string(), 2)]));
        assert!(order.created_at.is_some());
        assert!(reloaded.tables()["T1"].occupied);
    }

    #[test]
    fn test_last_line_wins_and_quantity_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded_store(&dir);

        let receipt = place_order(
            &mut store,
            request(
                "T1",
                vec![
                    line("Burger", Some(QuantityInput::Number(5))),
                    line("Cola", Some(QuantityInput::Text("lots".into()))),
                    line("Burger", None),
                    line("", Some(QuantityInput::Number(3))),
                ],
            ),
            &mut rand::thread_rng(),
        )
        .unwrap();

        // Burger x1 + Cola x1
        assert_eq!(receipt.total, 10.5);
        let order = &store.orders()[0];
        assert_eq!(order.items["Burger"], 1);
        assert_eq!(order.items["Cola"], 1);
    }

    #[test]
    fn test_only_unavailable_items() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded_store(&dir);

        let err = place_order(
            &mut store,
            request("T1", vec![line("Soup", None), line("Pizza", None)]),
            &mut rand::thread_rng(),
        )
        .unwrap_err();

        assert!(matches!(err, PosError::NoValidItems));
        assert!(store.orders().is_empty());
        assert!(!store.tables()["T1"].occupied);
        assert!(!store.paths().orders.exists());
    }

    #[test]
    fn test_unknown_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded_store(&dir);

        let err = place_order(
            &mut store,
            request("T9", vec![line("Burger", None)]),
            &mut rand::thread_rng(),
        )
        .unwrap_err();

        assert!(matches!(err, PosError::InvalidTable(ref t) if t == "T9"));
        assert!(store.orders().is_empty());
        assert!(!store.paths().orders.exists());
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded_store(&dir);

        for qty in [QuantityInput::Number(0), QuantityInput::Text("-2".into())] {
            let err = place_order(
                &mut store,
                request("T1", vec![line("Burger", Some(qty))]),
                &mut rand::thread_rng(),
            )
            .unwrap_err();
            assert!(matches!(
                err,
                PosError::Validation(ErrorCode::InvalidQuantity, _)
            ));
        }
        assert!(store.orders().is_empty());
    }

    #[test]
    fn test_replaced_line_quantity_is_not_checked() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded_store(&dir);

        let receipt = place_order(
            &mut store,
            request(
                "T1",
                vec![
                    line("Burger", Some(QuantityInput::Number(0))),
                    line("Burger", Some(QuantityInput::Number(2))),
                ],
            ),
            &mut rand::thread_rng(),
        )
        .unwrap();

        assert_eq!(receipt.total, 16.0);
        assert_eq!(store.orders()[0].items["Burger"], 2);
    }

    #[test]
    fn test_dropped_item_quantity_is_not_checked() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded_store(&dir);

        let receipt = place_order(
            &mut store,
            request(
                "T1",
                vec![
                    line("Pizza", Some(QuantityInput::Number(0))),
                    line("Soup", Some(QuantityInput::Text("-4".into()))),
                    line("Burger", Some(QuantityInput::Number(1))),
                ],
            ),
            &mut rand::thread_rng(),
        )
        .unwrap();

        assert_eq!(receipt.total, 8.0);
        assert_eq!(
            store.orders()[0].items,
            BTreeMap::from([("Burger".to_string(), 1)])
        );
    }

    #[test]
    fn test_tables_write_failure_rolls_back_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded_store(&dir);
        let tables_path = store.paths().tables.clone();
        std::fs::remove_file(&tables_path).unwrap();
        std::fs::create_dir(&tables_path).unwrap();

        let err = place_order(
            &mut store,
            request("T1", vec![line("Burger", Some(QuantityInput::Number(2)))]),
            &mut rand::thread_rng(),
        )
        .unwrap_err();

        assert!(matches!(err, PosError::Persistence(_)));
        assert!(store.orders().is_empty());
        assert!(!store.tables()["T1"].occupied);
        let orders_file = crate::store::csv_file::read_raw(&store.paths().orders).unwrap();
        assert!(orders_file.is_empty());
    }

    #[test]
    fn test_total_survives_price_edit() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded_store(&dir);
        place_order(
            &mut store,
            request("T1", vec![line("Burger", Some(QuantityInput::Number(2)))]),
            &mut rand::thread_rng(),
        )
        .unwrap();

        if let Some(burger) = store.menu.get_mut("Burger") {
            burger.price = 12.0;
        }
        store.save(StoreTable::Menu).unwrap();

        let reloaded = PosStore::open(StorePaths::in_dir(dir.path())).unwrap();
        assert_eq!(reloaded.orders()[0].total, 16.0);
    }

    #[test]
    fn test_id_collision_fails_closed() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded_store(&dir);
        let mut rng = StepRng::new(0, 0);

        place_order(&mut store, request("T1", vec![line("Cola", None)]), &mut rng).unwrap();
        let err =
            place_order(&mut store, request("T1", vec![line("Cola", None)]), &mut rng).unwrap_err();

        assert!(matches!(err, PosError::Conflict(_)));
        assert_eq!(store.orders().len(), 1);
    }
}
