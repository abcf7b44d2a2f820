//! Menu catalog operations

use shared::models::{MenuItem, MenuItemUpdate, MenuItemUpsert};

use crate::store::{PosStore, StoreTable};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_price, validate_required_text,
};
use crate::utils::{PosError, PosResult, Resource};

/// All menu items, sorted by name
pub fn list_menu(store: &PosStore) -> Vec<MenuItem> {
    store.menu().values().cloned().collect()
}

/// Create a menu item or replace the one with the same name
pub fn upsert_menu_item(store: &mut PosStore, input: MenuItemUpsert) -> PosResult<MenuItem> {
    let name = input.name.trim().to_string();
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    let category = input.category.trim().to_string();
    validate_required_text(&category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_price(input.price)?;

    let item = MenuItem {
        name,
        category,
        price: input.price,
        available: input.available,
    };

    let saved = item.clone();
    let replaced = store.transact(&[StoreTable::Menu], move |s| {
        Ok(s.menu.insert(item.name.clone(), item).is_some())
    })?;

    tracing::info!(name = %saved.name, price = saved.price, replaced, "Menu item saved");
    Ok(saved)
}

/// Change price and availability, keeping the category
pub fn update_menu_item(
    store: &mut PosStore,
    name: &str,
    input: MenuItemUpdate,
) -> PosResult<MenuItem> {
    validate_price(input.price)?;

    let updated = store.transact(&[StoreTable::Menu], |s| {
        let item = s
            .menu
            .get_mut(name)
            .ok_or_else(|| PosError::not_found(Resource::MenuItem, name))?;
        item.price = input.price;
        item.available = input.available;
        Ok(item.clone())
    })?;

    tracing::info!(name = %updated.name, price = updated.price, available = updated.available, "Menu item updated");
    Ok(updated)
}

/// Remove a menu item; past orders keep their snapshot
pub fn delete_menu_item(store: &mut PosStore, name: &str) -> PosResult<MenuItem> {
    let removed = store.transact(&[StoreTable::Menu], |s| {
        s.menu
            .remove(name)
            .ok_or_else(|| PosError::not_found(Resource::MenuItem, name))
    })?;

    tracing::info!(name = %removed.name, "Menu item deleted");
    Ok(removed)
}
