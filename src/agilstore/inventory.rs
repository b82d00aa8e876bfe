//! # Record Operations
//!
//! Pure functions over the in-memory collection. Nothing here touches the store;
//! callers load the collection, apply one operation, and save it back if it changed.
//!
//! Ids are assigned as `max(id) + 1`, so an id freed by deleting the highest record
//! is handed out again. With a single actor that is harmless.

use crate::error::{InventoryError, Result};
use crate::model::{NewProduct, Product, ProductPatch};

/// Next free id: 1 for an empty collection, otherwise one past the highest id.
///
/// Fails when the highest id is already `u64::MAX`.
pub fn next_id(products: &[Product]) -> Result<u64> {
    match products.iter().map(|p| p.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            InventoryError::Store(format!("No id left after {}", max))
        }),
    }
}

/// Appends `new` under a freshly assigned id and returns that id.
pub fn add(products: &mut Vec<Product>, new: NewProduct) -> Result<u64> {
    let id = next_id(products)?;
    products.push(new.into_product(id));
    Ok(id)
}

pub fn find_by_id(products: &[Product], id: u64) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

/// Case-insensitive substring match on the product name, in collection order.
///
/// Each call builds a fresh iterator; nothing is cached between calls.
pub fn find_by_name<'a>(
    products: &'a [Product],
    term: &str,
) -> impl Iterator<Item = &'a Product> + 'a {
    let term = term.to_lowercase();
    products
        .iter()
        .filter(move |p| p.name.to_lowercase().contains(&term))
}

/// Applies `patch` to the product with `id`. Returns `None` if there is no such product.
pub fn update<'a>(
    products: &'a mut [Product],
    id: u64,
    patch: &ProductPatch,
) -> Option<&'a Product> {
    let product = products.iter_mut().find(|p| p.id == id)?;
    patch.apply_to(product);
    Some(product)
}

/// Removes the product with `id` and returns it, or `None` if it is absent.
pub fn delete(products: &mut Vec<Product>, id: u64) -> Option<Product> {
    let position = products.iter().position(|p| p.id == id)?;
    Some(products.remove(position))
}
