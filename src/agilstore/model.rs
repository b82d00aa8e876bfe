use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// A single inventory record.
///
/// The serialized field names are part of the on-disk contract and must not change:
/// `{"id", "nome", "categoria", "quantidade", "preco"}`, in that order.
///
/// Older documents may hold `null` for quantity or price; those read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "quantidade", deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(rename = "preco", deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The caller-supplied part of a product that is about to be added.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            price,
        }
    }

    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Partial update of a product. `None` and blank strings keep the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// True when applying the patch would not change any field.
    pub fn is_blank(&self) -> bool {
        non_blank(&self.name).is_none()
            && non_blank(&self.category).is_none()
            && self.quantity.is_none()
            && self.price.is_none()
    }

    /// Overwrites every present, non-blank field of `product`.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = non_blank(&self.name) {
            product.name = name.to_string();
        }
        if let Some(category) = non_blank(&self.category) {
            product.category = category.to_string();
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        NewProduct::new("Pen", "Office", 10, 1.5).into_product(1)
    }

    #[test]
    fn serializes_with_document_field_names() {
        let json = serde_json::to_string(&pen()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"nome":"Pen","categoria":"Office","quantidade":10,"preco":1.5}"#
        );
    }

    #[test]
    fn deserializes_integer_prices() {
        let product: Product = serde_json::from_str(
            r#"{"id":3,"nome":"Mug","categoria":"Kitchen","quantidade":2,"preco":12}"#,
        )
        .unwrap();
        assert_eq!(product.price, 12.0);
    }

    #[test]
    fn null_quantity_and_price_read_as_zero() {
        let product: Product = serde_json::from_str(
            r#"{"id":2,"nome":"Café","categoria":"Copa","quantidade":null,"preco":null}"#,
        )
        .unwrap();
        assert_eq!(product.quantity, 0);
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn blank_patch_changes_nothing() {
        let patch = ProductPatch::default()
            .with_name("   ")
            .with_category("");
        assert!(patch.is_blank());

        let mut product = pen();
        patch.apply_to(&mut product);
        assert_eq!(product, pen());
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut product = pen();
        ProductPatch::default()
            .with_category("Stationery")
            .with_price(2.0)
            .apply_to(&mut product);

        assert_eq!(product.name, "Pen");
        assert_eq!(product.category, "Stationery");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.price, 2.0);
    }
}
