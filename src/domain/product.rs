use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identity of a product.
///
/// The client never interprets it: whatever the endpoint hands out (a JSON
/// number or a string) is kept as-is and echoed back in item paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl ProductId {
    /// Parses an id typed by the user. All-digit input becomes `Number`; the
    /// state store maps it onto a listed `Text` id that prints the same.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<u64>() {
            Ok(n) => ProductId::Number(n),
            Err(_) => ProductId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        ProductId::Number(n)
    }
}

#[cfg(test)]
impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

/// A product as known by the remote collection.
///
/// Missing `name`, `price` or `stock` decode to their zero values so that
/// collections carrying other records still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    #[cfg(test)]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
        }
    }

    /// Copies the editable fields into a fresh draft.
    pub fn to_draft(&self) -> Draft {
        Draft {
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Working copy of a product's editable fields. Doubles as the request body
/// for create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl Draft {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_and_text_ids() {
        let numeric: Product =
            serde_json::from_str(r#"{"id":1,"name":"Pen","price":500,"stock":10}"#).unwrap();
        assert_eq!(numeric, Product::new(1, "Pen", 500.0, 10));

        let text: Product = serde_json::from_str(r#"{"id":"abc","name":"Pen"}"#).unwrap();
        assert_eq!(text.id, ProductId::from("abc"));
    }

    #[test]
    fn missing_fields_fall_back_to_zero_values() {
        let product: Product =
            serde_json::from_str(r#"{"id":3,"username":"Samantha","email":"x@y.z"}"#).unwrap();
        assert_eq!(product, Product::new(3, "", 0.0, 0));
    }

    #[test]
    fn product_without_id_is_rejected() {
        assert!(serde_json::from_str::<Product>(r#"{"name":"Pen"}"#).is_err());
    }

    #[test]
    fn draft_serializes_only_editable_fields() {
        let body = serde_json::to_value(Draft::new("Book", 1000.0, 5)).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Book", "price": 1000.0, "stock": 5}));
    }

    #[test]
    fn parsed_ids_match_server_ids() {
        assert_eq!(ProductId::parse(" 42 "), ProductId::Number(42));
        assert_eq!(ProductId::parse("sku-1"), ProductId::from("sku-1"));
        assert_eq!(ProductId::Number(7).to_string(), "7");
    }
}
