use crate::domain::{Draft, Product, ProductId};
use crate::error::ManagerError;

/// Which request the next submit issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

/// The product list, the draft and the editing target.
///
/// Only ever mutated from confirmed server responses or local form input;
/// nothing here is speculative, so a failed request needs no rollback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductState {
    products: Vec<Product>,
    draft: Draft,
    editing: Option<ProductId>,
}

impl ProductState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing(&self) -> Option<&ProductId> {
        self.editing.as_ref()
    }

    pub fn mode(&self) -> FormMode {
        match &self.editing {
            Some(id) => FormMode::Edit(id.clone()),
            None => FormMode::Create,
        }
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// The listed id that a typed `id` refers to: an exact match first, else
    /// the first entry whose id prints the same. Unlisted ids come back as-is.
    pub fn resolve(&self, id: &ProductId) -> ProductId {
        if let Some(product) = self.find(id) {
            return product.id.clone();
        }
        let typed = id.to_string();
        self.products
            .iter()
            .find(|p| p.id.to_string() == typed)
            .map_or_else(|| id.clone(), |p| p.id.clone())
    }

    // --- Confirmed responses ---

    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Appends the created product and clears the draft. Mode is untouched.
    pub fn apply_created(&mut self, product: Product) {
        self.products.push(product);
        self.draft = Draft::default();
    }

    /// Replaces the entry carrying the response's id, then returns to create
    /// mode. Returns whether an entry was replaced.
    pub fn apply_updated(&mut self, product: Product) -> bool {
        let replaced = match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        };
        self.editing = None;
        self.draft = Draft::default();
        replaced
    }

    /// Drops the entry with `id`, if any. At most one entry is removed.
    pub fn apply_removed(&mut self, id: &ProductId) -> bool {
        match self.products.iter().position(|p| &p.id == id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    // --- Form transitions ---

    pub fn begin_edit(&mut self, product: &Product) {
        self.editing = Some(product.id.clone());
        self.draft = product.to_draft();
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft = Draft::default();
    }

    pub fn set_name(&mut self, name: String) {
        self.draft.name = name;
    }

    pub fn set_price(&mut self, raw: &str) -> Result<(), ManagerError> {
        match raw.trim().parse::<f64>() {
            Ok(price) if price.is_finite() => {
                self.draft.price = price;
                Ok(())
            }
            _ => Err(ManagerError::InvalidField {
                field: "price",
                value: raw.to_string(),
            }),
        }
    }

    pub fn set_stock(&mut self, raw: &str) -> Result<(), ManagerError> {
        let stock = raw.trim().parse::<u32>().map_err(|_| ManagerError::InvalidField {
            field: "stock",
            value: raw.to_string(),
        })?;
        self.draft.stock = stock;
        Ok(())
    }
}
