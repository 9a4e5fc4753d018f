//! Pure rendering of the product state into a form and a list.

use std::fmt;

use crate::domain::ProductId;
use crate::manager_actor::{FormMode, ProductState};

pub const TITLE: &str = "Stock Management App";

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub form: FormView,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub fields: [FieldView; 3],
    pub submit: SubmitButton,
    /// Only shown while editing.
    pub show_cancel: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitButton {
    Add,
    Update(ProductId),
}

impl SubmitButton {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitButton::Add => "Add Product",
            SubmitButton::Update(_) => "Update Product",
        }
    }
}

/// One list entry. Edit and Delete both address the row by `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: ProductId,
    pub label: String,
}

pub fn render(state: &ProductState) -> View {
    let draft = state.draft();
    let submit = match state.mode() {
        FormMode::Create => SubmitButton::Add,
        FormMode::Edit(id) => SubmitButton::Update(id),
    };
    let show_cancel = matches!(submit, SubmitButton::Update(_));

    let rows = state
        .products()
        .iter()
        .map(|p| RowView {
            id: p.id.clone(),
            label: format!("{} - Price: {} IDR - Stock: {}", p.name, p.price, p.stock),
        })
        .collect();

    View {
        form: FormView {
            fields: [
                FieldView {
                    placeholder: "Product Name",
                    value: draft.name.clone(),
                },
                FieldView {
                    placeholder: "Price (IDR)",
                    value: draft.price.to_string(),
                },
                FieldView {
                    placeholder: "Stock Quantity",
                    value: draft.stock.to_string(),
                },
            ],
            submit,
            show_cancel,
        },
        rows,
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f)?;
        for field in &self.form.fields {
            writeln!(f, "  {:<16}{}", format!("{}:", field.placeholder), field.value)?;
        }
        write!(f, "  [{}]", self.form.submit.label())?;
        if self.form.show_cancel {
            write!(f, " [Cancel Edit]")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        if self.rows.is_empty() {
            writeln!(f, "  (no products)")?;
        }
        for row in &self.rows {
            writeln!(f, "  #{:<4} {}  [edit {id}] [delete {id}]", row.id.to_string(), row.label, id = row.id)?;
        }
        Ok(())
    }
}
