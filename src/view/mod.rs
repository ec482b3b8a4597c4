//! Projection of the cart into the sidebar's three display regions.

use crate::cart_store::CartStore;
use crate::page::{Page, PageError, CART_ITEMS_ID, CART_TITLE_ID, CART_TOTAL_ID};

/// One row of the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntryView {
    /// `name (xQuantity)`
    pub label: String,
    /// `$lineTotal`
    pub line_total: String,
}

impl CartEntryView {
    pub fn to_html(&self) -> String {
        format!(
            r#"<li class="flex justify-between"><span>{}</span><span>{}</span></li>"#,
            self.label, self.line_total
        )
    }
}

/// Everything the sidebar shows for a given cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub title: String,
    pub entries: Vec<CartEntryView>,
    pub total: String,
}

impl CartView {
    /// Rebuilds the view from scratch; the cart is only read.
    pub fn render(cart: &CartStore) -> Self {
        let entries = cart
            .line_items()
            .iter()
            .map(|item| CartEntryView {
                label: format!("{} (x{})", item.name, item.quantity),
                line_total: format_price(item.line_total()),
            })
            .collect();

        Self {
            title: format!("Your Cart ({})", cart.total_item_count()),
            entries,
            total: format_price(cart.total_price()),
        }
    }

    /// Overwrites the title, item list and total regions.
    pub fn write_to(&self, page: &mut Page) -> Result<(), PageError> {
        page.set_text(CART_TITLE_ID, self.title.clone())?;
        page.replace_children(
            CART_ITEMS_ID,
            self.entries.iter().map(CartEntryView::to_html).collect(),
        )?;
        page.set_text(CART_TOTAL_ID, self.total.clone())
    }
}

/// Dollar amount rounded to cents. Exact half-cent ties round away from
/// zero; everything else rounds to the nearest cent of the exact value.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", round_cents(amount))
}

fn round_cents(amount: f64) -> f64 {
    // also turns -0.0 into 0.0
    if amount == 0.0 {
        return 0.0;
    }

    let magnitude = amount.abs();
    let scaled = magnitude * 100.0;
    // the scaled value sits on .5 and the multiplication lost nothing
    let exact_tie = scaled.fract() == 0.5 && magnitude.mul_add(100.0, -scaled) == 0.0;
    if exact_tie {
        amount.signum() * (scaled.floor() + 1.0) / 100.0
    } else {
        amount
    }
}
