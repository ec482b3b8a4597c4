/// One product's entry in the cart.
///
/// Line items carry no reference to the control that created them; the
/// association lives in [`crate::binder::ButtonBinder`].
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLineItem {
    /// Creates a line item for the first "add" of a product.
    pub fn new(name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
