//! Per-product "Add to Cart" controls and their Idle/Active presentation.

use std::collections::HashMap;

use tracing::debug;

use crate::page::{ControlHandle, Page, PageError, ProductCard};

const IDLE_BUTTON_CLASSES: [&str; 2] = ["bg-white", "text-gray-800"];
const ACTIVE_BUTTON_CLASSES: [&str; 2] = ["bg-orange-500", "text-white"];
const ACTIVE_IMAGE_CLASSES: [&str; 2] = ["border-2", "border-orange-500"];

const IDLE_BUTTON_HTML: &str =
    r#"<img class="w-5 h-5 mr-2" src="assets/icon-add-to-cart.svg" alt="Cart Icon" />Add to Cart"#;

/// Presentation state of one product control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    /// Cart icon and "Add to Cart".
    Idle,
    /// Decrement button, quantity readout, increment button.
    Active { quantity: u32 },
}

#[derive(Debug, Clone, Copy)]
struct Binding {
    handle: ControlHandle,
    state: ControlState,
}

/// Associates each product name with its control on the page and keeps the
/// control's presentation in step with the cart.
#[derive(Debug, Default)]
pub struct ButtonBinder {
    bindings: HashMap<String, Binding>,
}

impl ButtonBinder {
    /// Binds every product card on the page and paints it Idle.
    pub fn bind(page: &mut Page) -> Self {
        let mut bindings = HashMap::new();
        for index in 0..page.cards().len() {
            let handle = ControlHandle(index);
            if let Some(card) = page.card_mut(handle) {
                paint_idle(card);
                bindings.insert(
                    card.product.name.clone(),
                    Binding { handle, state: ControlState::Idle },
                );
            }
        }
        debug!(controls = bindings.len(), "Bound product controls");
        Self { bindings }
    }

    pub fn handle(&self, product: &str) -> Option<ControlHandle> {
        self.bindings.get(product).map(|b| b.handle)
    }

    pub fn state(&self, product: &str) -> Option<ControlState> {
        self.bindings.get(product).map(|b| b.state)
    }

    /// Brings a control in line with the product's cart quantity: `Some` means
    /// Active with that readout, `None` means the item left the cart.
    pub fn reflect(
        &mut self,
        page: &mut Page,
        product: &str,
        quantity: Option<u32>,
    ) -> Result<ControlState, PageError> {
        let missing = || PageError::MissingControl(product.to_string());
        let binding = self.bindings.get_mut(product).ok_or_else(missing)?;
        let card = page.card_mut(binding.handle).ok_or_else(missing)?;

        let next = match quantity {
            Some(quantity) => ControlState::Active { quantity },
            None => ControlState::Idle,
        };

        match (binding.state, next) {
            (ControlState::Idle, ControlState::Idle) => {}
            (_, ControlState::Idle) => {
                paint_idle(card);
                debug!(product = %product, classes = %card.button.classes.as_attr(), "Control reset to idle");
            }
            (ControlState::Idle, ControlState::Active { quantity }) => {
                paint_active(card, quantity);
                debug!(product = %product, classes = %card.button.classes.as_attr(), "Control switched to quantity stepper");
            }
            (ControlState::Active { .. }, ControlState::Active { quantity }) => {
                card.button.inner_html = stepper_html(quantity);
            }
        }

        binding.state = next;
        Ok(next)
    }
}

fn paint_idle(card: &mut ProductCard) {
    card.button.classes.remove(ACTIVE_BUTTON_CLASSES);
    card.button.classes.add(IDLE_BUTTON_CLASSES);
    card.image.classes.remove(ACTIVE_IMAGE_CLASSES);
    card.button.inner_html = IDLE_BUTTON_HTML.to_string();
}

fn paint_active(card: &mut ProductCard, quantity: u32) {
    card.button.classes.remove(IDLE_BUTTON_CLASSES);
    card.button.classes.add(ACTIVE_BUTTON_CLASSES);
    card.image.classes.add(ACTIVE_IMAGE_CLASSES);
    card.button.inner_html = stepper_html(quantity);
}

fn stepper_html(quantity: u32) -> String {
    format!(
        concat!(
            r#"<div class="flex items-center justify-center space-x-2">"#,
            r#"<button type="button" class="minus-btn text-white font-bold">-</button>"#,
            r#"<span class="quantity">{}</span>"#,
            r#"<button type="button" class="plus-btn text-white font-bold">+</button>"#,
            "</div>"
        ),
        quantity
    )
}
