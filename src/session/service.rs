use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use super::client::CartClient;
use super::messages::{CartRequest, ServiceResponse};
use crate::binder::ButtonBinder;
use crate::cart_store::{CartError, CartStore, Decrement};
use crate::page::Page;
use crate::view::CartView;

macro_rules! send_error {
    ($respond_to:expr, $error:expr) => {{
        let _ = $respond_to.send(Err($error));
        return;
    }};
}

/// Owns one page session. Each request mutates the store, repaints the
/// affected control and re-renders the sidebar before the next is read.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    store: CartStore,
    binder: ButtonBinder,
    page: Page,
}

impl CartService {
    pub fn new(buffer_size: usize, mut page: Page) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let binder = ButtonBinder::bind(&mut page);
        let service = Self {
            receiver,
            store: CartStore::new(),
            binder,
            page,
        };
        let client = CartClient::new(sender);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");

        if let Err(e) = CartView::render(&self.store).write_to(&mut self.page) {
            warn!(error = %e, "Initial sidebar render failed");
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::ClickAdd { product, respond_to } => {
                    self.handle_click_add(product, respond_to);
                }
                CartRequest::ClickIncrement { product, respond_to } => {
                    self.handle_click_increment(product, respond_to);
                }
                CartRequest::ClickDecrement { product, respond_to } => {
                    self.handle_click_decrement(product, respond_to);
                }
                CartRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(CartView::render(&self.store)));
                }
                CartRequest::ControlState { product, respond_to } => {
                    let _ = respond_to.send(Ok(self.binder.state(&product)));
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
                #[cfg(test)]
                CartRequest::GetLineItems { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.line_items().to_vec()));
                }
                #[cfg(test)]
                CartRequest::GetPage { respond_to } => {
                    let _ = respond_to.send(Ok(self.page.clone()));
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(fields(product = %product), skip(self, product, respond_to))]
    fn handle_click_add(&mut self, product: String, respond_to: ServiceResponse<CartView, CartError>) {
        debug!("Processing add click");

        let Some(price) = self.card_price(&product) else {
            error!("No product card for add click");
            send_error!(respond_to, CartError::UnknownProduct(product));
        };

        let quantity = self.store.add_or_increment(&product, price);
        info!(quantity, price, "Product added to cart");

        let _ = respond_to.send(self.refresh(&product));
    }

    #[instrument(fields(product = %product), skip(self, product, respond_to))]
    fn handle_click_increment(&mut self, product: String, respond_to: ServiceResponse<CartView, CartError>) {
        debug!("Processing increment click");

        let quantity = match self.store.increment(&product) {
            Ok(quantity) => quantity,
            Err(e) => {
                warn!(error = %e, "Increment ignored");
                send_error!(respond_to, e);
            }
        };
        info!(quantity, "Quantity incremented");

        let _ = respond_to.send(self.refresh(&product));
    }

    #[instrument(fields(product = %product), skip(self, product, respond_to))]
    fn handle_click_decrement(&mut self, product: String, respond_to: ServiceResponse<CartView, CartError>) {
        debug!("Processing decrement click");

        match self.store.decrement(&product) {
            Ok(Decrement::Remaining(quantity)) => info!(quantity, "Quantity decremented"),
            Ok(Decrement::Removed) => {
                info!("Product removed from cart");
                if self.store.is_empty() {
                    debug!("Cart is empty");
                }
            }
            Err(e) => {
                warn!(error = %e, "Decrement ignored");
                send_error!(respond_to, e);
            }
        }

        let _ = respond_to.send(self.refresh(&product));
    }

    fn card_price(&self, product: &str) -> Option<f64> {
        let handle = self.binder.handle(product)?;
        self.page.card(handle).map(|card| card.product.price)
    }

    /// Repaints the product's control from its cart quantity and rewrites
    /// the sidebar.
    fn refresh(&mut self, product: &str) -> Result<CartView, CartError> {
        let quantity = self.store.get(product).map(|item| item.quantity);
        let state = self.binder.reflect(&mut self.page, product, quantity)?;
        debug!(state = ?state, "Control repainted");

        let view = CartView::render(&self.store);
        if let Err(e) = view.write_to(&mut self.page) {
            error!(error = %e, "Sidebar render failed");
            return Err(e.into());
        }

        debug!(line_items = self.store.len(), title = %view.title, total = %view.total, "Sidebar rendered");
        Ok(view)
    }
}
