use tracing::{error, info, instrument};

use super::config::SessionConfig;
use crate::page::Page;
use crate::session::{CartClient, CartService};

/// One page session: the running cart service and the client used to feed it
/// clicks.
pub struct CartSystem {
    pub cart_client: CartClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Binds the page's product controls and starts the service task.
    #[instrument(name = "cart_system", skip(config, page), fields(products = page.cards().len()))]
    pub fn new(config: &SessionConfig, page: Page) -> Self {
        info!("Starting cart session");

        let (service, cart_client) = CartService::new(config.channel_buffer, page);
        let handle = tokio::spawn(service.run());

        info!("Cart session started");
        Self { cart_client, handle }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart session");

        let _ = self.cart_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(format!("Cart service failed: {}", e));
        }

        info!("Cart session shutdown complete");
        Ok(())
    }
}
