mod app_system;
mod binder;
mod cart_store;
mod domain;
mod page;
mod session;
mod view;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, warn, Instrument};

use crate::app_system::{setup_tracing, CartSystem, SessionConfig};
use crate::page::{MarkupError, Page, ProductCard};

/// `data-name` / `data-price` pairs of the demo storefront.
const DEMO_CARDS: [(&str, &str); 4] = [
    ("Waffle with Berries", "6.50"),
    ("Vanilla Bean Crème Brûlée", "7.00"),
    ("Macaron Mix of Five", "8.00"),
    ("Classic Tiramisu", "5.50"),
];

fn demo_page() -> Result<Page, MarkupError> {
    let cards = DEMO_CARDS
        .iter()
        .map(|(name, price)| ProductCard::from_attributes(name, price))
        .collect::<Result<Vec<_>, _>>()?;
    Page::with_cart_sidebar(cards)
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SessionConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config);

    info!("Starting cart widget demo");

    let page = demo_page().map_err(|e| e.to_string())?;
    let system = CartSystem::new(&config, page);
    let client = system.cart_client.clone();

    let span = tracing::info_span!("shopping");
    async {
        for product in ["Waffle with Berries", "Classic Tiramisu", "Classic Tiramisu"] {
            match client.click_add(product.to_string()).await {
                Ok(view) => info!(product, title = %view.title, total = %view.total, "Added to cart"),
                Err(e) => error!(product, error = %e, "Add failed"),
            }
        }

        if let Err(e) = client.click_increment("Waffle with Berries".to_string()).await {
            warn!(error = %e, "Increment failed");
        }
        for _ in 0..2 {
            if let Err(e) = client.click_decrement("Waffle with Berries".to_string()).await {
                warn!(error = %e, "Decrement failed");
            }
        }
    }
    .instrument(span)
    .await;

    let view = client.snapshot().await.map_err(|e| e.to_string())?;
    info!(title = %view.title, "Final cart");
    for entry in &view.entries {
        info!(item = %entry.label, line_total = %entry.line_total, "Cart line");
    }
    info!(total = %view.total, "Cart total");

    let waffle = client
        .control_state("Waffle with Berries".to_string())
        .await
        .map_err(|e| e.to_string())?;
    info!(state = ?waffle, "Waffle control state");

    drop(client);
    system.shutdown().await?;

    info!("Cart widget demo completed");
    Ok(())
}
