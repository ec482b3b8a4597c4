//! # Mock Framework
//!
//! Hands out a [`CartClient`] whose requests land on a receiver the test
//! controls, so callers of the client can be tested without a running
//! [`crate::session::CartService`].

use tokio::sync::mpsc;

use crate::cart_store::CartError;
use crate::session::messages::{CartRequest, ServiceResponse};
use crate::session::CartClient;
use crate::view::CartView;

pub fn create_mock_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

/// Helper to verify that the next message is an add click
pub async fn expect_click_add(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(String, ServiceResponse<CartView, CartError>)> {
    match receiver.recv().await {
        Some(CartRequest::ClickAdd { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a decrement click
pub async fn expect_click_decrement(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(String, ServiceResponse<CartView, CartError>)> {
    match receiver.recv().await {
        Some(CartRequest::ClickDecrement { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::CartEntryView;

    #[tokio::test]
    async fn test_mock_client_round_trip() {
        let (client, mut receiver) = create_mock_client(10);

        let click = tokio::spawn(async move { client.click_add("Waffle".to_string()).await });

        let (product, responder) = expect_click_add(&mut receiver).await.expect("Expected add click");
        assert_eq!(product, "Waffle");
        let view = CartView {
            title: "Your Cart (1)".into(),
            entries: vec![CartEntryView { label: "Waffle (x1)".into(), line_total: "$6.50".into() }],
            total: "$6.50".into(),
        };
        responder.send(Ok(view.clone())).unwrap();

        assert_eq!(click.await.unwrap(), Ok(view));
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let click = tokio::spawn(async move { client.click_decrement("Waffle".to_string()).await });

        let (_, responder) = expect_click_decrement(&mut receiver).await.expect("Expected decrement click");
        drop(responder);

        assert_eq!(
            click.await.unwrap(),
            Err(CartError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }

    #[tokio::test]
    async fn test_closed_service_surfaces_as_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        assert_eq!(
            client.snapshot().await,
            Err(CartError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
