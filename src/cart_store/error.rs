use thiserror::Error;

use crate::page::PageError;

/// Errors that can occur while handling cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Product not in cart: {0}")]
    NotInCart(String),
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
    #[error("Page error: {0}")]
    Page(#[from] PageError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
