use thiserror::Error;

/// A required element is absent from the host page.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PageError {
    #[error("Display region not found: #{0}")]
    MissingRegion(String),
    #[error("Product control not found: {0}")]
    MissingControl(String),
}

/// Product card markup that cannot be bound.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarkupError {
    #[error("Invalid price {raw:?} on product card {name:?}")]
    InvalidPrice { name: String, raw: String },
    #[error("Duplicate product card: {0}")]
    DuplicateProduct(String),
}
