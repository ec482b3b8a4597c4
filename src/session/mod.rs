//! The page's event loop: a single service task owns the cart, the control
//! bindings and the page, and handles one click at a time to completion.

pub mod client;
pub mod messages;
pub mod service;

pub use client::*;
pub use service::*;
