use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use super::messages::CartRequest;
use crate::binder::ControlState;
use crate::cart_store::CartError;
use crate::view::CartView;

#[cfg(test)]
use crate::domain::CartLineItem;
#[cfg(test)]
use crate::page::Page;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Handle for dispatching clicks to a running [`super::CartService`].
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(CartClient => fn click_add(product: String) -> CartView as CartRequest::ClickAdd, Error = CartError);
client_method!(CartClient => fn click_increment(product: String) -> CartView as CartRequest::ClickIncrement, Error = CartError);
client_method!(CartClient => fn click_decrement(product: String) -> CartView as CartRequest::ClickDecrement, Error = CartError);
client_method!(CartClient => fn snapshot() -> CartView as CartRequest::Snapshot, Error = CartError);
client_method!(CartClient => fn control_state(product: String) -> Option<ControlState> as CartRequest::ControlState, Error = CartError);

#[cfg(test)]
client_method!(CartClient => fn get_line_items() -> Vec<CartLineItem> as CartRequest::GetLineItems, Error = CartError);
#[cfg(test)]
client_method!(CartClient => fn get_page() -> Page as CartRequest::GetPage, Error = CartError);
