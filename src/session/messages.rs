use tokio::sync::oneshot;

use crate::binder::ControlState;
use crate::cart_store::CartError;
use crate::view::CartView;

#[cfg(test)]
use crate::domain::CartLineItem;
#[cfg(test)]
use crate::page::Page;

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Commands delivered to [`super::CartService`]. Every click variant replies
/// with the sidebar as rendered after the click.
#[derive(Debug)]
pub enum CartRequest {
    ClickAdd {
        product: String,
        respond_to: ServiceResponse<CartView, CartError>,
    },
    ClickIncrement {
        product: String,
        respond_to: ServiceResponse<CartView, CartError>,
    },
    ClickDecrement {
        product: String,
        respond_to: ServiceResponse<CartView, CartError>,
    },
    Snapshot {
        respond_to: ServiceResponse<CartView, CartError>,
    },
    ControlState {
        product: String,
        respond_to: ServiceResponse<Option<ControlState>, CartError>,
    },
    Shutdown,
    #[cfg(test)]
    GetLineItems {
        respond_to: ServiceResponse<Vec<CartLineItem>, CartError>,
    },
    #[cfg(test)]
    GetPage {
        respond_to: ServiceResponse<Page, CartError>,
    },
}
