//! REST API handlers for shopping cart operations
//!
//! Every route resolves the shopper's session from the `cart_session` cookie,
//! applies one cart operation and answers with the resulting cart view.
//! Only routes that put something into a cart create a session; reads and
//! removals on an unknown session answer with an empty cart.

use super::{helpers::*, models::*, state::SharedState, store::CartStore};
use crate::{catalog::listing::clamp_requested_quantity, error::ApiError};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/cart", get(get_cart))
        .route("/api/cart/items", post(add_item))
        .route("/api/cart/items/:id", patch(update_item).delete(remove_item))
        .route("/api/cart/open", put(set_open))
}

/// Wraps a cart view into a response, issuing the session cookie when the
/// session was created by this request.
fn cart_response(view: CartView, session_id: &str, is_new_session: bool) -> Response {
    let mut response = Json(view).into_response();

    if is_new_session {
        if let Some(cookie) = session_cookie(session_id) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }

    response
}

/// Applies `f` to an existing session cart, or returns the empty view.
fn existing_cart_view(
    state: &SharedState,
    headers: &HeaderMap,
    f: impl FnOnce(&mut CartStore),
) -> Json<CartView> {
    let session_id = session_from_cookies(headers);
    let view = session_id
        .as_deref()
        .and_then(|id| {
            state.with_existing_cart(id, |cart| {
                f(cart);
                cart.view()
            })
        })
        .unwrap_or_else(|| CartStore::new().view());
    Json(view)
}

/// Endpoint: GET /api/cart
async fn get_cart(State(state): State<SharedState>, headers: HeaderMap) -> Json<CartView> {
    let session_id = session_from_cookies(&headers);
    Json(state.cart_view(session_id.as_deref()))
}

/// Endpoint: POST /api/cart/items
/// Resolves the product through the catalog and adds it. Unless the client
/// opts out, the requested quantity is clamped to the available stock.
async fn add_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<AddItemInput>,
) -> Result<Response, ApiError> {
    let product = state
        .catalog
        .get_product(payload.product_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to resolve product {}: {}", payload.product_id, e);
            ApiError::from(e)
        })?;

    let quantity = if payload.clamp_to_stock {
        clamp_requested_quantity(&product, payload.quantity)
            .ok_or(ApiError::OutOfStock(product.id))?
    } else {
        payload.quantity
    };

    let (session_id, is_new_session) = resolve_session_id(&headers);
    let view = state.with_cart(&session_id, |cart| {
        cart.add_to_cart(product, quantity);
        tracing::info!(
            session = %session_id,
            "cart updated: {}",
            format_item_summary(cart.items())
        );
        cart.view()
    });

    Ok(cart_response(view, &session_id, is_new_session))
}

/// Endpoint: PATCH /api/cart/items/:id
async fn update_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(product_id): Path<u64>,
    Json(payload): Json<UpdateQuantityInput>,
) -> Json<CartView> {
    existing_cart_view(&state, &headers, |cart| {
        cart.update_quantity(product_id, payload.quantity)
    })
}

/// Endpoint: DELETE /api/cart/items/:id
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(product_id): Path<u64>,
) -> Json<CartView> {
    existing_cart_view(&state, &headers, |cart| cart.remove_from_cart(product_id))
}

/// Endpoint: PUT /api/cart/open
/// Closing the panel of an unknown session changes nothing and creates
/// nothing.
async fn set_open(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<CartOpenInput>,
) -> Response {
    if !payload.open {
        return existing_cart_view(&state, &headers, |cart| cart.set_cart_open(false))
            .into_response();
    }

    let (session_id, is_new_session) = resolve_session_id(&headers);
    let view = state.with_cart(&session_id, |cart| {
        cart.set_cart_open(true);
        cart.view()
    });
    cart_response(view, &session_id, is_new_session)
}
