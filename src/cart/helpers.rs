//! Shopping Cart Helpers
//!
//! Session resolution for the cart routes and small formatting utilities.

use super::models::CartLine;
use axum::http::{header, HeaderMap, HeaderValue};
use uuid::Uuid;

/// Cookie carrying the shopper's cart session id
pub const SESSION_COOKIE: &str = "cart_session";

/// Returns the session id from the request cookies, or a freshly generated
/// one. The boolean is `true` when the id is new and must be sent back.
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    match session_from_cookies(headers) {
        Some(id) => (id, false),
        None => (Uuid::new_v4().simple().to_string(), true),
    }
}

/// Session id carried by the request cookies, if any.
pub fn session_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// `Set-Cookie` value binding the client to `session_id`.
pub fn session_cookie(session_id: &str) -> Option<HeaderValue> {
    let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, session_id);
    HeaderValue::from_str(&cookie).ok()
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Apple, 1x Banana"`.
pub fn format_item_summary(items: &[CartLine]) -> String {
    items
        .iter()
        .map(|line| format!("{}x {}", line.quantity, line.product.title))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use serde_json::json;

    #[test]
    fn reads_session_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; cart_session=abc123"),
        );

        assert_eq!(resolve_session_id(&headers), ("abc123".to_string(), false));
    }

    #[test]
    fn generates_session_when_cookie_missing() {
        let (id, is_new) = resolve_session_id(&HeaderMap::new());
        assert!(is_new);
        assert_eq!(id.len(), 32);
    }

    #[test]
    fn empty_session_cookie_counts_as_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("cart_session="));
        assert!(resolve_session_id(&headers).1);
    }

    #[test]
    fn summary_lists_quantities_and_titles() {
        let apple: Product =
            serde_json::from_value(json!({ "id": 1, "title": "Apple", "price": 1.0 })).unwrap();
        let banana: Product =
            serde_json::from_value(json!({ "id": 2, "title": "Banana", "price": 1.0 })).unwrap();
        let lines = vec![
            CartLine {
                product: apple,
                quantity: 2,
            },
            CartLine {
                product: banana,
                quantity: 1,
            },
        ];

        assert_eq!(format_item_summary(&lines), "2x Apple, 1x Banana");
    }
}
