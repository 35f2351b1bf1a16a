use crate::handler::proxy_request;
use crate::state::ProxyState;

use axum::Router;

/// Build the proxy router: every method and path goes to the backend.
pub fn build_router(state: ProxyState) -> Router {
    Router::new().fallback(proxy_request).with_state(state)
}
