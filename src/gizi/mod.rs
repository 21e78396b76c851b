pub mod client;
pub mod dto;
pub mod handlers;
pub mod page;
pub mod render;
pub mod services;
pub mod validate;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::page_routes())
}
