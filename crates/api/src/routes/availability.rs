use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/stylists/:id/availability",
        get(handlers::availability::get_stylist_availability),
    )
}
