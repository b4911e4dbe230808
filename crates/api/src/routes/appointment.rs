use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/appointments",
            post(handlers::appointment::create_appointment)
                .get(handlers::appointment::list_my_appointments),
        )
        .route(
            "/api/appointments/:id",
            get(handlers::appointment::get_appointment)
                .patch(handlers::appointment::toggle_appointment_status)
                .delete(handlers::appointment::delete_appointment),
        )
        .route(
            "/api/stylists/:id/appointments",
            get(handlers::appointment::list_stylist_appointments),
        )
}
