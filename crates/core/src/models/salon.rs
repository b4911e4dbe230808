use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable service. `duration_minutes` is positive for every stored row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stylist {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub name: String,
    pub service_ids: Vec<Uuid>,
}

impl Stylist {
    pub fn offers(&self, service_id: Uuid) -> bool {
        self.service_ids.contains(&service_id)
    }
}
