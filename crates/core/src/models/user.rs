use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated caller of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: Uuid,
    pub is_admin: bool,
    /// Set when the user account belongs to a stylist.
    pub stylist_id: Option<Uuid>,
}

impl CurrentUser {
    pub fn is_stylist(&self) -> bool {
        self.stylist_id.is_some()
    }

    pub fn is_assigned_stylist(&self, stylist_id: Uuid) -> bool {
        self.stylist_id == Some(stylist_id)
    }
}
