//! DTOs for todos_sea adapter.

#[derive(Debug, Clone)]
pub struct TodoCreate {
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
}

/// Partial update. `description: Some(None)` clears the column; `None` leaves
/// it untouched.
#[derive(Debug, Clone, Default)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}
