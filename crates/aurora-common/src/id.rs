/// Fresh string id for desktop icons and other persisted entities.
/// Window ids are NOT drawn from here; those come from the window
/// manager's monotonic counter so stacking stays comparable.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
