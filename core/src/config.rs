/// Per-screen configuration, passed to the controller at construction
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Session-store key under which the signed-in viewer's identifier is
    /// persisted by the app shell
    pub viewer_id_key: String,
    /// Distance from the content's bottom edge, in layout units, at which a
    /// scroll position counts as near-end and arms pagination
    pub near_end_threshold: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            viewer_id_key: "userId".to_string(),
            near_end_threshold: 20.0,
        }
    }
}
