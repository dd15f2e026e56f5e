//! Session store port

/// Read access to the device-local session store.
///
/// The controller reads the signed-in user's identifier through this
/// port at the point of each use rather than caching it, so a sign-in
/// that lands after construction is still picked up.
pub trait SessionStore: Send + Sync {
    /// Look up a string value by key. Returns `None` when the key is
    /// missing.
    fn get_string(&self, key: &str) -> Option<String>;
}
