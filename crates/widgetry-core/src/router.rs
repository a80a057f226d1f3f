//! Exact-match route table.
//!
//! A route is active iff its declared path equals the current location.
//! There is no prefix, wildcard or nested matching.

/// Declared routes in registration order.
///
/// Built once per page render; each entry becomes one mounted route.
#[derive(Clone, Debug)]
pub struct RouteTable<T> {
    routes: Vec<(String, T)>,
}

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Declare `payload` under `path`. Several payloads may share a path.
    pub fn register(&mut self, path: impl Into<String>, payload: T) -> &mut Self {
        self.routes.push((path.into(), payload));
        self
    }

    /// Consume the table, yielding `(path, payload)` in registration order.
    pub fn into_entries(self) -> impl Iterator<Item = (String, T)> {
        self.routes.into_iter()
    }
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
