//! Navigation contract.
//!
//! Opaque "go to route with payload" calls. The checkout route carries
//! the current cart contents so the checkout page can render without a
//! shared server-side session.

use crate::cart::LineItem;
use std::sync::Mutex;

/// A routable destination in the storefront.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Landing page.
    Home,
    /// Product catalog / ordering page.
    Catalog,
    /// Checkout, carrying the cart contents as payload.
    Checkout { items: Vec<LineItem> },
    /// Order history.
    Orders,
}

/// Navigation collaborator.
pub trait Navigator: Send + Sync {
    /// Navigate to the given route.
    fn go_to(&self, route: Route);
}

/// Navigator that records visited routes, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All routes visited, in order.
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: Route) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route);
        }
    }
}
