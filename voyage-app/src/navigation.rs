use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::debug;
use voyage_core::{Route, Router};

/// Native-stack navigation: TripHome at the root, screens pushed on top.
///
/// Navigating to a route that is already on the stack pops back to it instead of pushing a
/// duplicate. Every change is published on a watch channel so the host can re-render.
pub struct NavigationStack {
    stack: Mutex<Vec<Route>>,
    current_tx: watch::Sender<Route>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStack {
    pub fn new() -> Self {
        let (current_tx, _) = watch::channel(Route::TripHome);
        Self {
            stack: Mutex::new(vec![Route::TripHome]),
            current_tx,
        }
    }

    fn stack(&self) -> MutexGuard<'_, Vec<Route>> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current(&self) -> Route {
        *self.current_tx.borrow()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.stack().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.current_tx.subscribe()
    }

    /// Pop the top screen. Returns false at the root.
    pub fn go_back(&self) -> bool {
        let mut stack = self.stack();
        if stack.len() <= 1 {
            return false;
        }
        stack.pop();
        self.publish(&stack);
        true
    }

    fn publish(&self, stack: &[Route]) {
        if let Some(top) = stack.last() {
            debug!("Navigated to {}", top);
            self.current_tx.send_replace(*top);
        }
    }
}

impl Router for NavigationStack {
    fn navigate_to(&self, route: Route) {
        let mut stack = self.stack();
        match stack.iter().position(|r| *r == route) {
            Some(index) => stack.truncate(index + 1),
            None => stack.push(route),
        }
        self.publish(&stack);
    }
}
