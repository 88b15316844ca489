//! Route handling
//!
//! The client broadcasts `SessionExpired` instead of navigating; this is
//! the subscriber side. `Navigator` holds the current route and
//! `watch_session` forces the login route whenever the session dies,
//! whatever page the user was on.

use std::sync::{Arc, RwLock};

use bizhub_client::ClientEvent;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    PlanSelection,
    Dashboard,
    Products,
    Customers,
    Orders,
    Subscriptions,
}

/// Current-route holder with an expiry watcher.
#[derive(Debug)]
pub struct Navigator {
    current: RwLock<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Route::Landing),
        }
    }

    pub fn current(&self) -> Route {
        *self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn navigate(&self, route: Route) {
        tracing::debug!(?route, "Navigating");
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = route;
    }

    /// React to a single client event.
    pub fn handle_event(&self, event: ClientEvent) {
        match event {
            ClientEvent::SessionExpired => {
                tracing::info!("Session expired, returning to login");
                self.navigate(Route::Login);
            }
        }
    }

    /// Spawn a task that applies client events until the channel closes.
    /// Two concurrent expiries both land on the login route; the second
    /// navigation is a harmless no-op.
    pub fn watch_session(
        self: Arc<Self>,
        mut events: broadcast::Receiver<ClientEvent>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => self.handle_event(event),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Missed client events");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
