use crate::clock::Clock;
use crate::fetch::HttpClient;
use crate::tcl::TclConfig;
use std::sync::Arc;

/// Shared, read-only dependencies of the handlers.
pub struct AppState {
    pub client: Arc<dyn HttpClient>,
    pub tcl: TclConfig,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(client: Arc<dyn HttpClient>, tcl: TclConfig, clock: Arc<dyn Clock>) -> Self {
        Self { client, tcl, clock }
    }
}
