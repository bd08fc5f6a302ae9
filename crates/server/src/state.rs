use std::sync::Arc;

use service::ContentServices;

/// Shared handler state: the per-kind services, built once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub services: Arc<ContentServices>,
}

impl ServerState {
    pub fn new(services: ContentServices) -> Self {
        Self { services: Arc::new(services) }
    }
}
