use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<crate::config::Config>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}
