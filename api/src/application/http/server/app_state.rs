use std::sync::Arc;

use hunger_rescue_core::application::RescueService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RescueService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RescueService) -> Self {
        Self { args, service }
    }
}
