use std::sync::Arc;

use zeus_core::application::ZeusService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ZeusService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ZeusService) -> Self {
        Self { args, service }
    }
}
