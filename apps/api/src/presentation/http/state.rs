use crate::{
    application::aquariums::use_case::AquariumService, config::Config,
    presentation::http::middleware::auth::AuthGuard,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthGuard>,
    pub aquariums: Arc<AquariumService>,
}

impl AppState {
    pub fn new(config: &Config, aquariums: AquariumService) -> Self {
        Self {
            auth: Arc::new(AuthGuard::new(&config.jwt_secret)),
            aquariums: Arc::new(aquariums),
        }
    }
}
