use ferrous_dig_application::use_cases::HandleLookupUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<HandleLookupUseCase>,
}
