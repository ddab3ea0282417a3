use std::sync::Arc;

mod settings;

pub use settings::Settings;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone, Debug)]
pub struct Context {
    pub settings: Arc<Settings>,
}

impl Context {
    /// Create a new application context.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}
