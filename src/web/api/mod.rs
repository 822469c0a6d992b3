use std::sync::Arc;

use usvg::fontdb;

use crate::assets::AssetStore;

pub mod render;

/// Shared, read-only state handed to every request handler. No locks: nothing
/// here is mutated after startup.
pub struct RenderContext {
    pub assets: AssetStore,
    pub fontdb: Arc<fontdb::Database>,
}

// Type alias for our application state
pub type AppState = Arc<RenderContext>;
