pub use agora_core::app::App;
pub use agora_types::error::{ClResult, Error};

pub use tracing::{debug, info, warn};

// vim: ts=4
