pub mod intent;
pub mod models;
pub mod response;

pub use intent::{fallback_intent, fallback_result, FALLBACK_REASONING};
pub use models::*;
pub use response::{clean_model_output, parse_model_output, ModelOutput};
