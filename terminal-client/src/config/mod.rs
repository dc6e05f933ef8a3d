mod saved_state;

pub use saved_state::{MAX_AI_DELAY_MS, SavedState, get_config_manager};
