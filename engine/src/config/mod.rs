//! Loading and saving the record the presentation shell persists between
//! runs. The engine only produces and consumes plain data; where and how it
//! is stored is decided here by the provider and serializer.

mod config_content_provider;
mod config_manager;
mod config_serializer;
mod validate;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, MemoryContentProvider,
};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;
