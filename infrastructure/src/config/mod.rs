//! Configuration loading and raw file types

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDirectorConfig, FileEnginesConfig, FilePanelConfig,
    FileProviderConfig, FileSeatConfig,
};
pub use loader::ConfigLoader;
