// Formatter configuration module
pub mod settings;
