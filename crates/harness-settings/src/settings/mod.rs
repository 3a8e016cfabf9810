//! Settings tree and settings file handling.
//!
//! - [`HarnessConfiguration`], [`DatabaseDescriptor`], [`CollectionDescriptor`] - the configuration tree
//! - [`SettingsFormat`] - supported file formats
//! - [`SettingsParser`] - load and validate settings files
//! - [`SettingsSerializer`] - write settings files

mod format;
mod parser;
mod serializer;

pub use format::{CollectionDescriptor, DatabaseDescriptor, HarnessConfiguration, SettingsFormat};
pub use parser::SettingsParser;
pub use serializer::SettingsSerializer;
