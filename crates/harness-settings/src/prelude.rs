//! Convenience re-exports for common usage.
//!
//! ```
//! use harness_settings::prelude::*;
//!
//! let builder = SettingsBuilder::new();
//! # let _ = builder;
//! ```

pub use crate::builder::SettingsBuilder;
pub use crate::error::{SettingsError, SettingsResult};
pub use crate::settings::{
	CollectionDescriptor, DatabaseDescriptor, HarnessConfiguration, SettingsFormat, SettingsParser,
	SettingsSerializer,
};
pub use crate::validation::{ValidationErrors, Violation};
