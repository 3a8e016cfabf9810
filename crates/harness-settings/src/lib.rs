//! Hierarchical settings for the fixture harness.
//!
//! This crate describes which databases a test run needs and how each of
//! them is prepared:
//!
//! - **Configuration tree**: [`HarnessConfiguration`] holds ordered
//!   [`DatabaseDescriptor`]s, each with a connection string, a "drop first"
//!   flag and ordered [`CollectionDescriptor`]s that may be seeded from a data
//!   file
//! - **Fluent builder**: [`SettingsBuilder`] assembles and validates the tree
//! - **Settings files**: [`SettingsParser`] and [`SettingsSerializer`] read and
//!   write the tree as JSON or YAML
//!
//! # Features
//!
//! - `json` - JSON settings files (enabled by default)
//! - `yaml` - YAML settings files
//! - `full` - All features enabled
//!
//! # Quick Start
//!
//! ```
//! use harness_settings::prelude::*;
//!
//! let config = SettingsBuilder::new()
//!     .add_database("test")
//!     .with_connection_string("mongodb://localhost:27017")
//!     .drop_database_first()
//!     .add_collection("people", true, "data/people.json")
//!     .build()?;
//!
//! let json = SettingsSerializer::new().serialize(&config)?;
//! let reloaded = SettingsParser::new().parse_string(&json, SettingsFormat::Json)?;
//! assert_eq!(reloaded, config);
//! # Ok::<(), SettingsError>(())
//! ```
//!
//! Invalid configurations report every problem at once:
//!
//! ```
//! use harness_settings::prelude::*;
//!
//! let err = SettingsBuilder::new()
//!     .add_database("test")
//!     .add_database("test")
//!     .build()
//!     .unwrap_err();
//!
//! // two missing connection strings and one duplicate name
//! assert_eq!(err.violations().map(ValidationErrors::len), Some(3));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builder;
pub mod error;
pub mod prelude;
pub mod settings;
pub mod validation;

// Re-export commonly used types at crate root
pub use builder::SettingsBuilder;
pub use error::{SettingsError, SettingsResult};
pub use settings::{
	CollectionDescriptor, DatabaseDescriptor, HarnessConfiguration, SettingsFormat, SettingsParser,
	SettingsSerializer,
};
pub use validation::{ValidationErrors, Violation};
