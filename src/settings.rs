//! Settings module.
//!
//! Database and collection descriptors, the fluent settings builder and the
//! settings file parser/serializer.
//!
//! # Examples
//!
//! ```rust
//! use harness::settings::{SettingsBuilder, SettingsFormat, SettingsParser, SettingsSerializer};
//!
//! let settings = SettingsBuilder::new()
//!     .add_database("test")
//!     .with_connection_string("mongodb://localhost:27017")
//!     .add_collection("people", true, "people-seed.json")
//!     .build()
//!     .unwrap();
//!
//! let json = SettingsSerializer::new().serialize(&settings).unwrap();
//! let reloaded = SettingsParser::new()
//!     .parse_string(&json, SettingsFormat::Json)
//!     .unwrap();
//! assert_eq!(reloaded.database_names(), vec!["test"]);
//! ```

pub use harness_settings::*;
