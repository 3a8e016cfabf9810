//! Provisioning module.
//!
//! The collaborator contract implemented by datastore integrations, and the
//! seed data providers they read from.

pub use harness_core::data::{DataProvider, FileDataProvider, StaticDataProvider};
pub use harness_core::provisioning::*;
