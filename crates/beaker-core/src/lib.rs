//! Core types for the Beaker ecology sandbox.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! stable identifiers, the tagged event union, the validated world
//! configuration, the pure heat classifier, and the tombstoning entity
//! store that the rest of the workspace builds on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod event;
pub mod heat;
pub mod id;
pub mod store;

pub use config::{EdibilityPolicy, WorldConfig};
pub use error::{ConfigError, StoreError};
pub use event::{DeathCause, Event};
pub use heat::HeatClassifier;
pub use id::{AgentId, HeatClass, ResourceId, StableId, TickId};
pub use store::Store;
