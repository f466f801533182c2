//! Toroidal 2D surface for the Beaker ecology sandbox.
//!
//! The surface owns the transient spatial state of every body — center and
//! radius — and answers overlap queries. It does not own identity: each
//! body carries the stable id of its owner as an [`OwnerTag`], and callers
//! address bodies through generation-scoped [`BodyHandle`]s that go stale
//! the moment the body is removed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod facing;
pub mod handle;
pub mod surface;

pub use error::SurfaceError;
pub use facing::Facing;
pub use handle::{BodyHandle, BodyKind, OwnerTag};
pub use surface::{Overlap, Point, Surface};
