//! Behavior layer for the Beaker ecology sandbox.
//!
//! Defines the [`Behavior`] trait — the seam between the tick engine and
//! whatever drives an agent — plus a scripted [`Program`] interpreter as
//! the reference behavior and the [`ProgramMutator`] operator that perturbs
//! offspring programs.
//!
//! A behavior can only act through its [`BehaviorContext`]: move, turn,
//! scan for overlaps, and read its own state. It has no path to any
//! terminal population mutation; scans only append discoveries for the
//! engine's resolver to judge.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod mutate;
pub mod program;

pub use behavior::{Behavior, BehaviorContext, Discovery};
pub use mutate::{mutate_radius, MutatorError, ProgramMutator};
pub use program::{Op, Program};
