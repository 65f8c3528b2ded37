//! Deterministic excavation module
//!
//! All dig logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Append, recompute, discovery-scan order fixed within each sample
//! - No rendering or platform dependencies

pub mod catalog;
mod dig;
pub mod state;

pub use catalog::{builtin_catalog, Artifact};
pub use state::{DigDisk, SiteEvent, Sparkle, SiteState};
