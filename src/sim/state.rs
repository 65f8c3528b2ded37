//! Site state and core excavation types
//!
//! Everything a dig derives from lives here: the disk sequence, the artifact
//! catalog, and the session counters.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::catalog::{builtin_catalog, Artifact};

/// One excavated patch of soil
///
/// Disks are append-only: once dug they never move, shrink, or merge. The
/// sequence order is the order the site was dug in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigDisk {
    /// Center in surface coordinates (may lie outside the surface)
    pub pos: Vec2,
    pub radius: f32,
}

impl DigDisk {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius,
        }
    }

    /// Full disk area; overlap with other disks is not subtracted
    #[inline]
    pub fn area(&self) -> f32 {
        crate::disk_area(self.radius)
    }
}

/// A gold fleck shown while the discovery flourish plays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub pos: Vec2,
    pub radius: f32,
}

/// Events the site queues for the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteEvent {
    /// An artifact crossed its coverage threshold; `index` points into the catalog
    ArtifactDiscovered { index: usize },
}

/// Complete state for one excavation site
///
/// Hosts create one per surface; nothing here is global, so independent
/// sites can run side by side.
#[derive(Debug, Clone)]
pub struct SiteState {
    /// Seed for dig jitter, sparkle placement, and soil speckles
    pub seed: u64,
    /// Surface width in surface units (the coverage denominator)
    pub width: f32,
    /// Surface height in surface units
    pub height: f32,
    /// Every excavated disk, in dig order
    pub disks: Vec<DigDisk>,
    /// Artifact records, scanned in catalog order after every dig
    pub catalog: Vec<Artifact>,
    /// How many catalog entries have been revealed
    pub artifacts_found: u32,
    /// Catalog index of the most recently revealed artifact
    pub current_artifact: Option<usize>,
    /// Discovery flourish intensity, set to 1.0 on reveal and fading to 0.0
    pub flourish: f32,
    /// Sparkle field for the active flourish; empty once it expires
    pub sparkles: Vec<Sparkle>,
    /// Derived percentage of the surface excavated, clamped to [0, 100]
    pub(super) coverage: f32,
    /// True between pointer press and release
    pub(super) excavating: bool,
    pub(super) rng: Pcg32,
    /// Pending events, drained by the display layer each frame
    pub(super) events: Vec<SiteEvent>,
}

impl SiteState {
    /// Create a pristine site over a `width` x `height` surface
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self {
            seed,
            width,
            height,
            disks: Vec::new(),
            catalog: builtin_catalog(),
            artifacts_found: 0,
            current_artifact: None,
            flourish: 0.0,
            sparkles: Vec::new(),
            coverage: 0.0,
            excavating: false,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Excavated percentage of the surface
    ///
    /// Overlapping disks each count in full, so the value can reach 100
    /// while soil is still visible.
    #[inline]
    pub fn coverage(&self) -> f32 {
        self.coverage
    }

    /// Whether a dig is currently in progress
    #[inline]
    pub fn is_excavating(&self) -> bool {
        self.excavating
    }

    /// Take all pending display events, oldest first
    pub fn drain_events(&mut self) -> Vec<SiteEvent> {
        std::mem::take(&mut self.events)
    }
}
