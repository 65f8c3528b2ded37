//! Dig Site - an interactive archaeological dig canvas
//!
//! Core modules:
//! - `sim`: Deterministic excavation state (disks, coverage, discoveries)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Visual/accessibility preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Site configuration constants
pub mod consts {
    /// Default surface dimensions (CSS pixels) when the host gives no size
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Disks appended per pointer sample
    pub const DISKS_PER_SAMPLE: usize = 2;
    /// Sample jitter half-range: disk centers land within ±this of the pointer
    pub const SAMPLE_JITTER: f32 = 10.0;
    /// Disk radius range [min, max)
    pub const DISK_RADIUS_MIN: f32 = 8.0;
    pub const DISK_RADIUS_MAX: f32 = 20.0;

    /// How long a dig dust mote lives in the DOM
    pub const DUST_LIFETIME_MS: i32 = 1_000;

    /// Discovery flourish: fade time, sparkle count, sparkle radius range
    pub const FLOURISH_SECS: f32 = 1.0;
    pub const FLOURISH_SPARKLES: usize = 20;
    pub const SPARKLE_RADIUS_MIN: f32 = 1.0;
    pub const SPARKLE_RADIUS_MAX: f32 = 4.0;

    /// Gold frame drawn around the site on discovery
    pub const FRAME_INSET: f32 = 10.0;
    pub const FRAME_WIDTH: f32 = 5.0;
}

/// Area of an excavated disk
#[inline]
pub fn disk_area(radius: f32) -> f32 {
    std::f32::consts::PI * radius * radius
}
