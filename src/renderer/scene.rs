//! Scene assembly
//!
//! Builds the complete vertex list for a frame from site state and settings
//! alone. Speckles are seeded from the site seed rather than re-rolled per
//! frame, so the soil texture holds still between redraws.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::shapes;
use super::vertex::{colors, Vertex};
use crate::consts::{FRAME_INSET, FRAME_WIDTH};
use crate::settings::Settings;
use crate::sim::SiteState;

/// Segments for the background gradient disk and ring
const GRADIENT_SEGMENTS: u32 = 64;
/// Segments per excavated disk
const DISK_SEGMENTS: u32 = 24;
/// Segments per sparkle
const SPARKLE_SEGMENTS: u32 = 10;
/// Decorrelates the speckle stream from the dig stream
const SPECKLE_SALT: u64 = 0x5011_7e37;

/// Build the vertex list for one frame, back to front
pub fn site_scene(site: &SiteState, settings: &Settings) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let center = Vec2::new(site.width / 2.0, site.height / 2.0);
    let gradient_radius = site.width / 2.0;

    // Radial soil gradient: light center, mid at half radius, dark at the
    // rim. The clear color supplies the dark corners past the rim.
    vertices.extend(shapes::gradient_disk(
        center,
        gradient_radius / 2.0,
        colors::SOIL_LIGHT,
        colors::SOIL_MID,
        GRADIENT_SEGMENTS,
    ));
    vertices.extend(shapes::gradient_ring(
        center,
        gradient_radius / 2.0,
        gradient_radius,
        colors::SOIL_MID,
        colors::SOIL_DARK,
        GRADIENT_SEGMENTS,
    ));

    // Dark speckle rects roughen the soil
    let mut speckle_rng = Pcg32::seed_from_u64(site.seed ^ SPECKLE_SALT);
    for _ in 0..settings.speckle_count() {
        let pos = Vec2::new(
            speckle_rng.random_range(0.0..site.width),
            speckle_rng.random_range(0.0..site.height),
        );
        let size = Vec2::new(
            speckle_rng.random_range(5.0..25.0),
            speckle_rng.random_range(5.0..25.0),
        );
        let alpha = speckle_rng.random_range(0.0..0.2);
        vertices.extend(shapes::quad(pos, pos + size, [0.0, 0.0, 0.0, alpha]));
    }

    // Excavated disks, oldest first
    for disk in &site.disks {
        vertices.extend(shapes::disk(
            disk.pos,
            disk.radius,
            colors::EXCAVATED,
            DISK_SEGMENTS,
        ));
    }

    // Discovery flourish: gold frame plus sparkle field, fading with time
    if site.flourish > 0.0 && settings.flourish_visible() {
        let mut gold = colors::GOLD;
        gold[3] = site.flourish;

        let min = Vec2::splat(FRAME_INSET);
        let max = Vec2::new(site.width, site.height) - Vec2::splat(FRAME_INSET);
        vertices.extend(shapes::frame(min, max, FRAME_WIDTH, gold));

        for sparkle in &site.sparkles {
            vertices.extend(shapes::disk(
                sparkle.pos,
                sparkle.radius,
                gold,
                SPARKLE_SEGMENTS,
            ));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_is_deterministic_for_same_state() {
        let site = SiteState::new(777, 800.0, 600.0);
        let settings = Settings::default();
        let a = site_scene(&site, &settings);
        let b = site_scene(&site, &settings);
        assert!(!a.is_empty());
        assert_eq!(a.len(), b.len());
        for (va, vb) in a.iter().zip(&b) {
            assert_eq!(va.position, vb.position);
            assert_eq!(va.color, vb.color);
        }
    }

    #[test]
    fn test_digging_grows_the_scene() {
        let mut site = SiteState::new(777, 800.0, 600.0);
        let settings = Settings::default();
        let before = site_scene(&site, &settings).len();
        site.excavate_at(400.0, 300.0, 15.0);
        let after = site_scene(&site, &settings).len();
        assert_eq!(after - before, (DISK_SEGMENTS * 3) as usize);
    }

    #[test]
    fn test_flourish_respects_reduced_motion() {
        let mut site = SiteState::new(777, 800.0, 600.0);
        site.excavate_at(400.0, 300.0, 175.0);
        assert!(site.flourish > 0.0);

        let settings = Settings::default();
        let mut calm = Settings::default();
        calm.reduced_motion = true;

        let with_flourish = site_scene(&site, &settings).len();
        let without = site_scene(&site, &calm).len();
        assert!(with_flourish > without);
    }
}
