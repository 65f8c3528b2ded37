//! Excavation operations
//!
//! Digging runs synchronously inside pointer handlers: each sample appends
//! its disks, recomputes coverage, then scans the catalog, all before the
//! next input event is handled. No ticking loop is involved.

use glam::Vec2;
use rand::Rng;

use super::state::{DigDisk, SiteEvent, Sparkle, SiteState};
use crate::consts::*;

impl SiteState {
    /// Enter the excavating state (pointer pressed over the surface)
    pub fn begin_excavation(&mut self) {
        self.excavating = true;
    }

    /// Leave the excavating state; safe to call repeatedly
    pub fn end_excavation(&mut self) {
        self.excavating = false;
    }

    /// One pointer sample while digging
    ///
    /// Appends two jittered disks around `(x, y)`, recomputes coverage, then
    /// checks discoveries. Returns false without touching state when no dig
    /// is in progress. Coordinates outside the surface are accepted as-is.
    pub fn excavate(&mut self, x: f32, y: f32) -> bool {
        if !self.excavating {
            return false;
        }

        for _ in 0..DISKS_PER_SAMPLE {
            let jx = self.rng.random_range(-SAMPLE_JITTER..SAMPLE_JITTER);
            let jy = self.rng.random_range(-SAMPLE_JITTER..SAMPLE_JITTER);
            let radius = self.rng.random_range(DISK_RADIUS_MIN..DISK_RADIUS_MAX);
            self.disks.push(DigDisk::new(x + jx, y + jy, radius));
        }

        self.recompute_coverage();
        self.check_discoveries();
        true
    }

    /// Dig a single exact disk, bypassing pointer state and jitter
    ///
    /// Follows the same append, recompute, check sequence as `excavate`.
    /// Used by scripted digs that need precise coverage.
    pub fn excavate_at(&mut self, x: f32, y: f32, radius: f32) {
        self.disks.push(DigDisk::new(x, y, radius));
        self.recompute_coverage();
        self.check_discoveries();
    }

    /// Re-derive coverage from the full disk sequence
    ///
    /// Plain sum of disk areas over the surface area. Overlap is not
    /// deduplicated, so repeated digging in one spot still raises coverage
    /// and the value saturates at 100.
    fn recompute_coverage(&mut self) {
        let dug: f32 = self.disks.iter().map(|d| d.area()).sum();
        self.coverage = (dug / (self.width * self.height) * 100.0).min(100.0);
    }

    /// Scan the catalog in order and reveal every newly qualified artifact
    ///
    /// Already-discovered entries are skipped, so each artifact fires one
    /// event no matter how often the threshold is re-crossed.
    fn check_discoveries(&mut self) {
        for index in 0..self.catalog.len() {
            let artifact = &self.catalog[index];
            if artifact.discovered || self.coverage < artifact.required_coverage {
                continue;
            }
            self.catalog[index].discovered = true;
            self.artifacts_found += 1;
            self.current_artifact = Some(index);
            self.events.push(SiteEvent::ArtifactDiscovered { index });
            self.begin_flourish();
        }
    }

    /// Restart the gold flourish with a fresh sparkle field
    fn begin_flourish(&mut self) {
        self.flourish = 1.0;
        self.sparkles.clear();
        for _ in 0..FLOURISH_SPARKLES {
            let x = self.rng.random_range(0.0..self.width);
            let y = self.rng.random_range(0.0..self.height);
            let radius = self.rng.random_range(SPARKLE_RADIUS_MIN..SPARKLE_RADIUS_MAX);
            self.sparkles.push(Sparkle {
                pos: Vec2::new(x, y),
                radius,
            });
        }
    }

    /// Fade the discovery flourish; called once per animation frame
    ///
    /// Purely cosmetic: disks, coverage, and the catalog are untouched.
    pub fn fade_effects(&mut self, dt: f32) {
        if self.flourish <= 0.0 {
            return;
        }
        self.flourish = (self.flourish - dt / FLOURISH_SECS).max(0.0);
        if self.flourish == 0.0 {
            self.sparkles.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_site() -> SiteState {
        SiteState::new(12345, 800.0, 600.0)
    }

    #[test]
    fn test_new_site_is_pristine() {
        let site = test_site();
        assert_eq!(site.coverage(), 0.0);
        assert_eq!(site.artifacts_found, 0);
        assert_eq!(site.current_artifact, None);
        assert!(site.disks.is_empty());
        assert!(!site.is_excavating());
        assert!(site.catalog.iter().all(|a| !a.discovered));
    }

    #[test]
    fn test_single_disk_coverage() {
        let mut site = test_site();
        site.excavate_at(0.0, 0.0, 10.0);
        // pi * 10^2 over 800x600, as a percentage
        let expected = std::f32::consts::PI * 100.0 / 480_000.0 * 100.0;
        assert!((site.coverage() - expected).abs() < 0.0001);
        assert_eq!(site.artifacts_found, 0);
        assert!(site.drain_events().is_empty());
    }

    #[test]
    fn test_sample_appends_two_bounded_disks() {
        let mut site = test_site();
        site.begin_excavation();
        assert!(site.excavate(400.0, 300.0));
        assert_eq!(site.disks.len(), DISKS_PER_SAMPLE);
        for disk in &site.disks {
            assert!((disk.pos.x - 400.0).abs() <= SAMPLE_JITTER);
            assert!((disk.pos.y - 300.0).abs() <= SAMPLE_JITTER);
            assert!(disk.radius >= DISK_RADIUS_MIN);
            assert!(disk.radius < DISK_RADIUS_MAX);
        }
        assert!(site.coverage() > 0.0);
    }

    #[test]
    fn test_sample_ignored_unless_excavating() {
        let mut site = test_site();
        assert!(!site.excavate(100.0, 100.0));
        assert!(site.disks.is_empty());
        assert_eq!(site.coverage(), 0.0);

        site.begin_excavation();
        assert!(site.excavate(100.0, 100.0));
        let dug = site.disks.len();
        let coverage = site.coverage();

        site.end_excavation();
        site.end_excavation();
        assert!(!site.excavate(100.0, 100.0));
        assert_eq!(site.disks.len(), dug);
        assert_eq!(site.coverage(), coverage);
    }

    #[test]
    fn test_out_of_surface_samples_accepted() {
        let mut site = test_site();
        site.begin_excavation();
        assert!(site.excavate(-50.0, 1000.0));
        assert_eq!(site.disks.len(), DISKS_PER_SAMPLE);
        assert!(site.coverage() > 0.0);
    }

    #[test]
    fn test_threshold_crossing_reveals_chenglu() {
        let mut site = test_site();
        // One r=175 disk covers ~20.04% - enough for Chenglu (20), short of Paper (40)
        site.excavate_at(400.0, 300.0, 175.0);
        assert!(site.coverage() >= 20.0);
        assert!(site.coverage() < 40.0);
        assert_eq!(site.artifacts_found, 1);
        assert!(site.catalog[4].discovered);
        assert!(site.catalog[..4].iter().all(|a| !a.discovered));
        assert_eq!(site.current_artifact, Some(4));
        assert_eq!(
            site.drain_events(),
            vec![SiteEvent::ArtifactDiscovered { index: 4 }]
        );
    }

    #[test]
    fn test_below_threshold_reveals_nothing() {
        let mut site = test_site();
        // One r=174 disk covers ~19.8%
        site.excavate_at(400.0, 300.0, 174.0);
        assert!(site.coverage() < 20.0);
        assert_eq!(site.artifacts_found, 0);
        assert_eq!(site.current_artifact, None);
        assert!(site.drain_events().is_empty());
    }

    #[test]
    fn test_jump_to_full_reveals_all_in_catalog_order() {
        let mut site = test_site();
        // One r=450 disk exceeds the whole surface area, so coverage clamps to 100
        site.excavate_at(400.0, 300.0, 450.0);
        assert_eq!(site.coverage(), 100.0);
        assert_eq!(site.artifacts_found, 5);
        assert!(site.catalog.iter().all(|a| a.discovered));

        let order: Vec<usize> = site
            .drain_events()
            .into_iter()
            .map(|e| match e {
                SiteEvent::ArtifactDiscovered { index } => index,
            })
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        // Chenglu is scanned last, so it ends up as the current artifact
        assert_eq!(site.current_artifact, Some(4));
    }

    #[test]
    fn test_each_artifact_fires_once() {
        let mut site = test_site();
        site.excavate_at(400.0, 300.0, 175.0);
        assert_eq!(site.artifacts_found, 1);
        site.drain_events();

        // Further digging within the same tier must not re-reveal Chenglu
        site.excavate_at(100.0, 100.0, 5.0);
        assert!(site.coverage() < 40.0);
        assert_eq!(site.artifacts_found, 1);
        assert!(site.drain_events().is_empty());
    }

    #[test]
    fn test_coverage_saturates_at_100() {
        let mut site = test_site();
        site.excavate_at(400.0, 300.0, 450.0);
        site.excavate_at(400.0, 300.0, 450.0);
        assert_eq!(site.coverage(), 100.0);
        assert_eq!(site.artifacts_found, 5);
    }

    #[test]
    fn test_same_seed_digs_identically() {
        let mut a = SiteState::new(99999, 800.0, 600.0);
        let mut b = SiteState::new(99999, 800.0, 600.0);
        for site in [&mut a, &mut b] {
            site.begin_excavation();
            site.excavate(120.0, 80.0);
            site.excavate(130.0, 90.0);
            site.excavate(640.0, 480.0);
        }
        assert_eq!(a.disks, b.disks);
        assert_eq!(a.coverage(), b.coverage());
    }

    #[test]
    fn test_flourish_fades_and_clears_sparkles() {
        let mut site = test_site();
        site.excavate_at(400.0, 300.0, 175.0);
        assert_eq!(site.flourish, 1.0);
        assert_eq!(site.sparkles.len(), FLOURISH_SPARKLES);
        for sparkle in &site.sparkles {
            assert!(sparkle.pos.x >= 0.0 && sparkle.pos.x < 800.0);
            assert!(sparkle.pos.y >= 0.0 && sparkle.pos.y < 600.0);
            assert!(sparkle.radius >= SPARKLE_RADIUS_MIN);
            assert!(sparkle.radius < SPARKLE_RADIUS_MAX);
        }

        site.fade_effects(0.5);
        assert!(site.flourish > 0.0);
        assert!(site.flourish < 1.0);
        assert!(!site.sparkles.is_empty());

        site.fade_effects(10.0);
        assert_eq!(site.flourish, 0.0);
        assert!(site.sparkles.is_empty());

        let disks = site.disks.len();
        site.fade_effects(0.1);
        assert_eq!(site.flourish, 0.0);
        assert_eq!(site.disks.len(), disks);
    }

    #[test]
    fn test_fade_leaves_dig_state_alone() {
        let mut site = test_site();
        site.excavate_at(400.0, 300.0, 175.0);
        let coverage = site.coverage();
        let found = site.artifacts_found;
        site.fade_effects(0.25);
        site.fade_effects(0.25);
        assert_eq!(site.coverage(), coverage);
        assert_eq!(site.artifacts_found, found);
        assert!(site.catalog[4].discovered);
    }

    proptest! {
        #[test]
        fn coverage_monotone_and_counters_consistent(
            seed in any::<u64>(),
            samples in prop::collection::vec((0f32..800.0, 0f32..600.0), 0..40),
        ) {
            let mut site = SiteState::new(seed, 800.0, 600.0);
            site.begin_excavation();
            let mut last = site.coverage();
            for (x, y) in samples {
                site.excavate(x, y);
                let coverage = site.coverage();
                prop_assert!(coverage >= last);
                prop_assert!((0.0..=100.0).contains(&coverage));
                let discovered = site.catalog.iter().filter(|a| a.discovered).count();
                prop_assert_eq!(discovered as u32, site.artifacts_found);
                last = coverage;
            }
        }
    }
}
