//! Display settings and preferences
//!
//! Persisted in LocalStorage, separate from dig state.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Soil speckle count for this preset
    pub fn speckle_count(&self) -> u32 {
        match self {
            QualityPreset::Low => 40,
            QualityPreset::Medium => 100,
            QualityPreset::High => 200,
        }
    }

    /// Dust motes spawned per dig sample
    pub fn dust_per_sample(&self) -> usize {
        match self {
            QualityPreset::Low => 2,
            QualityPreset::Medium => 5,
            QualityPreset::High => 8,
        }
    }
}

/// Display settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Dust motes while digging
    pub dust: bool,
    /// Gold frame and sparkles on discovery
    pub flourish: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (suppress dust and the discovery flourish)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            dust: true,
            flourish: true,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Speckles to scatter over the soil
    pub fn speckle_count(&self) -> u32 {
        self.quality.speckle_count()
    }

    /// Dust motes per dig sample (respects reduced_motion)
    pub fn dust_count(&self) -> usize {
        if !self.dust || self.reduced_motion {
            0
        } else {
            self.quality.dust_per_sample()
        }
    }

    /// Whether the discovery flourish should draw (respects reduced_motion)
    pub fn flourish_visible(&self) -> bool {
        self.flourish && !self.reduced_motion
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "dig_site_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip() {
        let mut settings = Settings::default();
        settings.quality = QualityPreset::High;
        settings.reduced_motion = true;

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.quality, QualityPreset::High);
        assert!(back.reduced_motion);
    }

    #[test]
    fn test_reduced_motion_suppresses_effects() {
        let mut settings = Settings::default();
        assert!(settings.flourish_visible());
        assert!(settings.dust_count() > 0);

        settings.reduced_motion = true;
        assert!(!settings.flourish_visible());
        assert_eq!(settings.dust_count(), 0);
    }
}
