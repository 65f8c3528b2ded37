//! Artifact catalog
//!
//! Records for the steam-history artifacts buried under the surface. The
//! catalog is populated at startup and never grows; its order is the order
//! discovery checks scan it in.

/// A buried artifact
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Stable kebab-case identifier
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Approximate dating, e.g. "1 BCE"
    pub period: &'static str,
    pub significance: &'static str,
    pub civilization: &'static str,
    /// Coverage percentage (0-100) that reveals this artifact
    pub required_coverage: f32,
    /// Flips to true exactly once and never reverts
    pub discovered: bool,
}

/// The five built-in artifacts, deepest (highest threshold) first
pub fn builtin_catalog() -> Vec<Artifact> {
    vec![
        Artifact {
            id: "steam-bath",
            name: "Steam Bath",
            description: "A steam bath is a steam-filled room or steam-filled cabinet \
                designed for the purpose of relaxation and holistic treatment.",
            period: "~2000 CE",
            significance: "Steam baths have been formally recognized since ancient Greek \
                and Roman times, yet variations can be found throughout the Middle East, \
                Asia, Mesoamerica, and Northern Africa. The Greeks developed early vapor \
                baths called laconica in Sparta, while the Roman variation was referred \
                to as thermae.",
            civilization: "Ancient Rome",
            required_coverage: 100.0,
            discovered: false,
        },
        Artifact {
            id: "automated-temple-doors",
            name: "Automated Temple Doors",
            description: "The liquid within the vessel (probably water, but Heron also \
                thought about quicksilver) would get pushed through a hose into another \
                vessel hanging from the ceiling and connected to the underground \
                doorposts of the temple doors.",
            period: "~40 CE",
            significance: "The idea was that temple doors should open automatically when \
                a fire is lit and close again when the fire extinguishes. By lighting \
                the fire above ground in an altar in front of the temple, heat would \
                form and build up pressure into a soldered vessel beneath the temple.",
            civilization: "Ancient Greece",
            required_coverage: 80.0,
            discovered: false,
        },
        Artifact {
            id: "aeolipile",
            name: "Aeolipile",
            description: "An aeolipile, aeolipyle, or eolipile, also known as a Hero's \
                (or Heron's) engine, is a simple, bladeless radial steam turbine which \
                spins when the central water container is heated. Torque is produced by \
                steam jets exiting the turbine.",
            period: "1 BCE",
            significance: "The aeolipile is the first known device to transform steam \
                into rotary motion.",
            civilization: "Ancient Greece",
            required_coverage: 60.0,
            discovered: false,
        },
        Artifact {
            id: "paper",
            name: "Paper",
            description: "Ancient Egyptians used steam to make papyrus which was used as \
                paper.",
            period: "2900 BCE",
            significance: "The ancient Egyptians grew a marsh grass called Cyperus \
                Papyrus in the Nile river valley. The Egyptians cut thin strips from the \
                plant's stem and softened them in the muddy waters of the Nile. These \
                strips were then layered at right angles to form a kind of mat.",
            civilization: "Ancient Egypt",
            required_coverage: 40.0,
            discovered: false,
        },
        Artifact {
            id: "chenglu",
            name: "Chenglu",
            description: "Zhang Heng invented the \"chenglu\", a device that used steam \
                to spin a wheel for pleasure and ornament in ancient China.",
            period: "Unknown",
            significance: "The ancient Chinese used this as an ornament.",
            civilization: "Ancient China",
            required_coverage: 20.0,
            discovered: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.iter().all(|a| !a.discovered));
        assert!(catalog
            .iter()
            .all(|a| (0.0..=100.0).contains(&a.required_coverage)));
    }

    #[test]
    fn test_catalog_thresholds_descend() {
        let catalog = builtin_catalog();
        for pair in catalog.windows(2) {
            assert!(pair[0].required_coverage > pair[1].required_coverage);
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = builtin_catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in &catalog[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
