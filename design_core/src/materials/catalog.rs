//! Built-in material catalog.
//!
//! Reference design values for the materials the tool ships with: carbon
//! steels for gears and shafts, gray cast irons, bronzes for worm wheels,
//! and high-strength spring wire. Values are allowable stresses for the
//! Lewis/ASME/Wahl design method, not ultimate strengths.
//!
//! Custom materials are handled through `MaterialOverrides` rather than a
//! catalog entry.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialProperties;

/// One catalog entry: identity, resolved properties, and selection guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Stable identifier used by callers (e.g. "c30_ht")
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Design values for this material
    pub properties: MaterialProperties,
    /// Short description for selection UIs
    pub description: String,
    /// Typical applications, for selection UIs
    pub typical_applications: Vec<String>,
}

fn record(
    id: &str,
    name: &str,
    bending_stress_mpa: f64,
    hardness_bhn: f64,
    shear_stress_mpa: Option<f64>,
    description: &str,
    typical_applications: &[&str],
) -> MaterialRecord {
    MaterialRecord {
        id: id.to_string(),
        name: name.to_string(),
        properties: MaterialProperties {
            bending_stress_mpa,
            hardness_bhn,
            shear_stress_mpa,
        },
        description: description.to_string(),
        typical_applications: typical_applications.iter().map(|s| s.to_string()).collect(),
    }
}

static CATALOG: Lazy<Vec<MaterialRecord>> = Lazy::new(|| {
    vec![
        record(
            "c30_ht",
            "Steel C30 Heat Treated",
            220.6,
            300.0,
            Some(130.0),
            "Medium carbon steel subjected to heat treatment (quenching and tempering) \
             to achieve a good balance of strength and toughness.",
            &[
                "Automotive transmission gears",
                "Machine tool gears",
                "Heavy-duty shafts",
            ],
        ),
        record(
            "c45",
            "Steel C45",
            300.0,
            225.0,
            Some(180.0),
            "Medium carbon steel with higher strength, popular for shafts and axles.",
            &["Shafts", "Axles", "Bolts", "Gears"],
        ),
        record(
            "ci_20",
            "Cast Iron Grade 20",
            100.0,
            180.0,
            None,
            "A gray cast iron with excellent machinability and vibration damping \
             capacity, but lower tensile strength.",
            &["Light duty gears", "Machine bases", "Pulleys"],
        ),
        record(
            "ci_35",
            "Cast Iron Grade 35",
            175.0,
            220.0,
            None,
            "High-strength gray cast iron used for components requiring better \
             load-bearing capacity.",
            &[
                "Heavy machinery gears",
                "Hydraulic cylinders",
                "Diesel engine castings",
            ],
        ),
        record(
            "bronze",
            "Bronze",
            85.0,
            100.0,
            None,
            "Copper-based alloy known for corrosion resistance and low friction \
             against steel.",
            &["Worm gears", "Bushings", "Marine applications"],
        ),
        record(
            "phos_bronze",
            "Phosphor Gear Bronze",
            115.0,
            120.0,
            None,
            "Bronze alloyed with phosphorus to increase fatigue strength, wear \
             resistance, and stiffness.",
            &[
                "Heavy load worm gears",
                "High-speed bushings",
                "Switchgear components",
            ],
        ),
        record(
            "spring_steel",
            "Chrome Vanadium Steel (Spring)",
            1200.0,
            400.0,
            Some(600.0),
            "High grade spring steel used for heavy stress applications.",
            &["Valve springs", "Suspension springs"],
        ),
        record(
            "music_wire",
            "Music Wire (ASTM A228)",
            1500.0,
            450.0,
            Some(700.0),
            "High carbon steel wire, highest tensile strength of all spring materials.",
            &["High quality small springs"],
        ),
    ]
});

/// All catalog entries, for selection UIs
pub fn all() -> &'static [MaterialRecord] {
    &CATALOG
}

/// Look up a catalog entry by id
pub fn find(material_id: &str) -> CalcResult<&'static MaterialRecord> {
    CATALOG
        .iter()
        .find(|record| record.id == material_id)
        .ok_or_else(|| CalcError::material_not_found(material_id))
}
