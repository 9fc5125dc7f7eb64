//! # Materials
//!
//! Material property resolution for the sizing calculations.
//!
//! The sizing functions themselves never see a material identifier: they
//! consume fully resolved [`MaterialProperties`]. This module is the
//! collaborator that produces those numbers, by looking up a catalog entry
//! and merging any user overrides ahead of the call.
//!
//! ## Example
//!
//! ```rust
//! use design_core::materials::{resolve, MaterialOverrides};
//!
//! // Catalog value
//! let c30 = resolve("c30_ht", &MaterialOverrides::default()).unwrap();
//! assert_eq!(c30.bending_stress_mpa, 220.6);
//!
//! // Override replaces the catalog value; absent fields fall back
//! let overrides = MaterialOverrides {
//!     bending_stress_mpa: Some(200.0),
//!     ..Default::default()
//! };
//! let tweaked = resolve("c30_ht", &overrides).unwrap();
//! assert_eq!(tweaked.bending_stress_mpa, 200.0);
//! assert_eq!(tweaked.hardness_bhn, 300.0);
//! ```

pub mod catalog;

pub use catalog::{all, find, MaterialRecord};

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

/// Resolved numeric material properties, as consumed by the sizing functions.
///
/// Supplied fully resolved (catalog value or user override already merged)
/// by the caller; immutable per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Allowable bending stress σ (MPa). Doubles as the yield strength for
    /// shaft sizing, where the allowable shear is derived from it.
    pub bending_stress_mpa: f64,

    /// Brinell hardness number, used by the wear-load capacity
    pub hardness_bhn: f64,

    /// Allowable shear stress τ (MPa). Present for shaft and spring
    /// materials; None for gear-only materials.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub shear_stress_mpa: Option<f64>,
}

impl MaterialProperties {
    /// Apply user overrides on top of these properties.
    ///
    /// An override replaces the catalog value; an absent override falls
    /// back to it.
    pub fn with_overrides(&self, overrides: &MaterialOverrides) -> MaterialProperties {
        MaterialProperties {
            bending_stress_mpa: overrides
                .bending_stress_mpa
                .unwrap_or(self.bending_stress_mpa),
            hardness_bhn: overrides.hardness_bhn.unwrap_or(self.hardness_bhn),
            shear_stress_mpa: overrides.shear_stress_mpa.or(self.shear_stress_mpa),
        }
    }
}

/// Optional per-field user overrides merged ahead of a calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub bending_stress_mpa: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub hardness_bhn: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub shear_stress_mpa: Option<f64>,
}

/// Resolve a catalog material id plus overrides into concrete properties.
///
/// This is the boundary between the material catalog and the pure
/// calculation core: everything downstream of this call is numbers only.
pub fn resolve(material_id: &str, overrides: &MaterialOverrides) -> CalcResult<MaterialProperties> {
    let record = catalog::find(material_id)?;
    Ok(record.properties.with_overrides(overrides))
}
