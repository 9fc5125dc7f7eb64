//! # Sizing Calculations
//!
//! This module contains all machine-element sizing calculations. Each
//! component family follows the pattern:
//!
//! - `*Input` - Operating parameters (JSON-serializable), with `validate()`
//! - `*Sizing` - Raw computed quantities (JSON-serializable)
//! - `size(input, materials...) -> CalcResult<*Sizing>` - Pure sizing function
//! - `calculate(input, materials...) -> CalcResult<DesignResult>` - Sizing
//!   plus result assembly into the uniform report shape
//!
//! Material properties arrive fully resolved (see `materials::resolve`);
//! no calculation here ever consults the catalog.
//!
//! ## Available Calculations
//!
//! - [`spur_gear`] - Spur gear pair (Lewis + Buckingham wear verdict)
//! - [`helical_gear`] - Helical gear pair (formative tooth counts)
//! - [`bevel_gear`] - Straight bevel gear pair
//! - [`worm_gear`] - Worm and wheel
//! - [`shaft`] - Solid shaft under combined bending and torsion (ASME)
//! - [`spring`] - Helical compression spring (Wahl)

pub mod bevel_gear;
pub mod helical_gear;
pub mod shaft;
pub mod spring;
pub mod spur_gear;
pub mod worm_gear;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{NewtonMeters, NewtonMillimeters};

// Re-export commonly used types
pub use bevel_gear::{BevelGearInput, BevelGearSizing};
pub use helical_gear::{HelicalGearInput, HelicalGearSizing};
pub use shaft::{ShaftInput, ShaftSizing};
pub use spring::{SpringInput, SpringSizing};
pub use spur_gear::{SpurGearInput, SpurGearSizing};
pub use worm_gear::{WormGearInput, WormGearSizing};

/// Enum wrapper for all sizing request types.
///
/// This allows storing heterogeneous requests in a single collection
/// while maintaining type safety and clean serialization. Each sizing
/// function pattern-matches on its own variant only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesignRequest {
    /// Spur gear pair sizing
    SpurGear(SpurGearInput),
    /// Helical gear pair sizing
    HelicalGear(HelicalGearInput),
    /// Straight bevel gear pair sizing
    BevelGear(BevelGearInput),
    /// Worm and wheel sizing
    WormGear(WormGearInput),
    /// Shaft diameter sizing
    Shaft(ShaftInput),
    /// Helical compression spring sizing
    Spring(SpringInput),
}

impl DesignRequest {
    /// Get the user-provided label for this request
    pub fn label(&self) -> &str {
        match self {
            DesignRequest::SpurGear(r) => &r.label,
            DesignRequest::HelicalGear(r) => &r.label,
            DesignRequest::BevelGear(r) => &r.label,
            DesignRequest::WormGear(r) => &r.label,
            DesignRequest::Shaft(r) => &r.label,
            DesignRequest::Spring(r) => &r.label,
        }
    }

    /// Get the component family as a string
    pub fn family(&self) -> &'static str {
        match self {
            DesignRequest::SpurGear(_) => "Spur Gear",
            DesignRequest::HelicalGear(_) => "Helical Gear",
            DesignRequest::BevelGear(_) => "Bevel Gear",
            DesignRequest::WormGear(_) => "Worm Gear",
            DesignRequest::Shaft(_) => "Shaft",
            DesignRequest::Spring(_) => "Spring",
        }
    }
}

/// Face width specification for gear sizing.
///
/// Either a multiple of the module (the usual design choice) or a fixed
/// value in mm. The choice changes which closed-form module equation
/// applies: cube root for `Factor`, square root for `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum FaceWidth {
    /// Face width = k × module
    Factor { k: f64 },
    /// Face width given directly in mm
    Value { b_mm: f64 },
}

impl FaceWidth {
    /// Validate the specification
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            FaceWidth::Factor { k } => ensure_positive("face_width.k", k),
            FaceWidth::Value { b_mm } => ensure_positive("face_width.b_mm", b_mm),
        }
    }

    /// Final face width in mm once the standard module is known
    pub fn resolve(&self, module_mm: f64) -> f64 {
        match *self {
            FaceWidth::Factor { k } => k * module_mm,
            FaceWidth::Value { b_mm } => b_mm,
        }
    }
}

/// Which member of a gear pair governs the strength design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GearMember {
    Pinion,
    Gear,
}

impl GearMember {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GearMember::Pinion => "Pinion",
            GearMember::Gear => "Gear",
        }
    }
}

impl std::fmt::Display for GearMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Strength values of the member that governs a gear-pair design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignMember {
    pub member: GearMember,
    /// Allowable bending stress σ of the governing member (MPa)
    pub sigma_mpa: f64,
    /// Lewis form factor y of the governing member
    pub lewis_factor: f64,
    /// Tooth count of the governing member used for geometry
    pub teeth: f64,
}

/// Pick the weaker member of a gear pair by comparing σ·y products.
///
/// The comparison is strict: on an exact tie the pinion governs. For
/// helical gears the Lewis factors come from formative tooth counts while
/// `teeth` stays the actual count used for geometry.
pub(crate) fn select_weaker(
    pinion: (f64, f64, f64),
    gear: (f64, f64, f64),
) -> DesignMember {
    let (sigma_p, y_p, z_p) = pinion;
    let (sigma_g, y_g, z_g) = gear;
    if sigma_g * y_g < sigma_p * y_p {
        DesignMember {
            member: GearMember::Gear,
            sigma_mpa: sigma_g,
            lewis_factor: y_g,
            teeth: z_g,
        }
    } else {
        DesignMember {
            member: GearMember::Pinion,
            sigma_mpa: sigma_p,
            lewis_factor: y_p,
            teeth: z_p,
        }
    }
}

/// Torque in N·mm from transmitted power and rotational speed.
///
/// `T = 9550 · P / N` gives N·m for P in kW and N in rpm; the module
/// equations want N·mm.
pub(crate) fn torque_nmm(power_kw: f64, speed_rpm: f64) -> f64 {
    let torque = NewtonMeters(9550.0 * power_kw / speed_rpm);
    NewtonMillimeters::from(torque).value()
}

/// Pitch-line velocity in m/s for a pitch diameter in mm at a speed in rpm
pub(crate) fn pitch_line_velocity(diameter_mm: f64, speed_rpm: f64) -> f64 {
    std::f64::consts::PI * diameter_mm * speed_rpm / 60_000.0
}

/// Reject non-positive values before any arithmetic touches them
pub(crate) fn ensure_positive(field: &str, value: f64) -> CalcResult<()> {
    if !(value > 0.0) {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(())
}

/// Round a gear ratio into a driven tooth count, rejecting degenerate results
pub(crate) fn driven_teeth(field: &str, driver_teeth: u32, ratio: f64) -> CalcResult<u32> {
    let teeth = (driver_teeth as f64 * ratio).round();
    if teeth < 1.0 {
        return Err(CalcError::invalid_input(
            field,
            ratio.to_string(),
            "Ratio rounds the driven tooth count to zero",
        ));
    }
    Ok(teeth as u32)
}
