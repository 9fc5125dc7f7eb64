//! # Spur Gear Sizing
//!
//! Sizes a spur gear pair for transmitted power using the Lewis bending
//! equation, then judges the result against the Buckingham dynamic and wear
//! loads.
//!
//! ## Method
//!
//! - Lewis bending strength on the weaker member picks the module
//! - Module is rounded up to the preferred series, geometry recomputed
//! - Buckingham dynamic load (fixed steel/steel deformation constant)
//!   versus Buckingham wear load produces the safety verdict
//!
//! This is the only gear family with a secondary wear check; the design
//! method verifies the others through their sizing equation alone.
//!
//! ## Example
//!
//! ```rust
//! use design_core::calculations::spur_gear::{calculate, SpurGearInput};
//! use design_core::calculations::FaceWidth;
//! use design_core::factors::ToothSystem;
//! use design_core::materials::MaterialProperties;
//!
//! let input = SpurGearInput {
//!     label: "G-1".to_string(),
//!     power_kw: 15.0,
//!     speed_pinion_rpm: 1000.0,
//!     ratio: 4.0,
//!     teeth_pinion: 20,
//!     tooth_system: ToothSystem::Stub20,
//!     face_width: FaceWidth::Factor { k: 10.0 },
//! };
//! let pinion = MaterialProperties {
//!     bending_stress_mpa: 220.6,
//!     hardness_bhn: 300.0,
//!     shear_stress_mpa: Some(130.0),
//! };
//! let gear = MaterialProperties {
//!     bending_stress_mpa: 175.0,
//!     hardness_bhn: 220.0,
//!     shear_stress_mpa: None,
//! };
//!
//! let result = calculate(&input, &pinion, &gear).unwrap();
//! assert_eq!(result.main_value, "4");
//! assert!(!result.is_safe); // dynamic load exceeds wear capacity here
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{
    driven_teeth, ensure_positive, pitch_line_velocity, select_weaker, torque_nmm, FaceWidth,
    GearMember,
};
use crate::errors::CalcResult;
use crate::factors::ToothSystem;
use crate::materials::MaterialProperties;
use crate::report::{fmt_kn, fmt_mm, fmt_series, DesignResult, DesignWarning, ItemStatus, ResultItem};
use crate::series::{next_standard, STANDARD_MODULES};

/// Buckingham deformation constant C (N/mm) for steel/steel gearing at
/// standard manufacturing accuracy.
const DEFORMATION_CONSTANT: f64 = 11_860.0;

/// Input parameters for a spur gear pair.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "G-1",
///   "power_kw": 15.0,
///   "speed_pinion_rpm": 1000.0,
///   "ratio": 4.0,
///   "teeth_pinion": 20,
///   "tooth_system": "Stub20",
///   "face_width": { "method": "Factor", "k": 10.0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpurGearInput {
    /// User label for this gear pair (e.g., "G-1", "Input Stage")
    pub label: String,

    /// Transmitted power in kW
    pub power_kw: f64,

    /// Pinion speed in rpm
    pub speed_pinion_rpm: f64,

    /// Speed ratio (pinion speed / gear speed), > 0
    pub ratio: f64,

    /// Pinion tooth count
    pub teeth_pinion: u32,

    /// Tooth profile system selecting the Lewis formula
    pub tooth_system: ToothSystem,

    /// Face width specification (factor of module, or fixed value)
    pub face_width: FaceWidth,
}

impl SpurGearInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("power_kw", self.power_kw)?;
        ensure_positive("speed_pinion_rpm", self.speed_pinion_rpm)?;
        ensure_positive("ratio", self.ratio)?;
        ensure_positive("teeth_pinion", self.teeth_pinion as f64)?;
        self.face_width.validate()?;
        Ok(())
    }
}

/// Raw quantities computed by spur gear sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpurGearSizing {
    /// Gear tooth count, rounded from pinion teeth × ratio
    pub teeth_gear: u32,

    /// Which member governed the strength design
    pub weaker_member: GearMember,

    /// Allowable bending stress of the governing member (MPa)
    pub design_sigma_mpa: f64,

    /// Lewis form factor of the governing member
    pub design_lewis_factor: f64,

    /// Theoretical module before series rounding (mm)
    pub module_theoretical_mm: f64,

    /// Selected standard module (mm)
    pub module_mm: f64,

    /// True when the theoretical module exceeded the series
    pub module_clamped: bool,

    /// Pinion pitch diameter from the standard module (mm)
    pub pitch_dia_pinion_mm: f64,

    /// Gear pitch diameter from the standard module (mm)
    pub pitch_dia_gear_mm: f64,

    /// Final face width (mm)
    pub face_width_mm: f64,

    /// Tangential load at the pitch line (N)
    pub tangential_load_n: f64,

    /// Pitch-line velocity (m/s)
    pub pitch_line_velocity_ms: f64,

    /// Buckingham dynamic load (N)
    pub dynamic_load_n: f64,

    /// Buckingham wear load capacity (N)
    pub wear_load_n: f64,

    /// Wear verdict: wear capacity covers the dynamic load
    pub is_safe: bool,
}

/// Buckingham dynamic load increment over the static tangential load.
///
/// `Fd = Ft + 21v(bC + Ft) / (21v + sqrt(bC + Ft))`. At `v = 0` the
/// increment vanishes; that case is an explicit branch rather than a
/// near-zero division.
fn buckingham_dynamic_load(ft_n: f64, v_ms: f64, face_width_mm: f64) -> f64 {
    if v_ms == 0.0 {
        return ft_n;
    }
    let load_term = face_width_mm * DEFORMATION_CONSTANT + ft_n;
    ft_n + 21.0 * v_ms * load_term / (21.0 * v_ms + load_term.sqrt())
}

/// Size a spur gear pair, returning the raw computed quantities.
///
/// `pinion` and `gear` are resolved material properties; the wear-load
/// hardness comes from the pinion, which sees the most load cycles.
pub fn size(
    input: &SpurGearInput,
    pinion: &MaterialProperties,
    gear: &MaterialProperties,
) -> CalcResult<SpurGearSizing> {
    input.validate()?;

    let zp = input.teeth_pinion;
    let zg = driven_teeth("ratio", zp, input.ratio)?;

    let torque = torque_nmm(input.power_kw, input.speed_pinion_rpm);

    // Weaker member by σ·y; ties favor the pinion
    let y_pinion = input.tooth_system.lewis_factor(zp as f64);
    let y_gear = input.tooth_system.lewis_factor(zg as f64);
    let design = select_weaker(
        (pinion.bending_stress_mpa, y_pinion, zp as f64),
        (gear.bending_stress_mpa, y_gear, zg as f64),
    );

    // Lewis strength equation solved for the module. With b = k·m the
    // module appears cubed; with a fixed width it appears squared.
    let module_theoretical = match input.face_width {
        FaceWidth::Value { b_mm } => (2.0 * torque
            / (design.teeth * design.sigma_mpa * b_mm * design.lewis_factor))
            .sqrt(),
        FaceWidth::Factor { k } => (2.0 * torque
            / (design.sigma_mpa * k * design.lewis_factor * design.teeth))
            .cbrt(),
    };

    let selection = next_standard(module_theoretical, &STANDARD_MODULES);
    let module = selection.value;

    // Final geometry from the standard module
    let dp = module * zp as f64;
    let dg = module * zg as f64;
    let face_width = input.face_width.resolve(module);

    let ft = 2.0 * torque / dp;
    let v = pitch_line_velocity(dp, input.speed_pinion_rpm);

    let fd = buckingham_dynamic_load(ft, v, face_width);

    // Wear load: ratio factor Q, load-stress factor K from pinion hardness
    let q = 2.0 * zg as f64 / (zp as f64 + zg as f64);
    let k_wear = 0.16 * (pinion.hardness_bhn / 100.0).powi(2);
    let fw = dp * face_width * q * k_wear;

    Ok(SpurGearSizing {
        teeth_gear: zg,
        weaker_member: design.member,
        design_sigma_mpa: design.sigma_mpa,
        design_lewis_factor: design.lewis_factor,
        module_theoretical_mm: module_theoretical,
        module_mm: module,
        module_clamped: selection.clamped,
        pitch_dia_pinion_mm: dp,
        pitch_dia_gear_mm: dg,
        face_width_mm: face_width,
        tangential_load_n: ft,
        pitch_line_velocity_ms: v,
        dynamic_load_n: fd,
        wear_load_n: fw,
        is_safe: fw >= fd,
    })
}

impl SpurGearSizing {
    /// Assemble the uniform result report.
    pub fn report(&self) -> DesignResult {
        let verdict_status = if self.is_safe {
            ItemStatus::Safe
        } else {
            ItemStatus::Unsafe
        };

        let mut result = DesignResult::new(self.is_safe, fmt_series(self.module_mm), "Standard Module", "mm")
            .with_sub_text(if self.is_safe {
                "Design is SAFE against wear"
            } else {
                "Design is NOT SAFE against wear"
            })
            .with_item(ResultItem::new(
                "Weaker Member",
                self.weaker_member.display_name(),
            ))
            .with_item(ResultItem::new("Face Width", fmt_mm(self.face_width_mm)).with_unit("mm"))
            .with_item(
                ResultItem::new("Pitch Dia (Pinion)", fmt_mm(self.pitch_dia_pinion_mm))
                    .with_unit("mm"),
            )
            .with_item(
                ResultItem::new("Pitch Dia (Gear)", fmt_mm(self.pitch_dia_gear_mm)).with_unit("mm"),
            )
            .with_item(
                ResultItem::new("Tangential Load", fmt_kn(self.tangential_load_n)).with_unit("kN"),
            )
            .with_item(ResultItem::new("Dynamic Load", fmt_kn(self.dynamic_load_n)).with_unit("kN"))
            .with_item(
                ResultItem::new("Wear Load", fmt_kn(self.wear_load_n))
                    .with_unit("kN")
                    .highlighted()
                    .with_status(verdict_status),
            );

        if self.module_clamped {
            result = result.with_warning(DesignWarning::SizeOutOfRange {
                theoretical: self.module_theoretical_mm,
                clamped_to: self.module_mm,
            });
        }

        result
    }
}

/// Size a spur gear pair and assemble the uniform result report.
///
/// This is a pure function: identical inputs yield identical outputs.
pub fn calculate(
    input: &SpurGearInput,
    pinion: &MaterialProperties,
    gear: &MaterialProperties,
) -> CalcResult<DesignResult> {
    Ok(size(input, pinion, gear)?.report())
}
