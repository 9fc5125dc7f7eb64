//! # Helical Gear Sizing
//!
//! Sizes a helical gear pair by the Lewis method applied to formative
//! (virtual) tooth counts. The helix angle shifts load into the tooth
//! normal plane, so the bending equation sizes the normal module and the
//! transverse module follows by `mt = mn / cos ψ`.
//!
//! No wear verdict is computed for this family; the sizing equation is the
//! whole verification, so results always report safe.

use serde::{Deserialize, Serialize};

use crate::calculations::{
    driven_teeth, ensure_positive, select_weaker, torque_nmm, GearMember,
};
use crate::errors::{CalcError, CalcResult};
use crate::factors::ToothSystem;
use crate::materials::MaterialProperties;
use crate::report::{fmt_kn, fmt_mm, fmt_series, DesignResult, DesignWarning, ResultItem};
use crate::series::{next_standard, STANDARD_MODULES};
use crate::units::{Degrees, Radians};

/// Input parameters for a helical gear pair.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "H-1",
///   "power_kw": 15.0,
///   "speed_pinion_rpm": 1000.0,
///   "ratio": 4.0,
///   "teeth_pinion": 20,
///   "tooth_system": "Stub20",
///   "face_width_factor": 10.0,
///   "helix_angle_deg": 25.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelicalGearInput {
    /// User label for this gear pair
    pub label: String,

    /// Transmitted power in kW
    pub power_kw: f64,

    /// Pinion speed in rpm
    pub speed_pinion_rpm: f64,

    /// Speed ratio (pinion speed / gear speed), > 0
    pub ratio: f64,

    /// Pinion tooth count (actual, not formative)
    pub teeth_pinion: u32,

    /// Tooth profile system selecting the Lewis formula
    pub tooth_system: ToothSystem,

    /// Face width as a multiple of the normal module (b = k·mn)
    pub face_width_factor: f64,

    /// Helix angle ψ in degrees, 0 ≤ ψ < 90
    pub helix_angle_deg: f64,
}

impl HelicalGearInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("power_kw", self.power_kw)?;
        ensure_positive("speed_pinion_rpm", self.speed_pinion_rpm)?;
        ensure_positive("ratio", self.ratio)?;
        ensure_positive("teeth_pinion", self.teeth_pinion as f64)?;
        ensure_positive("face_width_factor", self.face_width_factor)?;
        if !(0.0..90.0).contains(&self.helix_angle_deg) {
            return Err(CalcError::invalid_input(
                "helix_angle_deg",
                self.helix_angle_deg.to_string(),
                "Helix angle must lie in [0°, 90°)",
            ));
        }
        Ok(())
    }
}

/// Raw quantities computed by helical gear sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelicalGearSizing {
    /// Gear tooth count, rounded from pinion teeth × ratio
    pub teeth_gear: u32,

    /// Formative pinion tooth count ze = z / cos³ψ
    pub formative_teeth_pinion: f64,

    /// Formative gear tooth count
    pub formative_teeth_gear: f64,

    /// Which member governed the strength design
    pub weaker_member: GearMember,

    /// Theoretical normal module before series rounding (mm)
    pub normal_module_theoretical_mm: f64,

    /// Selected standard normal module (mm)
    pub normal_module_mm: f64,

    /// True when the theoretical module exceeded the series
    pub module_clamped: bool,

    /// Transverse module mt = mn / cos ψ (mm)
    pub transverse_module_mm: f64,

    /// Pinion pitch diameter from the transverse module (mm)
    pub pitch_dia_pinion_mm: f64,

    /// Gear pitch diameter from the transverse module (mm)
    pub pitch_dia_gear_mm: f64,

    /// Final face width b = k·mn (mm)
    pub face_width_mm: f64,

    /// Tangential load at the pitch line (N)
    pub tangential_load_n: f64,

    /// Helix angle carried through for reporting (degrees)
    pub helix_angle_deg: f64,
}

/// Size a helical gear pair, returning the raw computed quantities.
pub fn size(
    input: &HelicalGearInput,
    pinion: &MaterialProperties,
    gear: &MaterialProperties,
) -> CalcResult<HelicalGearSizing> {
    input.validate()?;

    let zp = input.teeth_pinion;
    let zg = driven_teeth("ratio", zp, input.ratio)?;

    let torque = torque_nmm(input.power_kw, input.speed_pinion_rpm);

    let psi: Radians = Degrees(input.helix_angle_deg).into();
    let cos_psi = psi.value().cos();

    // Lewis factors come from the formative counts; geometry keeps the
    // actual counts
    let ze_pinion = zp as f64 / cos_psi.powi(3);
    let ze_gear = zg as f64 / cos_psi.powi(3);
    let y_pinion = input.tooth_system.lewis_factor(ze_pinion);
    let y_gear = input.tooth_system.lewis_factor(ze_gear);
    let design = select_weaker(
        (pinion.bending_stress_mpa, y_pinion, zp as f64),
        (gear.bending_stress_mpa, y_gear, zg as f64),
    );

    let k = input.face_width_factor;
    let mn_theoretical = (2.0 * torque * cos_psi
        / (design.teeth * design.sigma_mpa * k * design.lewis_factor))
        .cbrt();

    let selection = next_standard(mn_theoretical, &STANDARD_MODULES);
    let mn = selection.value;

    let mt = mn / cos_psi;
    let dp = mt * zp as f64;
    let dg = mt * zg as f64;
    let face_width = k * mn;

    let ft = 2.0 * torque / dp;

    Ok(HelicalGearSizing {
        teeth_gear: zg,
        formative_teeth_pinion: ze_pinion,
        formative_teeth_gear: ze_gear,
        weaker_member: design.member,
        normal_module_theoretical_mm: mn_theoretical,
        normal_module_mm: mn,
        module_clamped: selection.clamped,
        transverse_module_mm: mt,
        pitch_dia_pinion_mm: dp,
        pitch_dia_gear_mm: dg,
        face_width_mm: face_width,
        tangential_load_n: ft,
        helix_angle_deg: input.helix_angle_deg,
    })
}

impl HelicalGearSizing {
    /// Assemble the uniform result report.
    pub fn report(&self) -> DesignResult {
        let mut result = DesignResult::new(
            true,
            fmt_series(self.normal_module_mm),
            "Normal Module",
            "mm",
        )
        .with_sub_text(format!("Helix Angle: {}°", self.helix_angle_deg))
        .with_item(
            ResultItem::new(
                "Transverse Module",
                format!("{:.3}", self.transverse_module_mm),
            )
            .with_unit("mm"),
        )
        .with_item(ResultItem::new("Face Width", fmt_mm(self.face_width_mm)).with_unit("mm"))
        .with_item(
            ResultItem::new("Pitch Dia (Pinion)", fmt_mm(self.pitch_dia_pinion_mm))
                .with_unit("mm"),
        )
        .with_item(
            ResultItem::new("Pitch Dia (Gear)", fmt_mm(self.pitch_dia_gear_mm)).with_unit("mm"),
        )
        .with_item(ResultItem::new(
            "Formative Teeth (P)",
            format!("{:.1}", self.formative_teeth_pinion),
        ))
        .with_item(
            ResultItem::new("Tangential Load", fmt_kn(self.tangential_load_n)).with_unit("kN"),
        );

        if self.module_clamped {
            result = result.with_warning(DesignWarning::SizeOutOfRange {
                theoretical: self.normal_module_theoretical_mm,
                clamped_to: self.normal_module_mm,
            });
        }

        result
    }
}

/// Size a helical gear pair and assemble the uniform result report.
pub fn calculate(
    input: &HelicalGearInput,
    pinion: &MaterialProperties,
    gear: &MaterialProperties,
) -> CalcResult<DesignResult> {
    Ok(size(input, pinion, gear)?.report())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::spur_gear;
    use crate::calculations::FaceWidth;

    fn c30_ht() -> MaterialProperties {
        MaterialProperties {
            bending_stress_mpa: 220.6,
            hardness_bhn: 300.0,
            shear_stress_mpa: Some(130.0),
        }
    }

    fn ci_35() -> MaterialProperties {
        MaterialProperties {
            bending_stress_mpa: 175.0,
            hardness_bhn: 220.0,
            shear_stress_mpa: None,
        }
    }

    /// 15 kW, 1000 rpm, 4:1, 20T stub pinion, b = 10·mn, 25° helix
    fn test_pair() -> HelicalGearInput {
        HelicalGearInput {
            label: "Test Helical".to_string(),
            power_kw: 15.0,
            speed_pinion_rpm: 1000.0,
            ratio: 4.0,
            teeth_pinion: 20,
            tooth_system: ToothSystem::Stub20,
            face_width_factor: 10.0,
            helix_angle_deg: 25.0,
        }
    }

    #[test]
    fn test_reference_sizing() {
        let sizing = size(&test_pair(), &c30_ht(), &ci_35()).unwrap();

        assert_eq!(sizing.teeth_gear, 80);

        // ze = z / cos³(25°): 20 -> ~26.87, 80 -> ~107.5
        assert!((sizing.formative_teeth_pinion - 26.87).abs() < 0.01);
        assert!((sizing.formative_teeth_gear - 107.46).abs() < 0.05);

        // The formative counts push the gear's σ·y below the pinion's here
        assert_eq!(sizing.weaker_member, GearMember::Gear);

        // mn³ = 2T·cosψ / (80 · 175 · 10 · yG) -> mn ≈ 2.235 -> 2.5 standard
        assert!((sizing.normal_module_theoretical_mm - 2.235).abs() < 1e-3);
        assert_eq!(sizing.normal_module_mm, 2.5);

        assert!((sizing.transverse_module_mm - 2.7584).abs() < 1e-3);
        assert!((sizing.pitch_dia_pinion_mm - 55.169).abs() < 0.01);
        assert!((sizing.pitch_dia_gear_mm - 220.676).abs() < 0.05);
        assert_eq!(sizing.face_width_mm, 25.0);
    }

    #[test]
    fn test_zero_helix_matches_spur_sizing() {
        // ψ = 0 reduces the formative counts and the cosψ factor to the
        // spur cube-root form
        let mut helical = test_pair();
        helical.helix_angle_deg = 0.0;
        let helical_sizing = size(&helical, &c30_ht(), &ci_35()).unwrap();

        let spur = spur_gear::SpurGearInput {
            label: "Spur Twin".to_string(),
            power_kw: 15.0,
            speed_pinion_rpm: 1000.0,
            ratio: 4.0,
            teeth_pinion: 20,
            tooth_system: ToothSystem::Stub20,
            face_width: FaceWidth::Factor { k: 10.0 },
        };
        let spur_sizing = spur_gear::size(&spur, &c30_ht(), &ci_35()).unwrap();

        assert!(
            (helical_sizing.normal_module_theoretical_mm - spur_sizing.module_theoretical_mm)
                .abs()
                < 1e-9
        );
        assert_eq!(helical_sizing.normal_module_mm, spur_sizing.module_mm);
    }

    #[test]
    fn test_always_reported_safe() {
        let result = calculate(&test_pair(), &c30_ht(), &ci_35()).unwrap();
        assert!(result.is_safe);
        assert_eq!(result.main_label, "Normal Module");
        assert_eq!(result.sub_text, "Helix Angle: 25°");
    }

    #[test]
    fn test_report_item_order() {
        let result = calculate(&test_pair(), &c30_ht(), &ci_35()).unwrap();
        assert_eq!(result.items[0].label, "Transverse Module");
        assert_eq!(result.items[1].label, "Face Width");
        assert_eq!(result.items[4].label, "Formative Teeth (P)");
        assert_eq!(result.items[5].label, "Tangential Load");
    }

    #[test]
    fn test_invalid_helix_angle_rejected() {
        let mut input = test_pair();
        input.helix_angle_deg = 90.0;
        assert!(size(&input, &c30_ht(), &ci_35()).is_err());

        input.helix_angle_deg = -5.0;
        assert!(size(&input, &c30_ht(), &ci_35()).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_pair();
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: HelicalGearInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.helix_angle_deg, roundtrip.helix_angle_deg);
    }
}
