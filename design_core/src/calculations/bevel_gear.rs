//! # Straight Bevel Gear Sizing
//!
//! Sizes a straight bevel gear pair. Pitch cone angles follow from the
//! shaft angle and ratio; the module comes from a fixed-proportion Lewis
//! approximation on the pinion, and the face width is one third of the
//! cone distance.
//!
//! Verification depth matches the method: the sizing equation is the whole
//! check, so results always report safe.

use serde::{Deserialize, Serialize};

use crate::calculations::{driven_teeth, ensure_positive, torque_nmm};
use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialProperties;
use crate::report::{fmt_deg, fmt_mm, fmt_series, DesignResult, DesignWarning, ResultItem};
use crate::series::{next_standard, STANDARD_MODULES};
use crate::units::{Degrees, Radians};

/// Face width assumed as this multiple of the module in the sizing
/// approximation (b = 10·m).
const FACE_WIDTH_RATIO: f64 = 10.0;

/// Bevel strength reduction applied to the Lewis capacity in the
/// fixed-proportion approximation.
const STRENGTH_RATIO: f64 = 0.1;

/// Input parameters for a straight bevel gear pair.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "power_kw": 15.0,
///   "speed_pinion_rpm": 1000.0,
///   "ratio": 4.0,
///   "teeth_pinion": 20,
///   "shaft_angle_deg": 90.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BevelGearInput {
    /// User label for this gear pair
    pub label: String,

    /// Transmitted power in kW
    pub power_kw: f64,

    /// Pinion speed in rpm
    pub speed_pinion_rpm: f64,

    /// Speed ratio (pinion speed / gear speed), > 0
    pub ratio: f64,

    /// Pinion tooth count
    pub teeth_pinion: u32,

    /// Angle between the two shafts Σ in degrees, usually 90
    pub shaft_angle_deg: f64,
}

impl BevelGearInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("power_kw", self.power_kw)?;
        ensure_positive("speed_pinion_rpm", self.speed_pinion_rpm)?;
        ensure_positive("ratio", self.ratio)?;
        ensure_positive("teeth_pinion", self.teeth_pinion as f64)?;
        if !(0.0..180.0).contains(&self.shaft_angle_deg) || self.shaft_angle_deg == 0.0 {
            return Err(CalcError::invalid_input(
                "shaft_angle_deg",
                self.shaft_angle_deg.to_string(),
                "Shaft angle must lie in (0°, 180°)",
            ));
        }
        let sigma: Radians = Degrees(self.shaft_angle_deg).into();
        if self.ratio + sigma.value().cos() <= 0.0 {
            return Err(CalcError::invalid_input(
                "shaft_angle_deg",
                self.shaft_angle_deg.to_string(),
                "Shaft angle and ratio leave no pinion pitch cone",
            ));
        }
        Ok(())
    }
}

/// Raw quantities computed by bevel gear sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BevelGearSizing {
    /// Gear tooth count, rounded from pinion teeth × ratio
    pub teeth_gear: u32,

    /// Pinion pitch cone angle (radians)
    pub pitch_angle_pinion_rad: f64,

    /// Gear pitch cone angle (radians)
    pub pitch_angle_gear_rad: f64,

    /// Theoretical module before series rounding (mm)
    pub module_theoretical_mm: f64,

    /// Selected standard module (mm)
    pub module_mm: f64,

    /// True when the theoretical module exceeded the series
    pub module_clamped: bool,

    /// Pinion pitch diameter (mm)
    pub pitch_dia_pinion_mm: f64,

    /// Gear pitch diameter (mm)
    pub pitch_dia_gear_mm: f64,

    /// Cone distance L (mm)
    pub cone_distance_mm: f64,

    /// Face width b = L/3 (mm)
    pub face_width_mm: f64,
}

/// Size a straight bevel gear pair, returning the raw computed quantities.
///
/// Only the pinion material enters the fixed-proportion module
/// approximation.
pub fn size(input: &BevelGearInput, pinion: &MaterialProperties) -> CalcResult<BevelGearSizing> {
    input.validate()?;

    let zp = input.teeth_pinion;
    let zg = driven_teeth("ratio", zp, input.ratio)?;

    let sigma: Radians = Degrees(input.shaft_angle_deg).into();
    let theta_pinion = (sigma.value().sin() / (input.ratio + sigma.value().cos())).atan();
    let theta_gear = sigma.value() - theta_pinion;

    let torque = torque_nmm(input.power_kw, input.speed_pinion_rpm);

    let module_theoretical = (2.0 * torque
        / (pinion.bending_stress_mpa * FACE_WIDTH_RATIO * STRENGTH_RATIO * zp as f64))
        .cbrt();

    let selection = next_standard(module_theoretical, &STANDARD_MODULES);
    let module = selection.value;

    let dp = module * zp as f64;
    let dg = module * zg as f64;
    let cone_distance = 0.5 * (dp * dp + dg * dg).sqrt();
    let face_width = cone_distance / 3.0;

    Ok(BevelGearSizing {
        teeth_gear: zg,
        pitch_angle_pinion_rad: theta_pinion,
        pitch_angle_gear_rad: theta_gear,
        module_theoretical_mm: module_theoretical,
        module_mm: module,
        module_clamped: selection.clamped,
        pitch_dia_pinion_mm: dp,
        pitch_dia_gear_mm: dg,
        cone_distance_mm: cone_distance,
        face_width_mm: face_width,
    })
}

impl BevelGearSizing {
    /// Assemble the uniform result report.
    pub fn report(&self) -> DesignResult {
        let mut result = DesignResult::new(true, fmt_series(self.module_mm), "Module", "mm")
            .with_sub_text("Straight Bevel Gear")
            .with_item(
                ResultItem::new("Cone Distance", fmt_mm(self.cone_distance_mm)).with_unit("mm"),
            )
            .with_item(ResultItem::new("Face Width", fmt_mm(self.face_width_mm)).with_unit("mm"))
            .with_item(
                ResultItem::new("Pitch Angle (Pinion)", fmt_deg(self.pitch_angle_pinion_rad))
                    .with_unit("deg"),
            )
            .with_item(
                ResultItem::new("Pitch Angle (Gear)", fmt_deg(self.pitch_angle_gear_rad))
                    .with_unit("deg"),
            )
            .with_item(
                ResultItem::new("Pitch Dia (Pinion)", fmt_mm(self.pitch_dia_pinion_mm))
                    .with_unit("mm"),
            )
            .with_item(
                ResultItem::new("Pitch Dia (Gear)", fmt_mm(self.pitch_dia_gear_mm)).with_unit("mm"),
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

/// Size a straight bevel gear pair and assemble the uniform result report.
pub fn calculate(input: &BevelGearInput, pinion: &MaterialProperties) -> CalcResult<DesignResult> {
    Ok(size(input, pinion)?.report())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c30_ht() -> MaterialProperties {
        MaterialProperties {
            bending_stress_mpa: 220.6,
            hardness_bhn: 300.0,
            shear_stress_mpa: Some(130.0),
        }
    }

    /// 15 kW, 1000 rpm, 4:1, 20T pinion, 90° shafts
    fn test_pair() -> BevelGearInput {
        BevelGearInput {
            label: "Test Bevel".to_string(),
            power_kw: 15.0,
            speed_pinion_rpm: 1000.0,
            ratio: 4.0,
            teeth_pinion: 20,
            shaft_angle_deg: 90.0,
        }
    }

    #[test]
    fn test_pitch_angles_at_right_angle_shafts() {
        let sizing = size(&test_pair(), &c30_ht()).unwrap();

        // θp = atan(1/ratio) at Σ = 90°
        let expected_pinion = (1.0f64 / 4.0).atan();
        assert!((sizing.pitch_angle_pinion_rad - expected_pinion).abs() < 1e-12);
        assert!(
            (sizing.pitch_angle_gear_rad
                - (std::f64::consts::FRAC_PI_2 - expected_pinion))
                .abs()
                < 1e-12
        );
    }

    #[test]
    fn test_reference_sizing() {
        let sizing = size(&test_pair(), &c30_ht()).unwrap();

        assert_eq!(sizing.teeth_gear, 80);

        // m³ = 2·143250 / (220.6 · 10 · 0.1 · 20) -> m ≈ 4.02 -> 5 standard
        assert!((sizing.module_theoretical_mm - 4.0194).abs() < 1e-3);
        assert_eq!(sizing.module_mm, 5.0);

        assert_eq!(sizing.pitch_dia_pinion_mm, 100.0);
        assert_eq!(sizing.pitch_dia_gear_mm, 400.0);

        // L = 0.5·sqrt(100² + 400²) ≈ 206.16, b = L/3
        assert!((sizing.cone_distance_mm - 206.155).abs() < 1e-3);
        assert!((sizing.face_width_mm - 68.718).abs() < 1e-3);
    }

    #[test]
    fn test_report_shape() {
        let result = calculate(&test_pair(), &c30_ht()).unwrap();

        assert!(result.is_safe);
        assert_eq!(result.main_value, "5");
        assert_eq!(result.main_label, "Module");
        assert_eq!(result.sub_text, "Straight Bevel Gear");

        assert_eq!(result.items[0].label, "Cone Distance");
        assert_eq!(result.items[2].label, "Pitch Angle (Pinion)");
        assert_eq!(result.items[2].value, "14.04");
        assert_eq!(result.items[3].value, "75.96");
    }

    #[test]
    fn test_degenerate_shaft_angle_rejected() {
        let mut input = test_pair();
        input.shaft_angle_deg = 0.0;
        assert!(size(&input, &c30_ht()).is_err());

        input.shaft_angle_deg = 180.0;
        assert!(size(&input, &c30_ht()).is_err());

        // Σ close to 180° with a small ratio folds the pinion cone away
        input.shaft_angle_deg = 179.0;
        input.ratio = 0.5;
        assert!(size(&input, &c30_ht()).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let sizing = size(&test_pair(), &c30_ht()).unwrap();
        let json = serde_json::to_string(&sizing).unwrap();
        let roundtrip: BevelGearSizing = serde_json::from_str(&json).unwrap();
        assert_eq!(sizing, roundtrip);
    }
}
