//! # Worm Gear Sizing
//!
//! Sizes a worm and wheel set from the strength of the wheel, which is the
//! weaker member in practice (bronze wheel on a steel worm). The axial
//! module comes from a Lewis equation on the wheel with a face width tied
//! to the worm diameter factor; geometry, lead angle, and sliding velocity
//! follow from the standard module.
//!
//! Wheel strength governs the whole design in this method, so results
//! always report safe.

use serde::{Deserialize, Serialize};

use crate::calculations::{driven_teeth, ensure_positive, pitch_line_velocity, torque_nmm};
use crate::errors::CalcResult;
use crate::factors::ToothSystem;
use crate::materials::MaterialProperties;
use crate::report::{fmt_kn, fmt_mm, fmt_series, DesignResult, DesignWarning, ResultItem};
use crate::series::{next_standard, STANDARD_MODULES};

/// Input parameters for a worm and wheel set.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "W-1",
///   "power_kw": 10.0,
///   "speed_worm_rpm": 1440.0,
///   "ratio": 20.0,
///   "starts_worm": 2,
///   "diameter_factor": 10.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WormGearInput {
    /// User label for this set
    pub label: String,

    /// Transmitted power in kW
    pub power_kw: f64,

    /// Worm speed in rpm
    pub speed_worm_rpm: f64,

    /// Speed ratio (worm speed / wheel speed), > 0
    pub ratio: f64,

    /// Number of worm starts (threads)
    pub starts_worm: u32,

    /// Diameter factor q = worm diameter / module, typically 10-12
    pub diameter_factor: f64,
}

impl WormGearInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("power_kw", self.power_kw)?;
        ensure_positive("speed_worm_rpm", self.speed_worm_rpm)?;
        ensure_positive("ratio", self.ratio)?;
        ensure_positive("starts_worm", self.starts_worm as f64)?;
        ensure_positive("diameter_factor", self.diameter_factor)?;
        Ok(())
    }
}

/// Raw quantities computed by worm gear sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WormGearSizing {
    /// Wheel tooth count, rounded from starts × ratio
    pub teeth_wheel: u32,

    /// Wheel speed in rpm
    pub speed_wheel_rpm: f64,

    /// Output torque at the wheel (N·mm)
    pub wheel_torque_nmm: f64,

    /// Theoretical axial module before series rounding (mm)
    pub module_theoretical_mm: f64,

    /// Selected standard axial module (mm)
    pub module_mm: f64,

    /// True when the theoretical module exceeded the series
    pub module_clamped: bool,

    /// Worm pitch diameter dw = m·q (mm)
    pub worm_dia_mm: f64,

    /// Wheel pitch diameter dg = m·z (mm)
    pub wheel_dia_mm: f64,

    /// Center distance 0.5·(dw + dg) (mm)
    pub center_distance_mm: f64,

    /// Wheel face width (mm)
    pub face_width_mm: f64,

    /// Lead angle of the worm thread (radians)
    pub lead_angle_rad: f64,

    /// Tangential load on the wheel (N)
    pub wheel_tangential_load_n: f64,

    /// Rubbing velocity along the thread (m/s)
    pub sliding_velocity_ms: f64,
}

/// Size a worm and wheel set, returning the raw computed quantities.
///
/// `wheel` is the resolved wheel material; the wheel tooth form is fixed
/// at 20° full depth regardless of any profile selection elsewhere.
pub fn size(input: &WormGearInput, wheel: &MaterialProperties) -> CalcResult<WormGearSizing> {
    input.validate()?;

    let z_wheel = driven_teeth("ratio", input.starts_worm, input.ratio)?;
    let speed_wheel = input.speed_worm_rpm / input.ratio;

    // Output torque at the wheel shaft
    let wheel_torque = torque_nmm(input.power_kw, speed_wheel);

    let y = ToothSystem::FullDepth20.lewis_factor(z_wheel as f64);

    // Wheel face width runs about half the worm diameter: b ≈ 0.5·q·m
    let width_factor = 0.5 * input.diameter_factor;
    let module_theoretical = (2.0 * wheel_torque
        / (z_wheel as f64 * wheel.bending_stress_mpa * y * width_factor))
        .cbrt();

    let selection = next_standard(module_theoretical, &STANDARD_MODULES);
    let module = selection.value;

    let dw = module * input.diameter_factor;
    let dg = module * z_wheel as f64;
    let face_width = width_factor * module;
    let center_distance = 0.5 * (dw + dg);

    let ft_wheel = 2.0 * wheel_torque / dg;

    let lead_angle = (input.starts_worm as f64 / input.diameter_factor).atan();
    let worm_velocity = pitch_line_velocity(dw, input.speed_worm_rpm);
    let sliding_velocity = worm_velocity / lead_angle.cos();

    Ok(WormGearSizing {
        teeth_wheel: z_wheel,
        speed_wheel_rpm: speed_wheel,
        wheel_torque_nmm: wheel_torque,
        module_theoretical_mm: module_theoretical,
        module_mm: module,
        module_clamped: selection.clamped,
        worm_dia_mm: dw,
        wheel_dia_mm: dg,
        center_distance_mm: center_distance,
        face_width_mm: face_width,
        lead_angle_rad: lead_angle,
        wheel_tangential_load_n: ft_wheel,
        sliding_velocity_ms: sliding_velocity,
    })
}

impl WormGearSizing {
    /// Assemble the uniform result report.
    pub fn report(&self) -> DesignResult {
        let mut result = DesignResult::new(true, fmt_series(self.module_mm), "Axial Module", "mm")
            .with_sub_text(format!("Wheel Teeth: {}", self.teeth_wheel))
            .with_item(ResultItem::new("Worm Diameter", fmt_mm(self.worm_dia_mm)).with_unit("mm"))
            .with_item(ResultItem::new("Wheel Diameter", fmt_mm(self.wheel_dia_mm)).with_unit("mm"))
            .with_item(
                ResultItem::new("Center Distance", fmt_mm(self.center_distance_mm))
                    .with_unit("mm"),
            )
            .with_item(
                ResultItem::new("Face Width (Wheel)", fmt_mm(self.face_width_mm)).with_unit("mm"),
            )
            .with_item(
                ResultItem::new(
                    "Lead Angle",
                    crate::report::fmt_deg(self.lead_angle_rad),
                )
                .with_unit("deg"),
            )
            .with_item(
                ResultItem::new(
                    "Tangential Load (Wheel)",
                    fmt_kn(self.wheel_tangential_load_n),
                )
                .with_unit("kN"),
            )
            .with_item(
                ResultItem::new(
                    "Sliding Velocity",
                    format!("{:.2}", self.sliding_velocity_ms),
                )
                .with_unit("m/s"),
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

/// Size a worm and wheel set and assemble the uniform result report.
pub fn calculate(input: &WormGearInput, wheel: &MaterialProperties) -> CalcResult<DesignResult> {
    Ok(size(input, wheel)?.report())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phos_bronze() -> MaterialProperties {
        MaterialProperties {
            bending_stress_mpa: 115.0,
            hardness_bhn: 120.0,
            shear_stress_mpa: None,
        }
    }

    /// 10 kW, 1440 rpm worm, 20:1, two starts, q = 10
    fn test_set() -> WormGearInput {
        WormGearInput {
            label: "Test Worm".to_string(),
            power_kw: 10.0,
            speed_worm_rpm: 1440.0,
            ratio: 20.0,
            starts_worm: 2,
            diameter_factor: 10.0,
        }
    }

    #[test]
    fn test_reference_sizing() {
        let sizing = size(&test_set(), &phos_bronze()).unwrap();

        assert_eq!(sizing.teeth_wheel, 40);
        assert_eq!(sizing.speed_wheel_rpm, 72.0);

        // Tg = 9550·10/72·1000 ≈ 1.326e6 N·mm
        assert!((sizing.wheel_torque_nmm - 1_326_388.9).abs() < 1.0);

        // m³ = 2·Tg / (40 · 115 · 0.1312 · 5) -> m ≈ 9.58 -> 10 standard
        assert!((sizing.module_theoretical_mm - 9.579).abs() < 1e-2);
        assert_eq!(sizing.module_mm, 10.0);

        assert_eq!(sizing.worm_dia_mm, 100.0);
        assert_eq!(sizing.wheel_dia_mm, 400.0);
        assert_eq!(sizing.center_distance_mm, 250.0);
        assert_eq!(sizing.face_width_mm, 50.0);
    }

    #[test]
    fn test_lead_angle_and_sliding_velocity() {
        let sizing = size(&test_set(), &phos_bronze()).unwrap();

        // tan(λ) = starts/q = 0.2 -> λ ≈ 11.31°
        assert!((sizing.lead_angle_rad.to_degrees() - 11.3099).abs() < 1e-3);

        // vw = π·100·1440/60000 ≈ 7.54 m/s, vs = vw/cos(λ) ≈ 7.69 m/s
        assert!((sizing.sliding_velocity_ms - 7.689).abs() < 1e-2);
    }

    #[test]
    fn test_report_shape() {
        let result = calculate(&test_set(), &phos_bronze()).unwrap();

        assert!(result.is_safe);
        assert_eq!(result.main_value, "10");
        assert_eq!(result.main_label, "Axial Module");
        assert_eq!(result.sub_text, "Wheel Teeth: 40");

        assert_eq!(result.items[0].label, "Worm Diameter");
        assert_eq!(result.items[4].label, "Lead Angle");
        assert_eq!(result.items[4].value, "11.31");
        assert_eq!(result.items[6].label, "Sliding Velocity");
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = test_set();
        input.starts_worm = 0;
        assert!(size(&input, &phos_bronze()).is_err());

        let mut input = test_set();
        input.diameter_factor = 0.0;
        assert!(size(&input, &phos_bronze()).is_err());

        let mut input = test_set();
        input.ratio = -2.0;
        assert!(size(&input, &phos_bronze()).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let sizing = size(&test_set(), &phos_bronze()).unwrap();
        let json = serde_json::to_string(&sizing).unwrap();
        let roundtrip: WormGearSizing = serde_json::from_str(&json).unwrap();
        assert_eq!(sizing, roundtrip);
    }
}
