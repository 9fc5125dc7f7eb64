//! # Shaft Sizing
//!
//! Sizes a solid circular shaft under combined bending and torsion using
//! the ASME code equation: shock/fatigue factors on each moment, maximum
//! shear stress theory for the allowable, and the solid-shaft torsion
//! formula solved for diameter.
//!
//! The safety factor is baked into the allowable-stress step, so the
//! result always reports safe rather than re-verifying.

use serde::{Deserialize, Serialize};

use crate::calculations::ensure_positive;
use crate::errors::CalcResult;
use crate::materials::MaterialProperties;
use crate::report::{DesignResult, ResultItem};
use crate::series::next_shaft_diameter;
use crate::units::{Megapascals, Meters, Millimeters, Pascals};

/// Input parameters for a shaft.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "S-1",
///   "power_kw": 15.0,
///   "speed_rpm": 1440.0,
///   "bending_moment_nm": 100.0,
///   "factor_kb": 1.5,
///   "factor_kt": 1.0,
///   "safety_factor": 2.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShaftInput {
    /// User label for this shaft (e.g., "S-1", "Input Shaft")
    pub label: String,

    /// Transmitted power in kW
    pub power_kw: f64,

    /// Shaft speed in rpm
    pub speed_rpm: f64,

    /// Applied bending moment in N·m
    pub bending_moment_nm: f64,

    /// Shock and fatigue factor on bending, Kb
    pub factor_kb: f64,

    /// Shock and fatigue factor on torsion, Kt
    pub factor_kt: f64,

    /// Design safety factor applied to the yield strength
    pub safety_factor: f64,
}

impl ShaftInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("power_kw", self.power_kw)?;
        ensure_positive("speed_rpm", self.speed_rpm)?;
        if self.bending_moment_nm < 0.0 {
            return Err(crate::errors::CalcError::invalid_input(
                "bending_moment_nm",
                self.bending_moment_nm.to_string(),
                "Bending moment cannot be negative",
            ));
        }
        ensure_positive("factor_kb", self.factor_kb)?;
        ensure_positive("factor_kt", self.factor_kt)?;
        ensure_positive("safety_factor", self.safety_factor)?;
        Ok(())
    }
}

/// Raw quantities computed by shaft sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaftSizing {
    /// Transmitted torque (N·m)
    pub torque_nm: f64,

    /// Equivalent twisting moment Te = sqrt((Kb·M)² + (Kt·T)²) (N·m)
    pub equivalent_moment_nm: f64,

    /// Allowable shear stress from yield / (2·SF) (MPa)
    pub allowable_shear_mpa: f64,

    /// Raw required diameter from the torsion formula (mm)
    pub diameter_mm: f64,

    /// Diameter rounded up to the next 5 mm (mm)
    pub standard_diameter_mm: f64,

    /// Safety factor carried through for reporting
    pub safety_factor: f64,

    /// Bending moment carried through for reporting (N·m)
    pub bending_moment_nm: f64,
}

/// Size a shaft, returning the raw computed quantities.
///
/// `material.bending_stress_mpa` is read as the yield strength; maximum
/// shear stress theory halves it, the safety factor divides it again.
pub fn size(input: &ShaftInput, material: &MaterialProperties) -> CalcResult<ShaftSizing> {
    input.validate()?;

    // T = P / ω, in N·m for P in W
    let torque_nm =
        60.0 * input.power_kw * 1000.0 / (2.0 * std::f64::consts::PI * input.speed_rpm);

    let allowable_shear = Megapascals(
        material.bending_stress_mpa / (2.0 * input.safety_factor),
    );

    let equivalent_moment = ((input.factor_kb * input.bending_moment_nm).powi(2)
        + (input.factor_kt * torque_nm).powi(2))
    .sqrt();

    // d³ = 16·Te / (π·τ), consistent SI units give d in meters
    let allowable_shear_pa: Pascals = allowable_shear.into();
    let diameter_m = Meters(
        (16.0 * equivalent_moment / (std::f64::consts::PI * allowable_shear_pa.value())).cbrt(),
    );
    let diameter: Millimeters = diameter_m.into();

    Ok(ShaftSizing {
        torque_nm,
        equivalent_moment_nm: equivalent_moment,
        allowable_shear_mpa: allowable_shear.value(),
        diameter_mm: diameter.value(),
        standard_diameter_mm: next_shaft_diameter(diameter.value()),
        safety_factor: input.safety_factor,
        bending_moment_nm: input.bending_moment_nm,
    })
}

impl ShaftSizing {
    /// Assemble the uniform result report.
    pub fn report(&self) -> DesignResult {
        DesignResult::new(
            true,
            format!("{}", self.standard_diameter_mm),
            "Shaft Diameter",
            "mm",
        )
        .with_sub_text(format!("Calculated: {:.2} mm", self.diameter_mm))
        .with_item(ResultItem::new("Torque", format!("{:.2}", self.torque_nm)).with_unit("N-m"))
        .with_item(
            ResultItem::new("Bending Moment", format!("{}", self.bending_moment_nm))
                .with_unit("N-m"),
        )
        .with_item(
            ResultItem::new(
                "Equiv. Twisting Moment",
                format!("{:.2}", self.equivalent_moment_nm),
            )
            .with_unit("N-m"),
        )
        .with_item(
            ResultItem::new(
                "Allowable Shear",
                format!("{:.2}", self.allowable_shear_mpa),
            )
            .with_unit("MPa"),
        )
        .with_item(ResultItem::new(
            "Safety Factor",
            format!("{}", self.safety_factor),
        ))
    }
}

/// Size a shaft and assemble the uniform result report.
pub fn calculate(input: &ShaftInput, material: &MaterialProperties) -> CalcResult<DesignResult> {
    Ok(size(input, material)?.report())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c45() -> MaterialProperties {
        MaterialProperties {
            bending_stress_mpa: 300.0,
            hardness_bhn: 225.0,
            shear_stress_mpa: Some(180.0),
        }
    }

    /// 15 kW at 1440 rpm with 100 N·m bending, Kb = 1.5, Kt = 1.0, SF = 2
    fn test_shaft() -> ShaftInput {
        ShaftInput {
            label: "Test Shaft".to_string(),
            power_kw: 15.0,
            speed_rpm: 1440.0,
            bending_moment_nm: 100.0,
            factor_kb: 1.5,
            factor_kt: 1.0,
            safety_factor: 2.0,
        }
    }

    #[test]
    fn test_reference_sizing() {
        let sizing = size(&test_shaft(), &c45()).unwrap();

        // T = 60·15000 / (2π·1440) ≈ 99.47 N·m
        assert!((sizing.torque_nm - 99.47).abs() < 0.01);

        // τ = 300 / (2·2) = 75 MPa
        assert!((sizing.allowable_shear_mpa - 75.0).abs() < 1e-9);

        // Te = sqrt(150² + 99.47²) ≈ 180.0 N·m
        assert!((sizing.equivalent_moment_nm - 179.98).abs() < 0.01);

        // d = cbrt(16·Te/(π·τ)) ≈ 23.03 mm -> 25 mm standard
        assert!((sizing.diameter_mm - 23.03).abs() < 0.01);
        assert_eq!(sizing.standard_diameter_mm, 25.0);
    }

    #[test]
    fn test_standard_diameter_is_multiple_of_five() {
        for power in [1.0, 7.5, 15.0, 55.0, 250.0] {
            let mut input = test_shaft();
            input.power_kw = power;
            let sizing = size(&input, &c45()).unwrap();
            let steps = sizing.standard_diameter_mm / 5.0;
            assert!((steps - steps.round()).abs() < 1e-9);
            assert!(sizing.standard_diameter_mm >= sizing.diameter_mm);
        }
    }

    #[test]
    fn test_diameter_monotonic_in_power() {
        let mut previous = 0.0;
        for power in [5.0, 15.0, 45.0, 135.0] {
            let mut input = test_shaft();
            input.power_kw = power;
            let sizing = size(&input, &c45()).unwrap();
            assert!(sizing.diameter_mm > previous);
            previous = sizing.diameter_mm;
        }
    }

    #[test]
    fn test_pure_torsion_when_no_bending() {
        let mut input = test_shaft();
        input.bending_moment_nm = 0.0;
        let sizing = size(&input, &c45()).unwrap();
        assert!((sizing.equivalent_moment_nm - sizing.torque_nm).abs() < 1e-9);
    }

    #[test]
    fn test_report_shape() {
        let result = calculate(&test_shaft(), &c45()).unwrap();

        assert!(result.is_safe);
        assert_eq!(result.main_value, "25");
        assert_eq!(result.main_label, "Shaft Diameter");
        assert_eq!(result.main_unit, "mm");
        assert!(result.sub_text.starts_with("Calculated: 23.03"));

        assert_eq!(result.items[0].label, "Torque");
        assert_eq!(result.items[3].label, "Allowable Shear");
        assert_eq!(result.items[3].value, "75.00");
        assert_eq!(result.items[4].label, "Safety Factor");
        assert_eq!(result.items[4].value, "2");
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = test_shaft();
        input.speed_rpm = 0.0;
        assert!(size(&input, &c45()).is_err());

        let mut input = test_shaft();
        input.bending_moment_nm = -10.0;
        assert!(size(&input, &c45()).is_err());

        let mut input = test_shaft();
        input.safety_factor = 0.0;
        assert!(size(&input, &c45()).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let sizing = size(&test_shaft(), &c45()).unwrap();
        let json = serde_json::to_string(&sizing).unwrap();
        let roundtrip: ShaftSizing = serde_json::from_str(&json).unwrap();
        assert_eq!(sizing, roundtrip);
    }
}
