//! # Helical Compression Spring Sizing
//!
//! Sizes the wire of a helical compression spring by the Wahl method: the
//! curvature-corrected shear stress equation solved for wire diameter,
//! rounded up to stock wire sizes. Stiffness and deflection are then
//! reported for a fixed assumed count of active coils.
//!
//! The permissible shear stress already embodies the design margin, so
//! results always report safe.

use serde::{Deserialize, Serialize};

use crate::calculations::ensure_positive;
use crate::errors::{CalcError, CalcResult};
use crate::factors::wahl_factor;
use crate::materials::MaterialProperties;
use crate::report::{DesignResult, ItemStatus, ResultItem};
use crate::series::next_wire_diameter;

/// Active coil count assumed when reporting stiffness and deflection.
///
/// The wire sizing itself does not depend on it.
const ASSUMED_ACTIVE_COILS: f64 = 10.0;

/// Input parameters for a helical compression spring.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "SP-1",
///   "load_n": 500.0,
///   "spring_index": 6.0,
///   "rigidity_modulus_gpa": 80.0,
///   "target_deflection_mm": 25.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpringInput {
    /// User label for this spring
    pub label: String,

    /// Axial working load in N
    pub load_n: f64,

    /// Spring index C = mean coil diameter / wire diameter, must exceed 1
    pub spring_index: f64,

    /// Rigidity (shear) modulus G in GPa
    pub rigidity_modulus_gpa: f64,

    /// Requested working deflection in mm, echoed in the report for
    /// comparison against the achieved value
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub target_deflection_mm: Option<f64>,
}

impl SpringInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("load_n", self.load_n)?;
        if self.spring_index <= 1.0 {
            return Err(CalcError::invalid_input(
                "spring_index",
                self.spring_index.to_string(),
                "Spring index must exceed 1 (Wahl factor is singular at C = 1)",
            ));
        }
        ensure_positive("rigidity_modulus_gpa", self.rigidity_modulus_gpa)?;
        if let Some(target) = self.target_deflection_mm {
            ensure_positive("target_deflection_mm", target)?;
        }
        Ok(())
    }
}

/// Raw quantities computed by spring sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpringSizing {
    /// Wahl stress-concentration factor
    pub wahl_factor: f64,

    /// Permissible shear stress used for sizing (MPa)
    pub shear_stress_mpa: f64,

    /// Theoretical wire diameter before rounding (mm)
    pub wire_dia_theoretical_mm: f64,

    /// Wire diameter rounded up to the next 0.1 mm (mm)
    pub wire_dia_mm: f64,

    /// Mean coil diameter D = C·d (mm)
    pub mean_coil_dia_mm: f64,

    /// Assumed active coil count behind the stiffness figure
    pub active_coils: f64,

    /// Spring stiffness (N/mm)
    pub stiffness_n_mm: f64,

    /// Deflection under the working load (mm)
    pub deflection_mm: f64,

    /// Requested deflection carried through for reporting (mm)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub target_deflection_mm: Option<f64>,
}

/// Size a helical compression spring, returning the raw computed
/// quantities.
///
/// The material must carry a permissible shear stress; gear-only catalog
/// entries do not.
pub fn size(input: &SpringInput, material: &MaterialProperties) -> CalcResult<SpringSizing> {
    input.validate()?;

    let tau = material
        .shear_stress_mpa
        .ok_or_else(|| CalcError::missing_property("shear_stress_mpa"))?;
    if tau <= 0.0 {
        return Err(CalcError::invalid_input(
            "shear_stress_mpa",
            tau.to_string(),
            "Permissible shear stress must be positive",
        ));
    }

    let c = input.spring_index;
    let k_wahl = wahl_factor(c);

    // τ = K·8FC/(πd²) solved for d
    let d_theoretical =
        (k_wahl * 8.0 * input.load_n * c / (std::f64::consts::PI * tau)).sqrt();
    let d = next_wire_diameter(d_theoretical);

    let mean_coil_dia = c * d;

    // Stiffness k = G·d / (8C³n), with G converted from GPa to N/mm²
    let stiffness = input.rigidity_modulus_gpa * 1000.0 * d
        / (8.0 * c.powi(3) * ASSUMED_ACTIVE_COILS);
    let deflection = input.load_n / stiffness;

    Ok(SpringSizing {
        wahl_factor: k_wahl,
        shear_stress_mpa: tau,
        wire_dia_theoretical_mm: d_theoretical,
        wire_dia_mm: d,
        mean_coil_dia_mm: mean_coil_dia,
        active_coils: ASSUMED_ACTIVE_COILS,
        stiffness_n_mm: stiffness,
        deflection_mm: deflection,
        target_deflection_mm: input.target_deflection_mm,
    })
}

impl SpringSizing {
    /// Assemble the uniform result report.
    pub fn report(&self) -> DesignResult {
        let mut result = DesignResult::new(
            true,
            format!("{:.1}", self.wire_dia_mm),
            "Wire Diameter",
            "mm",
        )
        .with_sub_text(format!("Mean Dia: {:.1} mm", self.mean_coil_dia_mm))
        .with_item(ResultItem::new(
            "Wahl Factor",
            format!("{:.3}", self.wahl_factor),
        ))
        .with_item(
            ResultItem::new("Max Shear Stress", format!("{}", self.shear_stress_mpa))
                .with_unit("MPa"),
        )
        .with_item(ResultItem::new(
            "Active Coils (Assumed)",
            format!("{}", self.active_coils),
        ))
        .with_item(
            ResultItem::new("Stiffness", format!("{:.2}", self.stiffness_n_mm))
                .with_unit("N/mm"),
        )
        .with_item(
            ResultItem::new("Deflection", format!("{:.2}", self.deflection_mm)).with_unit("mm"),
        );

        if let Some(target) = self.target_deflection_mm {
            result = result.with_item(
                ResultItem::new("Target Deflection", format!("{:.2}", target))
                    .with_unit("mm")
                    .with_status(ItemStatus::Neutral),
            );
        }

        result
    }
}

/// Size a helical compression spring and assemble the uniform result
/// report.
pub fn calculate(input: &SpringInput, material: &MaterialProperties) -> CalcResult<DesignResult> {
    Ok(size(input, material)?.report())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spring_steel() -> MaterialProperties {
        MaterialProperties {
            bending_stress_mpa: 1200.0,
            hardness_bhn: 400.0,
            shear_stress_mpa: Some(600.0),
        }
    }

    /// 500 N at C = 6, G = 80 GPa, chrome-vanadium spring steel
    fn test_spring() -> SpringInput {
        SpringInput {
            label: "Test Spring".to_string(),
            load_n: 500.0,
            spring_index: 6.0,
            rigidity_modulus_gpa: 80.0,
            target_deflection_mm: None,
        }
    }

    #[test]
    fn test_reference_sizing() {
        let sizing = size(&test_spring(), &spring_steel()).unwrap();

        // K = 23/20 + 0.615/6 = 1.2525
        assert!((sizing.wahl_factor - 1.2525).abs() < 1e-9);

        // d = sqrt(K·8·500·6 / (π·600)) ≈ 3.993 -> 4.0 stock wire
        assert!((sizing.wire_dia_theoretical_mm - 3.993).abs() < 1e-3);
        assert!((sizing.wire_dia_mm - 4.0).abs() < 1e-9);

        assert!((sizing.mean_coil_dia_mm - 24.0).abs() < 1e-9);

        // k = 80000·4 / (8·216·10) ≈ 18.52 N/mm, δ = 500/k ≈ 27.0 mm
        assert!((sizing.stiffness_n_mm - 18.5185).abs() < 1e-3);
        assert!((sizing.deflection_mm - 27.0).abs() < 1e-3);
    }

    #[test]
    fn test_wire_size_monotonic_in_load() {
        let mut previous = 0.0;
        for load in [100.0, 500.0, 2000.0, 8000.0] {
            let mut input = test_spring();
            input.load_n = load;
            let sizing = size(&input, &spring_steel()).unwrap();
            assert!(sizing.wire_dia_theoretical_mm > previous);
            assert!(sizing.wire_dia_mm >= sizing.wire_dia_theoretical_mm);
            previous = sizing.wire_dia_theoretical_mm;
        }
    }

    #[test]
    fn test_degenerate_spring_index_rejected() {
        let mut input = test_spring();
        input.spring_index = 1.0;
        let err = size(&input, &spring_steel()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        input.spring_index = 0.5;
        assert!(size(&input, &spring_steel()).is_err());
    }

    #[test]
    fn test_material_without_shear_stress_rejected() {
        let cast_iron = MaterialProperties {
            bending_stress_mpa: 100.0,
            hardness_bhn: 180.0,
            shear_stress_mpa: None,
        };
        let err = size(&test_spring(), &cast_iron).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PROPERTY");
    }

    #[test]
    fn test_report_shape() {
        let result = calculate(&test_spring(), &spring_steel()).unwrap();

        assert!(result.is_safe);
        assert_eq!(result.main_value, "4.0");
        assert_eq!(result.main_label, "Wire Diameter");
        assert_eq!(result.sub_text, "Mean Dia: 24.0 mm");

        assert_eq!(result.items[0].label, "Wahl Factor");
        assert!(result.items[0].value.starts_with("1.25"));
        assert_eq!(result.items[1].value, "600");
        assert_eq!(result.items[2].value, "10");
        assert_eq!(result.items[3].value, "18.52");
        assert_eq!(result.items[4].value, "27.00");
    }

    #[test]
    fn test_target_deflection_echoed_not_solved() {
        let mut input = test_spring();
        input.target_deflection_mm = Some(25.0);
        let sizing = size(&input, &spring_steel()).unwrap();

        // The target does not change the assumed coil count or stiffness
        assert_eq!(sizing.active_coils, 10.0);
        assert!((sizing.deflection_mm - 27.0).abs() < 1e-3);

        let result = sizing.report();
        let target = result.item("Target Deflection").unwrap();
        assert_eq!(target.value, "25.00");
        assert_eq!(target.status, Some(ItemStatus::Neutral));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let sizing = size(&test_spring(), &spring_steel()).unwrap();
        let json = serde_json::to_string(&sizing).unwrap();
        let roundtrip: SpringSizing = serde_json::from_str(&json).unwrap();
        assert_eq!(sizing, roundtrip);
    }
}
