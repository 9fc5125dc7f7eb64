//! # Standard Size Series
//!
//! Preferred-size resolution for modules, shaft diameters, and spring wire.
//! Raw theoretical sizes coming out of a strength equation are never used
//! directly; they are rounded up to the next entry of a standard series so
//! the part can actually be cut with stock tooling.
//!
//! Three series are in play:
//! - Gear modules follow the preferred module table ([`STANDARD_MODULES`])
//! - Shaft diameters round up to 5 mm steps
//! - Spring wire diameters round up to 0.1 mm steps
//!
//! ## Example
//!
//! ```rust
//! use design_core::series::{next_standard, STANDARD_MODULES};
//!
//! let selection = next_standard(3.706, &STANDARD_MODULES);
//! assert_eq!(selection.value, 4.0);
//! assert!(!selection.clamped);
//! ```

use serde::{Deserialize, Serialize};

/// Preferred gear module series (mm), ascending.
///
/// Invariant: strictly increasing. The resolver scans for the first entry
/// at or above the theoretical value.
pub const STANDARD_MODULES: [f64; 18] = [
    1.0, 1.25, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 12.0, 16.0, 20.0, 25.0, 32.0, 40.0,
    50.0,
];

/// Shaft diameters are stocked in 5 mm increments.
pub const SHAFT_STEP_MM: f64 = 5.0;

/// Spring wire is drawn in 0.1 mm increments.
pub const WIRE_STEP_MM: f64 = 0.1;

/// Outcome of a standard-series lookup.
///
/// `clamped` is set when the theoretical size exceeded the whole table and
/// the largest entry was returned instead. Callers surface this to the user
/// rather than hiding it; see `report::DesignWarning`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardSize {
    /// Selected series entry (mm)
    pub value: f64,
    /// True when the theoretical size exceeded the largest series entry
    pub clamped: bool,
}

/// Resolve a theoretical size against an ascending series.
///
/// Returns the first entry ≥ `theoretical`. When no entry qualifies the
/// last (largest) entry is returned with `clamped` set; the series lookup
/// itself never fails.
pub fn next_standard(theoretical: f64, series: &[f64]) -> StandardSize {
    for &entry in series {
        if entry >= theoretical {
            return StandardSize {
                value: entry,
                clamped: false,
            };
        }
    }
    StandardSize {
        value: series[series.len() - 1],
        clamped: true,
    }
}

/// Round a shaft diameter up to the next 5 mm step.
pub fn next_shaft_diameter(d_mm: f64) -> f64 {
    (d_mm / SHAFT_STEP_MM).ceil() * SHAFT_STEP_MM
}

/// Round a spring wire diameter up to the next 0.1 mm step.
///
/// Works on a ×10 scale so the ceiling lands on an exact tenth.
pub fn next_wire_diameter(d_mm: f64) -> f64 {
    (d_mm * 10.0).ceil() / 10.0
}
