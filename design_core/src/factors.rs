//! # Form Factors
//!
//! Tooth and coil form factors shared by the sizing calculations: the Lewis
//! form factor for gear tooth bending and the Wahl stress-concentration
//! factor for helical springs.
//!
//! ## Example
//!
//! ```rust
//! use design_core::factors::{wahl_factor, ToothSystem};
//!
//! let y = ToothSystem::Stub20.lewis_factor(20.0);
//! assert!((y - 0.1275).abs() < 1e-9);
//!
//! let k = wahl_factor(6.0);
//! assert!((k - 1.2525).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

/// Gear tooth profile systems.
///
/// Selects the piecewise Lewis form factor formula. Fixed for the lifetime
/// of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToothSystem {
    /// 14.5° composite / full depth involute
    FullDepth14_5,
    /// 20° full depth involute
    FullDepth20,
    /// 20° stub involute
    Stub20,
}

impl ToothSystem {
    /// All tooth system variants for UI selection
    pub const ALL: [ToothSystem; 3] = [
        ToothSystem::FullDepth14_5,
        ToothSystem::FullDepth20,
        ToothSystem::Stub20,
    ];

    /// Lewis form factor y for a tooth count.
    ///
    /// `z` is real-valued: helical and bevel sizing pass the formative
    /// (virtual) tooth count, which is generally not an integer.
    pub fn lewis_factor(&self, z: f64) -> f64 {
        match self {
            ToothSystem::FullDepth14_5 => 0.124 - 0.684 / z,
            ToothSystem::FullDepth20 => 0.154 - 0.912 / z,
            ToothSystem::Stub20 => 0.175 - 0.95 / z,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ToothSystem::FullDepth14_5 => "14.5° Full Depth",
            ToothSystem::FullDepth20 => "20° Full Depth",
            ToothSystem::Stub20 => "20° Stub",
        }
    }
}

impl std::fmt::Display for ToothSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Wahl stress-concentration factor for a helical spring.
///
/// `K = (4C - 1)/(4C - 4) + 0.615/C` where `C` is the spring index
/// (mean coil diameter / wire diameter).
///
/// The denominator vanishes at `C = 1`; callers must guarantee `C > 1`
/// (spring input validation rejects anything else before arithmetic).
pub fn wahl_factor(c: f64) -> f64 {
    (4.0 * c - 1.0) / (4.0 * c - 4.0) + 0.615 / c
}
