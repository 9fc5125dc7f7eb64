//! # design_core - Machine Element Sizing Engine
//!
//! `design_core` is the computational heart of Gearwright, providing machine
//! element sizing calculations with a clean, LLM-friendly API. All inputs and
//! outputs are JSON-serializable, making it ideal for integration with AI
//! assistants via MCP or similar protocols.
//!
//! Given operating conditions (power, speed, ratio, geometry constraints) and
//! resolved material strength data, the engine computes standardized
//! dimensions (module, diameter, face width, wire size) for gears, shafts,
//! and springs, and reports whether the sizing satisfies its secondary
//! checks. The method is the classic simplified one: Lewis bending,
//! Buckingham dynamic and wear loads, the Wahl factor for springs, and the
//! ASME combined-loading equation for shafts.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Numbers In, Numbers Out**: Material identifiers are resolved to
//!   numeric properties *before* a sizing function runs (see [`materials`])
//!
//! ## Quick Start
//!
//! ```rust
//! use design_core::calculations::spring::{calculate, SpringInput};
//! use design_core::materials::{resolve, MaterialOverrides};
//!
//! let input = SpringInput {
//!     label: "SP-1".to_string(),
//!     load_n: 500.0,
//!     spring_index: 6.0,
//!     rigidity_modulus_gpa: 80.0,
//!     target_deflection_mm: None,
//! };
//!
//! // The caller resolves material numbers; the core never sees the id
//! let material = resolve("spring_steel", &MaterialOverrides::default()).unwrap();
//!
//! let result = calculate(&input, &material).unwrap();
//! assert_eq!(result.main_value, "4.0");
//! assert_eq!(result.main_label, "Wire Diameter");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All sizing calculation types (gears, shafts, springs)
//! - [`materials`] - Material catalog and override resolution
//! - [`factors`] - Lewis and Wahl form factors
//! - [`series`] - Standard preferred-size resolution
//! - [`report`] - Uniform result structure and assembly
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod factors;
pub mod materials;
pub mod report;
pub mod series;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use report::{DesignResult, DesignWarning, ItemStatus, ResultItem};
