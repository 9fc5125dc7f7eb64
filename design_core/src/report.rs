//! # Design Reports
//!
//! The uniform result structure every sizing calculation assembles its raw
//! quantities into. A [`DesignResult`] carries one headline sized quantity
//! (module, diameter, wire size), a one-line qualifier, and an ordered
//! itemized breakdown suitable for direct rendering by a front end.
//!
//! Item order is insertion order and is part of the contract: presentation
//! layers and tests index into `items` positionally.
//!
//! ## Example
//!
//! ```rust
//! use design_core::report::{DesignResult, ResultItem, ItemStatus};
//!
//! let result = DesignResult::new(true, "4", "Standard Module", "mm")
//!     .with_sub_text("Design is SAFE against wear")
//!     .with_item(ResultItem::new("Weaker Member", "Pinion"))
//!     .with_item(
//!         ResultItem::new("Wear Load", "7.37")
//!             .with_unit("kN")
//!             .highlighted()
//!             .with_status(ItemStatus::Safe),
//!     );
//!
//! assert_eq!(result.items[0].label, "Weaker Member");
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{Degrees, Kilonewtons, Newtons, Radians};

/// Safety annotation on a single breakdown item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Safe,
    Unsafe,
    Neutral,
}

/// One row of the itemized result breakdown.
///
/// `value` is pre-formatted for display; numeric precision is decided by
/// the assembling calculation, not the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[serde(default)]
    pub highlight: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub status: Option<ItemStatus>,
}

impl ResultItem {
    /// Create a plain label/value item
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        ResultItem {
            label: label.into(),
            value: value.into(),
            unit: None,
            highlight: false,
            status: None,
        }
    }

    /// Attach a display unit
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Mark this item as the one the verdict hinges on
    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    /// Attach a safety status
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Non-fatal condition surfaced alongside a result.
///
/// Sizing never fails on these; the result is still usable, but the caller
/// should show the condition instead of silently accepting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum DesignWarning {
    /// The theoretical size exceeded the largest standard series entry and
    /// was clamped to it.
    SizeOutOfRange { theoretical: f64, clamped_to: f64 },
}

impl std::fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignWarning::SizeOutOfRange {
                theoretical,
                clamped_to,
            } => write!(
                f,
                "Theoretical size {:.2} mm exceeds the standard series; clamped to {} mm",
                theoretical, clamped_to
            ),
        }
    }
}

/// Uniform, renderable outcome of one sizing calculation.
///
/// Produced once per call; an immutable value object with no identity
/// beyond the call that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Overall verdict. Families without a secondary check report true.
    pub is_safe: bool,

    /// Headline sized quantity, pre-formatted (e.g. "4", "25", "4.0")
    pub main_value: String,

    /// Headline label (e.g. "Standard Module", "Shaft Diameter")
    pub main_label: String,

    /// Headline unit (e.g. "mm")
    pub main_unit: String,

    /// One-line qualifier under the headline
    pub sub_text: String,

    /// Ordered breakdown; insertion order is presentation order
    pub items: Vec<ResultItem>,

    /// Surfaced non-fatal conditions (empty in the common case)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub warnings: Vec<DesignWarning>,
}

impl DesignResult {
    /// Start a result with its headline quantity
    pub fn new(
        is_safe: bool,
        main_value: impl Into<String>,
        main_label: impl Into<String>,
        main_unit: impl Into<String>,
    ) -> Self {
        DesignResult {
            is_safe,
            main_value: main_value.into(),
            main_label: main_label.into(),
            main_unit: main_unit.into(),
            sub_text: String::new(),
            items: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Set the one-line qualifier
    pub fn with_sub_text(mut self, sub_text: impl Into<String>) -> Self {
        self.sub_text = sub_text.into();
        self
    }

    /// Append a breakdown item
    pub fn with_item(mut self, item: ResultItem) -> Self {
        self.items.push(item);
        self
    }

    /// Append a warning
    pub fn with_warning(mut self, warning: DesignWarning) -> Self {
        self.warnings.push(warning);
        self
    }

    /// Find a breakdown item by label
    pub fn item(&self, label: &str) -> Option<&ResultItem> {
        self.items.iter().find(|i| i.label == label)
    }
}

// ============================================================================
// Formatting helpers shared by the sizing modules
// ============================================================================

/// Format a length in mm at two decimals
pub(crate) fn fmt_mm(value_mm: f64) -> String {
    format!("{:.2}", value_mm)
}

/// Format a force given in newtons as kN at two decimals
pub(crate) fn fmt_kn(value_n: f64) -> String {
    let kn: Kilonewtons = Newtons(value_n).into();
    format!("{:.2}", kn.value())
}

/// Format an angle given in radians as degrees at two decimals
pub(crate) fn fmt_deg(value_rad: f64) -> String {
    let deg: Degrees = Radians(value_rad).into();
    format!("{:.2}", deg.value())
}

/// Format a standard series value without trailing zeros (4 -> "4", 1.25 -> "1.25")
pub(crate) fn fmt_series(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DesignResult {
        DesignResult::new(false, "4", "Standard Module", "mm")
            .with_sub_text("Design is NOT SAFE against wear")
            .with_item(ResultItem::new("Weaker Member", "Pinion"))
            .with_item(ResultItem::new("Face Width", "40.00").with_unit("mm"))
            .with_item(
                ResultItem::new("Wear Load", "7.37")
                    .with_unit("kN")
                    .highlighted()
                    .with_status(ItemStatus::Unsafe),
            )
    }

    #[test]
    fn test_item_order_is_insertion_order() {
        let result = sample();
        assert_eq!(result.items[0].label, "Weaker Member");
        assert_eq!(result.items[1].label, "Face Width");
        assert_eq!(result.items[2].label, "Wear Load");
    }

    #[test]
    fn test_item_lookup() {
        let result = sample();
        let wear = result.item("Wear Load").unwrap();
        assert!(wear.highlight);
        assert_eq!(wear.status, Some(ItemStatus::Unsafe));
        assert!(result.item("No Such Item").is_none());
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let plain = ResultItem::new("Weaker Member", "Pinion");
        let json = serde_json::to_string(&plain).unwrap();
        assert!(!json.contains("unit"));
        assert!(!json.contains("highlight"));
        assert!(!json.contains("status"));
    }

    #[test]
    fn test_status_serialization_is_lowercase() {
        let json = serde_json::to_string(&ItemStatus::Unsafe).unwrap();
        assert_eq!(json, "\"unsafe\"");
    }

    #[test]
    fn test_result_roundtrip() {
        let result = sample().with_warning(DesignWarning::SizeOutOfRange {
            theoretical: 64.2,
            clamped_to: 50.0,
        });
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: DesignResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    #[test]
    fn test_warning_display() {
        let warning = DesignWarning::SizeOutOfRange {
            theoretical: 64.23,
            clamped_to: 50.0,
        };
        assert_eq!(
            warning.to_string(),
            "Theoretical size 64.23 mm exceeds the standard series; clamped to 50 mm"
        );
    }

    #[test]
    fn test_formatting_helpers() {
        assert_eq!(fmt_mm(40.0), "40.00");
        assert_eq!(fmt_kn(3581.25), "3.58");
        assert_eq!(fmt_deg(std::f64::consts::FRAC_PI_4), "45.00");
        assert_eq!(fmt_series(4.0), "4");
        assert_eq!(fmt_series(1.25), "1.25");
    }
}
