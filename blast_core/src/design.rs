//! # Blast Design Evaluation
//!
//! Evaluates candidate blast-hole configurations for a single bench and
//! selects the one with the lowest total explosive cost.
//!
//! ## Assumptions
//!
//! - Bench geometry follows the empirical proportions in [`crate::formulas`]
//! - Candidates are independent: each is priced on its own parameters only
//! - The powder factor applies to the whole bench, not per candidate
//! - A candidate whose total cost is zero, negative, or non-finite cannot be
//!   selected; remaining candidates are still eligible
//!
//! ## Example
//!
//! ```rust
//! use blast_core::design::{evaluate, BlastInput, HoleOption};
//!
//! let input = BlastInput {
//!     powder_factor: 2.5,
//!     options: vec![
//!         HoleOption { diameter_mm: 100.0, cost_per_kg: 120.0, hole_count: 10 },
//!         HoleOption { diameter_mm: 150.0, cost_per_kg: 95.0, hole_count: 8 },
//!     ],
//! };
//!
//! let result = evaluate(&input).unwrap();
//! println!("Selected option {}", result.selected_option);
//! println!("Charge per hole: {:.3} kg", result.charge_per_hole_kg);
//! println!("Total cost: {:.2}", result.total_cost);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BlastError, BlastResult};
use crate::formulas;

/// One candidate hole configuration.
///
/// ## JSON Example
///
/// ```json
/// { "diameter_mm": 100.0, "cost_per_kg": 120.0, "hole_count": 10 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleOption {
    /// Blast-hole diameter in millimetres
    pub diameter_mm: f64,

    /// Explosive cost per kilogram, in the caller's currency
    pub cost_per_kg: f64,

    /// Number of holes drilled for this option
    pub hole_count: u32,
}

/// Input parameters for one bench evaluation.
///
/// Options are evaluated in order; order matters because exact cost ties go
/// to the earlier candidate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "powder_factor": 2.5,
///   "options": [
///     { "diameter_mm": 100.0, "cost_per_kg": 120.0, "hole_count": 10 },
///     { "diameter_mm": 150.0, "cost_per_kg": 95.0, "hole_count": 8 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlastInput {
    /// Powder factor of the rock mass in kg/m³: the explosive required to
    /// break one cubic metre
    pub powder_factor: f64,

    /// Candidate hole configurations, in the order the caller supplied them
    pub options: Vec<HoleOption>,
}

impl BlastInput {
    /// Validate input parameters.
    ///
    /// Rejects request-level problems only. Degenerate values inside an
    /// individual option (zero diameter, negative cost) do not fail
    /// validation; they disqualify that candidate during evaluation instead.
    pub fn validate(&self) -> BlastResult<()> {
        if !self.powder_factor.is_finite() {
            return Err(BlastError::invalid_input(
                "powder_factor",
                self.powder_factor.to_string(),
                "Powder factor must be a finite number",
            ));
        }
        if self.powder_factor <= 0.0 {
            return Err(BlastError::invalid_input(
                "powder_factor",
                self.powder_factor.to_string(),
                "Powder factor must be positive",
            ));
        }
        if self.options.is_empty() {
            return Err(BlastError::invalid_input(
                "options",
                "0",
                "At least one option is required",
            ));
        }
        Ok(())
    }
}

/// Full derived parameter set for one candidate option.
///
/// All quantities follow from the option's fields and the bench powder
/// factor; see [`crate::formulas`] for the individual relations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDesign {
    /// Blast-hole diameter (mm)
    pub diameter_mm: f64,

    /// Bench height (m)
    pub bench_height_m: f64,

    /// Number of holes
    pub hole_count: u32,

    /// Explosive cost per kilogram
    pub cost_per_kg: f64,

    /// Burden (m)
    pub burden_m: f64,

    /// Drilled hole length including sub-drill (m)
    pub hole_length_m: f64,

    /// Hole spacing (m)
    pub spacing_m: f64,

    /// Mean fragmentation size (mm)
    pub fragmentation_size_mm: f64,

    /// Explosive charge per hole (kg)
    pub charge_per_hole_kg: f64,

    /// Total explosive cost for this option
    pub total_cost: f64,
}

impl CandidateDesign {
    /// Derive the full parameter set for one candidate option.
    pub fn derive(powder_factor: f64, option: &HoleOption) -> Self {
        let diameter_mm = option.diameter_mm;
        let cost_per_kg = option.cost_per_kg;
        let hole_count = option.hole_count;

        // === Bench Geometry ===
        let bench_height_m = formulas::bench_height(diameter_mm);
        let burden_m = formulas::burden(bench_height_m);
        let hole_length_m = formulas::hole_length(burden_m);
        let spacing_m = formulas::spacing(burden_m);

        // === Fragmentation and Charge ===
        let fragmentation_size_mm = formulas::fragmentation_size(powder_factor);
        let charge_per_hole_kg = formulas::charge_per_hole(
            burden_m,
            spacing_m,
            bench_height_m,
            fragmentation_size_mm,
        );

        // === Cost ===
        let total_cost =
            formulas::total_cost(charge_per_hole_kg, cost_per_kg, f64::from(hole_count));

        CandidateDesign {
            diameter_mm,
            bench_height_m,
            hole_count,
            cost_per_kg,
            burden_m,
            hole_length_m,
            spacing_m,
            fragmentation_size_mm,
            charge_per_hole_kg,
            total_cost,
        }
    }
}

/// Selected design returned to the estimation clients.
///
/// Fields carry descriptive names in Rust but serialize to the compact
/// single-letter names the clients consume (`d`, `h`, `nh`, ...).
///
/// ## JSON Example
///
/// ```json
/// {
///   "selectedOption": 1,
///   "d": 100.0,
///   "h": 10.7,
///   "nh": 10,
///   "c": 120.0,
///   "b": 4.28,
///   "l": 11.128,
///   "s": 5.992,
///   "x": 1.923,
///   "q": 0.915,
///   "t": 1098.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignResult {
    /// 1-based position of the winning option in the submitted list
    #[serde(rename = "selectedOption")]
    pub selected_option: u32,

    /// Blast-hole diameter (mm)
    #[serde(rename = "d")]
    pub diameter_mm: f64,

    /// Bench height (m)
    #[serde(rename = "h")]
    pub bench_height_m: f64,

    /// Number of holes
    #[serde(rename = "nh")]
    pub hole_count: u32,

    /// Explosive cost per kilogram
    #[serde(rename = "c")]
    pub cost_per_kg: f64,

    /// Burden (m)
    #[serde(rename = "b")]
    pub burden_m: f64,

    /// Drilled hole length (m)
    #[serde(rename = "l")]
    pub hole_length_m: f64,

    /// Hole spacing (m)
    #[serde(rename = "s")]
    pub spacing_m: f64,

    /// Mean fragmentation size (mm)
    #[serde(rename = "x")]
    pub fragmentation_size_mm: f64,

    /// Explosive charge per hole (kg)
    #[serde(rename = "q")]
    pub charge_per_hole_kg: f64,

    /// Total explosive cost of the selected option
    #[serde(rename = "t")]
    pub total_cost: f64,
}

/// Evaluate every candidate option and select the minimum-total-cost design.
///
/// This is a pure function: it holds no state between calls and has no side
/// effects.
///
/// # Arguments
///
/// * `input` - Powder factor and the ordered candidate options
///
/// # Returns
///
/// * `Ok(DesignResult)` - The selected option's full derived parameter set
/// * `Err(BlastError)` - `InvalidInput` for request-level problems,
///   `NoSelection` when every candidate was disqualified
///
/// # Example
///
/// ```rust
/// use blast_core::design::{evaluate, BlastInput, HoleOption};
///
/// let input = BlastInput {
///     powder_factor: 2.5,
///     options: vec![
///         HoleOption { diameter_mm: 100.0, cost_per_kg: 120.0, hole_count: 10 },
///     ],
/// };
///
/// let result = evaluate(&input).expect("Evaluation should succeed");
/// assert_eq!(result.selected_option, 1);
/// assert!(result.total_cost > 0.0);
/// ```
pub fn evaluate(input: &BlastInput) -> BlastResult<DesignResult> {
    // Validate inputs
    input.validate()?;

    // Scan candidates in order, keeping the best seen so far. Scoring by
    // reciprocal cost with a strict comparison gives exact ties to the
    // earlier candidate. A zero, negative, or non-finite total cost yields a
    // score that is non-finite or below the 0.0 baseline, so such candidates
    // never win and the remaining ones stay eligible.
    let mut best_score = 0.0_f64;
    let mut best: Option<(usize, CandidateDesign)> = None;

    for (index, option) in input.options.iter().enumerate() {
        let candidate = CandidateDesign::derive(input.powder_factor, option);
        let score = candidate.total_cost.recip();
        if score.is_finite() && score > best_score {
            best_score = score;
            best = Some((index, candidate));
        }
    }

    let (index, candidate) = best.ok_or_else(|| {
        BlastError::no_selection("no candidate produced a finite, positive total cost")
    })?;

    Ok(DesignResult {
        selected_option: (index + 1) as u32,
        diameter_mm: candidate.diameter_mm,
        bench_height_m: candidate.bench_height_m,
        hole_count: candidate.hole_count,
        cost_per_kg: candidate.cost_per_kg,
        burden_m: candidate.burden_m,
        hole_length_m: candidate.hole_length_m,
        spacing_m: candidate.spacing_m,
        fragmentation_size_mm: candidate.fragmentation_size_mm,
        charge_per_hole_kg: candidate.charge_per_hole_kg,
        total_cost: candidate.total_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single valid option: 100 mm holes at 100 per kg, 10 holes, z = 2.5
    fn test_input() -> BlastInput {
        BlastInput {
            powder_factor: 2.5,
            options: vec![HoleOption {
                diameter_mm: 100.0,
                cost_per_kg: 100.0,
                hole_count: 10,
            }],
        }
    }

    fn option(diameter_mm: f64, cost_per_kg: f64, hole_count: u32) -> HoleOption {
        HoleOption {
            diameter_mm,
            cost_per_kg,
            hole_count,
        }
    }

    #[test]
    fn test_single_option_selected() {
        let result = evaluate(&test_input()).unwrap();
        assert_eq!(result.selected_option, 1);
        assert_eq!(result.diameter_mm, 100.0);
        assert_eq!(result.cost_per_kg, 100.0);
        assert_eq!(result.hole_count, 10);
    }

    #[test]
    fn test_derived_geometry() {
        let result = evaluate(&test_input()).unwrap();

        // d = 100: h = 10.7, b = 4.28, l = 11.128, s = 5.992
        assert!((result.bench_height_m - 10.7).abs() < 1e-9);
        assert!((result.burden_m - 4.28).abs() < 1e-9);
        assert!((result.hole_length_m - 11.128).abs() < 1e-9);
        assert!((result.spacing_m - 5.992).abs() < 1e-9);

        // z = 2.5: x = 19 / 2.5^2.5 = 1.9227 mm (approximately)
        assert!((result.fragmentation_size_mm - 1.9227).abs() < 1e-3);

        // q = 0.915 kg per hole (approximately), t = q * 100 * 10
        assert!((result.charge_per_hole_kg - 0.915).abs() < 0.01);
        assert!(
            (result.total_cost - result.charge_per_hole_kg * 100.0 * 10.0).abs() < 1e-9,
            "t = {}",
            result.total_cost
        );
    }

    #[test]
    fn test_minimum_cost_wins() {
        // Same geometry, same hole count: the cheaper explosive must win
        let input = BlastInput {
            powder_factor: 2.5,
            options: vec![option(100.0, 100.0, 10), option(100.0, 80.0, 10)],
        };
        let result = evaluate(&input).unwrap();
        assert_eq!(result.selected_option, 2);
        assert_eq!(result.cost_per_kg, 80.0);
    }

    #[test]
    fn test_larger_holes_cost_more() {
        // Geometry scales with diameter, so for equal unit cost and hole
        // count the smallest diameter gives the lowest total
        let input = BlastInput {
            powder_factor: 2.5,
            options: vec![
                option(100.0, 100.0, 10),
                option(150.0, 100.0, 10),
                option(200.0, 100.0, 10),
            ],
        };
        let result = evaluate(&input).unwrap();
        assert_eq!(result.selected_option, 1);
        assert_eq!(result.diameter_mm, 100.0);
    }

    #[test]
    fn test_tie_prefers_first() {
        // Identical candidates produce identical costs; the strict comparison
        // keeps the earlier one
        let input = BlastInput {
            powder_factor: 2.5,
            options: vec![option(100.0, 100.0, 10), option(100.0, 100.0, 10)],
        };
        let result = evaluate(&input).unwrap();
        assert_eq!(result.selected_option, 1);
    }

    #[test]
    fn test_cost_monotonicity() {
        // Raising only the unit cost raises the total cost and leaves every
        // derived geometry quantity untouched
        let cheap = evaluate(&BlastInput {
            powder_factor: 2.5,
            options: vec![option(100.0, 50.0, 10)],
        })
        .unwrap();
        let dear = evaluate(&BlastInput {
            powder_factor: 2.5,
            options: vec![option(100.0, 100.0, 10)],
        })
        .unwrap();

        assert!(dear.total_cost > cheap.total_cost);
        assert_eq!(dear.bench_height_m, cheap.bench_height_m);
        assert_eq!(dear.burden_m, cheap.burden_m);
        assert_eq!(dear.hole_length_m, cheap.hole_length_m);
        assert_eq!(dear.spacing_m, cheap.spacing_m);
        assert_eq!(dear.fragmentation_size_mm, cheap.fragmentation_size_mm);
        assert_eq!(dear.charge_per_hole_kg, cheap.charge_per_hole_kg);
    }

    #[test]
    fn test_zero_diameter_skipped() {
        // d = 0 prices to t = 0, whose reciprocal is infinite; the candidate
        // is disqualified rather than winning outright
        let input = BlastInput {
            powder_factor: 2.5,
            options: vec![option(0.0, 100.0, 10), option(100.0, 100.0, 10)],
        };
        let result = evaluate(&input).unwrap();
        assert_eq!(result.selected_option, 2);
        assert_eq!(result.diameter_mm, 100.0);
    }

    #[test]
    fn test_negative_diameter_skipped() {
        // Negative geometry drives the charge to NaN; NaN never compares
        // above the running best
        let input = BlastInput {
            powder_factor: 2.5,
            options: vec![option(-100.0, 100.0, 10), option(100.0, 100.0, 10)],
        };
        let result = evaluate(&input).unwrap();
        assert_eq!(result.selected_option, 2);
    }

    #[test]
    fn test_negative_cost_never_selected() {
        let input = BlastInput {
            powder_factor: 2.5,
            options: vec![option(100.0, -5.0, 10), option(100.0, 100.0, 10)],
        };
        let result = evaluate(&input).unwrap();
        assert_eq!(result.selected_option, 2);
    }

    #[test]
    fn test_all_candidates_disqualified() {
        let input = BlastInput {
            powder_factor: 2.5,
            options: vec![option(0.0, 100.0, 10), option(100.0, 0.0, 10)],
        };
        let err = evaluate(&input).unwrap_err();
        assert_eq!(err.error_code(), "NO_SELECTION");
    }

    #[test]
    fn test_empty_options_invalid() {
        let input = BlastInput {
            powder_factor: 2.5,
            options: vec![],
        };
        let err = evaluate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_powder_factor() {
        let mut input = test_input();

        input.powder_factor = 0.0;
        assert!(evaluate(&input).is_err());

        input.powder_factor = -2.5;
        assert!(evaluate(&input).is_err());

        input.powder_factor = f64::NAN;
        assert!(evaluate(&input).is_err());
    }

    #[test]
    fn test_zero_hole_count_skipped() {
        // nh = 0 prices to t = 0, same disqualification as zero diameter
        let input = BlastInput {
            powder_factor: 2.5,
            options: vec![option(100.0, 100.0, 0), option(100.0, 100.0, 10)],
        };
        let result = evaluate(&input).unwrap();
        assert_eq!(result.selected_option, 2);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: BlastInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.powder_factor, roundtrip.powder_factor);
        assert_eq!(input.options.len(), roundtrip.options.len());
    }

    #[test]
    fn test_result_wire_names() {
        let result = evaluate(&test_input()).unwrap();
        let value = serde_json::to_value(&result).unwrap();

        // The clients consume the compact single-letter field names
        for key in ["selectedOption", "d", "h", "nh", "c", "b", "l", "s", "x", "q", "t"] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(value["selectedOption"], 1);
        assert_eq!(value["d"], 100.0);
        assert_eq!(value["nh"], 10);

        let roundtrip: DesignResult = serde_json::from_value(value).unwrap();
        assert_eq!(roundtrip.selected_option, result.selected_option);
        assert!((roundtrip.total_cost - result.total_cost).abs() < 1e-9);
    }
}
