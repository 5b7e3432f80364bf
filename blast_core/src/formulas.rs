//! # Bench Blasting Formulas
//!
//! Empirical proportions for single-bench blast design. Geometry scales off
//! the blast-hole diameter; the explosive charge follows from the broken
//! volume per hole and the target fragmentation size.
//!
//! ## Notation
//!
//! - `d` = Blast-hole diameter (mm)
//! - `z` = Powder factor (kg of explosive per m³ of rock)
//! - `h` = Bench height (m)
//! - `b` = Burden: distance from hole to free face (m)
//! - `l` = Drilled hole length (m)
//! - `s` = Spacing between holes in a row (m)
//! - `x` = Mean fragmentation size (mm)
//! - `q` = Explosive charge per hole (kg)
//! - `t` = Total explosive cost for one option
//!
//! ## Evaluation Order
//!
//! The quantities chain: `h` from `d`, then `b` from `h`, then `l` and `s`
//! from `b`, with `x` from `z` alone. `q` combines the geometry with `x`,
//! and `t` prices `q` across all holes. Callers evaluating a full candidate
//! apply the functions in that order. Do not reorder the arithmetic inside
//! them: estimates are checked against reference values computed with
//! exactly these operand orderings.

// =============================================================================
// BENCH GEOMETRY
// All lengths derive from the hole diameter
// =============================================================================

/// Bench height from hole diameter
///
/// # Formula
/// h = d * 0.107
///
/// # Arguments
/// * `diameter_mm` - Blast-hole diameter (mm)
///
/// # Returns
/// Bench height (m)
#[inline]
pub fn bench_height(diameter_mm: f64) -> f64 {
    diameter_mm * 0.107
}

/// Burden from bench height
///
/// # Formula
/// b = 0.4 * h
#[inline]
pub fn burden(bench_height_m: f64) -> f64 {
    0.4 * bench_height_m
}

/// Drilled hole length from burden
///
/// Slightly exceeds the bench height, allowing for sub-drill below grade.
///
/// # Formula
/// l = 2.6 * b
#[inline]
pub fn hole_length(burden_m: f64) -> f64 {
    2.6 * burden_m
}

/// Hole spacing from burden
///
/// # Formula
/// s = 1.4 * b
#[inline]
pub fn spacing(burden_m: f64) -> f64 {
    1.4 * burden_m
}

// =============================================================================
// FRAGMENTATION AND CHARGE
// =============================================================================

/// Mean fragmentation size from powder factor
///
/// Higher powder factors break the rock finer.
///
/// # Formula
/// x = 19 / z^2.5
///
/// # Arguments
/// * `powder_factor` - Explosive per cubic metre of rock (kg/m³)
///
/// # Returns
/// Mean fragment size (mm)
#[inline]
pub fn fragmentation_size(powder_factor: f64) -> f64 {
    19.0 / powder_factor.powf(2.5)
}

/// Explosive charge per hole
///
/// The burden-spacing-height product is the rock volume each hole must break;
/// the charge grows with that volume and shrinks as the accepted fragment
/// size grows.
///
/// # Formula
/// q = ((2 * (b*s*h)^0.8) / (100 * x))^1.2
///
/// # Arguments
/// * `burden_m` - Burden (m)
/// * `spacing_m` - Hole spacing (m)
/// * `bench_height_m` - Bench height (m)
/// * `fragmentation_size_mm` - Mean fragment size (mm)
///
/// # Returns
/// Charge mass per hole (kg). NaN when the geometry product is negative,
/// zero when it is zero; callers treat either as a disqualified candidate.
#[inline]
pub fn charge_per_hole(
    burden_m: f64,
    spacing_m: f64,
    bench_height_m: f64,
    fragmentation_size_mm: f64,
) -> f64 {
    ((2.0 * (burden_m * spacing_m * bench_height_m).powf(0.8)) / (100.0 * fragmentation_size_mm))
        .powf(1.2)
}

/// Total explosive cost for one candidate option
///
/// # Formula
/// t = q * c * nh
///
/// # Arguments
/// * `charge_per_hole_kg` - Charge mass per hole (kg)
/// * `cost_per_kg` - Explosive unit cost
/// * `hole_count` - Number of holes
#[inline]
pub fn total_cost(charge_per_hole_kg: f64, cost_per_kg: f64, hole_count: f64) -> f64 {
    charge_per_hole_kg * cost_per_kg * hole_count
}

// =============================================================================
// UNIT TESTS
// =============================================================================
