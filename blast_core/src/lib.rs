//! # blast_core - Rock Blasting Design Calculation Engine
//!
//! `blast_core` is the computational heart of Blastify. It prices candidate
//! blast-hole configurations for a single bench and selects the cheapest
//! workable design, with every input and output JSON-serializable so the
//! engine can sit behind a thin HTTP service or be driven from scripts.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use blast_core::{evaluate, BlastInput, HoleOption};
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
//! println!("Option {} wins at {:.2}", result.selected_option, result.total_cost);
//! ```
//!
//! ## Modules
//!
//! - [`design`] - Candidate evaluation and minimum-cost selection
//! - [`formulas`] - The underlying bench blasting formulas
//! - [`errors`] - Structured error types

pub mod design;
pub mod errors;
pub mod formulas;

// Re-export commonly used types at crate root for convenience
pub use design::{evaluate, BlastInput, CandidateDesign, DesignResult, HoleOption};
pub use errors::{BlastError, BlastResult};
