//! nmms-prove - Backward proof search for the NMMS sequent calculus
//!
//! Decides derivability of sequents `Γ => Δ` over a material base by
//! root-first, depth-limited backward search:
//!
//! - eight Ketonen-style propositional rules (the multi-premise ones carry a
//!   third top sequent, compensating for set-based contraction),
//! - four restricted-quantifier rules triggered by role assertions,
//! - memoization with a three-valued cache (pending entries double as the
//!   cycle sentinel),
//! - deterministic rule selection by canonical string order, and a flat
//!   proof trace suitable for diffing across runs.
//!
//! # Example
//!
//! ```
//! use nmms_core::{MaterialBase, Sentence};
//! use nmms_prove::Prover;
//!
//! let mut base = MaterialBase::new();
//! base.add_consequence(
//!     [Sentence::atom("rain")].into_iter().collect(),
//!     [Sentence::atom("wet")].into_iter().collect(),
//! )?;
//!
//! let prover = Prover::new(&base);
//!
//! // The registered consequence is derivable...
//! assert!(prover.query(
//!     [Sentence::atom("rain")].into_iter().collect(),
//!     [Sentence::atom("wet")].into_iter().collect(),
//! ));
//! // ...but an extra premise defeats it: no weakening.
//! assert!(!prover.query(
//!     [Sentence::atom("rain"), Sentence::atom("covered")].into_iter().collect(),
//!     [Sentence::atom("wet")].into_iter().collect(),
//! ));
//! # Ok::<(), nmms_core::ValidationError>(())
//! ```

pub mod engine;
mod quant;
pub mod rules;

pub use engine::{ProofResult, Prover, ProverConfig};
pub use rules::{Alternative, Application, Premises, RuleTag};
