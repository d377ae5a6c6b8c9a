//! nmms-core - Object language and material base for the NMMS sequent
//! calculus
//!
//! The Non-Monotonic Multi-Succedent calculus starts from a *material base*:
//! an atomic language plus a finite set of explicitly good inferences between
//! atomic-sentence sets. This crate provides everything below the proof
//! search:
//!
//! - the sentence AST and its parser (propositional or restricted-quantifier
//!   atom grammar, selected by [`Mode`]),
//! - [`Sequent`]s over sentence sets,
//! - the [`MaterialBase`] with its axiom predicate (Containment, exact-match
//!   base consequence, lazy schema match),
//! - the labelled [`CommitmentStore`] compiled down to a base,
//! - the JSON document form used for persistence.
//!
//! # Example
//!
//! ```
//! use nmms_core::{parse_sequent, MaterialBase, Mode, Sentence};
//!
//! let mut base = MaterialBase::new();
//! base.add_consequence(
//!     [Sentence::atom("rain")].into_iter().collect(),
//!     [Sentence::atom("wet")].into_iter().collect(),
//! )?;
//!
//! let good = parse_sequent("rain => wet", Mode::Propositional)?;
//! assert!(base.is_axiom(&good));
//!
//! // No weakening: an extra premise defeats the base consequence.
//! let defeated = parse_sequent("rain, covered => wet", Mode::Propositional)?;
//! assert!(!base.is_axiom(&defeated));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod base;
pub mod doc;
pub mod error;
pub mod schema;
pub mod sentence;
pub mod sequent;
pub mod store;
pub mod syntax;

pub use base::{Consequence, MaterialBase};
pub use doc::{BaseDoc, ConsequenceDoc, SchemaDoc};
pub use error::{ParseError, ValidationError};
pub use schema::{Schema, WITNESS_VAR};
pub use sentence::{concept_label, individuals, role_triggers, Sentence};
pub use sequent::{SentenceSet, Sequent};
pub use store::{Commitment, CommitmentKind, CommitmentStore};
pub use syntax::{parse_consequence, parse_sentence, parse_sequent, Mode};
