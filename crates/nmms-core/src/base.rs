//! The material base: atomic language plus explicit base consequences.
//!
//! A base `B = <L_B, |~_B>` holds only atomic sentences. Logically complex
//! sentences belong to the proof rules, never to the base; every mutator
//! enforces this and leaves the base untouched on failure.
//!
//! The axiom predicate is a pure function of the base:
//!
//! - **Ax1 Containment**: the two sides share a member.
//! - **Ax2 Explicit consequence**: the exact pair is registered. No subset,
//!   no superset: this is the mechanism that enforces no-Weakening.
//! - **Ax3 Schema**: some registered schema admits the pair under a concrete
//!   witness drawn from the antecedent.

use std::collections::BTreeSet;

use crate::error::ValidationError;
use crate::schema::Schema;
use crate::sentence::Sentence;
use crate::sequent::{Sequent, SentenceSet};

/// An explicit base consequence: a pair of atomic-sentence sets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Consequence {
    pub antecedent: SentenceSet,
    pub consequent: SentenceSet,
}

impl Consequence {
    pub fn new(antecedent: SentenceSet, consequent: SentenceSet) -> Self {
        Consequence {
            antecedent,
            consequent,
        }
    }
}

/// A material base: the atomic language, the explicit consequence relation,
/// registered schemas, and the vocabulary projected from the atoms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialBase {
    language: BTreeSet<Sentence>,
    consequences: BTreeSet<Consequence>,
    schemas: Vec<Schema>,
    individuals: BTreeSet<String>,
    concepts: BTreeSet<String>,
    roles: BTreeSet<String>,
}

impl MaterialBase {
    pub fn new() -> Self {
        MaterialBase::default()
    }

    /// Add an atomic sentence to the language.
    pub fn add_atom(&mut self, sentence: Sentence) -> Result<(), ValidationError> {
        if !sentence.is_atomic() {
            return Err(ValidationError::NonAtomicLanguage(sentence));
        }
        self.extract_vocabulary(&sentence);
        self.language.insert(sentence);
        Ok(())
    }

    /// Add an explicit base consequence. Every member of both sides must be
    /// atomic; the atoms implicitly join the language.
    pub fn add_consequence(
        &mut self,
        antecedent: SentenceSet,
        consequent: SentenceSet,
    ) -> Result<(), ValidationError> {
        for s in antecedent.iter().chain(consequent.iter()) {
            if !s.is_atomic() {
                return Err(ValidationError::NonAtomicConsequence(s.clone()));
            }
        }
        for s in antecedent.iter().chain(consequent.iter()) {
            self.extract_vocabulary(s);
            self.language.insert(s.clone());
        }
        self.consequences
            .insert(Consequence::new(antecedent, consequent));
        Ok(())
    }

    /// Register `for all R(a,x), x is C` for lazy evaluation in [`Self::is_axiom`].
    pub fn register_concept_schema(
        &mut self,
        role: impl Into<String>,
        individual: impl Into<String>,
        concept: impl Into<String>,
    ) {
        let schema = Schema::Concept {
            role: role.into(),
            individual: individual.into(),
            concept: concept.into(),
        };
        if !self.schemas.contains(&schema) {
            self.schemas.push(schema);
        }
    }

    /// Register `for all R(a,x) with C(x), infer S`. Consequent members must
    /// be atomic; the reserved witness name stands for the matched successor.
    pub fn register_inference_schema(
        &mut self,
        role: impl Into<String>,
        individual: impl Into<String>,
        concept: impl Into<String>,
        consequent: SentenceSet,
    ) -> Result<(), ValidationError> {
        for s in &consequent {
            if !s.is_atomic() {
                return Err(ValidationError::NonAtomicSchemaConsequent(s.clone()));
            }
        }
        let schema = Schema::Inference {
            role: role.into(),
            individual: individual.into(),
            concept: concept.into(),
            consequent,
        };
        if !self.schemas.contains(&schema) {
            self.schemas.push(schema);
        }
        Ok(())
    }

    /// Whether `Γ => Δ` is an axiom of the base. Pure: independent of any
    /// proof-search state.
    pub fn is_axiom(&self, sequent: &Sequent) -> bool {
        // Ax1: Containment.
        if sequent
            .antecedent
            .intersection(&sequent.succedent)
            .next()
            .is_some()
        {
            return true;
        }

        // Ax2: explicit base consequence, exact match only.
        if self.consequences.contains(&Consequence::new(
            sequent.antecedent.clone(),
            sequent.succedent.clone(),
        )) {
            return true;
        }

        // Ax3: lazy schema match.
        self.schemas.iter().any(|schema| schema.matches(sequent))
    }

    pub fn language(&self) -> &BTreeSet<Sentence> {
        &self.language
    }

    pub fn consequences(&self) -> &BTreeSet<Consequence> {
        &self.consequences
    }

    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    pub fn individuals(&self) -> &BTreeSet<String> {
        &self.individuals
    }

    pub fn concepts(&self) -> &BTreeSet<String> {
        &self.concepts
    }

    pub fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    fn extract_vocabulary(&mut self, sentence: &Sentence) {
        match sentence {
            Sentence::ConceptAtom {
                concept,
                individual,
            } => {
                self.concepts.insert(concept.clone());
                self.individuals.insert(individual.clone());
            }
            Sentence::RoleAtom {
                role,
                subject,
                object,
            } => {
                self.roles.insert(role.clone());
                self.individuals.insert(subject.clone());
                self.individuals.insert(object.clone());
            }
            _ => {}
        }
    }
}
