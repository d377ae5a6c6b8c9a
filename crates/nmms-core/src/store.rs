//! Labelled commitments compiled into a material base.
//!
//! A thin bookkeeping layer for dialogue-style frontends: named assertions,
//! ground defeasible rules, and universal commitments are recorded under
//! labels and compiled on demand into a [`MaterialBase`] plus schema set.
//! Retracting a label removes exactly its compiled contribution.

use crate::base::MaterialBase;
use crate::error::ValidationError;
use crate::schema::WITNESS_VAR;
use crate::sentence::Sentence;
use crate::sequent::SentenceSet;

/// One labelled commitment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commitment {
    pub label: String,
    pub kind: CommitmentKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitmentKind {
    /// An atomic fact entered into the base language.
    Assertion(Sentence),
    /// A ground defeasible rule `Γ |~ Δ`.
    Rule {
        antecedent: SentenceSet,
        consequent: SentenceSet,
    },
    /// "All `role`-successors of `subject` (that are `trigger`, if given)
    /// are `conclusion`." Compiles to a concept schema when there is no
    /// trigger concept, to an inference schema otherwise.
    Universal {
        role: String,
        subject: String,
        trigger: Option<String>,
        conclusion: String,
    },
}

/// The commitment store.
#[derive(Debug, Clone, Default)]
pub struct CommitmentStore {
    commitments: Vec<Commitment>,
}

impl CommitmentStore {
    pub fn new() -> Self {
        CommitmentStore::default()
    }

    /// Record an atomic fact under a label.
    pub fn assert_atom(
        &mut self,
        label: impl Into<String>,
        sentence: Sentence,
    ) -> Result<(), ValidationError> {
        if !sentence.is_atomic() {
            return Err(ValidationError::NonAtomicLanguage(sentence));
        }
        self.commitments.push(Commitment {
            label: label.into(),
            kind: CommitmentKind::Assertion(sentence),
        });
        Ok(())
    }

    /// Record a ground defeasible rule under a label.
    pub fn assert_rule(
        &mut self,
        label: impl Into<String>,
        antecedent: SentenceSet,
        consequent: SentenceSet,
    ) -> Result<(), ValidationError> {
        for s in antecedent.iter().chain(consequent.iter()) {
            if !s.is_atomic() {
                return Err(ValidationError::NonAtomicConsequence(s.clone()));
            }
        }
        self.commitments.push(Commitment {
            label: label.into(),
            kind: CommitmentKind::Rule {
                antecedent,
                consequent,
            },
        });
        Ok(())
    }

    /// Record a universal commitment under a label.
    pub fn commit_universal(
        &mut self,
        label: impl Into<String>,
        role: impl Into<String>,
        subject: impl Into<String>,
        trigger: Option<String>,
        conclusion: impl Into<String>,
    ) {
        self.commitments.push(Commitment {
            label: label.into(),
            kind: CommitmentKind::Universal {
                role: role.into(),
                subject: subject.into(),
                trigger,
                conclusion: conclusion.into(),
            },
        });
    }

    /// Remove every commitment recorded under `label`; returns how many were
    /// dropped.
    pub fn retract(&mut self, label: &str) -> usize {
        let before = self.commitments.len();
        self.commitments.retain(|c| c.label != label);
        before - self.commitments.len()
    }

    pub fn commitments(&self) -> &[Commitment] {
        &self.commitments
    }

    pub fn is_empty(&self) -> bool {
        self.commitments.is_empty()
    }

    /// Compile the current commitments into a fresh material base.
    pub fn compile(&self) -> Result<MaterialBase, ValidationError> {
        let mut base = MaterialBase::new();
        for commitment in &self.commitments {
            match &commitment.kind {
                CommitmentKind::Assertion(sentence) => base.add_atom(sentence.clone())?,
                CommitmentKind::Rule {
                    antecedent,
                    consequent,
                } => base.add_consequence(antecedent.clone(), consequent.clone())?,
                CommitmentKind::Universal {
                    role,
                    subject,
                    trigger,
                    conclusion,
                } => match trigger {
                    None => base.register_concept_schema(
                        role.clone(),
                        subject.clone(),
                        conclusion.clone(),
                    ),
                    Some(trigger) => base.register_inference_schema(
                        role.clone(),
                        subject.clone(),
                        trigger.clone(),
                        [Sentence::concept(conclusion.clone(), WITNESS_VAR)]
                            .into_iter()
                            .collect(),
                    )?,
                },
            }
        }
        Ok(base)
    }
}
