//! Lazy schema records consulted by the axiom predicate.
//!
//! Schemas stand for families of base consequences without ever grounding
//! them: storage stays proportional to the number of schemas, and matching
//! happens at query time against the role atoms actually present in the
//! queried antecedent.

use crate::sentence::Sentence;
use crate::sequent::{Sequent, SentenceSet};

/// Reserved individual name standing for the matched witness in an
/// inference-schema consequent. Substituted at match time; round-trips
/// through persistence verbatim.
pub const WITNESS_VAR: &str = "_x";

/// A registered schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// Admits the axiom `{R(a,b)} |~ {C(b)}` for every `b` such that the
    /// role atom `R(a,b)` appears in the queried antecedent.
    Concept {
        role: String,
        individual: String,
        concept: String,
    },
    /// Admits the axiom `{R(a,b), C(b)} |~ S[b/_x]` likewise.
    Inference {
        role: String,
        individual: String,
        concept: String,
        consequent: SentenceSet,
    },
}

impl Schema {
    /// Whether this schema admits exactly the queried sequent under some
    /// witness drawn from its antecedent. Exact match on both sides: extra
    /// premises defeat the schema, which is what preserves nonmonotonicity.
    pub fn matches(&self, sequent: &Sequent) -> bool {
        for trigger in &sequent.antecedent {
            let Sentence::RoleAtom {
                role,
                subject,
                object,
            } = trigger
            else {
                continue;
            };
            match self {
                Schema::Concept {
                    role: r,
                    individual: a,
                    concept: c,
                } => {
                    if role != r || subject != a {
                        continue;
                    }
                    let expected_antecedent: SentenceSet = [trigger.clone()].into_iter().collect();
                    let expected_succedent: SentenceSet =
                        [Sentence::concept(c.clone(), object.clone())]
                            .into_iter()
                            .collect();
                    if sequent.antecedent == expected_antecedent
                        && sequent.succedent == expected_succedent
                    {
                        return true;
                    }
                }
                Schema::Inference {
                    role: r,
                    individual: a,
                    concept: c,
                    consequent,
                } => {
                    if role != r || subject != a {
                        continue;
                    }
                    let expected_antecedent: SentenceSet = [
                        trigger.clone(),
                        Sentence::concept(c.clone(), object.clone()),
                    ]
                    .into_iter()
                    .collect();
                    let expected_succedent: SentenceSet = consequent
                        .iter()
                        .map(|s| substitute_witness(s, object))
                        .collect();
                    if sequent.antecedent == expected_antecedent
                        && sequent.succedent == expected_succedent
                    {
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// Replace the reserved witness name with the matched individual.
fn substitute_witness(sentence: &Sentence, witness: &str) -> Sentence {
    match sentence {
        Sentence::ConceptAtom {
            concept,
            individual,
        } if individual == WITNESS_VAR => Sentence::concept(concept.clone(), witness),
        Sentence::RoleAtom {
            role,
            subject,
            object,
        } if subject == WITNESS_VAR || object == WITNESS_VAR => {
            let subject = if subject == WITNESS_VAR {
                witness
            } else {
                subject.as_str()
            };
            let object = if object == WITNESS_VAR {
                witness
            } else {
                object.as_str()
            };
            Sentence::role(role.clone(), subject, object)
        }
        other => other.clone(),
    }
}
