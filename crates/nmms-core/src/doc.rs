//! On-disk JSON document for material bases.
//!
//! The document is plain data; all file IO lives with the caller. Loading
//! re-validates everything: atoms must parse as atomic sentences in the
//! requested mode, consequence sides must be atoms, and duplicates collapse.

use serde::{Deserialize, Serialize};

use crate::base::{Consequence, MaterialBase};
use crate::error::ValidationError;
use crate::schema::Schema;
use crate::sentence::Sentence;
use crate::sequent::SentenceSet;
use crate::syntax::parser::{parse_sentence, Mode};

/// Serialized form of a [`MaterialBase`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseDoc {
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub consequences: Vec<ConsequenceDoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<SchemaDoc>,
}

/// Serialized form of one explicit base consequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsequenceDoc {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
}

/// Serialized form of one schema record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SchemaDoc {
    Concept {
        role: String,
        individual: String,
        concept: String,
    },
    Inference {
        role: String,
        individual: String,
        concept: String,
        consequent: Vec<String>,
    },
}

impl MaterialBase {
    /// Serialize to the document form, with every list sorted.
    pub fn to_doc(&self) -> BaseDoc {
        BaseDoc {
            language: self.language().iter().map(Sentence::to_string).collect(),
            consequences: self
                .consequences()
                .iter()
                .map(|c| ConsequenceDoc {
                    antecedent: c.antecedent.iter().map(Sentence::to_string).collect(),
                    consequent: c.consequent.iter().map(Sentence::to_string).collect(),
                })
                .collect(),
            schemas: self
                .schemas()
                .iter()
                .map(|schema| match schema {
                    Schema::Concept {
                        role,
                        individual,
                        concept,
                    } => SchemaDoc::Concept {
                        role: role.clone(),
                        individual: individual.clone(),
                        concept: concept.clone(),
                    },
                    Schema::Inference {
                        role,
                        individual,
                        concept,
                        consequent,
                    } => SchemaDoc::Inference {
                        role: role.clone(),
                        individual: individual.clone(),
                        concept: concept.clone(),
                        consequent: consequent.iter().map(Sentence::to_string).collect(),
                    },
                })
                .collect(),
        }
    }

    /// Rebuild a base from its document form, re-validating every entry.
    pub fn from_doc(doc: &BaseDoc, mode: Mode) -> Result<MaterialBase, ValidationError> {
        let mut base = MaterialBase::new();
        for text in &doc.language {
            base.add_atom(parse_sentence(text, mode)?)?;
        }
        for consequence in &doc.consequences {
            base.add_consequence(
                parse_side(&consequence.antecedent, mode)?,
                parse_side(&consequence.consequent, mode)?,
            )?;
        }
        for schema in &doc.schemas {
            match schema {
                SchemaDoc::Concept {
                    role,
                    individual,
                    concept,
                } => base.register_concept_schema(role.clone(), individual.clone(), concept.clone()),
                SchemaDoc::Inference {
                    role,
                    individual,
                    concept,
                    consequent,
                } => {
                    // Schemas belong to the RQ extension; their consequents
                    // always use the concept/role atom grammar.
                    base.register_inference_schema(
                        role.clone(),
                        individual.clone(),
                        concept.clone(),
                        parse_side(consequent, Mode::Rq)?,
                    )?;
                }
            }
        }
        Ok(base)
    }
}

fn parse_side(texts: &[String], mode: Mode) -> Result<SentenceSet, ValidationError> {
    let mut side = SentenceSet::new();
    for text in texts {
        side.insert(parse_sentence(text, mode)?);
    }
    Ok(side)
}

/// Convenience view used by `show`-style listings.
impl Consequence {
    pub fn display(&self) -> String {
        let fmt = |side: &SentenceSet| -> String {
            let mut items: Vec<String> = side.iter().map(Sentence::to_string).collect();
            items.sort();
            items.join(", ")
        };
        format!("{} |~ {}", fmt(&self.antecedent), fmt(&self.consequent))
    }
}
