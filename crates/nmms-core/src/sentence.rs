//! Object-language sentences.
//!
//! A [`Sentence`] is a value object: structurally equal, hashable, and
//! immutable once built. `Display` renders the canonical concrete syntax
//! (minimal parentheses under the precedence grammar), which doubles as the
//! sort key for deterministic rule selection during proof search.

use std::collections::BTreeSet;
use std::fmt;

/// A sentence of the logically extended language.
///
/// The three atom variants are the *atomic* sentences; everything else is
/// complex and is decomposed by the proof rules, never stored in a material
/// base.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sentence {
    /// Bare propositional atom.
    Atom(String),
    /// Concept assertion `C(a)`.
    ConceptAtom { concept: String, individual: String },
    /// Role assertion `R(a,b)`.
    RoleAtom {
        role: String,
        subject: String,
        object: String,
    },
    /// Negation `~A`.
    Not(Box<Sentence>),
    /// Conjunction `A & B` (left-associative).
    And(Box<Sentence>, Box<Sentence>),
    /// Disjunction `A | B` (left-associative).
    Or(Box<Sentence>, Box<Sentence>),
    /// Conditional `A -> B` (right-associative).
    Implies(Box<Sentence>, Box<Sentence>),
    /// Universal restriction `ALL R.C(a)`: all R-successors of `a` are `C`.
    AllRestrict {
        role: String,
        concept: String,
        individual: String,
    },
    /// Existential restriction `SOME R.C(a)`: some R-successor of `a` is `C`.
    SomeRestrict {
        role: String,
        concept: String,
        individual: String,
    },
}

impl Sentence {
    pub fn atom(name: impl Into<String>) -> Self {
        Sentence::Atom(name.into())
    }

    pub fn concept(concept: impl Into<String>, individual: impl Into<String>) -> Self {
        Sentence::ConceptAtom {
            concept: concept.into(),
            individual: individual.into(),
        }
    }

    pub fn role(
        role: impl Into<String>,
        subject: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Sentence::RoleAtom {
            role: role.into(),
            subject: subject.into(),
            object: object.into(),
        }
    }

    pub fn not(inner: Sentence) -> Self {
        Sentence::Not(Box::new(inner))
    }

    pub fn and(left: Sentence, right: Sentence) -> Self {
        Sentence::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Sentence, right: Sentence) -> Self {
        Sentence::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Sentence, right: Sentence) -> Self {
        Sentence::Implies(Box::new(left), Box::new(right))
    }

    pub fn all(
        role: impl Into<String>,
        concept: impl Into<String>,
        individual: impl Into<String>,
    ) -> Self {
        Sentence::AllRestrict {
            role: role.into(),
            concept: concept.into(),
            individual: individual.into(),
        }
    }

    pub fn some(
        role: impl Into<String>,
        concept: impl Into<String>,
        individual: impl Into<String>,
    ) -> Self {
        Sentence::SomeRestrict {
            role: role.into(),
            concept: concept.into(),
            individual: individual.into(),
        }
    }

    /// Whether this is one of the three atom variants.
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            Sentence::Atom(_) | Sentence::ConceptAtom { .. } | Sentence::RoleAtom { .. }
        )
    }

    /// Binding strength, tightest = highest. Drives minimal parenthesization.
    fn precedence(&self) -> u8 {
        match self {
            Sentence::Implies(_, _) => 1,
            Sentence::Or(_, _) => 2,
            Sentence::And(_, _) => 3,
            Sentence::Not(_) => 4,
            _ => 5,
        }
    }

    fn write_prec(&self, min: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parens = self.precedence() < min;
        if parens {
            write!(f, "(")?;
        }
        match self {
            Sentence::Atom(name) => write!(f, "{name}")?,
            Sentence::ConceptAtom {
                concept,
                individual,
            } => write!(f, "{concept}({individual})")?,
            Sentence::RoleAtom {
                role,
                subject,
                object,
            } => write!(f, "{role}({subject},{object})")?,
            Sentence::Not(inner) => {
                write!(f, "~")?;
                inner.write_prec(4, f)?;
            }
            Sentence::And(left, right) => {
                left.write_prec(3, f)?;
                write!(f, " & ")?;
                right.write_prec(4, f)?;
            }
            Sentence::Or(left, right) => {
                left.write_prec(2, f)?;
                write!(f, " | ")?;
                right.write_prec(3, f)?;
            }
            Sentence::Implies(left, right) => {
                left.write_prec(2, f)?;
                write!(f, " -> ")?;
                right.write_prec(1, f)?;
            }
            Sentence::AllRestrict {
                role,
                concept,
                individual,
            } => write!(f, "ALL {role}.{concept}({individual})")?,
            Sentence::SomeRestrict {
                role,
                concept,
                individual,
            } => write!(f, "SOME {role}.{concept}({individual})")?,
        }
        if parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_prec(0, f)
    }
}

/// Individuals `b` with `R(subject, b)` among the given sentences, sorted and
/// deduplicated.
pub fn role_triggers<'a, I>(sentences: I, role: &str, subject: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Sentence>,
{
    let mut triggers = BTreeSet::new();
    for s in sentences {
        if let Sentence::RoleAtom {
            role: r,
            subject: a,
            object: b,
        } = s
        {
            if r == role && a == subject {
                triggers.insert(b.clone());
            }
        }
    }
    triggers.into_iter().collect()
}

/// Every individual name mentioned in the given sentences, including inside
/// complex subsentences.
pub fn individuals<'a, I>(sentences: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Sentence>,
{
    let mut out = BTreeSet::new();
    for s in sentences {
        collect_individuals(s, &mut out);
    }
    out
}

fn collect_individuals(sentence: &Sentence, out: &mut BTreeSet<String>) {
    match sentence {
        Sentence::Atom(_) => {}
        Sentence::ConceptAtom { individual, .. } => {
            out.insert(individual.clone());
        }
        Sentence::RoleAtom {
            subject, object, ..
        } => {
            out.insert(subject.clone());
            out.insert(object.clone());
        }
        Sentence::Not(inner) => collect_individuals(inner, out),
        Sentence::And(l, r) | Sentence::Or(l, r) | Sentence::Implies(l, r) => {
            collect_individuals(l, out);
            collect_individuals(r, out);
        }
        Sentence::AllRestrict { individual, .. } | Sentence::SomeRestrict { individual, .. } => {
            out.insert(individual.clone());
        }
    }
}

/// The concept label of an individual: concept names asserted of it by the
/// top-level concept atoms among the given sentences.
pub fn concept_label<'a, I>(individual: &str, sentences: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Sentence>,
{
    let mut label = BTreeSet::new();
    for s in sentences {
        if let Sentence::ConceptAtom {
            concept,
            individual: i,
        } = s
        {
            if i == individual {
                label.insert(concept.clone());
            }
        }
    }
    label
}
