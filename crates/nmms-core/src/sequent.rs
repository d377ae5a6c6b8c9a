//! Sequents over sets of sentences.

use std::collections::BTreeSet;
use std::fmt;

use crate::sentence::Sentence;

/// A side of a sequent. Set semantics: duplicates are irrelevant.
pub type SentenceSet = BTreeSet<Sentence>;

/// A sequent `Γ => Δ`: the antecedent set provides reason for at least one
/// member of the succedent set. Either side may be empty.
///
/// Sequents are the keys of the proof-search memo table, so they carry
/// structural equality, ordering, and hashing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequent {
    pub antecedent: SentenceSet,
    pub succedent: SentenceSet,
}

impl Sequent {
    pub fn new(antecedent: SentenceSet, succedent: SentenceSet) -> Self {
        Sequent {
            antecedent,
            succedent,
        }
    }

    /// Build from any pair of sentence collections.
    pub fn from_parts<G, D>(antecedent: G, succedent: D) -> Self
    where
        G: IntoIterator<Item = Sentence>,
        D: IntoIterator<Item = Sentence>,
    {
        Sequent {
            antecedent: antecedent.into_iter().collect(),
            succedent: succedent.into_iter().collect(),
        }
    }

    /// True when both sides contain only atomic sentences.
    pub fn is_atomic(&self) -> bool {
        self.antecedent.iter().all(Sentence::is_atomic)
            && self.succedent.iter().all(Sentence::is_atomic)
    }
}

fn write_side(side: &SentenceSet, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if side.is_empty() {
        return write!(f, "∅");
    }
    let mut rendered: Vec<String> = side.iter().map(Sentence::to_string).collect();
    rendered.sort();
    write!(f, "{}", rendered.join(", "))
}

impl fmt::Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_side(&self.antecedent, f)?;
        write!(f, " => ")?;
        write_side(&self.succedent, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_sorts_members_and_marks_empty_sides() {
        let seq = Sequent::from_parts(
            [Sentence::atom("B"), Sentence::atom("A")],
            [],
        );
        assert_eq!(seq.to_string(), "A, B => ∅");

        let seq = Sequent::from_parts([], [Sentence::atom("A")]);
        assert_eq!(seq.to_string(), "∅ => A");
    }

    #[test]
    fn sets_collapse_duplicates() {
        let seq = Sequent::from_parts(
            [Sentence::atom("A"), Sentence::atom("A")],
            [Sentence::atom("B")],
        );
        assert_eq!(seq.antecedent.len(), 1);
    }

    #[test]
    fn atomicity_check() {
        let atomic = Sequent::from_parts([Sentence::atom("A")], [Sentence::atom("B")]);
        assert!(atomic.is_atomic());

        let complex = Sequent::from_parts(
            [Sentence::not(Sentence::atom("A"))],
            [Sentence::atom("B")],
        );
        assert!(!complex.is_atomic());
    }
}
