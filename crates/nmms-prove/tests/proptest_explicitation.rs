//! Property-based tests for the explicitation biconditionals and
//! reproducibility.
//!
//! Generates small random propositional sentences and material bases, then
//! cross-checks both directions of each explicitation equivalence (DD, II,
//! AA, SS) and that repeated runs are deterministic. Sentence and set sizes
//! are kept small enough that the default depth budget is never the
//! deciding factor.

use proptest::prelude::*;

use nmms_core::{MaterialBase, Sentence, SentenceSet};
use nmms_prove::{Prover, ProverConfig};

const ATOMS: [&str; 4] = ["A", "B", "C", "D"];

fn atom_strategy() -> impl Strategy<Value = Sentence> {
    proptest::sample::select(&ATOMS[..]).prop_map(Sentence::atom)
}

fn sentence_strategy() -> impl Strategy<Value = Sentence> {
    atom_strategy().prop_recursive(2, 8, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Sentence::not),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Sentence::and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Sentence::or(a, b)),
            (inner.clone(), inner).prop_map(|(a, b)| Sentence::implies(a, b)),
        ]
    })
}

fn side_strategy() -> impl Strategy<Value = SentenceSet> {
    proptest::collection::btree_set(sentence_strategy(), 0..3)
}

fn atom_set_strategy() -> impl Strategy<Value = SentenceSet> {
    proptest::collection::btree_set(atom_strategy(), 1..3)
}

fn base_strategy() -> impl Strategy<Value = MaterialBase> {
    proptest::collection::vec((atom_set_strategy(), atom_set_strategy()), 0..4).prop_map(
        |consequences| {
            let mut base = MaterialBase::new();
            for (antecedent, consequent) in consequences {
                base.add_consequence(antecedent, consequent)
                    .expect("atom sets are atomic");
            }
            base
        },
    )
}

/// Generous depth budget so the equivalences are never cut off by the limit.
fn prover(base: &MaterialBase) -> Prover<'_> {
    Prover::with_config(
        base,
        ProverConfig {
            max_depth: 40,
            ..ProverConfig::default()
        },
    )
}

fn with(side: &SentenceSet, sentence: Sentence) -> SentenceSet {
    let mut out = side.clone();
    out.insert(sentence);
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // DD: Γ => Δ, A->B  iff  Γ, A => Δ, B.
    #[test]
    fn dd_deduction_detachment(
        base in base_strategy(),
        gamma in side_strategy(),
        delta in side_strategy(),
        a in sentence_strategy(),
        b in sentence_strategy(),
    ) {
        let prover = prover(&base);
        let lhs = prover.query(
            gamma.clone(),
            with(&delta, Sentence::implies(a.clone(), b.clone())),
        );
        let rhs = prover.query(with(&gamma, a), with(&delta, b));
        prop_assert_eq!(lhs, rhs);
    }

    // II: Γ => Δ, ~A  iff  Γ, A => Δ.
    #[test]
    fn ii_incompatibility(
        base in base_strategy(),
        gamma in side_strategy(),
        delta in side_strategy(),
        a in sentence_strategy(),
    ) {
        let prover = prover(&base);
        let lhs = prover.query(gamma.clone(), with(&delta, Sentence::not(a.clone())));
        let rhs = prover.query(with(&gamma, a), delta);
        prop_assert_eq!(lhs, rhs);
    }

    // AA: Γ, A&B => Δ  iff  Γ, A, B => Δ.
    #[test]
    fn aa_adjunction(
        base in base_strategy(),
        gamma in side_strategy(),
        delta in side_strategy(),
        a in sentence_strategy(),
        b in sentence_strategy(),
    ) {
        let prover = prover(&base);
        let lhs = prover.query(
            with(&gamma, Sentence::and(a.clone(), b.clone())),
            delta.clone(),
        );
        let rhs = prover.query(with(&with(&gamma, a), b), delta);
        prop_assert_eq!(lhs, rhs);
    }

    // SS: Γ => Δ, A|B  iff  Γ => Δ, A, B.
    #[test]
    fn ss_symjunction(
        base in base_strategy(),
        gamma in side_strategy(),
        delta in side_strategy(),
        a in sentence_strategy(),
        b in sentence_strategy(),
    ) {
        let prover = prover(&base);
        let lhs = prover.query(
            gamma.clone(),
            with(&delta, Sentence::or(a.clone(), b.clone())),
        );
        let rhs = prover.query(gamma, with(&with(&delta, a), b));
        prop_assert_eq!(lhs, rhs);
    }

    // P8/P10: identical runs produce identical results and traces.
    #[test]
    fn determinism_across_runs(
        base in base_strategy(),
        gamma in side_strategy(),
        delta in side_strategy(),
    ) {
        let engine = prover(&base);
        let first = engine.derives(gamma.clone(), delta.clone());
        let second = engine.derives(gamma.clone(), delta.clone());
        prop_assert_eq!(first.derivable, second.derivable);
        prop_assert_eq!(&first.trace, &second.trace);

        // A separate prover over the same base agrees as well.
        let other = prover(&base).derives(gamma, delta);
        prop_assert_eq!(first.derivable, other.derivable);
        prop_assert_eq!(&first.trace, &other.trace);
    }

    // Containment holds for arbitrary complex sentences.
    #[test]
    fn containment_for_complex_sentences(
        base in base_strategy(),
        gamma in side_strategy(),
        delta in side_strategy(),
        shared in sentence_strategy(),
    ) {
        let prover = prover(&base);
        prop_assert!(prover.query(
            with(&gamma, shared.clone()),
            with(&delta, shared),
        ));
    }
}
