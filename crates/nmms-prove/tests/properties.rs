//! End-to-end properties of the propositional calculus: containment, base
//! consequence, no-Weakening, no-Cut, supraclassicality, conservativity,
//! explicitation, and reproducibility.

use nmms_core::{parse_sentence, parse_sequent, MaterialBase, Mode, Sentence, SentenceSet};
use nmms_prove::{ProofResult, Prover};

fn atoms(names: &[&str]) -> SentenceSet {
    names.iter().map(|n| Sentence::atom(*n)).collect()
}

fn base_with(consequences: &[(&[&str], &[&str])]) -> MaterialBase {
    let mut base = MaterialBase::new();
    for (antecedent, consequent) in consequences {
        base.add_consequence(atoms(antecedent), atoms(consequent))
            .unwrap();
    }
    base
}

fn ask(base: &MaterialBase, sequent: &str) -> ProofResult {
    let parsed = parse_sequent(sequent, Mode::Propositional).unwrap();
    Prover::new(base).derives(parsed.antecedent, parsed.succedent)
}

#[test]
fn p1_containment() {
    let base = MaterialBase::new();
    assert!(ask(&base, "A => A").derivable);
    assert!(ask(&base, "A, B => B, C").derivable);
    assert!(!ask(&base, "A => B").derivable);
}

#[test]
fn p2_base_consequences_are_derivable() {
    let base = base_with(&[(&["A"], &["B"]), (&["rain"], &["wet"])]);
    assert!(ask(&base, "A => B").derivable);
    assert!(ask(&base, "rain => wet").derivable);
}

#[test]
fn p3_no_weakening() {
    // X is fresh: it appears in no consequence.
    let base = base_with(&[(&["A"], &["B"])]);
    assert!(ask(&base, "A => B").derivable);
    assert!(!ask(&base, "A, X => B").derivable);
    assert!(!ask(&base, "A => B, X").derivable);
}

#[test]
fn p4_no_cut() {
    let base = base_with(&[(&["A"], &["B"]), (&["B"], &["C"])]);
    assert!(ask(&base, "A => B").derivable);
    assert!(ask(&base, "B => C").derivable);
    assert!(!ask(&base, "A => C").derivable);
}

#[test]
fn p5_supraclassicality_probes() {
    // Tautologies hold under any base, including one with material content.
    for base in [MaterialBase::new(), base_with(&[(&["A"], &["B"])])] {
        assert!(ask(&base, "=> A | ~A").derivable);
        assert!(ask(&base, "~~A => A").derivable);
        assert!(ask(&base, "A, ~A =>").derivable);
        assert!(ask(&base, "=> A -> A").derivable);
        assert!(ask(&base, "A, A -> B => B").derivable);
        assert!(ask(&base, "=> (A -> B) | (B -> A)").derivable);
    }
}

#[test]
fn p5_more_classical_patterns() {
    let base = MaterialBase::new();
    // Distribution-flavoured checks and de-Morgan-ish shapes.
    assert!(ask(&base, "A & B => A").derivable);
    assert!(ask(&base, "A & B => B & A").derivable);
    assert!(ask(&base, "A => A | B").derivable);
    assert!(ask(&base, "A | B => B | A").derivable);
    assert!(ask(&base, "~(A | B) => ~A").derivable);
    assert!(ask(&base, "~A & ~B => ~(A | B)").derivable);
    assert!(ask(&base, "A -> B, B -> C, A => C").derivable);
    // And some non-theorems.
    assert!(!ask(&base, "A | B => A").derivable);
    assert!(!ask(&base, "A -> B => B").derivable);
    assert!(!ask(&base, "=> A & ~A").derivable);
}

#[test]
fn p6_conservative_extension_on_atomic_sequents() {
    let base = base_with(&[(&["A"], &["B"]), (&["C", "D"], &["E"])]);
    let cases = [
        "A => B",
        "A => C",
        "C, D => E",
        "C => E",
        "A, B => C",
        "A => A",
        "=>",
    ];
    for case in cases {
        let parsed = parse_sequent(case, Mode::Propositional).unwrap();
        let result = Prover::new(&base).derives(parsed.antecedent.clone(), parsed.succedent.clone());
        assert_eq!(
            result.derivable,
            base.is_axiom(&parsed),
            "atomic sequent `{case}` must coincide with is_axiom"
        );
    }
}

#[test]
fn p7_explicitation_biconditionals_on_fixed_instances() {
    let base = base_with(&[(&["A"], &["B"]), (&["A", "B"], &["C"])]);

    // DD: Γ => Δ, A->B  iff  Γ, A => Δ, B.
    assert_eq!(
        ask(&base, "=> A -> B").derivable,
        ask(&base, "A => B").derivable
    );
    assert_eq!(
        ask(&base, "=> A -> C").derivable,
        ask(&base, "A => C").derivable
    );

    // II: Γ => Δ, ~A  iff  Γ, A => Δ.
    assert_eq!(ask(&base, "B => ~A").derivable, ask(&base, "B, A =>").derivable);
    assert_eq!(ask(&base, "=> ~A, A").derivable, ask(&base, "A => A").derivable);

    // AA: Γ, A&B => Δ  iff  Γ, A, B => Δ.
    assert_eq!(
        ask(&base, "A & B => C").derivable,
        ask(&base, "A, B => C").derivable
    );
    assert!(ask(&base, "A & B => C").derivable);
    assert_eq!(
        ask(&base, "A & X => B").derivable,
        ask(&base, "A, X => B").derivable
    );
    assert!(!ask(&base, "A & X => B").derivable);

    // SS: Γ => Δ, A|B  iff  Γ => Δ, A, B.
    assert_eq!(
        ask(&base, "A => A | B").derivable,
        ask(&base, "A => A, B").derivable
    );
    assert_eq!(
        ask(&base, "X => A | B").derivable,
        ask(&base, "X => A, B").derivable
    );
}

#[test]
fn p8_idempotence() {
    let base = base_with(&[(&["A"], &["B"])]);
    let first = ask(&base, "A -> B, A | B => B");
    let second = ask(&base, "A -> B, A | B => B");
    assert_eq!(first.derivable, second.derivable);
    assert_eq!(first.trace, second.trace);
    assert_eq!(first.depth_reached, second.depth_reached);
}

#[test]
fn seed_scenarios() {
    // 1: the registered consequence itself.
    let base = base_with(&[(&["A"], &["B"])]);
    assert!(ask(&base, "A => B").derivable);

    // 2: no transitive chaining through the base.
    let base = base_with(&[(&["A"], &["B"]), (&["B"], &["C"])]);
    assert!(!ask(&base, "A => C").derivable);

    // 3: a fresh premise defeats the inference.
    let base = base_with(&[(&["A"], &["B"])]);
    assert!(!ask(&base, "A, C => B").derivable);

    // 4: excluded middle under any base.
    assert!(ask(&base, "=> A | ~A").derivable);

    // 5: rain/covered.
    let base = base_with(&[(&["rain"], &["wet"])]);
    assert!(ask(&base, "rain => wet").derivable);
    assert!(!ask(&base, "rain, covered => wet").derivable);
}

#[test]
fn query_is_a_thin_alias() {
    let base = base_with(&[(&["A"], &["B"])]);
    let prover = Prover::new(&base);
    assert!(prover.query(atoms(&["A"]), atoms(&["B"])));
    assert!(!prover.query(atoms(&["A"]), atoms(&["C"])));
}

#[test]
fn trace_literal_forms() {
    let base = base_with(&[(&["A"], &["B"])]);

    let result = ask(&base, "A => B");
    assert_eq!(result.trace, vec!["AXIOM: A => B"]);

    let result = ask(&base, "A => C");
    assert_eq!(result.trace, vec!["FAIL: A => C"]);

    let result = ask(&base, "=> A -> B");
    assert_eq!(result.trace[0], "[R→] on A -> B");
    assert_eq!(result.trace[1], "  AXIOM: A => B");

    let result = ask(&base, "~B => ~A");
    let tags: Vec<&str> = result
        .trace
        .iter()
        .filter(|line| line.trim_start().starts_with('['))
        .map(|line| line.trim_start().split_whitespace().next().unwrap())
        .collect();
    assert!(tags.contains(&"[L¬]") || tags.contains(&"[R¬]"));
}

#[test]
fn mixed_complex_sequents() {
    let base = base_with(&[(&["rain"], &["wet"]), (&["sprinkler"], &["wet"])]);

    // Both disjuncts independently entail wet, and so does the pair? No:
    // {rain, sprinkler} is not a base consequence, so the Ketonen third
    // sequent fails and the disjunction does not entail wet.
    assert!(ask(&base, "rain => wet").derivable);
    assert!(ask(&base, "sprinkler => wet").derivable);
    assert!(!ask(&base, "rain, sprinkler => wet").derivable);
    assert!(!ask(&base, "rain | sprinkler => wet").derivable);

    // With the pair registered as well, the disjunction goes through.
    let base = base_with(&[
        (&["rain"], &["wet"]),
        (&["sprinkler"], &["wet"]),
        (&["rain", "sprinkler"], &["wet"]),
    ]);
    assert!(ask(&base, "rain | sprinkler => wet").derivable);
}

#[test]
fn parser_and_engine_agree_on_spelled_out_sentences() {
    let base = MaterialBase::new();
    let lem = parse_sentence("A | ~A", Mode::Propositional).unwrap();
    let result = Prover::new(&base).derives(SentenceSet::new(), [lem].into_iter().collect());
    assert!(result.derivable);
}
