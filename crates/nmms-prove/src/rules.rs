//! Sequent decomposition rules.
//!
//! Ketonen-style rules over sets: the active formula is removed from its
//! side and the rule names the subgoals. The three-premise rules carry a
//! third top sequent holding all active formulae from the other two premises
//! on the same sides, which compensates for the absence of structural
//! contraction when working with sets.

use std::fmt;

use nmms_core::{Sentence, Sequent, SentenceSet};

use crate::engine::ProverConfig;
use crate::quant;

/// Identifies the rule that fired. `Display` renders the trace tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTag {
    LNot,
    RNot,
    LAnd,
    RAnd,
    LOr,
    ROr,
    LImplies,
    RImplies,
    LAll,
    LSome,
    RAll,
    RSome,
}

impl fmt::Display for RuleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            RuleTag::LNot => "[L¬]",
            RuleTag::RNot => "[R¬]",
            RuleTag::LAnd => "[L∧]",
            RuleTag::RAnd => "[R∧]",
            RuleTag::LOr => "[L∨]",
            RuleTag::ROr => "[R∨]",
            RuleTag::LImplies => "[L→]",
            RuleTag::RImplies => "[R→]",
            RuleTag::LAll => "[L∀R.C]",
            RuleTag::LSome => "[L∃R.C]",
            RuleTag::RAll => "[R∀R.C]",
            RuleTag::RSome => "[R∃R.C]",
        };
        write!(f, "{tag}")
    }
}

/// How the subgoals of a rule combine.
#[derive(Debug, Clone)]
pub enum Premises {
    /// Every subgoal must be derivable.
    All(Vec<Sequent>),
    /// At least one alternative must be derivable (witness choice for
    /// [R∃R.C]).
    Any(Vec<Alternative>),
}

/// One way of witnessing an existential on the right.
#[derive(Debug, Clone)]
pub struct Alternative {
    pub subgoal: Sequent,
    /// The canonical fresh witness this alternative introduces, if any.
    pub fresh: Option<String>,
}

/// A rule application: which rule, and the subgoals it demands.
#[derive(Debug, Clone)]
pub struct Application {
    pub tag: RuleTag,
    pub premises: Premises,
}

impl Application {
    pub(crate) fn all(tag: RuleTag, subgoals: Vec<Sequent>) -> Self {
        Application {
            tag,
            premises: Premises::All(subgoals),
        }
    }
}

/// Clone a side and extend it with extra sentences.
pub(crate) fn with<I>(side: &SentenceSet, extra: I) -> SentenceSet
where
    I: IntoIterator<Item = Sentence>,
{
    let mut out = side.clone();
    out.extend(extra);
    out
}

/// Decompose a complex principal on the left. `rest` is the antecedent with
/// the principal already removed. Returns `None` for atomic sentences.
pub fn left(principal: &Sentence, rest: &SentenceSet, succedent: &SentenceSet) -> Option<Application> {
    match principal {
        // [L¬]: Γ, ~A => Δ  ←  Γ => Δ, A
        Sentence::Not(a) => Some(Application::all(
            RuleTag::LNot,
            vec![Sequent::new(rest.clone(), with(succedent, [(**a).clone()]))],
        )),

        // [L∧]: Γ, A&B => Δ  ←  Γ, A, B => Δ   (multiplicative)
        Sentence::And(a, b) => Some(Application::all(
            RuleTag::LAnd,
            vec![Sequent::new(
                with(rest, [(**a).clone(), (**b).clone()]),
                succedent.clone(),
            )],
        )),

        // [L∨]: Γ, A|B => Δ  ←  Γ,A => Δ  and  Γ,B => Δ  and  Γ,A,B => Δ
        Sentence::Or(a, b) => Some(Application::all(
            RuleTag::LOr,
            vec![
                Sequent::new(with(rest, [(**a).clone()]), succedent.clone()),
                Sequent::new(with(rest, [(**b).clone()]), succedent.clone()),
                Sequent::new(with(rest, [(**a).clone(), (**b).clone()]), succedent.clone()),
            ],
        )),

        // [L→]: Γ, A->B => Δ  ←  Γ => Δ,A  and  Γ,B => Δ  and  Γ,B => Δ,A
        Sentence::Implies(a, b) => Some(Application::all(
            RuleTag::LImplies,
            vec![
                Sequent::new(rest.clone(), with(succedent, [(**a).clone()])),
                Sequent::new(with(rest, [(**b).clone()]), succedent.clone()),
                Sequent::new(with(rest, [(**b).clone()]), with(succedent, [(**a).clone()])),
            ],
        )),

        Sentence::AllRestrict {
            role,
            concept,
            individual,
        } => Some(quant::left_all(role, concept, individual, rest, succedent)),

        Sentence::SomeRestrict {
            role,
            concept,
            individual,
        } => Some(quant::left_some(role, concept, individual, rest, succedent)),

        _ => None,
    }
}

/// Decompose a complex principal on the right. `rest` is the succedent with
/// the principal already removed.
pub fn right(
    principal: &Sentence,
    antecedent: &SentenceSet,
    rest: &SentenceSet,
    config: &ProverConfig,
) -> Option<Application> {
    match principal {
        // [R¬]: Γ => Δ, ~A  ←  Γ, A => Δ
        Sentence::Not(a) => Some(Application::all(
            RuleTag::RNot,
            vec![Sequent::new(with(antecedent, [(**a).clone()]), rest.clone())],
        )),

        // [R∧]: Γ => Δ, A&B  ←  Γ => Δ,A  and  Γ => Δ,B  and  Γ => Δ,A,B
        Sentence::And(a, b) => Some(Application::all(
            RuleTag::RAnd,
            vec![
                Sequent::new(antecedent.clone(), with(rest, [(**a).clone()])),
                Sequent::new(antecedent.clone(), with(rest, [(**b).clone()])),
                Sequent::new(antecedent.clone(), with(rest, [(**a).clone(), (**b).clone()])),
            ],
        )),

        // [R∨]: Γ => Δ, A|B  ←  Γ => Δ, A, B
        Sentence::Or(a, b) => Some(Application::all(
            RuleTag::ROr,
            vec![Sequent::new(
                antecedent.clone(),
                with(rest, [(**a).clone(), (**b).clone()]),
            )],
        )),

        // [R→]: Γ => Δ, A->B  ←  Γ, A => Δ, B
        Sentence::Implies(a, b) => Some(Application::all(
            RuleTag::RImplies,
            vec![Sequent::new(
                with(antecedent, [(**a).clone()]),
                with(rest, [(**b).clone()]),
            )],
        )),

        Sentence::AllRestrict {
            role,
            concept,
            individual,
        } => Some(quant::right_all(
            role, concept, individual, principal, antecedent, rest,
        )),

        Sentence::SomeRestrict {
            role,
            concept,
            individual,
        } => Some(quant::right_some(
            role, concept, individual, principal, antecedent, rest, config,
        )),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(sentences: &[Sentence]) -> SentenceSet {
        sentences.iter().cloned().collect()
    }

    fn subgoals(app: Application) -> Vec<Sequent> {
        match app.premises {
            Premises::All(goals) => goals,
            Premises::Any(_) => panic!("expected all-premises rule"),
        }
    }

    #[test]
    fn left_negation_moves_the_body_right() {
        let principal = Sentence::not(Sentence::atom("A"));
        let app = left(&principal, &set(&[Sentence::atom("B")]), &set(&[])).unwrap();
        assert_eq!(app.tag, RuleTag::LNot);
        let goals = subgoals(app);
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].to_string(), "B => A");
    }

    #[test]
    fn left_conjunction_is_multiplicative() {
        let principal = Sentence::and(Sentence::atom("A"), Sentence::atom("B"));
        let app = left(&principal, &set(&[]), &set(&[Sentence::atom("C")])).unwrap();
        assert_eq!(app.tag, RuleTag::LAnd);
        let goals = subgoals(app);
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].to_string(), "A, B => C");
    }

    #[test]
    fn three_premise_rules_carry_the_third_top_sequent() {
        let principal = Sentence::or(Sentence::atom("A"), Sentence::atom("B"));
        let goals = subgoals(left(&principal, &set(&[]), &set(&[Sentence::atom("C")])).unwrap());
        assert_eq!(goals.len(), 3);
        assert_eq!(goals[0].to_string(), "A => C");
        assert_eq!(goals[1].to_string(), "B => C");
        assert_eq!(goals[2].to_string(), "A, B => C");

        let principal = Sentence::implies(Sentence::atom("A"), Sentence::atom("B"));
        let goals = subgoals(left(&principal, &set(&[]), &set(&[Sentence::atom("C")])).unwrap());
        assert_eq!(goals.len(), 3);
        assert_eq!(goals[0].to_string(), "∅ => A, C");
        assert_eq!(goals[1].to_string(), "B => C");
        assert_eq!(goals[2].to_string(), "B => A, C");

        let principal = Sentence::and(Sentence::atom("A"), Sentence::atom("B"));
        let goals = subgoals(
            right(&principal, &set(&[]), &set(&[]), &ProverConfig::default()).unwrap(),
        );
        assert_eq!(goals.len(), 3);
        assert_eq!(goals[0].to_string(), "∅ => A");
        assert_eq!(goals[1].to_string(), "∅ => B");
        assert_eq!(goals[2].to_string(), "∅ => A, B");
    }

    #[test]
    fn right_implication_is_deduction_detachment() {
        let principal = Sentence::implies(Sentence::atom("A"), Sentence::atom("B"));
        let goals = subgoals(
            right(
                &principal,
                &set(&[Sentence::atom("G")]),
                &set(&[Sentence::atom("D")]),
                &ProverConfig::default(),
            )
            .unwrap(),
        );
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].to_string(), "A, G => B, D");
    }

    #[test]
    fn right_disjunction_splits_into_both_disjuncts() {
        let principal = Sentence::or(Sentence::atom("A"), Sentence::atom("B"));
        let goals = subgoals(
            right(&principal, &set(&[]), &set(&[]), &ProverConfig::default()).unwrap(),
        );
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].to_string(), "∅ => A, B");
    }

    #[test]
    fn atoms_have_no_rule() {
        assert!(left(&Sentence::atom("A"), &set(&[]), &set(&[])).is_none());
        assert!(right(
            &Sentence::concept("C", "a"),
            &set(&[]),
            &set(&[]),
            &ProverConfig::default()
        )
        .is_none());
    }
}
