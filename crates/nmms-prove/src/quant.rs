//! Restricted-quantifier rules.
//!
//! Quantifier rules are triggered by role assertions in the antecedent: the
//! triggers of `ALL R.C(a)` or `SOME R.C(a)` are the individuals `b` with
//! `R(a,b)` present. A left rule with no triggers is inert: its premise is
//! the sequent minus the quantified sentence.

use std::iter;

use nmms_core::{concept_label, individuals, role_triggers, Sentence, Sequent, SentenceSet};

use crate::engine::ProverConfig;
use crate::rules::{with, Alternative, Application, Premises, RuleTag};

/// [L∀R.C] adjunction: one subgoal adding `C(b)` for every trigger `b`.
pub(crate) fn left_all(
    role: &str,
    concept: &str,
    individual: &str,
    rest: &SentenceSet,
    succedent: &SentenceSet,
) -> Application {
    let instances = trigger_instances(rest, role, concept, individual);
    Application::all(
        RuleTag::LAll,
        vec![Sequent::new(with(rest, instances), succedent.clone())],
    )
}

/// [L∃R.C] Ketonen: every non-empty subset of the triggered instances must
/// independently entail the succedent. Subsets are enumerated by ascending
/// size, then lexicographically.
pub(crate) fn left_some(
    role: &str,
    concept: &str,
    individual: &str,
    rest: &SentenceSet,
    succedent: &SentenceSet,
) -> Application {
    let instances = trigger_instances(rest, role, concept, individual);
    let mut subgoals = Vec::new();
    if instances.is_empty() {
        subgoals.push(Sequent::new(rest.clone(), succedent.clone()));
    } else {
        for size in 1..=instances.len() {
            for subset in combinations(&instances, size) {
                subgoals.push(Sequent::new(with(rest, subset), succedent.clone()));
            }
        }
    }
    Application::all(RuleTag::LSome, subgoals)
}

/// [R∀R.C] eigenvariable: assume `R(a,b)` for a fresh `b` and show `C(b)`.
pub(crate) fn right_all(
    role: &str,
    concept: &str,
    individual: &str,
    principal: &Sentence,
    antecedent: &SentenceSet,
    rest: &SentenceSet,
) -> Application {
    let used = used_individuals(principal, antecedent, rest);
    let canonical = format!("_e_{role}_{concept}_{individual}");
    let eigen = fresh_name(&canonical, &used);
    Application::all(
        RuleTag::RAll,
        vec![Sequent::new(
            with(antecedent, [Sentence::role(role, individual, eigen.clone())]),
            with(rest, [Sentence::concept(concept, eigen)]),
        )],
    )
}

/// [R∃R.C] witnesses: each known trigger is tried in turn; if enabled and
/// not blocked, the canonical fresh witness is tried last. Any alternative
/// succeeding closes the rule.
pub(crate) fn right_some(
    role: &str,
    concept: &str,
    individual: &str,
    principal: &Sentence,
    antecedent: &SentenceSet,
    rest: &SentenceSet,
    config: &ProverConfig,
) -> Application {
    let mut alternatives: Vec<Alternative> = role_triggers(antecedent, role, individual)
        .into_iter()
        .map(|b| Alternative {
            subgoal: Sequent::new(antecedent.clone(), with(rest, [Sentence::concept(concept, b)])),
            fresh: None,
        })
        .collect();

    if config.fresh_witnesses {
        let used = used_individuals(principal, antecedent, rest);
        let witness = format!("_w_{role}_{concept}_{individual}");
        let blocked = config.blocking && is_blocked(&witness, antecedent, rest, &used);
        if !used.contains(&witness) && !blocked {
            alternatives.push(Alternative {
                subgoal: Sequent::new(
                    with(antecedent, [Sentence::role(role, individual, witness.clone())]),
                    with(rest, [Sentence::concept(concept, witness.clone())]),
                ),
                fresh: Some(witness),
            });
        }
    }

    Application {
        tag: RuleTag::RSome,
        premises: Premises::Any(alternatives),
    }
}

/// `{C(b) : b ∈ triggers}`, sorted by witness name.
fn trigger_instances(
    side: &SentenceSet,
    role: &str,
    concept: &str,
    individual: &str,
) -> Vec<Sentence> {
    role_triggers(side, role, individual)
        .into_iter()
        .map(|b| Sentence::concept(concept, b))
        .collect()
}

fn used_individuals(
    principal: &Sentence,
    antecedent: &SentenceSet,
    rest: &SentenceSet,
) -> std::collections::BTreeSet<String> {
    individuals(
        antecedent
            .iter()
            .chain(rest.iter())
            .chain(iter::once(principal)),
    )
}

/// Concept-label subset blocking: the fresh witness is blocked iff its
/// concept label in the current context is a subset of some existing
/// individual's label.
fn is_blocked(
    witness: &str,
    antecedent: &SentenceSet,
    rest: &SentenceSet,
    used: &std::collections::BTreeSet<String>,
) -> bool {
    let context = || antecedent.iter().chain(rest.iter());
    let witness_label = concept_label(witness, context());
    used.iter()
        .filter(|c| c.as_str() != witness)
        .any(|c| witness_label.is_subset(&concept_label(c, context())))
}

/// All size-`k` combinations of `items`, in lexicographic order.
fn combinations(items: &[Sentence], k: usize) -> Vec<Vec<Sentence>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if items.len() < k {
        return Vec::new();
    }
    let mut out = Vec::new();
    for mut tail in combinations(&items[1..], k - 1) {
        tail.insert(0, items[0].clone());
        out.push(tail);
    }
    out.extend(combinations(&items[1..], k));
    out
}

/// First name in `canonical, canonical_0, canonical_1, …` not already used.
fn fresh_name(canonical: &str, used: &std::collections::BTreeSet<String>) -> String {
    if !used.contains(canonical) {
        return canonical.to_string();
    }
    let mut i = 0usize;
    loop {
        let candidate = format!("{canonical}_{i}");
        if !used.contains(&candidate) {
            return candidate;
        }
        i += 1;
    }
}
