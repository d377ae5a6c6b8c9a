//! Backward proof search with memoization.
//!
//! Root-first, depth-limited search. Every node checks the axiom predicate
//! first, then the per-call memo table, then decomposes one complex sentence
//! at a time (antecedent before succedent, each side in ascending order of
//! the canonical string form), backtracking to the next candidate when a
//! rule's subgoals fail. Invertibility of the rules guarantees that if the
//! goal is derivable some order finds the proof; sorting makes runs
//! reproducible.

use nmms_core::{MaterialBase, Sentence, Sequent, SentenceSet};
use rustc_hash::FxHashMap;

use crate::rules::{self, Application, Premises};

/// Tunable search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProverConfig {
    /// Recursion budget. A non-axiomatic goal at this depth fails with a
    /// `DEPTH LIMIT` trace entry.
    pub max_depth: usize,
    /// Try the canonical fresh-witness strategy for [R∃R.C] (experimental).
    pub fresh_witnesses: bool,
    /// Concept-label subset blocking for fresh witnesses. Conjectured sound,
    /// not proven; switchable for experiments.
    pub blocking: bool,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            max_depth: 25,
            fresh_witnesses: true,
            blocking: true,
        }
    }
}

/// Outcome of one top-level [`Prover::derives`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofResult {
    pub derivable: bool,
    /// Prefix-order trace, indented two spaces per depth.
    pub trace: Vec<String>,
    /// Deepest node visited.
    pub depth_reached: usize,
    /// Completed memo entries returned to a caller.
    pub cache_hits: usize,
}

/// Memo entries. `Pending` marks a goal currently on the search stack; a
/// re-encounter is a cycle and counts as failure for that branch only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CacheEntry {
    Pending,
    Provable,
    Refutable,
}

/// A reasoner bound to a material base.
///
/// `derives` takes `&self`: all mutable search state lives in a per-call
/// structure, so a prover over a frozen base may be shared between readers.
/// The memo table never outlives the call that created it.
pub struct Prover<'a> {
    base: &'a MaterialBase,
    config: ProverConfig,
}

impl<'a> Prover<'a> {
    pub fn new(base: &'a MaterialBase) -> Self {
        Prover {
            base,
            config: ProverConfig::default(),
        }
    }

    pub fn with_config(base: &'a MaterialBase, config: ProverConfig) -> Self {
        Prover { base, config }
    }

    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    /// Decide `Γ => Δ` by backward search.
    pub fn derives(&self, antecedent: SentenceSet, succedent: SentenceSet) -> ProofResult {
        let mut search = Search {
            base: self.base,
            config: &self.config,
            cache: FxHashMap::default(),
            trace: Vec::new(),
            depth_reached: 0,
            cache_hits: 0,
            warned_fresh: false,
        };
        let goal = Sequent::new(antecedent, succedent);
        let derivable = search.prove(&goal, 0);
        ProofResult {
            derivable,
            trace: search.trace,
            depth_reached: search.depth_reached,
            cache_hits: search.cache_hits,
        }
    }

    /// Thin alias for callers that only want the verdict.
    pub fn query(&self, antecedent: SentenceSet, succedent: SentenceSet) -> bool {
        self.derives(antecedent, succedent).derivable
    }
}

/// Mutable state of one `derives` call.
struct Search<'a> {
    base: &'a MaterialBase,
    config: &'a ProverConfig,
    cache: FxHashMap<Sequent, CacheEntry>,
    trace: Vec<String>,
    depth_reached: usize,
    cache_hits: usize,
    warned_fresh: bool,
}

impl Search<'_> {
    fn prove(&mut self, goal: &Sequent, depth: usize) -> bool {
        self.depth_reached = self.depth_reached.max(depth);
        let indent = "  ".repeat(depth);

        if self.base.is_axiom(goal) {
            self.trace.push(format!("{indent}AXIOM: {goal}"));
            self.cache.insert(goal.clone(), CacheEntry::Provable);
            return true;
        }

        match self.cache.get(goal) {
            Some(CacheEntry::Provable) => {
                self.cache_hits += 1;
                self.trace.push(format!("{indent}CACHED: {goal}"));
                return true;
            }
            Some(CacheEntry::Refutable) => {
                self.cache_hits += 1;
                self.trace.push(format!("{indent}CACHED: {goal}"));
                return false;
            }
            Some(CacheEntry::Pending) => {
                self.trace.push(format!("{indent}CYCLE: {goal}"));
                return false;
            }
            None => {}
        }

        if depth >= self.config.max_depth {
            // Failure by budget, deliberately left uncached: the same goal
            // reached at a shallower depth must still get a full search.
            self.trace.push(format!("{indent}DEPTH LIMIT"));
            return false;
        }

        self.cache.insert(goal.clone(), CacheEntry::Pending);
        let derivable = self.expand(goal, depth);
        self.cache.insert(
            goal.clone(),
            if derivable {
                CacheEntry::Provable
            } else {
                CacheEntry::Refutable
            },
        );
        if !derivable {
            self.trace.push(format!("{indent}FAIL: {goal}"));
        }
        derivable
    }

    /// Try every complex sentence as the principal, antecedent side first.
    fn expand(&mut self, goal: &Sequent, depth: usize) -> bool {
        for principal in sorted_complex(&goal.antecedent) {
            let mut rest = goal.antecedent.clone();
            rest.remove(&principal);
            if let Some(app) = rules::left(&principal, &rest, &goal.succedent) {
                if self.apply(&principal, app, depth) {
                    return true;
                }
            }
        }
        for principal in sorted_complex(&goal.succedent) {
            let mut rest = goal.succedent.clone();
            rest.remove(&principal);
            if let Some(app) = rules::right(&principal, &goal.antecedent, &rest, self.config) {
                if self.apply(&principal, app, depth) {
                    return true;
                }
            }
        }
        false
    }

    fn apply(&mut self, principal: &Sentence, app: Application, depth: usize) -> bool {
        let indent = "  ".repeat(depth);
        self.trace.push(format!("{indent}{} on {principal}", app.tag));
        match app.premises {
            Premises::All(subgoals) => subgoals.iter().all(|g| self.prove(g, depth + 1)),
            Premises::Any(alternatives) => {
                for alternative in &alternatives {
                    if let Some(witness) = &alternative.fresh {
                        if !self.warned_fresh {
                            self.warned_fresh = true;
                            tracing::warn!(
                                witness = %witness,
                                "using experimental fresh canonical witness for [R∃R.C]"
                            );
                        }
                        tracing::debug!(witness = %witness, "trying fresh witness");
                    }
                    if self.prove(&alternative.subgoal, depth + 1) {
                        return true;
                    }
                }
                false
            }
        }
    }
}

/// Complex members of a side, ascending by canonical string form.
fn sorted_complex(side: &SentenceSet) -> Vec<Sentence> {
    let mut complex: Vec<Sentence> = side.iter().filter(|s| !s.is_atomic()).cloned().collect();
    complex.sort_by_cached_key(|s| s.to_string());
    complex
}
