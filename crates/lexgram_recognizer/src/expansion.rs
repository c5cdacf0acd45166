//! Terminal-anchored expansion of a non-terminal.
//!
//! A step can only be aligned against tokens once a terminal leads its
//! sentence. Expanding `<A>` therefore keeps rewriting the leftmost
//! non-terminal, breadth first, until each form is led by a terminal or
//! has vanished entirely through `EPSILON`.
//!
//! The symbols that followed an intermediate non-terminal stay in the
//! form: with `<A> = <B> x` and `<B> = y` the expansion of `<A>` is `y x`.

use std::collections::{HashSet, VecDeque};

use lexgram_foundation::Result;
use lexgram_grammar::{Grammar, Symbol};

use crate::config::Budget;

/// Returns every terminal-anchored expansion of `non_terminal`.
///
/// Each expansion is free of `EPSILON` and either empty or led by a
/// terminal. Expansions come out in breadth-first order, alternatives in
/// declaration order, each distinct form once.
///
/// # Errors
///
/// Returns a `LimitExceeded` error if `budget` runs out. A grammar that is
/// left recursive through non-terminals alone grows forms forever, so an
/// unlimited budget does not return in that case.
pub(crate) fn expansions(
    grammar: &Grammar,
    non_terminal: &str,
    budget: &mut Budget,
) -> Result<Vec<Vec<Symbol>>> {
    let mut anchored = Vec::new();
    let mut seen: HashSet<Vec<Symbol>> = HashSet::new();
    let mut queue: VecDeque<Vec<Symbol>> = VecDeque::new();
    queue.push_back(vec![Symbol::NonTerminal(non_terminal.to_string())]);

    while let Some(form) = queue.pop_front() {
        budget.charge()?;
        let Some((Symbol::NonTerminal(head), rest)) = form.split_first() else {
            continue;
        };

        for rule in grammar.rules_for(head) {
            let expanded: Vec<Symbol> = rule
                .symbols()
                .iter()
                .chain(rest)
                .filter(|symbol| !symbol.is_epsilon())
                .cloned()
                .collect();
            if !seen.insert(expanded.clone()) {
                continue;
            }
            if expanded.first().is_some_and(Symbol::is_non_terminal) {
                queue.push_back(expanded);
            } else {
                anchored.push(expanded);
            }
        }
    }

    Ok(anchored)
}

/// Returns the terminals that can lead an expansion of `non_terminal`.
///
/// An expansion that vanishes contributes whatever terminal leads `rest`.
pub(crate) fn leading_terminals(
    grammar: &Grammar,
    non_terminal: &str,
    rest: &[Symbol],
) -> Vec<String> {
    let mut budget = Budget::unlimited();
    let Ok(forms) = expansions(grammar, non_terminal, &mut budget) else {
        return Vec::new();
    };

    let mut terminals: Vec<String> = forms
        .iter()
        .filter_map(|form| form.first().or_else(|| rest.first()))
        .filter_map(|symbol| match symbol {
            Symbol::Terminal(name) => Some(name.clone()),
            _ => None,
        })
        .collect();
    terminals.sort();
    terminals.dedup();
    terminals
}
