//! Ordered decision tables.
//!
//! Every rule cascade in the recommendation engine is written as a slice of
//! [`Rule`]s so that precedence is visible in one place. Tables are evaluated
//! either first-match ([`first_match`]) or all-match ([`all_matches`]).

/// A named predicate paired with the outcome it selects
pub struct Rule<I: ?Sized, T> {
    pub name: &'static str,
    pub applies: fn(&I) -> bool,
    pub outcome: T,
}

/// Outcome of the first rule that applies, or `default` if none does
pub fn first_match<I: ?Sized, T: Copy + std::fmt::Debug>(
    table: &[Rule<I, T>],
    input: &I,
    default: T,
) -> T {
    match table.iter().find(|rule| (rule.applies)(input)) {
        Some(rule) => {
            tracing::trace!("rule '{}' matched -> {:?}", rule.name, rule.outcome);
            rule.outcome
        }
        None => default,
    }
}

/// Outcomes of every rule that applies, in table order
pub fn all_matches<I: ?Sized, T: Copy>(table: &[Rule<I, T>], input: &I) -> Vec<T> {
    table
        .iter()
        .filter(|rule| (rule.applies)(input))
        .map(|rule| rule.outcome)
        .collect()
}
