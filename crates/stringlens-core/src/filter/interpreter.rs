//! Natural-language phrase interpretation.
//!
//! [`interpret`] turns a loosely structured phrase such as
//! `"single word palindromic strings"` into [`FilterCriteria`] by running a
//! fixed, ordered table of lexical rules over the lowercased phrase. This is
//! pattern recognition, not parsing: words outside the patterns are ignored.
//!
//! # Rules (in application order)
//!
//! | # | Pattern | Effect |
//! |---|---------|--------|
//! | 1 | `palindrome` / `palindromic` | `is_palindrome = true` |
//! | 2 | `single word`, `two word` / `2 word`, `three word` / `3 word` | `word_count = 1, 2, 3` (first listed match wins) |
//! | 3 | `longer than N` | `min_length = N + 1` |
//! | 4 | `shorter than N` | `max_length = N - 1` |
//! | 5 | `contain(s/ing) [the letter / the character] X` | `contains_character = X` |
//! | 6 | `first vowel`, `second vowel` | `contains_character = 'a'`, `'e'` |
//!
//! Rules are independent and may all fire on one phrase. When two rules write
//! the same field the later one wins, so rule 6 overrides rule 5.
//!
//! A length bound no string can meet (`shorter than 0`, or `longer than N`
//! with `N + 1` beyond `usize`) has no `FilterCriteria` form. [`interpret`]
//! leaves such a bound out; [`interpret_query`] rejects the phrase with
//! [`QueryError::Unsatisfiable`].

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

use super::criteria::FilterCriteria;
use super::error::{QueryError, QueryResult};

// Compiled once on first use
static PALINDROME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"palindrom(?:e|ic)").expect("Invalid regex: palindrome pattern"));

static LONGER_THAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"longer\s+than\s+(\d+)").expect("Invalid regex: longer-than pattern"));

static SHORTER_THAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"shorter\s+than\s+(\d+)").expect("Invalid regex: shorter-than pattern"));

static CONTAINS_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bcontain(?:s|ing)?\s+(?:the\s+(?:letter|character)\s+)?([a-z])\b")
        .expect("Invalid regex: contains-letter pattern")
});

/// Word-count phrases, checked in order; only the first hit applies.
const WORD_COUNT_PHRASES: &[(&[&str], usize)] = &[
    (&["single word"], 1),
    (&["two word", "2 word"], 2),
    (&["three word", "3 word"], 3),
];

/// Vowel phrases, checked in order; only the first hit applies.
const VOWEL_PHRASES: &[(&str, char)] = &[("first vowel", 'a'), ("second vowel", 'e')];

/// Criteria derived from a phrase, plus the first bound that cannot hold.
#[derive(Debug, Default)]
struct Interpretation {
    criteria: FilterCriteria,
    unsatisfiable: Option<String>,
}

impl Interpretation {
    fn mark_unsatisfiable(&mut self, bound: &str) {
        self.unsatisfiable.get_or_insert_with(|| bound.to_string());
    }
}

/// A single recognition rule: inspects the lowercased phrase and writes any
/// fields it recognizes. Returns true if it fired.
struct Rule {
    name: &'static str,
    apply: fn(&str, &mut Interpretation) -> bool,
}

/// The rule table, in application order.
const RULES: &[Rule] = &[
    Rule {
        name: "palindrome",
        apply: palindrome_rule,
    },
    Rule {
        name: "word_count",
        apply: word_count_rule,
    },
    Rule {
        name: "longer_than",
        apply: longer_than_rule,
    },
    Rule {
        name: "shorter_than",
        apply: shorter_than_rule,
    },
    Rule {
        name: "contains_letter",
        apply: contains_letter_rule,
    },
    Rule {
        name: "vowel",
        apply: vowel_rule,
    },
];

/// Interprets a phrase into filter criteria.
///
/// Total: a phrase with no recognizable pattern yields empty criteria. Callers
/// must treat that as "nothing recognized", not "match everything"; see
/// [`interpret_query`] for a version that does so. Length bounds no string
/// can meet are left out here and only reported by [`interpret_query`].
///
/// # Example
///
/// ```
/// use stringlens_core::filter::{interpret, FilterCriteria};
///
/// let criteria = interpret("all single word palindromic strings");
/// assert_eq!(criteria, FilterCriteria::new().palindrome(true).word_count(1));
///
/// assert!(interpret("bananas are yellow").is_empty());
/// ```
pub fn interpret(phrase: &str) -> FilterCriteria {
    run_rules(phrase).criteria
}

fn run_rules(phrase: &str) -> Interpretation {
    let normalized = phrase.to_lowercase();
    let mut interpretation = Interpretation::default();

    for rule in RULES {
        if (rule.apply)(&normalized, &mut interpretation) {
            debug!(rule = rule.name, phrase = %phrase, "query rule matched");
        }
    }

    interpretation
}

fn palindrome_rule(phrase: &str, out: &mut Interpretation) -> bool {
    if PALINDROME.is_match(phrase) {
        out.criteria.is_palindrome = Some(true);
        return true;
    }
    false
}

fn word_count_rule(phrase: &str, out: &mut Interpretation) -> bool {
    let hit = WORD_COUNT_PHRASES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| phrase.contains(n)));

    match hit {
        Some((_, count)) => {
            out.criteria.word_count = Some(*count);
            true
        }
        None => false,
    }
}

fn longer_than_rule(phrase: &str, out: &mut Interpretation) -> bool {
    let Some(caps) = LONGER_THAN.captures(phrase) else {
        return false;
    };

    // Strictly greater than N; past usize::MAX no length qualifies
    match parse_bound(&caps).and_then(|n| n.checked_add(1)) {
        Some(min) => out.criteria.min_length = Some(min),
        None => out.mark_unsatisfiable(&caps[0]),
    }
    true
}

fn shorter_than_rule(phrase: &str, out: &mut Interpretation) -> bool {
    let Some(caps) = SHORTER_THAN.captures(phrase) else {
        return false;
    };

    // Strictly less than N. An N beyond usize::MAX bounds nothing, so the
    // field stays unset.
    match parse_bound(&caps) {
        Some(0) => out.mark_unsatisfiable(&caps[0]),
        Some(n) => out.criteria.max_length = Some(n - 1),
        None => {}
    }
    true
}

fn contains_letter_rule(phrase: &str, out: &mut Interpretation) -> bool {
    let letter = CONTAINS_LETTER
        .captures(phrase)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next());

    match letter {
        Some(c) => {
            out.criteria.contains_character = Some(c);
            true
        }
        None => false,
    }
}

fn vowel_rule(phrase: &str, out: &mut Interpretation) -> bool {
    match VOWEL_PHRASES.iter().find(|(needle, _)| phrase.contains(needle)) {
        Some((_, vowel)) => {
            out.criteria.contains_character = Some(*vowel);
            true
        }
        None => false,
    }
}

/// Parses the number captured by a length pattern, or `None` if it does
/// not fit in `usize`.
fn parse_bound(caps: &Captures<'_>) -> Option<usize> {
    caps.get(1).and_then(|m| m.as_str().parse().ok())
}

/// A phrase together with the criteria it was interpreted as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretedQuery {
    /// The phrase as submitted.
    pub original: String,
    /// The criteria derived from the phrase.
    pub parsed_filters: FilterCriteria,
}

/// Interprets a phrase and rejects results a caller cannot act on.
///
/// # Errors
///
/// - `QueryError::EmptyQuery` if the phrase is blank.
/// - `QueryError::Unsatisfiable` if a length bound admits no string.
/// - `QueryError::Unrecognized` if no rule fired.
/// - `QueryError::Conflicting` if the derived `min_length` exceeds `max_length`.
pub fn interpret_query(phrase: &str) -> QueryResult<InterpretedQuery> {
    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    let Interpretation {
        criteria: parsed_filters,
        unsatisfiable,
    } = run_rules(trimmed);

    if let Some(bound) = unsatisfiable {
        return Err(QueryError::Unsatisfiable { bound });
    }

    if parsed_filters.is_empty() {
        return Err(QueryError::unrecognized(trimmed));
    }

    if let Some((min_length, max_length)) = parsed_filters.length_conflict() {
        return Err(QueryError::Conflicting {
            min_length,
            max_length,
        });
    }

    Ok(InterpretedQuery {
        original: trimmed.to_string(),
        parsed_filters,
    })
}
