//! Pluralization and capitalization used for resource naming
//!
//! The [`Inflector`] trait is the seam between name resolution and the
//! linguistic rules behind it. [`EnglishInflector`] is the default
//! implementation: irregular nouns come from a small table, everything else
//! is delegated to the `Inflector` crate.

use inflector::Inflector as _;

/// String-case capability required by the name resolver
pub trait Inflector {
    /// Pluralize the trailing noun of `input`, leaving any prefix untouched
    fn pluralize(&self, input: &str) -> String;

    /// Upper-case the first character of `segment`, leaving the rest as is
    fn capitalize(&self, segment: &str) -> String;
}

/// Irregular nouns the rule-based pluralizer gets wrong
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("woman", "women"),
    ("man", "men"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("criterion", "criteria"),
    ("ox", "oxen"),
];

/// Irregular tails the `Inflector` crate mangles inside a longer word
/// ("salesperson" -> "salespersonople"); these take the regular suffix instead
const EMBEDDED_REGULAR: &[&str] = &["person"];

/// English noun inflection
///
/// # Examples
///
/// ```
/// use make_crud::naming::{EnglishInflector, Inflector};
///
/// let inflector = EnglishInflector;
/// assert_eq!(inflector.pluralize("Admin/Post"), "Admin/Posts");
/// assert_eq!(inflector.pluralize("Person"), "People");
/// assert_eq!(inflector.capitalize("post"), "Post");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl Inflector for EnglishInflector {
    fn pluralize(&self, input: &str) -> String {
        let start = input
            .char_indices()
            .rev()
            .find(|(_, c)| !c.is_alphanumeric())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let (head, word) = input.split_at(start);

        if word.is_empty() {
            return input.to_string();
        }

        format!("{head}{}", pluralize_word(word))
    }

    fn capitalize(&self, segment: &str) -> String {
        let mut chars = segment.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

fn pluralize_word(word: &str) -> String {
    if word.is_ascii() {
        let lower = word.to_ascii_lowercase();
        for (singular, plural) in IRREGULAR_PLURALS {
            if !lower.ends_with(singular) {
                continue;
            }
            let at = word.len() - singular.len();
            // Only whole words or PascalCase tails ("SalesPerson", not "Human")
            let starts_component = at == 0 || word[at..].starts_with(|c: char| c.is_ascii_uppercase());
            if starts_component {
                return format!("{}{}", &word[..at], match_case(&word[at..], plural));
            }
            if EMBEDDED_REGULAR.contains(singular) {
                return format!("{word}s");
            }
        }
    }

    match_case(word, &word.to_lowercase().to_plural())
}

/// Re-apply the casing of `original` to the part of `plural` it shares
fn match_case(original: &str, plural: &str) -> String {
    let shared = original
        .chars()
        .zip(plural.chars())
        .take_while(|(o, p)| o.to_lowercase().eq(p.to_lowercase()))
        .count();

    original
        .chars()
        .take(shared)
        .chain(plural.chars().skip(shared))
        .collect()
}
