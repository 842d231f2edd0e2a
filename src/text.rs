//! Word-level string helpers.
//!
//! Casing conversion, truncation and a rule-based English pluralizer. The
//! pluralizer covers the common cases (irregulars, uncountables, f/fe, y,
//! sibilants, o) and works on single words only.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Nouns whose plural equals the singular.
const UNCOUNTABLES: &[&str] = &[
    "sheep",
    "fish",
    "deer",
    "species",
    "series",
    "money",
    "rice",
    "information",
    "equipment",
    "news",
    "bison",
    "moose",
    "swine",
    "salmon",
    "trout",
];

/// Singular to plural for nouns no rule covers.
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("louse", "lice"),
    ("cactus", "cacti"),
    ("nucleus", "nuclei"),
    ("syllabus", "syllabi"),
    ("focus", "foci"),
    ("phenomenon", "phenomena"),
    ("datum", "data"),
    ("radius", "radii"),
    ("index", "indices"),
    ("appendix", "appendices"),
    ("criterion", "criteria"),
];

/// Words ending in `o` that take `es`.
const O_ES_EXCEPTIONS: &[&str] = &["hero", "potato", "tomato", "echo", "torpedo"];

/// Copy the basic casing of `template` onto `word`.
///
/// An all-caps template gives an all-caps word, a Title Case template gives
/// a Title Case word, anything else leaves `word` as it is.
pub fn apply_word_casing(template: &str, word: &str) -> String {
    if template == template.to_uppercase() {
        return word.to_uppercase();
    }
    let mut chars = template.chars();
    if let Some(first) = chars.next() {
        let rest = chars.as_str();
        let first_is_upper = first.to_uppercase().eq(std::iter::once(first));
        if first_is_upper && rest == rest.to_lowercase() {
            return capitalize(word);
        }
    }
    word.to_string()
}

/// Shorten `s` to at most `length` characters, ending with `suffix` when cut.
///
/// If the suffix does not fit, the suffix itself is cut to `length`.
pub fn truncate(s: &str, length: usize, suffix: &str) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }
    let suffix_len = suffix.chars().count();
    if length <= suffix_len {
        return suffix.chars().take(length).collect();
    }
    let mut out: String = s.chars().take(length - suffix_len).collect();
    out.push_str(suffix);
    out
}

/// [`truncate`] with `"..."` as suffix.
pub fn truncate_default(s: &str, length: usize) -> String {
    truncate(s, length, "...")
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// British spelling of [`capitalize`].
pub fn capitalise(s: &str) -> String {
    capitalize(s)
}

/// Compile a pattern written in this module.
#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal pattern")
}

/// Lower-case letter or digit followed by an upper-case letter.
fn lower_then_upper() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile("([0-9a-z])([A-Z])"))
}

/// Run of capitals followed by a capitalized word (`HTTPResponse`).
fn acronym_then_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile("([A-Z]+)([A-Z][a-z])"))
}

/// Underscores before a lower-case letter.
fn underscores_then_lower() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile("_+([a-z])"))
}

/// `camelCase` (or `PascalCase`) to `snake_case`.
///
/// Acronyms stay together: `parseHTTPResponse` becomes `parse_http_response`.
pub fn camel_to_snake(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let split = lower_then_upper().replace_all(s, "${1}_${2}");
    let split = acronym_then_word().replace_all(&split, "${1}_${2}");
    let out = split.to_lowercase();
    match out.strip_prefix('_') {
        Some(rest) => rest.to_string(),
        None => out,
    }
}

/// `snake_case` to `camelCase`.
///
/// Underscores before a lower-case ASCII letter are dropped and the letter
/// upper-cased; other underscores are kept.
pub fn snake_to_camel(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let lower = s.to_lowercase();
    underscores_then_lower()
        .replace_all(&lower, |caps: &Captures<'_>| caps[1].to_ascii_uppercase())
        .into_owned()
}

/// Plural of a single English word for `count` items, keeping its casing.
///
/// A count of one returns the word unchanged.
pub fn pluralize(word: &str, count: i64) -> String {
    if word.is_empty() || count == 1 {
        return word.to_string();
    }

    let lower = word.to_lowercase();

    if UNCOUNTABLES.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULARS.iter().find(|(singular, _)| *singular == lower) {
        return apply_word_casing(word, plural);
    }

    let plural = plural_by_rule(&lower);
    apply_word_casing(word, &plural)
}

/// British spelling of [`pluralize`].
pub fn pluralise(word: &str, count: i64) -> String {
    pluralize(word, count)
}

fn plural_by_rule(lower: &str) -> String {
    let chars: Vec<char> = lower.chars().collect();
    let n = chars.len();
    let is_letter = |i: usize| chars.get(i).is_some_and(|c| c.is_ascii_lowercase());

    // knife -> knives, leaf -> leaves
    if lower.ends_with("fe") && n >= 3 && is_letter(n - 3) {
        return format!("{}ves", &lower[..lower.len() - 2]);
    }
    if lower.ends_with('f') && n >= 2 && is_letter(n - 2) {
        return format!("{}ves", &lower[..lower.len() - 1]);
    }

    // baby -> babies, but day -> days
    if lower.ends_with('y') && n >= 2 {
        let before = chars[n - 2];
        if before.is_ascii_lowercase() && !"aeiou".contains(before) {
            return format!("{}ies", &lower[..lower.len() - 1]);
        }
    }

    if lower.ends_with(['s', 'x', 'z']) || lower.ends_with("ch") || lower.ends_with("sh") {
        return format!("{}es", lower);
    }

    if lower.ends_with('o') && O_ES_EXCEPTIONS.contains(&lower) {
        return format!("{}es", lower);
    }

    format!("{}s", lower)
}
