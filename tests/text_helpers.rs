//! Word-level string helper tests.

use json_path_replacer::text::{
    camel_to_snake, capitalise, capitalize, pluralise, pluralize, snake_to_camel, truncate,
    truncate_default,
};

#[test]
fn truncate_keeps_short_strings() {
    assert_eq!(truncate_default("hello", 5), "hello");
    assert_eq!(truncate_default("", 0), "");
}

#[test]
fn truncate_appends_suffix() {
    assert_eq!(truncate_default("hello world", 8), "hello...");
    assert_eq!(truncate("hello world", 7, "~"), "hello ~");
}

#[test]
fn truncate_cuts_suffix_when_too_short() {
    assert_eq!(truncate("hello world", 2, "..."), "..");
    assert_eq!(truncate("hello world", 3, "..."), "...");
}

#[test]
fn truncate_counts_characters_not_bytes() {
    assert_eq!(truncate("\u{e9}\u{e9}\u{e9}\u{e9}", 3, "."), "\u{e9}\u{e9}.");
}

#[test]
fn capitalize_words() {
    assert_eq!(capitalize("hELLO"), "Hello");
    assert_eq!(capitalize("a"), "A");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalise("wORLD"), "World");
}

#[test]
fn camel_to_snake_conversions() {
    assert_eq!(camel_to_snake("camelCase"), "camel_case");
    assert_eq!(camel_to_snake("PascalCase"), "pascal_case");
    assert_eq!(camel_to_snake("parseHTTPResponse"), "parse_http_response");
    assert_eq!(camel_to_snake("version2Update"), "version2_update");
    assert_eq!(camel_to_snake("already_snake"), "already_snake");
}

#[test]
fn snake_to_camel_conversions() {
    assert_eq!(snake_to_camel("snake_case"), "snakeCase");
    assert_eq!(snake_to_camel("SNAKE_CASE"), "snakeCase");
    assert_eq!(snake_to_camel("multiple_word_name"), "multipleWordName");
    assert_eq!(snake_to_camel("plain"), "plain");
}

#[test]
fn pluralize_count_of_one_is_unchanged() {
    assert_eq!(pluralize("child", 1), "child");
    assert_eq!(pluralize("box", 1), "box");
}

#[test]
fn pluralize_irregular_and_uncountable() {
    assert_eq!(pluralize("person", 2), "people");
    assert_eq!(pluralize("child", 0), "children");
    assert_eq!(pluralize("criterion", 5), "criteria");
    assert_eq!(pluralize("sheep", 3), "sheep");
    assert_eq!(pluralize("Information", 3), "Information");
}

#[test]
fn pluralize_preserves_casing() {
    assert_eq!(pluralize("Person", 2), "People");
    assert_eq!(pluralize("BOX", 2), "BOXES");
    assert_eq!(pluralize("City", 2), "Cities");
}

#[test]
fn pluralize_by_suffix() {
    assert_eq!(pluralize("wife", 2), "wives");
    assert_eq!(pluralize("wolf", 2), "wolves");
    assert_eq!(pluralize("key", 2), "keys");
    assert_eq!(pluralize("bus", 2), "buses");
    assert_eq!(pluralize("dish", 2), "dishes");
    assert_eq!(pluralize("potato", 2), "potatoes");
    assert_eq!(pluralize("piano", 2), "pianos");
    assert_eq!(pluralise("fox", 2), "foxes");
}
