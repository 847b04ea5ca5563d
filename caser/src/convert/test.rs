/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::*;
use crate::Style;

#[test]
fn normalize_to_snake() {
    assert_eq!(pascal_to_snake_case("SomeStringHere"), "some_string_here");
    assert_eq!(pascal_to_snake_case("HTTPServer"), "http_server");
    assert_eq!(pascal_to_snake_case("Version2Update"), "version2_update");
    assert_eq!(camel_to_snake_case("someStringHere"), "some_string_here");
    assert_eq!(kebab_to_snake_case("Some-Kebab"), "some_kebab");
    assert_eq!(space_to_snake_case("Some Space"), "some_space");
    assert_eq!(to_snake(Style::Snake, "Keep_AS_is"), "Keep_AS_is");
}

#[test]
fn capital_runs_join_the_preceding_word() {
    /* Only the last capital of a run starts a new word. */
    assert_eq!(pascal_to_snake_case("ParseXMLDocument"), "parsexml_document");
    assert_eq!(camel_to_snake_case("getHTTPResponse"), "gethttp_response");
}

#[test]
fn last_character_never_starts_a_word() {
    assert_eq!(camel_to_snake_case("someStringX"), "some_stringx");
}

#[test]
fn expand_from_snake() {
    assert_eq!(snake_to_pascal_case("some_string_here"), "SomeStringHere");
    assert_eq!(snake_to_camel_case("some_string_here"), "someStringHere");
    assert_eq!(snake_to_kebab_case("some_string_here"), "some-string-here");
    assert_eq!(snake_to_space_case("some_string_here"), "some string here");
    assert_eq!(from_snake(Style::Snake, "some_string"), "some_string");
}

#[test]
fn stray_underscores() {
    assert_eq!(snake_to_pascal_case("_leading"), "Leading");
    assert_eq!(snake_to_pascal_case("a__b"), "AB");
    assert_eq!(snake_to_camel_case("trailing_"), "trailing");
    assert_eq!(snake_to_kebab_case("_both_"), "both");
    assert_eq!(snake_to_space_case("trailing_"), "trailing ");
}

#[test]
fn camel_keeps_leading_capital() {
    assert_eq!(snake_to_camel_case("Hello_world"), "HelloWorld");
    assert_eq!(to_camel_case("Hello").unwrap(), "Hello");
}

#[test]
fn empty_input() {
    for style in Style::ALL {
        assert_eq!(to_snake(style, ""), "");
        assert_eq!(from_snake(style, ""), "");
    }
}

#[test]
fn known_source() {
    assert_eq!(
        convert_from("some string", Style::Space, Style::Pascal),
        "SomeString"
    );
    /* Spaces left over from an unexpected source are dropped for
     * pascal and camel targets only. */
    assert_eq!(
        convert_from("some string", Style::Snake, Style::Camel),
        "somestring"
    );
    assert_eq!(
        convert_from("some string", Style::Snake, Style::Kebab),
        "some string"
    );
}

#[test]
fn case_folding() {
    assert_eq!(to_upper_kebab_case("SomeStringHere").unwrap(), "SOME-STRING-HERE");
    assert_eq!(to_lower_kebab_case("SOME_NAME").unwrap(), "some-name");
    assert_eq!(to_kebab_case("SOME_NAME").unwrap(), "SOME-NAME");
    assert_eq!(to_upper_space_case("someStringHere").unwrap(), "SOME STRING HERE");
    assert_eq!(to_lower_snake_case("Hello").unwrap(), "hello");
}
