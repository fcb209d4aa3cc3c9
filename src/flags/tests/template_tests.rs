use std::collections::HashMap;

use crate::flags::template::{identifier, parse_segment, render, Segment, Template, TemplateError};

fn values(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
    pairs.iter().map(|&(k, v)| (k, v.to_string())).collect()
}

#[test]
fn test_identifier() {
    assert_eq!(identifier("flags rest"), Ok((" rest", "flags")));
    assert_eq!(identifier("_a1-b"), Ok(("-b", "_a1")));
    assert!(identifier("1abc").is_err());
}

#[test]
fn test_parse_segment() {
    assert_eq!(parse_segment("$$x"), Ok(("x", Segment::Dollar)));
    assert_eq!(parse_segment("${a}b"), Ok(("b", Segment::Placeholder("a"))));
    assert_eq!(parse_segment("$a.b"), Ok((".b", Segment::Placeholder("a"))));
    assert_eq!(parse_segment("text $a"), Ok(("$a", Segment::Text("text "))));
}

#[test]
fn test_substitute_both_forms() {
    let out = render(
        "flags = [\n$flags\n]\ndb = '${database}'\n",
        &values(&[("flags", "    '-Wall',"), ("database", "/build/")]),
    )
    .unwrap();

    assert_eq!(out, "flags = [\n    '-Wall',\n]\ndb = '/build/'\n");
}

#[test]
fn test_dollar_escape() {
    let out = render("cost: $$5", &values(&[])).unwrap();
    assert_eq!(out, "cost: $5");
}

#[test]
fn test_braced_placeholder_next_to_identifier_chars() {
    let out = render("${database}compile_commands.json", &values(&[("database", "/b/")])).unwrap();
    assert_eq!(out, "/b/compile_commands.json");
}

#[test]
fn test_unknown_placeholder() {
    let result = render("$flags $other", &values(&[("flags", "")]));
    assert_eq!(
        result,
        Err(TemplateError::UnknownPlaceholder("other".to_string()))
    );
}

#[test]
fn test_invalid_placeholder_position() {
    assert_eq!(
        Template::parse("ok\nab $1"),
        Err(TemplateError::InvalidPlaceholder { line: 2, column: 4 })
    );
    assert_eq!(
        Template::parse("${unclosed"),
        Err(TemplateError::InvalidPlaceholder { line: 1, column: 1 })
    );
    assert_eq!(
        Template::parse("trailing $"),
        Err(TemplateError::InvalidPlaceholder { line: 1, column: 10 })
    );
}

#[test]
fn test_placeholders() {
    let template = Template::parse("$a ${b} $$c $a").unwrap();
    let names: Vec<&str> = template.placeholders().collect();
    assert_eq!(names, ["a", "b", "a"]);
}

#[test]
fn test_text_without_placeholders() {
    let source = "import os\n\ndef Settings(**kwargs):\n    return {}\n";
    assert_eq!(render(source, &values(&[])).unwrap(), source);
}
