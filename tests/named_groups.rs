use regsub_rs::{CompileOptions, Regex, RegexError, TemplateError};

const GREETING: &str = "(?<greeting>hello) (?<name>\\w+)";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern should compile")
}

#[test]
fn swaps_named_groups_in_template() {
    let mut re = compile(GREETING);
    let out = re
        .replace_all_str("hello world", "\\k<name> \\k<greeting>")
        .expect("replace should succeed");
    assert_eq!(out, "world hello");
}

#[test]
fn exposes_name_metadata() {
    let re = compile(GREETING);
    assert_eq!(re.group_count(), 2);
    assert_eq!(re.name_to_group("greeting"), Some(1));
    assert_eq!(re.name_to_group("name"), Some(2));
    assert_eq!(re.name_to_group("nope"), None);
    assert_eq!(re.group_names().names(), vec![("greeting", 1), ("name", 2)]);
}

#[test]
fn numbered_references_are_empty_when_names_exist() {
    let mut re = compile(GREETING);
    let out = re
        .replace_all_str("say hello world!", "<\\1\\2>")
        .expect("replace should succeed");
    assert_eq!(out, "say <>!");
}

#[test]
fn unknown_name_aborts_the_call() {
    let mut re = compile(GREETING);
    let err = re
        .replace_all_str("hello world", "\\k<planet>")
        .expect_err("unknown name should fail");
    match err {
        RegexError::Template(TemplateError::UnknownGroupName { name }) => {
            assert_eq!(name, "planet");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unterminated_name_aborts_the_call() {
    let mut re = compile(GREETING);
    let err = re
        .replace_all_str("hello world", "\\k<name")
        .expect_err("unterminated name should fail");
    match err {
        RegexError::Template(TemplateError::UnterminatedName { position }) => {
            assert_eq!(position, 0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn collects_named_captures_for_every_match() {
    let mut re = compile(GREETING);
    let all = re
        .named_captures_all("hello world, hello there", None)
        .expect("search should succeed");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].get("greeting").map(String::as_str), Some("hello"));
    assert_eq!(all[0].get("name").map(String::as_str), Some("world"));
    assert_eq!(all[1].get("name").map(String::as_str), Some("there"));

    let limited = re
        .named_captures_all("hello world, hello there", Some(1))
        .expect("search should succeed");
    assert_eq!(limited.len(), 1);
}

#[test]
fn absent_named_group_maps_to_empty() {
    let mut re = compile("(?<word>[a-z]+)|(?<num>[0-9]+)");
    let all = re
        .named_captures_all("ab 12", None)
        .expect("search should succeed");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].get("num").map(String::as_str), Some(""));
    assert_eq!(all[1].get("word").map(String::as_str), Some(""));
    assert_eq!(all[1].get("num").map(String::as_str), Some("12"));
}

#[test]
fn rich_callback_resolves_names() {
    let mut re = compile(GREETING);
    let out = re
        .replace_all_with("hello world and hello moon", |sub| {
            format!(
                "{}, {}",
                sub.name("name").unwrap_or_default().to_uppercase(),
                sub.name("greeting").unwrap_or_default()
            )
        })
        .expect("replace should succeed");
    assert_eq!(out, "WORLD, hello and MOON, hello");
}

#[test]
fn named_template_on_bytes() {
    let mut re = compile("(?<key>\\w+)=(?<value>\\w+)");
    let out = re
        .replace_all(b"a=1;b=2", b"\\k<value>=\\k<key>")
        .expect("replace should succeed");
    assert_eq!(out.as_ref(), b"1=a;2=b");
}

#[test]
fn named_captures_are_empty_without_named_groups() {
    let mut re = compile("(a)(b)?");
    let all = re
        .named_captures_all("ab a", None)
        .expect("search should succeed");
    assert!(all.is_empty());
}

#[test]
fn must_compile_with_options_applies_flags() {
    let mut re = Regex::must_compile_with_options("(?<w>HELLO)", CompileOptions::IGNORE_CASE);
    let out = re
        .replace_all_str("say hello", "<\\k<w>>")
        .expect("replace should succeed");
    assert_eq!(out, "say <hello>");
}

#[test]
#[should_panic(expected = "regex: compiling")]
fn must_compile_with_options_panics_on_bad_pattern() {
    let _ = Regex::must_compile_with_options("(", CompileOptions::EXTEND);
}
