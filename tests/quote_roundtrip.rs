use regsub_rs::{Regex, Span, quote};

#[test]
fn quoted_text_matches_itself_literally() {
    let inputs = [
        "Yeah [ \t",
        "1+1=2?",
        "(a|b)*.{3}",
        "c:\\path\\to\\file",
        "^start and end$",
        "# not a comment\n\r",
        "tab\tvtab\x0Bff\x0C",
        "naïve-café",
    ];
    for text in inputs {
        let mut re = Regex::new(&quote(text)).expect("quoted text should compile");
        let haystack = format!("pre{text}post");
        let spans = re
            .find_all_str_index(&haystack, None)
            .expect("search should succeed");
        assert_eq!(spans, vec![Span::new(3, 3 + text.len())], "quoting {text:?}");
    }
}

#[test]
fn quoted_text_does_not_match_lookalikes() {
    let mut re = Regex::new(&quote("a.c")).expect("quoted text should compile");
    assert!(!re.is_match_str("abc").expect("search should succeed"));
    assert!(re.is_match_str("a.c").expect("search should succeed"));
}
