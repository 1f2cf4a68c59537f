//! Shapes a [`MatchResult`] or [`MatchSet`] into what callers ask for.
//!
//! Everything here is total: given captures produced for `haystack`, no
//! function fails. Index lists leave out groups that did not participate,
//! so callers must not assume `2 * (group_count + 1)` entries; slice lists
//! keep one entry per group and use an empty slice for absent groups.

use crate::capture::{MatchResult, MatchSet, NameMap, Span};
use std::collections::HashMap;

#[inline]
pub fn slice<'h>(haystack: &'h [u8], span: Span) -> &'h [u8] {
    haystack.get(span.range()).unwrap_or_default()
}

#[inline]
pub fn slice_str(haystack: &str, span: Span) -> &str {
    haystack.get(span.range()).unwrap_or_default()
}

pub fn match_span(m: &MatchResult) -> Span {
    m.span()
}

pub fn match_bytes<'h>(haystack: &'h [u8], m: &MatchResult) -> &'h [u8] {
    slice(haystack, m.span())
}

pub fn match_str<'h>(haystack: &'h str, m: &MatchResult) -> &'h str {
    slice_str(haystack, m.span())
}

pub fn submatch_indices(m: &MatchResult) -> Vec<usize> {
    let mut out = Vec::with_capacity(m.len() * 2);
    for span in m.iter().flatten() {
        out.push(span.start);
        out.push(span.end);
    }
    out
}

pub fn submatch_bytes<'h>(haystack: &'h [u8], m: &MatchResult) -> Vec<&'h [u8]> {
    m.iter()
        .map(|span| span.map_or(&b""[..], |span| slice(haystack, span)))
        .collect()
}

pub fn submatch_strs<'h>(haystack: &'h str, m: &MatchResult) -> Vec<&'h str> {
    m.iter()
        .map(|span| span.map_or("", |span| slice_str(haystack, span)))
        .collect()
}

pub fn all_spans(set: &MatchSet) -> Vec<Span> {
    set.iter().map(match_span).collect()
}

pub fn all_bytes<'h>(haystack: &'h [u8], set: &MatchSet) -> Vec<&'h [u8]> {
    set.iter().map(|m| match_bytes(haystack, m)).collect()
}

pub fn all_strs<'h>(haystack: &'h str, set: &MatchSet) -> Vec<&'h str> {
    set.iter().map(|m| match_str(haystack, m)).collect()
}

pub fn all_submatch_indices(set: &MatchSet) -> Vec<Vec<usize>> {
    set.iter().map(submatch_indices).collect()
}

pub fn all_submatch_bytes<'h>(haystack: &'h [u8], set: &MatchSet) -> Vec<Vec<&'h [u8]>> {
    set.iter().map(|m| submatch_bytes(haystack, m)).collect()
}

pub fn all_submatch_strs<'h>(haystack: &'h str, set: &MatchSet) -> Vec<Vec<&'h str>> {
    set.iter().map(|m| submatch_strs(haystack, m)).collect()
}

pub fn named_strs<'n, 'h>(
    haystack: &'h str,
    m: &MatchResult,
    names: &'n NameMap,
) -> HashMap<&'n str, &'h str> {
    names
        .names()
        .into_iter()
        .map(|(name, index)| {
            let value = m.get(index).map_or("", |span| slice_str(haystack, span));
            (name, value)
        })
        .collect()
}
