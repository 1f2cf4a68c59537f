use crate::capture::{MatchResult, MatchSet};
use crate::compiled::CompiledPattern;
use crate::engine::Engine;
use crate::errors::RegexResult;
use crate::utf8::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Searching { offset: usize },
    Done,
}

/// Iterator over successive non-overlapping matches in a buffer.
///
/// A zero-width match moves the next search forward by one code point, so
/// the iterator always terminates. Yields at most `limit` matches when a
/// limit is given, and stops after the first error.
pub struct Matches<'p, 'h, E: Engine> {
    pattern: &'p mut CompiledPattern<E>,
    haystack: &'h [u8],
    state: State,
    remaining: Option<usize>,
}

impl<'p, 'h, E: Engine> Matches<'p, 'h, E> {
    pub fn new(
        pattern: &'p mut CompiledPattern<E>,
        haystack: &'h [u8],
        limit: Option<usize>,
    ) -> Self {
        let state = if limit == Some(0) {
            State::Done
        } else {
            State::Searching { offset: 0 }
        };
        Self {
            pattern,
            haystack,
            state,
            remaining: limit,
        }
    }

    pub fn haystack(&self) -> &'h [u8] {
        self.haystack
    }

    fn advance(&mut self, m: &MatchResult) -> State {
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
            if *remaining == 0 {
                return State::Done;
            }
        }

        let len = self.haystack.len();
        let mut offset = m.end();
        if m.span().is_empty() {
            if offset >= len {
                return State::Done;
            }
            offset += char_width(&self.haystack[offset..]);
        }

        if offset <= len {
            State::Searching { offset }
        } else {
            State::Done
        }
    }
}

impl<E: Engine> Iterator for Matches<'_, '_, E> {
    type Item = RegexResult<MatchResult>;

    fn next(&mut self) -> Option<Self::Item> {
        let State::Searching { offset } = self.state else {
            return None;
        };

        match self.pattern.attempt(self.haystack, offset) {
            Ok(Some(m)) => {
                self.state = self.advance(&m);
                Some(Ok(m))
            }
            Ok(None) => {
                self.state = State::Done;
                None
            }
            Err(err) => {
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }
}

impl<E: Engine> std::iter::FusedIterator for Matches<'_, '_, E> {}

#[tracing::instrument(level = "trace", skip(pattern, haystack), fields(pattern=%pattern.as_str(), len=haystack.len() as u64))]
pub fn find_all<E: Engine>(
    pattern: &mut CompiledPattern<E>,
    haystack: &[u8],
    limit: Option<usize>,
    capacity_hint: usize,
) -> RegexResult<MatchSet> {
    let mut set = MatchSet::with_capacity(limit.map_or(capacity_hint, |n| n.min(capacity_hint)));
    for m in Matches::new(pattern, haystack, limit) {
        set.push(m?);
    }
    tracing::event!(tracing::Level::TRACE, operation = "find_all", matches = set.len() as u64);
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::Span;
    use crate::engine::RegexEngine;
    use crate::options::RegexConfig;

    fn compile(pattern: &str) -> CompiledPattern<RegexEngine> {
        CompiledPattern::compile(pattern, &RegexConfig::default()).expect("pattern should compile")
    }

    fn spans(set: &MatchSet) -> Vec<(usize, usize)> {
        set.iter().map(|m| (m.start(), m.end())).collect()
    }

    #[test]
    fn zero_width_matches_make_progress() {
        let mut pattern = compile("a*");
        let set = find_all(&mut pattern, b"bb", None, 4).expect("search should not fail");
        assert_eq!(spans(&set), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn empty_match_after_a_non_empty_one_is_kept() {
        let mut pattern = compile("a*");
        let set = find_all(&mut pattern, b"baaa", None, 4).expect("search should not fail");
        assert_eq!(spans(&set), vec![(0, 0), (1, 4), (4, 4)]);
    }

    #[test]
    fn zero_width_steps_over_whole_code_points() {
        let mut pattern = compile("x*");
        let set = find_all(&mut pattern, "é日".as_bytes(), None, 4).expect("search should not fail");
        assert_eq!(spans(&set), vec![(0, 0), (2, 2), (5, 5)]);
    }

    #[test]
    fn limit_bounds_the_number_of_matches() {
        let mut pattern = compile("a");
        let set = find_all(&mut pattern, b"aaaa", Some(2), 4).expect("search should not fail");
        assert_eq!(spans(&set), vec![(0, 1), (1, 2)]);

        let set = find_all(&mut pattern, b"aaaa", Some(0), 4).expect("search should not fail");
        assert!(set.is_empty());
    }

    #[test]
    fn iterator_is_lazy_and_fused() {
        let mut pattern = compile("b");
        let mut iter = Matches::new(&mut pattern, b"abab", None);
        let first = iter
            .next()
            .expect("first match")
            .expect("search should not fail");
        assert_eq!(first.span(), Span::new(1, 2));
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn empty_input_yields_single_empty_match() {
        let mut pattern = compile("a*");
        let set = find_all(&mut pattern, b"", None, 4).expect("search should not fail");
        assert_eq!(spans(&set), vec![(0, 0)]);

        let mut pattern = compile("a");
        let set = find_all(&mut pattern, b"", None, 4).expect("search should not fail");
        assert!(set.is_empty());
    }
}
