use crate::capture::{CaptureSlots, MatchResult, NameMap, Span};
use crate::engine::lock::with_engine_lock;
use crate::engine::{Engine, EngineError, Region};
use crate::errors::{RegexError, RegexResult};
use crate::options::{RegexConfig, SearchOptions};

// Handed to the engine in place of an empty buffer.
const EMPTY_SENTINEL: [u8; 1] = [0];

/// One compiled pattern plus the scratch state reused by its searches.
#[derive(Debug)]
pub struct CompiledPattern<E: Engine> {
    pattern: Box<str>,
    engine: Option<E>,
    region: Region,
    names: NameMap,
    group_count: usize,
    search_options: SearchOptions,
}

impl<E: Engine> CompiledPattern<E> {
    #[tracing::instrument(level = "trace", skip(pattern, config), fields(pattern=%pattern))]
    pub fn compile(pattern: &str, config: &RegexConfig) -> RegexResult<Self> {
        config.validate()?;

        let compiled = with_engine_lock(|| {
            E::compile(pattern, config.compile_options, &config.limits)
        });
        let engine = match compiled {
            Ok(engine) => engine,
            Err(err) => {
                tracing::warn!(pattern = %pattern, error = %err, "pattern compilation failed");
                return Err(err.into());
            }
        };

        let group_count = engine.group_count();
        let names = NameMap::from_pairs(engine.group_names());
        tracing::debug!(
            pattern = %pattern,
            groups = group_count as u64,
            named = names.len() as u64,
            "pattern compiled"
        );

        Ok(Self {
            pattern: pattern.into(),
            engine: Some(engine),
            region: Region::with_slots(group_count + 1),
            names,
            group_count,
            search_options: config.search_options,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn names(&self) -> &NameMap {
        &self.names
    }

    pub fn name_to_group(&self, name: &str) -> Option<usize> {
        self.names.get(name)
    }

    pub fn has_named_groups(&self) -> bool {
        !self.names.is_empty()
    }

    pub fn is_released(&self) -> bool {
        self.engine.is_none()
    }

    pub fn release(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            with_engine_lock(|| {
                engine.release();
                drop(engine);
            });
            tracing::event!(tracing::Level::TRACE, operation = "release", pattern = %self.pattern);
        }
    }

    /// Attempts one match at or after `offset`.
    ///
    /// Engine faults are returned as errors and are never folded into
    /// `Ok(None)`.
    pub fn attempt(&mut self, buffer: &[u8], offset: usize) -> RegexResult<Option<MatchResult>> {
        if offset > buffer.len() {
            return Err(EngineError::OffsetOutOfRange {
                offset,
                length: buffer.len(),
            }
            .into());
        }

        let Some(engine) = self.engine.as_mut() else {
            return Err(EngineError::Released {
                pattern: self.pattern.to_string(),
            }
            .into());
        };

        let length = buffer.len();
        let haystack: &[u8] = if buffer.is_empty() {
            &EMPTY_SENTINEL
        } else {
            buffer
        };

        let found = engine.search(
            haystack,
            length,
            offset,
            self.search_options,
            &mut self.region,
        )?;
        let Some(slots) = found else {
            return Ok(None);
        };

        translate_region(&self.region, slots, length, offset).map(Some)
    }
}

impl<E: Engine> Drop for CompiledPattern<E> {
    fn drop(&mut self) {
        self.release();
    }
}

fn translate_region(
    region: &Region,
    slots: usize,
    length: usize,
    offset: usize,
) -> RegexResult<MatchResult> {
    if slots == 0 {
        tracing::error!(offset = offset as u64, "engine reported a match without captures");
        return Err(RegexError::InvariantViolation {
            offset,
            detail: "match reported with zero capture slots",
        });
    }

    let mut captures = CaptureSlots::with_capacity(slots);
    for slot in 0..slots {
        let (beg, end) = region.get(slot);
        captures.push(to_span(beg, end, length));
    }

    let Some(whole) = captures[0] else {
        tracing::error!(offset = offset as u64, "engine reported a match without a whole-match span");
        return Err(RegexError::InvariantViolation {
            offset,
            detail: "whole-match span missing or out of bounds",
        });
    };
    // Find-all progress depends on this.
    if whole.start < offset {
        tracing::error!(
            offset = offset as u64,
            start = whole.start as u64,
            "engine reported a match before the search offset"
        );
        return Err(RegexError::InvariantViolation {
            offset,
            detail: "whole match starts before the search offset",
        });
    }

    Ok(MatchResult::from_slots(captures))
}

fn to_span(beg: isize, end: isize, length: usize) -> Option<Span> {
    let start = usize::try_from(beg).ok()?;
    let end = usize::try_from(end).ok()?;
    if end < start || end > length {
        return None;
    }
    Some(Span::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RegexEngine, UNSET};

    fn compile(pattern: &str) -> CompiledPattern<RegexEngine> {
        CompiledPattern::compile(pattern, &RegexConfig::default()).expect("pattern should compile")
    }

    #[test]
    fn translates_unset_and_inverted_slots() {
        let mut region = Region::with_slots(4);
        region.set(0, 1, 4);
        region.set(1, UNSET, UNSET);
        region.set(2, 3, 2);
        region.set(3, 2, 9);
        let m = translate_region(&region, 4, 5, 0).expect("translation should succeed");
        assert_eq!(m.span(), Span::new(1, 4));
        assert_eq!(m.get(1), None);
        assert_eq!(m.get(2), None);
        assert_eq!(m.get(3), None);
    }

    #[test]
    fn match_before_offset_is_an_invariant_violation() {
        let mut region = Region::with_slots(1);
        region.set(0, 0, 1);
        let err = translate_region(&region, 1, 3, 1).expect_err("match behind the offset should fail");
        match err {
            RegexError::InvariantViolation { offset, .. } => assert_eq!(offset, 1),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(translate_region(&region, 1, 3, 0).is_ok());
    }

    #[test]
    fn zero_slots_is_an_invariant_violation() {
        let region = Region::default();
        let err = translate_region(&region, 0, 3, 2).expect_err("zero slots should fail");
        match err {
            RegexError::InvariantViolation { offset, .. } => assert_eq!(offset, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_buffer_uses_sentinel() {
        let mut pattern = compile("x*");
        let m = pattern
            .attempt(b"", 0)
            .expect("search should not fail")
            .expect("empty pattern should match empty buffer");
        assert_eq!(m.span(), Span::new(0, 0));

        let mut pattern = compile("\\x00");
        let found = pattern.attempt(b"", 0).expect("search should not fail");
        assert!(found.is_none(), "sentinel byte must not be visible");
    }

    #[test]
    fn offset_past_end_is_an_engine_error() {
        let mut pattern = compile("a");
        let err = pattern.attempt(b"a", 2).expect_err("offset past end should fail");
        match err {
            RegexError::Engine(EngineError::OffsetOutOfRange { offset, length }) => {
                assert_eq!((offset, length), (2, 1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn release_is_idempotent() {
        let mut pattern = compile("a");
        assert!(!pattern.is_released());
        pattern.release();
        pattern.release();
        assert!(pattern.is_released());
        let err = pattern.attempt(b"a", 0).expect_err("released pattern should fail");
        match err {
            RegexError::Engine(EngineError::Released { pattern }) => assert_eq!(pattern, "a"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn exposes_group_metadata() {
        let pattern = compile("(?<greeting>hello) (world)");
        assert_eq!(pattern.group_count(), 2);
        assert!(pattern.has_named_groups());
        assert_eq!(pattern.name_to_group("greeting"), Some(1));
        assert_eq!(pattern.name_to_group("missing"), None);
        assert_eq!(pattern.as_str(), "(?<greeting>hello) (world)");
    }
}
