use super::{CompileError, Engine, EngineError, Region};
use crate::options::{CompileOptions, EngineLimits, SearchOptions};
use regex::bytes::{CaptureLocations, Regex, RegexBuilder};

/// Default engine backed by `regex::bytes::Regex`.
#[derive(Debug, Clone)]
pub struct RegexEngine {
    regex: Regex,
    locations: CaptureLocations,
}

impl RegexEngine {
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

fn builder_for(pattern: &str, options: CompileOptions, limits: &EngineLimits) -> RegexBuilder {
    let mut builder = RegexBuilder::new(pattern);
    builder
        .case_insensitive(options.contains(CompileOptions::IGNORE_CASE))
        .ignore_whitespace(options.contains(CompileOptions::EXTEND))
        .dot_matches_new_line(options.contains(CompileOptions::MULTILINE))
        .multi_line(!options.contains(CompileOptions::SINGLELINE))
        .size_limit(limits.size_limit)
        .dfa_size_limit(limits.dfa_size_limit)
        .nest_limit(limits.nest_limit);
    builder
}

impl Engine for RegexEngine {
    fn compile(
        pattern: &str,
        options: CompileOptions,
        limits: &EngineLimits,
    ) -> Result<Self, CompileError> {
        let regex = builder_for(pattern, options, limits)
            .build()
            .map_err(|err| match err {
                regex::Error::CompiledTooBig(limit) => CompileError::TooLarge {
                    pattern: pattern.to_string(),
                    limit,
                },
                other => CompileError::InvalidPattern {
                    pattern: pattern.to_string(),
                    diagnostic: other.to_string(),
                },
            })?;
        let locations = regex.capture_locations();
        Ok(Self { regex, locations })
    }

    fn group_count(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }

    fn group_names(&self) -> Vec<(String, usize)> {
        self.regex
            .capture_names()
            .enumerate()
            .filter_map(|(index, name)| name.map(|name| (name.to_string(), index)))
            .collect()
    }

    fn search(
        &mut self,
        buffer: &[u8],
        length: usize,
        start: usize,
        options: SearchOptions,
        region: &mut Region,
    ) -> Result<Option<usize>, EngineError> {
        if length > buffer.len() {
            return Err(EngineError::LengthOutOfRange {
                length,
                capacity: buffer.len(),
            });
        }
        if start > length {
            return Err(EngineError::OffsetOutOfRange {
                offset: start,
                length,
            });
        }

        let haystack = &buffer[..length];
        let Some(found) = self
            .regex
            .captures_read_at(&mut self.locations, haystack, start)
        else {
            return Ok(None);
        };

        // Leftmost semantics: an anchored match exists iff the leftmost one starts here.
        if options.contains(SearchOptions::ANCHORED) && found.start() != start {
            return Ok(None);
        }

        let slots = self.locations.len();
        if region.len() == slots {
            region.clear();
        } else {
            region.resize(slots);
        }
        for slot in 0..slots {
            if let Some((beg, end)) = self.locations.get(slot) {
                region.set(slot, beg as isize, end as isize);
            }
        }

        Ok(Some(slots))
    }
}
