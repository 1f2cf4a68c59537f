use crate::capture::{MatchResult, MatchSet, NameMap, Span};
use crate::compiled::CompiledPattern;
use crate::engine::{Engine, RegexEngine};
use crate::errors::RegexResult;
use crate::find::{Matches, find_all};
use crate::options::{CompileOptions, RegexConfig};
use crate::project;
use crate::reader::buffer_reader;
use crate::replace::{self, Submatches};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;

/// A compiled pattern with the match, find and replace family on top.
///
/// Searches need `&mut self`: the instance reuses its capture buffers
/// between calls. Use one instance per thread, or wrap it in
/// [`SharedRegex`](crate::SharedRegex).
pub struct Regex<E: Engine = RegexEngine> {
    compiled: CompiledPattern<E>,
    match_capacity_hint: usize,
}

impl Regex {
    pub fn new(pattern: &str) -> RegexResult<Self> {
        Self::compile_with(pattern, &RegexConfig::default())
    }

    pub fn with_options(pattern: &str, options: CompileOptions) -> RegexResult<Self> {
        Self::compile_with(pattern, &RegexConfig::with_options(options))
    }

    pub fn with_config(pattern: &str, config: &RegexConfig) -> RegexResult<Self> {
        Self::compile_with(pattern, config)
    }

    /// # Panics
    ///
    /// Panics when `pattern` does not compile.
    pub fn must_compile(pattern: &str) -> Self {
        Self::must_compile_with_options(pattern, CompileOptions::DEFAULT)
    }

    /// # Panics
    ///
    /// Panics when `pattern` does not compile with `options`.
    pub fn must_compile_with_options(pattern: &str, options: CompileOptions) -> Self {
        match Self::with_options(pattern, options) {
            Ok(regex) => regex,
            Err(err) => panic!("regex: compiling {pattern:?}: {err}"),
        }
    }
}

impl<E: Engine> Regex<E> {
    pub fn compile_with(pattern: &str, config: &RegexConfig) -> RegexResult<Self> {
        let compiled = CompiledPattern::compile(pattern, config)?;
        Ok(Self {
            compiled,
            match_capacity_hint: config.match_capacity_hint,
        })
    }

    pub fn as_str(&self) -> &str {
        self.compiled.as_str()
    }

    pub fn group_count(&self) -> usize {
        self.compiled.group_count()
    }

    pub fn group_names(&self) -> &NameMap {
        self.compiled.names()
    }

    pub fn name_to_group(&self, name: &str) -> Option<usize> {
        self.compiled.name_to_group(name)
    }

    /// Releases the engine resources early. Safe to call more than once;
    /// searches afterwards fail with `EngineError::Released`.
    pub fn free(&mut self) {
        self.compiled.release();
    }

    pub fn compiled(&mut self) -> &mut CompiledPattern<E> {
        &mut self.compiled
    }

    // -- single match ----------------------------------------------------

    pub fn is_match(&mut self, haystack: &[u8]) -> RegexResult<bool> {
        Ok(self.compiled.attempt(haystack, 0)?.is_some())
    }

    pub fn is_match_str(&mut self, haystack: &str) -> RegexResult<bool> {
        self.is_match(haystack.as_bytes())
    }

    pub fn captures(&mut self, haystack: &[u8]) -> RegexResult<Option<MatchResult>> {
        self.compiled.attempt(haystack, 0)
    }

    pub fn find_index(&mut self, haystack: &[u8]) -> RegexResult<Option<Span>> {
        Ok(self.captures(haystack)?.map(|m| project::match_span(&m)))
    }

    pub fn find<'h>(&mut self, haystack: &'h [u8]) -> RegexResult<Option<&'h [u8]>> {
        Ok(self
            .captures(haystack)?
            .map(|m| project::match_bytes(haystack, &m)))
    }

    pub fn find_str<'h>(&mut self, haystack: &'h str) -> RegexResult<Option<&'h str>> {
        Ok(self
            .captures(haystack.as_bytes())?
            .map(|m| project::match_str(haystack, &m)))
    }

    pub fn find_str_index(&mut self, haystack: &str) -> RegexResult<Option<Span>> {
        self.find_index(haystack.as_bytes())
    }

    pub fn find_submatch_index(&mut self, haystack: &[u8]) -> RegexResult<Option<Vec<usize>>> {
        Ok(self
            .captures(haystack)?
            .map(|m| project::submatch_indices(&m)))
    }

    pub fn find_submatch<'h>(&mut self, haystack: &'h [u8]) -> RegexResult<Option<Vec<&'h [u8]>>> {
        Ok(self
            .captures(haystack)?
            .map(|m| project::submatch_bytes(haystack, &m)))
    }

    pub fn find_str_submatch<'h>(
        &mut self,
        haystack: &'h str,
    ) -> RegexResult<Option<Vec<&'h str>>> {
        Ok(self
            .captures(haystack.as_bytes())?
            .map(|m| project::submatch_strs(haystack, &m)))
    }

    pub fn find_str_submatch_index(&mut self, haystack: &str) -> RegexResult<Option<Vec<usize>>> {
        self.find_submatch_index(haystack.as_bytes())
    }

    // -- all matches -----------------------------------------------------

    pub fn matches<'r, 'h>(&'r mut self, haystack: &'h [u8]) -> Matches<'r, 'h, E> {
        Matches::new(&mut self.compiled, haystack, None)
    }

    pub fn captures_all(&mut self, haystack: &[u8], limit: Option<usize>) -> RegexResult<MatchSet> {
        find_all(&mut self.compiled, haystack, limit, self.match_capacity_hint)
    }

    pub fn find_all_index(&mut self, haystack: &[u8], limit: Option<usize>) -> RegexResult<Vec<Span>> {
        let set = self.captures_all(haystack, limit)?;
        Ok(project::all_spans(&set))
    }

    pub fn find_all<'h>(
        &mut self,
        haystack: &'h [u8],
        limit: Option<usize>,
    ) -> RegexResult<Vec<&'h [u8]>> {
        let set = self.captures_all(haystack, limit)?;
        Ok(project::all_bytes(haystack, &set))
    }

    pub fn find_all_str<'h>(
        &mut self,
        haystack: &'h str,
        limit: Option<usize>,
    ) -> RegexResult<Vec<&'h str>> {
        let set = self.captures_all(haystack.as_bytes(), limit)?;
        Ok(project::all_strs(haystack, &set))
    }

    pub fn find_all_str_index(
        &mut self,
        haystack: &str,
        limit: Option<usize>,
    ) -> RegexResult<Vec<Span>> {
        self.find_all_index(haystack.as_bytes(), limit)
    }

    pub fn find_all_submatch_index(
        &mut self,
        haystack: &[u8],
        limit: Option<usize>,
    ) -> RegexResult<Vec<Vec<usize>>> {
        let set = self.captures_all(haystack, limit)?;
        Ok(project::all_submatch_indices(&set))
    }

    pub fn find_all_submatch<'h>(
        &mut self,
        haystack: &'h [u8],
        limit: Option<usize>,
    ) -> RegexResult<Vec<Vec<&'h [u8]>>> {
        let set = self.captures_all(haystack, limit)?;
        Ok(project::all_submatch_bytes(haystack, &set))
    }

    pub fn find_all_str_submatch<'h>(
        &mut self,
        haystack: &'h str,
        limit: Option<usize>,
    ) -> RegexResult<Vec<Vec<&'h str>>> {
        let set = self.captures_all(haystack.as_bytes(), limit)?;
        Ok(project::all_submatch_strs(haystack, &set))
    }

    pub fn find_all_str_submatch_index(
        &mut self,
        haystack: &str,
        limit: Option<usize>,
    ) -> RegexResult<Vec<Vec<usize>>> {
        self.find_all_submatch_index(haystack.as_bytes(), limit)
    }

    /// Named groups of every match, in match order. Empty when the pattern
    /// has no named groups.
    pub fn named_captures_all(
        &mut self,
        haystack: &str,
        limit: Option<usize>,
    ) -> RegexResult<Vec<HashMap<String, String>>> {
        if self.compiled.names().is_empty() {
            return Ok(Vec::new());
        }
        let set = self.captures_all(haystack.as_bytes(), limit)?;
        let names = self.compiled.names();
        Ok(set
            .iter()
            .map(|m| {
                project::named_strs(haystack, m, names)
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect()
            })
            .collect())
    }

    // -- replacement -----------------------------------------------------

    /// Replaces every match with `template`, expanding `\1`-`\9` and
    /// `\k<name>`.
    pub fn replace_all<'h>(&mut self, src: &'h [u8], template: &[u8]) -> RegexResult<Cow<'h, [u8]>> {
        replace::replace_all_template(&mut self.compiled, src, template, self.match_capacity_hint)
    }

    pub fn replace_all_str<'h>(&mut self, src: &'h str, template: &str) -> RegexResult<Cow<'h, str>> {
        let replaced = self.replace_all(src.as_bytes(), template.as_bytes())?;
        Ok(replace::into_str(src, replaced))
    }

    pub fn replace_all_func<'h, F, R>(&mut self, src: &'h [u8], f: F) -> RegexResult<Cow<'h, [u8]>>
    where
        F: FnMut(&[u8]) -> R,
        R: AsRef<[u8]>,
    {
        replace::replace_all_func(&mut self.compiled, src, self.match_capacity_hint, f)
    }

    pub fn replace_all_str_func<'h, F, R>(&mut self, src: &'h str, mut f: F) -> RegexResult<Cow<'h, str>>
    where
        F: FnMut(&str) -> R,
        R: AsRef<str>,
    {
        self.replace_all_with(src, |sub| f(sub.whole()))
    }

    pub fn replace_all_with<'h, F, R>(&mut self, src: &'h str, f: F) -> RegexResult<Cow<'h, str>>
    where
        F: FnMut(&Submatches<'_, 'h>) -> R,
        R: AsRef<str>,
    {
        replace::replace_all_with(&mut self.compiled, src, self.match_capacity_hint, f)
    }

    // -- reader input ----------------------------------------------------

    pub fn is_match_reader<R: Read>(&mut self, reader: R) -> RegexResult<bool> {
        let buffer = buffer_reader(reader)?;
        self.is_match(&buffer)
    }

    pub fn find_reader_index<R: Read>(&mut self, reader: R) -> RegexResult<Option<Span>> {
        let buffer = buffer_reader(reader)?;
        self.find_index(&buffer)
    }

    pub fn find_reader_submatch_index<R: Read>(
        &mut self,
        reader: R,
    ) -> RegexResult<Option<Vec<usize>>> {
        let buffer = buffer_reader(reader)?;
        self.find_submatch_index(&buffer)
    }
}

impl<E: Engine> fmt::Display for Regex<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<E: Engine> fmt::Debug for Regex<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regex")
            .field("pattern", &self.as_str())
            .field("groups", &self.group_count())
            .finish()
    }
}

pub fn is_match(pattern: &str, haystack: &str) -> RegexResult<bool> {
    Regex::new(pattern)?.is_match_str(haystack)
}
