//! The seam between this crate and the regex engine that does the actual
//! matching.
//!
//! An [`Engine`] compiles one pattern and answers a single question per call:
//! is there a match at or after `start` within `buffer[..length]`, and where
//! do its groups lie. Everything else (iteration, projection, substitution)
//! is built on top of that in the rest of the crate.

mod error;
pub(crate) mod lock;
mod regex_engine;

pub use error::{CompileError, EngineError};
pub use regex_engine::RegexEngine;

use crate::options::{CompileOptions, EngineLimits, SearchOptions};
use smallvec::SmallVec;

pub const UNSET: isize = -1;

/// Raw per-group offsets written by an engine during one search.
#[derive(Debug, Clone, Default)]
pub struct Region {
    beg: SmallVec<[isize; 8]>,
    end: SmallVec<[isize; 8]>,
}

impl Region {
    pub fn with_slots(slots: usize) -> Self {
        let mut region = Self::default();
        region.resize(slots);
        region
    }

    pub fn resize(&mut self, slots: usize) {
        self.beg.clear();
        self.end.clear();
        self.beg.resize(slots, UNSET);
        self.end.resize(slots, UNSET);
    }

    pub fn clear(&mut self) {
        self.beg.iter_mut().for_each(|v| *v = UNSET);
        self.end.iter_mut().for_each(|v| *v = UNSET);
    }

    pub fn len(&self) -> usize {
        self.beg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beg.is_empty()
    }

    pub fn set(&mut self, slot: usize, beg: isize, end: isize) {
        if slot >= self.beg.len() {
            self.beg.resize(slot + 1, UNSET);
            self.end.resize(slot + 1, UNSET);
        }
        self.beg[slot] = beg;
        self.end[slot] = end;
    }

    pub fn get(&self, slot: usize) -> (isize, isize) {
        match (self.beg.get(slot), self.end.get(slot)) {
            (Some(&b), Some(&e)) => (b, e),
            _ => (UNSET, UNSET),
        }
    }
}

/// A compiled pattern as seen through the matching primitive.
pub trait Engine: Sized + Send {
    fn compile(
        pattern: &str,
        options: CompileOptions,
        limits: &EngineLimits,
    ) -> Result<Self, CompileError>;

    fn group_count(&self) -> usize;

    /// `(name, group index)` for every named group. Indices are never 0.
    fn group_names(&self) -> Vec<(String, usize)>;

    /// Attempts one match in `buffer[..length]` starting at `start`.
    ///
    /// Returns `Ok(Some(n))` when a match was found and `n` region slots were
    /// written, `Ok(None)` when there is no match. The whole match must not
    /// start before `start`.
    fn search(
        &mut self,
        buffer: &[u8],
        length: usize,
        start: usize,
        options: SearchOptions,
        region: &mut Region,
    ) -> Result<Option<usize>, EngineError>;

    fn release(&mut self) {}
}
