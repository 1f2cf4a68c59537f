use hashbrown::HashMap as FastHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Range<usize> {
        span.range()
    }
}

pub type CaptureSlots = SmallVec<[Option<Span>; 8]>;

/// Captures of one match: slot 0 is the whole match, slot `i` is group `i`.
///
/// `None` means the group did not take part in the match, which is not the
/// same thing as a present zero-width span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    slots: CaptureSlots,
}

impl MatchResult {
    /// Callers must ensure slot 0 is present.
    pub(crate) fn from_slots(slots: CaptureSlots) -> Self {
        debug_assert!(matches!(slots.first(), Some(Some(_))));
        Self { slots }
    }

    pub fn span(&self) -> Span {
        // from_slots guarantees the whole-match slot
        self.slots.first().copied().flatten().unwrap_or(Span::new(0, 0))
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.span().start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.span().end
    }

    pub fn get(&self, group: usize) -> Option<Span> {
        self.slots.get(group).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Span>> + '_ {
        self.slots.iter().copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    matches: Vec<MatchResult>,
}

impl MatchSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            matches: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, m: MatchResult) {
        debug_assert!(self.matches.last().is_none_or(|prev| prev.end() <= m.start()));
        self.matches.push(m);
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MatchResult> {
        self.matches.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
        self.matches.iter()
    }

    pub fn as_slice(&self) -> &[MatchResult] {
        &self.matches
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a MatchResult;
    type IntoIter = std::slice::Iter<'a, MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

impl IntoIterator for MatchSet {
    type Item = MatchResult;
    type IntoIter = std::vec::IntoIter<MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl FromIterator<MatchResult> for MatchSet {
    fn from_iter<I: IntoIterator<Item = MatchResult>>(iter: I) -> Self {
        let mut set = MatchSet::default();
        for m in iter {
            set.push(m);
        }
        set
    }
}

#[derive(Debug, Clone, Default)]
pub struct NameMap {
    by_name: FastHashMap<Box<str>, usize>,
}

impl NameMap {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, usize)>,
    {
        let by_name = pairs
            .into_iter()
            .filter(|(_, index)| *index != 0)
            .map(|(name, index)| (name.into_boxed_str(), index))
            .collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn names(&self) -> Vec<(&str, usize)> {
        let mut names: Vec<(&str, usize)> = self
            .by_name
            .iter()
            .map(|(name, index)| (name.as_ref(), *index))
            .collect();
        names.sort_by_key(|(_, index)| *index);
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn absent_groups_differ_from_zero_width() {
        let m = MatchResult::from_slots(smallvec![
            Some(Span::new(0, 0)),
            None,
            Some(Span::new(0, 0))
        ]);
        assert_eq!(m.get(1), None);
        assert_eq!(m.get(2), Some(Span::new(0, 0)));
        assert_eq!(m.get(7), None);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn name_map_skips_group_zero() {
        let names = NameMap::from_pairs(vec![
            ("b".to_string(), 2),
            ("a".to_string(), 1),
            ("bogus".to_string(), 0),
        ]);
        assert_eq!(names.len(), 2);
        assert_eq!(names.get("a"), Some(1));
        assert_eq!(names.get("bogus"), None);
        assert_eq!(names.names(), vec![("a", 1), ("b", 2)]);
    }
}
