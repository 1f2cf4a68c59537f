mod error;
mod template;

pub use error::TemplateError;
pub use template::{ResolvedTemplate, Template, Token};

use crate::capture::{MatchResult, MatchSet, NameMap};
use crate::compiled::CompiledPattern;
use crate::engine::Engine;
use crate::errors::RegexResult;
use crate::find::find_all;
use crate::project::{slice_str, submatch_strs};
use std::borrow::Cow;

/// Interleaves unmatched source spans with one replacement per match.
///
/// An empty `set` returns `haystack` itself, borrowed.
pub fn substitute<'h, F>(haystack: &'h [u8], set: &MatchSet, mut emit: F) -> RegexResult<Cow<'h, [u8]>>
where
    F: FnMut(&MatchResult, &mut Vec<u8>) -> RegexResult<()>,
{
    if set.is_empty() {
        return Ok(Cow::Borrowed(haystack));
    }

    let mut dest = Vec::with_capacity(haystack.len());
    let mut prev_end = 0usize;
    for m in set {
        if m.start() > prev_end {
            dest.extend_from_slice(&haystack[prev_end..m.start()]);
        }
        emit(m, &mut dest)?;
        prev_end = m.end();
    }
    if prev_end < haystack.len() {
        dest.extend_from_slice(&haystack[prev_end..]);
    }
    Ok(Cow::Owned(dest))
}

#[tracing::instrument(level = "trace", skip_all, fields(pattern=%pattern.as_str(), len=haystack.len() as u64, template_len=template.len() as u64))]
pub fn replace_all_template<'h, E: Engine>(
    pattern: &mut CompiledPattern<E>,
    haystack: &'h [u8],
    template: &[u8],
    capacity_hint: usize,
) -> RegexResult<Cow<'h, [u8]>> {
    let set = find_all(pattern, haystack, None, capacity_hint)?;
    if set.is_empty() {
        return Ok(Cow::Borrowed(haystack));
    }

    let resolved = Template::parse(template)?.resolve(pattern.group_count(), pattern.names())?;
    substitute(haystack, &set, |m, out| {
        resolved.expand(haystack, m, out);
        Ok(())
    })
}

pub fn replace_all_func<'h, E, F, R>(
    pattern: &mut CompiledPattern<E>,
    haystack: &'h [u8],
    capacity_hint: usize,
    mut f: F,
) -> RegexResult<Cow<'h, [u8]>>
where
    E: Engine,
    F: FnMut(&[u8]) -> R,
    R: AsRef<[u8]>,
{
    let set = find_all(pattern, haystack, None, capacity_hint)?;
    substitute(haystack, &set, |m, out| {
        let replacement = f(&haystack[m.span().range()]);
        out.extend_from_slice(replacement.as_ref());
        Ok(())
    })
}

pub fn replace_all_with<'h, E, F, R>(
    pattern: &mut CompiledPattern<E>,
    haystack: &'h str,
    capacity_hint: usize,
    mut f: F,
) -> RegexResult<Cow<'h, str>>
where
    E: Engine,
    F: FnMut(&Submatches<'_, 'h>) -> R,
    R: AsRef<str>,
{
    let set = find_all(pattern, haystack.as_bytes(), None, capacity_hint)?;
    let names = pattern.names();
    let replaced = substitute(haystack.as_bytes(), &set, |m, out| {
        let submatches = Submatches {
            haystack,
            m,
            names,
        };
        out.extend_from_slice(f(&submatches).as_ref().as_bytes());
        Ok(())
    })?;
    Ok(into_str(haystack, replaced))
}

pub(crate) fn into_str<'h>(haystack: &'h str, replaced: Cow<'h, [u8]>) -> Cow<'h, str> {
    match replaced {
        Cow::Borrowed(_) => Cow::Borrowed(haystack),
        Cow::Owned(bytes) => Cow::Owned(
            String::from_utf8(bytes)
                .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()),
        ),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Submatches<'a, 'h> {
    haystack: &'h str,
    m: &'a MatchResult,
    names: &'a NameMap,
}

impl<'a, 'h> Submatches<'a, 'h> {
    pub fn whole(&self) -> &'h str {
        slice_str(self.haystack, self.m.span())
    }

    pub fn get(&self, index: usize) -> Option<&'h str> {
        self.m.get(index).map(|span| slice_str(self.haystack, span))
    }

    pub fn name(&self, name: &str) -> Option<&'h str> {
        self.names.get(name).and_then(|index| self.get(index))
    }

    pub fn len(&self) -> usize {
        self.m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    pub fn to_vec(&self) -> Vec<&'h str> {
        submatch_strs(self.haystack, self.m)
    }

    pub fn match_result(&self) -> &'a MatchResult {
        self.m
    }
}
