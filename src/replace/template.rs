use super::TemplateError;
use crate::capture::{MatchResult, NameMap};
use crate::project::slice;
use memchr::memchr;
use smallvec::SmallVec;

const ESCAPE: u8 = b'\\';
const NAMED_INTRODUCER: u8 = b'k';
const NAME_OPEN: u8 = b'<';
const NAME_CLOSE: u8 = b'>';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'t> {
    Literal(&'t [u8]),
    Numbered(usize),
    Named(&'t [u8]),
}

/// A replacement template split into literal runs and backreferences.
///
/// Escapes other than `\1`-`\9` and `\k<name>` stay in the literal runs
/// with their backslash, and so does a trailing lone backslash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'t> {
    tokens: SmallVec<[Token<'t>; 8]>,
}

impl<'t> Template<'t> {
    pub fn parse(raw: &'t [u8]) -> Result<Self, TemplateError> {
        let mut tokens: SmallVec<[Token<'t>; 8]> = SmallVec::new();
        let mut literal_start = 0usize;
        let mut pos = 0usize;

        while let Some(rel) = memchr(ESCAPE, &raw[pos..]) {
            let escape = pos + rel;
            let Some(&next) = raw.get(escape + 1) else {
                break;
            };

            match next {
                b'1'..=b'9' => {
                    push_literal(&mut tokens, &raw[literal_start..escape]);
                    tokens.push(Token::Numbered(usize::from(next - b'0')));
                    pos = escape + 2;
                    literal_start = pos;
                }
                NAMED_INTRODUCER if raw.get(escape + 2) == Some(&NAME_OPEN) => {
                    let name_start = escape + 3;
                    let Some(len) = memchr(NAME_CLOSE, &raw[name_start..]) else {
                        return Err(TemplateError::UnterminatedName { position: escape });
                    };
                    push_literal(&mut tokens, &raw[literal_start..escape]);
                    tokens.push(Token::Named(&raw[name_start..name_start + len]));
                    pos = name_start + len + 1;
                    literal_start = pos;
                }
                _ => {
                    // unrecognized escape: both bytes stay in the literal run
                    pos = escape + 2;
                }
            }
        }

        push_literal(&mut tokens, &raw[literal_start..]);
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token<'t>] {
        &self.tokens
    }

    pub fn is_literal(&self) -> bool {
        self.tokens.iter().all(|t| matches!(t, Token::Literal(_)))
    }

    /// Binds every backreference to a group index of one pattern.
    ///
    /// Numbered references resolve to nothing when the pattern has named
    /// groups.
    pub fn resolve(
        &self,
        group_count: usize,
        names: &NameMap,
    ) -> Result<ResolvedTemplate<'t>, TemplateError> {
        let mut pieces = SmallVec::with_capacity(self.tokens.len());
        for token in self.tokens.iter() {
            match *token {
                Token::Literal(bytes) => pieces.push(Piece::Literal(bytes)),
                Token::Numbered(_) if !names.is_empty() => {}
                Token::Numbered(group) => {
                    if group > group_count {
                        return Err(TemplateError::GroupOutOfRange { group, group_count });
                    }
                    pieces.push(Piece::Group(group));
                }
                Token::Named(raw_name) => {
                    let group = std::str::from_utf8(raw_name)
                        .ok()
                        .and_then(|name| names.get(name))
                        .ok_or_else(|| TemplateError::UnknownGroupName {
                            name: String::from_utf8_lossy(raw_name).into_owned(),
                        })?;
                    pieces.push(Piece::Group(group));
                }
            }
        }
        Ok(ResolvedTemplate { pieces })
    }
}

fn push_literal<'t>(tokens: &mut SmallVec<[Token<'t>; 8]>, bytes: &'t [u8]) {
    if !bytes.is_empty() {
        tokens.push(Token::Literal(bytes));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'t> {
    Literal(&'t [u8]),
    Group(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate<'t> {
    pieces: SmallVec<[Piece<'t>; 8]>,
}

impl ResolvedTemplate<'_> {
    pub fn expand(&self, haystack: &[u8], m: &MatchResult, out: &mut Vec<u8>) {
        for piece in self.pieces.iter() {
            match *piece {
                Piece::Literal(bytes) => out.extend_from_slice(bytes),
                Piece::Group(group) => {
                    if let Some(span) = m.get(group) {
                        out.extend_from_slice(slice(haystack, span));
                    }
                }
            }
        }
    }
}
