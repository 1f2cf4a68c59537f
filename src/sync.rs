use crate::engine::{Engine, RegexEngine};
use crate::errors::RegexResult;
use crate::options::RegexConfig;
use crate::regexp::Regex;
use parking_lot::{Mutex, MutexGuard};

/// A [`Regex`] that several threads can search through one at a time.
#[derive(Debug)]
pub struct SharedRegex<E: Engine = RegexEngine> {
    inner: Mutex<Regex<E>>,
}

impl SharedRegex {
    pub fn new(pattern: &str) -> RegexResult<Self> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }
}

impl<E: Engine> SharedRegex<E> {
    pub fn from_regex(regex: Regex<E>) -> Self {
        Self {
            inner: Mutex::new(regex),
        }
    }

    pub fn compile_with(pattern: &str, config: &RegexConfig) -> RegexResult<Self> {
        Ok(Self::from_regex(Regex::compile_with(pattern, config)?))
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Regex<E>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn lock(&self) -> MutexGuard<'_, Regex<E>> {
        self.inner.lock()
    }

    pub fn into_inner(self) -> Regex<E> {
        self.inner.into_inner()
    }
}
