use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);
pub const DEFAULT_DFA_SIZE_LIMIT: usize = 2 * (1 << 20);
pub const DEFAULT_NEST_LIMIT: u32 = 250;
pub const DEFAULT_MATCH_CAPACITY_HINT: usize = 4;

const MAX_MATCH_CAPACITY_HINT: usize = 1 << 16;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct CompileOptions: u32 {
        const IGNORE_CASE = 0b0000_0001;
        /// Whitespace in the pattern is ignored and `#` starts a comment.
        const EXTEND = 0b0000_0010;
        /// `.` also matches `\n`.
        const MULTILINE = 0b0000_0100;
        /// `^` and `$` only match at the edges of the buffer.
        const SINGLELINE = 0b0000_1000;
    }
}

impl CompileOptions {
    pub const DEFAULT: CompileOptions = CompileOptions::empty();
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct SearchOptions: u32 {
        /// A match is only reported when it starts exactly at the search offset.
        const ANCHORED = 0b0000_0001;
    }
}

impl SearchOptions {
    pub const DEFAULT: SearchOptions = SearchOptions::empty();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineLimits {
    pub size_limit: usize,
    pub dfa_size_limit: usize,
    pub nest_limit: u32,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
            dfa_size_limit: DEFAULT_DFA_SIZE_LIMIT,
            nest_limit: DEFAULT_NEST_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexConfig {
    pub compile_options: CompileOptions,
    pub search_options: SearchOptions,
    pub limits: EngineLimits,
    pub match_capacity_hint: usize,
}

impl Default for RegexConfig {
    fn default() -> Self {
        Self {
            compile_options: CompileOptions::DEFAULT,
            search_options: SearchOptions::DEFAULT,
            limits: EngineLimits::default(),
            match_capacity_hint: DEFAULT_MATCH_CAPACITY_HINT,
        }
    }
}

impl RegexConfig {
    pub fn builder() -> RegexConfigBuilder {
        RegexConfigBuilder::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self {
            compile_options: options,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), RegexConfigError> {
        if self.limits.size_limit == 0 {
            return Err(RegexConfigError::SizeLimitInvalid);
        }
        if self.limits.nest_limit == 0 {
            return Err(RegexConfigError::NestLimitInvalid);
        }
        if self.match_capacity_hint > MAX_MATCH_CAPACITY_HINT {
            return Err(RegexConfigError::MatchCapacityOutOfRange {
                value: self.match_capacity_hint,
                max: MAX_MATCH_CAPACITY_HINT,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RegexConfigBuilder {
    config: RegexConfig,
}

impl RegexConfigBuilder {
    pub fn compile_options(mut self, value: CompileOptions) -> Self {
        self.config.compile_options = value;
        self
    }

    pub fn search_options(mut self, value: SearchOptions) -> Self {
        self.config.search_options = value;
        self
    }

    pub fn ignore_case(mut self, value: bool) -> Self {
        self.config
            .compile_options
            .set(CompileOptions::IGNORE_CASE, value);
        self
    }

    pub fn multiline(mut self, value: bool) -> Self {
        self.config.compile_options.set(CompileOptions::MULTILINE, value);
        self
    }

    pub fn singleline(mut self, value: bool) -> Self {
        self.config
            .compile_options
            .set(CompileOptions::SINGLELINE, value);
        self
    }

    pub fn extend(mut self, value: bool) -> Self {
        self.config.compile_options.set(CompileOptions::EXTEND, value);
        self
    }

    pub fn anchored(mut self, value: bool) -> Self {
        self.config.search_options.set(SearchOptions::ANCHORED, value);
        self
    }

    pub fn size_limit(mut self, value: usize) -> Self {
        self.config.limits.size_limit = value;
        self
    }

    pub fn dfa_size_limit(mut self, value: usize) -> Self {
        self.config.limits.dfa_size_limit = value;
        self
    }

    pub fn nest_limit(mut self, value: u32) -> Self {
        self.config.limits.nest_limit = value;
        self
    }

    pub fn match_capacity_hint(mut self, value: usize) -> Self {
        self.config.match_capacity_hint = value;
        self
    }

    pub fn build(self) -> Result<RegexConfig, RegexConfigError> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegexConfigError {
    #[error("size_limit must be greater than zero")]
    SizeLimitInvalid,
    #[error("nest_limit must be greater than zero")]
    NestLimitInvalid,
    #[error("match_capacity_hint {value} exceeds the supported maximum {max}")]
    MatchCapacityOutOfRange { value: usize, max: usize },
}
