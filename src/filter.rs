//! Inclusion/exclusion filtering for vault files

use glob::{Pattern, PatternError};

use crate::vault::File;

/// Glob-based file filter.
///
/// Include patterns restrict indexing to matching files (empty means
/// everything qualifies); exclude patterns drop files and win over
/// includes. Patterns containing `/` match the vault-relative path,
/// bare patterns match the file name.
#[derive(Debug, Clone, Default)]
pub struct IndexFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl IndexFilter {
    /// Compile a filter from raw pattern strings.
    pub fn from_patterns(include: &[String], exclude: &[String]) -> Result<Self, PatternError> {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    /// Decide whether a file qualifies for indexing.
    pub fn decide(&self, file: &File) -> bool {
        if self.exclude.iter().any(|p| pattern_matches(p, file)) {
            return false;
        }
        if self.include.is_empty() {
            return true;
        }
        self.include.iter().any(|p| pattern_matches(p, file))
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Pattern>, PatternError> {
    patterns.iter().map(|p| Pattern::new(p)).collect()
}

/// Match against the relative path for slash patterns, the name otherwise.
fn pattern_matches(pattern: &Pattern, file: &File) -> bool {
    if pattern.as_str().contains('/') {
        pattern.matches(&file.path)
    } else {
        pattern.matches(&file.name)
    }
}
