/*!
 * Child Name Patterns
 * Regex filters applied to a single path segment during enumeration
 */

use regex::Regex;
use std::fmt;

use super::errors::{VfsError, VfsResult};

/// Filter for child enumeration
///
/// Plain strings are anchored so they must match the whole segment:
/// `"a.*"` matches `"a.txt"` but not `"ba.txt"`. A compiled [`Regex`]
/// is used exactly as given.
#[derive(Clone, Default)]
pub struct Pattern {
    // None matches everything
    regex: Option<Regex>,
}

impl Pattern {
    /// Compile a plain-string pattern, anchoring it unless it already
    /// starts with `^` and ends with `$`
    pub fn new(pattern: &str) -> VfsResult<Self> {
        let anchored = if pattern.starts_with('^') && pattern.ends_with('$') && pattern.len() > 1 {
            pattern.to_string()
        } else {
            format!("^(?:{})$", pattern)
        };
        let regex = Regex::new(&anchored)
            .map_err(|e| VfsError::InvalidPattern(format!("{}: {}", pattern, e)))?;
        Ok(Self { regex: Some(regex) })
    }

    /// Pattern that matches every segment
    pub fn any() -> Self {
        Self { regex: None }
    }

    /// Test a single path segment
    #[inline]
    pub fn matches(&self, segment: &str) -> bool {
        self.regex.as_ref().map_or(true, |re| re.is_match(segment))
    }

    /// Underlying expression, after anchoring
    pub fn as_str(&self) -> &str {
        self.regex.as_ref().map_or("^.*$", Regex::as_str)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self { regex: Some(regex) }
    }
}

impl TryFrom<&str> for Pattern {
    type Error = VfsError;

    fn try_from(pattern: &str) -> VfsResult<Self> {
        Self::new(pattern)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}
