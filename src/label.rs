/*!
# Vertex Labels

Every vertex is identified by a [`Label`]: a non-empty, case-sensitive string of alphabetic
characters. Labels are validated once when they enter the graph, so algorithms never need to
revisit that question.
*/

use std::{
    borrow::Borrow,
    fmt::{Debug, Display},
    str::FromStr,
};

use crate::error::{GraphError, Result};

/// A validated vertex label.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(String);

impl Label {
    /// Validates `label` and wraps it.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidLabel`] if `label` is empty or contains a character
    /// that is not alphabetic.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// assert!(Label::new("Anna").is_ok());
    /// assert!(Label::new("").is_err());
    /// assert!(Label::new("A1").is_err());
    /// ```
    pub fn new<S>(label: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let label = label.into();
        if Self::is_valid(&label) {
            Ok(Self(label))
        } else {
            Err(GraphError::InvalidLabel(label))
        }
    }

    /// Returns *true* if `label` would be accepted by [`Label::new`]
    pub fn is_valid(label: &str) -> bool {
        !label.is_empty() && label.chars().all(char::is_alphabetic)
    }

    /// Bijective base-26 naming: `0 -> A`, `25 -> Z`, `26 -> AA`, `27 -> AB`, ...
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// assert_eq!(Label::from_index(0).as_str(), "A");
    /// assert_eq!(Label::from_index(26).as_str(), "AA");
    /// assert_eq!(Label::from_index(701).as_str(), "ZZ");
    /// ```
    pub fn from_index(index: usize) -> Self {
        let mut letters = Vec::new();
        let mut n = index + 1;
        while n > 0 {
            n -= 1;
            letters.push(char::from(b'A' + (n % 26) as u8));
            n /= 26;
        }

        Self(letters.into_iter().rev().collect())
    }

    /// Returns the label as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Label {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Label {
    type Error = GraphError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Label {
    type Error = GraphError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}
