//! Client-side structural validation, mirrored from the server's rules.
//!
//! Each resource exposes `is_valid(precreation)`; before creation the
//! server-assigned key is allowed to be empty, afterwards it is not.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validation failure: which attribute, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCase {
    pub attribute: String,
    pub msg: String,
}

impl ErrorCase {
    pub fn new(attribute: impl Into<String>, msg: impl Into<String>) -> Self {
        Self { attribute: attribute.into(), msg: msg.into() }
    }
}

impl fmt::Display for ErrorCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.attribute, self.msg)
    }
}

/// Accumulated validation failures for one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<ErrorCase>,
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, attribute: impl Into<String>, msg: impl Into<String>) {
        self.errors.push(ErrorCase::new(attribute, msg));
    }

    /// Fold another validation result in, prefixing its attribute paths.
    pub fn merge_prefixed(&mut self, prefix: &str, result: Result<(), ValidationError>) {
        if let Err(err) = result {
            for case in err.errors {
                let attribute = if case.attribute.is_empty() {
                    prefix.to_string()
                } else {
                    format!("{prefix}.{}", case.attribute)
                };
                self.errors.push(ErrorCase { attribute, msg: case.msg });
            }
        }
    }

    /// `Ok(())` if no case was recorded.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, case) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{case}")?;
        }
        Ok(())
    }
}

/// Require a non-empty key-like attribute.
pub(crate) fn check_key(value: &str, errs: &mut ValidationError, attribute: &str) {
    if value.is_empty() {
        errs.push(attribute, "must not be empty");
    }
}
