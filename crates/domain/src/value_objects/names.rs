//! Validated string newtypes for the promo-code domain
//!
//! These newtypes ensure the fields are valid by construction:
//! - Non-empty (except Description)
//! - Within length limits
//! - Trimmed of leading/trailing whitespace
//!
//! Normalization lives here, not in the entity constructor: `CodeValue`
//! upper-cases its input so "save20" and "SAVE20" compare equal everywhere.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for service names
pub const MAX_SERVICE_NAME_LENGTH: usize = 200;

/// Maximum length for promo codes
pub const MAX_CODE_LENGTH: usize = 64;

/// Maximum length for description fields
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

// ============================================================================
// ServiceName
// ============================================================================

/// A validated service name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceName(String);

impl ServiceName {
    /// Create a new validated service name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Service name cannot be empty"));
        }
        if trimmed.len() > MAX_SERVICE_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Service name cannot exceed {} characters",
                MAX_SERVICE_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ServiceName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ServiceName> for String {
    fn from(name: ServiceName) -> String {
        name.0
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// CodeValue
// ============================================================================

/// A validated promo code (non-empty, <=64 chars, trimmed, upper-cased)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CodeValue(String);

impl CodeValue {
    /// Create a new validated promo code.
    ///
    /// The code is trimmed and converted to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The code is empty after trimming
    /// - The code exceeds 64 characters after trimming
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let normalized = code.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(DomainError::validation("Promo code cannot be empty"));
        }
        if normalized.len() > MAX_CODE_LENGTH {
            return Err(DomainError::validation(format!(
                "Promo code cannot exceed {} characters",
                MAX_CODE_LENGTH
            )));
        }
        Ok(Self(normalized))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CodeValue {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CodeValue> for String {
    fn from(code: CodeValue) -> String {
        code.0
    }
}

impl AsRef<str> for CodeValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Description
// ============================================================================

/// A validated description (<=2000 chars, empty is valid)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Create a new validated description.
    ///
    /// Empty strings are valid for descriptions. The input is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the description exceeds 2000
    /// characters.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        let trimmed = text.trim().to_string();
        if trimmed.len() > MAX_DESCRIPTION_LENGTH {
            return Err(DomainError::validation(format!(
                "Description cannot exceed {} characters",
                MAX_DESCRIPTION_LENGTH
            )));
        }
        Ok(Self(trimmed))
    }

    /// Create an empty description.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the description is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Description {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Description {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Description> for String {
    fn from(desc: Description) -> String {
        desc.0
    }
}

// ============================================================================
// Tests
// ============================================================================
