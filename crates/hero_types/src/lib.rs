//! Core types for the Tour of Heroes application.
//!
//! This crate defines the shared data structures used across
//! the data service, the view models, and the Yew frontend.

mod route;

pub use route::AppRoute;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a hero, unique within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(pub u32);

impl HeroId {
    /// Id handed out when a collection has no heroes yet.
    pub const FIRST: HeroId = HeroId(11);

    /// The id following this one, if the id space is not exhausted.
    pub fn next(self) -> Option<HeroId> {
        self.0.checked_add(1).map(HeroId)
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HeroId {
    fn from(id: u32) -> Self {
        HeroId(id)
    }
}

impl FromStr for HeroId {
    type Err = HeroError;

    /// Parse a string-encoded route parameter.
    fn from_str(raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<u32>()
            .map(HeroId)
            .map_err(|_| HeroError::InvalidId(raw.to_string()))
    }
}

/// A hero record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Unique hero identifier
    pub id: HeroId,
    /// Display name, always trimmed and non-empty once stored
    pub name: String,
}

impl Hero {
    /// Create a new hero.
    pub fn new(id: impl Into<HeroId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Copy of this hero carrying a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: name.into(),
        }
    }
}

/// Errors shared by the data service and the views.
#[derive(Error, Debug)]
pub enum HeroError {
    #[error("hero not found: {0}")]
    NotFound(HeroId),

    #[error("invalid hero id: {0:?}")]
    InvalidId(String),

    #[error("duplicate hero id: {0}")]
    DuplicateId(HeroId),

    #[error("hero name must not be empty")]
    EmptyName,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hero service unavailable: {0}")]
    Unavailable(String),
}

/// Result type for hero operations.
pub type Result<T> = std::result::Result<T, HeroError>;

/// Trim a user-supplied name, rejecting blank input.
pub fn normalize_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(HeroError::EmptyName);
    }
    Ok(name.to_string())
}
