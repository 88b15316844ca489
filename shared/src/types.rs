//! Reference types
//!
//! The API returns relation fields either as a bare document id or as the
//! populated document, depending on the endpoint. `EntityRef` makes that
//! choice explicit so call sites resolve it with a match instead of a
//! runtime type probe.

use serde::{Deserialize, Serialize};

/// A relation field: either an id reference or the populated entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef<T> {
    /// Populated document returned by the server
    Full(T),
    /// Bare document id
    Id(String),
}

impl<T> EntityRef<T> {
    /// Returns the id when the reference is unpopulated.
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Full(_) => None,
        }
    }

    /// Returns the populated entity, if the server expanded it.
    pub fn as_full(&self) -> Option<&T> {
        match self {
            Self::Full(entity) => Some(entity),
            Self::Id(_) => None,
        }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, Self::Full(_))
    }
}
