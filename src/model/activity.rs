use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::validation::{ValidationError, parse_number};

/// Unique identity of an activity record.
///
/// Generated once when a draft is created and stable for the record's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(Uuid);

impl ActivityId {
    /// Generates a fresh random identifier.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[mutants::skip]
impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single food or exercise entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub category: Category,
    pub name: String,
    pub calories: u32,
}

impl Activity {
    /// Creates an empty draft: fresh id, default category, blank name, zero calories.
    pub fn draft() -> Self {
        Self {
            id: ActivityId::new(),
            category: Category::default(),
            name: String::new(),
            calories: 0,
        }
    }

    /// Returns a copy of this activity with exactly one field replaced.
    pub fn with_change(&self, change: FieldChange) -> Self {
        let mut next = self.clone();
        match change {
            FieldChange::Category(category) => next.category = category,
            FieldChange::Name(name) => next.name = name,
            FieldChange::Calories(calories) => next.calories = calories,
        }
        next
    }
}

/// Editable fields of an [`Activity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Category,
    Name,
    Calories,
}

/// A typed edit to a single field of an [`Activity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Category(Category),
    Name(String),
    Calories(u32),
}

impl FieldChange {
    /// Builds a change from raw input text.
    ///
    /// Category and calories are coerced to integers; the name is kept verbatim.
    pub fn parse(field: Field, raw: &str) -> Result<Self, ValidationError> {
        match field {
            Field::Category => Ok(Self::Category(Category::try_from(parse_number(raw)?)?)),
            Field::Name => Ok(Self::Name(raw.to_string())),
            Field::Calories => Ok(Self::Calories(parse_number(raw)?)),
        }
    }

    /// Returns the field this change targets.
    pub fn field(&self) -> Field {
        match self {
            Self::Category(_) => Field::Category,
            Self::Name(_) => Field::Name,
            Self::Calories(_) => Field::Calories,
        }
    }
}
