use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Kind of activity being tracked.
///
/// Serialized as its integer code (`1` = food, `2` = exercise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum Category {
    #[default]
    Food,
    Exercise,
}

/// One entry in the category option table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    /// Integer code of the category.
    pub id: u32,
    /// Display name shown in the selector.
    pub name: &'static str,
}

/// Fixed, ordered option table for the category selector.
pub static CATEGORIES: &[CategoryOption] = &[
    CategoryOption {
        id: 1,
        name: "Food",
    },
    CategoryOption {
        id: 2,
        name: "Exercise",
    },
];

static ALL_CATEGORIES: &[Category] = &[Category::Food, Category::Exercise];

impl Category {
    /// Returns the integer code for this category.
    pub fn code(&self) -> u32 {
        match self {
            Category::Food => 1,
            Category::Exercise => 2,
        }
    }

    /// Returns the display name from the option table.
    pub fn display_name(&self) -> &'static str {
        CATEGORIES
            .iter()
            .find(|option| option.id == self.code())
            .map(|option| option.name)
            .unwrap_or_default()
    }

    /// Returns the submit control label for drafts of this category.
    pub fn submit_label(&self) -> &'static str {
        match self {
            Category::Food => "Save Food",
            Category::Exercise => "Save Exercise",
        }
    }

    /// Returns all categories in option-table order.
    pub fn all() -> &'static [Category] {
        ALL_CATEGORIES
    }
}

impl TryFrom<u32> for Category {
    type Error = ValidationError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Category::Food),
            2 => Ok(Category::Exercise),
            other => Err(ValidationError::UnknownCategory(other)),
        }
    }
}

impl From<Category> for u32 {
    fn from(category: Category) -> Self {
        category.code()
    }
}

#[mutants::skip]
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
