mod activity;
mod category;
mod state;
mod summary;
mod validation;

pub use activity::{Activity, ActivityId, Field, FieldChange};
pub use category::{CATEGORIES, Category, CategoryOption};
pub use state::{ActivityAction, ActivityState, Upsert};
pub use summary::CalorieSummary;
pub use validation::{ValidationError, is_valid_activity, parse_number};
