//! TUI screen implementations.

pub mod activity_form;
pub mod activity_list;
pub mod help;

pub use activity_form::{ActivityFormState, FormMode, draw_activity_form};
pub use activity_list::{ActivityListState, draw_activity_list};
pub use help::{HelpState, draw_help};
