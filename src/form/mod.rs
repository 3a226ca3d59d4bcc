//! Form data handling
//!
//! Resolves the current submission (live request vs. cached), identifies
//! upload fields, and renders the issue/pull-request body.

mod body;
mod store;
mod uploads;

pub use body::{humanize, render_body};
pub use store::FormStore;
pub use uploads::uploads;
