//! HTML rendering handlers for the site.

mod home;
mod listings;
mod review;

pub use home::home_handler;
pub use listings::{articles_handler, books_handler, food_handler};
pub use review::review_handler;

use chrono::{Datelike, Local};

/// Current year for the page footer.
fn current_year() -> i32 {
    Local::now().year()
}
