mod daily_menu;
mod daily_section;

pub use daily_menu::{DailyMenu, MenuLine};
pub use daily_section::DailySection;

use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Text nodes come out of the markup with NBSPs, newlines and doubled
/// spaces; fold every whitespace run into a single plain space.
pub(crate) fn collapse_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s, " ")
}
