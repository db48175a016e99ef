/// Lowercase tokens that mark the soup course. The page has no reliable
/// markup for courses, so classification leans on wording.
const SOUP_KEYWORDS: [&str; 4] = ["polévka", "vývar", "kyselo", "krém"];

/// One extracted line plus the priced/decorative verdict, in page order.
/// Decorative lines still render in the email; they are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    text: String,
    priced: bool,
}

impl MenuLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn is_priced(&self) -> bool {
        self.priced
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyMenu {
    soup: Option<String>,
    main_dishes: Vec<String>,
    lines: Vec<MenuLine>,
}

impl DailyMenu {
    /// Splits a section's lines into the soup, the main dishes and the
    /// decorative rest. Priced lines fall through a precedence cascade:
    /// soup keyword first, then the first-priced-line ellipsis fallback,
    /// then main dish.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut soup = None;
        let mut main_dishes: Vec<String> = Vec::new();
        let mut all = Vec::new();

        for line in lines {
            let text = line.as_ref();
            let priced = is_priced(text);
            if priced {
                if soup.is_none() && mentions_soup(text) {
                    soup = Some(text.to_owned());
                } else if soup.is_none() && main_dishes.is_empty() && has_ellipsis(text) {
                    // No keyword matched anywhere yet; the first priced line
                    // is usually the soup anyway.
                    soup = Some(text.to_owned());
                } else {
                    main_dishes.push(text.to_owned());
                }
            }
            all.push(MenuLine {
                text: text.to_owned(),
                priced,
            });
        }

        Self {
            soup,
            main_dishes,
            lines: all,
        }
    }

    pub fn soup(&self) -> Option<&str> {
        self.soup.as_deref()
    }

    pub fn main_dishes(&self) -> &[String] {
        &self.main_dishes
    }

    /// Every line in encounter order, for rendering.
    pub fn lines(&self) -> &[MenuLine] {
        &self.lines
    }

    pub fn has_dishes(&self) -> bool {
        self.soup.is_some() || !self.main_dishes.is_empty()
    }
}

/// A digit within the last five characters is the page's only dependable
/// price signature.
pub fn is_priced(line: &str) -> bool {
    line.chars().rev().take(5).any(|c| c.is_ascii_digit())
}

/// Keyword match on the lowercased line; "krém" intentionally also catches
/// "krémová" and friends.
pub fn mentions_soup(line: &str) -> bool {
    let lowercase = line.to_lowercase();
    SOUP_KEYWORDS
        .iter()
        .any(|keyword| lowercase.contains(keyword))
}

/// Dish lines pad their price with a dotted leader.
pub fn has_ellipsis(line: &str) -> bool {
    line.contains("...")
}
