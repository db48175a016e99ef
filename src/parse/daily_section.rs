use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use super::collapse_whitespace;

fn section_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("div.menicka").expect("selector is valid"))
}

fn heading_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("div.nadpis").expect("selector is valid"))
}

/// One day's portion of the fetched page: the heading that carried today's
/// date and the cleaned-up text lines under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySection {
    heading: String,
    lines: Vec<String>,
}

impl DailySection {
    /// Scans the page's menu sections in document order and keeps the first
    /// one whose heading mentions `date_str` (`DD.MM.YYYY`). Headings carry
    /// surrounding text ("Úterý 25.11.2025"), so this is a substring match.
    pub fn find_in(document: &Html, date_str: &str) -> Option<Self> {
        document
            .select(section_selector())
            .find_map(|section| Self::from_html_element(section, date_str))
    }

    fn from_html_element(element: ElementRef<'_>, date_str: &str) -> Option<Self> {
        let heading_element = element.select(heading_selector()).next()?;
        let heading_text = heading_element.text().collect::<String>();
        let heading = collapse_whitespace(heading_text.trim()).into_owned();
        if !heading.contains(date_str) {
            return None;
        }

        // Every descendant text node is one raw line. The heading's own text
        // shows up among them and would repeat in the output, so it is
        // dropped along with the blank ones.
        let lines = element
            .text()
            .map(|node| collapse_whitespace(node.trim()).into_owned())
            .filter(|line| !line.is_empty() && line != &heading)
            .collect();

        Some(Self { heading, lines })
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
