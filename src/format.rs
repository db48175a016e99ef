use html_escape::encode_text;

use crate::parse::MenuLine;

/// Renders the section heading and its lines as the HTML fragment that goes
/// into the email body. Priced lines are set plain, decorative ones in gray
/// italics so the dishes stand out; every piece of page text is escaped.
pub fn render_section(heading: &str, lines: &[MenuLine]) -> String {
    let mut html = format!(
        "<h2 style='color:#d35400; border-bottom: 2px solid #d35400; \
         padding-bottom: 5px;'>📅 {}</h2>\n",
        encode_text(heading)
    );
    html.push_str("<div style='font-size: 14px; line-height: 1.6;'>\n");
    for line in lines {
        let text = encode_text(line.text());
        if line.is_priced() {
            html.push_str(&format!("<p style='margin: 8px 0;'>{text}</p>\n"));
        } else {
            html.push_str(&format!(
                "<p style='margin: 5px 0; color: #555;'><i>{text}</i></p>\n"
            ));
        }
    }
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::render_section;
    use crate::parse::DailyMenu;

    #[test]
    fn test_render_heading_and_line_styles() {
        let menu = DailyMenu::from_lines([
            "Hovězí vývar s nudlemi ... 35 Kč",
            "Rozvoz jídel po celé Praze",
        ]);
        let html = render_section("Úterý 25.11.2025", menu.lines());

        assert!(html.contains("📅 Úterý 25.11.2025</h2>"));
        assert!(html.contains("<p style='margin: 8px 0;'>Hovězí vývar s nudlemi ... 35 Kč</p>"));
        assert!(html.contains("<i>Rozvoz jídel po celé Praze</i>"));
        assert!(html.ends_with("</div>\n"));
    }

    #[test]
    fn test_render_escapes_page_text() {
        let menu = DailyMenu::from_lines(["Kuře <grilované> & hranolky 139 Kč"]);
        let html = render_section("Úterý <b>25.11.</b>", menu.lines());

        assert!(html.contains("Úterý &lt;b&gt;25.11.&lt;/b&gt;"));
        assert!(html.contains("Kuře &lt;grilované&gt; &amp; hranolky 139 Kč"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_render_keeps_page_order() {
        let menu = DailyMenu::from_lines([
            "Česneková polévka 30 Kč",
            "1. Vepřové výpečky 149 Kč",
            "Dobrou chuť!",
        ]);
        let html = render_section("Středa 26.11.2025", menu.lines());

        let soup = html.find("Česneková").unwrap();
        let main = html.find("Vepřové").unwrap();
        let note = html.find("Dobrou").unwrap();
        assert!(soup < main && main < note);
    }
}
