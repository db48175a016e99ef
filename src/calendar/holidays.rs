use chrono::{Datelike, Duration, NaiveDate};

/// Czech public holidays: eleven fixed dates plus the two movable feasts
/// tied to Easter. Returns the holiday's display name.
pub fn public_holiday(date: NaiveDate) -> Option<&'static str> {
    let fixed = match (date.day(), date.month()) {
        (1, 1) => Some("Den obnovy samostatného českého státu"),
        (1, 5) => Some("Svátek práce"),
        (8, 5) => Some("Den vítězství"),
        (5, 7) => Some("Den slovanských věrozvěstů Cyrila a Metoděje"),
        (6, 7) => Some("Den upálení mistra Jana Husa"),
        (28, 9) => Some("Den české státnosti"),
        (28, 10) => Some("Den vzniku samostatného československého státu"),
        (17, 11) => Some("Den boje za svobodu a demokracii"),
        (24, 12) => Some("Štědrý den"),
        (25, 12) => Some("1. svátek vánoční"),
        (26, 12) => Some("2. svátek vánoční"),
        _ => None,
    };
    if fixed.is_some() {
        return fixed;
    }

    let easter = easter_sunday(date.year());
    if date == easter - Duration::days(2) {
        return Some("Velký pátek");
    }
    if date == easter + Duration::days(1) {
        return Some("Velikonoční pondělí");
    }
    None
}

/// Easter Sunday for a Gregorian year, by the anonymous Gregorian computus
/// (Meeus/Jones/Butcher).
fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).expect("computus yields a valid date")
}
