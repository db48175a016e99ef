#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod calendar;
mod config;
mod error;
mod fetch;
mod format;
mod notify;
mod parse;
mod store;

use std::{fmt, process::ExitCode};

use chrono::{Local, NaiveDate};
use scraper::Html;

use crate::{
    calendar::{SkipReason, Verdict},
    config::Config,
    notify::Mailer,
    parse::{DailyMenu, DailySection},
    store::{DailyMenuRecord, Store},
};

pub use error::Result;

/// How a run ended when nothing failed. A skipped day and a menu that is
/// not on the page yet are ordinary outcomes for this job, not errors.
#[derive(Debug)]
enum Outcome {
    Skipped(SkipReason),
    MenuNotPublished,
    Sent,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped(reason) => write!(f, "not a delivery day ({reason}), nothing to do"),
            Self::MenuNotPublished => {
                write!(f, "today's menu is not on the page, nothing to send")
            }
            Self::Sent => write!(f, "done"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let today = Local::now().date_naive();
    match run(today).await {
        Ok(outcome) => {
            log::info!("{outcome}");
            ExitCode::SUCCESS
        }
        // Only a failure to deliver should wake anyone up.
        Err(e) if e.is_fatal() => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::warn!("{e}");
            ExitCode::SUCCESS
        }
    }
}

async fn run(today: NaiveDate) -> Result<Outcome> {
    if let Verdict::Skip(reason) = calendar::check(today) {
        return Ok(Outcome::Skipped(reason));
    }
    let config = Config::from_env()?;
    let date_str = today.format("%d.%m.%Y").to_string();
    log::info!("looking for the menu of {date_str}");

    let client = fetch::make_client();
    let page = fetch::menu_page(&client).await?;
    let section = {
        let document = Html::parse_document(&page);
        DailySection::find_in(&document, &date_str)
    };
    let Some(section) = section else {
        return Ok(Outcome::MenuNotPublished);
    };
    let menu = DailyMenu::from_lines(section.lines());
    if !menu.has_dishes() {
        log::warn!("section for {date_str} has no priced lines, sending it as-is");
    }

    let mailer = Mailer::new(&config)?;
    let fragment = format::render_section(section.heading(), menu.lines());
    mailer.send_menu(today, &fragment).await?;

    let record = DailyMenuRecord::new(today, &menu);
    if let Err(e) = Store::from_config(&config).await.save(&record).await {
        log::warn!("could not persist today's record: {e}");
    }
    Ok(Outcome::Sent)
}
