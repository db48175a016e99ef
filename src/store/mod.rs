mod firestore;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{config::Config, parse::DailyMenu};

use firestore::Firestore;

/// One document per calendar day. Field names follow the collection's
/// existing camelCase schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMenuRecord {
    date: String,
    soup: String,
    main_dish: String,
    updated_at: DateTime<Utc>,
}

impl DailyMenuRecord {
    pub fn new(date: NaiveDate, menu: &DailyMenu) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            soup: menu.soup().unwrap_or_default().to_owned(),
            main_dish: menu.main_dishes().join("\n"),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug)]
pub enum Store {
    Cloud(Firestore),
    Disabled,
}

impl Store {
    /// Opens the cloud store when a project is configured. A missing
    /// project or an unreachable store downgrades to `Disabled` so the
    /// email half of the job is never held hostage by persistence.
    pub async fn from_config(config: &Config) -> Self {
        let Some(project_id) = config.firestore_project.as_deref() else {
            log::warn!("FIRESTORE_PROJECT_ID is not set, today's record will not be persisted");
            return Self::Disabled;
        };
        match Firestore::open(project_id).await {
            Ok(store) => Self::Cloud(store),
            Err(e) => {
                log::warn!("document store unavailable: {e}");
                Self::Disabled
            }
        }
    }

    pub async fn save(&self, record: &DailyMenuRecord) -> crate::Result<()> {
        match self {
            Self::Cloud(fs) => fs.save(record).await,
            Self::Disabled => Ok(()),
        }
    }
}
