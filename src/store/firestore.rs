use firestore::FirestoreDb;

use super::DailyMenuRecord;

const MENUS_COLLECTION: &str = "menus";

#[derive(Debug)]
pub struct Firestore {
    db: FirestoreDb,
}

impl Firestore {
    pub async fn open(project_id: &str) -> crate::Result<Self> {
        let db = FirestoreDb::new(project_id).await?;
        Ok(Self { db })
    }

    /// The date is the document id, so a rerun on the same day overwrites
    /// the earlier record instead of adding a second one.
    pub async fn save(&self, record: &DailyMenuRecord) -> crate::Result<()> {
        self.db
            .fluent()
            .update()
            .in_col(MENUS_COLLECTION)
            .document_id(&record.date)
            .object(record)
            // need to specify type because of dependency_on_unit_never_type_fallback
            .execute::<()>()
            .await?;
        Ok(())
    }
}
