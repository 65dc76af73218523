//! PostgreSQL implementation of the SlideStore trait.

use crate::models::{
    NewPresentationRow, NewSlideRow, PresentationRow, SlideRow, rows_to_presentation,
};
use crate::schema::{presentations, slides};
use crate::deck_fingerprint;

use prompteur_error::{DatabaseError, NarrationError, NarrationErrorKind, PrompteurResult};
use prompteur_interface::{NarrationSlot, NewDeck, Presentation, Slide, SlideStore};

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// PostgreSQL implementation of [`SlideStore`] using Diesel ORM.
///
/// # Example
/// ```no_run
/// use prompteur_database::{PostgresSlideStore, establish_connection};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let conn = establish_connection()?;
/// let store = PostgresSlideStore::new(conn);
/// // Use store.fetch_deck(), write_script(), etc.
/// # Ok(())
/// # }
/// ```
pub struct PostgresSlideStore {
    /// Database connection wrapped in Arc<Mutex> for async safety.
    ///
    /// Note: This is a simple implementation. For production use, consider
    /// a connection pool like r2d2 or deadpool.
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresSlideStore {
    /// Create a new PostgreSQL slide store.
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Create a store from an `Arc<Mutex<PgConnection>>` (for sharing
    /// connections).
    pub fn from_arc(conn: Arc<Mutex<PgConnection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl SlideStore for PostgresSlideStore {
    async fn fetch_deck(&self, id: Uuid) -> PrompteurResult<Presentation> {
        let mut conn = self.conn.lock().await;

        let row: Option<PresentationRow> = presentations::table
            .find(id)
            .first(&mut *conn)
            .optional()
            .map_err(DatabaseError::from)?;

        let row = row.ok_or_else(|| {
            NarrationError::new(NarrationErrorKind::PresentationNotFound(id.to_string()))
        })?;

        let slide_rows: Vec<SlideRow> = SlideRow::belonging_to(&row)
            .order(slides::position.asc())
            .load(&mut *conn)
            .map_err(DatabaseError::from)?;

        Ok(rows_to_presentation(row, slide_rows))
    }

    async fn create_deck(&self, deck: &NewDeck) -> PrompteurResult<Uuid> {
        let content_hash = deck_fingerprint(&deck.slides);
        let mut conn = self.conn.lock().await;

        // Re-uploading identical content resolves to the existing deck.
        let existing: Option<Uuid> = presentations::table
            .filter(presentations::owner_id.eq(&deck.owner_id))
            .filter(presentations::content_hash.eq(&content_hash))
            .select(presentations::id)
            .first(&mut *conn)
            .optional()
            .map_err(DatabaseError::from)?;

        if let Some(id) = existing {
            tracing::debug!(
                presentation = %id,
                hash = %content_hash,
                "Deck already exists for owner, returning existing id"
            );
            return Ok(id);
        }

        let presentation_id = Uuid::new_v4();
        let new_presentation = NewPresentationRow {
            id: presentation_id,
            file_name: deck.file_name.clone(),
            content_hash: content_hash.clone(),
            owner_id: deck.owner_id.clone(),
        };

        let new_slides: Vec<NewSlideRow> = deck
            .slides
            .iter()
            .map(|slide| NewSlideRow {
                id: Uuid::new_v4(),
                presentation_id,
                position: slide.position,
                extracted_text: slide.extracted_text.clone(),
                image_mime: slide.image.as_ref().map(|img| img.mime.clone()),
                image_base64: slide.image.as_ref().map(|img| img.base64.clone()),
            })
            .collect();

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(presentations::table)
                .values(&new_presentation)
                .execute(conn)?;
            diesel::insert_into(slides::table)
                .values(&new_slides)
                .execute(conn)?;
            Ok(())
        })
        .map_err(DatabaseError::from)?;

        tracing::info!(
            presentation = %presentation_id,
            slides = new_slides.len(),
            hash = %content_hash,
            "Created presentation"
        );

        Ok(presentation_id)
    }

    async fn find_slide(&self, slide_id: Uuid) -> PrompteurResult<Slide> {
        let mut conn = self.conn.lock().await;

        let row: Option<SlideRow> = slides::table
            .find(slide_id)
            .first(&mut *conn)
            .optional()
            .map_err(DatabaseError::from)?;

        row.map(Slide::from).ok_or_else(|| {
            NarrationError::new(NarrationErrorKind::SlideNotFound(slide_id.to_string())).into()
        })
    }

    async fn write_script(
        &self,
        slide_id: Uuid,
        slot: NarrationSlot,
        text: &str,
    ) -> PrompteurResult<()> {
        let mut conn = self.conn.lock().await;

        let updated = match slot {
            NarrationSlot::Simple => diesel::update(slides::table.find(slide_id))
                .set(slides::script_simple.eq(text))
                .execute(&mut *conn),
            NarrationSlot::Medium => diesel::update(slides::table.find(slide_id))
                .set(slides::script_medium.eq(text))
                .execute(&mut *conn),
            NarrationSlot::Pro => diesel::update(slides::table.find(slide_id))
                .set(slides::script_pro.eq(text))
                .execute(&mut *conn),
        }
        .map_err(DatabaseError::from)?;

        if updated == 0 {
            return Err(
                NarrationError::new(NarrationErrorKind::SlideNotFound(slide_id.to_string()))
                    .into(),
            );
        }

        Ok(())
    }

    async fn delete_deck(&self, id: Uuid, owner_id: &str) -> PrompteurResult<()> {
        let mut conn = self.conn.lock().await;

        // Owner scoping doubles as the authorization check.
        let deleted = diesel::delete(
            presentations::table
                .filter(presentations::id.eq(id))
                .filter(presentations::owner_id.eq(owner_id)),
        )
        .execute(&mut *conn)
        .map_err(DatabaseError::from)?;

        if deleted == 0 {
            return Err(
                NarrationError::new(NarrationErrorKind::PresentationNotFound(id.to_string()))
                    .into(),
            );
        }

        tracing::info!(presentation = %id, "Deleted presentation");
        Ok(())
    }
}
