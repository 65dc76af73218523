//! Diesel row models and conversions to the shared domain types.

use crate::schema::{presentations, slides};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use prompteur_interface::{Presentation, Slide, SlideImage};
use uuid::Uuid;

/// A row from the `presentations` table.
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = presentations)]
pub struct PresentationRow {
    /// Presentation identifier.
    pub id: Uuid,
    /// Display file name from the upload.
    pub file_name: String,
    /// Deduplication key derived from slide content.
    pub content_hash: String,
    /// External subject id of the owning user.
    pub owner_id: String,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

/// A row from the `slides` table.
#[derive(Debug, Clone, Queryable, Identifiable, Associations)]
#[diesel(belongs_to(PresentationRow, foreign_key = presentation_id))]
#[diesel(table_name = slides)]
pub struct SlideRow {
    /// Slide identifier.
    pub id: Uuid,
    /// Owning presentation.
    pub presentation_id: Uuid,
    /// 1-based position within the deck.
    pub position: i32,
    /// Text extracted from the slide.
    pub extracted_text: Option<String>,
    /// MIME type of the rendered slide image.
    pub image_mime: Option<String>,
    /// Base64 payload of the rendered slide image.
    pub image_base64: Option<String>,
    /// The `simple` narration variant.
    pub script_simple: Option<String>,
    /// The `medium` narration variant.
    pub script_medium: Option<String>,
    /// The `pro` narration variant.
    pub script_pro: Option<String>,
}

/// Insertable presentation row.
#[derive(Debug, Insertable)]
#[diesel(table_name = presentations)]
pub struct NewPresentationRow {
    /// Presentation identifier.
    pub id: Uuid,
    /// Display file name from the upload.
    pub file_name: String,
    /// Deduplication key derived from slide content.
    pub content_hash: String,
    /// External subject id of the owning user.
    pub owner_id: String,
}

/// Insertable slide row.
#[derive(Debug, Insertable)]
#[diesel(table_name = slides)]
pub struct NewSlideRow {
    /// Slide identifier.
    pub id: Uuid,
    /// Owning presentation.
    pub presentation_id: Uuid,
    /// 1-based position within the deck.
    pub position: i32,
    /// Text extracted from the slide.
    pub extracted_text: Option<String>,
    /// MIME type of the rendered slide image.
    pub image_mime: Option<String>,
    /// Base64 payload of the rendered slide image.
    pub image_base64: Option<String>,
}

impl From<SlideRow> for Slide {
    fn from(row: SlideRow) -> Self {
        let image = match (row.image_mime, row.image_base64) {
            (Some(mime), Some(base64)) => Some(SlideImage { mime, base64 }),
            _ => None,
        };
        Slide {
            id: row.id,
            position: row.position,
            extracted_text: row.extracted_text,
            image,
            script_simple: row.script_simple,
            script_medium: row.script_medium,
            script_pro: row.script_pro,
        }
    }
}

/// Assemble a domain presentation from its row and ordered slide rows.
pub(crate) fn rows_to_presentation(
    row: PresentationRow,
    slide_rows: Vec<SlideRow>,
) -> Presentation {
    Presentation {
        id: row.id,
        file_name: row.file_name,
        content_hash: row.content_hash,
        owner_id: row.owner_id,
        slides: slide_rows.into_iter().map(Slide::from).collect(),
    }
}
