//! Shared domain types for presentations, slides, and generation runs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Narration style requested by the caller.
///
/// Wire values follow the original product vocabulary: `simple`, `normal`,
/// `pro`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScriptStyle {
    /// Plain, accessible delivery.
    Simple,
    /// Balanced, conversational but professional delivery.
    Normal,
    /// Authoritative, analytical delivery with sustained vocabulary.
    Pro,
}

/// Narration length requested by the caller.
///
/// Wire values keep the original French vocabulary (`court`, `moyen`,
/// `long`); English aliases are accepted on input.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScriptLength {
    /// Elevator pitch, roughly 50 words, three sentences at most.
    #[serde(alias = "short")]
    Court,
    /// Standard narration, roughly 120 words (~45 seconds spoken).
    #[serde(alias = "medium")]
    Moyen,
    /// In-depth narration, roughly 200 words.
    Long,
}

/// The narration slot a generation run writes into.
///
/// Exactly one slot is written per run; the mapping from [`ScriptStyle`]
/// is resolved once, here, so no other layer deals in field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NarrationSlot {
    /// The `simple` script variant.
    Simple,
    /// The `medium` script variant (written for the `normal` style).
    Medium,
    /// The `pro` script variant.
    Pro,
}

impl From<ScriptStyle> for NarrationSlot {
    fn from(style: ScriptStyle) -> Self {
        match style {
            ScriptStyle::Simple => NarrationSlot::Simple,
            ScriptStyle::Normal => NarrationSlot::Medium,
            ScriptStyle::Pro => NarrationSlot::Pro,
        }
    }
}

/// Per-run generation configuration supplied by the caller.
///
/// Not persisted as an entity; only its effect (the written narration) is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Requested style tier.
    pub style: ScriptStyle,
    /// Requested length tier.
    pub length: ScriptLength,
}

impl GenerationConfig {
    /// The narration slot this configuration writes into.
    pub fn slot(&self) -> NarrationSlot {
        self.style.into()
    }
}

/// A rendered slide raster, as extracted at upload time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideImage {
    /// MIME type, e.g., "image/png".
    pub mime: String,
    /// Base64-encoded image data.
    pub base64: String,
}

/// One slide of a presentation, with its three narration slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide identifier.
    pub id: Uuid,
    /// 1-based position within the deck; defines narration order.
    pub position: i32,
    /// Text extracted from the slide (may be absent for visual slides).
    pub extracted_text: Option<String>,
    /// Rendered slide image, when extraction produced one.
    pub image: Option<SlideImage>,
    /// The `simple` narration variant.
    pub script_simple: Option<String>,
    /// The `medium` narration variant.
    pub script_medium: Option<String>,
    /// The `pro` narration variant.
    pub script_pro: Option<String>,
}

impl Slide {
    /// Read the narration stored in a slot.
    pub fn script(&self, slot: NarrationSlot) -> Option<&str> {
        match slot {
            NarrationSlot::Simple => self.script_simple.as_deref(),
            NarrationSlot::Medium => self.script_medium.as_deref(),
            NarrationSlot::Pro => self.script_pro.as_deref(),
        }
    }

    /// Write narration into a slot, replacing any previous value there.
    pub fn set_script(&mut self, slot: NarrationSlot, text: impl Into<String>) {
        let text = text.into();
        match slot {
            NarrationSlot::Simple => self.script_simple = Some(text),
            NarrationSlot::Medium => self.script_medium = Some(text),
            NarrationSlot::Pro => self.script_pro = Some(text),
        }
    }
}

/// A presentation and its ordered slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    /// Presentation identifier.
    pub id: Uuid,
    /// Display file name from the upload.
    pub file_name: String,
    /// Deduplication key derived from slide content.
    pub content_hash: String,
    /// External subject id of the owning user.
    pub owner_id: String,
    /// Slides ordered by ascending position.
    pub slides: Vec<Slide>,
}

/// Input for creating one slide at upload time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSlide {
    /// 1-based position within the deck.
    pub position: i32,
    /// Text extracted from the slide.
    pub extracted_text: Option<String>,
    /// Rendered slide image.
    pub image: Option<SlideImage>,
}

/// Input for creating a presentation with its slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDeck {
    /// Display file name from the upload.
    pub file_name: String,
    /// External subject id of the owning user.
    pub owner_id: String,
    /// Slides in upload order.
    pub slides: Vec<NewSlide>,
}

/// Outcome of one generation run over a deck.
///
/// A run reports success once every slide has been attempted; `failed`
/// counts slides whose narration could not be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Number of slides in the deck.
    pub total: usize,
    /// Slides whose narration was written.
    pub written: usize,
    /// Slides skipped after a persistence failure.
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_maps_to_exactly_one_slot() {
        assert_eq!(NarrationSlot::from(ScriptStyle::Simple), NarrationSlot::Simple);
        assert_eq!(NarrationSlot::from(ScriptStyle::Normal), NarrationSlot::Medium);
        assert_eq!(NarrationSlot::from(ScriptStyle::Pro), NarrationSlot::Pro);
    }

    #[test]
    fn length_accepts_english_aliases() {
        let length: ScriptLength = serde_json::from_str("\"short\"").unwrap();
        assert_eq!(length, ScriptLength::Court);
        let length: ScriptLength = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(length, ScriptLength::Moyen);
        let length: ScriptLength = serde_json::from_str("\"moyen\"").unwrap();
        assert_eq!(length, ScriptLength::Moyen);
    }

    #[test]
    fn slot_write_leaves_other_slots_untouched() {
        let mut slide = Slide {
            id: Uuid::new_v4(),
            position: 1,
            extracted_text: Some("Agenda".to_string()),
            image: None,
            script_simple: None,
            script_medium: Some("existing".to_string()),
            script_pro: None,
        };

        slide.set_script(NarrationSlot::Pro, "new pro script");

        assert_eq!(slide.script(NarrationSlot::Pro), Some("new pro script"));
        assert_eq!(slide.script(NarrationSlot::Medium), Some("existing"));
        assert_eq!(slide.script(NarrationSlot::Simple), None);
    }
}
