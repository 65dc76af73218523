//! In-memory implementation of SlideStore for testing.
//!
//! A simple HashMap-based store useful for unit tests and for exercising
//! the orchestrator without a database. All data is lost when the store is
//! dropped.

use async_trait::async_trait;
use prompteur_error::{NarrationError, NarrationErrorKind, PrompteurResult};
use prompteur_interface::{
    NarrationSlot, NewDeck, Presentation, Slide, SlideStore,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory slide store.
///
/// Stores presentations in a HashMap protected by an RwLock for
/// thread-safe access.
///
/// # Example
/// ```
/// use prompteur_narration::InMemorySlideStore;
/// use prompteur_interface::{NewDeck, NewSlide, SlideStore};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = InMemorySlideStore::new();
/// let deck = NewDeck {
///     file_name: "demo.pdf".to_string(),
///     owner_id: "user-1".to_string(),
///     slides: vec![NewSlide { position: 1, extracted_text: None, image: None }],
/// };
/// let id = store.create_deck(&deck).await?;
/// assert_eq!(store.fetch_deck(id).await?.slides.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySlideStore {
    decks: Arc<RwLock<HashMap<Uuid, Presentation>>>,
}

impl InMemorySlideStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed presentation (for tests).
    pub async fn insert(&self, presentation: Presentation) {
        self.decks
            .write()
            .await
            .insert(presentation.id, presentation);
    }

    /// Number of stored presentations (for tests).
    pub async fn len(&self) -> usize {
        self.decks.read().await.len()
    }

    /// Whether the store is empty (for tests).
    pub async fn is_empty(&self) -> bool {
        self.decks.read().await.is_empty()
    }

    /// Content key used for dedup: the normalized slide content.
    fn content_key(deck: &NewDeck) -> String {
        deck.slides
            .iter()
            .map(|slide| {
                format!(
                    "{}:{}",
                    slide.position,
                    slide.extracted_text.as_deref().unwrap_or("").trim()
                )
            })
            .collect::<Vec<_>>()
            .join("\u{1e}")
    }
}

#[async_trait]
impl SlideStore for InMemorySlideStore {
    async fn fetch_deck(&self, id: Uuid) -> PrompteurResult<Presentation> {
        let decks = self.decks.read().await;
        let mut deck = decks
            .get(&id)
            .cloned()
            .ok_or_else(|| {
                NarrationError::new(NarrationErrorKind::PresentationNotFound(id.to_string()))
            })?;
        deck.slides.sort_by_key(|slide| slide.position);
        Ok(deck)
    }

    async fn create_deck(&self, deck: &NewDeck) -> PrompteurResult<Uuid> {
        let content_hash = Self::content_key(deck);
        let mut decks = self.decks.write().await;

        if let Some(existing) = decks
            .values()
            .find(|p| p.owner_id == deck.owner_id && p.content_hash == content_hash)
        {
            return Ok(existing.id);
        }

        let id = Uuid::new_v4();
        let slides = deck
            .slides
            .iter()
            .map(|slide| Slide {
                id: Uuid::new_v4(),
                position: slide.position,
                extracted_text: slide.extracted_text.clone(),
                image: slide.image.clone(),
                script_simple: None,
                script_medium: None,
                script_pro: None,
            })
            .collect();

        decks.insert(
            id,
            Presentation {
                id,
                file_name: deck.file_name.clone(),
                content_hash,
                owner_id: deck.owner_id.clone(),
                slides,
            },
        );
        Ok(id)
    }

    async fn find_slide(&self, slide_id: Uuid) -> PrompteurResult<Slide> {
        let decks = self.decks.read().await;
        decks
            .values()
            .flat_map(|deck| deck.slides.iter())
            .find(|slide| slide.id == slide_id)
            .cloned()
            .ok_or_else(|| {
                NarrationError::new(NarrationErrorKind::SlideNotFound(slide_id.to_string()))
                    .into()
            })
    }

    async fn write_script(
        &self,
        slide_id: Uuid,
        slot: NarrationSlot,
        text: &str,
    ) -> PrompteurResult<()> {
        let mut decks = self.decks.write().await;
        for deck in decks.values_mut() {
            if let Some(slide) = deck.slides.iter_mut().find(|slide| slide.id == slide_id) {
                slide.set_script(slot, text);
                return Ok(());
            }
        }
        Err(NarrationError::new(NarrationErrorKind::SlideNotFound(slide_id.to_string())).into())
    }

    async fn delete_deck(&self, id: Uuid, owner_id: &str) -> PrompteurResult<()> {
        let mut decks = self.decks.write().await;
        match decks.get(&id) {
            Some(deck) if deck.owner_id == owner_id => {
                decks.remove(&id);
                Ok(())
            }
            _ => Err(
                NarrationError::new(NarrationErrorKind::PresentationNotFound(id.to_string()))
                    .into(),
            ),
        }
    }
}
