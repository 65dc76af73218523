//! Content-hash deduplication key for uploaded decks.

use prompteur_interface::NewSlide;
use sha2::{Digest, Sha256};

/// Compute the deduplication fingerprint for a deck's slide content.
///
/// A pure function of the normalized `(position, text)` pairs: the same
/// deck content always hashes to the same key, so re-uploading an
/// identical deck resolves to the existing presentation instead of
/// creating a duplicate. Computed only at creation time.
pub fn deck_fingerprint(slides: &[NewSlide]) -> String {
    let mut hasher = Sha256::new();
    for slide in slides {
        hasher.update(slide.position.to_be_bytes());
        hasher.update([0x1f]);
        if let Some(text) = &slide.extracted_text {
            hasher.update(text.trim().as_bytes());
        }
        hasher.update([0x1e]);
    }
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(position: i32, text: &str) -> NewSlide {
        NewSlide {
            position,
            extracted_text: Some(text.to_string()),
            image: None,
        }
    }

    #[test]
    fn identical_content_hashes_identically() {
        let a = vec![slide(1, "Intro"), slide(2, "Results")];
        let b = vec![slide(1, "Intro"), slide(2, "Results")];
        assert_eq!(deck_fingerprint(&a), deck_fingerprint(&b));
    }

    #[test]
    fn surrounding_whitespace_is_normalized() {
        let a = vec![slide(1, "Intro")];
        let b = vec![slide(1, "  Intro  ")];
        assert_eq!(deck_fingerprint(&a), deck_fingerprint(&b));
    }

    #[test]
    fn position_changes_the_fingerprint() {
        let a = vec![slide(1, "Intro"), slide(2, "Results")];
        let b = vec![slide(2, "Intro"), slide(1, "Results")];
        assert_ne!(deck_fingerprint(&a), deck_fingerprint(&b));
    }

    #[test]
    fn text_changes_the_fingerprint() {
        let a = vec![slide(1, "Intro")];
        let b = vec![slide(1, "Outro")];
        assert_ne!(deck_fingerprint(&a), deck_fingerprint(&b));
    }

    #[test]
    fn missing_text_differs_from_empty_deck() {
        let a = vec![NewSlide {
            position: 1,
            extracted_text: None,
            image: None,
        }];
        let b: Vec<NewSlide> = vec![];
        assert_ne!(deck_fingerprint(&a), deck_fingerprint(&b));
    }
}
