//! Single-call batched generation helpers.
//!
//! The batched variant trades per-slide isolation for one API round trip:
//! every slide's (truncated) text goes into one combined prompt, the
//! backend returns all narrations joined by a fixed separator token, and
//! the response is split and zipped back onto slides positionally.

use prompteur_core::{Input, MediaSource};
use prompteur_interface::{GenerationConfig, Slide};

use crate::PromptLibrary;

/// Separator token the backend is instructed to place between narrations.
pub const BATCH_SEPARATOR: &str = "@@---@@";

/// Per-slide text budget inside the combined prompt.
const MAX_SLIDE_CHARS: usize = 1500;

/// Filler line for trailing slides when the response is short.
pub(crate) const SHORT_RESPONSE_FILLER: &str =
    "Let's move on and keep going through the presentation.";

/// Truncate to a character budget without splitting a code point.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build the combined user-prompt parts for a whole deck.
///
/// Returns one text part followed by any slide images, in slide order.
pub(crate) fn combined_parts(
    slides: &[Slide],
    config: &GenerationConfig,
    prompts: &PromptLibrary,
) -> Vec<Input> {
    let mut text = format!(
        "Write one narration script for EACH of the {} slides below, in order. \
         Separate consecutive narrations with a line containing exactly {} and \
         nothing else. {}\n",
        slides.len(),
        BATCH_SEPARATOR,
        prompts.length_instruction(config.length),
    );

    let mut parts = Vec::new();
    for slide in slides {
        let slide_text = slide
            .extracted_text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(prompts.missing_text_placeholder.as_str());
        text.push_str(&format!(
            "\nSlide {}:\n{}\n",
            slide.position,
            truncate_chars(slide_text, MAX_SLIDE_CHARS)
        ));
        if let Some(image) = &slide.image {
            parts.push(Input::Image {
                mime: Some(image.mime.clone()),
                source: MediaSource::Base64(image.base64.clone()),
            });
        }
    }

    text.push_str(
        "\nREMINDER: Return ONLY the scripts to speak aloud, separated by the \
         separator line, with no titles and no commentary.",
    );

    parts.insert(0, Input::Text(text));
    parts
}

/// Split a batched response into exactly `expected` narrations.
///
/// Segments are trimmed; empty or missing trailing segments become the
/// generic filler line rather than an error, and surplus segments are
/// dropped.
pub(crate) fn split_response(response: &str, expected: usize) -> Vec<String> {
    let mut segments: Vec<String> = response
        .split(BATCH_SEPARATOR)
        .map(|segment| segment.trim().to_string())
        .collect();

    segments.truncate(expected);
    for segment in &mut segments {
        if segment.is_empty() {
            *segment = SHORT_RESPONSE_FILLER.to_string();
        }
    }
    while segments.len() < expected {
        segments.push(SHORT_RESPONSE_FILLER.to_string());
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_splits_on_the_separator() {
        let response = format!("First.\n{}\nSecond.\n{}\nThird.", BATCH_SEPARATOR, BATCH_SEPARATOR);
        let segments = split_response(&response, 3);
        assert_eq!(segments, vec!["First.", "Second.", "Third."]);
    }

    #[test]
    fn short_responses_are_padded_with_the_filler() {
        let response = format!("First.\n{}\nSecond.", BATCH_SEPARATOR);
        let segments = split_response(&response, 4);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], "First.");
        assert_eq!(segments[1], "Second.");
        assert_eq!(segments[2], SHORT_RESPONSE_FILLER);
        assert_eq!(segments[3], SHORT_RESPONSE_FILLER);
    }

    #[test]
    fn surplus_segments_are_dropped() {
        let response = format!("A{}B{}C", BATCH_SEPARATOR, BATCH_SEPARATOR);
        let segments = split_response(&response, 2);
        assert_eq!(segments, vec!["A", "B"]);
    }

    #[test]
    fn empty_segments_become_filler() {
        let response = format!("A{}{}C", BATCH_SEPARATOR, BATCH_SEPARATOR);
        let segments = split_response(&response, 3);
        assert_eq!(segments[1], SHORT_RESPONSE_FILLER);
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 5), "héllo");
        assert_eq!(truncate_chars(text, 100), text);
    }
}
