//! Prompt assembly for per-slide narration.
//!
//! All instruction text lives here as injected configuration rather than
//! module constants, so tests can substitute deterministic variants and the
//! wording can evolve without touching orchestration.

use prompteur_interface::{GenerationConfig, ScriptLength, ScriptStyle};
use serde::{Deserialize, Serialize};

/// The instruction tables used to assemble narration prompts.
///
/// `Default` carries the production wording; every field can be overridden
/// at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptLibrary {
    /// Persona for the `simple` style tier.
    pub persona_simple: String,
    /// Persona for the `normal` style tier.
    pub persona_normal: String,
    /// Persona for the `pro` style tier.
    pub persona_pro: String,
    /// Formatting rules appended to every system instruction.
    pub format_rules: String,
    /// Length instruction for the `court` tier.
    pub length_court: String,
    /// Length instruction for the `moyen` tier.
    pub length_moyen: String,
    /// Length instruction for the `long` tier.
    pub length_long: String,
    /// Instruction appended when a rendered slide image is attached.
    pub image_instruction: String,
    /// Substituted for slides whose extraction produced no text.
    pub missing_text_placeholder: String,
    /// Returned when every model in the cascade fails for a slide.
    pub failure_placeholder: String,
}

impl Default for PromptLibrary {
    fn default() -> Self {
        Self {
            persona_simple: "You are a speaking coach who writes in a simple, direct style \
                that is easy to follow for any audience."
                .to_string(),
            persona_normal: "You are a speaking coach who writes in an engaging, \
                conversational and professional style."
                .to_string(),
            persona_pro: "You are a speaking coach who writes in a highly professional, \
                detailed style, with solid arguments and sustained vocabulary."
                .to_string(),
            format_rules: "Your mission is to write a punchy narration script for one \
                SPECIFIC slide within a complete presentation. Write continuous spoken \
                prose: no bullet lists, no stage directions in parentheses, no section \
                labels. Oral punctuation is welcome. Do not introduce yourself, and do \
                not start every slide with a greeting; keep continuity between slides."
                .to_string(),
            length_court: "The script must be concise (about 50 words, three sentences \
                at most — an elevator pitch)."
                .to_string(),
            length_moyen: "The script must have a standard length (about 120 words, \
                roughly 45 seconds spoken)."
                .to_string(),
            length_long: "The script must be detailed (about 200 words, an in-depth \
                treatment)."
                .to_string(),
            image_instruction: "The slide's rendered image is attached. Describe \
                visually salient content such as charts and key figures inline in the \
                narration."
                .to_string(),
            missing_text_placeholder: "This slide is mostly visual and contains no text."
                .to_string(),
            failure_placeholder: "Sorry, narration generation failed for this slide \
                despite several attempts."
                .to_string(),
        }
    }
}

impl PromptLibrary {
    /// The persona for a style tier.
    pub fn persona(&self, style: ScriptStyle) -> &str {
        match style {
            ScriptStyle::Simple => &self.persona_simple,
            ScriptStyle::Normal => &self.persona_normal,
            ScriptStyle::Pro => &self.persona_pro,
        }
    }

    /// The length instruction for a length tier.
    pub fn length_instruction(&self, length: ScriptLength) -> &str {
        match length {
            ScriptLength::Court => &self.length_court,
            ScriptLength::Moyen => &self.length_moyen,
            ScriptLength::Long => &self.length_long,
        }
    }

    /// The system-level instruction: persona plus formatting rules.
    pub fn system_instruction(&self, style: ScriptStyle) -> String {
        format!("{} {}", self.persona(style), self.format_rules)
    }

    /// The structural instruction for a slide's position in the deck.
    ///
    /// Three cases: the first slide opens the presentation, the last slide
    /// closes it, and interior slides must not greet and must transition.
    pub fn position_instruction(&self, position: i32, total: usize) -> String {
        if position <= 1 {
            "This is the very first slide. Open with a hook that introduces the \
             topic of the presentation, then present this slide's content."
                .to_string()
        } else if position as usize >= total {
            "This is the last slide. Transition from the previous slide, present \
             this slide's content, then close the whole presentation with a strong \
             conclusion and thank the audience."
                .to_string()
        } else {
            "This is an interior slide. Do NOT open with a greeting. Start with an \
             explicit transition from the previous slide and finish by leading into \
             the next one."
                .to_string()
        }
    }

    /// Assemble the user prompt for one slide.
    ///
    /// `with_image` appends the image instruction; the image itself is
    /// attached as a separate input part by the generator.
    pub fn user_prompt(
        &self,
        text: &str,
        position: i32,
        total: usize,
        config: &GenerationConfig,
        with_image: bool,
    ) -> String {
        let mut prompt = format!(
            "Here are the details of the slide to narrate:\n\
             - Context: you are writing the script for slide {position} of {total}.\n\
             - Position instruction: {}\n\
             - Raw slide text: \"{text}\"\n\
             - Requested length: {}\n",
            self.position_instruction(position, total),
            self.length_instruction(config.length),
        );

        if with_image {
            prompt.push_str("- ");
            prompt.push_str(&self.image_instruction);
            prompt.push('\n');
        }

        prompt.push_str(
            "\nREMINDER: Return ONLY the script to speak aloud, with no title and no \
             commentary.",
        );
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompteur_interface::{GenerationConfig, ScriptLength, ScriptStyle};

    fn config() -> GenerationConfig {
        GenerationConfig {
            style: ScriptStyle::Simple,
            length: ScriptLength::Court,
        }
    }

    #[test]
    fn first_slide_gets_the_introduction_variant() {
        let prompts = PromptLibrary::default();
        let instruction = prompts.position_instruction(1, 5);
        assert!(instruction.contains("first slide"));
        assert!(instruction.contains("introduces the topic"));
    }

    #[test]
    fn last_slide_gets_the_closing_variant() {
        let prompts = PromptLibrary::default();
        let instruction = prompts.position_instruction(5, 5);
        assert!(instruction.contains("last slide"));
        assert!(instruction.contains("thank the audience"));
    }

    #[test]
    fn interior_slides_forbid_greetings_and_require_transitions() {
        let prompts = PromptLibrary::default();
        let instruction = prompts.position_instruction(3, 5);
        assert!(instruction.contains("Do NOT open with a greeting"));
        assert!(instruction.contains("transition"));
    }

    #[test]
    fn single_slide_deck_is_treated_as_a_first_slide() {
        let prompts = PromptLibrary::default();
        let instruction = prompts.position_instruction(1, 1);
        assert!(instruction.contains("first slide"));
    }

    #[test]
    fn image_instruction_only_appears_when_an_image_is_attached() {
        let prompts = PromptLibrary::default();
        let without = prompts.user_prompt("Revenue chart", 2, 4, &config(), false);
        let with = prompts.user_prompt("Revenue chart", 2, 4, &config(), true);
        assert!(!without.contains("rendered image is attached"));
        assert!(with.contains("rendered image is attached"));
    }

    #[test]
    fn length_tier_selects_the_word_budget() {
        let prompts = PromptLibrary::default();
        assert!(prompts.length_instruction(ScriptLength::Court).contains("50 words"));
        assert!(prompts.length_instruction(ScriptLength::Moyen).contains("120 words"));
        assert!(prompts.length_instruction(ScriptLength::Long).contains("200 words"));
    }
}
