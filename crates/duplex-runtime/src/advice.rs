//! Printing advice collaborator
//!
//! The hosted assistant is reached through [`PrintingAdvisor`], so the
//! worker never depends on a particular client or on the network.

use async_trait::async_trait;
use duplex_impose::ImpositionSettings;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdviceError {
    #[error("No credentials configured for the printing assistant")]
    MissingCredentials,
    #[error("Printing assistant unavailable: {0}")]
    RemoteUnavailable(String),
}

impl AdviceError {
    /// Message suitable for the chat panel
    pub fn user_message(&self) -> String {
        match self {
            AdviceError::MissingCredentials => {
                "API key not found. Please configure the environment variable.".to_string()
            }
            AdviceError::RemoteUnavailable(_) => {
                "Sorry, there was an error connecting to the printing assistant.".to_string()
            }
        }
    }
}

/// Answers calibration questions given the current settings.
///
/// `context` is extra free text sent along with the question; it may be
/// empty.
#[async_trait]
pub trait PrintingAdvisor: Send + Sync {
    async fn advise(
        &self,
        query: &str,
        context: &str,
        settings: &ImpositionSettings,
    ) -> Result<String, AdviceError>;
}

/// User turn for an advisor: the additional context followed by the question
pub fn advice_prompt(query: &str, context: &str) -> String {
    format!(
        "Additional context: {}\n\nUser question: {}",
        context, query
    )
}

/// System instruction for an advisor, carrying a snapshot of `settings`
pub fn advisor_instructions(settings: &ImpositionSettings) -> String {
    format!(
        "You are a prepress engineer specialized in print-and-play board games.\n\
         Help the user impose A4 pages onto A3 sheets for duplex printing.\n\
         \n\
         Current settings:\n\
         - Output format: A3\n\
         - X offset: {}mm\n\
         - Y offset: {}mm\n\
         - Scale: {}%\n\
         - Gutter: {}mm\n\
         - Duplex correction: {}mm\n\
         \n\
         Advice you usually give:\n\
         1. For front/back alignment, adjust the X offset if the printer \
         shifts the sheet when turning it over.\n\
         2. Print a single test sheet before the whole deck.\n\
         3. Measure misalignment with a ruler in mm and enter that value in the settings.\n\
         \n\
         Answer concisely, technical but friendly, in Spanish.",
        settings.x_offset_mm,
        settings.y_offset_mm,
        settings.scale * 100.0,
        settings.gutter_mm,
        settings.duplex_correction_mm,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_carry_settings() {
        let settings = ImpositionSettings::default()
            .with_x_offset_mm(1.5)
            .with_y_offset_mm(-2.0)
            .with_scale(0.5)
            .with_gutter_mm(4.0)
            .with_duplex_correction_mm(0.25);
        let text = advisor_instructions(&settings);

        assert!(text.contains("Output format: A3"));
        assert!(text.contains("X offset: 1.5mm"));
        assert!(text.contains("Y offset: -2mm"));
        assert!(text.contains("Scale: 50%"));
        assert!(text.contains("Gutter: 4mm"));
        assert!(text.contains("Duplex correction: 0.25mm"));
    }

    #[test]
    fn test_instructions_keep_offset_tip() {
        let text = advisor_instructions(&ImpositionSettings::default());
        assert!(text.contains("adjust the X offset if the printer shifts the sheet"));
        assert!(text.contains("Print a single test sheet"));
    }

    #[test]
    fn test_prompt_carries_context_and_query() {
        assert_eq!(
            advice_prompt("backs drift 2mm", "deck of 54 cards"),
            "Additional context: deck of 54 cards\n\nUser question: backs drift 2mm"
        );
        assert!(advice_prompt("help", "").ends_with("User question: help"));
    }

    #[test]
    fn test_user_messages() {
        assert!(
            AdviceError::RemoteUnavailable("timeout".into())
                .user_message()
                .contains("printing assistant")
        );
        assert!(
            AdviceError::MissingCredentials
                .user_message()
                .contains("API key")
        );
    }
}
