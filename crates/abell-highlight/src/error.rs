use syntect::parsing::ParseSyntaxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("Failed to load grammar for '{language}': {source}")]
    Grammar {
        language: String,
        #[source]
        source: ParseSyntaxError,
    },

    #[error("Grammar '{grammar}' for '{language}' is not available")]
    UnknownGrammar { language: String, grammar: String },

    #[error("Alias '{alias}' points to unregistered language '{language}'")]
    UnknownLanguage { alias: String, language: String },

    #[error("Theme '{0}' is not available")]
    UnknownTheme(String),

    #[error(transparent)]
    Render(#[from] syntect::Error),
}
