//! Syntax highlighting for the Abell documentation site
//!
//! [`register_syntax_highlighter`] builds the highlighter used by the docs
//! code-block renderer. Call it once at startup and pass the returned
//! [`Highlighter`] to the renderer; every call builds a fresh instance.
//!
//! ```ignore
//! let highlighter = abell_highlight::register_syntax_highlighter()?;
//! let html = highlighter.highlight_html("{{ 1 + 1 }}", "abell")?;
//! ```

mod error;
pub mod registry;

pub use error::HighlightError;
pub use registry::{Grammar, Highlighter, HighlighterBuilder, DEFAULT_THEME};

/// Grammar for `.abell` files
pub const ABELL_GRAMMAR: &str = include_str!("grammars/abell.sublime-syntax");

/// Register the languages used in the docs and return the configured
/// highlighter.
///
/// The engine ships no TypeScript grammar, so `ts` uses the JavaScript one.
pub fn register_syntax_highlighter() -> Result<Highlighter, HighlightError> {
    HighlighterBuilder::new()
        .register_language("ts", Grammar::Bundled("JavaScript"))
        .register_language("javascript", Grammar::Bundled("JavaScript"))
        .register_language("mdx", Grammar::Bundled("Markdown"))
        .register_language("md", Grammar::Bundled("Markdown"))
        .register_alias("js", "javascript")
        .register_language("json", Grammar::Bundled("JSON"))
        .register_language("xml", Grammar::Bundled("XML"))
        .register_language("abell", Grammar::Custom(ABELL_GRAMMAR))
        .register_language("css", Grammar::Bundled("CSS"))
        .build()
}
