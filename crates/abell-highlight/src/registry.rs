//! Grammar registration and lookup

use crate::error::HighlightError;
use std::collections::HashMap;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxDefinition, SyntaxReference, SyntaxSet};

/// Theme used when none is configured
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Where a language's grammar comes from
#[derive(Debug, Clone, Copy)]
pub enum Grammar {
    /// Grammar bundled with the engine, by syntax name (e.g. `"JavaScript"`)
    Bundled(&'static str),
    /// `.sublime-syntax` source
    Custom(&'static str),
}

/// Collects languages and aliases, then builds a [`Highlighter`]
#[derive(Debug, Clone)]
pub struct HighlighterBuilder {
    languages: Vec<(String, Grammar)>,
    aliases: Vec<(String, String)>,
    theme: String,
}

impl Default for HighlighterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlighterBuilder {
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            aliases: Vec::new(),
            theme: DEFAULT_THEME.to_string(),
        }
    }

    /// Register `name` as a code-block language highlighted with `grammar`
    pub fn register_language(mut self, name: &str, grammar: Grammar) -> Self {
        self.languages.push((name.to_lowercase(), grammar));
        self
    }

    /// Make `alias` resolve to the registered language `language`
    pub fn register_alias(mut self, alias: &str, language: &str) -> Self {
        self.aliases.push((alias.to_lowercase(), language.to_lowercase()));
        self
    }

    pub fn theme(mut self, theme: &str) -> Self {
        self.theme = theme.to_string();
        self
    }

    pub fn build(self) -> Result<Highlighter, HighlightError> {
        let mut builder = SyntaxSet::load_defaults_newlines().into_builder();
        let mut languages = HashMap::new();

        for (name, grammar) in &self.languages {
            let syntax_name = match grammar {
                Grammar::Bundled(syntax) => syntax.to_string(),
                Grammar::Custom(source) => {
                    let definition =
                        SyntaxDefinition::load_from_str(source, true, Some(name.as_str()))
                            .map_err(|e| HighlightError::Grammar {
                                language: name.clone(),
                                source: e,
                            })?;
                    let syntax_name = definition.name.clone();
                    builder.add(definition);
                    syntax_name
                }
            };
            languages.insert(name.clone(), syntax_name);
        }

        let syntax_set = builder.build();

        for (language, grammar) in &languages {
            if syntax_set.find_syntax_by_name(grammar).is_none() {
                return Err(HighlightError::UnknownGrammar {
                    language: language.clone(),
                    grammar: grammar.clone(),
                });
            }
        }

        let mut aliases = HashMap::new();
        for (alias, language) in self.aliases {
            if !languages.contains_key(&language) {
                return Err(HighlightError::UnknownLanguage { alias, language });
            }
            aliases.insert(alias, language);
        }

        let theme = ThemeSet::load_defaults()
            .themes
            .remove(&self.theme)
            .ok_or_else(|| HighlightError::UnknownTheme(self.theme.clone()))?;

        Ok(Highlighter {
            syntax_set,
            theme,
            languages,
            aliases,
        })
    }
}

/// A configured highlighting engine, handed to whatever renders code blocks
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
    /// language name -> syntax name
    languages: HashMap<String, String>,
    /// alias -> language name
    aliases: HashMap<String, String>,
}

impl Highlighter {
    pub fn syntax_set(&self) -> &SyntaxSet {
        &self.syntax_set
    }

    /// Whether `language` (or an alias of it) is registered
    pub fn supports(&self, language: &str) -> bool {
        self.syntax_for(language).is_some()
    }

    /// Grammar used for a code-block language tag
    pub fn syntax_for(&self, language: &str) -> Option<&SyntaxReference> {
        let language = language.trim().to_lowercase();
        let language = self.aliases.get(&language).unwrap_or(&language);
        let syntax_name = self.languages.get(language)?;
        self.syntax_set.find_syntax_by_name(syntax_name)
    }

    /// Render a code block to HTML. Unregistered languages are rendered as
    /// plain text.
    pub fn highlight_html(&self, code: &str, language: &str) -> Result<String, HighlightError> {
        let syntax = self
            .syntax_for(language)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        Ok(highlighted_html_for_string(
            code,
            &self.syntax_set,
            syntax,
            &self.theme,
        )?)
    }
}
