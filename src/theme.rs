use rand::seq::IndexedRandom;
use std::collections::HashMap;

/// Theme data bundled with the crate.
const BUNDLED_PHRASES: &str = include_str!("../data/theme_phrases.json");

/// Lookup from theme name to its list of prompt phrases.
///
/// Construction never fails: malformed or empty data is downgraded to a
/// single fallback theme so the session can always draw a prompt.
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    themes: Vec<String>,
    phrases: HashMap<String, Vec<String>>,
}

impl ThemeProvider {
    /// Load the theme data shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_json_str(BUNDLED_PHRASES)
    }

    /// Parse a `name -> [phrases]` JSON object.
    pub fn from_json_str(raw: &str) -> Self {
        match serde_json::from_str::<HashMap<String, Vec<String>>>(raw) {
            Ok(phrases) if !phrases.is_empty() => {
                let themes = phrases.keys().cloned().collect();
                Self { themes, phrases }
            }
            Ok(_) => {
                tracing::error!("Theme data contains no themes, using fallback dataset");
                Self::fallback()
            }
            Err(e) => {
                tracing::error!("Failed to parse theme data: {}, using fallback dataset", e);
                Self::fallback()
            }
        }
    }

    fn fallback() -> Self {
        let mut phrases = HashMap::new();
        phrases.insert("Test".to_string(), vec!["No themes available".to_string()]);
        Self {
            themes: vec!["Test".to_string()],
            phrases,
        }
    }

    /// Names of all available themes.
    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    /// Phrases for a theme; empty when the theme is unknown.
    pub fn phrases_for(&self, theme: &str) -> &[String] {
        self.phrases.get(theme).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Uniformly random phrase for a theme, `None` when it has no phrases.
    pub fn random_phrase(&self, theme: &str) -> Option<&str> {
        self.phrases_for(theme)
            .choose(&mut rand::rng())
            .map(String::as_str)
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::bundled()
    }
}
