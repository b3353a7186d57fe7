//! Interface translation for pager labels.

use serde::{Deserialize, Serialize};

/// Looks up the translation of an interface string.
pub trait Translator {
    /// Translated form of `source`, or `source` itself when unknown.
    fn translate(&self, source: &str) -> String;

    /// Translates `source` and substitutes `@name` placeholders.
    fn format(&self, source: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.translate(source), |text, &(placeholder, value)| {
                text.replace(placeholder, value)
            })
    }
}

/// One source string and its translation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub source: String,
    pub translation: String,
}

/// Translations for a single language.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub langcode: String,
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Catalog without entries; every string is returned untranslated.
    pub fn source_language() -> Self {
        Self {
            langcode: "en".to_string(),
            entries: Vec::new(),
        }
    }
}

impl Translator for Catalog {
    fn translate(&self, source: &str) -> String {
        self.entries
            .iter()
            .find(|entry| entry.source == source)
            .map(|entry| entry.translation.clone())
            .unwrap_or_else(|| source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german() -> Catalog {
        Catalog {
            langcode: "de".to_string(),
            entries: vec![
                CatalogEntry {
                    source: "Next".to_string(),
                    translation: "Weiter".to_string(),
                },
                CatalogEntry {
                    source: "Page @current of @total".to_string(),
                    translation: "Seite @current von @total".to_string(),
                },
            ],
        }
    }

    #[test]
    fn known_strings_are_translated() {
        assert_eq!(german().translate("Next"), "Weiter");
    }

    #[test]
    fn unknown_strings_fall_back_to_source() {
        assert_eq!(german().translate("Last"), "Last");
        assert_eq!(Catalog::source_language().translate("First"), "First");
    }

    #[test]
    fn placeholders_are_substituted_after_translation() {
        let text = german().format(
            "Page @current of @total",
            &[("@current", "2"), ("@total", "5")],
        );

        assert_eq!(text, "Seite 2 von 5");
    }
}
