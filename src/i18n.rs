use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key the selected language is persisted under.
pub const LANGUAGE_STORAGE_KEY: &str = "portfolio-language";

#[derive(Embed)]
#[folder = "locales"]
struct Locales;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn all() -> [Language; 2] {
        [Self::French, Self::English]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::English => "en",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::French => Self::English,
            Self::English => Self::French,
        }
    }

    /// Language saved in local storage; empty or unknown values give the default.
    pub fn from_stored(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    fn file_name(&self) -> String {
        format!("{}.json", self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fr" => Ok(Self::French),
            "en" => Ok(Self::English),
            other => Err(CatalogError::UnknownLanguage(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Missing translation: {0}")]
    NotFound(String),
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
    #[error("Couldn't parse catalog {0}")]
    Parse(String),
}

pub type Catalog = HashMap<String, String>;

pub fn load_catalog(language: Language) -> Result<Catalog, CatalogError> {
    let name = language.file_name();
    let file = Locales::get(&name).ok_or_else(|| CatalogError::NotFound(name.clone()))?;
    serde_json::from_slice(&file.data).map_err(|e| CatalogError::Parse(format!("{name}: {e}")))
}

static CATALOGS: LazyLock<HashMap<Language, Catalog>> = LazyLock::new(|| {
    Language::all()
        .into_iter()
        .map(|lang| {
            let catalog = load_catalog(lang).expect("Should be able to load embedded catalog");
            (lang, catalog)
        })
        .collect()
});

/// Looks up `key` in the catalog of `language`.
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    CATALOGS
        .get(&language)
        .and_then(|catalog| catalog.get(key))
        .map(String::as_str)
}

pub fn try_translate(language: Language, key: &str) -> Result<&'static str, CatalogError> {
    lookup(language, key).ok_or_else(|| CatalogError::NotFound(key.to_string()))
}

/// Display text for `key`, or the key itself when no translation exists.
pub fn translate(language: Language, key: &str) -> String {
    lookup(language, key).unwrap_or(key).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::ReplyKey;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::default(), Language::French);
        assert_eq!(Language::French.to_string(), "fr");
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!(" fr ".parse::<Language>(), Ok(Language::French));
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::French.toggle(), Language::English);
        assert_eq!(Language::English.toggle().toggle(), Language::English);
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(Language::from_stored("en"), Language::English);
        assert_eq!(Language::from_stored("fr"), Language::French);
        assert_eq!(Language::from_stored(""), Language::French);
        assert_eq!(Language::from_stored("\"en\""), Language::French);
        assert_eq!(Language::from_stored("de"), Language::French);
        for lang in Language::all() {
            assert_eq!(Language::from_stored(&lang.to_string()), lang);
        }
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&Language::English).expect("should serialize");
        assert_eq!(json, "\"en\"");
        let lang: Language = serde_json::from_str("\"fr\"").expect("should deserialize");
        assert_eq!(lang, Language::French);
    }

    #[test]
    fn test_reply_keys_translated() {
        for lang in Language::all() {
            for key in ReplyKey::all() {
                assert!(
                    lookup(lang, key.catalog_key()).is_some(),
                    "{} missing in {}",
                    key.catalog_key(),
                    lang
                );
            }
            assert!(lookup(lang, "chatbot.welcome").is_some());
            assert!(lookup(lang, "chatbot.placeholder").is_some());
        }
    }

    #[test]
    fn test_catalogs_have_same_keys() {
        let fr = load_catalog(Language::French).expect("should load fr");
        let en = load_catalog(Language::English).expect("should load en");
        let mut missing_en = fr.keys().filter(|k| !en.contains_key(*k)).collect::<Vec<_>>();
        let mut missing_fr = en.keys().filter(|k| !fr.contains_key(*k)).collect::<Vec<_>>();
        missing_en.sort();
        missing_fr.sort();
        assert!(missing_en.is_empty(), "missing in en: {missing_en:?}");
        assert!(missing_fr.is_empty(), "missing in fr: {missing_fr:?}");
    }

    #[test]
    fn test_interface_labels_translated() {
        let labels = [
            "carousel.previous",
            "carousel.next",
            "chatbot.send",
            "chatbot.open",
            "chatbot.close",
            "language.switch",
            "nav.menu",
            "footer.top",
        ];
        for lang in Language::all() {
            for key in labels {
                assert!(lookup(lang, key).is_some(), "{key} missing in {lang}");
            }
        }
        assert_eq!(translate(Language::French, "carousel.next"), "Suivant");
        assert_eq!(translate(Language::English, "carousel.previous"), "Previous");
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(lookup(Language::French, "nope.nothing"), None);
        assert_eq!(translate(Language::English, "nope.nothing"), "nope.nothing");
        assert_eq!(
            try_translate(Language::English, "nope.nothing"),
            Err(CatalogError::NotFound("nope.nothing".to_string()))
        );
    }

    #[test]
    fn test_translate_per_language() {
        assert_eq!(translate(Language::French, "nav.home"), "Accueil");
        assert_eq!(translate(Language::English, "nav.home"), "Home");
        assert_eq!(try_translate(Language::English, "chatbot.online"), Ok("Online"));
    }
}
