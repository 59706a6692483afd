use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

use super::model::{Block, CounterSpec, ProgressSpec, Slide};
use super::traits::DeckSource;

const MAX_COUNTER_DECIMALS: usize = 6;

#[derive(Debug, Deserialize)]
struct RawDeckFile {
    deck: RawMeta,
    #[serde(default, rename = "slide")]
    slides: Vec<RawSlide>,
    #[serde(default)]
    i18n: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct RawMeta {
    title: String,
    languages: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawSlide {
    title: String,
    #[serde(default, rename = "block")]
    blocks: Vec<RawBlock>,
    #[serde(default, rename = "counter")]
    counters: Vec<RawCounter>,
    #[serde(default, rename = "progress")]
    progress: Vec<RawProgress>,
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    text: String,
    #[serde(default)]
    bullet: bool,
}

#[derive(Debug, Deserialize)]
struct RawCounter {
    target: f64,
    #[serde(default)]
    decimals: usize,
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    suffix: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct RawProgress {
    percent: f64,
    label: String,
}

pub struct TomlDeck {
    path: PathBuf,
    title: String,
    languages: Vec<String>,
    slides: Vec<Slide>,
    i18n: BTreeMap<String, BTreeMap<String, String>>,
}

impl TomlDeck {
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read deck: {}", path.display()))
        })?;
        Self::from_toml_str(path, &raw)
    }

    pub fn from_toml_str(path: impl AsRef<Path>, raw: &str) -> AppResult<Self> {
        let path = path.as_ref();
        let parsed = toml::from_str::<RawDeckFile>(raw)
            .map_err(|source| AppError::deck_load(path.display().to_string(), source))?;
        Self::from_raw(path.to_path_buf(), parsed)
    }

    fn from_raw(path: PathBuf, raw: RawDeckFile) -> AppResult<Self> {
        if raw.slides.is_empty() {
            return Err(AppError::invalid_deck("deck has no slides"));
        }
        if raw.deck.languages.is_empty() {
            return Err(AppError::invalid_deck("deck declares no languages"));
        }
        for lang in &raw.deck.languages {
            if !raw.i18n.contains_key(lang) {
                return Err(AppError::invalid_deck(format!(
                    "declared language has no translation table: {lang}"
                )));
            }
        }

        let slides = raw
            .slides
            .into_iter()
            .enumerate()
            .map(|(index, slide)| convert_slide(index, slide))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            path,
            title: raw.deck.title,
            languages: raw.deck.languages,
            slides,
            i18n: raw.i18n,
        })
    }
}

fn convert_slide(index: usize, raw: RawSlide) -> AppResult<Slide> {
    let counters = raw
        .counters
        .into_iter()
        .map(|counter| {
            if !counter.target.is_finite() {
                return Err(AppError::invalid_deck(format!(
                    "slide {} has a non-finite counter target",
                    index + 1
                )));
            }
            Ok(CounterSpec {
                target: counter.target,
                decimals: counter.decimals.min(MAX_COUNTER_DECIMALS),
                prefix: counter.prefix,
                suffix: counter.suffix,
                label: counter.label,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let progress = raw
        .progress
        .into_iter()
        .map(|bar| {
            if !bar.percent.is_finite() {
                return Err(AppError::invalid_deck(format!(
                    "slide {} has a non-finite progress percent",
                    index + 1
                )));
            }
            Ok(ProgressSpec {
                percent: bar.percent.clamp(0.0, 100.0),
                label: bar.label,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Slide {
        title: raw.title,
        blocks: raw
            .blocks
            .into_iter()
            .map(|block| Block {
                text: block.text,
                bullet: block.bullet,
            })
            .collect(),
        counters,
        progress,
    })
}

impl DeckSource for TomlDeck {
    fn path(&self) -> &Path {
        &self.path
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    fn languages(&self) -> &[String] {
        &self.languages
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
        self.i18n.get(lang)?.get(key).map(String::as_str)
    }

    fn title_key(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use crate::deck::DeckSource;

    use super::TomlDeck;

    const MINIMAL_DECK: &str = r#"
        [deck]
        title = "deck.title"
        languages = ["es", "en"]

        [[slide]]
        title = "s1.title"

        [[slide.block]]
        text = "s1.lead"

        [[slide.block]]
        text = "s1.point"
        bullet = true

        [[slide.counter]]
        target = 95.5
        decimals = 1
        suffix = "%"
        label = "s1.accuracy"

        [[slide.progress]]
        percent = 250.0
        label = "s1.bar"

        [[slide]]
        title = "s2.title"

        [i18n.es]
        "deck.title" = "Presentación"
        "s1.title" = "Portada"

        [i18n.en]
        "deck.title" = "Presentation"
        "s1.title" = "Cover"
    "#;

    #[test]
    fn from_toml_str_parses_slides_counters_and_translations() {
        let deck = TomlDeck::from_toml_str("deck.toml", MINIMAL_DECK).expect("deck should parse");

        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.languages(), ["es", "en"]);
        assert_eq!(deck.lookup("en", "deck.title"), Some("Presentation"));
        assert_eq!(deck.lookup("en", "missing.key"), None);

        let slide = deck.slide(0).expect("first slide");
        assert_eq!(slide.blocks.len(), 2);
        assert!(slide.blocks[1].bullet);
        assert_eq!(slide.counters[0].target, 95.5);
        assert_eq!(slide.counters[0].decimals, 1);
        assert_eq!(slide.counters[0].suffix, "%");
        // Out-of-range progress percents clamp at load.
        assert_eq!(slide.progress[0].percent, 100.0);
    }

    #[test]
    fn from_toml_str_rejects_structural_problems() {
        let no_slides = r#"
            [deck]
            title = "t"
            languages = ["es"]

            [i18n.es]
        "#;
        assert!(TomlDeck::from_toml_str("deck.toml", no_slides).is_err());

        let missing_table = r#"
            [deck]
            title = "t"
            languages = ["es", "en"]

            [[slide]]
            title = "s1.title"

            [i18n.es]
        "#;
        assert!(TomlDeck::from_toml_str("deck.toml", missing_table).is_err());
    }
}
