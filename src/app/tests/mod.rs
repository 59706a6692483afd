mod init;

use std::path::{Path, PathBuf};

use crate::deck::{Block, CounterSpec, DeckSource, Slide};

/// In-memory deck: ten slides, two languages, one animated slide.
pub(crate) struct StubDeck {
    path: PathBuf,
    languages: Vec<String>,
    slides: Vec<Slide>,
}

impl StubDeck {
    pub(crate) fn new(slide_count: usize) -> Self {
        let slides = (0..slide_count)
            .map(|index| Slide {
                title: format!("s{index}.title"),
                blocks: vec![Block {
                    text: format!("s{index}.body"),
                    bullet: false,
                }],
                counters: if index == 1 {
                    vec![CounterSpec {
                        target: 100.0,
                        decimals: 0,
                        prefix: String::new(),
                        suffix: "%".to_string(),
                        label: format!("s{index}.counter"),
                    }]
                } else {
                    Vec::new()
                },
                progress: Vec::new(),
            })
            .collect();

        Self {
            path: PathBuf::from("stub.toml"),
            languages: vec!["es".to_string(), "en".to_string()],
            slides,
        }
    }
}

impl DeckSource for StubDeck {
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
        (lang == "es" && key == "deck.title").then_some("Presentación")
    }

    fn title_key(&self) -> &str {
        "deck.title"
    }
}
