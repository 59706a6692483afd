use std::path::Path;

use crate::error::AppResult;

mod model;
mod toml;
mod traits;

pub use model::{Block, CounterSpec, ProgressSpec, Slide};
pub use toml::TomlDeck;
pub use traits::DeckSource;

pub fn open_default_deck(path: impl AsRef<Path>) -> AppResult<Box<dyn DeckSource>> {
    TomlDeck::open(path).map(|deck| Box::new(deck) as Box<dyn DeckSource>)
}
