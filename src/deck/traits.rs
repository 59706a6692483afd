use std::path::Path;

use super::model::Slide;

/// A presentable deck. The navigation core only ever addresses slides
/// by index; content is opaque to it.
pub trait DeckSource: Send {
    fn path(&self) -> &Path;
    fn slide_count(&self) -> usize;
    fn slide(&self, index: usize) -> Option<&Slide>;
    /// Language codes the deck ships translations for. Never empty;
    /// the first entry is the default.
    fn languages(&self) -> &[String];
    fn lookup(&self, lang: &str, key: &str) -> Option<&str>;
    /// Translation key of the deck title (used for the window title).
    fn title_key(&self) -> &str;
}
