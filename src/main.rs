use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dkv::app::App;
use dkv::config::Config;
use dkv::deck::open_default_deck;
use dkv::error::AppResult;
use dkv::i18n::LanguageStore;

/// Terminal pitch-deck presenter.
#[derive(Debug, Parser)]
#[command(name = "dkv", version, about = "Present a slide deck in the terminal")]
struct Cli {
    /// Deck file (TOML).
    deck: PathBuf,

    /// Language code to present in, overriding the saved preference.
    #[arg(long)]
    lang: Option<String>,

    /// Wrap past the first/last slide.
    #[arg(long = "loop")]
    loop_enabled: bool,

    /// 1-based slide to start on.
    #[arg(long)]
    slide: Option<usize>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let deck = open_default_deck(&cli.deck)?;

    let mut config = Config::load()?;
    if cli.loop_enabled {
        config.slides.loop_enabled = true;
    }

    let mut app = App::new_with_config(
        deck,
        config,
        LanguageStore::open_default(),
        cli.lang.as_deref(),
    )?;

    if let Some(slide) = cli.slide
        && let Some(index) = slide.checked_sub(1)
    {
        app.start_at(index);
    }

    app.run().await
}
