use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use postflow::article::{author_profile, ArticleDetailModule, LoadRequest};
use postflow::prefs::{
    mock_catalog, FavoriteBoard, KeyValueStore, SettingsInteractor, TomlFileStore,
};

/// Load one article through the pipeline and print the published state.
#[derive(Parser)]
#[command(name = "postflow", version)]
struct Args {
    /// Article id to load.
    #[arg(default_value_t = 1)]
    article_id: i64,

    /// Print the persisted preference state as well.
    #[arg(long)]
    show_prefs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let module = ArticleDetailModule::build();
    let mut rx = module.publisher.subscribe();

    module.interactor.submit(LoadRequest::new(args.article_id));
    println!("loading: {}", module.publisher.snapshot().is_loading);

    // Wait for the terminal transition (loaded or failed).
    loop {
        rx.changed().await?;
        let snapshot = rx.borrow_and_update().clone();
        if !snapshot.is_loading {
            match snapshot.last_error {
                Some(reason) => println!("failed: {reason}"),
                None => println!("{} ({})", snapshot.title, snapshot.author),
            }
            break;
        }
    }

    if let Some(route) = author_profile(&module.store) {
        println!("route: {route}");
    }

    if args.show_prefs {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(TomlFileStore::open(TomlFileStore::default_path())?);
        let settings = SettingsInteractor::load(Arc::clone(&store));
        let board = FavoriteBoard::load(mock_catalog(), store);
        println!(
            "appearance: follow_system={} dark_mode={} effective={:?}",
            settings.state().follow_system,
            settings.state().dark_mode,
            settings.state().effective_dark(),
        );
        println!("favorites: {:?}", board.flags());
    }

    Ok(())
}
