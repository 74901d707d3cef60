use aurora_settings::store::Storage;
use aurora_settings::{FileStore, MemoryStore};
use aurora_shell::{boot, cli, demo};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("aurora=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "aurora=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Aurora v{} starting...", env!("CARGO_PKG_VERSION"));

    let opened = match &args.data_dir {
        Some(dir) => FileStore::open(dir.clone()),
        None => FileStore::open_default(),
    };
    let store: Box<dyn Storage> = match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("storage unavailable ({e}), state will not persist");
            Box::new(MemoryStore::new())
        }
    };

    let mut desktop = boot::boot(store, boot::DEFAULT_VIEWPORT);

    if args.demo {
        demo::run(&mut desktop);
    } else {
        let frame = desktop.frame();
        tracing::info!(
            "{} dock apps, {} desktop icons, onboarding {}",
            frame.dock.len(),
            frame.icons.len(),
            if frame.onboarding_active {
                "pending"
            } else {
                "done"
            }
        );
        tracing::info!("no display attached; run with --demo for a scripted session");
    }

    tracing::info!("shutdown complete");
}
