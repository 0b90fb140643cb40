use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{Level as TraceLevel, info, warn};
use tracing_subscriber::FmtSubscriber;

use rtl_direction::app::{
    ConsoleEditor, DirectionController, FsBackend, HostEvent, Message, PreferenceStore,
};

/// Keeps note direction preferences for a vault, driven by events on stdin.
#[derive(Parser, Debug)]
#[command(name = "rtl-direction", version, about)]
struct Args {
    /// Vault root holding the notes and the settings file
    #[arg(long)]
    vault: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn vault_root(arg: Option<PathBuf>) -> PathBuf {
    arg.or_else(|| std::env::current_dir().ok())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { TraceLevel::DEBUG } else { TraceLevel::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    let vault = vault_root(args.vault);
    info!(vault = %vault.display(), "loading RTL direction support");

    let mut store = PreferenceStore::new(FsBackend::for_vault(&vault));
    store.load();
    let mut controller = DirectionController::new(store, ConsoleEditor::new());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Failed to read event");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let event = match HostEvent::parse(&line) {
            Ok(event) => event,
            Err(e) => {
                warn!(line = %line, error = %e, "Skipping malformed event");
                continue;
            }
        };

        let message = event.into_message(&vault);
        if matches!(message, Message::DocumentOpened { .. }) {
            controller.editor_mut().set_active(true);
        }

        if let Some(direction) = controller.handle(message) {
            let report = serde_json::json!({
                "path": controller.current_path(),
                "direction": direction,
            });
            if writeln!(stdout, "{}", report).is_err() {
                break;
            }
        }
    }

    info!("unloading RTL direction support");
}
