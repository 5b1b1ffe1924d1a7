// src/lib.rs

pub mod cli;
pub mod clock;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod host;
pub mod logging;
pub mod stamp;
pub mod types;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::clock::SystemClock;
use crate::config::{load_and_validate, load_or_default, ConfigFile, DEFAULT_CONFIG_FILE};
use crate::engine::{Runtime, RuntimeEvent, ScanSettings, Scanner};
use crate::fs::RealFileSystem;
use crate::host::{CommandNotifier, EditorNotifier, LogNotifier, PluginMetadata};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - scanner (registry + classifier)
/// - editor notifier
/// - file watcher and runtime loop (skipped in `--once` mode)
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let root = project_root(Path::new(&args.root));
    let cfg = load_config(&root, args.config.as_deref())?;
    let metadata = PluginMetadata::from(&cfg.plugin);

    if args.dry_run {
        print_dry_run(&root, &cfg, &metadata, args.reload_cmd.as_deref());
        return Ok(());
    }

    let reload = args.reload_cmd.as_ref().map(CommandNotifier::new);
    let notifier: Arc<dyn EditorNotifier> = match &reload {
        Some(cmd) => Arc::new(cmd.clone()),
        None => Arc::new(LogNotifier),
    };

    let settings = ScanSettings {
        root: root.clone(),
        install_dir: cfg.plugin.install_dir.clone(),
        dialect: cfg.dialect.clone(),
    };
    let mut scanner = Scanner::new(
        settings,
        Arc::new(RealFileSystem),
        Arc::new(SystemClock),
        notifier,
    )?;

    info!(plugin = %metadata, dialect = %cfg.dialect, ?root, "scriptstamp starting");

    if args.once {
        let report = scanner.scan();
        info!(
            visited = report.visited,
            stamped = report.stamped.len(),
            "single scan complete"
        );
        drain_reload_commands(reload.as_ref()).await;
        return Ok(());
    }

    let tracked = scanner.initialize();
    info!(tracked, "registry populated");

    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);
    let _watcher_handle = crate::watch::spawn_watcher(root, rt_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    let scanner = Runtime::new(scanner, rt_rx).run().await?;
    debug!(tracked = scanner.registry().len(), "runtime exited");
    drain_reload_commands(reload.as_ref()).await;
    Ok(())
}

/// An explicit `--config` must exist; the implicit one in the root may not.
fn load_config(root: &Path, explicit: Option<&str>) -> Result<ConfigFile> {
    let cfg = match explicit {
        Some(path) => load_and_validate(path)
            .with_context(|| format!("loading config file {path:?}"))?,
        None => load_or_default(root.join(DEFAULT_CONFIG_FILE))?,
    };
    Ok(cfg)
}

/// Let reload commands spawned by the last scans finish before returning.
async fn drain_reload_commands(reload: Option<&CommandNotifier>) {
    if let Some(reload) = reload {
        reload.drain().await;
    }
}

/// Canonicalize once so watcher events and walked paths share a prefix.
fn project_root(root: &Path) -> PathBuf {
    root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
}

/// Simple dry-run output: print what would be watched and how.
fn print_dry_run(root: &Path, cfg: &ConfigFile, metadata: &PluginMetadata, reload_cmd: Option<&str>) {
    println!("scriptstamp dry-run");
    println!("  plugin = {metadata}");
    println!("  root = {}", root.display());
    println!("  watching = **/*.{}", cfg.dialect.extension);
    println!(
        "  excluded = {}",
        root.join(&cfg.plugin.install_dir).display()
    );
    println!(
        "  declaration = {} <Identifier>",
        cfg.dialect.declare_keyword
    );
    println!("  inherit keyword = {}", cfg.dialect.inherit_keyword);
    println!("  comment prefix = {}", cfg.dialect.comment_prefix);
    match reload_cmd {
        Some(cmd) => println!("  reload command = {cmd}"),
        None => println!("  reload command = (none, log only)"),
    }

    debug!("dry-run complete (nothing watched)");
}
