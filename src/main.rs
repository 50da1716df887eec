use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use parking_lot::Mutex;

use termfolio::clipboard::ClipboardHandler;
use termfolio::config::Config;
use termfolio::logging::init_tracing;
use termfolio::shutdown::ShutdownHandle;
use termfolio::submit::{self, SubmissionWorker};
use termfolio::ui::app::App;
use termfolio::ui::events::EventHandler;
use termfolio::ui::pages::Page;
use termfolio::ui::runtime;

/// How long the submission worker gets to finish an in-flight message on exit.
const WORKER_GRACE: Duration = Duration::from_secs(2);

#[derive(Debug, Parser)]
#[command(name = "termfolio", version, about = "A personal portfolio in your terminal")]
struct Cli {
    /// Config file (default: <config dir>/termfolio/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Page to open: index, about, projects, certifications or contact
    #[arg(long, value_name = "NAME")]
    page: Option<Page>,

    /// Write logs to PATH.<timestamp>.<pid> (also: TERMFOLIO_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    if let Some(page) = cli.page {
        config.ui.start_page = page;
    }

    if cli.print_config {
        print!("{}", config.to_toml_string().context("serializing config")?);
        return Ok(());
    }

    let settings = config.settings().context("invalid config")?;
    let submitter = submit::from_config(&config.contact).context("setting up message delivery")?;

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let shutdown = ShutdownHandle::new();
    let signals = shutdown.clone();
    tokio_runtime.spawn(async move {
        if let Err(err) = signals.listen_for_signals().await {
            tracing::warn!(error = %err, "signal listener unavailable");
        }
    });

    let events = EventHandler::new(shutdown.clone());
    let (submit_sender, worker) = SubmissionWorker::spawn(
        tokio_runtime.handle(),
        submitter,
        events.sender(),
        shutdown.clone(),
    );

    let mut app = App::new(settings);
    app.set_submit_sender(submit_sender);
    match ClipboardHandler::new() {
        Ok(clipboard) => app.set_clipboard(Arc::new(Mutex::new(clipboard))),
        Err(err) => tracing::warn!(error = %err, "clipboard disabled"),
    }

    let result = runtime::run(app, events, config.ui.mouse);

    shutdown.signal();
    tokio_runtime.block_on(async {
        if tokio::time::timeout(WORKER_GRACE, worker).await.is_err() {
            tracing::warn!("submission worker did not stop in time");
        }
    });
    tokio_runtime.shutdown_timeout(Duration::from_millis(500));

    result.context("terminal UI failed")
}
