use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
};

use mathelf::api::ApiClient;
use mathelf::api::worker::spawn_worker;
use mathelf::app::App;
use mathelf::config;
use mathelf::tabs::Tab;

/// Terminal client for the MathFunElf math tutoring service
#[derive(Parser, Debug)]
#[command(name = "mathelf", version, about)]
struct Args {
    /// Base URL of the tutoring API (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// View to open on start
    #[arg(long, value_enum, default_value_t = Tab::Solve)]
    tab: Tab,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let config::ConfigResult {
        config: mut cfg,
        warning,
    } = config::load_config(args.config.as_deref());

    if let Some(url) = &args.server {
        cfg.server.base_url = config::validate_base_url(url)?;
    }
    cfg.server.base_url = config::validate_base_url(&cfg.server.base_url)?;

    log::debug!("Using server {}", cfg.server.base_url);

    let client = ApiClient::new(
        &cfg.server.base_url,
        Duration::from_secs(cfg.server.timeout_secs),
    )?;
    let worker = spawn_worker(client)?;

    let mut app = App::new(&cfg, args.tab, worker.request_tx, worker.response_rx);
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }
    app.check_health();

    let terminal = ratatui::init();
    execute!(stdout(), EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    // Closing the request channel stops the worker
    drop(app);
    if worker.thread.join().is_err() {
        log::warn!("Network worker panicked");
    }

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.poll_responses();
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Log to a timestamped file in the cache directory so the TUI stays clean
#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::{self, File};

    let Some(dir) = dirs::cache_dir().map(|dir| dir.join("mathelf")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }

    let name = format!("mathelf_{}.log", chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let Ok(file) = File::create(dir.join(name)) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("mathelf=debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
