use std::io;
use std::path::PathBuf;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, warn};

use bookshelf::app::App;
use bookshelf::catalog::{self, Collection, DataSource};
use bookshelf::config::{self, Config, resolve_path};
use bookshelf::error::BookshelfError;
use bookshelf::{handlers, logging, ui};

fn main() -> Result<(), BookshelfError> {
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).map(String::as_str) == Some("init") {
        return match Config::init() {
            Ok(true) => {
                println!(
                    "Created config file at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Ok(false) => {
                println!(
                    "Config file already exists at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Failed to create config file: {e}");
                Err(e.into())
            }
        };
    }

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Ignoring config: {e}");
        Config::default()
    });

    if args.get(1).map(String::as_str) == Some("list") {
        let source = load_source(args.get(2).map(PathBuf::from), &config)?;
        print_order_candidates(source);
        return Ok(());
    }

    let _log_guard = match logging::init(&config.get_log_path(), &config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    };

    let source = match load_source(args.get(1).map(PathBuf::from), &config) {
        Ok(source) => source,
        Err(e) => {
            error!("failed to load catalog: {e}");
            eprintln!("Error: {e}");
            return Err(e);
        }
    };

    enable_raw_mode()?;
    let terminal_guard = TerminalGuard::install();
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config, source));
    drop(terminal_guard);

    if let Err(err) = res {
        error!("terminal error: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Puts the terminal back into cooked mode when dropped, including while
/// unwinding from a panic.
struct TerminalGuard;

impl TerminalGuard {
    fn install() -> Self {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            default_hook(info);
        }));
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        error!("failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    ) {
        error!("failed to restore terminal: {e}");
    }
}

/// CLI path first, then the configured data file, then the bundled sample.
fn load_source(
    cli_file: Option<PathBuf>,
    config: &Config,
) -> Result<DataSource, BookshelfError> {
    let path = cli_file
        .map(|path| resolve_path(&path.to_string_lossy()))
        .or_else(|| config.get_data_path());

    match path {
        Some(path) => catalog::load_data_source(&path),
        None => {
            warn!("no data file configured, using sample catalog");
            catalog::sample_data_source()
        }
    }
}

fn print_order_candidates(source: DataSource) {
    let mut collection = Collection::new();
    collection.render_all(source.books);
    for summary in collection.order_candidates() {
        let colors = collection
            .get(summary.id)
            .and_then(|item| item.rating_style().background())
            .map_or_else(|| "-".to_string(), |gradient| gradient.to_string());
        println!(
            "{:>4}  {:<48} {:>9}  {:.1}  {}",
            summary.id,
            ui::truncate_text(&summary.name, 48),
            ui::format_price(summary.price),
            summary.rating,
            colors
        );
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    info!("entering event loop");

    loop {
        terminal.draw(|f| ui::render_app(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => {
                    app.status_message = None;
                    handlers::handle_key(&mut app, key);
                }
                Event::Mouse(mouse) => handlers::handle_mouse(&mut app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!("exiting");
    Ok(())
}
