use postboard::adapters::mock::MockHttpClient;
use postboard::adapters::ReqwestHttpClient;
use postboard::api::ApiClient;
use postboard::app::App;
use postboard::store::Store;
use postboard::traits::HttpClient;
use postboard::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Mutex;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command-line options.
#[derive(Debug, Default)]
struct Options {
    /// Run against a permanently-failing backend, for exercising the
    /// failure and stale-data paths by hand.
    offline: bool,
    /// Override the REST base URL.
    base_url: Option<String>,
}

fn parse_args() -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("postboard {}", VERSION);
                return Ok(None);
            }
            "--offline" => options.offline = true,
            "--base-url" => {
                let url = args
                    .next()
                    .ok_or_else(|| color_eyre::eyre::eyre!("--base-url requires a value"))?;
                options.base_url = Some(url);
            }
            other => {
                return Err(color_eyre::eyre::eyre!("unknown argument: {}", other));
            }
        }
    }

    Ok(Some(options))
}

/// Route tracing output to a log file; writing to stderr would corrupt
/// the alternate screen.
fn init_logging() {
    let Some(dir) = dirs::data_dir().map(|d| d.join("postboard")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("postboard.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

async fn run<C>(api: ApiClient<C>, store: Option<Store>) -> Result<()>
where
    C: HttpClient + Clone + Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(api, store, tx);
    app.on_start();

    let mut terminal = setup_terminal()?;
    let mut events = EventStream::new();

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::render(frame, &app)) {
            break Err(e.into());
        }

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => break Err(e.into()),
                    None => break Ok(()),
                }
            }
            Some(msg) = rx.recv() => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    restore_terminal()?;
    result
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let Some(options) = parse_args()? else {
        return Ok(());
    };

    init_logging();
    tracing::info!(version = VERSION, offline = options.offline, "starting");

    let store = Store::new();

    if options.offline {
        let http = MockHttpClient::failing();
        let api = match &options.base_url {
            Some(url) => ApiClient::with_base_url(http, url),
            None => ApiClient::new(http),
        };
        run(api, store).await
    } else {
        let http = ReqwestHttpClient::new();
        let api = match &options.base_url {
            Some(url) => ApiClient::with_base_url(http, url),
            None => ApiClient::new(http),
        };
        run(api, store).await
    }
}
