// ABOUTME: Main entry point for the toast-stack demo TUI and headless renderer

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, Terminal};
use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

use toast_stack::app::{App, EventHandler};
use toast_stack::components::LayoutComponent;
use toast_stack::config::{self, ManagerConfig};
use toast_stack::container::MarkupContainer;
use toast_stack::notifications::{CreateConfig, EscapedHtml, NotificationManager, PlainText, Render};

#[derive(Debug, Parser)]
#[command(name = "toast-stack", version, about = "Stacked toast notifications with auto-hide")]
struct Cli {
    /// Config file to use instead of the one in the user config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive demo: space four times raises a warning
    Demo,
    /// Show one notification and print the container markup
    Render {
        #[arg(long)]
        text: Option<String>,
        #[arg(long = "class")]
        class_name: Option<String>,
        #[arg(long)]
        name: Option<String>,
        /// Full create config as JSON, e.g. '{"text":"Hi","className":"red"}'
        #[arg(long, conflicts_with_all = ["text", "class_name", "name"])]
        json: Option<String>,
        /// Escape the text instead of inserting it verbatim
        #[arg(long)]
        escape: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config::load().context("Failed to load config")?,
    };

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            setup_logging()?;
            setup_panic_handler();
            let mut app = App::new(config);
            app.init();
            let mut layout = LayoutComponent::new();
            run_tui(&mut app, &mut layout)
        }
        Command::Render {
            text,
            class_name,
            name,
            json,
            escape,
        } => {
            setup_stderr_logging();
            let create = match json {
                Some(json) => CreateConfig::from_json(&json).context("Invalid --json config")?,
                None => CreateConfig {
                    text,
                    class_name,
                    name,
                    timeout_ms: None,
                },
            };
            println!("{}", render_once(config, create, escape)?);
            Ok(())
        }
    }
}

fn render_once(config: ManagerConfig, create: CreateConfig, escape: bool) -> Result<String> {
    let container = MarkupContainer::from_config(&config);
    let mut manager = NotificationManager::with_config(container, config);
    let renderer: Box<dyn Render> = if escape {
        Box::new(EscapedHtml)
    } else {
        Box::new(PlainText)
    };

    let handle = manager.create_with(create, renderer)?;
    manager.show(&handle)?;
    Ok(manager.container().outer_html())
}

fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn setup_logging() -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    // The TUI owns the terminal, so logs go to a file
    let log_dir = dirs::home_dir()
        .map(|home| home.join(".toast-stack").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".toast-stack/logs"));
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log dir {}", log_dir.display()))?;

    let log_file = log_dir.join(format!(
        "toast-stack-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toast_stack=info".into()),
        )
        .init();

    Ok(())
}

fn setup_stderr_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toast_stack=warn".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before reporting
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stderr(), LeaveAlternateScreen, DisableMouseCapture);

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn render_once_prints_visible_container() {
        let markup = render_once(
            ManagerConfig::default(),
            CreateConfig::new("Hello").with_class("red"),
            false,
        )
        .expect("render succeeds");

        assert_eq!(
            markup,
            r#"<div id="Notifications" class="show"><div id="Notifications-0" class="notification red">Hello</div></div>"#
        );
    }

    #[tokio::test]
    async fn render_once_escapes_on_request() {
        let markup = render_once(ManagerConfig::default(), CreateConfig::new("<b>"), true)
            .expect("render succeeds");
        assert!(markup.contains("&lt;b&gt;"));
    }

    #[tokio::test]
    async fn render_json_with_non_numeric_timeout() {
        let create = CreateConfig::from_json(r#"{"text":"Hi","timeout":"soon"}"#)
            .expect("json accepted");
        let markup = render_once(ManagerConfig::default(), create, false).expect("render succeeds");

        assert!(markup.contains(">Hi</div>"));
    }

    #[test]
    fn cli_defaults_to_demo() {
        let cli = Cli::parse_from(["toast-stack"]);
        assert!(cli.command.is_none());
    }
}
