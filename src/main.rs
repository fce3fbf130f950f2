use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use toyedit::config::Config;
use toyedit::editor::Editor;
use toyedit::input::Action;
use toyedit::services::tracing_setup;
use toyedit::view::render::render_editor;
use toyedit::view::theme::Theme;

/// A small terminal text editor with character-class highlighting
#[derive(Parser, Debug)]
#[command(name = "toyedit")]
#[command(version)]
struct Cli {
    /// File to edit (created on first save if it doesn't exist)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> AnyhowResult<()> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(tracing_setup::default_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Logging disabled: {:#}", e);
    }
    tracing::info!("Editor starting");

    let user_config = dirs::config_dir().map(|dir| dir.join("toyedit").join("config.json"));
    let config = Config::load_or_default(cli.config.as_deref(), user_config.as_deref())?;
    let theme = Theme::from_config(&config);
    let mut editor = Editor::open(&cli.file, config);

    let terminal = ratatui::init();
    let result = run(terminal, &mut editor, &theme);
    ratatui::restore();
    tracing::info!("Editor exiting");
    result
}

fn run(mut terminal: DefaultTerminal, editor: &mut Editor, theme: &Theme) -> AnyhowResult<()> {
    loop {
        terminal
            .draw(|frame| render_editor(frame, editor, theme))
            .context("failed to draw frame")?;

        // Anything but a key (e.g. a resize) just triggers a redraw
        let Event::Key(key) = event::read().context("failed to read terminal event")? else {
            continue;
        };
        let Some(action) = Action::from_key_event(&key) else {
            continue;
        };

        if let Err(e) = editor.handle(action) {
            tracing::warn!("{:?} failed: {}", action, e);
            if editor.status().is_none() {
                editor.set_status(e.to_string());
            }
        }
        if editor.should_quit() {
            break Ok(());
        }
    }
}
