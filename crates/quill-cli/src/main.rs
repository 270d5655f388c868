mod clipboard;
mod view;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quill_config::Config;
use quill_engine::{
    CopyFeedback, HandleId, HtmlFlavor, KeywordHighlighter, RenderOptions, RenderTree,
    render_markdown, to_html,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use crate::clipboard::OscClipboard;

/// Preview a markdown note in the terminal, or export it as HTML.
#[derive(Debug, Parser)]
#[command(name = "quill-cli", version)]
struct Cli {
    /// Markdown file to render
    file: PathBuf,

    /// Print preview HTML to stdout instead of opening the viewer
    #[arg(long, conflicts_with = "email")]
    html: bool,

    /// Print class-free HTML suitable for an email body
    #[arg(long)]
    email: bool,

    /// Config file to use instead of ~/.config/quill/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

struct App {
    path: PathBuf,
    options: RenderOptions,
    highlighter: KeywordHighlighter,
    tree: RenderTree,
    feedback: CopyFeedback,
    selected: Option<usize>,
    scroll: u16,
    status: Option<String>,
    /// A "Copied!" label was on screen at the last draw.
    confirming: bool,
}

impl App {
    fn new(path: PathBuf, config: &Config) -> Result<Self> {
        let mut app = Self {
            path,
            options: config.render_options(),
            highlighter: KeywordHighlighter::new(),
            tree: RenderTree::default(),
            feedback: CopyFeedback::new(config.copy_confirmation()),
            selected: None,
            scroll: 0,
            status: None,
            confirming: false,
        };
        app.reload()?;
        Ok(app)
    }

    /// Re-reads the file and renders it as a fresh pass.
    ///
    /// Handles restart from zero, so confirmations from the previous pass
    /// are dropped.
    fn reload(&mut self) -> Result<()> {
        let text = read_note(&self.path)?;
        self.tree = render_markdown(&text, &self.highlighter, &self.options);
        self.feedback = CopyFeedback::new(self.feedback.confirmation());
        self.confirming = false;

        let code_blocks = self.tree.handles.len();
        self.selected = match self.selected {
            _ if code_blocks == 0 => None,
            Some(i) => Some(i.min(code_blocks - 1)),
            None => Some(0),
        };
        Ok(())
    }

    fn selected_handle(&self) -> Option<HandleId> {
        let index = self.selected?;
        self.tree.code_blocks().nth(index).map(|block| block.handle)
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn select_code(&mut self, forward: bool) {
        let count = self.tree.handles.len();
        if count == 0 {
            return;
        }
        let next = match (self.selected, forward) {
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
            (None, _) => 0,
        };
        self.selected = Some(next);

        let handle = self.selected_handle();
        let view = view::preview(&self.tree, &self.feedback, handle, Instant::now());
        if let Some(&(_, row)) = view.code_rows.iter().find(|(h, _)| Some(*h) == handle) {
            self.scroll = u16::try_from(row).unwrap_or(u16::MAX);
        }
    }

    fn copy_selected(&mut self) {
        let Some(handle) = self.selected_handle() else {
            self.status = Some("No code block to copy".to_string());
            return;
        };
        let mut clipboard = OscClipboard::new(stdout());
        self.status = match self
            .feedback
            .copy(&self.tree, handle, &mut clipboard, Instant::now())
        {
            Ok(()) => {
                self.confirming = true;
                None
            }
            Err(e) => Some(format!("Copy failed: {e}")),
        };
    }

    /// Idle tick. Returns whether a confirmation just expired and the
    /// screen needs a redraw.
    fn tick(&mut self, now: Instant) -> bool {
        if !self.confirming || self.feedback.is_active(now) {
            return false;
        }
        self.feedback.prune(now);
        self.confirming = false;
        true
    }
}

fn read_note(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let path = Config::expand_path(&path).unwrap_or(path);
            let config = Config::load_from_path(&path)?
                .ok_or_else(|| anyhow!("Config file '{}' not found", path.display()))?;
            Some(config)
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    if cli.html || cli.email {
        let text = read_note(&cli.file)?;
        let tree = render_markdown(&text, &KeywordHighlighter::new(), &config.render_options());
        let flavor = if cli.email {
            HtmlFlavor::Email
        } else {
            HtmlFlavor::Preview
        };
        println!("{}", to_html(&tree, flavor));
        return Ok(());
    }

    let mut app = App::new(cli.file, &config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut redraw = true;
    loop {
        if redraw {
            terminal.draw(|f| ui(f, app))?;
        }

        // Poll rather than block so "Copied!" labels revert on time.
        if !event::poll(Duration::from_millis(200))? {
            redraw = app.tick(Instant::now());
            continue;
        }
        redraw = true;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Tab | KeyCode::Char('n') => app.select_code(true),
                KeyCode::BackTab | KeyCode::Char('p') => app.select_code(false),
                KeyCode::Char('c') | KeyCode::Enter => app.copy_selected(),
                KeyCode::Char('r') => {
                    if let Err(e) = app.reload() {
                        app.status = Some(format!("Reload failed: {e}"));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let view = view::preview(
        &app.tree,
        &app.feedback,
        app.selected_handle(),
        Instant::now(),
    );
    let content_text = if view.lines.is_empty() {
        vec![Line::from("(empty note)")]
    } else {
        view.lines
    };

    let file_name = app
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let title = match app.tree.title() {
        Some(heading) => format!("{file_name} - {heading}"),
        None => file_name,
    };
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[0]);

    let help_text = match &app.status {
        Some(status) => Line::from(Span::styled(status.clone(), Style::default().fg(Color::Red))),
        None => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Scroll | "),
            Span::raw("Tab/n: Next code | "),
            Span::raw("c: Copy | r: Reload"),
        ]),
    };

    f.render_widget(Paragraph::new(vec![help_text]), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_engine::PlainHighlighter;

    fn app(md: &str) -> App {
        let options = RenderOptions::default();
        App {
            path: PathBuf::from("note.md"),
            tree: render_markdown(md, &PlainHighlighter, &options),
            options,
            highlighter: KeywordHighlighter::new(),
            feedback: CopyFeedback::new(Duration::from_secs(2)),
            selected: Some(0),
            scroll: 0,
            status: None,
            confirming: false,
        }
    }

    #[test]
    fn tick_redraws_once_when_confirmation_expires() {
        let mut app = app("```\ncode\n```");
        let handle = app.selected_handle().unwrap();
        let t0 = Instant::now();
        app.feedback
            .copy(&app.tree, handle, &mut OscClipboard::new(Vec::new()), t0)
            .unwrap();
        app.confirming = true;

        assert!(!app.tick(t0 + Duration::from_millis(500)));
        assert!(app.tick(t0 + Duration::from_secs(2)));
        assert!(!app.tick(t0 + Duration::from_secs(3)));
    }

    #[test]
    fn idle_tick_without_copy_skips_redraw() {
        assert!(!app("just text").tick(Instant::now()));
    }

    #[test]
    fn select_code_wraps_around() {
        let mut app = app("```\na\n```\n```\nb\n```");
        app.select_code(true);
        assert_eq!(app.selected, Some(1));
        app.select_code(true);
        assert_eq!(app.selected, Some(0));
        app.select_code(false);
        assert_eq!(app.selected, Some(1));
    }
}
