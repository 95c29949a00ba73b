use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use sermon_markup_config::Config;
use sermon_markup_engine::{SegmentParser, io};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

mod render;

struct App {
    sermons_path: PathBuf,
    files: Vec<PathBuf>,
    file_list_state: ListState,
    parser: SegmentParser,
    current_content: Vec<Line<'static>>,
}

impl App {
    fn new(sermons_path: PathBuf, parser: SegmentParser) -> Result<Self> {
        let files = io::scan_sermon_files(&sermons_path)?;

        let mut app = Self {
            sermons_path,
            files,
            file_list_state: ListState::default(),
            parser,
            current_content: Vec::new(),
        };

        // Select first item if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(path) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            return;
        };

        self.current_content = match io::read_sermon(path) {
            Ok(content) => {
                let segments = self.parser.parse_document(&content);
                log::debug!("{}: {} segments", path.display(), segments.len());
                render::segments_to_lines(&segments)
            }
            Err(e) => {
                log::warn!("failed to read {}: {e}", path.display());
                vec![Line::from(format!("Error reading file: {e}"))]
            }
        };
    }

    fn display_name(&self, path: &Path) -> String {
        path.strip_prefix(&self.sermons_path)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; keep them quiet by default so the TUI isn't overdrawn
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Determine sermons path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let program = program_name(&args);
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} [sermons-folder-path]", program);
            process::exit(1);
        }
    };

    let sermons_path;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        sermons_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match &config {
            Some(config) => {
                sermons_path = config.sermons_path.clone();
                from_config = true;
            }
            None => {
                eprintln!("Error: No sermons path provided and no config file found");
                eprintln!("Usage: {} <sermons-folder-path>", program);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [sermons-folder-path]", program);
        process::exit(1);
    };

    if let Err(e) = io::validate_sermons_dir(&sermons_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Sermons path '{}'{} is invalid: {e}",
            sermons_path.display(),
            source
        );
        process::exit(1);
    }

    let parser = config
        .as_ref()
        .map(|c| SegmentParser::new(c.parse_options()))
        .unwrap_or_default();
    log::info!("previewing sermons in {}", sermons_path.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(sermons_path, parser)?;

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

/// argv[0], or the binary name when the OS passed an empty argv.
fn program_name(args: &[String]) -> &str {
    args.first()
        .map(String::as_str)
        .unwrap_or(env!("CARGO_BIN_NAME"))
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Sermon list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|path| ListItem::new(vec![Line::from(vec![Span::raw(app.display_name(path))])]))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Sermons"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Preview panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a sermon to preview it")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
