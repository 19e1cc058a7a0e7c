//! Stylist TUI - interactive styling session
//!
//! Walks the full flow in the terminal:
//! - measurement form (field navigation + text entry)
//! - event picker (catalog list plus free-text custom vibe)
//! - live search view (per-store progress gauges, outfits as they arrive)
//! - results list
//!
//! Keyboard shortcuts:
//! - Up/Down or Tab: move between form fields / list entries
//! - Enter: submit form / select event / submit custom vibe
//! - c: enter custom vibe input (event screens)
//! - Esc: cancel custom vibe input
//! - n: new search (results screen)
//! - q: quit
//!
//! Usage:
//!   cargo run --bin stylist-tui -- --config config/dev.toml

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use stylist_poc::domain::types::{Event, Outfit, StoreStatus};
use stylist_poc::infra::Config;
use stylist_poc::services::profile::ProfileField;
use stylist_poc::services::{
    EventPicker, OutfitGenerator, Phase, ProfileForm, SearchSequencer, StylistSession,
};
use tokio::sync::mpsc;

/// Stylist TUI - interactive outfit search demo
#[derive(Parser, Debug)]
#[command(name = "stylist-tui", version, about)]
struct Args {
    /// Path to TOML configuration file (falls back to the CONFIG_FILE
    /// environment variable, then config/dev.toml)
    #[arg(short, long)]
    config: Option<String>,
}

/// Full UI state for one terminal session
struct App {
    session: StylistSession,
    form: ProfileForm,
    form_cursor: usize,
    form_error: Option<String>,
    picker: EventPicker,
    picker_cursor: usize,
    vibe_mode: bool,
    vibe_input: String,
}

impl App {
    fn new(config: &Config) -> Self {
        Self {
            session: StylistSession::new(),
            form: ProfileForm::new(),
            form_cursor: 0,
            form_error: None,
            picker: EventPicker::new(config.events().to_vec()),
            picker_cursor: 0,
            vibe_mode: false,
            vibe_input: String::new(),
        }
    }

    fn current_field(&self) -> ProfileField {
        ProfileField::ALL[self.form_cursor]
    }

    fn back_to_events(&mut self) {
        self.session.back_to_events();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(&std::env::args().collect::<Vec<_>>()),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_ui(&mut terminal, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, mut rx) = mpsc::channel(64);
    let mut sequencer = SearchSequencer::new(config.clone(), tx);
    let mut app = App::new(&config);

    let tick_rate = Duration::from_millis(100);

    loop {
        // Drain sequencer updates before drawing
        while let Ok(update) = rx.try_recv() {
            app.session.apply(update);
        }

        terminal.draw(|f| draw_ui(f, &app))?;

        if event::poll(tick_rate)? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(&mut app, &mut sequencer, key.code)
                {
                    return Ok(());
                }
            }
        }
    }
}

/// Handle one keypress; returns true when the app should exit
fn handle_key(app: &mut App, sequencer: &mut SearchSequencer, code: KeyCode) -> bool {
    match app.session.phase() {
        Phase::Profile => handle_profile_key(app, code),
        Phase::EventSelect | Phase::Searching => handle_event_key(app, sequencer, code),
        Phase::Results => handle_results_key(app, code),
    }
}

fn handle_profile_key(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Esc => return true,
        KeyCode::Up => {
            app.form_cursor = app.form_cursor.checked_sub(1).unwrap_or(ProfileField::ALL.len() - 1);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.form_cursor = (app.form_cursor + 1) % ProfileField::ALL.len();
        }
        KeyCode::Backspace => {
            let field = app.current_field();
            app.form.pop_char(field);
        }
        KeyCode::Enter => match app.form.submit() {
            Ok(sizes) => {
                app.form_error = None;
                app.session.save_sizes(sizes);
            }
            Err(e) => app.form_error = Some(e.to_string()),
        },
        KeyCode::Char(c) => {
            let field = app.current_field();
            app.form.push_char(field, c);
        }
        _ => {}
    }
    false
}

fn handle_event_key(app: &mut App, sequencer: &mut SearchSequencer, code: KeyCode) -> bool {
    if app.vibe_mode {
        match code {
            KeyCode::Esc => {
                app.vibe_mode = false;
                app.vibe_input.clear();
            }
            KeyCode::Backspace => {
                app.vibe_input.pop();
            }
            KeyCode::Enter => {
                // Blank input is silently ignored; the prompt stays open
                if let Some(event) = app.picker.select_custom(&app.vibe_input) {
                    app.vibe_mode = false;
                    app.vibe_input.clear();
                    start_search(app, sequencer, event);
                }
            }
            KeyCode::Char(c) => app.vibe_input.push(c),
            _ => {}
        }
        return false;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') => app.vibe_mode = true,
        KeyCode::Up => {
            let len = app.picker.events().len();
            app.picker_cursor = app.picker_cursor.checked_sub(1).unwrap_or(len - 1);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.picker_cursor = (app.picker_cursor + 1) % app.picker.events().len();
        }
        KeyCode::Enter => {
            if let Some(event) = app.picker.select_by_index(app.picker_cursor) {
                start_search(app, sequencer, event);
            }
        }
        _ => {}
    }
    false
}

fn handle_results_key(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('n') => app.back_to_events(),
        _ => {}
    }
    false
}

/// Start (or restart) a search run for the chosen event
fn start_search(app: &mut App, sequencer: &mut SearchSequencer, event: Event) {
    let generation = sequencer.start(event.clone(), OutfitGenerator::new());
    app.session.begin_search(event, generation);
}

fn draw_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);

    match app.session.phase() {
        Phase::Profile => draw_profile(f, chunks[1], app),
        Phase::EventSelect => draw_events(f, chunks[1], app),
        Phase::Searching => draw_search(f, chunks[1], app),
        Phase::Results => draw_results(f, chunks[1], app),
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let phase_text = match app.session.phase() {
        Phase::Profile => "Your Sizes",
        Phase::EventSelect => "Select an Event",
        Phase::Searching => "Outfit Search in Progress",
        Phase::Results => "Your Outfits",
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled("Smart Stylist ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("| "),
        Span::styled(phase_text, Style::default().fg(Color::Yellow)),
        Span::raw(" | Outfits: "),
        Span::raw(app.session.outfits().len().to_string()),
        Span::raw(" | Esc to quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn draw_profile(f: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = Vec::new();

    for (i, field) in ProfileField::ALL.iter().enumerate() {
        let selected = i == app.form_cursor;
        let value = app.form.value(*field);
        let value_span = if value.is_empty() {
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(value.to_string())
        };

        let label_style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("{:<14}", field.label()), label_style),
            value_span,
            if selected { Span::styled(" ◄", Style::default().fg(Color::Cyan)) } else { Span::raw("") },
        ])));
    }

    if let Some(error) = &app.form_error {
        items.push(ListItem::new(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))));
    }

    items.push(ListItem::new(Line::from(Span::styled(
        "Shoe size, height and weight are required. Enter to save.",
        Style::default().fg(Color::DarkGray),
    ))));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Measurements"));
    f.render_widget(list, area);
}

fn draw_events(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Catalog
            Constraint::Length(3), // Custom vibe input
        ])
        .split(area);

    let items: Vec<ListItem> = app
        .picker
        .events()
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let style = if i == app.picker_cursor && !app.vibe_mode {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(Span::styled(event.name.clone(), style)),
                Line::from(Span::styled(
                    format!("  {}", event.description),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let title = if app.session.is_searching() {
        "Events (Enter to restart search)"
    } else {
        "Events (Enter to search)"
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, chunks[0]);

    let vibe = if app.vibe_mode {
        Paragraph::new(Line::from(vec![
            Span::raw(app.vibe_input.clone()),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]))
        .block(Block::default().borders(Borders::ALL).title("Custom vibe (Enter to search, Esc to cancel)"))
    } else {
        Paragraph::new(Span::styled(
            "Press 'c' to type a custom vibe",
            Style::default().fg(Color::DarkGray),
        ))
        .block(Block::default().borders(Borders::ALL).title("Custom vibe"))
    };
    f.render_widget(vibe, chunks[1]);
}

fn draw_search(f: &mut Frame, area: Rect, app: &App) {
    // Keep the picker visible so switching events mid-search stays navigable
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Event picker
            Constraint::Percentage(65), // Progress + outfits
        ])
        .split(area);

    draw_events(f, columns[0], app);

    let progress = app.session.progress();
    let gauge_rows = (progress.len() as u16) * 3 + 3;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(gauge_rows), // Status + per-store gauges
            Constraint::Min(0),             // Outfits found so far
        ])
        .split(columns[1]);

    let store_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::once(Constraint::Length(2))
                .chain(progress.iter().map(|_| Constraint::Length(3)))
                .collect::<Vec<_>>(),
        )
        .split(chunks[0]);

    let status = Paragraph::new(Span::styled(
        app.session.status_message().to_string(),
        Style::default().fg(Color::Yellow),
    ));
    f.render_widget(status, store_chunks[0]);

    for (i, entry) in progress.iter().enumerate() {
        let color = match entry.status {
            StoreStatus::Pending => Color::DarkGray,
            StoreStatus::Searching => Color::Yellow,
            StoreStatus::Complete => Color::Green,
            StoreStatus::Error => Color::Red,
        };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} - {}", entry.store.name, entry.status.as_str())),
            )
            .gauge_style(Style::default().fg(color))
            .percent(u16::from(entry.progress));
        f.render_widget(gauge, store_chunks[i + 1]);
    }

    draw_outfit_list(f, chunks[1], app.session.outfits(), "Outfits found so far");
}

fn draw_results(f: &mut Frame, area: Rect, app: &App) {
    draw_outfit_list(f, area, app.session.outfits(), "Results ('n' for a new search)");
}

fn draw_outfit_list(f: &mut Frame, area: Rect, outfits: &[Outfit], title: &str) {
    let items: Vec<ListItem> = outfits
        .iter()
        .map(|outfit| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    outfit.name.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  ${}", outfit.total_price)),
                Span::styled(
                    format!("  {}", outfit.estimated_delivery),
                    Style::default().fg(Color::DarkGray),
                ),
            ])];
            for item in &outfit.items {
                let store = item.store.as_deref().unwrap_or("-");
                lines.push(Line::from(Span::raw(format!(
                    "  {:<10} ${:<4} {}",
                    item.name, item.price, store
                ))));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(list, area);
}
