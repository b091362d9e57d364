//! Terminal user interface built on Ratatui.
//!
//! # State Machine
//! - `SelectingCategory` → `EnteringGuess` → `GameOver` → back to
//!   `SelectingCategory` (play again) or exit.
//! - `Ctrl+N` while guessing abandons the round and returns to category
//!   selection.
//!
//! Rendering is a pure function of [`RenderContext`], so every screen can be
//! drawn into a `TestBackend`.

use crate::art::hangman_stage;
use crate::debug_log;
use crate::game_loop::{GameInterface, UserAction, outcome_message};
use crate::game_state::{GameState, GuessOutcome, MAX_ATTEMPTS};
use crate::stats::SessionStats;
use crate::wordbank::{Category, CategorySummary};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const GALLOWS_WIDTH: u16 = 15;

const HEADER_STYLE: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const WORD_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    SelectingCategory { selected: usize },
    EnteringGuess,
    GameOver,
}

/// Everything needed to draw one frame.
struct RenderContext<'a> {
    state: TuiState,
    categories: &'a [CategorySummary],
    category_name: &'a str,
    game: Option<&'a GameState>,
    current_input: &'a str,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
    stats: &'a SessionStats,
}

/// Frame layout and rendering. Holds no terminal, only borrowed state.
fn render(f: &mut Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(12),    // Game panel / category list
            Constraint::Length(6),  // Information
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    match (ctx.state, ctx.game) {
        (TuiState::SelectingCategory { selected }, _) => {
            render_categories(f, chunks[1], ctx.categories, selected);
        }
        (_, Some(game)) => render_game(f, chunks[1], ctx, game),
        (_, None) => f.render_widget(Block::default().borders(Borders::ALL), chunks[1]),
    }
    render_info(f, chunks[2], ctx);
    render_status(f, chunks[3], ctx.status);
    render_instructions(f, chunks[4], ctx.state);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("HIP-HOP HANGMAN")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_categories(f: &mut Frame, area: Rect, categories: &[CategorySummary], selected: usize) {
    let mut lines = vec![
        Line::from(Span::styled("Choose your hip-hop category:", HEADER_STYLE)),
        Line::from(""),
    ];
    for (i, summary) in categories.iter().enumerate() {
        let text = format!(
            "{} {}: {} ({} artists)",
            if i == selected { ">" } else { " " },
            summary.category.key,
            summary.category.name,
            summary.count
        );
        if i == selected {
            lines.push(Line::from(Span::styled(text, INFO_STYLE)));
        } else {
            lines.push(Line::from(text));
        }
    }
    let paragraph =
        Paragraph::new(lines).block(Block::default().title("Categories").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_game(f: &mut Frame, area: Rect, ctx: &RenderContext, game: &GameState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GALLOWS_WIDTH), Constraint::Min(20)])
        .split(area);

    let gallows: Vec<Line> = hangman_stage(game.attempts_remaining())
        .iter()
        .map(|line| Line::from(*line))
        .collect();
    f.render_widget(
        Paragraph::new(gallows).block(Block::default().borders(Borders::ALL)),
        columns[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(columns[1]);

    let guessed = if game.guessed_letters().is_empty() {
        "none".to_string()
    } else {
        game.guessed_letters_display()
    };
    let mut lines = vec![
        Line::from(vec![Span::raw("Category: "), Span::styled(ctx.category_name, MESSAGE_STYLE)]),
        Line::from(""),
        Line::from(Span::styled(game.word_display(), WORD_STYLE)),
        Line::from(""),
        Line::from(format!(
            "Lives: {}/{MAX_ATTEMPTS}   Score: {}",
            game.attempts_remaining(),
            game.score()
        )),
        Line::from(format!("Guessed letters: {guessed}")),
    ];
    if ctx.state == TuiState::EnteringGuess {
        lines.push(Line::from(vec![
            Span::raw("Guess: "),
            Span::styled(format!("{}_", ctx.current_input), INFO_STYLE),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines).block(Block::default().title("Round").borders(Borders::ALL)),
        right[0],
    );

    let (revealed, total) = game.progress();
    let ratio = if total == 0 {
        1.0
    } else {
        revealed as f64 / total as f64
    };
    let gauge = Gauge::default()
        .block(Block::default().title("Revealed").borders(Borders::ALL))
        .gauge_style(Style::new().fg(Color::Green))
        .ratio(ratio)
        .label(format!("{revealed}/{total}"));
    f.render_widget(gauge, right[1]);
}

fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let mut lines = Vec::new();
    if !ctx.message.is_empty() {
        let style = match ctx.game {
            Some(game) if game.is_won() => SUCCESS_STYLE,
            _ => MESSAGE_STYLE,
        };
        lines.push(Line::from(Span::styled(ctx.message, style)));
    }
    if !ctx.error_message.is_empty() {
        lines.push(Line::from(Span::styled(ctx.error_message, ERROR_STYLE)));
    }
    if ctx.stats.games_played > 0 {
        lines.push(Line::from(ctx.stats.summary()));
    }
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str) {
    let status_text = if status.is_empty() { "Ready" } else { status };
    let paragraph = Paragraph::new(status_text)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn instructions(state: TuiState) -> &'static str {
    match state {
        TuiState::SelectingCategory { .. } => "UP/DOWN or 1-7: Choose | ENTER: Start | ESC: Quit",
        TuiState::EnteringGuess => {
            "Type a letter or the full name | ENTER: Guess | CTRL+N: New round | ESC: Quit"
        }
        TuiState::GameOver => "N/ENTER: Play again | Q/ESC: Quit",
    }
}

fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
    let paragraph = Paragraph::new(instructions(state))
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Key presses that are not usable input: releases, repeats, and garbage
/// characters terminals emit around focus changes.
fn is_noise(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if let KeyCode::Char(c) = key.code {
        return c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD;
    }
    false
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Key handling for each screen. Holds no terminal.
struct InputState {
    state: TuiState,
    categories: Vec<CategorySummary>,
    current_input: String,
    error_message: String,
}

impl InputState {
    fn new() -> Self {
        Self {
            state: TuiState::SelectingCategory { selected: 0 },
            categories: Vec::new(),
            current_input: String::new(),
            error_message: String::new(),
        }
    }

    /// `Some(None)` means quit; `None` means keep waiting.
    fn handle_category_key(&mut self, key: KeyEvent) -> Option<Option<&'static Category>> {
        let TuiState::SelectingCategory { selected } = self.state else {
            return None;
        };
        let count = self.categories.len();
        match key.code {
            KeyCode::Esc => return Some(None),
            KeyCode::Up | KeyCode::Char('k') if count > 0 => {
                self.state = TuiState::SelectingCategory {
                    selected: (selected + count - 1) % count,
                };
            }
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.state = TuiState::SelectingCategory {
                    selected: (selected + 1) % count,
                };
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = self
                    .categories
                    .iter()
                    .position(|s| s.category.key.starts_with(c) && s.category.key.len() == 1);
                match index {
                    Some(index) => return Some(Some(self.categories[index].category)),
                    None => self.error_message = format!("No category {c}"),
                }
            }
            KeyCode::Enter => {
                if let Some(summary) = self.categories.get(selected) {
                    return Some(Some(summary.category));
                }
            }
            _ => {}
        }
        None
    }

    fn handle_guess_key(&mut self, key: KeyEvent, max_len: usize) -> Option<UserAction> {
        if key.code == KeyCode::Char('n') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(UserAction::NewGame);
        }
        if has_modifier_keys(&key) {
            debug_log!("Ignoring key with modifier: {:?}", key.modifiers);
            return None;
        }
        match key.code {
            KeyCode::Esc => return Some(UserAction::Exit),
            KeyCode::Char(c) => {
                let upper: Vec<char> = c.to_uppercase().collect();
                if self.current_input.chars().count() + upper.len() <= max_len {
                    self.error_message.clear();
                    self.current_input.extend(upper);
                } else {
                    self.error_message = format!("The name has only {max_len} characters");
                }
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter if self.current_input.is_empty() => {
                self.error_message = "Type a letter or the full name first".to_string();
            }
            KeyCode::Enter => {
                let guess = std::mem::take(&mut self.current_input);
                return Some(UserAction::Guess(guess));
            }
            _ => {}
        }
        None
    }

    fn handle_game_over_key(key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => Some(true),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(false),
            _ => None,
        }
    }
}

/// Terminal front-end. Restores the terminal when dropped.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    input: InputState,
    category_name: String,
    game: Option<GameState>,
    message: String,
    status: String,
    stats: SessionStats,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        log::info!("Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            input: InputState::new(),
            category_name: String::new(),
            game: None,
            message: String::new(),
            status: "Ready to start".to_string(),
            stats: SessionStats::default(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.input.state,
            categories: &self.input.categories,
            category_name: &self.category_name,
            game: self.game.as_ref(),
            current_input: &self.input.current_input,
            message: &self.message,
            error_message: &self.input.error_message,
            status: &self.status,
            stats: &self.stats,
        };
        self.terminal.draw(|f| render(f, &ctx))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            log::warn!("Draw error: {e}");
        }
    }

    /// Draw, then wait for the next usable key press. `Ok(None)` when the
    /// poll timed out or the event was ignored.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        self.draw()?;
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if is_noise(&key) => {
                debug_log!("Ignoring key event: {:?}", key);
                Ok(None)
            }
            Event::Key(key) => {
                debug_log!("Key: code={:?} modifiers={:?}", key.code, key.modifiers);
                Ok(Some(key))
            }
            other => {
                debug_log!("Ignoring non-key event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn choose_category(&mut self, categories: &[CategorySummary]) -> Option<&'static Category> {
        self.input.categories = categories.to_vec();
        self.input.state = TuiState::SelectingCategory { selected: 0 };
        self.input.current_input.clear();
        self.game = None;
        self.status = "Choose a category".to_string();
        loop {
            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(choice) = self.input.handle_category_key(key) {
                        return choice;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("Terminal input failed: {e}");
                    return None;
                }
            }
        }
    }

    fn display_round_start(&mut self, category: &Category, game: &GameState) {
        self.category_name = category.name.to_string();
        self.game = Some(game.clone());
        self.input.state = TuiState::EnteringGuess;
        self.input.error_message.clear();
        self.message = format!("Guess the artist's name ({} characters)", game.word_len());
        self.status = "Round in progress".to_string();
        self.draw_or_log();
    }

    fn read_guess(&mut self, game: &GameState) -> Option<UserAction> {
        self.game = Some(game.clone());
        self.input.state = TuiState::EnteringGuess;
        loop {
            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.input.handle_guess_key(key, game.word_len()) {
                        log::debug!("Action: {action:?}");
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("Terminal input failed: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_guess_result(&mut self, game: &GameState, outcome: GuessOutcome) {
        self.game = Some(game.clone());
        match outcome {
            GuessOutcome::Invalid | GuessOutcome::Duplicate => {
                self.input.error_message = outcome_message(outcome).to_string();
            }
            _ => {
                self.input.error_message.clear();
                self.message = outcome_message(outcome).to_string();
            }
        }
        self.status = format!("{} lives left", game.attempts_remaining());
        self.draw_or_log();
    }

    fn display_game_over(&mut self, game: &GameState, stats: &SessionStats) {
        self.game = Some(game.clone());
        self.stats = *stats;
        self.input.state = TuiState::GameOver;
        self.input.error_message.clear();
        let answer = game.answer().unwrap_or_default();
        self.message = if game.is_won() {
            format!("Congratulations! You guessed {answer} for {} points", game.score())
        } else {
            format!("Game over! The correct name was {answer}")
        };
        self.status = "Round over".to_string();
        self.draw_or_log();
    }

    fn confirm_play_again(&mut self) -> bool {
        loop {
            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(answer) = InputState::handle_game_over_key(key) {
                        return answer;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("Terminal input failed: {e}");
                    return false;
                }
            }
        }
    }

    fn display_error(&mut self, message: &str) {
        self.input.error_message = message.to_string();
        self.status = "Could not start round - choose another category".to_string();
        self.draw_or_log();
    }

    // The alternate screen is left as soon as the interface is dropped, so the
    // farewell is printed by the caller on the restored terminal.
    fn display_exit_message(&mut self, stats: &SessionStats) {
        self.stats = *stats;
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
