// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive product locator (ratatui + crossterm): a search box with live results, the
//! animated store map, product details, turn-by-turn directions and a recently viewed list.

use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use tokio::sync::Mutex;

use crate::map::{MapEvent, MapState, Subscriptions, TimerKind, TICK_PERIOD};
use crate::model::{Product, Store, Waypoint};
use crate::query::{find_product_by_id, search, submit, suggest, SearchError, SearchOutcome};
use crate::render::MapStyle;
use crate::route::total_distance_meters;
use crate::sim::{PositionSimulator, POSITION_PERIOD};
use crate::ui::{SelectionSource, UiState};

mod map_widget;
mod theme;

pub use theme::ThemeError;
use theme::TuiTheme;

const BRAND: &str = "NEON·MART";
const TOAST_TTL: Duration = Duration::from_secs(3);
const MAX_POLL: Duration = Duration::from_millis(250);
const QUICK_PICKS: usize = 6;
const SUGGESTION_LIMIT: usize = 3;
const USER_STEP: f64 = 10.0;

/// Startup configuration for [`run`].
#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    pub style: MapStyle,
    /// Seed for the simulated position walk; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Submitted as if typed into the search box on startup.
    pub initial_query: Option<String>,
}

/// Runs the interactive terminal UI until the user quits.
pub fn run(options: TuiOptions) -> Result<(), Box<dyn Error>> {
    run_with_ui_state(options, Arc::new(Mutex::new(UiState::default())))
}

/// Like [`run`], sharing selection and position with other components (the MCP server).
///
/// Must not be called from inside an async task; the shared state is locked with
/// `blocking_lock`.
pub fn run_with_ui_state(
    options: TuiOptions,
    ui_state: Arc<Mutex<UiState>>,
) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut app = App::new(Store::builtin(), options.style, theme, ui_state);
    let mut simulator = PositionSimulator::from_seed(options.seed);
    app.set_user_location(simulator.location());
    if let Some(query) = options.initial_query {
        app.query = query;
        app.refresh_results();
        app.commit_search();
    }

    let mut terminal = TerminalSession::new()?;
    let mut timers = Subscriptions::new();
    let now = Instant::now();
    timers.subscribe(TimerKind::Animation, TICK_PERIOD, now);
    timers.subscribe(TimerKind::Position, POSITION_PERIOD, now);
    app.map.apply(MapEvent::Mount);

    let mut needs_draw = true;
    let result = (|| -> Result<(), Box<dyn Error>> {
        while !app.should_quit {
            needs_draw |= app.sync_from_ui_state();
            if needs_draw {
                terminal.draw(|frame| draw(frame, &mut app))?;
                needs_draw = false;
            }

            if event::poll(timers.poll_timeout(Instant::now(), MAX_POLL))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                        needs_draw = true;
                    }
                    Event::Resize(_, _) => needs_draw = true,
                    _ => {}
                }
            }

            for timer in timers.due(Instant::now()) {
                match timer {
                    TimerKind::Animation => needs_draw |= app.map.apply(MapEvent::Tick),
                    TimerKind::Position => {
                        app.set_user_location(simulator.step());
                        needs_draw = true;
                    }
                }
            }
        }
        Ok(())
    })();

    // The map surface goes away before the terminal is restored.
    app.map.apply(MapEvent::Unmount);
    drop(timers);
    drop(terminal);
    result
}

fn draw(frame: &mut Frame<'_>, app: &mut App<'_>) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let (main_area, status_area) = (layout[0], layout[1]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(main_area);
    let (map_area, sidebar_area) = (panes[0], panes[1]);

    render_map(frame, app, map_area);

    let directions_height = if app.style.directions_panel {
        Constraint::Length(app.map.steps().len().max(1) as u16 + 2)
    } else {
        Constraint::Length(0)
    };
    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(9),
            directions_height,
            Constraint::Length(crate::ui::MAX_RECENTLY_VIEWED as u16 + 2),
        ])
        .split(sidebar_area);

    render_search_panel(frame, app, sidebar[0]);
    render_results_panel(frame, app, sidebar[1]);
    render_details_panel(frame, app, sidebar[2]);
    if app.style.directions_panel {
        render_directions_panel(frame, app, sidebar[3]);
    }
    render_recent_panel(frame, app, sidebar[4]);

    if app.toast.as_ref().is_some_and(|toast| toast.expires_at <= Instant::now()) {
        app.toast = None;
    }
    frame.render_widget(Paragraph::new(footer_line(app)), status_area);
    let brand = Paragraph::new(Line::from(Span::styled(BRAND, app.theme.accent_style())))
        .alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    if app.search_mode == SearchMode::Editing {
        let cursor_x = sidebar[0]
            .x
            .saturating_add(3)
            .saturating_add(app.query.chars().count() as u16)
            .min(sidebar[0].right().saturating_sub(2));
        frame.set_cursor_position((cursor_x, sidebar[0].y.saturating_add(1)));
    }

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

fn render_map(frame: &mut Frame<'_>, app: &mut App<'_>, area: Rect) {
    let title = match app.map.selection() {
        Some(product) => format!(" Store Map · {} ", product.name()),
        None => " Store Map ".to_owned(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border_style(app.focus == Focus::Map))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Braille packs two dots per cell horizontally.
    app.map.apply(MapEvent::Resize {
        available_width: u32::from(inner.width) * 2,
    });
    match app.map.frame_commands(&app.style) {
        Some(commands) => {
            let canvas = map_widget::map_canvas(&commands, app.style.background, inner);
            frame.render_widget(canvas, inner);
        }
        None => {
            let placeholder = Paragraph::new("Map unavailable").style(app.theme.dim_style());
            frame.render_widget(placeholder, inner);
        }
    }
}

// Sidebar, footer and help rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Map,
    Results,
    Recent,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Map => Self::Results,
            Self::Results => Self::Recent,
            Self::Recent => Self::Map,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Inactive,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    kind: ToastKind,
    expires_at: Instant,
}

struct App<'s> {
    store: &'s Store,
    style: MapStyle,
    theme: TuiTheme,
    map: MapState<'s>,
    focus: Focus,
    search_mode: SearchMode,
    query: String,
    too_short: bool,
    results: Vec<&'s Product>,
    suggestions: Vec<&'s Product>,
    results_state: ListState,
    results_cursor_moved: bool,
    recent_state: ListState,
    ui_state: Arc<Mutex<UiState>>,
    ui_state_selection_rev: u64,
    follow_agent: bool,
    toast: Option<Toast>,
    show_help: bool,
    should_quit: bool,
}

impl<'s> App<'s> {
    fn new(
        store: &'s Store,
        style: MapStyle,
        theme: TuiTheme,
        ui_state: Arc<Mutex<UiState>>,
    ) -> Self {
        let map = MapState::new(store, style.route_options());
        let (selection_rev, follow_agent) = {
            let state = ui_state.blocking_lock();
            (state.selection_rev(), state.follow_agent())
        };
        Self {
            store,
            style,
            theme,
            map,
            focus: Focus::Map,
            search_mode: SearchMode::Inactive,
            query: String::new(),
            too_short: false,
            results: Vec::new(),
            suggestions: Vec::new(),
            results_state: ListState::default(),
            results_cursor_moved: false,
            recent_state: ListState::default(),
            ui_state,
            ui_state_selection_rev: selection_rev,
            follow_agent,
            toast: None,
            show_help: false,
            should_quit: false,
        }
    }

    fn set_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn recently_viewed(&self) -> Vec<&'s Product> {
        let state = self.ui_state.blocking_lock();
        state
            .recently_viewed()
            .iter()
            .filter_map(|id| find_product_by_id(self.store, id.as_str()))
            .collect()
    }

    fn select_product(&mut self, product: &'s Product) {
        self.map.apply(MapEvent::Select(Some(product.id().clone())));
        {
            let mut state = self.ui_state.blocking_lock();
            state.set_selection(SelectionSource::Human, Some(product.id().clone()));
            self.ui_state_selection_rev = state.selection_rev();
        }
        self.recent_state.select(Some(0));
        self.set_toast(
            ToastKind::Info,
            format!(
                "Located {} in Aisle {}",
                product.name(),
                product.location().aisle()
            ),
        );
    }

    fn clear_selection(&mut self) {
        if self.map.selection().is_none() {
            return;
        }
        self.map.apply(MapEvent::Select(None));
        let mut state = self.ui_state.blocking_lock();
        state.set_selection(SelectionSource::Human, None);
        self.ui_state_selection_rev = state.selection_rev();
    }

    fn set_user_location(&mut self, location: Waypoint) {
        self.map.apply(MapEvent::SetUserLocation(location));
        self.ui_state.blocking_lock().set_user_location(location);
    }

    fn move_user(&mut self, dx: f64, dy: f64) {
        if self.map.apply(MapEvent::MoveUser { dx, dy }) {
            let location = self.map.user_location();
            self.ui_state.blocking_lock().set_user_location(location);
        }
    }

    /// Picks up selections made by the agent. Returns whether anything changed on screen.
    fn sync_from_ui_state(&mut self) -> bool {
        let (selection_rev, source, selected, follow_agent) = {
            let state = self.ui_state.blocking_lock();
            (
                state.selection_rev(),
                state.selection_source(),
                state.selected_product_id().cloned(),
                state.follow_agent(),
            )
        };
        let mut changed = follow_agent != self.follow_agent;
        self.follow_agent = follow_agent;

        if selection_rev == self.ui_state_selection_rev {
            return changed;
        }
        self.ui_state_selection_rev = selection_rev;
        if source != SelectionSource::Agent || !self.follow_agent {
            return changed;
        }

        self.map.apply(MapEvent::Select(selected));
        changed = true;
        match self.map.selection() {
            Some(product) => {
                let message = format!(
                    "Agent located {} in Aisle {}",
                    product.name(),
                    product.location().aisle()
                );
                self.set_toast(ToastKind::Info, message);
            }
            None => self.set_toast(ToastKind::Info, "Agent cleared the selection"),
        }
        changed
    }

    fn toggle_follow_agent(&mut self) {
        self.follow_agent = !self.follow_agent;
        self.ui_state
            .blocking_lock()
            .set_follow_agent(self.follow_agent);
        self.set_toast(
            ToastKind::Info,
            if self.follow_agent {
                "Follow agent enabled"
            } else {
                "Follow agent disabled"
            },
        );
    }

    fn refresh_results(&mut self) {
        self.results_cursor_moved = false;
        self.suggestions.clear();
        match search(self.store, &self.query) {
            SearchOutcome::TooShort => {
                self.too_short = !self.query.trim().is_empty();
                self.results.clear();
            }
            SearchOutcome::Results { products, .. } => {
                self.too_short = false;
                if products.is_empty() {
                    self.suggestions = suggest(self.store, &self.query, SUGGESTION_LIMIT);
                }
                self.results = products;
            }
        }
        self.results_state
            .select((!self.results.is_empty()).then_some(0));
    }

    /// The "press Enter" action of the search box.
    fn commit_search(&mut self) {
        if self.results_cursor_moved {
            if let Some(product) = self
                .results_state
                .selected()
                .and_then(|idx| self.results.get(idx).copied())
            {
                self.search_mode = SearchMode::Inactive;
                self.select_product(product);
                return;
            }
        }

        match submit(self.store, &self.query) {
            Ok(product) => {
                self.search_mode = SearchMode::Inactive;
                self.select_product(product);
            }
            Err(SearchError::NoMatch) => {
                let hint = self
                    .suggestions
                    .first()
                    .map(|product| format!(" Did you mean {}?", product.name()))
                    .unwrap_or_default();
                self.set_toast(ToastKind::Error, format!("{}{hint}", SearchError::NoMatch));
            }
            Err(err) => self.set_toast(ToastKind::Error, err.to_string()),
        }
    }

    fn move_list_cursor(state: &mut ListState, len: usize, delta: isize) {
        if len == 0 {
            state.select(None);
            return;
        }
        let current = state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        state.select(Some(next as usize));
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the key asks to quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => self.show_help = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        if self.search_mode == SearchMode::Editing {
            self.handle_search_edit_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            KeyCode::Char('/') => {
                self.search_mode = SearchMode::Editing;
                self.focus = Focus::Results;
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Char('c') => self.clear_selection(),
            KeyCode::Char('a') => self.toggle_follow_agent(),
            KeyCode::Char('d') => {
                self.style.directions_panel = !self.style.directions_panel;
            }
            KeyCode::Char(digit @ '1'..='6') => {
                let idx = digit as usize - '1' as usize;
                if let Some(product) = self.store.products().iter().take(QUICK_PICKS).nth(idx) {
                    self.select_product(product);
                }
            }
            _ => match self.focus {
                Focus::Map => self.handle_map_key(code),
                Focus::Results => self.handle_results_key(code),
                Focus::Recent => self.handle_recent_key(code),
            },
        }
        false
    }

    fn handle_search_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.search_mode = SearchMode::Inactive,
            KeyCode::Enter => self.commit_search(),
            KeyCode::Backspace => {
                self.query.pop();
                self.refresh_results();
            }
            KeyCode::Up => {
                Self::move_list_cursor(&mut self.results_state, self.results.len(), -1);
                self.results_cursor_moved = true;
            }
            KeyCode::Down => {
                Self::move_list_cursor(&mut self.results_state, self.results.len(), 1);
                self.results_cursor_moved = true;
            }
            KeyCode::Char(ch) => {
                self.query.push(ch);
                self.refresh_results();
            }
            _ => {}
        }
    }

    fn handle_map_key(&mut self, code: KeyCode) {
        let (dx, dy) = match code {
            KeyCode::Left | KeyCode::Char('h') => (-USER_STEP, 0.0),
            KeyCode::Right | KeyCode::Char('l') => (USER_STEP, 0.0),
            KeyCode::Up | KeyCode::Char('k') => (0.0, -USER_STEP),
            KeyCode::Down | KeyCode::Char('j') => (0.0, USER_STEP),
            _ => return,
        };
        self.move_user(dx, dy);
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                Self::move_list_cursor(&mut self.results_state, self.results.len(), -1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                Self::move_list_cursor(&mut self.results_state, self.results.len(), 1);
            }
            KeyCode::Enter => {
                if let Some(product) = self
                    .results_state
                    .selected()
                    .and_then(|idx| self.results.get(idx).copied())
                {
                    self.select_product(product);
                }
            }
            _ => {}
        }
    }

    fn handle_recent_key(&mut self, code: KeyCode) {
        let recent = self.recently_viewed();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                Self::move_list_cursor(&mut self.recent_state, recent.len(), -1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                Self::move_list_cursor(&mut self.recent_state, recent.len(), 1);
            }
            KeyCode::Enter => {
                if let Some(product) = self
                    .recent_state
                    .selected()
                    .and_then(|idx| recent.get(idx).copied())
                {
                    self.select_product(product);
                }
            }
            _ => {}
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
