//! Main explorer application state and logic

use crate::parser::lexer::Lexer;
use crate::parser::parse::{ParseOutput, Parser};
use crate::parser::token::Token;
use crate::repl::constants::{HISTORY_LIMIT, PAGE_SCROLL, POLL_INTERVAL_MS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tokens,
    Tree,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: tokens -> tree -> diagnostics)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Tokens,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Tokens => FocusedPane::Diagnostics,
            FocusedPane::Tree => FocusedPane::Tokens,
            FocusedPane::Diagnostics => FocusedPane::Tree,
        }
    }
}

/// One submitted line with everything the front end produced for it
#[derive(Debug, Clone)]
pub struct Entry {
    pub source: String,
    pub tokens: Vec<Token>,
    pub output: ParseOutput,
}

impl Entry {
    /// Scan and parse `source`, each with its own fresh lexer
    pub fn new(source: String) -> Self {
        let tokens = Lexer::new(&source).tokenize();
        let output = Parser::from_source(&source).parse_program();
        Entry {
            source,
            tokens,
            output,
        }
    }
}

/// The main application state
pub struct App {
    /// Line being edited
    pub input: String,

    /// Submitted lines, oldest first, capped at `HISTORY_LIMIT`
    pub history: Vec<Entry>,

    /// Index into `history` while recalling with Up/Down
    pub recall: Option<usize>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub tokens_scroll: usize,
    pub tree_scroll: usize,
    pub diagnostics_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        App {
            input: String::new(),
            history: Vec::new(),
            recall: None,
            focused_pane: FocusedPane::Tokens,
            tokens_scroll: 0,
            tree_scroll: 0,
            diagnostics_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// The entry shown in the panes: the recalled one, else the latest
    pub fn current_entry(&self) -> Option<&Entry> {
        shown_entry(&self.history, self.recall)
    }

    /// Run the explorer event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, then the input line, then the status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        // Right column: Tree (top) | Diagnostics (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[1]);

        // Borrow `history` alone so the scroll offsets stay mutable
        let entry = shown_entry(&self.history, self.recall);

        super::panes::render_tokens_pane(
            frame,
            columns[0],
            entry.map(|e| e.tokens.as_slice()),
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            right_rows[0],
            entry.map(|e| &e.output.program),
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            right_rows[1],
            entry.map(|e| e.output.errors.as_slice()),
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        super::panes::render_input_line(frame, main_chunks[1], &self.input, self.recall.is_some());

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            entry.map_or(0, |e| e.output.errors.len()),
            self.history.len(),
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.recall = None;
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.recall = None;
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Up => self.recall_older(),
            KeyCode::Down => self.recall_newer(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE_SCROLL);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE_SCROLL);
            }
            _ => {}
        }
    }

    /// Parse the input line and push it onto the history
    fn submit(&mut self) {
        if self.input.trim().is_empty() {
            self.status_message = "Nothing to parse".to_string();
            return;
        }

        let entry = Entry::new(std::mem::take(&mut self.input));
        let statements = entry.output.program.statements.len();
        let errors = entry.output.errors.len();

        self.status_message = if errors == 0 {
            format!("Parsed {} statement(s)", statements)
        } else {
            format!("Parsed {} statement(s), {} error(s)", statements, errors)
        };

        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(entry);
        self.recall = None;
        self.tokens_scroll = 0;
        self.tree_scroll = 0;
        self.diagnostics_scroll = 0;
    }

    /// Step back through history, copying the recalled line into the input
    fn recall_older(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.recall {
            Some(index) => index.saturating_sub(1),
            None => self.history.len() - 1,
        };
        self.recall = Some(index);
        self.input = self.history[index].source.clone();
    }

    fn recall_newer(&mut self) {
        match self.recall {
            Some(index) if index + 1 < self.history.len() => {
                self.recall = Some(index + 1);
                self.input = self.history[index + 1].source.clone();
            }
            Some(_) => {
                self.recall = None;
                self.input.clear();
            }
            None => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Tree => &mut self.tree_scroll,
            FocusedPane::Diagnostics => &mut self.diagnostics_scroll,
        }
    }
}

/// The recalled entry if there is one, else the latest
fn shown_entry(history: &[Entry], recall: Option<usize>) -> Option<&Entry> {
    match recall {
        Some(index) => history.get(index),
        None => history.last(),
    }
}
