//! Interactive schema explorer: browse the classified schema and toggle
//! fields into the query document.

use std::collections::{BTreeSet, HashMap};
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};

use crate::query::names;
use crate::query::toggle::field_set;
use crate::schema::classify::{RenderModel, Row};
use crate::tui::input::{self, Action, Direction};
use crate::tui::render::{self, ExplorerRenderData, RenderRow};

const DEFAULT_PAGE: usize = 10;

/// Edit applied when a field row is activated: `(document, type, field) -> document`.
pub type ToggleFn = fn(&str, &str, &str) -> String;

pub struct Explorer {
    rows: Vec<RenderRow>,
    query: String,
    toggle: ToggleFn,
    cursor: Option<usize>,
    scroll: usize,
    visible_rows: usize,
    show_help: bool,
    show_descriptions: bool,
    message: Option<String>,
}

impl Explorer {
    pub fn new(model: &RenderModel, query: String, toggle: ToggleFn) -> Self {
        let rows = model
            .rows()
            .into_iter()
            .map(|row| match row {
                Row::Separator(category) => RenderRow::Separator(category.label()),
                Row::Header(ty) => RenderRow::Header(ty.display_name.clone()),
                Row::Field { owner, field } => RenderRow::Field {
                    owner: owner.name.clone(),
                    name: field.name.clone(),
                    description: field.description.clone(),
                    has_children: field.has_children,
                    in_query: false,
                },
            })
            .collect::<Vec<_>>();
        let cursor = rows.iter().position(RenderRow::is_field);

        let mut explorer = Self {
            rows,
            query,
            toggle,
            cursor,
            scroll: 0,
            visible_rows: usize::MAX,
            show_help: false,
            show_descriptions: true,
            message: None,
        };
        explorer.refresh_selection();
        explorer
    }

    pub fn with_descriptions(mut self, show: bool) -> Self {
        self.show_descriptions = show;
        self
    }

    pub fn into_query(self) -> String {
        self.query
    }

    /// Apply one key. Returns `true` when the explorer should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.handle_action(input::action_for_key(key))
    }

    pub fn handle_action(&mut self, action: Action) -> bool {
        self.message = None;
        if self.show_help {
            match action {
                Action::Quit | Action::ToggleHelp => self.show_help = false,
                _ => {}
            }
            return false;
        }

        match action {
            Action::Move(dir) => self.move_cursor(dir, 1),
            Action::Page(dir) => self.move_cursor(dir, self.page_size()),
            Action::NextType => self.jump_type(Direction::Down),
            Action::PrevType => self.jump_type(Direction::Up),
            Action::Toggle => self.toggle_selected(),
            Action::ToggleHelp => self.show_help = true,
            Action::Quit => return true,
            Action::Noop => {}
        }
        self.ensure_cursor_visible();
        false
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.set_viewport(frame.area());
        let data = ExplorerRenderData {
            rows: &self.rows,
            cursor: self.cursor,
            scroll: self.scroll,
            query: &self.query,
            show_descriptions: self.show_descriptions,
            message: self.message.as_deref(),
            show_help: self.show_help,
        };
        render::draw(frame, &data);
    }

    fn set_viewport(&mut self, area: Rect) {
        self.visible_rows = render::schema_rows_visible(area).max(1);
        self.ensure_cursor_visible();
    }

    fn page_size(&self) -> usize {
        if self.visible_rows == usize::MAX {
            DEFAULT_PAGE
        } else {
            self.visible_rows.saturating_sub(2).max(1)
        }
    }

    fn move_cursor(&mut self, dir: Direction, steps: usize) {
        let Some(mut idx) = self.cursor else {
            return;
        };
        for _ in 0..steps {
            match self.next_field(idx, dir) {
                Some(next) => idx = next,
                None => break,
            }
        }
        self.cursor = Some(idx);
    }

    fn next_field(&self, from: usize, dir: Direction) -> Option<usize> {
        match dir {
            Direction::Down => (from + 1..self.rows.len()).find(|&i| self.rows[i].is_field()),
            Direction::Up => (0..from).rev().find(|&i| self.rows[i].is_field()),
        }
    }

    /// Move to the first field of the next (or previous) type.
    fn jump_type(&mut self, dir: Direction) {
        let Some(current) = self.cursor else {
            return;
        };
        let owner_of = |idx: usize| match &self.rows[idx] {
            RenderRow::Field { owner, .. } => Some(owner.as_str()),
            _ => None,
        };
        let here = owner_of(current);

        let mut idx = current;
        while let Some(next) = self.next_field(idx, dir) {
            idx = next;
            if owner_of(idx) != here {
                break;
            }
        }
        if owner_of(idx) == here {
            return;
        }
        if dir == Direction::Up {
            let target = owner_of(idx);
            while let Some(prev) = self.next_field(idx, Direction::Up) {
                if owner_of(prev) != target {
                    break;
                }
                idx = prev;
            }
        }
        self.cursor = Some(idx);
    }

    fn toggle_selected(&mut self) {
        let Some(RenderRow::Field { owner, name, .. }) = self.cursor.and_then(|i| self.rows.get(i))
        else {
            return;
        };
        let (owner, name) = (owner.clone(), name.clone());
        self.query = (self.toggle)(&self.query, &owner, &name);
        tracing::debug!(%owner, %name, "toggled field");
        self.refresh_selection();

        let selected = self
            .cursor
            .and_then(|i| self.rows.get(i))
            .is_some_and(|row| matches!(row, RenderRow::Field { in_query: true, .. }));
        let verb = if selected { "added" } else { "removed" };
        self.message = Some(format!("{verb} {owner}.{name}"));
    }

    /// Recompute which field rows are present in the query document.
    ///
    /// Each block is located once, however many field rows its type has.
    fn refresh_selection(&mut self) {
        let mut selections: HashMap<String, BTreeSet<String>> = HashMap::new();
        for row in &mut self.rows {
            if let RenderRow::Field {
                owner,
                name,
                in_query,
                ..
            } = row
            {
                let fields = selections
                    .entry(names::block_id(owner))
                    .or_insert_with_key(|id| field_set(&self.query, id));
                *in_query = fields.contains(names::clean_field_name(name));
            }
        }
        tracing::trace!(blocks = selections.len(), "refreshed selection marks");
    }

    fn ensure_cursor_visible(&mut self) {
        let Some(cursor) = self.cursor else {
            return;
        };
        if cursor < self.scroll {
            // Keep the type header above the first field in view.
            self.scroll = cursor.saturating_sub(1);
        } else if self.visible_rows != usize::MAX && cursor >= self.scroll + self.visible_rows {
            self.scroll = cursor + 1 - self.visible_rows;
        }
    }
}

/// Run the explorer until the user quits and return the final query.
pub fn run(explorer: Explorer) -> Result<String> {
    let mut app = explorer;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| app.draw(f))?;
        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if matches!(key.kind, KeyEventKind::Release | KeyEventKind::Repeat) {
                continue;
            }
            if app.handle_key(key) {
                break;
            }
        }
    }

    Ok(app.into_query())
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}
