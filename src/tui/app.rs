//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task store for the
//! session and the view state around it: the focused zone, the two input
//! fields, the filter selector, and the task table. Input handling and
//! rendering both dispatch on the focused zone.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};

use crate::fields::{Filter, Status};
use crate::store::{format_filter, format_status, TaskStore};
use crate::tui::colors::{GOLD, GREEN};
use crate::tui::input::InputField;

/// Interactive zones of the editor page, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Title,
    Description,
    Filter,
    Tasks,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Description,
            Focus::Description => Focus::Filter,
            Focus::Filter => Focus::Tasks,
            Focus::Tasks => Focus::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Title => Focus::Tasks,
            Focus::Description => Focus::Title,
            Focus::Filter => Focus::Description,
            Focus::Tasks => Focus::Filter,
        }
    }
}

/// Main application state for the terminal user interface.
///
/// `visible` caches the id list returned by the store's current projection
/// and is re-fetched after every mutation, before the next draw; the table
/// renders only from that snapshot.
pub struct App {
    store: TaskStore,
    focus: Focus,
    show_help: bool,
    title: InputField,
    description: InputField,
    table_state: TableState,
    visible: Vec<u64>,
    status_message: String,
}

impl App {
    /// Create a new App with an empty store and the given initial filter.
    pub fn new(filter: Filter) -> Self {
        let mut store = TaskStore::new();
        store.set_filter(filter);
        let mut app = App {
            store,
            focus: Focus::Title,
            show_help: false,
            title: InputField::new(),
            description: InputField::new(),
            table_state: TableState::default(),
            visible: Vec::new(),
            status_message: String::new(),
        };
        app.refresh_visible();
        app
    }

    /// Re-fetch the visible id list from the store and restore the table
    /// selection: the previously selected task keeps the selection while it
    /// is still visible, otherwise the first row is selected, or nothing
    /// when the view is empty.
    fn refresh_visible(&mut self) {
        let old_selected_id = self
            .table_state
            .selected()
            .and_then(|idx| self.visible.get(idx))
            .copied();

        self.visible = self.store.visible_tasks().iter().map(|t| t.id).collect();

        match old_selected_id.and_then(|id| self.visible.iter().position(|&v| v == id)) {
            Some(idx) => self.table_state.select(Some(idx)),
            None if self.visible.is_empty() => self.table_state.select(None),
            None => self.table_state.select(Some(0)),
        }
    }

    fn selected_id(&self) -> Option<u64> {
        self.table_state
            .selected()
            .and_then(|idx| self.visible.get(idx))
            .copied()
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Submit the add form. On success both inputs are cleared and focus
    /// returns to the title field for the next capture; a blank title adds
    /// nothing and the inputs keep what was typed.
    fn submit_add(&mut self) {
        if let Some(id) = self.store.add_task(&self.title.value, &self.description.value) {
            self.title = InputField::new();
            self.description = InputField::new();
            self.focus = Focus::Title;
            self.refresh_visible();
            self.set_status_message(format!("Added task {id}"));
        }
    }

    fn complete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            if self.store.complete_task(id) {
                self.refresh_visible();
                self.set_status_message(format!("Completed task {id}"));
            }
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            if self.store.delete_task(id) {
                self.refresh_visible();
                self.set_status_message(format!("Deleted task {id}"));
            }
        }
    }

    fn cycle_filter(&mut self, forward: bool) {
        let next = if forward {
            match self.store.filter() {
                Filter::All => Filter::Completed,
                Filter::Completed => Filter::Pending,
                Filter::Pending => Filter::All,
            }
        } else {
            match self.store.filter() {
                Filter::All => Filter::Pending,
                Filter::Completed => Filter::All,
                Filter::Pending => Filter::Completed,
            }
        };
        self.store.set_filter(next);
        self.refresh_visible();
    }

    /// Apply one key event. Returns true when the application should quit.
    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        self.clear_status_message();

        // Ctrl+C / Ctrl+Q quit from any view, help included.
        if modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            return true;
        }

        if self.show_help {
            return self.handle_help_key(key);
        }

        match key {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                false
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                false
            }
            _ => match self.focus {
                Focus::Title | Focus::Description => {
                    self.handle_field_key(key);
                    false
                }
                Focus::Filter => {
                    self.handle_filter_key(key);
                    false
                }
                Focus::Tasks => self.handle_tasks_key(key),
            },
        }
    }

    fn handle_field_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => self.focused_field().handle_char(c),
            KeyCode::Backspace => self.focused_field().handle_backspace(),
            KeyCode::Delete => self.focused_field().handle_delete(),
            KeyCode::Left => self.focused_field().move_cursor_left(),
            KeyCode::Right => self.focused_field().move_cursor_right(),
            KeyCode::Enter => self.submit_add(),
            KeyCode::Esc => self.focus = Focus::Tasks,
            KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Down => self.focus = self.focus.next(),
            _ => {}
        }
    }

    fn focused_field(&mut self) -> &mut InputField {
        match self.focus {
            Focus::Description => &mut self.description,
            _ => &mut self.title,
        }
    }

    fn handle_filter_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left => self.cycle_filter(false),
            KeyCode::Right => self.cycle_filter(true),
            KeyCode::Esc => self.focus = Focus::Tasks,
            KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Down => self.focus = self.focus.next(),
            _ => {}
        }
    }

    fn handle_tasks_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc => return true,
            KeyCode::Up => {
                if let Some(selected) = self.table_state.selected() {
                    if selected > 0 {
                        self.table_state.select(Some(selected - 1));
                    }
                } else if !self.visible.is_empty() {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::Down => {
                if let Some(selected) = self.table_state.selected() {
                    if selected + 1 < self.visible.len() {
                        self.table_state.select(Some(selected + 1));
                    }
                } else if !self.visible.is_empty() {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::Char('c') => self.complete_selected(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('a') => self.focus = Focus::Title,
            KeyCode::Char('f') => self.focus = Focus::Filter,
            KeyCode::Char('h') => self.show_help = true,
            _ => {}
        }
        false
    }

    fn handle_help_key(&mut self, key: KeyCode) -> bool {
        if matches!(key, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h')) {
            self.show_help = false;
        }
        false
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if self.handle_key(key.code, key.modifiers) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Render the page header with the application name.
    fn render_header(&mut self, f: &mut Frame, area: Rect) {
        let header_text = vec![Line::from(vec![
            Span::styled("TASK MANAGER", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                "single session, in-memory",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ])];

        let header_block = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header_block, area);
    }

    /// Render one of the two text input fields, with a placeholder while
    /// empty and a gold border while focused.
    fn render_input(&mut self, f: &mut Frame, area: Rect, which: Focus) {
        let (field, label, placeholder) = match which {
            Focus::Description => (&self.description, "Task Description", "Enter task description"),
            _ => (&self.title, "Task Title", "Enter task title"),
        };
        let border_style = if self.focus == which {
            Style::default().fg(GOLD)
        } else {
            Style::default()
        };
        let contents = if field.value.is_empty() {
            Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(field.value.as_str())
        };
        let input = contents.block(
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .border_style(border_style),
        );
        f.render_widget(input, area);
    }

    /// Render the `< Filter >` selector.
    fn render_filter_selector(&mut self, f: &mut Frame, area: Rect) {
        let border_style = if self.focus == Focus::Filter {
            Style::default().fg(GOLD)
        } else {
            Style::default()
        };
        let selector = Paragraph::new(format!("< {} >", format_filter(self.store.filter())))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Show")
                    .border_style(border_style),
            );
        f.render_widget(selector, area);
    }

    /// Render the task table for the current projection, with a "No tasks"
    /// placeholder row when the view is empty.
    fn render_task_table(&mut self, f: &mut Frame, area: Rect) {
        let border_style = if self.focus == Focus::Tasks {
            Style::default().fg(GOLD)
        } else {
            Style::default()
        };

        let header_cells = ["Title", "Description", "Status", "Actions"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .height(1);

        let mut rows: Vec<Row> = self
            .visible
            .iter()
            .filter_map(|&id| self.store.get(id))
            .map(|task| {
                let actions = match task.status {
                    Status::Pending => "complete [c]  delete [d]",
                    Status::Completed => "delete [d]",
                };
                let row_style = match task.status {
                    Status::Completed => Style::default().fg(Color::DarkGray),
                    Status::Pending => Style::default().fg(Color::White),
                };
                let status_cell = match task.status {
                    Status::Completed => {
                        Cell::from(format_status(task.status)).style(Style::default().fg(GREEN))
                    }
                    Status::Pending => Cell::from(format_status(task.status)),
                };
                Row::new(vec![
                    Cell::from(task.title.as_str()),
                    Cell::from(task.description.as_str()),
                    status_cell,
                    Cell::from(actions),
                ])
                .style(row_style)
            })
            .collect();

        if rows.is_empty() {
            rows.push(
                Row::new(vec![Cell::from("No tasks")])
                    .style(Style::default().fg(Color::DarkGray)),
            );
        }

        let widths = [
            Constraint::Min(20),    // Title
            Constraint::Min(30),    // Description
            Constraint::Length(10), // Status
            Constraint::Length(26), // Actions
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Tasks ({}/{})", self.visible.len(), self.store.len()))
                    .border_style(border_style),
            )
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    /// Render the editor page: header, inputs, selector, table.
    fn render_editor(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // title input
                Constraint::Length(3), // description input
                Constraint::Length(3), // filter selector
                Constraint::Min(0),    // task table
            ])
            .split(area);

        self.render_header(f, chunks[0]);
        self.render_input(f, chunks[1], Focus::Title);
        self.render_input(f, chunks[2], Focus::Description);
        self.render_filter_selector(f, chunks[3]);
        self.render_task_table(f, chunks[4]);

        let cursor_field = match self.focus {
            Focus::Title => Some((chunks[1], &self.title)),
            Focus::Description => Some((chunks[2], &self.description)),
            _ => None,
        };
        if let Some((chunk, field)) = cursor_field {
            f.set_cursor_position((chunk.x + field.cursor as u16 + 1, chunk.y + 1));
        }
    }

    /// Render the help screen with keyboard shortcuts.
    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let help_text = vec![
            Line::from(vec![Span::styled(
                "Task Manager Help",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Anywhere:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from("  Tab/Shift+Tab  Move focus between zones"),
            Line::from("  Ctrl+C/Ctrl+Q  Quit"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Title / Description fields:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from("  Enter          Add the task (blank titles are ignored)"),
            Line::from("  Up/Down        Previous/next zone"),
            Line::from("  Esc            Jump to the task table"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Show selector:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from("  Left/Right     Cycle All / Completed / Pending"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Task table:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from("  Up/Down        Select a task"),
            Line::from("  c              Complete the selected task"),
            Line::from("  d              Delete the selected task"),
            Line::from("  a              Jump to the title field"),
            Line::from("  f              Jump to the Show selector"),
            Line::from("  h              Show this help"),
            Line::from("  Esc            Quit"),
            Line::from(""),
            Line::from("Press Esc, 'q' or 'h' to return"),
        ];

        let help = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .alignment(Alignment::Left);
        f.render_widget(help, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else if self.show_help {
            "Help".to_string()
        } else {
            format!(
                "Showing {} of {} | Filter: {} | 'h' on the table for help",
                self.visible.len(),
                self.store.len(),
                format_filter(self.store.filter()),
            )
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }

    /// Main render function: the editor page (or help) plus the status bar.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        if self.show_help {
            self.render_help(f, chunks[0]);
        } else {
            self.render_editor(f, chunks[0]);
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
