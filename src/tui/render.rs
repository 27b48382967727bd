use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

use crate::schema::classify::CHILDREN_MARKER;

/// One line of the schema pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRow {
    Separator(&'static str),
    Header(String),
    Field {
        /// Schema name of the owning type (not its display name).
        owner: String,
        name: String,
        description: Option<String>,
        has_children: bool,
        /// The field is currently selected in the query document.
        in_query: bool,
    },
}

impl RenderRow {
    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field { .. })
    }
}

#[derive(Debug)]
pub struct ExplorerRenderData<'a> {
    pub rows: &'a [RenderRow],
    pub cursor: Option<usize>,
    pub scroll: usize,
    pub query: &'a str,
    pub show_descriptions: bool,
    pub message: Option<&'a str>,
    pub show_help: bool,
}

const HINTS: &str = "j/k move  Tab next type  Enter toggle  ? help  q quit";

struct Areas {
    schema: Rect,
    query: Rect,
    status: Rect,
}

fn split(area: Rect) -> Areas {
    let outer = area.inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    let [panes, status] =
        Layout::vertical([Constraint::Min(6), Constraint::Length(4)]).areas(outer);
    let [schema, query] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(panes);
    Areas {
        schema,
        query,
        status,
    }
}

/// Number of schema rows visible inside the bordered schema pane.
pub fn schema_rows_visible(area: Rect) -> usize {
    split(area).schema.height.saturating_sub(2) as usize
}

pub fn draw(frame: &mut Frame, data: &ExplorerRenderData<'_>) {
    let areas = split(frame.area());

    let schema_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled(
                "SCHEMA",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{CHILDREN_MARKER} needs sub-selection"),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    let visible = schema_rows_visible(frame.area());
    let lines = data
        .rows
        .iter()
        .enumerate()
        .skip(data.scroll)
        .take(visible)
        .map(|(idx, row)| schema_line(row, data.cursor == Some(idx)))
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(lines).block(schema_block), areas.schema);

    let query_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::new(1, 1, 0, 0))
        .title(Span::styled(
            "QUERY",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ));
    let query = Paragraph::new(
        data.query
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
            .collect::<Vec<_>>(),
    )
    .block(query_block);
    frame.render_widget(query, areas.query);

    frame.render_widget(status_panel(data), areas.status);

    if data.show_help {
        render_help_overlay(frame);
    }
}

pub fn schema_line(row: &RenderRow, focused: bool) -> Line<'static> {
    match row {
        RenderRow::Separator(label) => Line::from(Span::styled(
            format!("── {label} ──"),
            Style::default().fg(Color::DarkGray),
        )),
        RenderRow::Header(name) => Line::from(Span::styled(
            name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        RenderRow::Field {
            name,
            has_children,
            in_query,
            ..
        } => {
            let indicator = if focused { ">" } else { " " };
            let check = if *in_query { "✓" } else { " " };
            let mut base = if *in_query {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            if focused {
                base = base.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            let mut spans = vec![Span::styled(format!("{indicator} {check} {name}"), base)];
            if *has_children {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    CHILDREN_MARKER,
                    Style::default().fg(Color::Magenta),
                ));
            }
            Line::from(spans)
        }
    }
}

fn status_panel<'a>(data: &ExplorerRenderData<'a>) -> Paragraph<'a> {
    let focused = data.cursor.and_then(|idx| data.rows.get(idx));
    let (selected, description) = match focused {
        Some(RenderRow::Field {
            owner,
            name,
            description,
            ..
        }) => (format!("SELECTED: {owner}.{name}"), description.as_deref()),
        _ => ("SELECTED: none".to_string(), None),
    };

    let second = match (data.message, description) {
        (Some(msg), _) => msg.to_string(),
        (None, Some(desc)) if data.show_descriptions => truncate_text(desc, 160),
        _ => HINTS.to_string(),
    };

    Paragraph::new(vec![
        Line::from(Span::styled(
            selected,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(second, Style::default().fg(Color::DarkGray))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::new(1, 1, 0, 0)),
    )
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect(frame.area(), 70, 50);
    frame.render_widget(Clear, area);
    let help = Paragraph::new(vec![
        Line::from("SCHEMA (left): entities, then objects without id, then scalars"),
        Line::from(format!("  ✓ selected in query   {CHILDREN_MARKER} needs nested fields")),
        Line::from(""),
        Line::from("  Up/down (j/k or arrows) move between fields"),
        Line::from("  Tab / Shift-Tab jump to the next / previous type"),
        Line::from("  Enter or Space adds or removes the field in the query"),
        Line::from(""),
        Line::from("The final query is printed when you quit."),
    ])
    .block(Block::default().title("Help").borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn truncate_text(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let mut out = text
        .chars()
        .take(max_width.saturating_sub(3))
        .collect::<String>();
    out.push_str("...");
    out
}

fn centered_rect(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .flex(Flex::Center)
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .flex(Flex::Center)
    .split(vertical[1])[1]
}
