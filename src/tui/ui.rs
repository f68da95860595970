//! UI rendering functions for the TUI.
//!
//! Implements the three-panel layout with search input, result list and
//! detail view using ratatui widgets and layout management.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use time::macros::format_description;
use time::{Date, Time};

use super::app::{App, Focus};
use crate::models::{Details, RecordKind};
use crate::query::highlight;

const PREVIEW_CHARS: usize = 40;

/// Main rendering function for the TUI.
///
/// Draws the search input, result list, detail view and shortcut bar.
/// Applies focus indicators and styling based on app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Search input at top, content in middle, shortcuts at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    // Result list (40%) | detail view (60%)
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    render_search_input(frame, app, main_chunks[0]);
    render_result_list(frame, app, content_chunks[0]);
    render_detail_view(frame, app, content_chunks[1]);
    render_shortcut_bar(frame, app, main_chunks[2]);
}

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn match_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn kind_style(kind: RecordKind) -> Style {
    let color = match kind {
        RecordKind::Note => Color::Blue,
        RecordKind::Task => Color::Green,
        RecordKind::Event => Color::Rgb(249, 115, 22),
    };
    Style::default().fg(color)
}

/// Splits `text` into spans with search matches emphasized.
fn highlighted_spans<'a>(text: &'a str, needle: &str, base: Style) -> Vec<Span<'a>> {
    highlight(text, needle)
        .into_iter()
        .map(|segment| {
            if segment.matched {
                Span::styled(segment.text, match_style())
            } else {
                Span::styled(segment.text, base)
            }
        })
        .collect()
}

/// Shortens `text` to `max` characters, adding an ellipsis when cut.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "????-??-??".to_string())
}

fn format_time(time: Time) -> String {
    time.format(format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "??:??".to_string())
}

/// Renders the search input with the active filters in the title.
fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = matches!(app.focus(), Focus::SearchInput);
    let state = app.controller().state();

    let mut title = format!(
        "Search [type: {} | category: {}]",
        state.type_filter(),
        state.category_filter()
    );
    if app.is_searching() {
        title.push_str(" searching...");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style(is_focused));

    let mut content = app.search_input().to_string();
    if is_focused {
        content.push('█');
    }

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Renders the ranked results: kind, pin marker, highlighted title and score.
fn render_result_list(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = matches!(app.focus(), Focus::ResultList);
    let needle = app.controller().state().query().text().to_string();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Results ({})", app.results().len()))
        .border_style(border_style(is_focused));

    if app.results().is_empty() {
        let empty = Paragraph::new("No results found\nTry adjusting your search terms or filters")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .results()
        .iter()
        .map(|result| {
            let record = &result.record;
            let kind = record.kind();

            let mut spans = vec![Span::styled(format!("[{kind}] "), kind_style(kind))];
            if record.is_pinned() {
                spans.push(Span::styled("* ", Style::default().fg(Color::Yellow)));
            }
            let preview = truncate(record.title(), PREVIEW_CHARS);
            spans.extend(
                highlighted_spans(&preview, &needle, Style::default())
                    .into_iter()
                    .map(|span| Span::styled(span.content.into_owned(), span.style)),
            );
            #[allow(clippy::cast_possible_truncation)]
            let percent = (result.score * 100.0).round() as u32;
            spans.push(Span::styled(
                format!(" {percent}%"),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::REVERSED),
    );

    let mut list_state = ListState::default();
    list_state.select(app.selected_index());

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Renders the selected record with matches highlighted in title and body.
fn render_detail_view(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = matches!(app.focus(), Focus::DetailView);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Detail")
        .border_style(border_style(is_focused));

    let needle = app.controller().state().query().text().to_string();
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);

    let content = if let Some(result) = app.selected_result() {
        let record = &result.record;
        let mut text = Text::default();

        text.lines.push(Line::from(highlighted_spans(record.title(), &needle, bold)));
        text.lines.push(Line::from(vec![
            Span::styled(record.kind().to_string(), kind_style(record.kind())),
            Span::styled(format!(" | {}", record.category()), muted),
            Span::styled(
                format!(" | {}% match", (result.score * 100.0).round()),
                muted,
            ),
        ]));
        text.lines.push(Line::from(""));

        for line in record.body().lines() {
            text.lines
                .push(Line::from(highlighted_spans(line, &needle, Style::default())));
        }

        if !record.tags().is_empty() {
            text.lines.push(Line::from(""));
            let mut spans = vec![Span::styled("Tags:", bold)];
            for tag in record.tags() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(tag.as_str(), Style::default().fg(Color::Cyan)));
            }
            text.lines.push(Line::from(spans));
        }

        text.lines.push(Line::from(""));
        match record.details() {
            Details::Note { pinned, archived } => {
                if *pinned {
                    text.lines.push(Line::from(Span::styled("Pinned", muted)));
                }
                if *archived {
                    text.lines.push(Line::from(Span::styled("Archived", muted)));
                }
            }
            Details::Task {
                priority,
                status,
                due_date,
            } => {
                text.lines.push(Line::from(vec![
                    Span::styled("Priority:", bold),
                    Span::raw(format!(" {priority}")),
                    Span::styled("  Status:", bold),
                    Span::raw(format!(" {status}")),
                ]));
                if let Some(due) = due_date {
                    text.lines.push(Line::from(vec![
                        Span::styled("Due:", bold),
                        Span::styled(format!(" {}", format_date(*due)), muted),
                    ]));
                }
            }
            Details::Event {
                date,
                time,
                duration_minutes,
                location,
                attendees,
            } => {
                text.lines.push(Line::from(vec![
                    Span::styled("When:", bold),
                    Span::styled(
                        format!(
                            " {} {} ({duration_minutes} min)",
                            format_date(*date),
                            format_time(*time)
                        ),
                        muted,
                    ),
                ]));
                if let Some(location) = location {
                    text.lines.push(Line::from(vec![
                        Span::styled("Where:", bold),
                        Span::raw(format!(" {location}")),
                    ]));
                }
                if !attendees.is_empty() {
                    text.lines.push(Line::from(vec![
                        Span::styled("With:", bold),
                        Span::raw(format!(" {}", attendees.join(", "))),
                    ]));
                }
            }
        }

        text
    } else {
        Text::from("No record selected")
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll(), 0));

    frame.render_widget(paragraph, area);
}

/// Renders the context-aware shortcut bar, or the latest message.
fn render_shortcut_bar(frame: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let sep_style = Style::default().fg(Color::DarkGray);

    if let Some(message) = app.message() {
        let line = Line::from(Span::styled(message, Style::default().fg(Color::Yellow)));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let quit_key = if app.focus() == Focus::SearchInput {
        "Ctrl+C"
    } else {
        "q"
    };

    let mut spans = vec![
        Span::styled(quit_key, key_style),
        Span::raw(": quit"),
        Span::styled(" | ", sep_style),
        Span::styled("Tab", key_style),
        Span::raw(": next panel"),
        Span::styled(" | ", sep_style),
        Span::styled("Ctrl+T", key_style),
        Span::raw(": type"),
        Span::styled(" | ", sep_style),
        Span::styled("Ctrl+G", key_style),
        Span::raw(": category"),
        Span::styled(" | ", sep_style),
        Span::styled("Esc", key_style),
        Span::raw(": reset"),
    ];

    if app.focus() == Focus::ResultList {
        spans.push(Span::styled(" | ", sep_style));
        spans.push(Span::styled("j/k", key_style));
        spans.push(Span::raw(": navigate"));
        spans.push(Span::styled(" | ", sep_style));
        spans.push(Span::styled("p", key_style));
        spans.push(Span::raw(": pin"));
        spans.push(Span::styled(" | ", sep_style));
        spans.push(Span::styled("d", key_style));
        spans.push(Span::raw(": delete"));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
