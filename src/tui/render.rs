use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::filter::Filter;
use crate::model::task::Task;
use crate::util::dates::format_short;
use crate::util::unicode::{display_width, truncate_to_width};

use super::app::{App, Mode};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tab bar
            Constraint::Length(1), // separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(frame.area());

    render_tab_bar(frame, app, chunks[0]);
    render_separator(frame, chunks[1]);
    render_task_list(frame, app, chunks[2]);
    render_status_row(frame, app, chunks[3]);
}

// ---------------------------------------------------------------------------
// Tab bar
// ---------------------------------------------------------------------------

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, filter) in Filter::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("\u{2502}", Style::default().fg(Color::DarkGray)));
        }
        let style = if *filter == app.filter {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }

    // Remaining count, right-aligned
    let remaining = format!("{} left ", app.store.remaining());
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let width = area.width as usize;
    if used + remaining.len() < width {
        spans.push(Span::raw(" ".repeat(width - used - remaining.len())));
        spans.push(Span::styled(remaining, Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let line = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            line,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

// ---------------------------------------------------------------------------
// Task list
// ---------------------------------------------------------------------------

fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        let hint = match app.filter {
            Filter::All => "no tasks yet, press 'a' to add one",
            Filter::Active => "nothing left to do",
            Filter::Completed => "nothing completed yet",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {}", hint),
                Style::default().fg(Color::DarkGray),
            ))),
            area,
        );
        return;
    }

    let height = area.height as usize;
    // Keep the cursor row visible
    let scroll = app.cursor.saturating_sub(height.saturating_sub(1));

    let mut lines = Vec::with_capacity(height);
    for (i, task) in tasks.iter().enumerate().skip(scroll).take(height) {
        lines.push(task_row(task, i == app.cursor, area.width as usize));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn task_row<'a>(task: &Task, selected: bool, width: usize) -> Line<'a> {
    let marker = if selected { "\u{25B8} " } else { "  " };
    let checkbox = if task.completed { "[x] " } else { "[ ] " };

    let due = match task.due_date {
        Some(due) => format!(" {}", format_short(due)),
        None => String::new(),
    };

    let title_style = if task.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    let due_style = if task.is_overdue() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let fixed = display_width(marker) + display_width(checkbox) + display_width(&due);
    let title = truncate_to_width(&task.title, width.saturating_sub(fixed + 1));

    let mut spans = vec![
        Span::styled(
            marker.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(checkbox.to_string(), Style::default().fg(Color::Gray)),
        Span::styled(title, title_style),
    ];
    if !due.is_empty() {
        spans.push(Span::styled(due, due_style));
    }

    let mut line = Line::from(spans);
    if selected {
        line = line.style(Style::default().bg(Color::Rgb(40, 40, 48)));
    }
    line
}

// ---------------------------------------------------------------------------
// Status row
// ---------------------------------------------------------------------------

fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let line = match app.mode {
        Mode::Navigate => {
            let left = format!(" sort: {}", app.sort.label());
            let hint = "a add  e edit  d delete  space toggle  s sort  q quit ";
            status_line(left, hint, width)
        }
        Mode::Insert => entry_line(" new: ", app, "Enter add  @YYYY-MM-DD due  Esc cancel ", width),
        Mode::Edit => entry_line(" title: ", app, "Enter save  Esc cancel ", width),
        Mode::ConfirmDelete => {
            let title = app
                .delete_id
                .and_then(|id| app.store.task(id))
                .map(|t| t.title.clone())
                .unwrap_or_default();
            let left = format!(" delete \"{}\"?", truncate_to_width(&title, width / 2));
            status_line(left, "y delete  n keep ", width)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Left-aligned text with a dimmed right-aligned hint.
fn status_line<'a>(left: String, hint: &'a str, width: usize) -> Line<'a> {
    let left_width = display_width(&left);
    let hint_width = display_width(hint);
    let mut spans = vec![Span::styled(left, Style::default().fg(Color::Gray))];
    if left_width + hint_width < width {
        spans.push(Span::raw(" ".repeat(width - left_width - hint_width)));
        spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

/// The Insert/Edit input line with a block cursor at the edit position.
fn entry_line<'a>(prompt: &'a str, app: &App, hint: &'a str, width: usize) -> Line<'a> {
    let before = app.input[..app.input_cursor].to_string();
    let after = app.input[app.input_cursor..].to_string();
    let mut spans = vec![
        Span::styled(prompt, Style::default().fg(Color::Cyan)),
        Span::raw(before),
        Span::styled("\u{258C}", Style::default().fg(Color::Cyan)),
        Span::raw(after),
    ];

    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint);
    if used + hint_width < width {
        spans.push(Span::raw(" ".repeat(width - used - hint_width)));
        spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}
