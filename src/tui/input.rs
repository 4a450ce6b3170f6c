use crossterm::event::{KeyCode, KeyEvent};

use crate::model::filter::Filter;
use crate::util::dates::parse_title_and_due;
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert | Mode::Edit => handle_entry(app, key),
        Mode::ConfirmDelete => handle_confirm_delete(app, key),
    }
}

// ---------------------------------------------------------------------------
// Navigate mode
// ---------------------------------------------------------------------------

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible_tasks().len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            let len = app.visible_tasks().len();
            app.cursor = len.saturating_sub(1);
        }

        // Filter tabs
        KeyCode::Tab => app.set_filter(app.filter.next()),
        KeyCode::BackTab => app.set_filter(app.filter.prev()),
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Active),
        KeyCode::Char('3') => app.set_filter(Filter::Completed),

        // Sort key
        KeyCode::Char('s') => app.cycle_sort(),

        // Task commands
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_task_id() {
                app.store.toggle_completed(id);
                app.clamp_cursor();
            }
        }
        KeyCode::Char('a') => {
            app.mode = Mode::Insert;
            app.input.clear();
            app.input_cursor = 0;
        }
        KeyCode::Char('e') => {
            if let Some(id) = app.cursor_task_id()
                && let Some(task) = app.store.task(id)
            {
                app.input = task.title.clone();
                app.input_cursor = app.input.len();
                app.editing_id = Some(id);
                app.mode = Mode::Edit;
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.cursor_task_id() {
                app.delete_id = Some(id);
                app.mode = Mode::ConfirmDelete;
            }
        }

        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Insert / Edit modes — single-line text entry
// ---------------------------------------------------------------------------

fn handle_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.reset_entry(),
        KeyCode::Enter => commit_entry(app),

        KeyCode::Char(c) => {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }
        KeyCode::Backspace => {
            if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(prev..app.input_cursor, "");
                app.input_cursor = prev;
            }
        }
        KeyCode::Left => {
            if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
        }
        KeyCode::Home => app.input_cursor = 0,
        KeyCode::End => app.input_cursor = app.input.len(),

        _ => {}
    }
}

fn commit_entry(app: &mut App) {
    match app.mode {
        Mode::Insert => {
            // A blank title is silently rejected by the store; stay in the
            // input line so the entry can be fixed or cancelled
            let (title, due) = parse_title_and_due(&app.input);
            if app.store.add_task(&title, due).is_some() {
                app.reset_entry();
                app.clamp_cursor();
            }
        }
        Mode::Edit => {
            if let Some(id) = app.editing_id
                && app.store.update_task(id, &app.input)
            {
                app.reset_entry();
            }
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Delete confirmation
// ---------------------------------------------------------------------------

fn handle_confirm_delete(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            if let Some(id) = app.delete_id {
                app.store.delete_task(id);
            }
            app.reset_entry();
            app.clamp_cursor();
        }
        _ => app.reset_entry(),
    }
}
