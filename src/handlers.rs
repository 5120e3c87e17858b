use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, Focus};

pub fn handle_help_key(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc) {
        app.show_help = false;
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }
    if app.show_help {
        handle_help_key(app, key.code);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.jump_to_first(),
        KeyCode::Char('G') | KeyCode::End => app.jump_to_last(),
        KeyCode::Char('c') => app.clear_filters(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            app.toggle_filter_at(index);
        }
        _ => match app.focus {
            Focus::Books => handle_books_key(app, key.code),
            Focus::Filters => handle_filters_key(app, key.code),
        },
    }
}

fn handle_books_key(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Char('f') | KeyCode::Enter) {
        app.toggle_selected_favorite();
    }
}

fn handle_filters_key(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Char(' ') | KeyCode::Enter) {
        app.toggle_selected_filter();
    }
}

pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    handle_mouse_at(app, event, Instant::now());
}

/// Mouse handling with an explicit timestamp so double-clicks can be replayed.
pub fn handle_mouse_at(app: &mut App, event: MouseEvent, at: Instant) {
    if app.show_help {
        return;
    }
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(event.column, event.row, at),
        MouseEventKind::ScrollDown => app.scroll_books(true),
        MouseEventKind::ScrollUp => app.scroll_books(false),
        _ => {}
    }
}
