//! 键盘/鼠标事件映射 (Input -> Action)
//!
//! 将终端事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::actions::Action;
use super::state::BeerListContainer;
use super::view::layouts::AppLayout;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::Clear),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

/// 鼠标左键点击 Add 按钮即提交
pub fn get_mouse_action(mouse: MouseEvent, area: Rect) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let layout = AppLayout::split(area);
    layout
        .add_button
        .contains(Position::new(mouse.column, mouse.row))
        .then_some(Action::Submit)
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut BeerListContainer, key: KeyEvent) -> bool {
    match get_action(key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 处理鼠标事件，`area` 为当前终端区域
pub fn handle_mouse_event(app: &mut BeerListContainer, mouse: MouseEvent, area: Rect) -> bool {
    match get_mouse_action(mouse, area) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
