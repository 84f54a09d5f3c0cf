//! 布局计算
//!
//! 渲染与鼠标命中测试共用同一套布局

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Add 按钮宽度
pub const ADD_BUTTON_WIDTH: u16 = 9;

/// 主界面各区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub text_field: Rect,
    pub add_button: Rect,
    pub list: Rect,
    pub help: Rect,
}

impl AppLayout {
    pub fn split(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // 标题
                Constraint::Length(3), // 输入框 + 按钮
                Constraint::Min(3),    // 列表
                Constraint::Length(3), // 帮助
            ])
            .split(area);

        let input_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(ADD_BUTTON_WIDTH)])
            .split(rows[1]);

        Self {
            title: rows[0],
            text_field: input_row[0],
            add_button: input_row[1],
            list: rows[2],
            help: rows[3],
        }
    }
}
