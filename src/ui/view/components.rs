//! UI 组件
//!
//! 输入框、Add 按钮、条目列表

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

use crate::ui::input_area::{DraftState, InputArea};

/// 提交按钮文字
pub const ADD_LABEL: &str = "Add";

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
    scroll: u16,
) {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(value)
        .style(style)
        .scroll((0, scroll))
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(Line::from(label).centered())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

/// 单行输入框的横向滚动量与光标列偏移（均以显示宽度计）。
/// 光标占一格，草稿末尾始终可见。
pub fn input_viewport(text_width: usize, inner_width: u16) -> (u16, u16) {
    let visible = usize::from(inner_width.saturating_sub(1));
    let scroll = text_width.saturating_sub(visible);
    let cursor = (text_width - scroll).min(visible);
    (
        u16::try_from(scroll).unwrap_or(u16::MAX),
        u16::try_from(cursor).unwrap_or(u16::MAX),
    )
}

/// [组件] InputArea：输入框 + Add 按钮
pub fn render_input_area(frame: &mut Frame, field: Rect, button: Rect, input: &InputArea) {
    let is_editing = input.state() == DraftState::Editing;
    let text_width = Line::from(input.text()).width();
    let (scroll, cursor) = input_viewport(text_width, field.width.saturating_sub(2));

    render_input_widget(
        frame,
        field,
        "Beer",
        input.text(),
        is_editing,
        Color::Yellow,
        scroll,
    );
    frame.set_cursor_position((
        field.x.saturating_add(1).saturating_add(cursor),
        field.y.saturating_add(1),
    ));
    render_button(frame, button, ADD_LABEL);
}

/// [组件] BeerList：纯渲染，每个条目一行，保持顺序
#[derive(Debug, Clone, Copy, Default)]
pub struct BeerList<'a> {
    items: &'a [String],
    title: &'a str,
}

impl<'a> BeerList<'a> {
    /// `None` 等同于空列表
    pub fn new(items: Option<&'a [String]>) -> Self {
        Self {
            items: items.unwrap_or_default(),
            title: "",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn entries(&self) -> Vec<ListItem<'a>> {
        self.items
            .iter()
            .map(|item| ListItem::new(Line::from(format!("• {}", item))))
            .collect()
    }
}

impl Widget for BeerList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let list = List::new(self.entries())
            .block(Block::default().title(self.title).borders(Borders::ALL));
        Widget::render(list, area, buf);
    }
}
