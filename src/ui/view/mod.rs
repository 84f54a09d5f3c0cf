//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::BeerListContainer;
use components::{BeerList, render_input_area};
use layouts::AppLayout;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &BeerListContainer) {
    let layout = AppLayout::split(frame.area());

    render_title(frame, layout.title);
    render_input_area(frame, layout.text_field, layout.add_button, app.input());
    frame.render_widget(
        BeerList::new(Some(app.items().as_slice())).title(&app.title),
        layout.list,
    );
    render_help(frame, app, layout.help);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🍺 Beer List")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_help(frame: &mut Frame, app: &BeerListContainer, area: Rect) {
    let help_text = "[Enter] Add  [Backspace] 删除  [Ctrl-U] 清空  [Esc] 退出";

    let text = match app.message.as_deref() {
        Some(message) => format!("{}  |  {}", help_text, message),
        None => help_text.to_string(),
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Position};

    const WIDTH: u16 = 60;
    const HEIGHT: u16 = 16;

    fn draw(app: &BeerListContainer) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn area_text(buffer: &Buffer, area: Rect) -> Vec<String> {
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    /// 列表框内部的非空行
    fn list_rows(buffer: &Buffer) -> Vec<String> {
        let list = AppLayout::split(Rect::new(0, 0, WIDTH, HEIGHT)).list;
        let inner = Rect::new(list.x + 1, list.y + 1, list.width - 2, list.height - 2);
        area_text(buffer, inner)
            .into_iter()
            .map(|row| row.trim_end().to_string())
            .filter(|row| !row.is_empty())
            .collect()
    }

    #[test]
    fn renders_input_area_and_beer_list() {
        let mut app = BeerListContainer::new(&Config::default());
        app.input_mut().on_change("Resin");
        let buffer = draw(&app);
        let layout = AppLayout::split(Rect::new(0, 0, WIDTH, HEIGHT));

        let field = area_text(&buffer, layout.text_field);
        assert!(field[1].contains("Resin"));

        let button = area_text(&buffer, layout.add_button);
        assert!(button[1].contains("Add"));

        let list = area_text(&buffer, layout.list);
        assert!(list[0].contains("Beers"));
        assert!(list_rows(&buffer).is_empty());
    }

    fn draw_with_cursor(app: &BeerListContainer) -> (Buffer, Position) {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        (terminal.backend().buffer().clone(), cursor)
    }

    #[test]
    fn renders_huge_draft() {
        let mut app = BeerListContainer::new(&Config::default());
        app.input_mut().on_change("x".repeat(70_000));
        let (buffer, cursor) = draw_with_cursor(&app);
        let field = AppLayout::split(Rect::new(0, 0, WIDTH, HEIGHT)).text_field;

        assert!(area_text(&buffer, field)[1].contains("xxxx"));
        assert!(field.contains(cursor));
    }

    #[test]
    fn long_draft_scrolls_to_its_end() {
        let mut app = BeerListContainer::new(&Config::default());
        app.input_mut().on_change(format!("{}Resin", "a".repeat(100)));
        let (buffer, cursor) = draw_with_cursor(&app);
        let field = AppLayout::split(Rect::new(0, 0, WIDTH, HEIGHT)).text_field;

        let row = area_text(&buffer, field)[1].clone();
        assert!(row.trim_end_matches('│').trim_end().ends_with("Resin"));
        assert_eq!(cursor, Position::new(field.right() - 2, field.y + 1));
    }

    #[test]
    fn cursor_follows_display_width() {
        let mut app = BeerListContainer::new(&Config::default());
        app.input_mut().on_change("啤酒");
        let (_, cursor) = draw_with_cursor(&app);
        let field = AppLayout::split(Rect::new(0, 0, WIDTH, HEIGHT)).text_field;

        assert_eq!(cursor, Position::new(field.x + 1 + 4, field.y + 1));
    }

    #[test]
    fn renders_added_items_in_order() {
        let mut app = BeerListContainer::new(&Config::default());
        app.add_item("Sam Adams");
        app.add_item("Resin");

        assert_eq!(list_rows(&draw(&app)), ["• Sam Adams", "• Resin"]);
    }
}
