mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use crate::config::{Config, config_path};
use crate::error::AppError;
use crate::ui::{BeerListContainer, render};

fn main() -> Result<(), AppError> {
    // 加载配置
    let path = config_path();
    let config = match &path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let log_path = logging::init(&config)?;
    info!(log = %log_path.display(), "beerlist starting");
    match &path {
        Some(path) => info!(config = %path.display(), "config loaded"),
        None => warn!("no config directory, using defaults"),
    }

    // 创建容器
    let mut app = BeerListContainer::new(&config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(items = app.items().len(), "beerlist exiting");

    result.map_err(AppError::from)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut BeerListContainer) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => ui::handle_key_event(app, key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                ui::handle_mouse_event(app, mouse, area)
            }
            _ => false,
        };

        if quit {
            break;
        }
    }
    Ok(())
}
