//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和条目追加

use super::actions::Action;
use super::input_area::SubmitHandler;
use super::state::BeerListContainer;

impl BeerListContainer {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Submit => self.submit(),
            Action::Input(c) => self.input.push_char(c),
            Action::DeleteChar => self.input.pop_char(),
            Action::Clear => self.input.on_change(""),
        }
        false
    }

    /// 追加到列表末尾
    pub fn add_item(&mut self, text: &str) {
        self.items.on_submit(text);
        self.note_added();
    }

    /// 以当前草稿触发提交，回调绑定到本容器的列表
    pub fn submit(&mut self) {
        self.input.on_submit_click(Some(&mut self.items));
        self.note_added();
    }

    fn note_added(&mut self) {
        self.message = self
            .items
            .as_slice()
            .last()
            .map(|text| format!("Added \"{}\"", text));
    }
}
