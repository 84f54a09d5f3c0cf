//! 输入组件 InputArea
//!
//! 持有草稿文本 (DraftText)，提交时把当前文本交给调用方提供的 SubmitHandler。

use tracing::debug;

use crate::models::ItemList;

/// 提交回调能力
pub trait SubmitHandler {
    fn on_submit(&mut self, text: &str);
}

impl<F: FnMut(&str)> SubmitHandler for F {
    fn on_submit(&mut self, text: &str) {
        self(text)
    }
}

/// 列表本身即为提交目标：追加，不做任何校验
impl SubmitHandler for ItemList {
    fn on_submit(&mut self, text: &str) {
        self.append(text);
        debug!(item = text, count = self.len(), "item added");
    }
}

/// 草稿状态，完全由 change 事件驱动
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Idle,
    Editing,
}

#[derive(Debug, Clone, Default)]
pub struct InputArea {
    text: String,
}

impl InputArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前草稿，即输入框显示的值
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> DraftState {
        if self.text.is_empty() {
            DraftState::Idle
        } else {
            DraftState::Editing
        }
    }

    /// 用新文本替换草稿
    pub fn on_change(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
    }

    /// 点击 Add：有回调则以当前草稿调用一次，没有则什么都不做。
    /// 不校验也不清空草稿。
    pub fn on_submit_click(&self, on_submit: Option<&mut dyn SubmitHandler>) {
        if let Some(handler) = on_submit {
            handler.on_submit(&self.text);
        }
    }

    pub fn push_char(&mut self, c: char) {
        let mut next = self.text.clone();
        next.push(c);
        self.on_change(next);
    }

    pub fn pop_char(&mut self) {
        let mut next = self.text.clone();
        next.pop();
        self.on_change(next);
    }
}
