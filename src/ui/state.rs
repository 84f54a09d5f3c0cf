//! 容器状态定义 (Model)
//!
//! BeerListContainer 独占条目列表，并持有输入组件

use crate::config::Config;
use crate::models::ItemList;

use super::input_area::InputArea;

/// 根组件状态
pub struct BeerListContainer {
    pub(super) items: ItemList,
    pub(super) input: InputArea,
    pub title: String,
    pub message: Option<String>,
}

impl BeerListContainer {
    /// 创建新的容器，列表初始为空
    pub fn new(config: &Config) -> Self {
        Self {
            items: ItemList::new(),
            input: InputArea::new(),
            title: config.title.clone(),
            message: None,
        }
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn input(&self) -> &InputArea {
        &self.input
    }

    #[cfg(test)]
    pub fn input_mut(&mut self) -> &mut InputArea {
        &mut self.input
    }
}
