//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 输入框交互
    Submit,      // Enter / 点击 Add
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    Clear,       // Ctrl-U
}
