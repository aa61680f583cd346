//! 对话框状态管理
//!
//! 管理输入焦点、删除确认、失败提示和帮助面板的显示状态。

pub use crate::ui::components::confirm_dialog::ConfirmType;

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    /// 输入框是否获得焦点（获得焦点时按键写入输入框）
    pub input_focused: bool,
    /// 确认弹窗
    pub confirm: Option<ConfirmType>,
    /// 失败提示弹窗（必须手动关闭）
    pub alert: Option<String>,
    /// 是否显示帮助面板
    pub show_help: bool,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有模态弹窗挡住主界面
    pub fn has_modal(&self) -> bool {
        self.alert.is_some() || self.confirm.is_some() || self.show_help
    }
}
