use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::async_ops_state::AsyncOpsState;
use crate::client::{ApiRequest, TodoApi};
use crate::dialogs::{ConfirmType, DialogState};
use crate::model::Task;
use crate::storage::config::{save_config_to, Config};
use crate::task_list::TaskListView;
use crate::theme::{detect_system_theme, get_theme_colors, Theme};
use crate::ui_state::UiState;

/// Toast 默认显示时长
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务列表与连通状态
    pub view: TaskListView,
    /// 主题、Toast、选中行
    pub ui: UiState,
    /// 弹窗
    pub dialogs: DialogState,
    /// 后台请求
    pub async_ops: AsyncOpsState,
    /// 远端 API
    api: Arc<dyn TodoApi>,
    /// 当前使用的 API 地址（显示在 Header）
    pub base_url: String,
    /// 当前配置
    config: Config,
    /// 配置保存位置，None 表示不持久化
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(
        api: Arc<dyn TodoApi>,
        base_url: impl Into<String>,
        config: Config,
        config_path: Option<PathBuf>,
    ) -> Self {
        let theme = Theme::from_name(&config.theme.name);
        let last_system_dark = detect_system_theme();
        let colors = get_theme_colors(theme);

        Self {
            should_quit: false,
            view: TaskListView::new(),
            ui: UiState::new(theme, colors, last_system_dark),
            dialogs: DialogState::new(),
            async_ops: AsyncOpsState::new(),
            api,
            base_url: base_url.into(),
            config,
            config_path,
        }
    }

    /// 首次加载
    pub fn start(&mut self) {
        self.refresh();
    }

    fn dispatch(&mut self, request: ApiRequest) {
        self.async_ops.submit(Arc::clone(&self.api), request);
    }

    /// 重新拉取列表
    pub fn refresh(&mut self) {
        let request = self.view.refresh();
        self.dispatch(request);
    }

    /// 处理后台请求结果
    pub fn poll_bg_result(&mut self) {
        for outcome in self.async_ops.poll() {
            if let Some(follow_up) = self.view.apply(outcome) {
                self.dispatch(follow_up);
            }
        }
        self.ui.clamp_selection(self.view.tasks().len());

        // 一次只显示一条，关闭后再显示下一条
        if self.dialogs.alert.is_none() {
            self.dialogs.alert = self.view.take_alert();
        }
    }

    // ========== 列表选择 ==========

    /// 当前选中的任务；列表被隐藏（加载中或出错）时没有可操作的行
    pub fn selected_task(&self) -> Option<&Task> {
        if !self.view.is_list_visible() {
            return None;
        }
        self.ui.selected.and_then(|i| self.view.tasks().get(i))
    }

    pub fn select_next(&mut self) {
        self.ui.select_next(self.view.tasks().len());
    }

    pub fn select_previous(&mut self) {
        self.ui.select_previous(self.view.tasks().len());
    }

    // ========== 任务操作 ==========

    /// 切换选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let (id, completed) = (task.id.clone(), task.completed);
        let request = self.view.toggle(&id, completed);
        self.dispatch(request);
    }

    /// 打开删除确认弹窗
    pub fn request_delete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        self.dialogs.confirm = Some(ConfirmType::DeleteTask {
            id: task.id.clone(),
            title: task.title.clone(),
        });
    }

    /// 确认弹窗 - 确认
    pub fn confirm_dialog_yes(&mut self) {
        self.resolve_confirm(true);
    }

    /// 确认弹窗 - 取消
    pub fn confirm_dialog_no(&mut self) {
        self.resolve_confirm(false);
    }

    fn resolve_confirm(&mut self, confirmed: bool) {
        let Some(confirm) = self.dialogs.confirm.take() else {
            return;
        };
        match confirm {
            ConfirmType::DeleteTask { id, .. } => {
                if let Some(request) = self.view.delete(&id, confirmed) {
                    self.dispatch(request);
                }
            }
        }
    }

    /// 关闭失败提示，有排队的提示则继续显示
    pub fn dismiss_alert(&mut self) {
        self.dialogs.alert = self.view.take_alert();
    }

    // ========== 输入框 ==========

    pub fn focus_input(&mut self) {
        if self.view.is_input_disabled() {
            self.show_toast("Backend unreachable, press r to retry");
            return;
        }
        self.dialogs.input_focused = true;
    }

    pub fn blur_input(&mut self) {
        self.dialogs.input_focused = false;
    }

    pub fn input_char(&mut self, c: char) {
        self.view.input_char(c);
    }

    pub fn input_backspace(&mut self) {
        self.view.input_backspace();
    }

    /// 提交输入框（空白输入不发请求）
    pub fn submit_input(&mut self) {
        if let Some(request) = self.view.submit() {
            self.dispatch(request);
        }
    }

    // ========== 主题 ==========

    /// 切换到下一个主题并保存
    pub fn cycle_theme(&mut self) {
        let theme = self.ui.theme.next();
        self.ui.set_theme(theme);
        self.show_toast(format!("Theme: {}", theme.label()));

        self.config.theme.name = theme.label().to_string();
        if let Some(path) = &self.config_path {
            if let Err(e) = save_config_to(path, &self.config) {
                tracing::warn!(error = %e, "failed to save theme");
            }
        }
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        if self.ui.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.ui.last_system_dark {
            self.ui.last_system_dark = current_dark;
            self.ui.colors = get_theme_colors(Theme::Auto);
        }
    }

    // ========== 其他 ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.ui.show_toast(message, TOAST_DURATION);
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        self.ui.clear_expired_toast();
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

// ============================================================================
// Tests
// ============================================================================
