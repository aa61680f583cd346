/// 最近一次 list 请求的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityStatus {
    /// 首次加载尚未返回
    #[default]
    Checking,
    Connected,
    Error,
}

impl ConnectivityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectivityStatus::Checking => "Checking...",
            ConnectivityStatus::Connected => "Connected",
            ConnectivityStatus::Error => "Error",
        }
    }
}

/// 健康面板的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthRow {
    pub label: &'static str,
    pub value: &'static str,
    pub ok: bool,
}

/// 三层健康状态：Frontend / Backend / Database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemHealth {
    pub rows: [HealthRow; 3],
}

impl SystemHealth {
    /// 根据连通状态和当前错误推导三行状态
    ///
    /// Frontend 能渲染就是 Online；Backend 只看有没有错误；
    /// Database 直接显示连通状态，只有 Connected 算正常。
    pub fn derive(status: ConnectivityStatus, has_error: bool) -> Self {
        Self {
            rows: [
                HealthRow {
                    label: "Frontend",
                    value: "Online",
                    ok: true,
                },
                HealthRow {
                    label: "Backend",
                    value: if has_error { "Unreachable" } else { "Connected" },
                    ok: !has_error,
                },
                HealthRow {
                    label: "Database",
                    value: status.label(),
                    ok: status == ConnectivityStatus::Connected,
                },
            ],
        }
    }
}
