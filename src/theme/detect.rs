//! 系统深浅色检测

use std::process::Command;

/// 检测系统是否处于深色模式
///
/// 优先看终端导出的 `COLORFGBG`，其次在 macOS 上读取 AppleInterfaceStyle，
/// 都拿不到时视为浅色。
pub fn detect_system_theme() -> bool {
    if let Some(dark) = std::env::var("COLORFGBG").ok().as_deref().and_then(parse_colorfgbg) {
        return dark;
    }
    cfg!(target_os = "macos") && macos_prefers_dark()
}

/// 解析 `COLORFGBG`（形如 "15;0" 或 "15;default;0"），按背景色号判断
fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    // 0-6 和 8 是暗色背景
    Some(bg <= 6 || bg == 8)
}

fn macos_prefers_dark() -> bool {
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}
