//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),  // 灰色
        border: Color::Rgb(68, 68, 68),    // 深灰边框
        ok: Color::Rgb(0, 255, 136),       // 绿色
        warning: Color::Rgb(255, 213, 79), // 黄色
        error: Color::Rgb(255, 85, 85),    // 红色
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        highlight: Color::Rgb(0, 150, 80),
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        ok: Color::Rgb(0, 150, 80),
        warning: Color::Rgb(200, 140, 0),
        error: Color::Rgb(200, 40, 40),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // polar night
        bg_secondary: Color::Rgb(59, 66, 82), // polar night lighter
        highlight: Color::Rgb(129, 161, 193), // frost darker
        text: Color::Rgb(236, 239, 244),      // snow storm
        muted: Color::Rgb(76, 86, 106),       // polar night light
        border: Color::Rgb(59, 66, 82),       // polar night
        ok: Color::Rgb(163, 190, 140),        // aurora green
        warning: Color::Rgb(235, 203, 139),   // aurora yellow
        error: Color::Rgb(191, 97, 106),      // aurora red
    }
}

/// Catppuccin 主题 (Mocha)
pub fn catppuccin_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(30, 30, 46),           // base
        bg_secondary: Color::Rgb(49, 50, 68), // surface0
        highlight: Color::Rgb(245, 194, 231), // pink
        text: Color::Rgb(205, 214, 244),      // text
        muted: Color::Rgb(127, 132, 156),     // overlay1
        border: Color::Rgb(69, 71, 90),       // surface1
        ok: Color::Rgb(166, 227, 161),        // green
        warning: Color::Rgb(249, 226, 175),   // yellow
        error: Color::Rgb(243, 139, 168),     // red
    }
}
