mod app;
mod async_ops_state;
mod cli;
mod client;
mod dialogs;
mod error;
mod event;
mod logging;
mod model;
mod storage;
mod task_list;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use client::{HttpTodoApi, TodoApi};
use logging::LogTarget;
use storage::config::{self, Config, API_URL_ENV};

/// 启动 TUI 界面
fn run_tui(api: Arc<dyn TodoApi>, base_url: String, config: Config) -> io::Result<()> {
    let config_path = config::config_path();

    // 初始化终端
    let mut terminal = ratatui::init();

    let mut app = App::new(api, base_url, config, Some(config_path));
    app.start();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

/// Set up panic hook to restore terminal state on panic
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 检查后台请求结果
        app.poll_bg_result();

        // 渲染界面
        terminal.draw(|frame| ui::dashboard::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // 解析命令行参数
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    // 只有 TUI 接管终端：panic 时恢复终端，日志改写文件
    if command.uses_terminal() {
        install_panic_hook();
        logging::init(LogTarget::File);
    } else {
        logging::init(LogTarget::Stderr);
    }

    let config = config::load_config();
    let env_url = std::env::var(API_URL_ENV).ok();
    let base_url = match config::resolve_base_url(&config, env_url, cli.api_url) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(base_url = %base_url, "using todo API");

    let api: Arc<dyn TodoApi> = Arc::new(HttpTodoApi::new(&base_url, config.api.timeout()));

    // 统一调度
    let result = match command {
        Commands::Tui => run_tui(api, base_url, config).map(|_| true),
        Commands::List => cli::tasks::list(api.as_ref(), &mut io::stdout()),
        Commands::Add { title } => cli::tasks::add(api.as_ref(), &title, &mut io::stdout()),
        Commands::Toggle { id } => cli::tasks::toggle(api.as_ref(), &id, &mut io::stdout()),
        Commands::Delete { id, yes } => cli::tasks::delete(
            api.as_ref(),
            &id,
            yes,
            &mut io::stdin().lock(),
            &mut io::stdout(),
        ),
        Commands::Health => cli::tasks::health(api.as_ref(), &mut io::stdout()),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}
