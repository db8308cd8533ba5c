mod config;
mod error;
mod generate;
mod logging;
mod models;
mod table;
mod ui;

use std::io;
use std::path::PathBuf;
use std::process;

use chrono::Local;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::prelude::*;

use crate::config::{Overrides, default_config_path, load_config};
use crate::error::AppError;
use crate::generate::generate_users;
use crate::ui::{App, handle_key_event, handle_mouse_event, render};

/// 可排序、可拖拽调整列顺序的用户数据表
#[derive(Debug, Parser)]
#[command(name = "usertable", version, about)]
struct Cli {
    /// 生成的用户数量
    #[arg(long, env = "USERTABLE_ROWS")]
    rows: Option<usize>,

    /// 随机种子，用于复现同一批数据
    #[arg(long)]
    seed: Option<u64>,

    /// 配置文件路径，默认 ~/.config/usertable/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 打印生效的配置后退出
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("错误: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli.config.clone().or_else(default_config_path);
    let config = match &config_path {
        Some(path) => load_config(path)?,
        None => Default::default(),
    }
    .merge(&Overrides {
        rows: cli.rows,
        seed: cli.seed,
    });
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let (_log_guard, log_path) = logging::init_logging(&config.log_filter)?;
    tracing::info!(
        config = ?config_path,
        log = %log_path.display(),
        rows = config.rows,
        seed = ?config.seed,
        "starting usertable"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let rows = generate_users(config.row_count()?, &mut rng, Local::now());

    // 创建应用状态
    let mut app = App::new(rows, config.column_order()?);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    tracing::info!(order = ?app.table.order().keys(), sort = ?app.table.sort_spec(), "exiting");

    Ok(result?)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let quit = match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key.code)?,
            Event::Mouse(mouse) => handle_mouse_event(app, mouse)?,
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
