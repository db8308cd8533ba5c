use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::AppError;

/// 覆盖配置中日志级别的环境变量
pub const LOG_ENV: &str = "USERTABLE_LOG";

/// 日志目录 (~/.local/share/usertable/)
fn log_dir() -> Result<PathBuf, AppError> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| AppError::Logging("无法获取用户数据目录".to_string()))?
        .join("usertable");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 初始化文件日志，终端界面占用了标准输出
///
/// 返回的 guard 必须存活到程序结束，否则缓冲中的日志会丢失。
pub fn init_logging(default_filter: &str) -> Result<(WorkerGuard, PathBuf), AppError> {
    let path = log_dir()?.join("usertable.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok((guard, path))
}
