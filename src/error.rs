use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    #[error("无法解析配置文件 {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("无法序列化配置: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("未知的列: {0}")]
    UnknownColumn(String),

    #[error("无效的列顺序: {0}")]
    InvalidColumnOrder(String),

    #[error("行数 {count} 超出上限 {max}")]
    InvalidRowCount { count: usize, max: usize },

    #[error("无法初始化日志: {0}")]
    Logging(String),
}
