use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::ColumnKey;
use crate::table::ColumnOrder;

pub const DEFAULT_ROWS: usize = 500;

/// 没有虚拟滚动，行数需要有上限
pub const MAX_ROWS: usize = 100_000;

/// 配置文件结构 (config.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: None,
            columns: None,
            log_filter: "info".to_string(),
        }
    }
}

/// 命令行中可覆盖配置文件的部分
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rows: Option<usize>,
    pub seed: Option<u64>,
}

impl Config {
    /// 叠加命令行参数
    pub fn merge(mut self, overrides: &Overrides) -> Self {
        if let Some(rows) = overrides.rows {
            self.rows = rows;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.row_count()?;
        self.column_order().map(|_| ())
    }

    /// 要生成的行数，同时是最大的行 ID
    pub fn row_count(&self) -> Result<u32, AppError> {
        let invalid = AppError::InvalidRowCount {
            count: self.rows,
            max: MAX_ROWS,
        };
        if self.rows > MAX_ROWS {
            return Err(invalid);
        }
        u32::try_from(self.rows).map_err(|_| invalid)
    }

    /// 配置中的初始列顺序，未配置时使用默认顺序
    pub fn column_order(&self) -> Result<ColumnOrder, AppError> {
        match &self.columns {
            None => Ok(ColumnOrder::default()),
            Some(names) => {
                let keys = names
                    .iter()
                    .map(|name| name.parse::<ColumnKey>())
                    .collect::<Result<Vec<_>, _>>()?;
                ColumnOrder::from_keys(keys)
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, AppError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// 默认配置文件路径 (~/.config/usertable/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("usertable").join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时返回默认值
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
