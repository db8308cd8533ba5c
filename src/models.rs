use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};

use crate::error::AppError;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// 终端中一个字符单元约等于的像素宽度
const PIXELS_PER_CELL: u16 = 8;

/// 用户记录，生成后不可变
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub registered_date: DateTime<Local>,
}

impl Row {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 注册至今的天数，向下取整
    pub fn days_since_registration(&self, now: DateTime<Local>) -> i64 {
        (now - self.registered_date)
            .num_milliseconds()
            .div_euclid(MILLIS_PER_DAY)
    }
}

/// 列标识，包括两个计算列 (fullName, dsr)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Id,
    FirstName,
    LastName,
    FullName,
    Email,
    City,
    RegisteredDate,
    Dsr,
}

impl ColumnKey {
    /// 默认的列顺序
    pub const ALL: [ColumnKey; 8] = [
        ColumnKey::Id,
        ColumnKey::FirstName,
        ColumnKey::LastName,
        ColumnKey::FullName,
        ColumnKey::Email,
        ColumnKey::City,
        ColumnKey::RegisteredDate,
        ColumnKey::Dsr,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKey::Id => "id",
            ColumnKey::FirstName => "firstName",
            ColumnKey::LastName => "lastName",
            ColumnKey::FullName => "fullName",
            ColumnKey::Email => "email",
            ColumnKey::City => "city",
            ColumnKey::RegisteredDate => "registeredDate",
            ColumnKey::Dsr => "dsr",
        }
    }

    pub fn definition(self) -> ColumnDefinition {
        let (label, width) = match self {
            ColumnKey::Id => ("ID", 80),
            ColumnKey::FirstName => ("First Name", 120),
            ColumnKey::LastName => ("Last Name", 120),
            ColumnKey::FullName => ("Full Name", 180),
            ColumnKey::Email => ("Email", 250),
            ColumnKey::City => ("City", 150),
            ColumnKey::RegisteredDate => ("Registered Date", 150),
            ColumnKey::Dsr => ("DSR", 100),
        };
        ColumnDefinition {
            key: self,
            label,
            width,
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AppError::UnknownColumn(s.to_string()))
    }
}

/// 静态列元数据，宽度单位为像素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub key: ColumnKey,
    pub label: &'static str,
    pub width: u16,
}

impl ColumnDefinition {
    /// 终端中占用的字符宽度
    pub fn cells(&self) -> u16 {
        self.width.div_ceil(PIXELS_PER_CELL)
    }
}

/// 单元格的排序/显示值
///
/// 派生的 `Ord` 先比较变体再比较值，所以任意两个值之间总有确定的顺序。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellValue<'a> {
    Number(i64),
    Date(DateTime<Local>),
    Text(Cow<'a, str>),
}

/// 取得某行某列用于排序与显示的值，计算列每次调用都重新计算
pub fn resolve_cell(row: &Row, key: ColumnKey, now: DateTime<Local>) -> CellValue<'_> {
    match key {
        ColumnKey::Id => CellValue::Number(i64::from(row.id)),
        ColumnKey::FirstName => CellValue::Text(Cow::Borrowed(&row.first_name)),
        ColumnKey::LastName => CellValue::Text(Cow::Borrowed(&row.last_name)),
        ColumnKey::FullName => CellValue::Text(Cow::Owned(row.full_name())),
        ColumnKey::Email => CellValue::Text(Cow::Borrowed(&row.email)),
        ColumnKey::City => CellValue::Text(Cow::Borrowed(&row.city)),
        ColumnKey::RegisteredDate => CellValue::Date(row.registered_date),
        ColumnKey::Dsr => CellValue::Number(row.days_since_registration(now)),
    }
}

/// 将解析后的值格式化为单元格文本
pub fn format_cell(value: &CellValue<'_>, key: ColumnKey) -> String {
    match (value, key) {
        (CellValue::Number(days), ColumnKey::Dsr) => format!("{} days", days),
        (CellValue::Number(n), _) => n.to_string(),
        (CellValue::Date(date), _) => date.format("%b %-d, %Y").to_string(),
        (CellValue::Text(text), _) => text.to_string(),
    }
}
