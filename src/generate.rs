//! 合成用户数据
//!
//! 每条记录的邮箱由同一条记录的姓名派生。

use chrono::{DateTime, Duration, Local};
use rand::Rng;

use crate::models::Row;

/// 注册日期的回溯范围
const HISTORY_DAYS: i64 = 3 * 365;

const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Adrian", "Alice", "Amara", "Benjamin", "Bianca", "Caleb", "Camila", "Chloe",
    "Daniel", "Delia", "Elena", "Elijah", "Emma", "Ethan", "Fatima", "Felix", "Gabriel", "Grace",
    "Hannah", "Henry", "Isaac", "Isla", "Jack", "Jasmine", "Julian", "Kai", "Layla", "Leo",
    "Lucas", "Maya", "Mateo", "Mia", "Noah", "Nora", "Oliver", "Olivia", "Owen", "Priya",
    "Quinn", "Rafael", "Rosa", "Samuel", "Sofia", "Theo", "Uma", "Victor", "Willow", "Yusuf",
    "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Baker", "Bennett", "Brooks", "Carter", "Chen", "Collins", "Diaz", "Edwards",
    "Evans", "Fischer", "Foster", "Garcia", "Gray", "Hayes", "Hughes", "Ibrahim", "Jensen",
    "Kim", "Kowalski", "Larsen", "Lopez", "Martin", "Morales", "Nguyen", "O'Connor", "Okafor",
    "Patel", "Perez", "Price", "Quinn", "Reyes", "Rossi", "Sanders", "Schmidt", "Singh",
    "Tanaka", "Torres", "Turner", "Usman", "Vargas", "Walker", "Watson", "Xu", "Young",
    "Zimmerman",
];

const CITIES: &[&str] = &[
    "Austin", "Baltimore", "Boise", "Boston", "Charlotte", "Chicago", "Columbus", "Denver",
    "Detroit", "El Paso", "Fresno", "Houston", "Indianapolis", "Jacksonville", "Kansas City",
    "Las Vegas", "Louisville", "Memphis", "Miami", "Milwaukee", "Minneapolis", "Nashville",
    "New Orleans", "Oakland", "Omaha", "Philadelphia", "Phoenix", "Portland", "Raleigh",
    "Sacramento", "San Diego", "Seattle", "Spokane", "Tampa", "Tucson", "Wichita",
];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items[rng.random_range(0..items.len())]
}

fn email_local_part(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// 由姓名派生邮箱
fn make_email<R: Rng + ?Sized>(rng: &mut R, first_name: &str, last_name: &str) -> String {
    let first = email_local_part(first_name);
    let last = email_local_part(last_name);
    let local = match rng.random_range(0..4) {
        0 => format!("{}.{}", first, last),
        1 => format!("{}_{}", first, last),
        2 => format!("{}{}{}", first, last, rng.random_range(1..100)),
        _ => format!("{}.{}{}", first, last, rng.random_range(1..100)),
    };
    format!("{}@{}", local, pick(rng, EMAIL_DOMAINS))
}

/// 生成 `count` 条用户记录，ID 从 1 开始连续编号，注册日期在过去三年内
pub fn generate_users<R: Rng + ?Sized>(
    count: u32,
    rng: &mut R,
    now: DateTime<Local>,
) -> Vec<Row> {
    let history_ms = Duration::days(HISTORY_DAYS).num_milliseconds();

    (1..=count)
        .map(|id| {
            let first_name = pick(rng, FIRST_NAMES);
            let last_name = pick(rng, LAST_NAMES);
            let age = Duration::milliseconds(rng.random_range(0..history_ms));
            Row {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: make_email(rng, first_name, last_name),
                city: pick(rng, CITIES).to_string(),
                registered_date: now - age,
            }
        })
        .collect()
}
