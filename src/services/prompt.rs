use crate::models::{Coordinates, SearchOptions};

/// Clause used when no meal period is selected
pub const OPEN_NOW_CLAUSE: &str = "目前營業中";

/// Clause used when no style is given
pub const DEFAULT_STYLE_CLAUSE: &str = "餐廳、飲料店（手搖飲、果汁）或咖啡廳";

/// Builds the natural-language query for a grounded place search
///
/// Asks for the 6-8 best-rated places near `coords` under the time and style
/// constraints, confirmed with the Maps tool and with no prose summary.
pub fn build_prompt(coords: &Coordinates, options: &SearchOptions) -> String {
    format!(
        "請搜尋附近 ({}, {}) 評價最好的 6-8 間地點。\n\n搜尋條件：\n1. {}\n2. {}\n\n請務必使用 Google Maps 工具確認地點存在並列出。請不要產生任何文字介紹或摘要。",
        coords.latitude,
        coords.longitude,
        time_clause(options),
        style_clause(options),
    )
}

fn time_clause(options: &SearchOptions) -> String {
    if options.time.is_empty() {
        OPEN_NOW_CLAUSE.to_string()
    } else {
        format!("適用時段為「{}」", options.time)
    }
}

fn style_clause(options: &SearchOptions) -> String {
    if options.style.is_empty() {
        DEFAULT_STYLE_CLAUSE.to_string()
    } else {
        format!("風格或類別為「{}」", options.style)
    }
}
