/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// UTC calendar date of a Unix-millis timestamp
pub fn utc_date(millis: i64) -> Option<chrono::NaiveDate> {
    chrono::DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}
