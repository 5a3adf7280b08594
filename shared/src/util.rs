/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
///
/// Bookings, tables and bump orders created by venue-server all use it.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let ts = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF;
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000);
    (ts << 12) | rand_bits
}

/// Snowflake id for which `is_taken` is false.
///
/// Ids created in the same millisecond only differ in 12 random bits, so
/// in-memory stores re-roll on collision.
pub fn fresh_snowflake_id(is_taken: impl Fn(i64) -> bool) -> i64 {
    loop {
        let id = snowflake_id();
        if !is_taken(id) {
            return id;
        }
    }
}
