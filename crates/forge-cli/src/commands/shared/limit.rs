/// Compute effective limit with precedence: global flag -> configured default.
/// Zero means no limit.
#[must_use]
pub fn effective_limit(global: Option<u32>, default_limit: u32) -> Option<usize> {
    let limit = global.unwrap_or(default_limit);
    (limit > 0).then(|| usize::try_from(limit).unwrap_or(usize::MAX))
}
