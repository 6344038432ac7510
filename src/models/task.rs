use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Category;

/// A quest: a name and the experience it is worth.
///
/// Quests are addressed by position within their category, not by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub xp: u64,
}

impl Task {
    pub fn new(name: impl Into<String>, xp: u64) -> Self {
        Self {
            name: name.into(),
            xp,
        }
    }
}

/// Input for logging a new quest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskInput {
    pub category: Category,
    pub name: String,
    /// Accepts any JSON value; see [`xp_from_value`].
    #[serde(default, deserialize_with = "lenient_xp")]
    pub xp: u64,
}

/// Input for a manual experience grant (positive) or penalty (negative).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdjustXpInput {
    pub delta: i64,
}

/// Coerce free-form XP input into a quest value.
///
/// Reads the leading integer after trimming whitespace, so `"50xp"` is 50.
/// Anything without a leading integer, or a negative value, becomes 0.
/// Values beyond `u64::MAX` saturate.
pub fn coerce_xp(input: &str) -> u64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(u64::from(b - b'0'));
    }

    if !seen_digit || negative {
        return 0;
    }
    value
}

/// Read an XP value from loosely-typed JSON.
///
/// Non-negative numbers are taken as-is, fractions truncate, numeric strings
/// go through [`coerce_xp`]. Negative numbers, `null` and anything else are 0.
pub fn xp_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(n), _) => n,
            (None, Some(f)) if f.is_finite() && f > 0.0 => f as u64,
            _ => 0,
        },
        Value::String(s) => coerce_xp(s),
        _ => 0,
    }
}

fn lenient_xp<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(xp_from_value(&value))
}
