//! Search token resolution
//!
//! A search token can name a pokemon three ways. [`lookup_keys`] turns the
//! token into the ordered list of keys to try; the repository runs them in
//! order and stops at the first hit.

use bson::oid::ObjectId;

/// One resolver stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// Index number
    No(i32),
    /// Store id (24 hex chars)
    Id(String),
    /// Lowercased, trimmed name
    Name(String),
}

/// Build the resolver chain for `search`: `no`, then id, then name.
///
/// Stages that cannot apply to the token are left out. The name stage is
/// always present, so the chain is never empty.
pub fn lookup_keys(search: &str) -> Vec<LookupKey> {
    let mut keys = Vec::with_capacity(3);

    if let Some(no) = parse_no(search) {
        keys.push(LookupKey::No(no));
    }

    if is_valid_object_id(search) {
        keys.push(LookupKey::Id(search.to_lowercase()));
    }

    keys.push(LookupKey::Name(normalize_name(search)));
    keys
}

/// Names are stored lowercase and compared trimmed
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether `value` is a syntactically valid store id
pub fn is_valid_object_id(value: &str) -> bool {
    ObjectId::parse_str(value).is_ok()
}

/// Generate a fresh store id
pub fn new_object_id() -> String {
    ObjectId::new().to_hex()
}

/// Integers qualify, as do finite numbers with no fractional part
/// (`"25.0"`, `"2.5e1"`)
fn parse_no(search: &str) -> Option<i32> {
    let trimmed = search.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(no) = trimmed.parse::<i32>() {
        return Some(no);
    }

    let value = trimmed.parse::<f64>().ok().filter(|v| v.is_finite())?;
    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }
    Some(value as i32)
}
