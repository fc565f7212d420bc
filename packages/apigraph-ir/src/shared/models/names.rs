//! Qualified-name helpers shared by the builders and the registry
//!
//! Canonical full names use `.` as the only scope separator.

/// Convert native (`::`) and managed nested (`+`) separators to `.`
pub fn canonical_name(raw: &str) -> String {
    raw.trim()
        .replace("::", ".")
        .replace('+', ".")
        .trim_matches('.')
        .to_string()
}

/// Last segment of a dotted name
pub fn short_name(full_name: &str) -> &str {
    match full_name.rfind('.') {
        Some(idx) => &full_name[idx + 1..],
        None => full_name,
    }
}

/// Everything before the last dot, `None` at top level
pub fn scope_of(full_name: &str) -> Option<&str> {
    full_name.rfind('.').map(|idx| &full_name[..idx])
}

/// Join a scope and a name, tolerating an empty scope
pub fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", scope, name)
    }
}

/// All proper ancestors of a dotted name, outermost first
pub fn ancestor_scopes(full_name: &str) -> Vec<&str> {
    let mut scopes = Vec::new();
    for (idx, ch) in full_name.char_indices() {
        if ch == '.' {
            scopes.push(&full_name[..idx]);
        }
    }
    scopes
}

/// Remove every arity marker from a managed name:
/// ``Dictionary`2<K, List`1<V>>`` -> `Dictionary<K, List<V>>`
pub fn remove_arity_markers(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '`' {
            while chars.peek().map_or(false, |c| c.is_ascii_digit() || *c == '`') {
                chars.next();
            }
            continue;
        }
        out.push(ch);
    }
    out
}
