//! Top-level comma splitting for generic argument lists

/// Split `K, List<V>` into `["K", "List<V>"]`.
///
/// Only commas at angle-bracket depth zero separate arguments. Empty
/// pieces are dropped; an unbalanced `>` never drives the depth negative.
pub fn split_generic_arguments(args: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;

    for ch in args.chars() {
        match ch {
            '<' => {
                depth += 1;
                current.push(ch);
            }
            '>' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                let param = current.trim().to_string();
                if !param.is_empty() {
                    params.push(param);
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    let param = current.trim().to_string();
    if !param.is_empty() {
        params.push(param);
    }

    params
}
