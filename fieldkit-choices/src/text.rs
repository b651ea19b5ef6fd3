//! Pure string helpers used by resolution and the derived views.
//!
//! Case conversions split on whitespace, dashes, underscores and
//! lower-to-upper case changes, then reassemble in the target style.

/// Convert a string to a URL-friendly slug.
pub fn slug(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn lower(input: &str) -> String {
    input.to_lowercase()
}

pub fn upper(input: &str) -> String {
    input.to_uppercase()
}

/// Uppercase the first character, leave the rest untouched.
pub fn ucfirst(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character of every whitespace-separated word.
pub fn ucwords(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_boundary = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_boundary = true;
            out.push(c);
        } else if at_boundary {
            out.extend(c.to_uppercase());
            at_boundary = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// snake_case conversion.
pub fn snake(input: &str) -> String {
    words(input).join("_")
}

/// StudlyCase conversion.
pub fn studly(input: &str) -> String {
    words(input).iter().map(|w| ucfirst(w)).collect()
}

/// camelCase conversion.
pub fn camel(input: &str) -> String {
    let mut words = words(input).into_iter();
    let mut out = match words.next() {
        Some(first) => first,
        None => return String::new(),
    };
    for word in words {
        out.push_str(&ucfirst(&word));
    }
    out
}

/// kebab-case conversion.
pub fn kebab(input: &str) -> String {
    words(input).join("-")
}

/// Direct camelCase → kebab-case walk: a dash before each uppercase
/// character, everything lowercased.
pub fn camel_to_kebab(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for (i, c) in input.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push('-');
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Direct kebab-case → camelCase walk: dashes dropped, the character after
/// each dash uppercased.
pub fn kebab_to_camel(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = false;
    for c in input.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Split on a delimiter, trimming whitespace and dropping empty tokens.
pub fn split(input: &str, delimiter: &str) -> Vec<String> {
    input
        .split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercase words of the input, split on separators and case changes.
fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in input.chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.extend(c.to_lowercase());
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
