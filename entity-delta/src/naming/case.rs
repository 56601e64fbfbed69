//! Identifier case transforms used for table names and generated keys.

/// Hibernate's physical naming: an underscore is inserted before an upper
/// case letter that sits between two lower case letters, then everything is
/// lower cased. `UserProfile` becomes `user_profile`, `HTTPRequest` becomes
/// `httprequest`.
pub fn hibernate_snake_case(value: &str) -> String {
    let value = value.replacen('.', "_", 1);
    let chars: Vec<char> = value.chars().collect();
    let mut result = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        let interior = i > 0 && i + 1 < chars.len();
        if interior && chars[i - 1].is_lowercase() && c.is_uppercase() && chars[i + 1].is_lowercase() {
            result.push('_');
        }
        result.push(c);
    }

    result.to_lowercase()
}

/// Table identifier for an entity or prefix name.
pub fn table_name(value: &str) -> String {
    hibernate_snake_case(value)
}

/// Split on separators, lower/upper boundaries, acronym ends and
/// letter/digit boundaries.
fn split_words(value: &str) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let case_boundary = prev.is_lowercase() && c.is_uppercase();
            let acronym_end = prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase);
            let digit_boundary = prev.is_ascii_digit() != c.is_ascii_digit();

            if case_boundary || acronym_end || digit_boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// `firstName` → `first_name`, `HTTPRequest` → `http_request`.
pub fn snake_case(value: &str) -> String {
    join_words(value, "_")
}

/// `myPrefix` → `my-prefix`.
pub fn kebab_case(value: &str) -> String {
    join_words(value, "-")
}

/// `my-service` → `myService`.
pub fn camel_case(value: &str) -> String {
    split_words(value)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 { lower } else { upper_first(&lower) }
        })
        .collect()
}

/// Upper case the first character only.
pub fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn join_words(value: &str, separator: &str) -> String {
    split_words(value)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}
