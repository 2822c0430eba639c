//! User-facing validation messages and field paths.

pub const REGEX_NAME: &str = r"Name is required and must match ^[A-Za-z0-9\-_]{1,64}$";
pub const ITEM_REGEX: &str = r"Each item must match ^[A-Za-z0-9\-_]{1,64}$";
pub const URI: &str = "Must be a valid https:// or s3:// URI";

pub fn type_must_be(t: &str) -> String {
    format!("Type is required and must be \"{t}\"")
}

pub fn required(label: &str) -> String {
    format!("{label} is required")
}

pub fn at_least_one(label: &str) -> String {
    format!("At least one {label} is required")
}

pub fn unreadable(detail: &str) -> String {
    format!("Arguments could not be read: {detail}")
}

pub fn max_len(n: usize) -> String {
    format!("Must be at most {n} characters long")
}

/// `Arguments.<rest>`
pub fn arg(rest: &str) -> String {
    format!("Arguments.{rest}")
}

/// `<list>[<idx>].<field>`, or `<list>[<idx>]` for an empty field.
pub fn item(list: &str, idx: usize, field: &str) -> String {
    if field.is_empty() {
        format!("{list}[{idx}]")
    } else {
        format!("{list}[{idx}].{field}")
    }
}
