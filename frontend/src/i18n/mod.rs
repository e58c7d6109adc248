pub mod ar;

pub use ar as current;

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

pub fn fill_two(
    template: &str,
    first: impl std::fmt::Display,
    second: impl std::fmt::Display,
) -> String {
    let mut parts = template.splitn(3, "{}");
    let mut filled = parts.next().unwrap_or_default().to_string();
    if let Some(middle) = parts.next() {
        filled.push_str(&first.to_string());
        filled.push_str(middle);
        if let Some(rest) = parts.next() {
            filled.push_str(&second.to_string());
            filled.push_str(rest);
        }
    }
    filled
}
