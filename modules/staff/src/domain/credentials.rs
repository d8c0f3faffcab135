//! Login names for new workers.

/// `first.last{N}@domain`, lower-cased with whitespace dropped. `N` is
/// omitted when zero.
#[must_use]
pub fn build_email(first_name: &str, last_name: &str, counter: u64, domain: &str) -> String {
    let suffix = if counter == 0 {
        String::new()
    } else {
        counter.to_string()
    };
    format!(
        "{}.{}{suffix}@{domain}",
        email_part(first_name),
        email_part(last_name)
    )
}

fn email_part(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
