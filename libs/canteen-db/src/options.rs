/// Hide the password part of a DSN before it reaches logs or error messages.
#[must_use]
pub fn redact_credentials_in_dsn(dsn: Option<&str>) -> String {
    match dsn {
        Some(dsn) if dsn.contains('@') => {
            if let Ok(mut parsed) = url::Url::parse(dsn) {
                if parsed.password().is_some() {
                    let _ = parsed.set_password(Some("***"));
                }
                parsed.to_string()
            } else {
                "***".to_owned()
            }
        }
        Some(dsn) => dsn.to_owned(),
        None => "none".to_owned(),
    }
}

#[must_use]
pub fn is_memory_dsn(dsn: &str) -> bool {
    dsn.starts_with("sqlite::memory:") || dsn.contains("mode=memory")
}
