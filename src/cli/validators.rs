//! CLI argument validators.

/// Parse and validate a four-digit release year.
pub fn parse_year(s: &str) -> Result<String, String> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        Ok(s.to_string())
    } else {
        Err(format!("year must be four digits, got '{s}'"))
    }
}
