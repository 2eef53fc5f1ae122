use crate::error::invalid_input;
use anyhow::Result;

/// Parses a contact or account id given on the command line.
pub fn parse_id(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(_) => Err(invalid_input(format!("id must be positive: {trimmed}"))),
        Err(_) => Err(invalid_input(format!("invalid id: {trimmed}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id(" 12 ").unwrap(), 12);
    }

    #[test]
    fn parse_id_rejects_other_input() {
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("abc").is_err());
    }
}
