use anyhow::{anyhow, Result};

pub const MIN_SESSION_SECRET_LENGTH: usize = 16;

pub fn validate_database_url(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("database_url is empty"));
    }
    if !value.starts_with("postgres://") && !value.starts_with("postgresql://") {
        return Err(anyhow!("database_url must be a postgres:// url"));
    }
    Ok(())
}

pub fn validate_session_secret(value: &str) -> Result<()> {
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(anyhow!(
            "session_secret must be at least {} bytes",
            MIN_SESSION_SECRET_LENGTH
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_needs_postgres_scheme() {
        assert!(validate_database_url("postgres://u:p@localhost/db").is_ok());
        assert!(validate_database_url("postgresql://localhost/db").is_ok());
        assert!(validate_database_url("mysql://localhost/db").is_err());
        assert!(validate_database_url("  ").is_err());
    }
}
