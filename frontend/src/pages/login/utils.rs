pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Введите имя пользователя и пароль".to_string());
    }
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn rejects_empty_fields() {
        assert!(validate_credentials("", "").is_err());
        assert!(validate_credentials("alice", "").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
    }

    #[test]
    fn accepts_filled_fields() {
        assert!(validate_credentials("alice", "secret").is_ok());
    }
}
