use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 12;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let has_letter = password.chars().any(char::is_alphabetic);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_letter && has_digit) {
        return Err(ApplicationError::validation(
            "password must contain both letters and digits",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_password;

    #[test]
    fn short_or_single_class_passwords_fail() {
        assert!(validate_password("abc123").is_err());
        assert!(validate_password("onlylettershere").is_err());
        assert!(validate_password("123456789012").is_err());
        assert!(validate_password("noodles-2024-night").is_ok());
    }
}
