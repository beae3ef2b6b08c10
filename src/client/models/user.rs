use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Loose `local@domain` check, roughly what an `<input type="email">` accepts.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

// Bozza del form di login
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
}

impl LoginForm {
    /// Builds the user to sign in with. There is no identity check behind this.
    pub fn submit(&self) -> Result<User, LoginError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err(LoginError::MissingName);
        }
        if !is_valid_email(email) {
            return Err(LoginError::InvalidEmail);
        }
        Ok(User {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.submit().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a@b"));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("ali ce@example.com"));
        assert!(!is_valid_email("a@b@c"));
    }

    #[test]
    fn test_login_submit_trims() {
        let form = LoginForm {
            name: "  Jane Doe ".to_string(),
            email: " jane@example.com ".to_string(),
        };
        let user = form.submit().unwrap();
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane@example.com");
    }

    #[test]
    fn test_login_requires_fields() {
        let mut form = LoginForm::default();
        assert_eq!(form.submit(), Err(LoginError::MissingName));
        form.name = "Jane".to_string();
        assert_eq!(form.submit(), Err(LoginError::InvalidEmail));
        form.email = "jane@example.com".to_string();
        assert!(form.is_complete());
    }
}
