use crate::models::Config;

/// Current authenticated user, if any. Absence disables the title input but
/// does not block the rest of the form.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn from_config(config: &Config) -> Self {
        Self {
            user: config.user.clone(),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_reflects_config_user() {
        let config = Config {
            endpoint: "http://localhost/graphql".into(),
            token: None,
            user: Some("alice".into()),
        };
        let session = Session::from_config(&config);
        assert!(session.is_signed_in());
        assert_eq!(session.display_name(), Some("alice"));
    }

    #[test]
    fn signed_out_session_has_no_name() {
        let session = Session::signed_out();
        assert!(!session.is_signed_in());
        assert_eq!(session.display_name(), None);
    }
}
