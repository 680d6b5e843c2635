use crate::models::user::User;
use std::path::PathBuf;

/// Settings the rest of the app runs with, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// The signed-in user. `None` runs without a session.
    pub user: Option<User>,
    /// Store writes tried per submission before giving up.
    pub save_attempts: u32,
}

impl Config {
    pub fn new(
        db_path: PathBuf,
        user_name: Option<String>,
        user_email: Option<String>,
        save_attempts: u32,
    ) -> Self {
        let user_name = user_name.filter(|name| !name.trim().is_empty());
        let user = user_email
            .filter(|email| !email.trim().is_empty())
            .map(|email| User::new(user_name, email));

        Self {
            db_path,
            user,
            save_attempts: save_attempts.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_user_name_is_dropped() {
        let config = Config::new(
            PathBuf::from("quick_pay.db"),
            Some(" ".to_string()),
            Some("ada@example.com".to_string()),
            1,
        );
        assert_eq!(config.user, Some(User::new(None, "ada@example.com".to_string())));
    }

    #[test]
    fn test_no_email_means_no_user() {
        let config = Config::new(PathBuf::from("quick_pay.db"), Some("Ada".to_string()), None, 1);
        assert_eq!(config.user, None);

        let blank = Config::new(PathBuf::from("quick_pay.db"), None, Some("".to_string()), 1);
        assert_eq!(blank.user, None);
    }

    #[test]
    fn test_save_attempts_at_least_one() {
        let config = Config::new(PathBuf::from("quick_pay.db"), None, None, 0);
        assert_eq!(config.save_attempts, 1);
    }
}
