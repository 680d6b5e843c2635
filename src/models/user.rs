/// The signed-in user as seen by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: Option<String>,
    pub email: String,
}

impl User {
    pub fn new(name: Option<String>, email: String) -> Self {
        Self { name, email }
    }

    /// The name when one is set and non-blank, otherwise the email.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}
