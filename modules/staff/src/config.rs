use serde::{Deserialize, Serialize};

/// `staff` section of the server config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaffConfig {
    /// Domain used for generated worker emails
    pub email_domain: String,
    /// Length of generated passwords
    pub password_length: usize,
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            email_domain: "canteen.com".to_owned(),
            password_length: 8,
        }
    }
}
