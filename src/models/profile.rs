//! User profile model
//!
//! One identity record per authenticated account. Created on signup by the
//! identity collaborator, mutated by the user or admin tooling, deleted on
//! account removal.

use serde::{Deserialize, Serialize};

/// User profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque identifier issued by the identity collaborator
    pub id: String,

    /// Unique handle, primary public lookup key
    pub username: String,

    /// Preferred display name
    pub display_name: Option<String>,

    /// Legal or full name, fallback when no display name is set
    pub full_name: Option<String>,

    /// Account email, last-resort display fallback
    pub email: Option<String>,

    /// Avatar image URL
    pub avatar_url: Option<String>,

    /// Free-form biography
    pub bio: Option<String>,

    /// Admin tooling flag
    pub is_admin: bool,
}

impl Profile {
    /// Resolve the public display name.
    ///
    /// Precedence: display name, then full name, then the account email.
    pub fn resolved_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .or(self.full_name.as_deref())
            .or(self.email.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            id: "u1".to_string(),
            username: "avery".to_string(),
            display_name: None,
            full_name: None,
            email: None,
            avatar_url: None,
            bio: None,
            is_admin: false,
        }
    }

    #[test]
    fn resolved_name_prefers_display_name() {
        let mut p = profile();
        p.display_name = Some("Avery".to_string());
        p.full_name = Some("Avery Lee".to_string());
        p.email = Some("avery@example.com".to_string());
        assert_eq!(p.resolved_name(), Some("Avery"));
    }

    #[test]
    fn resolved_name_falls_back_to_full_name_then_email() {
        let mut p = profile();
        p.full_name = Some("Avery Lee".to_string());
        p.email = Some("avery@example.com".to_string());
        assert_eq!(p.resolved_name(), Some("Avery Lee"));

        p.full_name = None;
        assert_eq!(p.resolved_name(), Some("avery@example.com"));
    }

    #[test]
    fn resolved_name_is_none_when_nothing_set() {
        assert_eq!(profile().resolved_name(), None);
    }
}
