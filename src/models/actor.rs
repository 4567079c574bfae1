use serde::{Deserialize, Serialize};
use std::fmt;

// NewType pattern for the profile locator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileRef(pub String);

impl fmt::Display for ProfileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One job/title pair a search result advertises, e.g. "Actor" in "Die Hard".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownFor {
    pub role: String,
    pub work: String,
}

/// An unconfirmed match parsed from one celebrity search result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorCandidate {
    pub name: String,
    pub profile_ref: ProfileRef,
    pub known_for: Option<KnownFor>,
}

impl ActorCandidate {
    pub fn new(name: impl Into<String>, profile_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile_ref: ProfileRef(profile_ref.into()),
            known_for: None,
        }
    }

    pub fn with_known_for(mut self, role: impl Into<String>, work: impl Into<String>) -> Self {
        self.known_for = Some(KnownFor {
            role: role.into(),
            work: work.into(),
        });
        self
    }

    pub fn example_role(&self) -> Option<&str> {
        self.known_for.as_ref().map(|k| k.role.as_str())
    }

    pub fn example_work(&self) -> Option<&str> {
        self.known_for.as_ref().map(|k| k.work.as_str())
    }

    pub fn matches_name(&self, search_term: &str) -> bool {
        self.name.to_lowercase() == search_term.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_match_ignores_case_but_not_extra_words() {
        let actor = ActorCandidate::new("Bruce Willis", "/name/nm0000246/");
        assert!(actor.matches_name("bruce willis"));
        assert!(actor.matches_name("BRUCE WILLIS"));
        assert!(!actor.matches_name("bruce"));
        assert!(!actor.matches_name("bruce willis jr"));
    }

    #[test]
    fn role_and_work_come_as_a_pair() {
        let bare = ActorCandidate::new("Bruce Willis", "/name/nm0000246/");
        assert_eq!(bare.example_role(), None);
        assert_eq!(bare.example_work(), None);

        let known = bare.with_known_for("Actor", "Die Hard");
        assert_eq!(known.example_role(), Some("Actor"));
        assert_eq!(known.example_work(), Some("Die Hard"));
    }
}
