//! Shared data model (§3). `Credential` mirrors
//! `examples/original_source/store/store.go`'s struct, renaming `Website`
//! to `Realm` per the distilled spec's authoritative field naming.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    pub login: String,
    pub password: String,
    pub realm: String,
    #[serde(default)]
    pub note: String,
}

impl Credential {
    pub fn new(login: impl Into<String>, password: impl Into<String>, realm: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            id: None,
            login: login.into(),
            password: password.into(),
            realm: realm.into(),
            note: note.into(),
        }
    }

    /// `login@realm`, or just whichever of the two is non-empty, with the
    /// note appended in parentheses when present. Grounded in
    /// `examples/original_source/ward/common.go`'s `formatCredential`.
    pub fn format(&self) -> String {
        let identity = match (self.login.is_empty(), self.realm.is_empty()) {
            (false, false) => format!("{}@{}", self.login, self.realm),
            (false, true) => self.login.clone(),
            (true, false) => self.realm.clone(),
            (true, true) => String::new(),
        };
        if self.note.is_empty() {
            identity
        } else {
            format!("{} ({})", identity, self.note)
        }
    }
}
