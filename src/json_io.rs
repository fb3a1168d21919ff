//! Import/export wire format: a JSON array of credentials (§6), each
//! `{login, password, realm, note}`. Grounded in
//! `examples/original_source/ward/import.go`/`export.go`; `--compact`
//! toggles pretty-printing.

use crate::error::Result;
use crate::types::Credential;

pub fn export_json(credentials: &[Credential], compact: bool) -> Result<String> {
    let bare: Vec<Credential> = credentials
        .iter()
        .map(|c| Credential {
            id: None,
            ..c.clone()
        })
        .collect();
    let json = if compact {
        serde_json::to_string(&bare)?
    } else {
        serde_json::to_string_pretty(&bare)?
    };
    Ok(json)
}

pub fn import_json(data: &str) -> Result<Vec<Credential>> {
    Ok(serde_json::from_str(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_then_import_round_trips() {
        let credentials = vec![Credential::new("alice", "hunter2", "example.com", "work")];
        let json = export_json(&credentials, true).unwrap();
        let back = import_json(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].login, "alice");
        assert_eq!(back[0].realm, "example.com");
    }

    #[test]
    fn export_strips_database_ids() {
        let mut cred = Credential::new("alice", "hunter2", "example.com", "");
        cred.id = Some(42);
        let json = export_json(&[cred], true).unwrap();
        assert!(!json.contains("\"id\""));
    }
}
