//! Whole-vault export and import
//!
//! The export blob is the complete vault as pretty-printed JSON, a full
//! replacement candidate for import. Import is atomic: the blob parses as
//! a whole or it is rejected and the existing vault stays untouched.

use crate::error::{VaultError, VaultResult};
use crate::models::CredentialEntry;

/// Default file name for exported backups
pub const EXPORT_FILE_NAME: &str = "passwords_backup.json";

/// Serialize the full vault, ids and timestamps included, as pretty JSON
pub fn export_vault(entries: &[CredentialEntry]) -> VaultResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Parse `blob` as an ordered sequence of entry records.
///
/// Any parse failure rejects the whole blob. Parsed records come back
/// verbatim: no field validation, no id collision handling, no timestamp
/// backfill.
pub fn import_vault(blob: &str) -> VaultResult<Vec<CredentialEntry>> {
    serde_json::from_str(blob).map_err(|e| VaultError::Import(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EntryDraft};

    fn sample_vault() -> Vec<CredentialEntry> {
        ["github.com", "mybank.example", "shop.example"]
            .iter()
            .enumerate()
            .map(|(i, site)| {
                EntryDraft {
                    website: site.to_string(),
                    username: format!("user{i}"),
                    password: format!("pw-{i}"),
                    category: Category::ALL[i],
                }
                .into_entry()
            })
            .collect()
    }

    #[test]
    fn test_export_import_round_trip() {
        let vault = sample_vault();
        let blob = export_vault(&vault).unwrap();
        let restored = import_vault(&blob).unwrap();

        assert_eq!(restored, vault);
    }

    #[test]
    fn test_export_is_pretty_printed_with_camel_case_keys() {
        let vault = sample_vault();
        let blob = export_vault(&vault).unwrap();

        assert!(blob.starts_with("[\n"));
        assert!(blob.contains("\"createdAt\""));
    }

    #[test]
    fn test_export_of_empty_vault_imports_as_empty() {
        let blob = export_vault(&[]).unwrap();
        assert!(import_vault(&blob).unwrap().is_empty());
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        match import_vault("not valid json{{{") {
            Err(VaultError::Import(_)) => {}
            other => panic!("expected Import error, got {:?}", other),
        }
    }

    #[test]
    fn test_import_rejects_non_sequence_json() {
        assert!(import_vault(r#"{"website": "example.com"}"#).is_err());
        assert!(import_vault("42").is_err());
    }

    #[test]
    fn test_import_rejects_records_missing_identity_fields() {
        // No id, no createdAt: nothing is backfilled, the import fails whole
        let blob = r#"[{"website": "a.com", "username": "u", "password": "p"}]"#;
        assert!(import_vault(blob).is_err());
    }

    #[test]
    fn test_import_does_not_validate_field_contents() {
        // Empty fields come through verbatim; only the parse itself can fail
        let blob = r#"[{
            "id": "4f0d87a2-6f4e-4f7b-9a7a-55a90e3160c1",
            "website": "",
            "username": "",
            "password": "",
            "category": "banking",
            "createdAt": "2024-01-15T10:30:00Z"
        }]"#;

        let restored = import_vault(blob).unwrap();
        assert_eq!(restored.len(), 1);
        assert!(restored[0].website.is_empty());
        assert_eq!(restored[0].category, Category::Banking);
    }

    #[test]
    fn test_import_preserves_record_order() {
        let vault = sample_vault();
        let blob = export_vault(&vault).unwrap();
        let restored = import_vault(&blob).unwrap();

        let sites: Vec<&str> = restored.iter().map(|e| e.website.as_str()).collect();
        assert_eq!(sites, vec!["github.com", "mybank.example", "shop.example"]);
    }
}
