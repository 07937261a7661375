//! Vault search
//!
//! Case-insensitive substring match over website, username, and category.
//! An empty query matches everything; results keep vault insertion order.

use crate::models::CredentialEntry;

/// Entries whose website, username, or category contains `query`,
/// case-insensitively, in vault order
pub fn filter_entries<'a>(
    entries: &'a [CredentialEntry],
    query: &str,
) -> Vec<&'a CredentialEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            e.website.to_lowercase().contains(&needle)
                || e.username.to_lowercase().contains(&needle)
                || e.category.as_str().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EntryDraft};

    fn entry(website: &str, username: &str, category: Category) -> CredentialEntry {
        EntryDraft {
            website: website.to_string(),
            username: username.to_string(),
            password: "pw".to_string(),
            category,
        }
        .into_entry()
    }

    fn sample_vault() -> Vec<CredentialEntry> {
        vec![
            entry("Google.com", "alice", Category::Work),
            entry("github.com", "Alice-Dev", Category::Work),
            entry("credit.example", "alice", Category::Banking),
            entry("forum.example", "bob", Category::Other),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let vault = sample_vault();
        let hits = filter_entries(&vault, "");

        assert_eq!(hits.len(), vault.len());
        for (hit, original) in hits.iter().zip(vault.iter()) {
            assert_eq!(*hit, original);
        }
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let vault = sample_vault();

        let upper = filter_entries(&vault, "GOOGLE");
        let lower = filter_entries(&vault, "google");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].website, "Google.com");
    }

    #[test]
    fn test_matches_username() {
        let vault = sample_vault();
        let hits = filter_entries(&vault, "alice");

        // "alice" appears in three usernames, one of them mixed-case
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_matches_category_name() {
        let vault = sample_vault();
        let hits = filter_entries(&vault, "banking");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].website, "credit.example");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let vault = sample_vault();
        assert!(filter_entries(&vault, "does-not-exist").is_empty());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let vault = sample_vault();
        let hits = filter_entries(&vault, "work");

        let sites: Vec<&str> = hits.iter().map(|e| e.website.as_str()).collect();
        assert_eq!(sites, vec!["Google.com", "github.com"]);
    }
}
