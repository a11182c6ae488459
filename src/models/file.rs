use serde::Deserialize;

/// File metadata as returned by `files.get` with `fields=name,owners`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub name: String,
    #[serde(default)]
    pub owners: Vec<FileOwner>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct FileOwner {
    pub email_address: Option<String>,
    pub display_name: Option<String>,
}

impl DriveFile {
    /// Email of the current owner, when the API reports one.
    pub fn owner_email(&self) -> Option<&str> {
        self.owners.first().and_then(|o| o.email_address.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::DriveFile;

    #[test]
    fn parses_file_with_owners() {
        let payload = json!({
            "name": "Quarterly report",
            "owners": [
                { "emailAddress": "alice@example.com", "displayName": "Alice" }
            ]
        });

        let file: DriveFile = serde_json::from_value(payload).unwrap();
        assert_eq!(file.name, "Quarterly report");
        assert_eq!(file.owner_email(), Some("alice@example.com"));
    }

    #[test]
    fn tolerates_missing_owner_list() {
        let file: DriveFile = serde_json::from_value(json!({ "name": "orphan" })).unwrap();
        assert_eq!(file.owner_email(), None);
    }
}
