use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PermissionList {
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// A single grant on a file. Domain and group grants carry no email address.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct Permission {
    pub id: String,
    pub email_address: Option<String>,
    pub role: String,
    #[serde(default)]
    pub pending_owner: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionCreateRequest {
    pub role: String,
    #[serde(rename = "type")]
    pub grantee_type: String,
    pub email_address: String,
    pub pending_owner: bool,
}

impl PermissionCreateRequest {
    /// A writer grant flagged as pending owner, the only kind this tool creates.
    pub fn pending_owner(email: &str) -> Self {
        Self {
            role: "writer".to_string(),
            grantee_type: "user".to_string(),
            email_address: email.to_string(),
            pending_owner: true,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionUpdateRequest {
    pub role: String,
    pub pending_owner: bool,
}

impl PermissionUpdateRequest {
    pub fn pending_owner() -> Self {
        Self {
            role: "writer".to_string(),
            pending_owner: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{PermissionCreateRequest, PermissionList, PermissionUpdateRequest};

    #[test]
    fn create_request_serializes_pending_owner_grant() {
        let req = PermissionCreateRequest::pending_owner("bob@example.com");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "role": "writer",
                "type": "user",
                "emailAddress": "bob@example.com",
                "pendingOwner": true
            })
        );
    }

    #[test]
    fn update_request_serializes_pending_owner_grant() {
        let req = PermissionUpdateRequest::pending_owner();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "role": "writer", "pendingOwner": true })
        );
    }

    #[test]
    fn parses_grants_without_email() {
        let payload = json!({
            "permissions": [
                { "id": "anyone", "role": "reader" },
                { "id": "p1", "emailAddress": "bob@example.com", "role": "reader" }
            ]
        });

        let list: PermissionList = serde_json::from_value(payload).unwrap();
        assert_eq!(list.permissions.len(), 2);
        assert_eq!(list.permissions[0].email_address, None);
        assert_eq!(
            list.permissions[1].email_address.as_deref(),
            Some("bob@example.com")
        );
        assert!(!list.permissions[1].pending_owner);
    }
}
