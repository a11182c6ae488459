use crate::api::client::{DriveClient, query_escape};
use crate::error::TransferError;
use crate::models::permission::{
    Permission, PermissionCreateRequest, PermissionList, PermissionUpdateRequest,
};

/// Outcome of scanning the existing grants for the prospective owner.
#[derive(Debug)]
pub enum ReconcileAction<'a> {
    /// No grant for that email exists; create one.
    Create,
    /// A grant already exists; update it in place rather than duplicating.
    Update(&'a Permission),
}

/// Linear scan, first match wins. Email comparison ignores case so a
/// differently-cased address does not produce a duplicate grant.
pub fn reconcile<'a>(grants: &'a [Permission], new_owner: &str) -> ReconcileAction<'a> {
    for grant in grants {
        if let Some(email) = grant.email_address.as_deref() {
            if email.eq_ignore_ascii_case(new_owner) {
                return ReconcileAction::Update(grant);
            }
        }
    }
    ReconcileAction::Create
}

impl DriveClient {
    /// List every grant on the file.
    pub async fn list_permissions(&self, file_id: &str) -> Result<Vec<Permission>, TransferError> {
        let url = format!(
            "{}/files/{}/permissions?fields=permissions(id,emailAddress,role)",
            self.base_url, file_id
        );

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(TransferError::Api { status, body });
        }

        let list: PermissionList = resp.json().await?;
        Ok(list.permissions)
    }

    /// Grant the prospective owner writer access flagged as pending owner,
    /// and have the API mail them an invitation naming the file.
    pub async fn create_permission(
        &self,
        file_id: &str,
        email: &str,
        file_name: &str,
    ) -> Result<(), TransferError> {
        let message = format!(
            "You have been invited to take ownership of \"{}\". Open the file and accept the transfer to complete it.",
            file_name
        );
        let url = format!(
            "{}/files/{}/permissions?sendNotificationEmail=true&emailMessage={}",
            self.base_url,
            file_id,
            query_escape(&message)
        );

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&PermissionCreateRequest::pending_owner(email))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(TransferError::Api { status, body });
        }

        Ok(())
    }

    /// Flip an existing grant to writer with the pending-owner flag set.
    /// The update path is silent: no notification mail goes out.
    pub async fn update_permission(
        &self,
        file_id: &str,
        permission_id: &str,
    ) -> Result<(), TransferError> {
        let url = format!(
            "{}/files/{}/permissions/{}",
            self.base_url, file_id, permission_id
        );

        let resp = self
            .http
            .patch(&url)
            .bearer_auth(&self.token)
            .json(&PermissionUpdateRequest::pending_owner())
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(TransferError::Api { status, body });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ReconcileAction, reconcile};
    use crate::models::permission::Permission;

    fn grant(id: &str, email: Option<&str>, role: &str) -> Permission {
        Permission {
            id: id.to_string(),
            email_address: email.map(str::to_string),
            role: role.to_string(),
            pending_owner: false,
        }
    }

    #[test]
    fn creates_when_no_grant_matches() {
        let grants = vec![
            grant("p1", Some("alice@example.com"), "owner"),
            grant("anyone", None, "reader"),
        ];

        assert!(matches!(
            reconcile(&grants, "bob@example.com"),
            ReconcileAction::Create
        ));
    }

    #[test]
    fn updates_an_existing_reader_grant() {
        let grants = vec![
            grant("p1", Some("alice@example.com"), "owner"),
            grant("p2", Some("bob@example.com"), "reader"),
        ];

        match reconcile(&grants, "bob@example.com") {
            ReconcileAction::Update(found) => assert_eq!(found.id, "p2"),
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn first_matching_grant_wins() {
        let grants = vec![
            grant("p1", Some("bob@example.com"), "reader"),
            grant("p2", Some("bob@example.com"), "commenter"),
        ];

        match reconcile(&grants, "bob@example.com") {
            ReconcileAction::Update(found) => assert_eq!(found.id, "p1"),
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn email_match_ignores_case() {
        let grants = vec![grant("p1", Some("Bob@Example.com"), "reader")];

        assert!(matches!(
            reconcile(&grants, "bob@example.com"),
            ReconcileAction::Update(_)
        ));
    }

    #[test]
    fn empty_grant_list_creates() {
        assert!(matches!(
            reconcile(&[], "bob@example.com"),
            ReconcileAction::Create
        ));
    }
}
