use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use asista_core::{ClientError, ClientResult};
use asista_domain::{
    NewRole, PermissionAction, PermissionEntry, Role, RoleChangeSet, RoleDetails, WireMatrix,
    WireMatrixCategory,
};
use tokio::sync::Mutex;

use crate::ports::RoleGateway;

use super::{EditorMode, RoleEditor};

#[derive(Default)]
struct FakeRoleGateway {
    details: Option<RoleDetails>,
    patch_fails: bool,
    created: Mutex<Vec<NewRole>>,
    patched: Mutex<Vec<(i64, RoleChangeSet)>>,
}

#[async_trait]
impl RoleGateway for FakeRoleGateway {
    async fn list(&self) -> ClientResult<Vec<Role>> {
        Ok(Vec::new())
    }

    async fn details(&self, id: i64) -> ClientResult<RoleDetails> {
        self.details
            .clone()
            .filter(|details| details.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("role {id}")))
    }

    async fn permission_matrix(&self) -> ClientResult<WireMatrix> {
        let mut citizens = HashMap::new();
        for (id, action) in [(1, "VIEW"), (2, "CREATE"), (3, "UPDATE")] {
            citizens.insert(
                action.to_owned(),
                Some(PermissionEntry {
                    id,
                    permission_name: action.to_owned(),
                    description: format!("citizens {action}"),
                }),
            );
        }
        citizens.insert("APPROVE".to_owned(), None);

        let mut applications = HashMap::new();
        applications.insert(
            "APPROVE".to_owned(),
            Some(PermissionEntry {
                id: 20,
                permission_name: "APPROVE".to_owned(),
                description: "applications APPROVE".to_owned(),
            }),
        );

        let mut wire = HashMap::new();
        wire.insert(
            "Citizens".to_owned(),
            WireMatrixCategory {
                category: "Citizens".to_owned(),
                actions: citizens,
            },
        );
        wire.insert(
            "Applications".to_owned(),
            WireMatrixCategory {
                category: "Applications".to_owned(),
                actions: applications,
            },
        );
        Ok(wire)
    }

    async fn create(&self, role: &NewRole) -> ClientResult<Role> {
        self.created.lock().await.push(role.clone());
        Ok(Role {
            id: 1,
            role_name: role.role_name.clone(),
        })
    }

    async fn patch(&self, id: i64, change: &RoleChangeSet) -> ClientResult<()> {
        if self.patch_fails {
            return Err(ClientError::Server(500));
        }
        self.patched.lock().await.push((id, change.clone()));
        Ok(())
    }

    async fn delete(&self, _id: i64) -> ClientResult<()> {
        Ok(())
    }
}

fn stored_role() -> RoleDetails {
    RoleDetails {
        id: 9,
        role_name: "CASE_WORKER".to_owned(),
        permission_ids: vec![1, 2],
        usernames: vec!["ana".to_owned(), "boris".to_owned()],
    }
}

#[tokio::test]
async fn create_sends_the_full_selected_set() {
    let gateway = Arc::new(FakeRoleGateway::default());
    let mut editor = RoleEditor::create(gateway.clone());
    editor.role_name = "AUDITOR".to_owned();

    let loaded = editor.load_matrix().await;
    assert!(loaded.is_ok());

    editor.toggle_row("Citizens", true);

    let saved = editor.save().await;
    assert!(saved.is_ok());

    let created = gateway.created.lock().await;
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].role_name, "AUDITOR");
    assert_eq!(created[0].permission_ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn edit_sends_only_the_diff_lists() {
    let gateway = Arc::new(FakeRoleGateway {
        details: Some(stored_role()),
        ..FakeRoleGateway::default()
    });

    let Ok(mut editor) = RoleEditor::edit(gateway.clone(), 9).await else {
        panic!("editor should load");
    };
    let loaded = editor.load_matrix().await;
    assert!(loaded.is_ok());

    // select 3 and 20, drop 2, revoke boris, grant clara
    editor.toggle(
        Some(&PermissionEntry {
            id: 3,
            permission_name: "UPDATE".to_owned(),
            description: String::new(),
        }),
        true,
    );
    editor.toggle_row("Applications", true);
    editor.toggle(
        Some(&PermissionEntry {
            id: 2,
            permission_name: "CREATE".to_owned(),
            description: String::new(),
        }),
        false,
    );
    editor.toggle_user("boris", false);
    editor.toggle_user("clara", true);

    let saved = editor.save().await;
    assert!(saved.is_ok());

    let patched = gateway.patched.lock().await;
    assert_eq!(patched.len(), 1);
    let (role_id, change) = &patched[0];
    assert_eq!(*role_id, 9);
    assert_eq!(change.role_name, None);
    assert_eq!(change.add_permission_ids, vec![3, 20]);
    assert_eq!(change.remove_permission_ids, vec![2]);
    assert_eq!(change.add_users, vec!["clara".to_owned()]);
    assert_eq!(change.remove_users, vec!["boris".to_owned()]);
}

#[tokio::test]
async fn unchanged_selection_patches_nothing_but_the_rename() {
    let gateway = Arc::new(FakeRoleGateway {
        details: Some(stored_role()),
        ..FakeRoleGateway::default()
    });

    let Ok(mut editor) = RoleEditor::edit(gateway.clone(), 9).await else {
        panic!("editor should load");
    };
    editor.role_name = "SENIOR_CASE_WORKER".to_owned();

    let saved = editor.save().await;
    assert!(saved.is_ok());

    let patched = gateway.patched.lock().await;
    let (_, change) = &patched[0];
    assert_eq!(change.role_name.as_deref(), Some("SENIOR_CASE_WORKER"));
    assert!(change.add_permission_ids.is_empty());
    assert!(change.remove_permission_ids.is_empty());
    assert!(change.add_users.is_empty());
    assert!(change.remove_users.is_empty());
}

#[tokio::test]
async fn row_toggle_skips_null_cells_and_other_rows() {
    let gateway = Arc::new(FakeRoleGateway::default());
    let mut editor = RoleEditor::create(gateway);

    let loaded = editor.load_matrix().await;
    assert!(loaded.is_ok());

    editor.toggle_row("Citizens", true);

    // the null APPROVE cell stayed untouched, Applications too
    assert_eq!(editor.permissions.selected(), vec![1, 2, 3]);

    editor.toggle_row("Citizens", false);
    assert!(editor.permissions.selected().is_empty());
}

#[tokio::test]
async fn short_role_name_is_rejected_without_a_network_call() {
    let gateway = Arc::new(FakeRoleGateway::default());
    let mut editor = RoleEditor::create(gateway.clone());
    editor.role_name = " a ".to_owned();

    let result = editor.save().await;

    assert!(matches!(
        result,
        Err(ClientError::Validation { field: Some(field), .. }) if field == "roleName"
    ));
    assert!(gateway.created.lock().await.is_empty());
}

#[tokio::test]
async fn failed_save_retains_the_edit_session() {
    let gateway = Arc::new(FakeRoleGateway {
        details: Some(stored_role()),
        patch_fails: true,
        ..FakeRoleGateway::default()
    });

    let Ok(mut editor) = RoleEditor::edit(gateway.clone(), 9).await else {
        panic!("editor should load");
    };
    editor.toggle_user("clara", true);

    let result = editor.save().await;
    assert!(matches!(result, Err(ClientError::Server(500))));

    // selection survives for retry
    assert_eq!(editor.users.added(), vec!["clara".to_owned()]);
    assert_eq!(editor.mode(), EditorMode::Edit { role_id: 9 });
}
