//! End-to-end flow of the add-API-key dialog against the in-memory backend

use async_trait::async_trait;
use canvass_console::LogNotifier;
use canvass_console::api_keys::{AddApiKeyModal, ModalMessage, RowUpdate, SubmitApiKey};
use canvass_core::tests::{InMemoryBackend, fixtures};
use canvass_core::{
    AccessType, ApiKeyPermission, CreateApiKeyRequest, EnvironmentPermission, KeyTranslator,
    OrganizationAccessCategory, Result, StateBackend,
};
use std::sync::{Arc, Mutex};

/// Stores submitted keys the way an API route would persist them
#[derive(Default)]
struct KeyStore {
    created: Mutex<Vec<CreateApiKeyRequest>>,
}

#[async_trait]
impl SubmitApiKey for KeyStore {
    async fn submit(&self, request: CreateApiKeyRequest) -> Result<()> {
        self.created.lock().unwrap().push(request);
        Ok(())
    }
}

async fn organization_projects() -> Vec<canvass_core::OrganizationProject> {
    let backend = InMemoryBackend::new();
    backend
        .insert_project(
            "org-1",
            fixtures::project(
                "p1",
                "Website",
                vec![fixtures::production("e1"), fixtures::development("e2")],
            ),
        )
        .await;
    backend
        .insert_project(
            "org-1",
            fixtures::project("p2", "Mobile", vec![fixtures::production("e3")]),
        )
        .await;
    backend.list_organization_projects("org-1").await.unwrap()
}

#[tokio::test]
async fn test_create_key_with_mixed_access() {
    let _ = canvass_core::tracing::init_dev();

    let projects = organization_projects().await;
    assert_eq!(projects.len(), 2);

    let mut modal = AddApiKeyModal::new(projects, Arc::new(KeyTranslator));
    modal.update(ModalMessage::Open);
    modal.update(ModalMessage::LabelChanged("Zapier".to_string()));
    modal.update(ModalMessage::AddRow);
    modal.update(ModalMessage::AddRow);
    modal.update(ModalMessage::AddRow);

    let keys: Vec<_> = modal.editor().rows().iter().map(|r| r.key).collect();
    modal.update(ModalMessage::UpdateRow(keys[1], RowUpdate::Project("p2".to_string())));
    modal.update(ModalMessage::UpdateRow(
        keys[1],
        RowUpdate::Permission(ApiKeyPermission::Manage),
    ));
    modal.update(ModalMessage::RemoveRow(keys[2]));
    modal.update(ModalMessage::OrganizationAccessToggled {
        category: OrganizationAccessCategory::AccessControl,
        access: AccessType::Read,
        value: true,
    });

    let store = KeyStore::default();
    modal.set_creating(false);
    let submitted = modal.submit(&store, &LogNotifier).await.unwrap();
    assert!(submitted);

    let created = store.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].label, "Zapier");
    assert_eq!(
        created[0].environment_permissions,
        vec![
            EnvironmentPermission {
                environment_id: "e1".to_string(),
                permission: ApiKeyPermission::Read,
            },
            EnvironmentPermission {
                environment_id: "e3".to_string(),
                permission: ApiKeyPermission::Manage,
            },
        ]
    );
    assert!(
        created[0]
            .organization_access
            .get(OrganizationAccessCategory::AccessControl)
            .read
    );

    assert!(modal.editor().rows().is_empty());
    assert!(modal.is_submit_disabled());
}

#[tokio::test]
async fn test_duplicate_rows_must_be_fixed_before_submit() {
    let mut modal = AddApiKeyModal::new(organization_projects().await, Arc::new(KeyTranslator));
    modal.update(ModalMessage::LabelChanged("CI".to_string()));
    modal.update(ModalMessage::AddRow);
    modal.update(ModalMessage::AddRow);

    let store = KeyStore::default();
    assert!(!modal.submit(&store, &LogNotifier).await.unwrap());
    assert!(store.created.lock().unwrap().is_empty());

    let second = modal.editor().rows()[1].key;
    modal.update(ModalMessage::UpdateRow(
        second,
        RowUpdate::Environment("e2".to_string()),
    ));
    assert!(modal.submit(&store, &LogNotifier).await.unwrap());
    assert_eq!(store.created.lock().unwrap().len(), 1);
}

#[test]
fn test_organization_access_only_key_can_be_submitted() {
    let mut modal = AddApiKeyModal::new(Vec::new(), Arc::new(KeyTranslator));
    modal.update(ModalMessage::LabelChanged("Audit".to_string()));
    modal.update(ModalMessage::AddRow);
    assert!(modal.editor().rows().is_empty());
    assert!(modal.is_submit_disabled());

    modal.update(ModalMessage::OrganizationAccessToggled {
        category: OrganizationAccessCategory::AccessControl,
        access: AccessType::Write,
        value: true,
    });
    assert!(!modal.is_submit_disabled());
}
