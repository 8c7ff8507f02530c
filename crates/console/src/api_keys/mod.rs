//! Organization API key management

pub mod editor;
pub mod modal;

pub use editor::{EditorError, PermissionEditor, PermissionRow, RowKey, RowUpdate, SubmitApiKey};
pub use modal::{AddApiKeyModal, ModalMessage, OrganizationAccessRow, ProjectOption};
