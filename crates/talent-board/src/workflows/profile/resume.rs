use std::fmt::Debug;

use async_trait::async_trait;

/// Advisory caption shown next to the upload area. Not enforced.
pub const RESUME_HINT: &str = "PDF, máx. 5MB";

/// File chosen through the platform picker. Only the name is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub display_name: String,
}

#[async_trait]
pub trait FilePicker: Debug + Send + Sync {
    /// Resolves to `None` when the user dismisses the picker.
    async fn pick_document(&self) -> Option<PickedFile>;
}
