use serde::Deserialize;

/// The subset of `.obsidian/app.json` this tool cares about.
///
/// Obsidian stores many more settings in this file; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Folder for new attachments, relative to the vault root.
    /// Absent, `null` and `""` all mean the vault root itself.
    #[serde(default)]
    pub attachment_folder_path: Option<String>,
}

impl AppConfig {
    pub fn attachment_folder(&self) -> &str {
        self.attachment_folder_path.as_deref().unwrap_or("")
    }
}
