use dioxus::prelude::*;
use store::SelectedFile;

/// Read every file picked in a file input. Unreadable files are logged and skipped.
pub async fn read_selected_files(evt: &FormEvent) -> Vec<SelectedFile> {
    let mut selected = Vec::new();
    for file in evt.files() {
        match file.read_bytes().await {
            Ok(bytes) => selected.push(SelectedFile::new(
                file.name(),
                file.content_type(),
                bytes.to_vec(),
            )),
            Err(e) => tracing::error!("Could not read {}: {}", file.name(), e),
        }
    }
    selected
}
