use crate::error::UploadResult;
use crate::upload::types::SelectedFile;
use ignore::Walk;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions the picker offers and the drop target accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 5] = ["pdf", "xlsx", "docx", "txt", "json"];

pub const ACCEPTED_LABEL: &str = "XLSX, PDF, DOCX, TXT or JSON";

pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            ACCEPTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> UploadResult<Self> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Ok(Self {
            name,
            path: path.to_path_buf(),
            size: metadata.len(),
            mime: mime_for(path),
        })
    }
}

/// Turns picked paths into files, dropping anything outside the accept filter
/// or unreadable. `None` stays `None` so an aborted pick remains a no-op.
pub fn resolve_paths(paths: Option<Vec<PathBuf>>) -> Option<Vec<SelectedFile>> {
    let paths = paths?;
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        if !is_accepted(&path) {
            tracing::warn!(path = %path.display(), "skipping file outside the accepted types");
            continue;
        }
        match SelectedFile::from_path(&path) {
            Ok(file) => files.push(file),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file"),
        }
    }

    Some(files)
}

/// Every accepted file under `folder`, honouring `.gitignore` rules.
pub fn collect_folder(folder: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for entry in Walk::new(folder) {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && is_accepted(path) {
                    paths.push(path.to_path_buf());
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to walk folder entry"),
        }
    }

    paths.sort();
    paths
}

pub fn pick_files() -> Option<Vec<SelectedFile>> {
    let picked = rfd::FileDialog::new()
        .add_filter("Feedback files", &ACCEPTED_EXTENSIONS)
        .pick_files();
    resolve_paths(picked)
}

pub fn pick_folder() -> Option<Vec<SelectedFile>> {
    let folder = rfd::FileDialog::new().pick_folder()?;
    tracing::info!(folder = %folder.display(), "collecting files from folder");
    resolve_paths(Some(collect_folder(&folder)))
}
