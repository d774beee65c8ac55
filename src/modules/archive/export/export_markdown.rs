use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::log_info;
use crate::modules::archive::VerifiedConversation;

use super::render_markdown;

/// `<title>.md`, with characters that can't appear in a file name replaced.
pub fn export_file_name(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() {
        "conversation.md".to_string()
    } else {
        format!("{}.md", stem)
    }
}

/// `dir/file_name`, or `dir/<stem> (n).md` with the first free `n` when
/// that file already exists.
fn unused_path(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    if !path.exists() {
        return path;
    }

    let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
    (1..)
        .map(|n| dir.join(format!("{} ({}).md", stem, n)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(path)
}

/// Write the markdown rendering of `conversation` into `dir`. An existing
/// file with the same name is kept and the new one gets a ` (n)` suffix.
pub fn export_markdown(conversation: &VerifiedConversation, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = unused_path(dir, &export_file_name(&conversation.title));
    let markdown = render_markdown(conversation);
    fs::write(&path, &markdown)?;

    log_info!("Exported {:?} ({} bytes) to {}", conversation.title, markdown.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_sanitized() {
        assert_eq!(export_file_name("Osmosis"), "Osmosis.md");
        assert_eq!(export_file_name("a/b\\c: d?"), "a_b_c_ d_.md");
        assert_eq!(export_file_name("  "), "conversation.md");
    }

    #[test]
    fn test_unused_path_numbers_duplicates() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(unused_path(dir.path(), "Osmosis.md"), dir.path().join("Osmosis.md"));

        fs::write(dir.path().join("Osmosis.md"), "first").unwrap();
        assert_eq!(unused_path(dir.path(), "Osmosis.md"), dir.path().join("Osmosis (1).md"));

        fs::write(dir.path().join("Osmosis (1).md"), "second").unwrap();
        assert_eq!(unused_path(dir.path(), "Osmosis.md"), dir.path().join("Osmosis (2).md"));
    }
}
