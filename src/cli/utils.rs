//! Shared CLI utilities.

use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::Path;

/// Whether a person is on the other end of stdout.
pub fn is_tty() -> bool {
    console::user_attended()
}

/// Ask a yes/no question, defaulting to no. Never prompts off a terminal.
pub fn prompt_confirmation(message: &str) -> bool {
    if !is_tty() {
        return false;
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(false)
        .interact()
        .unwrap_or(false)
}

/// Decide whether `path` may be written. Only an existing file on an
/// interactive terminal without `force` asks first.
pub fn confirm_overwrite(path: &Path, force: bool) -> bool {
    if !needs_confirmation(path, force, is_tty()) {
        return true;
    }
    prompt_confirmation(&format!("Overwrite {}?", path.display()))
}

fn needs_confirmation(path: &Path, force: bool, interactive: bool) -> bool {
    !force && interactive && path.exists()
}

#[cfg(test)]
mod tests {
    use super::{confirm_overwrite, needs_confirmation};
    use tempfile::TempDir;

    #[test]
    fn new_files_never_need_confirmation() {
        let tmp = TempDir::new().expect("tmp");
        assert!(confirm_overwrite(&tmp.path().join("fresh.env"), false));
    }

    #[test]
    fn force_skips_confirmation() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("existing.env");
        std::fs::write(&path, "A=1\n").expect("write");
        assert!(confirm_overwrite(&path, true));
    }

    #[test]
    fn existing_file_on_terminal_asks_unless_forced() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("existing.env");
        std::fs::write(&path, "A=1\n").expect("write");

        assert!(needs_confirmation(&path, false, true));
        assert!(!needs_confirmation(&path, true, true));
        assert!(!needs_confirmation(&path, false, false));
        assert!(!needs_confirmation(&tmp.path().join("fresh.env"), false, true));
    }
}
