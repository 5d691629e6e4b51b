//! Executable discovery on `PATH`.

use std::path::{Path, PathBuf};

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && (m.permissions().mode() & 0o111 != 0))
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file())
        .unwrap_or(false)
}

fn contains_path_separator(cmd: &str) -> bool {
    cmd.contains(std::path::MAIN_SEPARATOR) || cmd.contains('/')
}

/// First executable named `name` in `dirs`.
pub(super) fn find_executable_in_dirs(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    if name.trim().is_empty() {
        return None;
    }
    dirs.iter()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

/// Whether `cmd` resolves to an executable, given the directories to search.
///
/// Commands containing a path separator are checked directly and never
/// searched for.
pub(super) fn can_resolve_command_in(cmd: &str, dirs: &[PathBuf]) -> bool {
    let trimmed = cmd.trim();
    if trimmed.is_empty() {
        return false;
    }
    if contains_path_separator(trimmed) {
        return is_executable(Path::new(trimmed));
    }
    find_executable_in_dirs(trimmed, dirs).is_some()
}

/// Whether `cmd` resolves against the current process `PATH`.
///
/// `PATH` is re-read on every call.
pub(super) fn can_resolve_command(cmd: &str) -> bool {
    let dirs = std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect::<Vec<_>>())
        .unwrap_or_default();
    can_resolve_command_in(cmd, &dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn finds_executable_in_listed_dirs() {
        let fixture = TestTempDir::new("locate");
        let bin = fixture.write_text("bin/tmux", "#!/bin/sh\n");
        make_executable(&bin);

        let dirs = vec![fixture.child("empty"), fixture.child("bin")];
        assert_eq!(find_executable_in_dirs("tmux", &dirs), Some(bin));
        assert!(can_resolve_command_in("tmux", &dirs));
        assert!(!can_resolve_command_in("screen", &dirs));
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_file_is_not_resolved() {
        let fixture = TestTempDir::new("locate-noexec");
        fixture.write_text("bin/tmux", "not a program");
        assert!(!can_resolve_command_in("tmux", &[fixture.child("bin")]));
    }

    #[cfg(unix)]
    #[test]
    fn explicit_paths_are_checked_directly() {
        let fixture = TestTempDir::new("locate-path");
        let bin = fixture.write_text("opt/tmux", "#!/bin/sh\n");
        make_executable(&bin);
        let path = bin.to_string_lossy().to_string();
        assert!(can_resolve_command_in(&path, &[]));
        assert!(!can_resolve_command_in(
            &fixture.child("opt/missing").to_string_lossy(),
            &[]
        ));
    }

    #[test]
    fn blank_names_never_resolve() {
        assert!(!can_resolve_command_in("  ", &[PathBuf::from("/usr/bin")]));
        assert!(find_executable_in_dirs("", &[PathBuf::from("/usr/bin")]).is_none());
    }
}
