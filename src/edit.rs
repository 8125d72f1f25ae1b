//! Editing quick files in the user's editor.
//!
//! The editor comes from `$VISUAL` / `$EDITOR` through the `edit` crate.
//! A non-blank `[editor] command` in the config replaces it.

use crate::error::{QuickError, Result};
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::info;

/// Build the process for a configured editor command line opening `path`.
///
/// The command line is split on whitespace, so `"code --wait"` works.
/// Returns `None` for a blank or missing command.
pub fn override_command(configured: Option<&str>, path: &Path) -> Option<Command> {
    let mut parts = configured?.split_whitespace();
    let program = parts.next()?;
    let mut cmd = Command::new(program);
    cmd.args(parts).arg(path);
    Some(cmd)
}

/// Map the editor's exit status to a result.
pub fn check_status(program: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(QuickError::Editor {
            program: program.to_string(),
            status,
        })
    }
}

fn launch_error(program: impl Into<String>, source: io::Error) -> QuickError {
    QuickError::EditorLaunch {
        program: program.into(),
        source,
    }
}

/// Open `path` in the editor and wait for it to exit.
pub fn edit_file(configured: Option<&str>, path: &Path) -> Result<()> {
    if let Some(mut cmd) = override_command(configured, path) {
        let program = cmd.get_program().to_string_lossy().into_owned();
        info!(editor = %program, path = %path.display(), "launching configured editor");
        let status = cmd
            .status()
            .map_err(|source| launch_error(program.as_str(), source))?;
        return check_status(&program, status);
    }

    let editor = ::edit::get_editor().map_err(|source| launch_error("$VISUAL/$EDITOR", source))?;
    info!(editor = %editor.display(), path = %path.display(), "launching editor");
    ::edit::edit_file(path).map_err(|source| launch_error(editor.display().to_string(), source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_override_command_with_arguments() {
        let cmd = override_command(Some("code --wait"), Path::new("/cache/git.md")).unwrap();
        assert_eq!(cmd.get_program(), "code");
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(args, vec!["--wait", "/cache/git.md"]);
    }

    #[test]
    fn test_blank_override_defers_to_environment() {
        let path = Path::new("/cache/git.md");
        assert!(override_command(None, path).is_none());
        assert!(override_command(Some(""), path).is_none());
        assert!(override_command(Some("   "), path).is_none());
    }

    #[test]
    fn test_launch_error_keeps_program() {
        let err = launch_error("hx", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, QuickError::EditorLaunch { ref program, .. } if program == "hx"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_editor_error() {
        use std::os::unix::process::ExitStatusExt;

        assert!(check_status("hx", ExitStatus::from_raw(0)).is_ok());

        let err = check_status("hx", ExitStatus::from_raw(1 << 8)).unwrap_err();
        assert!(matches!(
            err,
            QuickError::Editor { ref program, status } if program == "hx" && status.code() == Some(1)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_configured_editor_failure_surfaces() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("git.md");

        assert!(edit_file(Some("true"), &path).is_ok());
        assert!(matches!(
            edit_file(Some("false"), &path),
            Err(QuickError::Editor { ref program, .. }) if program == "false"
        ));
    }

    #[test]
    fn test_missing_configured_editor_is_launch_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = edit_file(Some("quick-no-such-editor-xyz"), &dir.path().join("git.md")).unwrap_err();
        assert!(matches!(err, QuickError::EditorLaunch { .. }));
    }
}
