//! Clipboard and opener integration through native OS tools
//!
//! - macOS: `open`, `pbcopy`
//! - Linux: `xdg-open`, `wl-copy` / `xclip` / `xsel`
//! - Windows: `cmd /C start`, `clip`

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// Errors from platform integrations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} failed with status {status}")]
    Status { tool: String, status: ExitStatus },

    #[error("no clipboard tool found (tried {tried})")]
    NoClipboard { tried: String },

    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
}

/// Open a URL in the default browser
pub fn open_url(url: &str) -> Result<(), PlatformError> {
    log::debug!("Opening URL: {}", url);
    open_native(OsStr::new(url))
}

/// Open a file or directory with its default application
pub fn open_path(path: &Path) -> Result<(), PlatformError> {
    log::debug!("Opening path: {}", path.display());
    open_native(path.as_os_str())
}

/// Put `text` on the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<(), PlatformError> {
    let candidates = clipboard_tools();
    let mut tried = Vec::new();

    for (tool, args) in candidates {
        match pipe_to(tool, args, text) {
            Err(PlatformError::Spawn { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::debug!("Clipboard tool {} not installed", tool);
                tried.push(*tool);
            }
            result => return result,
        }
    }

    Err(PlatformError::NoClipboard {
        tried: tried.join(", "),
    })
}

fn ensure_success(status: ExitStatus, tool: &str) -> Result<(), PlatformError> {
    if status.success() {
        Ok(())
    } else {
        Err(PlatformError::Status {
            tool: tool.to_string(),
            status,
        })
    }
}

fn run_tool(tool: &str, args: &[&OsStr]) -> Result<(), PlatformError> {
    let status = Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .status()
        .map_err(|source| PlatformError::Spawn {
            tool: tool.to_string(),
            source,
        })?;
    ensure_success(status, tool)
}

fn pipe_to(tool: &str, args: &[&str], input: &str) -> Result<(), PlatformError> {
    let spawn_err = |source| PlatformError::Spawn {
        tool: tool.to_string(),
        source,
    };

    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(spawn_err)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes()).map_err(spawn_err)?;
    }

    let status = child.wait().map_err(spawn_err)?;
    ensure_success(status, tool)
}

#[cfg(target_os = "macos")]
fn open_native(target: &OsStr) -> Result<(), PlatformError> {
    run_tool("open", &[target])
}

#[cfg(target_os = "linux")]
fn open_native(target: &OsStr) -> Result<(), PlatformError> {
    run_tool("xdg-open", &[target])
}

#[cfg(target_os = "windows")]
fn open_native(target: &OsStr) -> Result<(), PlatformError> {
    run_tool("cmd", &[OsStr::new("/C"), OsStr::new("start"), OsStr::new(""), target])
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn open_native(_target: &OsStr) -> Result<(), PlatformError> {
    Err(PlatformError::Unsupported("open"))
}

#[cfg(target_os = "macos")]
fn clipboard_tools() -> &'static [(&'static str, &'static [&'static str])] {
    &[("pbcopy", &[])]
}

#[cfg(target_os = "windows")]
fn clipboard_tools() -> &'static [(&'static str, &'static [&'static str])] {
    &[("clip", &[])]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn clipboard_tools() -> &'static [(&'static str, &'static [&'static str])] {
    &[
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_spawn_error() {
        let err = run_tool("laravel-helper-no-such-tool", &[]).unwrap_err();
        match err {
            PlatformError::Spawn { tool, source } => {
                assert_eq!(tool, "laravel-helper-no-such-tool");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_tool_is_status_error() {
        let err = run_tool("false", &[]).unwrap_err();
        assert!(matches!(err, PlatformError::Status { .. }));
        assert!(err.to_string().starts_with("false failed with status"));
    }

    #[cfg(unix)]
    #[test]
    fn test_pipe_to_writes_stdin() {
        assert!(pipe_to("cat", &[], "hello").is_ok());
        assert!(pipe_to("sh", &["-c", "grep -q hello"], "hello world").is_ok());
        assert!(pipe_to("sh", &["-c", "grep -q bye"], "hello world").is_err());
    }

    #[test]
    fn test_clipboard_tools_not_empty() {
        assert!(!clipboard_tools().is_empty());
    }
}
