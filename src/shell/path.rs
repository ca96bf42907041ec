//! Executable lookup on PATH.
//!
//! Lookup walks PATH entries directly instead of shelling out to `which`,
//! whose behavior varies across systems.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for name in candidate_names(tool) {
            let candidate = dir.join(&name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a program given either as a bare name or as a path.
///
/// Names containing a path separator are taken relative to `base` and must
/// point at an executable file. Bare names are looked up on `path_entries`.
pub fn resolve_program(program: &str, base: &Path, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if program.contains('/') || program.contains(std::path::MAIN_SEPARATOR) {
        let candidate = base.join(program);
        return (candidate.is_file() && is_executable(&candidate)).then_some(candidate);
    }
    resolve_tool_path(program, path_entries)
}

fn candidate_names(tool: &str) -> Vec<String> {
    let suffix = std::env::consts::EXE_SUFFIX;
    if suffix.is_empty() || tool.ends_with(suffix) {
        vec![tool.to_string()]
    } else {
        vec![tool.to_string(), format!("{}{}", tool, suffix)]
    }
}
