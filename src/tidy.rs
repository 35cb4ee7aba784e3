//! clang-tidy driver over the interpreter sources listed in
//! `compile_commands.json`.

use crate::error::{io_at, GenError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

pub const COMPILE_DATABASE: &str = "compile_commands.json";

/// Passed to clang-tidy so diagnostics in our own headers are reported.
pub const HEADER_FILTER: &str = "--header-filter=src/.*";

#[derive(Debug, Deserialize)]
struct CompileCommand {
    file: PathBuf,
    #[serde(default)]
    directory: Option<PathBuf>,
}

/// Absolute form of `path`, resolving symlinks when it exists.
pub fn normalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}

/// Sources under `<build_dir>/../src`, first occurrence wins.
pub fn load_sources(build_dir: &Path) -> Result<Vec<PathBuf>> {
    let database = build_dir.join(COMPILE_DATABASE);
    let text = match fs::read_to_string(&database) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(GenError::MissingCompileDatabase(database));
        }
        Err(e) => return Err(io_at(&database)(e)),
    };
    let commands: Vec<CompileCommand> =
        serde_json::from_str(&text).map_err(|source| GenError::CompileDatabase {
            path: database.clone(),
            source,
        })?;

    let src_root = normalize(&build_dir.parent().unwrap_or(build_dir).join("src"));
    let mut seen = HashSet::new();
    let mut sources = Vec::new();
    for command in commands {
        let file = match (&command.directory, command.file.is_relative()) {
            (Some(dir), true) => dir.join(&command.file),
            _ => command.file,
        };
        let path = normalize(&file);
        if !path.starts_with(&src_root) {
            continue;
        }
        if seen.insert(path.clone()) {
            sources.push(path);
        }
    }

    if sources.is_empty() {
        return Err(GenError::NoTidySources);
    }
    tracing::info!(count = sources.len(), "clang-tidy sources");
    Ok(sources)
}

/// SDK root for clang-tidy on macOS. Any failure leaves the environment as
/// it is.
pub fn probe_sdkroot() -> Option<String> {
    if std::env::var_os("SDKROOT").is_some() {
        return None;
    }
    let output = Command::new("xcrun").arg("--show-sdk-path").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let path = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!path.is_empty()).then_some(path)
}

/// Run clang-tidy on one source.
pub fn run_one(
    clang_tidy: &Path,
    build_dir: &Path,
    source: &Path,
    sdkroot: Option<&str>,
) -> Result<ExitStatus> {
    let mut cmd = Command::new(clang_tidy);
    cmd.arg("-p").arg(build_dir).arg(HEADER_FILTER).arg(source);
    if let Some(sdk) = sdkroot {
        cmd.env("SDKROOT", sdk);
    }
    cmd.status().map_err(io_at(clang_tidy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(database: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let build = dir.path().join("build");
        fs::create_dir_all(&build).unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/joy.c"), "").unwrap();
        fs::write(dir.path().join("src/gc.c"), "").unwrap();
        fs::write(build.join(COMPILE_DATABASE), database).unwrap();
        (dir, build)
    }

    #[test]
    fn missing_database_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = load_sources(dir.path()).unwrap_err();
        assert!(matches!(err, GenError::MissingCompileDatabase(_)));
        assert!(err.to_string().contains("run `make joy` first"));
    }

    #[test]
    fn malformed_database_is_fatal() {
        let (_dir, build) = project("{ not json");
        assert!(matches!(
            load_sources(&build).unwrap_err(),
            GenError::CompileDatabase { .. }
        ));
    }

    #[test]
    fn keeps_src_files_in_order_without_duplicates() {
        let (dir, build) = project("");
        let src = dir.path().join("src");
        let db = format!(
            r#"[
                {{"file": "{joy}", "directory": "{b}"}},
                {{"file": "/usr/include/stdio.h", "directory": "{b}"}},
                {{"file": "../src/gc.c", "directory": "{b}"}},
                {{"file": "{joy}", "directory": "{b}"}}
            ]"#,
            joy = src.join("joy.c").display(),
            b = build.display()
        );
        fs::write(build.join(COMPILE_DATABASE), db).unwrap();

        let sources = load_sources(&build).unwrap();
        let names: Vec<_> = sources
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["joy.c", "gc.c"]);
    }

    #[test]
    fn nothing_under_src_is_fatal() {
        let (_dir, build) = project(r#"[{"file": "/usr/include/stdio.h"}]"#);
        assert!(matches!(
            load_sources(&build).unwrap_err(),
            GenError::NoTidySources
        ));
    }
}
