//! Filesystem utilities for atomic writes.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Replace `destination` with `data` without ever exposing a partial file.
///
/// The bytes go to a sibling temp file first, are synced, and then renamed
/// over the destination. The temp file is removed if any step fails.
///
/// A symlinked destination is written through: the link target is replaced
/// and the link itself is kept. An existing file keeps its permissions.
///
/// # Errors
///
/// Returns an error if the parent directory is unusable, the temp file
/// cannot be written, or the final rename fails.
pub fn write_atomic(destination: &Path, data: &[u8]) -> io::Result<()> {
    let target = resolve_destination(destination);
    let permissions = fs::metadata(&target)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());
    let temp_path = temp_sibling(&target)?;

    let result = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .and_then(|mut file| {
            file.write_all(data)?;
            if let Some(permissions) = permissions {
                file.set_permissions(permissions)?;
            }
            file.sync_all()
        });
    if let Err(err) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    rename_with_fallback(&temp_path, &target)
}

/// Follow symlinks so the rename lands on the real file.
fn resolve_destination(destination: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(destination) {
        return resolved;
    }
    // Dangling link: write to where it points.
    match fs::read_link(destination) {
        Ok(link) if link.is_absolute() => link,
        Ok(link) => destination
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(link),
        Err(_) => destination.to_path_buf(),
    }
}

fn temp_sibling(destination: &Path) -> io::Result<PathBuf> {
    let filename = destination
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid inventory filename: {}", destination.display()),
            )
        })?;
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::other(format!("System time error: {}", e)))?
        .as_nanos();
    Ok(parent.join(format!(".{}.{}.tmp", filename, nanos)))
}

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails even after the fallback attempt.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // A directory at the destination must not be removed.
        if destination.is_dir() {
            let _ = fs::remove_file(temp_path);
            return Err(initial_err);
        }
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
