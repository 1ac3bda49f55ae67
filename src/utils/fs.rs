use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes `payload` to `dir/file_name`, creating `dir` if needed, and marks
/// the result executable.
///
/// The payload goes to a temporary file in `dir` first and is renamed over
/// the old binary, so a running copy is replaced rather than opened for
/// writing, and an interrupted write never leaves a truncated binary behind.
pub fn write_executable(dir: &Path, file_name: &str, payload: &[u8]) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(payload)?;
    staged.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(staged.path(), fs::Permissions::from_mode(0o755))?;
    }

    let path = dir.join(file_name);
    staged.persist(&path).map_err(|e| e.error)?;

    Ok(path)
}
