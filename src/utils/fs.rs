use std::fs;
use std::io::{Read, Write};
use std::path::{Component, Path, PathBuf};

use crate::utils::error::{BoxResult, TocError};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file to string
///
/// The handle is dropped before returning, on success and on error alike.
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let path = path.as_ref();
    let mut file = fs::File::open(path).map_err(|e| {
        TocError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        TocError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    Ok(contents)
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Normalize a path lexically: drop `.` components and fold `..` into the
/// preceding normal component. The filesystem is not consulted.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Whether two paths name the same file
///
/// Paths that exist are compared canonically, so symlinks and different
/// relative spellings collapse. Otherwise the lexical forms are compared.
pub fn same_file_path<P: AsRef<Path>, Q: AsRef<Path>>(a: P, b: Q) -> bool {
    if let (Ok(a), Ok(b)) = (fs::canonicalize(a.as_ref()), fs::canonicalize(b.as_ref())) {
        return a == b;
    }
    normalize_path(a) == normalize_path(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("notes.html");

        write_file(&path, "<h1>Vulkan notes</h1>\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "<h1>Vulkan notes</h1>\n");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("./vknotes.html"), PathBuf::from("vknotes.html"));
        assert_eq!(normalize_path("site/./../vknotes.html"), PathBuf::from("vknotes.html"));
        assert_eq!(normalize_path("../notes/a.html"), PathBuf::from("../notes/a.html"));
        assert_eq!(normalize_path("/a/../../b"), PathBuf::from("/b"));
    }

    #[test]
    fn test_same_file_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vknotes.html");
        write_file(&path, "x").unwrap();

        assert!(same_file_path(&path, dir.path().join(".").join("vknotes.html")));
        assert!(same_file_path("./missing.html", "missing.html"));
        assert!(!same_file_path(&path, dir.path().join("other.html")));
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vknotes.html");

        let err = read_file(&path).unwrap_err();
        assert!(err.to_string().contains("vknotes.html"));
    }
}
