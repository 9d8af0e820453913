// Mon Feb 09 2026 - Alex

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

pub fn file_extension_matches(path: &Path, exts: &[&str]) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => exts.iter().any(|candidate| ext.eq_ignore_ascii_case(candidate)),
        None => false,
    }
}

/// Recursive copy of every file under `src` into `dst`. With `flatten`, all
/// files land directly in `dst` by basename; otherwise relative paths are
/// preserved. A missing `src` copies nothing.
pub fn copy_tree(src: &Path, dst: &Path, flatten: bool) -> io::Result<()> {
    copy_tree_filtered(src, dst, &[], flatten)
}

/// Like `copy_tree` but only copies files whose extension matches. An empty
/// extension list matches every file.
pub fn copy_tree_filtered(src: &Path, dst: &Path, exts: &[&str], flatten: bool) -> io::Result<()> {
    if src.is_file() {
        return copy_file_into(src, dst);
    }
    if !src.is_dir() {
        return Ok(());
    }

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !exts.is_empty() && !file_extension_matches(entry.path(), exts) {
            continue;
        }

        let dest = if flatten {
            dst.join(entry.file_name())
        } else {
            match entry.path().strip_prefix(src) {
                Ok(rel) => dst.join(rel),
                Err(_) => continue,
            }
        };

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)?;
    }
    Ok(())
}

pub fn copy_file_into(src: &Path, dst_dir: &Path) -> io::Result<()> {
    let name = src.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Not a copyable file: {}", src.display()),
        )
    })?;
    fs::create_dir_all(dst_dir)?;
    fs::copy(src, dst_dir.join(name))?;
    Ok(())
}

pub fn read_text_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

pub fn write_text_file(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
}

/// Removes a file or a whole directory tree; absent paths are a no-op.
pub fn remove_tree(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else if path.is_file() {
        fs::remove_file(path)
    } else {
        Ok(())
    }
}
