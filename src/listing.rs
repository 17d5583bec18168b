use crate::error::StitchError;

use std::path::Path;

/// Names of the non-directory entries in `dir`, sorted by name.
///
/// Names that are not valid UTF-8 are left out; they could never pass the
/// extension check anyway.
pub fn list_dir(dir: &Path) -> Result<Vec<String>, StitchError> {
    let read_err = |source| StitchError::ReadDir{ path: dir.to_path_buf(), source };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.file_type().map_err(read_err)?.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => log::debug!("Skipping non UTF-8 name {:?}", raw),
        }
    }
    names.sort();
    Ok(names)
}
