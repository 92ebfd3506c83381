use std::path::{Path, PathBuf};

use anyhow::Result;

const SAFEVAULT_DIR: &str = "~/.safevault";
const STORAGE_FILE_NAME: &str = "storage.json";
const HISTORY_FILE_NAME: &str = "history.txt";

fn expand(path: &Path) -> Result<PathBuf> {
    Ok(shellexpand::path::full(path)?.into_owned())
}

pub fn safevault_dir() -> Result<PathBuf> {
    expand(Path::new(SAFEVAULT_DIR))
}

pub fn storage_file(storage_file: &Option<PathBuf>) -> Result<PathBuf> {
    match storage_file {
        Some(path) => expand(path),
        None => Ok(safevault_dir()?.join(STORAGE_FILE_NAME)),
    }
}

pub fn history_file(history_file: &Option<PathBuf>) -> Option<PathBuf> {
    match history_file {
        Some(path) => expand(path).ok(),
        None => safevault_dir().ok().map(|p| p.join(HISTORY_FILE_NAME)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_storage_file() {
        let path = PathBuf::from("/tmp/contracts.json");
        assert_eq!(storage_file(&Some(path.clone())).unwrap(), path);
    }

    #[test]
    fn test_default_files_in_safevault_dir() {
        if let Ok(dir) = safevault_dir() {
            assert_eq!(storage_file(&None).unwrap(), dir.join(STORAGE_FILE_NAME));
            assert_eq!(history_file(&None), Some(dir.join(HISTORY_FILE_NAME)));
        }
    }
}
