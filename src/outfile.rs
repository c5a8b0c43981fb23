use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{Error, Result};

/// Picks the output prefix inside `dir`: `<dir>/0<N>` for the lowest N
/// (starting at 1) without an existing `<dir>/0<N>.txt`.
///
/// The prefix is always "0" followed by N, so the tenth run gets `010`.
pub fn allocate_prefix(dir: &Utf8Path) -> Result<Utf8PathBuf> {
    let metadata = std::fs::metadata(dir).map_err(|e| Error::file_not_found(dir, e))?;
    if !metadata.is_dir() {
        return Err(Error::file_not_found(
            dir,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    let mut n = 1usize;
    loop {
        let prefix = dir.join(format!("0{n}"));
        if !prefix.with_extension("txt").exists() {
            return Ok(prefix);
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(dir.path()).unwrap();
        assert_eq!(allocate_prefix(dir).unwrap(), dir.join("01"));
    }

    #[test]
    fn skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::write(dir.join("01.txt"), "").unwrap();
        assert_eq!(allocate_prefix(dir).unwrap(), dir.join("02"));
    }

    #[test]
    fn only_txt_counts() {
        let dir = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::write(dir.join("01.json"), "").unwrap();
        assert_eq!(allocate_prefix(dir).unwrap(), dir.join("01"));
    }

    #[test]
    fn fills_gaps() {
        let dir = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::write(dir.join("01.txt"), "").unwrap();
        std::fs::write(dir.join("03.txt"), "").unwrap();
        assert_eq!(allocate_prefix(dir).unwrap(), dir.join("02"));
    }

    #[test]
    fn past_nine() {
        let dir = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(dir.path()).unwrap();
        for n in 1..=9 {
            std::fs::write(dir.join(format!("0{n}.txt")), "").unwrap();
        }
        assert_eq!(allocate_prefix(dir).unwrap(), dir.join("010"));
    }

    #[test]
    fn missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(dir.path()).unwrap().join("nope");
        assert!(matches!(
            allocate_prefix(&dir),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn file_instead_of_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = Utf8Path::from_path(dir.path()).unwrap().join("file");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(
            allocate_prefix(&file),
            Err(Error::FileNotFound { .. })
        ));
    }
}
