//! Subcommand and default-action handlers.

use std::fs::File;
use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod info;
pub mod score;

/// Read a text file for scoring, refusing files larger than `max_bytes`.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut file = File::open(path).with_context(|| format!("failed to read {path}"))?;
    let size = file
        .metadata()
        .with_context(|| format!("failed to read {path}"))?
        .len();
    if let Some(max) = max_bytes
        && size > max as u64
    {
        anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
    }

    let mut text = String::new();
    file.read_to_string(&mut text)
        .with_context(|| format!("{path} is not UTF-8 text"))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn reads_file_within_limit() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("in.txt")).unwrap();
        std::fs::write(&path, "Short text.").unwrap();

        assert_eq!(read_input_file(&path, Some(64)).unwrap(), "Short text.");
        assert_eq!(read_input_file(&path, None).unwrap(), "Short text.");
    }

    #[test]
    fn rejects_oversized_file() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("in.txt")).unwrap();
        std::fs::write(&path, "This text is longer than the limit.").unwrap();

        let err = read_input_file(&path, Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn non_utf8_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("latin1.txt")).unwrap();
        std::fs::write(&path, b"caf\xe9").unwrap();

        let err = read_input_file(&path, None).unwrap_err();
        assert!(err.to_string().contains("not UTF-8 text"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_input_file(Utf8Path::new("does/not/exist.txt"), None).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
