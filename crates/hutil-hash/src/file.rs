use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{Algorithm, HashError, HashingReader, Result};

const BUF_SIZE: usize = 64 * 1024;

/// Hex digest of the file at `path`, read in 64 KiB chunks.
pub fn hash_file(path: impl AsRef<Path>, algorithm: Algorithm) -> Result<String> {
    let path = hutil_platform::path::expand(path)?;
    let file = File::open(&path).map_err(|source| HashError::Read {
        path: path.clone(),
        source,
    })?;

    let mut reader = HashingReader::new(file, algorithm.hasher()?);
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = reader.read(&mut buf).map_err(|source| HashError::Read {
            path: path.clone(),
            source,
        })?;
        if n == 0 {
            break;
        }
    }
    Ok(hex::encode(reader.finish()))
}

#[cfg(feature = "sha256")]
pub fn sha256(path: impl AsRef<Path>) -> Result<String> {
    hash_file(path, Algorithm::Sha256)
}

#[cfg(feature = "md5")]
pub fn md5(path: impl AsRef<Path>) -> Result<String> {
    hash_file(path, Algorithm::Md5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(all(feature = "sha256", feature = "md5"))]
    #[test]
    fn known_digests() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hello.txt");
        std::fs::write(&path, "hello world").unwrap();

        assert_eq!(
            sha256(&path).unwrap(),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
        assert_eq!(md5(&path).unwrap(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[cfg(feature = "sha256")]
    #[test]
    fn larger_than_one_buffer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.bin");
        let data = vec![7u8; BUF_SIZE * 3 + 17];
        std::fs::write(&path, &data).unwrap();

        assert_eq!(sha256(&path).unwrap(), hex::encode(crate::Sha256Hasher::digest(&data)));
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempdir().unwrap();
        let err = hash_file(dir.path().join("absent"), Algorithm::Sha256).unwrap_err();
        assert!(matches!(err, HashError::Read { .. }));
    }
}
