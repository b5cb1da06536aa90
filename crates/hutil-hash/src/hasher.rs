use std::str::FromStr;

use crate::HashError;

/// Incremental digest.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

#[cfg(feature = "sha256")]
pub struct Sha256Hasher(sha2::Sha256);

#[cfg(feature = "sha256")]
impl Hasher for Sha256Hasher {
    fn update(&mut self, data: &[u8]) {
        sha2::Digest::update(&mut self.0, data);
    }
    fn finalize(self) -> Vec<u8> {
        sha2::Digest::finalize(self.0).to_vec()
    }
}

#[cfg(feature = "sha256")]
impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "sha256")]
impl Sha256Hasher {
    pub fn new() -> Self {
        Self(<sha2::Sha256 as sha2::Digest>::new())
    }

    pub fn digest(data: &[u8]) -> Vec<u8> {
        <sha2::Sha256 as sha2::Digest>::digest(data).to_vec()
    }
}

#[cfg(feature = "md5")]
pub struct Md5Hasher(md5::Md5);

#[cfg(feature = "md5")]
impl Hasher for Md5Hasher {
    fn update(&mut self, data: &[u8]) {
        md5::Digest::update(&mut self.0, data);
    }
    fn finalize(self) -> Vec<u8> {
        md5::Digest::finalize(self.0).to_vec()
    }
}

#[cfg(feature = "md5")]
impl Default for Md5Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "md5")]
impl Md5Hasher {
    pub fn new() -> Self {
        Self(<md5::Md5 as md5::Digest>::new())
    }

    pub fn digest(data: &[u8]) -> Vec<u8> {
        <md5::Md5 as md5::Digest>::digest(data).to_vec()
    }
}

/// Digest selected by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Sha256,
    Md5,
}

impl Algorithm {
    pub fn hasher(self) -> crate::Result<AnyHasher> {
        match self {
            #[cfg(feature = "sha256")]
            Self::Sha256 => Ok(AnyHasher::Sha256(Sha256Hasher::new())),
            #[cfg(feature = "md5")]
            Self::Md5 => Ok(AnyHasher::Md5(Md5Hasher::new())),
            #[allow(unreachable_patterns)]
            other => Err(HashError::Unsupported(format!("{other:?}"))),
        }
    }
}

/// Hasher picked at runtime from an [`Algorithm`].
pub enum AnyHasher {
    #[cfg(feature = "sha256")]
    Sha256(Sha256Hasher),
    #[cfg(feature = "md5")]
    Md5(Md5Hasher),
}

impl Hasher for AnyHasher {
    fn update(&mut self, data: &[u8]) {
        match self {
            #[cfg(feature = "sha256")]
            Self::Sha256(h) => h.update(data),
            #[cfg(feature = "md5")]
            Self::Md5(h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            #[cfg(feature = "sha256")]
            Self::Sha256(h) => h.finalize(),
            #[cfg(feature = "md5")]
            Self::Md5(h) => h.finalize(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "md5" => Ok(Self::Md5),
            other => Err(HashError::Unsupported(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "sha256")]
    #[test]
    fn sha256_hello_world() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"hello ");
        hasher.update(b"world");
        assert_eq!(
            hex::encode(hasher.finalize()),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[cfg(feature = "md5")]
    #[test]
    fn md5_hello_world() {
        assert_eq!(
            hex::encode(Md5Hasher::digest(b"hello world")),
            "5eb63bbbe01eeed093cb22bb8f5acdc3"
        );
    }

    #[test]
    fn algorithm_from_str() {
        assert_eq!("SHA256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
        assert_eq!("md5".parse::<Algorithm>().unwrap(), Algorithm::Md5);
        assert!("crc32".parse::<Algorithm>().is_err());
    }
}
