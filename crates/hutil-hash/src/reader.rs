use std::io::{self, Read};

use crate::Hasher;

/// Reader that feeds every byte it yields into a hasher.
pub struct HashingReader<R, H> {
    reader: R,
    hasher: H,
}

impl<R, H> HashingReader<R, H> {
    pub fn new(reader: R, hasher: H) -> Self {
        Self { reader, hasher }
    }
}

impl<R: Read, H: Hasher> HashingReader<R, H> {
    /// Digest of everything read so far.
    pub fn finish(self) -> Vec<u8> {
        self.hasher.finalize()
    }
}

impl<R: Read, H: Hasher> Read for HashingReader<R, H> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n > 0 {
            self.hasher.update(&buf[..n]);
        }
        Ok(n)
    }
}

#[cfg(all(test, feature = "sha256"))]
mod tests {
    use super::*;
    use crate::Sha256Hasher;
    use std::io::Cursor;

    #[test]
    fn digest_matches_one_shot() {
        let data = b"test data for hashing";
        let mut reader = HashingReader::new(Cursor::new(data), Sha256Hasher::new());
        let mut sink = Vec::new();
        reader.read_to_end(&mut sink).unwrap();

        assert_eq!(sink, data);
        assert_eq!(reader.finish(), Sha256Hasher::digest(data));
    }
}
