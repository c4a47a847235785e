use xxhash_rust::xxh64::{xxh64, Xxh64};

use serde::{Deserialize, Serialize};

const SEED: u64 = 0;

/// 64-bit content hash of a file. Not a security primitive: equal hashes are
/// taken as "same content" because a collision between different files is
/// astronomically unlikely
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(u64);

impl Hash {
    pub fn from_u64(value: u64) -> Hash {
        Hash(value)
    }
    pub fn as_u64(&self) -> u64 {
        let Hash(value) = self;
        *value
    }
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_u64().to_be_bytes().to_vec()
    }
    pub fn to_hex(&self, len: u8) -> String {
        let len = {
            if len > 0 && len <= 16 {
                len
            } else {
                16
            }
        };
        let output = format!("{:016x}", self.as_u64());

        output[0..len as usize].to_string()
    }
}
impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl std::fmt::Debug for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex(0))
    }
}

/// Feeds everything written to it into an xxh64 state, so that a reader can be
/// hashed with `std::io::copy` without buffering it whole
struct StreamHasher(Xxh64);
impl std::io::Write for StreamHasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let StreamHasher(state) = self;
        state.update(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Hash anything that can be converted to u8 array
pub fn hash_bytes<T: std::convert::AsRef<[u8]>>(s: T) -> Hash {
    Hash(xxh64(s.as_ref(), SEED))
}

/// Hash anything that can be streamed (usually files). Gives the same result as
/// [`hash_bytes`] on the full content, with memory bounded by the copy buffer
pub fn hash_stream<T: std::io::Read>(mut stream: T) -> std::io::Result<Hash> {
    let mut hasher = StreamHasher(Xxh64::new(SEED));
    std::io::copy(&mut stream, &mut hasher)?;
    let StreamHasher(state) = hasher;
    Ok(Hash(state.digest()))
}
