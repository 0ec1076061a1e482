use data_encoding::HEXLOWER;
use ring::digest::{Algorithm, Context, SHA256, SHA384, SHA512};

use crate::error::{ChainError, Result};

/// Name of the digest used when nothing else is configured
pub const DEFAULT_HASH_ALGORITHM: &str = "sha256";

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    digest_with(&SHA256, data)
}

fn digest_with(algorithm: &'static Algorithm, data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(algorithm);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// Single and paired hashing over hex-encoded digests.
///
/// `hash_pair` does not hash a concatenation: both inputs are digested on
/// their own and the two digests are XORed byte for byte, so the combination
/// is symmetric.
#[derive(Debug, Clone, Copy)]
pub struct HashEngine {
    name: &'static str,
    algorithm: &'static Algorithm,
}

// Engines are identified by digest name; each name maps to one algorithm.
impl PartialEq for HashEngine {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for HashEngine {}

impl Default for HashEngine {
    fn default() -> Self {
        Self::sha256()
    }
}

impl HashEngine {
    pub fn sha256() -> HashEngine {
        HashEngine {
            name: DEFAULT_HASH_ALGORITHM,
            algorithm: &SHA256,
        }
    }

    /// Resolve a digest by name (`sha256`, `sha384`, `sha512`)
    pub fn from_name(name: &str) -> Result<HashEngine> {
        let (name, algorithm): (&'static str, &'static Algorithm) =
            match name.trim().to_lowercase().replace('-', "").as_str() {
                "sha256" => ("sha256", &SHA256),
                "sha384" => ("sha384", &SHA384),
                "sha512" => ("sha512", &SHA512),
                _ => return Err(ChainError::HashUnavailable(name.to_string())),
            };
        Ok(HashEngine { name, algorithm })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Hex digest of a single input
    pub fn hash(&self, input: &str) -> String {
        HEXLOWER.encode(&digest_with(self.algorithm, input.as_bytes()))
    }

    /// Hex of `digest(left) XOR digest(right)`
    pub fn hash_pair(&self, left: &str, right: &str) -> String {
        let left = digest_with(self.algorithm, left.as_bytes());
        let right = digest_with(self.algorithm, right.as_bytes());
        let combined: Vec<u8> = left.iter().zip(right.iter()).map(|(l, r)| l ^ r).collect();
        HEXLOWER.encode(&combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        let engine = HashEngine::sha256();
        assert_eq!(
            engine.hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_is_lowercase_hex() {
        let digest = HashEngine::default().hash("DUMMY");
        assert_eq!(digest.len(), 64);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_hash_pair_is_symmetric() {
        let engine = HashEngine::sha256();
        assert_eq!(engine.hash_pair("left", "right"), engine.hash_pair("right", "left"));
    }

    #[test]
    fn test_hash_pair_xors_digests() {
        let engine = HashEngine::sha256();
        let left = sha256_digest(b"left");
        let right = sha256_digest(b"right");
        let expected: Vec<u8> = left.iter().zip(&right).map(|(l, r)| l ^ r).collect();

        assert_eq!(engine.hash_pair("left", "right"), HEXLOWER.encode(&expected));
        // Not the digest of the concatenation
        assert_ne!(engine.hash_pair("left", "right"), engine.hash("leftright"));
    }

    #[test]
    fn test_hash_pair_of_equal_inputs_is_zero() {
        let engine = HashEngine::sha256();
        assert_eq!(engine.hash_pair("same", "same"), "0".repeat(64));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(HashEngine::from_name("SHA-512").unwrap().name(), "sha512");
        assert_eq!(HashEngine::from_name("sha384").unwrap().hash("x").len(), 96);
        assert_eq!(
            HashEngine::from_name("md5").unwrap_err(),
            ChainError::HashUnavailable("md5".to_string())
        );
    }
}
