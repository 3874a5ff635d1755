//! Reference [`Algorithm`] instances backed by `ring` and `rust-crypto`.
//!
//! None of them add a domain-separation prefix: a leaf is `H(content)` and an
//! interior node is `H(left || right)`. `Md5` is provided as a weak-hash
//! example only.

#[cfg(any(feature = "ring", feature = "rust-crypto"))]
use crate::hash::Algorithm;
#[cfg(any(feature = "ring", feature = "rust-crypto"))]
use std::fmt;
#[cfg(any(feature = "ring", feature = "rust-crypto"))]
use std::hash::Hasher;

/// First eight digest bytes as `u64`, for `Hasher::finish`.
#[cfg(any(feature = "ring", feature = "rust-crypto"))]
fn prefix_u64(digest: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    let n = digest.len().min(8);
    buf[..n].copy_from_slice(&digest[..n]);
    u64::from_be_bytes(buf)
}

#[cfg(feature = "ring")]
macro_rules! impl_ring {
    ($(#[$doc:meta])* $name:ident, $alg:ident, $len:expr) => {
        $(#[$doc])*
        #[derive(Clone)]
        pub struct $name(ring::digest::Context);

        impl $name {
            /// Creates a fresh hasher.
            pub fn new() -> $name {
                $name(ring::digest::Context::new(&ring::digest::$alg))
            }
        }

        impl Default for $name {
            fn default() -> $name {
                $name::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl Hasher for $name {
            #[inline]
            fn write(&mut self, msg: &[u8]) {
                self.0.update(msg)
            }

            fn finish(&self) -> u64 {
                prefix_u64(self.0.clone().finish().as_ref())
            }
        }

        impl Algorithm<[u8; $len]> for $name {
            /// ring.Context is not reusable after finalization, the state is
            /// cloned so the hasher stays writable until the next reset.
            #[inline]
            fn hash(&mut self) -> [u8; $len] {
                let mut h = [0u8; $len];
                h.copy_from_slice(self.0.clone().finish().as_ref());
                h
            }

            #[inline]
            fn reset(&mut self) {
                self.0 = ring::digest::Context::new(&ring::digest::$alg);
            }
        }
    };
}

#[cfg(feature = "ring")]
impl_ring!(
    /// SHA-256 via `ring`, 32 byte digests.
    Sha256, SHA256, 32
);

#[cfg(feature = "ring")]
impl_ring!(
    /// SHA-512 via `ring`, 64 byte digests.
    Sha512, SHA512, 64
);

#[cfg(feature = "rust-crypto")]
macro_rules! impl_crypto {
    ($(#[$doc:meta])* $name:ident, $inner:ty, $ctor:expr, $len:expr) => {
        $(#[$doc])*
        #[derive(Clone)]
        pub struct $name($inner);

        impl $name {
            /// Creates a fresh hasher.
            pub fn new() -> $name {
                $name($ctor)
            }
        }

        impl Default for $name {
            fn default() -> $name {
                $name::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl Hasher for $name {
            #[inline]
            fn write(&mut self, msg: &[u8]) {
                crypto::digest::Digest::input(&mut self.0, msg)
            }

            fn finish(&self) -> u64 {
                let mut c = self.0.clone();
                let mut h = [0u8; $len];
                crypto::digest::Digest::result(&mut c, &mut h);
                prefix_u64(&h)
            }
        }

        impl Algorithm<[u8; $len]> for $name {
            #[inline]
            fn hash(&mut self) -> [u8; $len] {
                // finalize a copy, result() poisons the running state
                let mut c = self.0.clone();
                let mut h = [0u8; $len];
                crypto::digest::Digest::result(&mut c, &mut h);
                h
            }

            #[inline]
            fn reset(&mut self) {
                crypto::digest::Digest::reset(&mut self.0);
            }
        }
    };
}

#[cfg(feature = "rust-crypto")]
impl_crypto!(
    /// Unkeyed BLAKE2b with a 32 byte output via `rust-crypto`.
    Blake2b256, crypto::blake2b::Blake2b, crypto::blake2b::Blake2b::new(32), 32
);

#[cfg(feature = "rust-crypto")]
impl_crypto!(
    /// Unkeyed BLAKE2b with a 64 byte output via `rust-crypto`.
    Blake2b512, crypto::blake2b::Blake2b, crypto::blake2b::Blake2b::new(64), 64
);

#[cfg(feature = "rust-crypto")]
impl_crypto!(
    /// MD5 via `rust-crypto`. Weak, kept for compatibility tests only.
    Md5, crypto::md5::Md5, crypto::md5::Md5::new(), 16
);
