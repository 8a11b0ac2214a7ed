// This file is part of account-util.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0
// Licensed under the Apache License, Version 2.0 (the "License");
// You may not use this file except in compliance with the License.
// You may obtain a copy of the License at
// http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Hashing functions for use across account utilities.

use const_hex::ToHexExt;
#[cfg(feature = "proptest")]
use proptest_derive::Arbitrary;
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use serialize::Encodable;
use sha2::Sha256;
use sha3::{Digest, Keccak224, Keccak256, Keccak384, Keccak512};
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::io;

/// The number of bytes output by [`keccak256`].
pub const HASH_BYTES: usize = 32;

/// A wrapper around 256-bit hash outputs.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "proptest", derive(Arbitrary))]
pub struct HashOutput(pub [u8; HASH_BYTES]);

impl Debug for HashOutput {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0.encode_hex())
    }
}

impl Display for HashOutput {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", &self.0.encode_hex()[..10])
    }
}

impl AsRef<[u8]> for HashOutput {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Encodable for HashOutput {
    fn encode(&self, writer: &mut impl io::Write) -> io::Result<()> {
        self.0.encode(writer)
    }

    fn encoded_size(&self) -> usize {
        self.0.encoded_size()
    }
}

/// The digests available to callers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// Keccak with a 224-bit output.
    Keccak224,
    /// Keccak with a 256-bit output. This is the sponge hash used for
    /// addresses and record hashes.
    Keccak256,
    /// Keccak with a 384-bit output.
    Keccak384,
    /// Keccak with a 512-bit output.
    Keccak512,
    /// SHA-256.
    Sha256,
    /// RIPEMD-160, optionally left-padded with zeros to 32 bytes.
    Ripemd160 {
        /// Whether to pad the 20-byte output to 32 bytes.
        padded: bool,
    },
}

impl HashAlgorithm {
    /// The number of bytes [`digest`] returns for this algorithm.
    pub fn output_len(&self) -> usize {
        match self {
            HashAlgorithm::Keccak224 => 28,
            HashAlgorithm::Keccak256 | HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Keccak384 => 48,
            HashAlgorithm::Keccak512 => 64,
            HashAlgorithm::Ripemd160 { padded: true } => 32,
            HashAlgorithm::Ripemd160 { padded: false } => 20,
        }
    }
}

/// Hashes `bytes` with the given algorithm.
pub fn digest(bytes: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Keccak224 => Keccak224::digest(bytes).to_vec(),
        HashAlgorithm::Keccak256 => Keccak256::digest(bytes).to_vec(),
        HashAlgorithm::Keccak384 => Keccak384::digest(bytes).to_vec(),
        HashAlgorithm::Keccak512 => Keccak512::digest(bytes).to_vec(),
        HashAlgorithm::Sha256 => Sha256::digest(bytes).to_vec(),
        HashAlgorithm::Ripemd160 { padded } => {
            let hash = Ripemd160::digest(bytes);
            if padded {
                let mut res = vec![0u8; HASH_BYTES];
                res[HASH_BYTES - hash.len()..].copy_from_slice(&hash);
                res
            } else {
                hash.to_vec()
            }
        }
    }
}

/// Keccak-256 of `bytes`.
pub fn keccak256(bytes: &[u8]) -> HashOutput {
    HashOutput(Keccak256::digest(bytes).into())
}

/// Keccak of `bytes` at the given output width in bits.
pub fn keccak(bytes: &[u8], bits: u32) -> Result<Vec<u8>, UnsupportedWidth> {
    let algorithm = match bits {
        224 => HashAlgorithm::Keccak224,
        256 => HashAlgorithm::Keccak256,
        384 => HashAlgorithm::Keccak384,
        512 => HashAlgorithm::Keccak512,
        _ => return Err(UnsupportedWidth(bits)),
    };
    Ok(digest(bytes, algorithm))
}

/// SHA-256 of `bytes`.
pub fn sha256(bytes: &[u8]) -> HashOutput {
    HashOutput(Sha256::digest(bytes).into())
}

/// RIPEMD-160 of `bytes`; 32 bytes long if `padded`, 20 otherwise.
pub fn ripemd160(bytes: &[u8], padded: bool) -> Vec<u8> {
    digest(bytes, HashAlgorithm::Ripemd160 { padded })
}

/// Keccak-256 of the canonical encoding of `value`.
pub fn encoded_hash<T: Encodable + ?Sized>(value: &T) -> HashOutput {
    let mut writer = EncodedHashWriter::new();
    value
        .encode(&mut writer)
        .expect("writing to a hasher does not fail");
    writer.finalize()
}

/// A writer object for hashing large encodings without buffering them.
pub struct EncodedHashWriter(Keccak256);

impl io::Write for EncodedHashWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Default for EncodedHashWriter {
    fn default() -> Self {
        EncodedHashWriter(Keccak256::new())
    }
}

impl EncodedHashWriter {
    /// Initializes a blank hasher.
    pub fn new() -> Self {
        Default::default()
    }

    /// Finalizes the hasher, and returns the result.
    pub fn finalize(self) -> HashOutput {
        HashOutput(self.0.finalize().into())
    }
}

/// A Keccak width other than 224, 256, 384 or 512 bits was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedWidth(pub u32);

impl Display for UnsupportedWidth {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "unsupported keccak width of {} bits", self.0)
    }
}

impl Error for UnsupportedWidth {}
