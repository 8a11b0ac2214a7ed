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

//! Well-known constants.

use base_crypto::HashOutput;
use lazy_static::lazy_static;
use num_bigint::BigUint;

/// Keccak-256 of the empty string, as hex.
pub const SHA3_NULL_S: &str = "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";

/// Keccak-256 of the canonical encoding of the empty list, as hex.
pub const SHA3_RLP_ARRAY_S: &str =
    "1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347";

/// Keccak-256 of the canonical encoding of the empty string, as hex.
pub const SHA3_RLP_S: &str = "56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421";

fn hash_constant(s: &str) -> HashOutput {
    HashOutput(const_hex::decode_to_array(s).expect("hash constants are valid hex"))
}

lazy_static! {
    /// The largest 256-bit unsigned integer.
    pub static ref MAX_INTEGER: BigUint = (BigUint::from(1u8) << 256) - 1u8;
    /// `2^256`.
    pub static ref TWO_POW256: BigUint = BigUint::from(1u8) << 256;
    /// Keccak-256 of the empty string.
    pub static ref SHA3_NULL: HashOutput = hash_constant(SHA3_NULL_S);
    /// Keccak-256 of the canonical encoding of the empty list.
    pub static ref SHA3_RLP_ARRAY: HashOutput = hash_constant(SHA3_RLP_ARRAY_S);
    /// Keccak-256 of the canonical encoding of the empty string.
    pub static ref SHA3_RLP: HashOutput = hash_constant(SHA3_RLP_S);
}

#[cfg(test)]
mod tests {
    use super::*;
    use base_crypto::hash::{encoded_hash, keccak256};
    use serialize::Item;

    #[test]
    fn hashes_of_empty_values() {
        assert_eq!(keccak256(&[]), *SHA3_NULL);
        assert_eq!(encoded_hash(&Item::List(vec![])), *SHA3_RLP_ARRAY);
        assert_eq!(encoded_hash(&Item::Bytes(vec![])), *SHA3_RLP);
    }

    #[test]
    fn word_bounds() {
        assert_eq!(&*MAX_INTEGER + 1u8, *TWO_POW256);
        assert_eq!(MAX_INTEGER.to_bytes_be(), vec![0xff; 32]);
    }
}
