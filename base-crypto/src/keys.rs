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

//! secp256k1 keypair derivation.

use k256::SecretKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The length of a private key in bytes.
pub const PRIVATE_KEY_BYTES: usize = 32;
/// The length of a raw public key in bytes: the X and Y coordinates, without
/// the SEC1 type tag.
pub const PUBLIC_KEY_BYTES: usize = 64;

/// Derives the raw uncompressed public key for a big endian-encoded private
/// key.
pub fn public_from_private(private_key: &[u8]) -> Result<[u8; PUBLIC_KEY_BYTES], KeyError> {
    if private_key.len() != PRIVATE_KEY_BYTES {
        return Err(KeyError::InvalidLength(private_key.len()));
    }
    let secret = SecretKey::from_slice(private_key).map_err(|_| KeyError::OutOfRange)?;
    let point = secret.public_key().to_encoded_point(false);
    // skip the type tag and keep the X, Y coordinates
    let mut res = [0u8; PUBLIC_KEY_BYTES];
    res.copy_from_slice(&point.as_bytes()[1..]);
    Ok(res)
}

/// An invalid private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The key was not [`PRIVATE_KEY_BYTES`] long.
    InvalidLength(usize),
    /// The key was zero, or not below the curve order.
    OutOfRange,
}

impl Display for KeyError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            KeyError::InvalidLength(len) => write!(
                formatter,
                "private key must be {PRIVATE_KEY_BYTES} bytes, got {len}"
            ),
            KeyError::OutOfRange => write!(formatter, "private key is out of range for secp256k1"),
        }
    }
}

impl Error for KeyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_for_unit_key() {
        let mut private_key = [0u8; 32];
        private_key[31] = 1;
        let public = public_from_private(&private_key).unwrap();
        assert_eq!(
            hex::encode(&public[..32]),
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(
            hex::encode(&public[32..]),
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
    }

    #[test]
    fn rejects_bad_keys() {
        assert_eq!(
            public_from_private(&[1u8; 31]),
            Err(KeyError::InvalidLength(31))
        );
        assert_eq!(public_from_private(&[0u8; 32]), Err(KeyError::OutOfRange));
        assert_eq!(public_from_private(&[0xffu8; 32]), Err(KeyError::OutOfRange));
    }
}
