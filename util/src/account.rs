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

//! Account addresses.
//!
//! An address is the last 20 bytes of a Keccak-256 digest: of the raw public
//! key for externally owned accounts, and of the encoded
//! `[sender, nonce]` pair for contracts.

use crate::bytes::strip_zeros;
use crate::error::Error;
use crate::input::{Input, to_buffer};
use base_crypto::HashOutput;
use base_crypto::hash::{encoded_hash, keccak256};
use base_crypto::keys::{PUBLIC_KEY_BYTES, public_from_private};
use const_hex::ToHexExt;
use serde::{Deserialize, Serialize};
use serialize::Encodable;
use std::fmt::{self, Debug, Display, Formatter};
use std::io;

/// The number of bytes in an address.
pub const ADDRESS_BYTES: usize = 20;

/// SEC1 tag of an uncompressed public key.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Precompiled accounts occupy the addresses strictly between these.
const PRECOMPILED_RANGE: (u8, u8) = (0, 5);

/// A 20-byte account address.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub [u8; ADDRESS_BYTES]);

impl Address {
    fn from_hash(hash: HashOutput) -> Address {
        let mut res = [0u8; ADDRESS_BYTES];
        res.copy_from_slice(&hash.0[hash.0.len() - ADDRESS_BYTES..]);
        Address(res)
    }
}

impl Debug for Address {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "0x{}", self.0.encode_hex())
    }
}

impl Display for Address {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        Debug::fmt(self, formatter)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Address> for Input {
    fn from(address: Address) -> Input {
        Input::Bytes(address.0.to_vec())
    }
}

impl Encodable for Address {
    fn encode(&self, writer: &mut impl io::Write) -> io::Result<()> {
        self.0.encode(writer)
    }

    fn encoded_size(&self) -> usize {
        self.0.encoded_size()
    }
}

/// The address of a public key, given as 64 raw coordinate bytes or as 65
/// bytes tagged `0x04`.
pub fn public_to_address(public_key: &[u8]) -> Result<Address, Error> {
    let raw = match public_key.len() {
        PUBLIC_KEY_BYTES => public_key,
        len if len == PUBLIC_KEY_BYTES + 1 && public_key[0] == UNCOMPRESSED_TAG => {
            &public_key[1..]
        }
        len => return Err(Error::InvalidPublicKey(len)),
    };
    Ok(Address::from_hash(keccak256(raw)))
}

/// The raw public key of a 32-byte private key.
pub fn private_to_public(private_key: &[u8]) -> Result<[u8; PUBLIC_KEY_BYTES], Error> {
    Ok(public_from_private(private_key)?)
}

/// The address of a 32-byte private key.
pub fn private_to_address(private_key: &[u8]) -> Result<Address, Error> {
    public_to_address(&private_to_public(private_key)?)
}

/// The address of a contract created by `from` at `nonce`.
///
/// The nonce is normalized to its minimal big-endian bytes, so every
/// spelling of zero (`0`, `"0x00"`, `[0]`, empty) encodes as the empty
/// string.
pub fn generate_address(
    from: impl Into<Input>,
    nonce: impl Into<Input>,
) -> Result<Address, Error> {
    let from = to_buffer(from)?;
    let nonce = to_buffer(nonce)?;
    Ok(Address::from_hash(encoded_hash(&(
        &from[..],
        strip_zeros(&nonce),
    ))))
}

/// Whether `address` belongs to a precompiled account: after normalizing
/// through [`to_buffer`] and stripping leading zeros it is a single byte in
/// `1..=4`. Input that does not normalize, such as malformed hex, is not
/// precompiled.
pub fn is_precompiled(address: impl Into<Input>) -> bool {
    match to_buffer(address) {
        Ok(bytes) => matches!(
            strip_zeros(&bytes),
            [a] if *a > PRECOMPILED_RANGE.0 && *a < PRECOMPILED_RANGE.1
        ),
        Err(_) => false,
    }
}
