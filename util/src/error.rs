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

//! Errors raised while converting values and assigning record fields.

use base_crypto::keys::KeyError;
use std::fmt::{self, Display, Formatter};
use std::io;

/// The failure modes of this crate. All of them are raised synchronously at
/// the point of violation; nothing is retried.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A value of a kind that cannot be turned into a buffer.
    InvalidType(&'static str),
    /// A precondition on a primitive conversion or a shorter-than-length
    /// field did not hold.
    Assertion(String),
    /// A fixed-width field received a value of the wrong length.
    FieldLength {
        /// The field's name in its schema.
        field: &'static str,
        /// The width the schema declares.
        expected: usize,
        /// The width of the rejected value.
        actual: usize,
    },
    /// Positional input carried more values than the record has fields.
    SchemaMismatch {
        /// The record type's name.
        record: &'static str,
        /// The number of fields the record declares.
        expected: usize,
        /// The number of values supplied.
        actual: usize,
    },
    /// A `0x`-prefixed string that is not valid hex.
    InvalidHex(const_hex::FromHexError),
    /// A buffer too wide for a machine integer.
    IntegerOverflow {
        /// Significant bytes in the buffer.
        bytes: usize,
    },
    /// A field name or index that is not part of the schema.
    UnknownField(String),
    /// Encoded record input that is not a valid canonical encoding.
    Decode(io::Error),
    /// A public key that is neither 64 raw bytes nor 65 tagged bytes.
    InvalidPublicKey(usize),
    /// An invalid private key.
    Key(KeyError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidType(kind) => write!(f, "invalid type: cannot convert {kind} to bytes"),
            Error::Assertion(msg) => write!(f, "assertion failed: {msg}"),
            Error::FieldLength {
                field,
                expected,
                actual,
            } => write!(
                f,
                "The field {field} must have byte length of {expected}, got {actual}"
            ),
            Error::SchemaMismatch {
                record,
                expected,
                actual,
            } => write!(
                f,
                "wrong number of fields in data: {record} has {expected} fields, got {actual} values"
            ),
            Error::InvalidHex(e) => write!(f, "invalid hex string: {e}"),
            Error::IntegerOverflow { bytes } => write!(
                f,
                "buffer of {bytes} significant bytes does not fit a 64-bit integer"
            ),
            Error::UnknownField(name) => write!(f, "unknown field {name}"),
            Error::Decode(e) => write!(f, "malformed encoded record: {e}"),
            Error::InvalidPublicKey(len) => write!(
                f,
                "public key must be 64 raw bytes or 65 bytes tagged 0x04, got {len} bytes"
            ),
            Error::Key(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidHex(e) => Some(e),
            Error::Decode(e) => Some(e),
            Error::Key(e) => Some(e),
            _ => None,
        }
    }
}

impl From<const_hex::FromHexError> for Error {
    fn from(err: const_hex::FromHexError) -> Error {
        Error::InvalidHex(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Decode(err)
    }
}

impl From<KeyError> for Error {
    fn from(err: KeyError) -> Error {
        Error::Key(err)
    }
}
