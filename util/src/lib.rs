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

#![deny(unreachable_pub)]
#![deny(warnings)]
#![deny(missing_docs)]

//! The binary data model of an account-based ledger client.
//!
//! Values cross this crate as byte buffers. [`integer`] converts between
//! machine integers, big integers and buffers (including 256-bit two's
//! complement), [`bytes`] pads and trims buffers, and [`record`] binds an
//! ordered list of width-constrained fields to a record type, so that
//! transactions and headers can be validated, encoded and hashed uniformly.

#[macro_use]
extern crate tracing;

pub mod account;
pub mod bytes;
pub mod constants;
pub mod error;
pub mod input;
pub mod integer;
pub mod prefix;
pub mod record;
#[path = "tracing.rs"]
mod util_tracing;

pub use account::{
    Address, generate_address, is_precompiled, private_to_address, private_to_public,
    public_to_address,
};
pub use bytes::{pad, rpad, strip_hex_zeros, strip_zeros, zeros};
pub use error::Error;
pub use input::{Input, to_buffer};
#[cfg(feature = "proptest")]
pub use input::arbitrary_input;
pub use integer::{buffer_to_int, from_signed, int_to_buffer, int_to_hex, to_unsigned};
pub use prefix::{add_hex_prefix, is_hex_prefixed, pad_to_even, strip_hex_prefix};
pub use record::{FieldSpec, Record, RecordInput, Schema};
pub use util_tracing::{LogLevel, UnknownLogLevel, init_logger};

pub use base_crypto::hash::{
    HashAlgorithm, HashOutput, digest, encoded_hash, keccak, keccak256, ripemd160, sha256,
};
pub use serialize::{Item, decode, encode};

#[doc(hidden)]
pub mod __private {
    pub use pastey;
    pub use serde_json;
    pub use serialize;
}
