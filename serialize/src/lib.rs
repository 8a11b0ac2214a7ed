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

//! The canonical recursive byte-array encoding used to hash and transmit
//! ledger records. Values are trees of byte strings ([`Item`]) written with
//! recursive length prefixes.

mod decodable;
mod encodable;
mod item;
mod util;

pub use crate::decodable::{Decodable, RECURSION_LIMIT, decode};
pub use crate::encodable::{Encodable, encode};
pub use crate::item::Item;
#[cfg(feature = "proptest")]
pub use crate::item::arbitrary_item;
pub use crate::util::{ReadExt, VecExt};

/// Offset of the prefix byte for byte strings.
pub const STRING_OFFSET: u8 = 0x80;
/// Offset of the prefix byte for lists.
pub const LIST_OFFSET: u8 = 0xc0;
/// The longest payload that fits a single-byte prefix.
pub const SHORT_PAYLOAD_LIMIT: usize = 55;
