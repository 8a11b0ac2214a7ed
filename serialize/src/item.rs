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

use crate::encodable::{header_size, write_header};
use crate::{Encodable, LIST_OFFSET};
use const_hex::ToHexExt;
#[cfg(feature = "proptest")]
use proptest::prelude::*;
use std::fmt::{self, Debug, Display, Formatter};
use std::io::Write;

/// A node of the canonical encoding: a byte string, or a list of nodes.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Item {
    Bytes(Vec<u8>),
    List(Vec<Item>),
}

impl Default for Item {
    fn default() -> Self {
        Item::Bytes(Vec::new())
    }
}

impl Item {
    /// The bytes of a leaf, or `None` for a list.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Item::Bytes(bytes) => Some(bytes),
            Item::List(_) => None,
        }
    }

    /// The children of a list, or `None` for a leaf.
    pub fn as_list(&self) -> Option<&[Item]> {
        match self {
            Item::Bytes(_) => None,
            Item::List(items) => Some(items),
        }
    }

    /// The children of a list, or the leaf itself back.
    pub fn into_list(self) -> Result<Vec<Item>, Item> {
        match self {
            Item::List(items) => Ok(items),
            other => Err(other),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Item::List(_))
    }

    /// Projects the tree into JSON: leaves become unprefixed lowercase hex
    /// strings, lists become arrays.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Item::Bytes(bytes) => serde_json::Value::String(bytes.encode_hex()),
            Item::List(items) => {
                serde_json::Value::Array(items.iter().map(Item::to_json).collect())
            }
        }
    }

    fn payload_size(items: &[Item]) -> usize {
        items.iter().map(Encodable::encoded_size).sum()
    }
}

impl From<Vec<u8>> for Item {
    fn from(bytes: Vec<u8>) -> Item {
        Item::Bytes(bytes)
    }
}

impl From<&[u8]> for Item {
    fn from(bytes: &[u8]) -> Item {
        Item::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Item {
    fn from(bytes: [u8; N]) -> Item {
        Item::Bytes(bytes.to_vec())
    }
}

impl From<Vec<Item>> for Item {
    fn from(items: Vec<Item>) -> Item {
        Item::List(items)
    }
}

impl Encodable for Item {
    fn encode(&self, writer: &mut impl Write) -> std::io::Result<()> {
        match self {
            Item::Bytes(bytes) => bytes.encode(writer),
            Item::List(items) => {
                write_header(writer, LIST_OFFSET, Item::payload_size(items))?;
                for item in items {
                    item.encode(writer)?;
                }
                Ok(())
            }
        }
    }

    fn encoded_size(&self) -> usize {
        match self {
            Item::Bytes(bytes) => bytes.encoded_size(),
            Item::List(items) => {
                let payload = Item::payload_size(items);
                header_size(payload) + payload
            }
        }
    }
}

impl Debug for Item {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        Display::fmt(self, formatter)
    }
}

impl Display for Item {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Item::Bytes(bytes) => write!(formatter, "0x{}", bytes.encode_hex()),
            Item::List(items) => {
                // avoiding debug_list to get onto one line in alt-mode debug prints
                write!(formatter, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
        }
    }
}

/// A strategy for small trees of at most four levels.
#[cfg(feature = "proptest")]
pub fn arbitrary_item() -> impl Strategy<Value = Item> {
    let leaf = proptest::collection::vec(any::<u8>(), 0..80).prop_map(Item::Bytes);
    leaf.prop_recursive(4, 64, 8, |inner| {
        proptest::collection::vec(inner, 0..8).prop_map(Item::List)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_projection() {
        let item = Item::List(vec![
            Item::Bytes(vec![0xde, 0xad]),
            Item::List(vec![Item::Bytes(vec![])]),
        ]);
        assert_eq!(item.to_json(), json!(["dead", [""]]));
    }

    #[test]
    fn accessors() {
        let leaf = Item::from(vec![1u8, 2]);
        assert_eq!(leaf.as_bytes(), Some(&[1u8, 2][..]));
        assert!(!leaf.is_list());
        assert_eq!(leaf.as_list(), None);

        let list = Item::List(vec![leaf.clone()]);
        assert!(list.is_list());
        assert_eq!(list.as_bytes(), None);
        assert_eq!(list.into_list(), Ok(vec![leaf.clone()]));
        assert_eq!(leaf.clone().into_list(), Err(leaf));
    }

    #[test]
    fn display() {
        let item = Item::List(vec![Item::Bytes(vec![1]), Item::Bytes(vec![])]);
        assert_eq!(item.to_string(), "[0x01, 0x]");
    }
}
