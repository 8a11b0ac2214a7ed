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

use crate::util::minimal_be_bytes;
use crate::{LIST_OFFSET, SHORT_PAYLOAD_LIMIT, STRING_OFFSET, VecExt};
use std::io::Write;

/// Writes `value` in the canonical encoding into a fresh buffer.
pub fn encode<T: Encodable + ?Sized>(value: &T) -> Vec<u8> {
    let mut res = Vec::with_bounded_capacity(value.encoded_size());
    value
        .encode(&mut res)
        .expect("writing to a Vec does not fail");
    res
}

/// Canonical recursive length-prefixed encoding.
///
/// See [`crate::Decodable`] for the decoding counterpart.
pub trait Encodable {
    fn encode(&self, writer: &mut impl Write) -> std::io::Result<()>;
    fn encoded_size(&self) -> usize;
}

pub(crate) fn header_size(payload_len: usize) -> usize {
    if payload_len <= SHORT_PAYLOAD_LIMIT {
        1
    } else {
        1 + minimal_be_bytes(payload_len as u64).len()
    }
}

pub(crate) fn write_header(
    writer: &mut impl Write,
    offset: u8,
    payload_len: usize,
) -> std::io::Result<()> {
    if payload_len <= SHORT_PAYLOAD_LIMIT {
        writer.write_all(&[offset + payload_len as u8])
    } else {
        let len_bytes = minimal_be_bytes(payload_len as u64);
        writer.write_all(&[offset + SHORT_PAYLOAD_LIMIT as u8 + len_bytes.len() as u8])?;
        writer.write_all(&len_bytes)
    }
}

fn is_single_byte(bytes: &[u8]) -> bool {
    bytes.len() == 1 && bytes[0] < STRING_OFFSET
}

impl Encodable for [u8] {
    fn encode(&self, writer: &mut impl Write) -> std::io::Result<()> {
        if !is_single_byte(self) {
            write_header(writer, STRING_OFFSET, self.len())?;
        }
        writer.write_all(self)
    }

    fn encoded_size(&self) -> usize {
        if is_single_byte(self) {
            1
        } else {
            header_size(self.len()) + self.len()
        }
    }
}

impl Encodable for Vec<u8> {
    fn encode(&self, writer: &mut impl Write) -> std::io::Result<()> {
        <[u8]>::encode(self, writer)
    }

    fn encoded_size(&self) -> usize {
        <[u8]>::encoded_size(self)
    }
}

impl<const N: usize> Encodable for [u8; N] {
    fn encode(&self, writer: &mut impl Write) -> std::io::Result<()> {
        <[u8]>::encode(&self[..], writer)
    }

    fn encoded_size(&self) -> usize {
        <[u8]>::encoded_size(&self[..])
    }
}

impl Encodable for str {
    fn encode(&self, writer: &mut impl Write) -> std::io::Result<()> {
        self.as_bytes().encode(writer)
    }

    fn encoded_size(&self) -> usize {
        self.as_bytes().encoded_size()
    }
}

/// Integers are written as their minimal big-endian byte string.
impl Encodable for u64 {
    fn encode(&self, writer: &mut impl Write) -> std::io::Result<()> {
        minimal_be_bytes(*self).encode(writer)
    }

    fn encoded_size(&self) -> usize {
        minimal_be_bytes(*self).encoded_size()
    }
}

impl<T: Encodable + ?Sized> Encodable for &T {
    fn encode(&self, writer: &mut impl Write) -> std::io::Result<()> {
        T::encode(self, writer)
    }

    fn encoded_size(&self) -> usize {
        T::encoded_size(self)
    }
}

/// `None` is written as the empty byte string.
impl<T: Encodable> Encodable for Option<T> {
    fn encode(&self, writer: &mut impl Write) -> std::io::Result<()> {
        match self {
            Some(v) => v.encode(writer),
            None => writer.write_all(&[STRING_OFFSET]),
        }
    }

    fn encoded_size(&self) -> usize {
        match self {
            Some(v) => v.encoded_size(),
            None => 1,
        }
    }
}

macro_rules! tuple_encodable {
    ($(($ty:ident, $idx:tt)),+) => {
        impl<$($ty: Encodable),+> Encodable for ($($ty,)+) {
            fn encode(&self, writer: &mut impl Write) -> std::io::Result<()> {
                let payload = 0 $(+ self.$idx.encoded_size())+;
                write_header(writer, LIST_OFFSET, payload)?;
                $(self.$idx.encode(writer)?;)+
                Ok(())
            }

            fn encoded_size(&self) -> usize {
                let payload = 0 $(+ self.$idx.encoded_size())+;
                header_size(payload) + payload
            }
        }
    };
}

tuple_encodable!((A, 0));
tuple_encodable!((A, 0), (B, 1));
tuple_encodable!((A, 0), (B, 1), (C, 2));
tuple_encodable!((A, 0), (B, 1), (C, 2), (D, 3));
tuple_encodable!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4));
tuple_encodable!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_low_byte_is_its_own_encoding() {
        assert_eq!(encode(&[0x7fu8][..]), vec![0x7f]);
        assert_eq!(encode(&[0x80u8][..]), vec![0x81, 0x80]);
        assert_eq!(encode(&[0u8][..]), vec![0x00]);
    }

    #[test]
    fn long_strings_use_length_of_length() {
        let payload = vec![0xaau8; 56];
        let encoded = encode(&payload);
        assert_eq!(&encoded[..2], &[0xb8, 56]);
        assert_eq!(encoded.len(), 58);
        assert_eq!(payload.encoded_size(), 58);
    }

    #[test]
    fn integers_are_minimal() {
        assert_eq!(encode(&0u64), vec![0x80]);
        assert_eq!(encode(&15u64), vec![0x0f]);
        assert_eq!(encode(&1024u64), vec![0x82, 0x04, 0x00]);
    }

    #[test]
    fn tuples_are_lists() {
        assert_eq!(encode(&("cat", "dog")), b"\xc8\x83cat\x83dog".to_vec());
        assert_eq!(encode(&(None::<u64>,)), vec![0xc1, 0x80]);
    }
}
