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

use crate::util::ReadExt;
use crate::{Item, LIST_OFFSET, SHORT_PAYLOAD_LIMIT, STRING_OFFSET};
use std::io::{Error, ErrorKind, Read};

#[cfg(debug_assertions)]
pub const RECURSION_LIMIT: u32 = 50;
#[cfg(not(debug_assertions))]
pub const RECURSION_LIMIT: u32 = 250;

// Top-level decoding function
pub fn decode<T: Decodable>(mut bytes: &[u8]) -> std::io::Result<T> {
    let value = T::decode(&mut bytes, 0)?;
    if bytes.is_empty() {
        return Ok(value);
    }
    Err(Error::new(
        ErrorKind::InvalidData,
        format!(
            "Not all bytes read decoding canonical encoding; {} bytes remaining",
            bytes.len()
        ),
    ))
}

pub trait Decodable
where
    Self: Sized,
{
    const LIMIT_RECURSION: bool = true;

    fn decode(reader: &mut impl Read, recursion_depth: u32) -> std::io::Result<Self>;

    fn check_rec(depth: &mut u32) -> std::io::Result<()> {
        if Self::LIMIT_RECURSION {
            *depth += 1;
            if *depth > RECURSION_LIMIT {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    "exceeded recursion depth decoding",
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Header {
    /// A single byte below the string offset, which is its own encoding.
    Byte(u8),
    Bytes(usize),
    List(usize),
}

fn non_canonical(msg: &str) -> Error {
    Error::new(
        ErrorKind::InvalidData,
        format!("non-canonical encoding: {msg}"),
    )
}

fn read_long_length(reader: &mut impl Read, len_of_len: u8) -> std::io::Result<usize> {
    let len_of_len = len_of_len as usize;
    if len_of_len > std::mem::size_of::<usize>() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("length prefix of {len_of_len} bytes is out of range"),
        ));
    }
    let bytes = reader.read_exact_to_vec(len_of_len)?;
    if bytes[0] == 0 {
        return Err(non_canonical("leading zero in length prefix"));
    }
    let len = bytes
        .iter()
        .fold(0usize, |acc, b| (acc << 8) | *b as usize);
    if len <= SHORT_PAYLOAD_LIMIT {
        return Err(non_canonical("long length prefix for a short payload"));
    }
    Ok(len)
}

pub(crate) fn read_header(reader: &mut impl Read) -> std::io::Result<Header> {
    const LONG_STRING: u8 = STRING_OFFSET + SHORT_PAYLOAD_LIMIT as u8;
    const LONG_LIST: u8 = LIST_OFFSET + SHORT_PAYLOAD_LIMIT as u8;
    let prefix = reader.read_u8()?;
    match prefix {
        0x00..STRING_OFFSET => Ok(Header::Byte(prefix)),
        STRING_OFFSET..=LONG_STRING => Ok(Header::Bytes((prefix - STRING_OFFSET) as usize)),
        0xb8..LIST_OFFSET => Ok(Header::Bytes(read_long_length(
            reader,
            prefix - LONG_STRING,
        )?)),
        LIST_OFFSET..=LONG_LIST => Ok(Header::List((prefix - LIST_OFFSET) as usize)),
        0xf8..=0xff => Ok(Header::List(read_long_length(reader, prefix - LONG_LIST)?)),
    }
}

fn read_string(reader: &mut impl Read, len: usize) -> std::io::Result<Vec<u8>> {
    let bytes = reader.read_exact_to_vec(len)?;
    if len == 1 && bytes[0] < STRING_OFFSET {
        return Err(non_canonical("single byte below 0x80 with a length prefix"));
    }
    Ok(bytes)
}

impl Decodable for Item {
    fn decode(reader: &mut impl Read, mut recursion_depth: u32) -> std::io::Result<Self> {
        Self::check_rec(&mut recursion_depth)?;
        match read_header(reader)? {
            Header::Byte(b) => Ok(Item::Bytes(vec![b])),
            Header::Bytes(len) => Ok(Item::Bytes(read_string(reader, len)?)),
            Header::List(len) => {
                let payload = reader.read_exact_to_vec(len)?;
                let mut rest = &payload[..];
                let mut items = Vec::new();
                while !rest.is_empty() {
                    items.push(Item::decode(&mut rest, recursion_depth)?);
                }
                Ok(Item::List(items))
            }
        }
    }
}

impl Decodable for Vec<u8> {
    fn decode(reader: &mut impl Read, _recursion_depth: u32) -> std::io::Result<Self> {
        match read_header(reader)? {
            Header::Byte(b) => Ok(vec![b]),
            Header::Bytes(len) => read_string(reader, len),
            Header::List(_) => Err(Error::new(
                ErrorKind::InvalidData,
                "expected a byte string, found a list",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers() {
        assert_eq!(read_header(&mut &[0x05u8][..]).unwrap(), Header::Byte(5));
        assert_eq!(read_header(&mut &[0x83u8][..]).unwrap(), Header::Bytes(3));
        assert_eq!(read_header(&mut &[0xb8u8, 56][..]).unwrap(), Header::Bytes(56));
        assert_eq!(read_header(&mut &[0xc0u8][..]).unwrap(), Header::List(0));
        assert_eq!(
            read_header(&mut &[0xf9u8, 0x01, 0x00][..]).unwrap(),
            Header::List(256)
        );
    }

    #[test]
    fn rejects_non_canonical_lengths() {
        let err = read_header(&mut &[0xb8u8, 10][..]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        let err = read_header(&mut &[0xb9u8, 0x00, 0x40][..]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn truncated_input_is_eof() {
        let err = decode::<Item>(&[0x83, b'd', b'o']).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn recursion_is_bounded() {
        let nest = |depth: u32| {
            let mut item = Item::List(vec![]);
            for _ in 1..depth {
                item = Item::List(vec![item]);
            }
            crate::encode(&item)
        };
        assert!(decode::<Item>(&nest(RECURSION_LIMIT)).is_ok());
        let err = decode::<Item>(&nest(RECURSION_LIMIT + 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
