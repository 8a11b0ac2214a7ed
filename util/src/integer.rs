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

//! Conversions between machine integers, big integers and byte buffers.

use crate::bytes::strip_zeros;
use crate::constants::TWO_POW256;
use crate::error::Error;
use crate::prefix::pad_to_even;
use num_bigint::{BigInt, BigUint, Sign};

/// The width in bytes at which [`from_signed`] applies two's complement.
pub const SIGNED_WORD_BYTES: usize = 32;

/// The minimal even-length hex encoding of a non-negative integer, without
/// a prefix. Zero is `"00"`.
pub fn int_to_hex(i: i128) -> Result<String, Error> {
    if i < 0 {
        return Err(Error::Assertion(format!("number must be positive, got {i}")));
    }
    Ok(pad_to_even(&format!("{i:x}")).into_owned())
}

/// The minimal big-endian bytes of a non-negative integer. Zero is the single
/// byte `00`.
pub fn int_to_buffer(i: i128) -> Result<Vec<u8>, Error> {
    Ok(const_hex::decode(int_to_hex(i)?)?)
}

/// Reads a big-endian unsigned integer.
///
/// The empty buffer is zero. Leading zero bytes are ignored; more than eight
/// significant bytes fail with [`Error::IntegerOverflow`] instead of losing
/// precision. Use [`from_signed`] or [`BigUint`] for full-width words.
pub fn buffer_to_int(buf: &[u8]) -> Result<u64, Error> {
    let significant = strip_zeros(buf);
    if significant.len() > std::mem::size_of::<u64>() {
        return Err(Error::IntegerOverflow {
            bytes: significant.len(),
        });
    }
    Ok(significant
        .iter()
        .fold(0u64, |acc, b| (acc << 8) | *b as u64))
}

/// Interprets a buffer as a signed integer.
///
/// Two's complement applies only to buffers of exactly 32 bytes whose top
/// bit is set. Every other buffer, of any length, is an unsigned magnitude.
pub fn from_signed(num: &[u8]) -> BigInt {
    if num.len() == SIGNED_WORD_BYTES && num[0] >= 0x80 {
        let inverted = num.iter().map(|b| !b).collect::<Vec<u8>>();
        let magnitude = BigUint::from_bytes_be(&inverted) + 1u8;
        return BigInt::from_biguint(Sign::Minus, magnitude);
    }
    BigInt::from_bytes_be(Sign::Plus, num)
}

/// Encodes a big integer as an unsigned buffer.
///
/// Negative values become their 256-bit two's complement, `2^256 - |num|`;
/// magnitudes wider than 256 bits are reduced modulo `2^256` first. The
/// result is minimal: no padding is applied, so callers that need a full
/// word pad it with [`crate::pad`]. Zero is the single byte `00`.
pub fn to_unsigned(num: &BigInt) -> Vec<u8> {
    match num.sign() {
        Sign::Minus => {
            let modulus: &BigUint = &TWO_POW256;
            let reduced = num.magnitude() % modulus;
            ((modulus - reduced) % modulus).to_bytes_be()
        }
        Sign::NoSign | Sign::Plus => num.magnitude().to_bytes_be(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_even_and_minimal() {
        assert_eq!(int_to_hex(0).unwrap(), "00");
        assert_eq!(int_to_hex(15).unwrap(), "0f");
        assert_eq!(int_to_hex(256).unwrap(), "0100");
        assert!(matches!(int_to_hex(-1), Err(Error::Assertion(_))));
    }

    #[test]
    fn buffers_to_ints() {
        assert_eq!(buffer_to_int(&[]).unwrap(), 0);
        assert_eq!(buffer_to_int(&[0x01, 0x00]).unwrap(), 256);
        assert_eq!(buffer_to_int(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0x2a]).unwrap(), 42);
        assert_eq!(buffer_to_int(&[0xff; 8]).unwrap(), u64::MAX);
        assert!(matches!(
            buffer_to_int(&[1; 9]),
            Err(Error::IntegerOverflow { bytes: 9 })
        ));
    }

    #[test]
    fn signed_word() {
        assert_eq!(from_signed(&[0xff; 32]), BigInt::from(-1));
        let mut min = [0u8; 32];
        min[0] = 0x80;
        assert_eq!(from_signed(&min), -(BigInt::from(1) << 255usize));
    }

    #[test]
    fn two_complement_only_at_word_width() {
        assert_eq!(from_signed(&[0xff; 31]), BigInt::from_bytes_be(Sign::Plus, &[0xff; 31]));
        assert_eq!(from_signed(&[0xff]), BigInt::from(255));
        let mut positive = [0u8; 32];
        positive[0] = 0x7f;
        assert_eq!(from_signed(&positive), BigInt::from(0x7f) << 248);
    }

    #[test]
    fn unsigned_encoding() {
        assert_eq!(to_unsigned(&BigInt::from(0)), vec![0]);
        assert_eq!(to_unsigned(&BigInt::from(0x0102)), vec![1, 2]);
        assert_eq!(to_unsigned(&BigInt::from(-1)), vec![0xff; 32]);
        let mut expected = vec![0xff; 32];
        expected[31] = 0xfe;
        assert_eq!(to_unsigned(&BigInt::from(-2)), expected);
    }
}
