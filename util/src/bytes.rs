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

//! Zero-filling, padding and trimming of byte buffers.
//!
//! These operate on already-normalized bytes; run other input forms through
//! [`crate::to_buffer`] first.

use crate::prefix::strip_hex_prefix;

/// A buffer of `n` zero bytes.
pub fn zeros(n: usize) -> Vec<u8> {
    vec![0u8; n]
}

/// Left-pads `msg` with zeros to `length` bytes.
///
/// Longer input is truncated to its last `length` bytes, which keeps the
/// least significant bytes of a big-endian integer.
pub fn pad(msg: &[u8], length: usize) -> Vec<u8> {
    if msg.len() < length {
        let mut buf = zeros(length);
        buf[length - msg.len()..].copy_from_slice(msg);
        buf
    } else {
        msg[msg.len() - length..].to_vec()
    }
}

/// Right-pads `msg` with zeros to `length` bytes.
///
/// Longer input is truncated to its last `length` bytes, the same as
/// [`pad`].
pub fn rpad(msg: &[u8], length: usize) -> Vec<u8> {
    if msg.len() < length {
        let mut buf = zeros(length);
        buf[..msg.len()].copy_from_slice(msg);
        buf
    } else {
        msg[msg.len() - length..].to_vec()
    }
}

/// Drops leading zero bytes. An all-zero buffer strips to the empty buffer.
pub fn strip_zeros(a: &[u8]) -> &[u8] {
    let skip = a.iter().take_while(|b| **b == 0).count();
    &a[skip..]
}

/// Drops a `0x` prefix, then leading `'0'` characters.
pub fn strip_hex_zeros(s: &str) -> &str {
    strip_hex_prefix(s).trim_start_matches('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_left() {
        assert_eq!(pad(&[1, 2], 4), vec![0, 0, 1, 2]);
        assert_eq!(pad(&[1, 2, 3, 4, 5], 4), vec![2, 3, 4, 5]);
        assert_eq!(pad(&[], 3), vec![0, 0, 0]);
        assert_eq!(pad(&[9], 0), Vec::<u8>::new());
    }

    #[test]
    fn pad_right_truncates_like_pad() {
        assert_eq!(rpad(&[1, 2], 4), vec![1, 2, 0, 0]);
        assert_eq!(rpad(&[1, 2, 3, 4, 5], 4), vec![2, 3, 4, 5]);
    }

    #[test]
    fn strip() {
        assert_eq!(strip_zeros(&[0, 0, 1, 0]), &[1, 0]);
        assert_eq!(strip_zeros(&[0, 0, 0]), &[] as &[u8]);
        assert_eq!(strip_zeros(&[5, 0]), &[5, 0]);
        assert_eq!(strip_hex_zeros("0x000a0"), "a0");
        assert_eq!(strip_hex_zeros("0000"), "");
        assert_eq!(strip_hex_zeros("1000"), "1000");
    }
}
