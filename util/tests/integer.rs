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


use account_util::constants::{SHA3_NULL, SHA3_RLP};
use account_util::*;
use num_bigint::BigInt;
use proptest::prelude::*;

#[test]
fn buffer_conversions() {
    assert_eq!(to_buffer(0u64).unwrap(), vec![0]);
    assert_eq!(to_buffer(0x1234u64).unwrap(), vec![0x12, 0x34]);
    assert_eq!(to_buffer("0x1").unwrap(), vec![0x01]);
    assert_eq!(to_buffer("0x").unwrap(), Vec::<u8>::new());
    assert_eq!(to_buffer("abc").unwrap(), b"abc".to_vec());
    assert_eq!(to_buffer(()).unwrap(), Vec::<u8>::new());
    assert_eq!(to_buffer(None::<u64>).unwrap(), Vec::<u8>::new());
    assert_eq!(to_buffer(BigInt::from(0)).unwrap(), vec![0]);
    assert_eq!(to_buffer(BigInt::from(0x0100)).unwrap(), vec![1, 0]);
}

#[test]
fn invalid_buffer_inputs() {
    assert!(matches!(to_buffer(-1i64), Err(Error::Assertion(_))));
    assert!(matches!(to_buffer(BigInt::from(-5)), Err(Error::Assertion(_))));
    assert!(matches!(to_buffer("0xzz"), Err(Error::InvalidHex(_))));
}

#[test]
fn json_inputs() {
    use serde_json::json;
    assert_eq!(Input::from_json(&json!(null)).unwrap(), Input::Empty);
    assert_eq!(Input::from_json(&json!(7)).unwrap(), Input::Int(7));
    assert_eq!(Input::from_json(&json!([1, 2])).unwrap(), Input::Bytes(vec![1, 2]));
    assert!(matches!(Input::from_json(&json!(true)), Err(Error::InvalidType(_))));
    assert!(matches!(Input::from_json(&json!({})), Err(Error::InvalidType(_))));
    assert!(matches!(Input::from_json(&json!([256])), Err(Error::InvalidType(_))));
}

#[test]
fn buffer_to_int_limits() {
    assert_eq!(buffer_to_int(&[]).unwrap(), 0);
    assert_eq!(buffer_to_int(&[0, 0, 1, 0]).unwrap(), 256);
    assert_eq!(buffer_to_int(&[0xff; 8]).unwrap(), u64::MAX);
    assert!(matches!(
        buffer_to_int(&[1; 9]),
        Err(Error::IntegerOverflow { bytes: 9 })
    ));
}

#[test]
fn signed_word() {
    assert_eq!(from_signed(&[0xff; 32]), BigInt::from(-1));
    assert_eq!(
        from_signed(&[0xff; 31]),
        BigInt::from_bytes_be(num_bigint::Sign::Plus, &[0xff; 31])
    );
    assert_eq!(to_unsigned(&BigInt::from(-1)), vec![0xff; 32]);
    assert_eq!(to_unsigned(&BigInt::from(0)), vec![0]);

    let mut min = vec![0u8; 32];
    min[0] = 0x80;
    let min_int = from_signed(&min);
    assert_eq!(min_int, -(BigInt::from(1) << 255usize));
    assert_eq!(to_unsigned(&min_int), min);
}

#[test]
fn constants_are_digests() {
    assert_eq!(*SHA3_NULL, keccak256(&[]));
    assert_eq!(*SHA3_RLP, encoded_hash(&[0u8; 0][..]));
}

proptest! {
    #[test]
    fn int_round_trip(i in any::<u64>()) {
        prop_assert_eq!(buffer_to_int(&to_buffer(i).unwrap()).unwrap(), i);
    }

    #[test]
    fn hex_is_minimal(i in any::<u64>()) {
        let hex = int_to_hex(i as i128).unwrap();
        prop_assert_eq!(hex.len() % 2, 0);
        prop_assert_eq!(u64::from_str_radix(&hex, 16).unwrap(), i);
        prop_assert!(hex.len() == 2 || !hex.starts_with("00"));
    }

    #[test]
    fn signed_round_trip(word in any::<[u8; 32]>()) {
        prop_assert_eq!(pad(&to_unsigned(&from_signed(&word)), 32), word.to_vec());
    }

    #[test]
    fn negative_words_are_negative(mut word in any::<[u8; 32]>()) {
        word[0] |= 0x80;
        prop_assert!(from_signed(&word) < BigInt::from(0));
    }

    #[test]
    fn inputs_normalize(input in arbitrary_input()) {
        prop_assert!(input.into_buffer().is_ok());
    }
}
