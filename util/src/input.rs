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

//! The accepted input forms of [`to_buffer`].

use crate::error::Error;
use crate::integer::int_to_buffer;
use crate::prefix::{is_hex_prefixed, pad_to_even, strip_hex_prefix};
use base_crypto::HashOutput;
use num_bigint::{BigInt, BigUint, Sign};

/// A value that can be normalized into a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    /// Bytes, passed through unchanged.
    Bytes(Vec<u8>),
    /// A string. `0x`-prefixed strings are decoded as hex after padding to
    /// even length; anything else is taken as its UTF-8 bytes.
    Str(String),
    /// An integer, converted through [`crate::int_to_hex`]. Must be
    /// non-negative.
    Int(i128),
    /// A big integer, converted to its minimal big-endian magnitude. Must be
    /// non-negative.
    BigInt(BigInt),
    /// No value; normalizes to the empty buffer.
    #[default]
    Empty,
}

/// Normalizes `value` into a byte buffer.
pub fn to_buffer(value: impl Into<Input>) -> Result<Vec<u8>, Error> {
    value.into().into_buffer()
}

impl Input {
    /// Normalizes this input into a byte buffer.
    pub fn into_buffer(self) -> Result<Vec<u8>, Error> {
        match self {
            Input::Bytes(bytes) => Ok(bytes),
            Input::Str(s) if is_hex_prefixed(&s) => {
                Ok(const_hex::decode(pad_to_even(strip_hex_prefix(&s)).as_bytes())?)
            }
            Input::Str(s) => Ok(s.into_bytes()),
            Input::Int(i) => int_to_buffer(i),
            Input::BigInt(n) => match n.sign() {
                Sign::Minus => Err(Error::Assertion(format!(
                    "big integer must be non-negative, got {n}"
                ))),
                Sign::NoSign | Sign::Plus => Ok(n.magnitude().to_bytes_be()),
            },
            Input::Empty => Ok(Vec::new()),
        }
    }

    /// Interprets a JSON value as input.
    ///
    /// Strings, non-negative whole numbers and `null` map onto their
    /// variants, and arrays of byte values onto [`Input::Bytes`]. Negative
    /// or fractional numbers fail with [`Error::Assertion`], whole numbers
    /// of 2^64 and above with [`Error::IntegerOverflow`]; booleans,
    /// objects and arrays holding anything but bytes fail with
    /// [`Error::InvalidType`].
    pub fn from_json(value: &serde_json::Value) -> Result<Input, Error> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(Input::Empty),
            Value::String(s) => Ok(Input::Str(s.clone())),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(Input::Int(u as i128))
                } else if let Some(i) = n.as_i64() {
                    Err(Error::Assertion(format!("number must be positive, got {i}")))
                } else {
                    // u64::MAX rounds up to 2^64 as a float
                    let limit = u64::MAX as f64;
                    match n.as_f64() {
                        Some(f) if f.fract() != 0.0 || !f.is_finite() => {
                            Err(Error::Assertion(format!("number is not an integer: {n}")))
                        }
                        Some(f) if f < 0.0 => Err(Error::Assertion(format!(
                            "number must be positive, got {f}"
                        ))),
                        Some(f) if f < limit => Ok(Input::Int(f as u64 as i128)),
                        Some(f) => Err(Error::IntegerOverflow {
                            bytes: (f.log2().floor() as usize + 1).div_ceil(8),
                        }),
                        None => Err(Error::Assertion(format!("number is not an integer: {n}"))),
                    }
                }
            }
            Value::Array(elems) => elems
                .iter()
                .map(|elem| {
                    elem.as_u64()
                        .and_then(|b| u8::try_from(b).ok())
                        .ok_or(Error::InvalidType("array element that is not a byte"))
                })
                .collect::<Result<Vec<u8>, _>>()
                .map(Input::Bytes),
            Value::Bool(_) => Err(Error::InvalidType("boolean")),
            Value::Object(_) => Err(Error::InvalidType("object")),
        }
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Input {
        Input::Bytes(bytes)
    }
}

impl From<&Vec<u8>> for Input {
    fn from(bytes: &Vec<u8>) -> Input {
        Input::Bytes(bytes.clone())
    }
}

impl From<&[u8]> for Input {
    fn from(bytes: &[u8]) -> Input {
        Input::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Input {
    fn from(bytes: [u8; N]) -> Input {
        Input::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Input {
    fn from(bytes: &[u8; N]) -> Input {
        Input::Bytes(bytes.to_vec())
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Input {
        Input::Str(s.to_owned())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Input {
        Input::Str(s)
    }
}

impl From<&String> for Input {
    fn from(s: &String) -> Input {
        Input::Str(s.clone())
    }
}

macro_rules! int_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input {
                fn from(i: $ty) -> Input {
                    Input::Int(i as i128)
                }
            }
        )*
    }
}

int_input!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128, isize);

impl From<BigInt> for Input {
    fn from(n: BigInt) -> Input {
        Input::BigInt(n)
    }
}

impl From<&BigInt> for Input {
    fn from(n: &BigInt) -> Input {
        Input::BigInt(n.clone())
    }
}

impl From<BigUint> for Input {
    fn from(n: BigUint) -> Input {
        Input::BigInt(n.into())
    }
}

impl From<HashOutput> for Input {
    fn from(hash: HashOutput) -> Input {
        Input::Bytes(hash.0.to_vec())
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Input {
        value.map_or(Input::Empty, Into::into)
    }
}

impl From<()> for Input {
    fn from((): ()) -> Input {
        Input::Empty
    }
}

#[cfg(feature = "proptest")]
/// Any well-formed [`Input`]: every variant, with non-negative integers and
/// `0x`-prefixed strings of valid hex.
pub fn arbitrary_input() -> impl proptest::strategy::Strategy<Value = Input> {
    use proptest::prelude::*;
    prop_oneof![
        proptest::collection::vec(any::<u8>(), 0..40).prop_map(Input::Bytes),
        "[0-9a-f]{0,40}".prop_map(|hex| Input::Str(format!("0x{hex}"))),
        (0..=i128::MAX).prop_map(Input::Int),
        proptest::collection::vec(any::<u8>(), 0..40)
            .prop_map(|bytes| Input::BigInt(BigUint::from_bytes_be(&bytes).into())),
        Just(Input::Empty),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings() {
        assert_eq!(to_buffer("0x123").unwrap(), vec![0x01, 0x23]);
        assert_eq!(to_buffer("0x").unwrap(), Vec::<u8>::new());
        assert_eq!(to_buffer("abc").unwrap(), b"abc".to_vec());
        assert!(matches!(to_buffer("0xzz"), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn integers() {
        assert_eq!(to_buffer(0u8).unwrap(), vec![0x00]);
        assert_eq!(to_buffer(0x1234u64).unwrap(), vec![0x12, 0x34]);
        assert!(matches!(to_buffer(-1i32), Err(Error::Assertion(_))));
        assert_eq!(to_buffer(BigUint::from(0x0102u32)).unwrap(), vec![1, 2]);
        assert!(matches!(
            to_buffer(BigInt::from(-5)),
            Err(Error::Assertion(_))
        ));
    }

    #[test]
    fn empties() {
        assert_eq!(to_buffer(()).unwrap(), Vec::<u8>::new());
        assert_eq!(to_buffer(None::<u64>).unwrap(), Vec::<u8>::new());
        assert_eq!(to_buffer(Some(7u64)).unwrap(), vec![7]);
    }

    #[test]
    fn json_float_bounds() {
        assert_eq!(
            Input::from_json(&json!(9007199254740992.0)).unwrap(),
            Input::Int(1 << 53)
        );
        assert!(matches!(
            Input::from_json(&json!(18446744073709551616.0)),
            Err(Error::IntegerOverflow { bytes: 9 })
        ));
        assert!(matches!(
            Input::from_json(&json!(1e20)),
            Err(Error::IntegerOverflow { bytes: 9 })
        ));
        assert!(matches!(
            Input::from_json(&json!(1.5)),
            Err(Error::Assertion(_))
        ));
        assert!(matches!(
            Input::from_json(&json!(-2.0)),
            Err(Error::Assertion(_))
        ));
    }

    #[test]
    fn json_forms() {
        assert_eq!(Input::from_json(&json!(null)).unwrap(), Input::Empty);
        assert_eq!(Input::from_json(&json!(42)).unwrap(), Input::Int(42));
        assert_eq!(Input::from_json(&json!(2.0)).unwrap(), Input::Int(2));
        assert_eq!(
            Input::from_json(&json!([1, 2, 255])).unwrap(),
            Input::Bytes(vec![1, 2, 255])
        );
        assert!(matches!(
            Input::from_json(&json!(-3)),
            Err(Error::Assertion(_))
        ));
        assert!(matches!(
            Input::from_json(&json!(1.5)),
            Err(Error::Assertion(_))
        ));
        assert!(matches!(
            Input::from_json(&json!(true)),
            Err(Error::InvalidType(_))
        ));
        assert!(matches!(
            Input::from_json(&json!({"a": 1})),
            Err(Error::InvalidType(_))
        ));
        assert!(matches!(
            Input::from_json(&json!([256])),
            Err(Error::InvalidType(_))
        ));
    }
}
