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

//! Schema-driven records.
//!
//! A record type declares an ordered list of [`FieldSpec`]s through the
//! [`Schema`] trait. Each [`Record`] owns one optional buffer per field, in
//! schema order, and every write goes through the field's validation: the
//! buffer list is therefore always the canonical form handed to the encoder
//! for hashing and transmission.
//!
//! [`define_record!`](crate::define_record) generates a named wrapper with a
//! getter and a setter per field.

use crate::bytes::strip_zeros;
use crate::error::Error;
use crate::input::{Input, to_buffer};
use crate::prefix::strip_hex_prefix;
use base_crypto::HashOutput;
use base_crypto::hash::encoded_hash;
use const_hex::ToHexExt;
use derive_where::derive_where;
use serialize::{Encodable, Item};
use std::fmt::{self, Debug, Formatter};
use std::io;
use std::marker::PhantomData;

/// One slot of a record's binary layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field's name, as used by keyed input and labeled JSON.
    pub name: &'static str,
    /// The exact width in bytes, unless `allow_less` permits fewer.
    pub length: Option<usize>,
    /// Leading zeros are stripped and the remainder may be shorter than
    /// `length`.
    pub allow_less: bool,
    /// The single byte `00` is kept instead of becoming empty, and an empty
    /// value passes the width check.
    pub allow_zero: bool,
    /// The value the field starts with in [`Record::new`].
    pub default: Option<&'static [u8]>,
}

impl FieldSpec {
    /// An unconstrained field.
    pub const fn new(name: &'static str) -> Self {
        FieldSpec {
            name,
            length: None,
            allow_less: false,
            allow_zero: false,
            default: None,
        }
    }

    /// Requires exactly `length` bytes. A length of zero places no
    /// constraint on the field, the same as not setting one.
    pub const fn length(self, length: usize) -> Self {
        FieldSpec {
            length: Some(length),
            ..self
        }
    }

    /// Strips leading zeros and allows fewer than `length` bytes.
    pub const fn allow_less(self) -> Self {
        FieldSpec {
            allow_less: true,
            ..self
        }
    }

    /// Keeps a lone zero byte and exempts empty values from the width check.
    pub const fn allow_zero(self) -> Self {
        FieldSpec {
            allow_zero: true,
            ..self
        }
    }

    /// Sets the initial value.
    pub const fn default_value(self, value: &'static [u8]) -> Self {
        FieldSpec {
            default: Some(value),
            ..self
        }
    }

    /// Applies this field's rules to an already-normalized buffer.
    pub fn validate(&self, mut value: Vec<u8>) -> Result<Vec<u8>, Error> {
        // Only the lone zero byte; wider all-zero values are left alone.
        if value == [0u8] && !self.allow_zero {
            value.clear();
        }
        match self.length.filter(|length| *length > 0) {
            Some(length) if self.allow_less => {
                let stripped = strip_zeros(&value);
                if stripped.len() > length {
                    return Err(Error::Assertion(format!(
                        "The field {} must have at most {length} bytes, got {}",
                        self.name,
                        stripped.len()
                    )));
                }
                Ok(stripped.to_vec())
            }
            Some(length) if !(self.allow_zero && value.is_empty()) && value.len() != length => {
                Err(Error::FieldLength {
                    field: self.name,
                    expected: length,
                    actual: value.len(),
                })
            }
            _ => Ok(value),
        }
    }
}

/// The type-level field layout of a record.
pub trait Schema {
    /// The record type's name, for diagnostics.
    const NAME: &'static str;
    /// The fields, in storage order.
    const FIELDS: &'static [FieldSpec];

    /// The position of the field called `name`.
    fn index_of(name: &str) -> Option<usize> {
        Self::FIELDS.iter().position(|field| field.name == name)
    }
}

/// Input for populating a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordInput {
    /// The canonical encoding of the field list, as hex with an optional
    /// `0x` prefix.
    Hex(String),
    /// The canonical encoding of the field list.
    Encoded(Vec<u8>),
    /// Field values in schema order. May be shorter than the schema.
    Values(Vec<Input>),
    /// Field values by name. Names outside the schema are ignored.
    Map(Vec<(String, Input)>),
}

impl From<&str> for RecordInput {
    fn from(hex: &str) -> RecordInput {
        RecordInput::Hex(hex.to_owned())
    }
}

impl From<Vec<u8>> for RecordInput {
    fn from(encoded: Vec<u8>) -> RecordInput {
        RecordInput::Encoded(encoded)
    }
}

impl From<Vec<Input>> for RecordInput {
    fn from(values: Vec<Input>) -> RecordInput {
        RecordInput::Values(values)
    }
}

impl From<Vec<(String, Input)>> for RecordInput {
    fn from(entries: Vec<(String, Input)>) -> RecordInput {
        RecordInput::Map(entries)
    }
}

/// A record whose fields are backed by an owned list of byte buffers, one
/// per entry of `S::FIELDS`. A slot is `None` until it is first assigned.
#[derive_where(Clone, PartialEq, Eq)]
pub struct Record<S: Schema> {
    raw: Box<[Option<Vec<u8>>]>,
    _schema: PhantomData<S>,
}

impl<S: Schema> Debug for Record<S> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let mut map = formatter.debug_map();
        for (field, value) in S::FIELDS.iter().zip(self.raw.iter()) {
            match value {
                Some(bytes) => map.entry(&field.name, &format_args!("0x{}", bytes.encode_hex())),
                None => map.entry(&field.name, &format_args!("-")),
            };
        }
        map.finish()
    }
}

impl<S: Schema> Record<S> {
    /// A record with every field at its default, or absent if it has none.
    pub fn new() -> Result<Self, Error> {
        let mut record = Record {
            raw: vec![None; S::FIELDS.len()].into_boxed_slice(),
            _schema: PhantomData,
        };
        for (index, field) in S::FIELDS.iter().enumerate() {
            if let Some(default) = field.default {
                record.set(index, default)?;
            }
        }
        Ok(record)
    }

    /// A record with defaults applied, then `input`.
    pub fn from_input(input: impl Into<RecordInput>) -> Result<Self, Error> {
        let mut record = Self::new()?;
        record.apply(input)?;
        Ok(record)
    }

    /// A record from JSON: a hex string of the encoding, an array of values
    /// in schema order, or an object keyed by field name. Keys outside the
    /// schema are skipped before their values are looked at.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, Error> {
        use serde_json::Value;
        let input = match value {
            Value::String(hex) => RecordInput::Hex(hex.clone()),
            Value::Array(values) => RecordInput::Values(
                values
                    .iter()
                    .map(Input::from_json)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(entries) => RecordInput::Map(
                entries
                    .iter()
                    .filter(|(key, _)| S::index_of(key).is_some())
                    .map(|(key, value)| Ok((key.clone(), Input::from_json(value)?)))
                    .collect::<Result<_, Error>>()?,
            ),
            _ => return Err(Error::InvalidType("record input")),
        };
        Self::from_input(input)
    }

    /// Assigns every value in `input` through the field setters.
    ///
    /// Fields are written one at a time; on failure the fields assigned
    /// before the failing one keep their new values.
    pub fn apply(&mut self, input: impl Into<RecordInput>) -> Result<(), Error> {
        let result = match input.into() {
            RecordInput::Hex(hex) => const_hex::decode(strip_hex_prefix(&hex))
                .map_err(Error::from)
                .and_then(|bytes| self.apply_encoded(&bytes)),
            RecordInput::Encoded(bytes) => self.apply_encoded(&bytes),
            RecordInput::Values(values) => self.apply_values(values),
            RecordInput::Map(entries) => self.apply_map(entries),
        };
        if let Err(e) = &result {
            debug!(record = S::NAME, error = %e, "rejected record input");
        }
        result
    }

    fn apply_encoded(&mut self, bytes: &[u8]) -> Result<(), Error> {
        // no data; defaults stay
        if bytes.is_empty() {
            return Ok(());
        }
        let items = serialize::decode::<Item>(bytes)?
            .into_list()
            .map_err(|_| Error::InvalidType("encoded record that is not a list"))?;
        trace!(record = S::NAME, values = items.len(), "decoded record input");
        if items.iter().any(Item::is_list) {
            return Err(Error::InvalidType("nested list in encoded record"));
        }
        let values = items
            .iter()
            .filter_map(Item::as_bytes)
            .map(|bytes| Input::Bytes(bytes.to_vec()))
            .collect();
        self.apply_values(values)
    }

    fn apply_values(&mut self, values: Vec<Input>) -> Result<(), Error> {
        if values.len() > S::FIELDS.len() {
            return Err(Error::SchemaMismatch {
                record: S::NAME,
                expected: S::FIELDS.len(),
                actual: values.len(),
            });
        }
        for (index, value) in values.into_iter().enumerate() {
            self.set(index, value)?;
        }
        Ok(())
    }

    fn apply_map(&mut self, entries: Vec<(String, Input)>) -> Result<(), Error> {
        for (key, value) in entries {
            match S::index_of(&key) {
                Some(index) => self.set(index, value)?,
                None => trace!(record = S::NAME, key, "skipping unknown field"),
            }
        }
        Ok(())
    }

    /// The value of the field at `index`, if assigned.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.raw.get(index)?.as_deref()
    }

    /// Normalizes `value`, validates it against the field at `index`, and
    /// stores it.
    pub fn set(&mut self, index: usize, value: impl Into<Input>) -> Result<(), Error> {
        let field = S::FIELDS
            .get(index)
            .ok_or_else(|| Error::UnknownField(format!("#{index} of {}", S::NAME)))?;
        let value = field.validate(to_buffer(value)?)?;
        trace!(record = S::NAME, field = field.name, len = value.len(), "field set");
        self.raw[index] = Some(value);
        Ok(())
    }

    /// The value of the field called `name`, if assigned.
    pub fn get_by_name(&self, name: &str) -> Result<Option<&[u8]>, Error> {
        let index = S::index_of(name).ok_or_else(|| Error::UnknownField(name.to_owned()))?;
        Ok(self.get(index))
    }

    /// Sets the field called `name`.
    pub fn set_by_name(&mut self, name: &str, value: impl Into<Input>) -> Result<(), Error> {
        let index = S::index_of(name).ok_or_else(|| Error::UnknownField(name.to_owned()))?;
        self.set(index, value)
    }

    /// The schema this record is bound to.
    pub fn fields(&self) -> &'static [FieldSpec] {
        S::FIELDS
    }

    /// The backing buffers, in schema order.
    pub fn raw(&self) -> &[Option<Vec<u8>>] {
        &self.raw
    }

    /// The buffer list as an encodable tree. Unassigned fields are empty
    /// strings.
    pub fn to_item(&self) -> Item {
        Item::List(
            self.raw
                .iter()
                .map(|value| Item::Bytes(value.clone().unwrap_or_default()))
                .collect(),
        )
    }

    /// The canonical encoding of the buffer list.
    pub fn serialize(&self) -> Vec<u8> {
        serialize::encode(self)
    }

    /// Keccak-256 of the canonical encoding.
    pub fn hash(&self) -> HashOutput {
        encoded_hash(self)
    }

    /// Projects the record into JSON.
    ///
    /// Unlabeled, this is the array of unprefixed hex strings of the buffer
    /// list. Labeled, it is an object from field name to `0x`-prefixed hex.
    /// Unassigned fields are `null` in both forms.
    pub fn to_json(&self, labeled: bool) -> serde_json::Value {
        use serde_json::Value;
        if labeled {
            Value::Object(
                S::FIELDS
                    .iter()
                    .zip(self.raw.iter())
                    .map(|(field, value)| {
                        let json = value.as_ref().map_or(Value::Null, |bytes| {
                            Value::String(format!("0x{}", bytes.encode_hex()))
                        });
                        (field.name.to_owned(), json)
                    })
                    .collect(),
            )
        } else {
            Value::Array(
                self.raw
                    .iter()
                    .map(|value| {
                        value
                            .as_ref()
                            .map_or(Value::Null, |bytes| Item::Bytes(bytes.clone()).to_json())
                    })
                    .collect(),
            )
        }
    }
}

impl<S: Schema> Encodable for Record<S> {
    fn encode(&self, writer: &mut impl io::Write) -> io::Result<()> {
        self.to_item().encode(writer)
    }

    fn encoded_size(&self) -> usize {
        self.to_item().encoded_size()
    }
}

/// Declares a record type from a list of fields.
///
/// This generates `<Name>Schema`, implementing [`Schema`], and `Name`, a
/// wrapper around `Record<NameSchema>` that dereferences to it and adds a
/// getter `field()` and a setter `set_field(value)` per field.
///
/// ```
/// use account_util::{FieldSpec, define_record};
///
/// define_record! {
///     /// A value transfer.
///     pub struct Transfer {
///         nonce => FieldSpec::new("nonce").length(32).allow_less().allow_zero(),
///         to => FieldSpec::new("to").length(20).allow_zero(),
///         value => FieldSpec::new("value").length(32).allow_less().allow_zero(),
///     }
/// }
///
/// let mut transfer = Transfer::new().unwrap();
/// transfer.set_nonce(7u64).unwrap();
/// assert_eq!(transfer.nonce(), Some(&[7u8][..]));
/// assert!(transfer.set_to([0u8; 19]).is_err());
/// ```
#[macro_export]
macro_rules! define_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident => $spec:expr
            ),* $(,)?
        }
    ) => {
        $crate::__private::pastey::paste! {
            #[doc = concat!("The field layout of [`", stringify!($name), "`].")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            $vis struct [<$name Schema>];

            #[allow(non_camel_case_types)]
            #[derive(Clone, Copy)]
            enum [<$name FieldIndex>] {
                $($field),*
            }

            impl $crate::record::Schema for [<$name Schema>] {
                const NAME: &'static str = stringify!($name);
                const FIELDS: &'static [$crate::record::FieldSpec] = &[$($spec),*];
            }

            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq)]
            $vis struct $name(pub $crate::record::Record<[<$name Schema>]>);

            #[allow(dead_code)]
            impl $name {
                #[doc = concat!("A `", stringify!($name), "` with every field at its default.")]
                pub fn new() -> ::std::result::Result<Self, $crate::Error> {
                    $crate::record::Record::new().map($name)
                }

                #[doc = concat!("A `", stringify!($name), "` populated from `input`.")]
                pub fn from_input(
                    input: impl ::std::convert::Into<$crate::record::RecordInput>,
                ) -> ::std::result::Result<Self, $crate::Error> {
                    $crate::record::Record::from_input(input).map($name)
                }

                #[doc = concat!("A `", stringify!($name), "` populated from JSON.")]
                pub fn from_json(
                    value: &$crate::__private::serde_json::Value,
                ) -> ::std::result::Result<Self, $crate::Error> {
                    $crate::record::Record::from_json(value).map($name)
                }

                $(
                    $(#[$field_meta])*
                    #[doc = concat!("The `", stringify!($field), "` field, if assigned.")]
                    pub fn $field(&self) -> ::std::option::Option<&[u8]> {
                        self.0.get([<$name FieldIndex>]::$field as usize)
                    }

                    #[doc = concat!("Validates and stores the `", stringify!($field), "` field.")]
                    pub fn [<set_ $field>](
                        &mut self,
                        value: impl ::std::convert::Into<$crate::Input>,
                    ) -> ::std::result::Result<(), $crate::Error> {
                        self.0.set([<$name FieldIndex>]::$field as usize, value)
                    }
                )*
            }

            impl ::std::ops::Deref for $name {
                type Target = $crate::record::Record<[<$name Schema>]>;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl ::std::ops::DerefMut for $name {
                fn deref_mut(&mut self) -> &mut Self::Target {
                    &mut self.0
                }
            }

            impl $crate::__private::serialize::Encodable for $name {
                fn encode(&self, writer: &mut impl ::std::io::Write) -> ::std::io::Result<()> {
                    $crate::__private::serialize::Encodable::encode(&self.0, writer)
                }

                fn encoded_size(&self) -> usize {
                    $crate::__private::serialize::Encodable::encoded_size(&self.0)
                }
            }
        }
    };
}
