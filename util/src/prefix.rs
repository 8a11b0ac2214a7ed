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

//! `0x` prefix helpers. These are pure string transforms; nothing here
//! checks that the rest of the string is hex.

use std::borrow::Cow;

/// Whether `s` starts with exactly `0x`.
pub fn is_hex_prefixed(s: &str) -> bool {
    s.starts_with("0x")
}

/// Removes one leading `0x`, if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

/// Adds `0x` unless `s` already starts with it.
pub fn add_hex_prefix(s: &str) -> Cow<'_, str> {
    if is_hex_prefixed(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("0x{s}"))
    }
}

/// Prepends a `0` to odd-length strings.
pub fn pad_to_even(s: &str) -> Cow<'_, str> {
    if s.len() % 2 == 1 {
        Cow::Owned(format!("0{s}"))
    } else {
        Cow::Borrowed(s)
    }
}
