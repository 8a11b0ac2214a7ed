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
//#![deny(warnings)]
#![deny(missing_docs)]

//! This crate collects the cryptographic primitives used by account
//! utilities: the digests used for hashing encoded records and deriving
//! addresses, and the secp256k1 keypair used to derive public keys. They are
//! defined here to decouple callers from any specific implementation.

pub mod hash;
pub mod keys;

pub use hash::HashOutput;
