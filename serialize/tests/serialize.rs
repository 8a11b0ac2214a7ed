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

#[cfg(test)]
mod tests {
    use account_util_serialize::*;
    use proptest::prelude::*;
    use std::io::ErrorKind;

    fn bytes(s: &str) -> Vec<u8> {
        hex::decode(s).unwrap()
    }

    #[test]
    fn encode_known_vectors() {
        assert_eq!(encode(&Item::Bytes(vec![])), bytes("80"));
        assert_eq!(encode(&Item::List(vec![])), bytes("c0"));
        assert_eq!(encode(&Item::from(b"dog".to_vec())), bytes("83646f67"));
        assert_eq!(
            encode(&Item::List(vec![
                Item::from(b"cat".to_vec()),
                Item::from(b"dog".to_vec()),
            ])),
            bytes("c88363617483646f67")
        );
        // The set-theoretic representation of three.
        let three = Item::List(vec![
            Item::List(vec![]),
            Item::List(vec![Item::List(vec![])]),
            Item::List(vec![Item::List(vec![]), Item::List(vec![Item::List(vec![])])]),
        ]);
        assert_eq!(encode(&three), bytes("c7c0c1c0c3c0c1c0"));
    }

    #[test]
    fn encode_long_list() {
        let item = Item::List(vec![Item::from(vec![0x11u8; 60])]);
        let encoded = encode(&item);
        assert_eq!(&encoded[..3], &[0xf8, 62, 0xb8]);
        assert_eq!(encoded.len(), item.encoded_size());
    }

    #[test]
    fn decode_known_vectors() {
        let item: Item = decode(&bytes("c88363617483646f67")).unwrap();
        assert_eq!(
            item,
            Item::List(vec![Item::from(b"cat".to_vec()), Item::from(b"dog".to_vec())])
        );
        let leaf: Vec<u8> = decode(&bytes("820400")).unwrap();
        assert_eq!(leaf, vec![0x04, 0x00]);
        let zero: Vec<u8> = decode(&bytes("00")).unwrap();
        assert_eq!(zero, vec![0x00]);
    }

    #[test]
    fn decode_rejects_trailing_bytes() {
        let err = decode::<Item>(&bytes("00ff")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        let err = decode::<Item>(&bytes("c0c0")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn decode_rejects_prefixed_single_byte() {
        let err = decode::<Item>(&bytes("8105")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn decode_bytes_rejects_list() {
        let err = decode::<Vec<u8>>(&bytes("c0")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn decode_list_with_truncated_child() {
        // The list holds three bytes, its child claims three more.
        let err = decode::<Item>(&bytes("c383646f")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    proptest! {
        #[test]
        fn decoding_inverts_encoding(item in arbitrary_item()) {
            let encoded = encode(&item);
            prop_assert_eq!(encoded.len(), item.encoded_size());
            prop_assert_eq!(decode::<Item>(&encoded).unwrap(), item);
        }
    }
}
