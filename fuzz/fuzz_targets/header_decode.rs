// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Header prologue parsing on raw bytes: must terminate with Ok or a typed
//! error for every input, and decoding twice must agree.

#![no_main]

use libfuzzer_sys::fuzz_target;
use yamblob::BlobHeader;

fuzz_target!(|data: &[u8]| {
    let first = BlobHeader::decode(data);
    let second = BlobHeader::decode(data);
    match (first, second) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(_), Err(_)) => {}
        _ => panic!("header decode is not deterministic"),
    }
});
