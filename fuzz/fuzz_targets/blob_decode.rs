// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full decode under adversarial input.
//!
//! Blobs arrive from a native producer and may be corrupt or crafted. The
//! worst allowed outcome is a typed error: headers lying about table
//! extents, node entries indexing past every table, alias cycles, scalar
//! lengths near u64::MAX. None of it may panic or read out of bounds.

#![no_main]

use libfuzzer_sys::fuzz_target;
use yamblob::YamlDocument;

fuzz_target!(|data: &[u8]| {
    let mut doc = YamlDocument::new();
    if doc.load_bytes(data.to_vec()).is_ok() {
        // header decoded; the tree walk must still terminate safely
        let _ = doc.root();
        let _ = doc.header();
    }
    let _ = doc.close();
});
