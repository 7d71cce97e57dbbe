// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounds-checked little-endian reads at absolute byte offsets.
//!
//! Offsets come straight out of an untrusted header, so they are `u64` and
//! every read is checked against the buffer before touching memory. `None`
//! means the read would fall outside the buffer (or the offset does not fit
//! in the address space); callers translate that into a typed error with
//! context.

/// Convert a blob offset to a slice index, refusing values that do not fit.
#[inline]
pub(crate) fn to_usize(v: u64) -> Option<usize> {
    usize::try_from(v).ok()
}

/// Borrow `len` bytes at `offset`, or `None` if out of range.
#[inline]
pub(crate) fn read_slice(bytes: &[u8], offset: u64, len: u64) -> Option<&[u8]> {
    let start = to_usize(offset)?;
    let end = start.checked_add(to_usize(len)?)?;
    bytes.get(start..end)
}

#[inline]
pub(crate) fn read_u8(bytes: &[u8], offset: u64) -> Option<u8> {
    read_slice(bytes, offset, 1).map(|s| s[0])
}

#[inline]
pub(crate) fn read_u16_le(bytes: &[u8], offset: u64) -> Option<u16> {
    let s = read_slice(bytes, offset, 2)?;
    Some(u16::from_le_bytes([s[0], s[1]]))
}

#[inline]
pub(crate) fn read_u32_le(bytes: &[u8], offset: u64) -> Option<u32> {
    let s = read_slice(bytes, offset, 4)?;
    Some(u32::from_le_bytes([s[0], s[1], s[2], s[3]]))
}

#[inline]
pub(crate) fn read_u64_le(bytes: &[u8], offset: u64) -> Option<u64> {
    let s = read_slice(bytes, offset, 8)?;
    Some(u64::from_le_bytes([
        s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7],
    ]))
}
