// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Blob lifecycle: one handle, one buffer, one release.
//!
//! A [`YamlDocument`] owns the bytes between a `load_*` call and the next
//! load or [`close`](YamlDocument::close). Two buffer modes exist: a plain
//! owned `Vec<u8>` with no special lifecycle, and an externally-allocated
//! region (the native producer's direct buffer) that must be handed back
//! through its release callback exactly once. `close` is idempotent, a new
//! load releases the previous buffer first, and `Drop` closes best-effort,
//! so the native region is reclaimed on every exit path without relying on
//! anyone remembering to call anything.
//!
//! Handles are single-threaded by design; there is no internal locking.
//! Concurrent documents each get their own handle and share nothing.

use std::fs;
use std::path::Path;
use std::ptr::NonNull;

use crate::blob::header::BlobHeader;
use crate::blob::tables::BlobView;
use crate::blob::tree::{DecodeOptions, TreeBuilder};
use crate::error::BlobError;
use crate::value::Value;

/// Release callback for an externally-allocated buffer. Called exactly once
/// with the region's pointer and length; an `Err` surfaces as
/// [`BlobError::ResourceReleaseFailed`].
pub type ReleaseFn = Box<dyn FnOnce(*mut u8, usize) -> Result<(), String>>;

/// An externally-allocated byte region plus its release callback.
pub struct ExternalBuf {
    ptr: NonNull<u8>,
    len: usize,
    release: Option<ReleaseFn>,
}

impl ExternalBuf {
    /// Wrap an external region.
    ///
    /// # Safety
    ///
    /// `ptr` must point to `len` readable bytes that stay valid and
    /// unmutated until `release` is invoked, and `release` must be safe to
    /// call once with exactly this pointer and length.
    pub unsafe fn new(ptr: NonNull<u8>, len: usize, release: Option<ReleaseFn>) -> Self {
        Self { ptr, len, release }
    }

    fn as_slice(&self) -> &[u8] {
        // Validity for [ptr, ptr+len) is the constructor's safety contract.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Invoke the release callback. Taking the callback out first makes a
    /// second call (or the later `Drop`) a no-op.
    fn release(&mut self) -> Result<(), BlobError> {
        match self.release.take() {
            Some(f) => f(self.ptr.as_ptr(), self.len)
                .map_err(|detail| BlobError::ResourceReleaseFailed { detail }),
            None => Ok(()),
        }
    }
}

impl Drop for ExternalBuf {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

impl std::fmt::Debug for ExternalBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalBuf")
            .field("len", &self.len)
            .field("released", &self.release.is_none())
            .finish()
    }
}

/// The two buffer modes of §blob lifecycle: owned bytes need no ceremony,
/// external ones carry their release callback.
#[derive(Debug)]
enum BlobBuf {
    Owned(Vec<u8>),
    External(ExternalBuf),
}

impl BlobBuf {
    fn bytes(&self) -> &[u8] {
        match self {
            BlobBuf::Owned(v) => v,
            BlobBuf::External(e) => e.as_slice(),
        }
    }
}

/// Handle over one loaded blob.
///
/// The header is decoded and cached at load time; [`root`](Self::root)
/// rebuilds the full tree on demand. At most one buffer is held at a time.
#[derive(Debug, Default)]
pub struct YamlDocument {
    buf: Option<BlobBuf>,
    header: Option<BlobHeader>,
    options: DecodeOptions,
}

impl YamlDocument {
    pub fn new() -> Self {
        Self::with_options(DecodeOptions::default())
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self {
            buf: None,
            header: None,
            options,
        }
    }

    /// Load a blob from owned bytes, releasing any previously held buffer
    /// first. The header is validated eagerly; on failure the handle is
    /// left empty.
    pub fn load_bytes(&mut self, bytes: Vec<u8>) -> Result<(), BlobError> {
        self.close()?;
        let header = BlobHeader::decode(&bytes)?;
        self.buf = Some(BlobBuf::Owned(bytes));
        self.header = Some(header);
        Ok(())
    }

    /// Load a blob file into an owned buffer. The previous buffer is
    /// released before the file is read, so an unreadable path leaves the
    /// handle empty rather than holding a stale document.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BlobError> {
        self.close()?;
        let bytes = fs::read(path)?;
        self.load_bytes(bytes)
    }

    /// Load an externally-allocated blob. The buffer's release callback
    /// runs exactly once: on `close`, on the next `load_*`, or on `Drop`.
    /// If header validation fails the buffer is released immediately and
    /// the decode error is returned (a release failure on that path is
    /// secondary and dropped).
    pub fn load_external(&mut self, mut buf: ExternalBuf) -> Result<(), BlobError> {
        self.close()?;
        match BlobHeader::decode(buf.as_slice()) {
            Ok(header) => {
                self.buf = Some(BlobBuf::External(buf));
                self.header = Some(header);
                Ok(())
            }
            Err(e) => {
                let _ = buf.release();
                Err(e)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.buf.is_some()
    }

    /// The cached, validated header.
    pub fn header(&self) -> Result<&BlobHeader, BlobError> {
        self.header.as_ref().ok_or(BlobError::NoBufferLoaded)
    }

    /// Reconstruct the full document tree.
    pub fn root(&self) -> Result<Value, BlobError> {
        let buf = self.buf.as_ref().ok_or(BlobError::NoBufferLoaded)?;
        let header = self.header.as_ref().ok_or(BlobError::NoBufferLoaded)?;
        let view = BlobView::new(buf.bytes(), header);
        TreeBuilder::new(view, &self.options).parse_root()
    }

    /// Release any held buffer. Idempotent: a second call is a no-op.
    ///
    /// A failing release callback is reported, but the handle is still
    /// marked released; retrying against a known-bad resource helps nobody.
    pub fn close(&mut self) -> Result<(), BlobError> {
        self.header = None;
        match self.buf.take() {
            None | Some(BlobBuf::Owned(_)) => Ok(()),
            Some(BlobBuf::External(mut ext)) => ext.release(),
        }
    }
}

impl Drop for YamlDocument {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
