//! Integration tests for the HIS conversion crates.
//!
//! End-to-end checks that go from TIFF bands on disk through the row
//! pipeline to TIFF bands and sidecars, plus cross-crate consistency between
//! the pixel, row and block converters.
