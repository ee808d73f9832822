//! Binary codec for dynamically typed array value trees.
//!
//! Values are numeric, logical, and character N-D arrays, sparse matrices,
//! struct-like records, cell-like collections, host objects, and callable
//! handles. Encoding computes the exact size up front and fills a buffer of
//! that size in one pass; decoding reports how many bytes each value used so
//! values can be stored back to back.

pub mod codec;
