mod bridge;
pub(crate) mod bytes;
mod decode;
mod encode;
mod error;
mod object;
mod options;
mod registry;
mod session;
mod shape;
mod size;
pub mod sparse;
mod tag;
#[cfg(test)]
mod test_support;
mod value;

/// Object model capability and host references.
pub use bridge::{HandleRepr, HostInstance, HostRef, NoObjects, ObjectModel, Strategy};
/// Decoding entry points.
pub use decode::{decode, decode_all};
/// Encoding entry points.
pub use encode::{encode, encode_into};
/// Error and result aliases.
pub use error::{CodecError, Result};
/// Runtime limits and host conventions.
pub use options::CodecOptions;
/// Hook-based object model.
pub use registry::Registry;
/// Model and options bundle.
pub use session::Codec;
/// Canonical array shapes and wire limits.
pub use shape::{MAX_DIMS, MAX_EXTENT, Shape};
/// Exact encoded size estimation.
pub use size::size_of;
/// Kind table and tag byte packing.
pub use tag::{HandleKind, Kind, Tag, Tier};
/// Value tree types.
pub use value::{Collection, Element, ElementKind, NumericArray, Record, SparseKind, SparseMatrix, Value};
