/// CLI error type.
pub mod error;
/// Value listing command.
pub mod info;
/// JSON to value conversion.
pub mod json;
/// JSON packing command.
pub mod pack;
/// Value tree rendering.
pub mod print;
/// Value tree display command.
pub mod show;
pub(crate) mod util;
