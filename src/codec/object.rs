use std::borrow::Cow;

use tracing::trace;

use crate::codec::{CodecError, CodecOptions, HostRef, ObjectModel, Record, Result, Strategy, Value};

/// Representation written after the strategy byte.
pub(crate) enum ObjectRepr<'a> {
	Blob(Vec<u8>),
	State(Value),
	Structural(Cow<'a, Record>),
}

/// Host object reduced to its stream form.
pub(crate) struct ResolvedObject<'a> {
	pub class_name: Cow<'a, str>,
	pub repr: ObjectRepr<'a>,
}

impl ResolvedObject<'_> {
	pub fn strategy(&self) -> Strategy {
		match self.repr {
			ObjectRepr::Blob(_) => Strategy::SelfSerializing,
			ObjectRepr::State(_) => Strategy::State,
			ObjectRepr::Structural(_) => Strategy::Structural,
		}
	}
}

/// Ask the object model for the stream form of a live object.
pub(crate) fn resolve_host_object(object: &HostRef, model: &dyn ObjectModel, options: &CodecOptions) -> Result<ResolvedObject<'static>> {
	let class_name = model.class_name(object)?;
	let strategy = if options.is_exception_class(&class_name) {
		Strategy::SelfSerializing
	} else {
		model.strategy(object)?
	};
	trace!(class_name = %class_name, ?strategy, "resolving host object");

	let repr = match strategy {
		Strategy::SelfSerializing => ObjectRepr::Blob(model.self_serialize(object)?),
		Strategy::State => ObjectRepr::State(model.to_state_value(object)?),
		Strategy::Structural => ObjectRepr::Structural(Cow::Owned(model.to_structural(object)?)),
	};

	Ok(ResolvedObject {
		class_name: Cow::Owned(class_name),
		repr,
	})
}

/// A record carrying a class name is the structural form of a host object.
pub(crate) fn resolve_classed_record<'a>(record: &'a Record, class_name: &'a str, options: &CodecOptions) -> Result<ResolvedObject<'a>> {
	if options.is_exception_class(class_name) {
		return Err(CodecError::delegation(class_name, "exception objects must be self-serializing"));
	}
	Ok(ResolvedObject {
		class_name: Cow::Borrowed(class_name),
		repr: ObjectRepr::Structural(Cow::Borrowed(record)),
	})
}
