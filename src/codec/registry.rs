use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::codec::{CodecError, HandleRepr, HostInstance, HostRef, ObjectModel, Record, Result, Strategy, Value};

type SerializeFn = Box<dyn Fn(&HostRef) -> Result<Vec<u8>>>;
type DeserializeFn = Box<dyn Fn(&[u8]) -> Result<(HostRef, usize)>>;
type ToStateFn = Box<dyn Fn(&HostRef) -> Result<Value>>;
type FromStateFn = Box<dyn Fn(Value) -> Result<HostRef>>;
type ToRecordFn = Box<dyn Fn(&HostRef) -> Result<Record>>;
type DescribeFn = Box<dyn Fn(&HostRef) -> Result<HandleRepr>>;
type RebuildFn = Box<dyn Fn(&str, Value) -> Result<HostRef>>;
type WrapFn = Box<dyn Fn(HostRef, &Value) -> Result<HostRef>>;

enum Reduce {
	Blob(SerializeFn),
	State(ToStateFn),
	Structural(ToRecordFn),
}

impl Reduce {
	fn strategy(&self) -> Strategy {
		match self {
			Self::Blob(_) => Strategy::SelfSerializing,
			Self::State(_) => Strategy::State,
			Self::Structural(_) => Strategy::Structural,
		}
	}
}

struct ClassEntry {
	class_name: String,
	reduce: Reduce,
}

enum Restore {
	Blob(DeserializeFn),
	State(FromStateFn),
}

/// Object model assembled from per-type and per-name hooks.
///
/// Host types are looked up by [`TypeId`] when encoding and by class name
/// when decoding. Anything unregistered fails with [`CodecError::Delegation`].
#[derive(Default)]
pub struct Registry {
	classes: HashMap<TypeId, ClassEntry>,
	restores: HashMap<String, Restore>,
	callables: HashMap<TypeId, DescribeFn>,
	functions: HashMap<String, HostRef>,
	closure_builder: Option<RebuildFn>,
	anonymous_builder: Option<RebuildFn>,
	wrapper: Option<WrapFn>,
}

fn downcast<'a, T: Any>(object: &'a HostRef) -> Result<&'a T> {
	object
		.downcast_ref::<T>()
		.ok_or_else(|| CodecError::delegation(type_name::<T>(), format_args!("hook received {:?}", object.instance())))
}

impl Registry {
	/// Empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `T` as self-serializing under `class_name`.
	pub fn register_self_serializing<T, S, D>(&mut self, class_name: &str, serialize: S, deserialize: D) -> &mut Self
	where
		T: HostInstance,
		S: Fn(&T) -> Result<Vec<u8>> + 'static,
		D: Fn(&[u8]) -> Result<(T, usize)> + 'static,
	{
		self.insert_class::<T>(class_name, Reduce::Blob(Box::new(move |object: &HostRef| serialize(downcast::<T>(object)?))));
		self.register_restore(class_name, deserialize)
	}

	/// Register an extra blob parser under `class_name`.
	///
	/// Used for classes stored under one name and restored under another,
	/// such as the host exception class.
	pub fn register_restore<T, D>(&mut self, class_name: &str, deserialize: D) -> &mut Self
	where
		T: HostInstance,
		D: Fn(&[u8]) -> Result<(T, usize)> + 'static,
	{
		let restore = Restore::Blob(Box::new(move |bytes: &[u8]| {
			let (object, consumed) = deserialize(bytes)?;
			Ok((HostRef::new(object), consumed))
		}));
		self.restores.insert(class_name.to_owned(), restore);
		self
	}

	/// Register `T` as reduced to and restored from a state value.
	pub fn register_state<T, S, F>(&mut self, class_name: &str, to_state: S, from_state: F) -> &mut Self
	where
		T: HostInstance,
		S: Fn(&T) -> Result<Value> + 'static,
		F: Fn(Value) -> Result<T> + 'static,
	{
		self.insert_class::<T>(class_name, Reduce::State(Box::new(move |object: &HostRef| to_state(downcast::<T>(object)?))));
		let restore = Restore::State(Box::new(move |state: Value| from_state(state).map(HostRef::new)));
		self.restores.insert(class_name.to_owned(), restore);
		self
	}

	/// Register `T` as stored structurally. Decoding yields a classed [`Record`].
	pub fn register_structural<T, R>(&mut self, class_name: &str, to_record: R) -> &mut Self
	where
		T: HostInstance,
		R: Fn(&T) -> Result<Record> + 'static,
	{
		self.insert_class::<T>(class_name, Reduce::Structural(Box::new(move |object: &HostRef| to_record(downcast::<T>(object)?))));
		self
	}

	/// Register a callable type and how to describe it.
	pub fn register_callable<T, F>(&mut self, describe: F) -> &mut Self
	where
		T: HostInstance,
		F: Fn(&T) -> Result<HandleRepr> + 'static,
	{
		self.callables.insert(TypeId::of::<T>(), Box::new(move |handle: &HostRef| describe(downcast::<T>(handle)?)));
		self
	}

	/// Register a named top-level function.
	pub fn register_function(&mut self, name: &str, callable: HostRef) -> &mut Self {
		self.functions.insert(name.to_owned(), callable);
		self
	}

	/// Install the builder for named closures.
	pub fn with_closure_builder(&mut self, build: impl Fn(&str, Value) -> Result<HostRef> + 'static) -> &mut Self {
		self.closure_builder = Some(Box::new(build));
		self
	}

	/// Install the builder for anonymous functions.
	pub fn with_anonymous_builder(&mut self, build: impl Fn(&str, Value) -> Result<HostRef> + 'static) -> &mut Self {
		self.anonymous_builder = Some(Box::new(build));
		self
	}

	/// Install the hook applying one wrapper layer of a handle chain.
	pub fn with_wrapper(&mut self, wrap: impl Fn(HostRef, &Value) -> Result<HostRef> + 'static) -> &mut Self {
		self.wrapper = Some(Box::new(wrap));
		self
	}

	fn insert_class<T: Any>(&mut self, class_name: &str, reduce: Reduce) {
		let entry = ClassEntry {
			class_name: class_name.to_owned(),
			reduce,
		};
		self.classes.insert(TypeId::of::<T>(), entry);
	}

	fn class(&self, object: &HostRef) -> Result<&ClassEntry> {
		self.classes
			.get(&object.instance_type_id())
			.ok_or_else(|| CodecError::delegation(format!("{:?}", object.instance()), "type is not registered"))
	}
}

impl ObjectModel for Registry {
	fn class_name(&self, object: &HostRef) -> Result<String> {
		Ok(self.class(object)?.class_name.clone())
	}

	fn strategy(&self, object: &HostRef) -> Result<Strategy> {
		Ok(self.class(object)?.reduce.strategy())
	}

	fn to_state_value(&self, object: &HostRef) -> Result<Value> {
		let entry = self.class(object)?;
		match &entry.reduce {
			Reduce::State(to_state) => to_state(object),
			_ => Err(CodecError::delegation(&entry.class_name, "not registered as state")),
		}
	}

	fn from_state_value(&self, class_name: &str, state: Value) -> Result<HostRef> {
		trace!(class_name, "restoring from state");
		match self.restores.get(class_name) {
			Some(Restore::State(from_state)) => from_state(state),
			Some(Restore::Blob(_)) => Err(CodecError::delegation(class_name, "registered as self-serializing")),
			None => Err(CodecError::delegation(class_name, "class is not registered")),
		}
	}

	fn to_structural(&self, object: &HostRef) -> Result<Record> {
		let entry = self.class(object)?;
		match &entry.reduce {
			Reduce::Structural(to_record) => to_record(object),
			_ => Err(CodecError::delegation(&entry.class_name, "not registered as structural")),
		}
	}

	fn self_serialize(&self, object: &HostRef) -> Result<Vec<u8>> {
		let entry = self.class(object)?;
		match &entry.reduce {
			Reduce::Blob(serialize) => serialize(object),
			_ => Err(CodecError::delegation(&entry.class_name, "not registered as self-serializing")),
		}
	}

	fn self_deserialize(&self, class_name: &str, bytes: &[u8]) -> Result<(HostRef, usize)> {
		trace!(class_name, available = bytes.len(), "restoring from blob");
		match self.restores.get(class_name) {
			Some(Restore::Blob(deserialize)) => deserialize(bytes),
			Some(Restore::State(_)) => Err(CodecError::delegation(class_name, "registered as state")),
			None => Err(CodecError::delegation(class_name, "class is not registered")),
		}
	}

	fn describe_handle(&self, handle: &HostRef) -> Result<HandleRepr> {
		let describe = self
			.callables
			.get(&handle.instance_type_id())
			.ok_or_else(|| CodecError::delegation(format!("{:?}", handle.instance()), "callable type is not registered"))?;
		describe(handle)
	}

	fn resolve_callable(&self, name: &str) -> Result<HostRef> {
		self.functions
			.get(name)
			.cloned()
			.ok_or_else(|| CodecError::delegation(name, "function is not registered"))
	}

	fn rebuild_closure(&self, name: &str, captured: Value) -> Result<HostRef> {
		let build = self.closure_builder.as_ref().ok_or_else(|| CodecError::delegation(name, "no closure builder"))?;
		build(name, captured)
	}

	fn rebuild_anonymous(&self, name: &str, captured: Value) -> Result<HostRef> {
		let build = self
			.anonymous_builder
			.as_ref()
			.ok_or_else(|| CodecError::delegation(name, "no anonymous function builder"))?;
		build(name, captured)
	}

	fn wrap_handle(&self, inner: HostRef, wrapper: &Value) -> Result<HostRef> {
		let wrap = self
			.wrapper
			.as_ref()
			.ok_or_else(|| CodecError::delegation(format!("{:?}", inner.instance()), "no handle wrapper"))?;
		wrap(inner, wrapper)
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut classes: Vec<&str> = self.classes.values().map(|entry| entry.class_name.as_str()).collect();
		classes.sort_unstable();
		let mut functions: Vec<&str> = self.functions.keys().map(String::as_str).collect();
		functions.sort_unstable();
		f.debug_struct("Registry")
			.field("classes", &classes)
			.field("callables", &self.callables.len())
			.field("functions", &functions)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests;
