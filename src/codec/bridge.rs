use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::codec::{CodecError, HandleKind, Record, Result, Value};

/// Host-owned instance that can sit inside a [`Value`].
///
/// Implemented for every `Any + Debug + PartialEq + Send + Sync` type.
pub trait HostInstance: Any + fmt::Debug + Send + Sync {
	/// Upcast for downcasting.
	fn as_any(&self) -> &dyn Any;

	/// Equality against another instance of possibly different type.
	fn dyn_eq(&self, other: &dyn HostInstance) -> bool;
}

impl<T> HostInstance for T
where
	T: Any + fmt::Debug + PartialEq + Send + Sync,
{
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn dyn_eq(&self, other: &dyn HostInstance) -> bool {
		other.as_any().downcast_ref::<T>().is_some_and(|other| self == other)
	}
}

/// Shared reference to a live host object or callable.
#[derive(Clone)]
pub struct HostRef(Arc<dyn HostInstance>);

impl HostRef {
	/// Wrap a host instance.
	pub fn new<T: HostInstance>(instance: T) -> Self {
		Self(Arc::new(instance))
	}

	/// Concrete type of the hosted instance.
	pub fn instance_type_id(&self) -> TypeId {
		<dyn Any>::type_id(self.0.as_any())
	}

	/// Borrow the instance as `T`.
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.0.as_any().downcast_ref::<T>()
	}

	/// Borrow the instance as a trait object.
	pub fn instance(&self) -> &dyn HostInstance {
		self.0.as_ref()
	}
}

impl PartialEq for HostRef {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0) || self.0.dyn_eq(other.0.as_ref())
	}
}

impl fmt::Debug for HostRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("HostRef").field(&self.0).finish()
	}
}

/// How a host object is reduced for the stream. The discriminant is the wire byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Strategy {
	/// Object emits an opaque byte blob and parses it back itself.
	SelfSerializing = 0,
	/// Object is reduced to a state [`Value`] and restored from it.
	State = 1,
	/// Object is stored as a [`Record`] and comes back as one, class name attached.
	Structural = 2,
}

impl Strategy {
	/// Wire byte.
	pub fn code(self) -> u8 {
		self as u8
	}

	/// Parse a wire byte.
	pub fn from_code(code: u8) -> Option<Self> {
		match code {
			0 => Some(Self::SelfSerializing),
			1 => Some(Self::State),
			2 => Some(Self::Structural),
			_ => None,
		}
	}
}

/// Stream-level description of a callable handle.
#[derive(Debug, Clone, PartialEq)]
pub enum HandleRepr {
	/// Reference to a named top-level function.
	Named {
		/// Function name.
		name: String,
	},
	/// Named closure with captured state.
	Closure {
		/// Function name.
		name: String,
		/// Captured workspace, normally a record.
		captured: Value,
	},
	/// Anonymous function with captured state.
	Anonymous {
		/// Source text or name of the anonymous function.
		name: String,
		/// Captured workspace, normally a record.
		captured: Value,
	},
	/// Wrapped handle chain: outermost wrapper first, innermost handle last.
	Parented {
		/// Chain elements.
		chain: Vec<Value>,
	},
}

impl HandleRepr {
	/// Wire sub-kind.
	pub fn kind(&self) -> HandleKind {
		match self {
			Self::Named { .. } => HandleKind::Named,
			Self::Closure { .. } => HandleKind::Closure,
			Self::Anonymous { .. } => HandleKind::Anonymous,
			Self::Parented { .. } => HandleKind::Parented,
		}
	}
}

/// Capability interface to the host object model.
///
/// The codec never inspects host types itself; every object or callable
/// question goes through this trait. All methods default to a delegation
/// failure so partial models only implement what they support.
pub trait ObjectModel {
	/// Class name of a host object.
	fn class_name(&self, object: &HostRef) -> Result<String> {
		Err(unsupported(object, "class_name"))
	}

	/// Serialization strategy the object asks for.
	fn strategy(&self, object: &HostRef) -> Result<Strategy> {
		Err(unsupported(object, "strategy"))
	}

	/// Reduce a state-strategy object to its state value.
	fn to_state_value(&self, object: &HostRef) -> Result<Value> {
		Err(unsupported(object, "to_state_value"))
	}

	/// Restore a state-strategy object.
	fn from_state_value(&self, class_name: &str, state: Value) -> Result<HostRef> {
		let _ = state;
		Err(CodecError::delegation(class_name, "no from_state_value hook"))
	}

	/// Reduce a structural object to its record form.
	fn to_structural(&self, object: &HostRef) -> Result<Record> {
		Err(unsupported(object, "to_structural"))
	}

	/// Produce the opaque blob of a self-serializing object.
	fn self_serialize(&self, object: &HostRef) -> Result<Vec<u8>> {
		Err(unsupported(object, "self_serialize"))
	}

	/// Parse a self-serializing object from the front of `bytes`,
	/// returning the object and the number of bytes consumed.
	fn self_deserialize(&self, class_name: &str, bytes: &[u8]) -> Result<(HostRef, usize)> {
		let _ = bytes;
		Err(CodecError::delegation(class_name, "no self_deserialize hook"))
	}

	/// Describe a live callable for the stream.
	fn describe_handle(&self, handle: &HostRef) -> Result<HandleRepr> {
		Err(unsupported(handle, "describe_handle"))
	}

	/// Resolve a function name to a callable.
	fn resolve_callable(&self, name: &str) -> Result<HostRef> {
		Err(CodecError::delegation(name, "no resolve_callable hook"))
	}

	/// Rebuild a named closure from its captured state.
	fn rebuild_closure(&self, name: &str, captured: Value) -> Result<HostRef> {
		let _ = captured;
		Err(CodecError::delegation(name, "no rebuild_closure hook"))
	}

	/// Rebuild an anonymous function from its captured state.
	fn rebuild_anonymous(&self, name: &str, captured: Value) -> Result<HostRef> {
		let _ = captured;
		Err(CodecError::delegation(name, "no rebuild_anonymous hook"))
	}

	/// Apply one wrapping layer around `inner`.
	fn wrap_handle(&self, inner: HostRef, wrapper: &Value) -> Result<HostRef> {
		let _ = wrapper;
		Err(unsupported(&inner, "wrap_handle"))
	}
}

fn unsupported(object: &HostRef, hook: &str) -> CodecError {
	CodecError::delegation(format!("{:?}", object.instance()), format_args!("no {hook} hook"))
}

/// Object model for plain data: every delegation request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObjects;

impl ObjectModel for NoObjects {}
