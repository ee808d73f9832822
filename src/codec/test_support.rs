use crate::codec::{CodecError, HandleRepr, HostRef, Record, Registry, Result, Value};

/// Opaque host object stored as its raw bytes behind a one-byte length.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Blob(pub Vec<u8>);

/// Host object stored as its state value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Counter(pub f64);

/// Host object stored structurally.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Point {
	pub x: f64,
	pub y: f64,
}

/// Host callable.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Callable {
	Named(String),
	Closure(String, Value),
	Wrapped(Box<Callable>, Value),
}

pub(crate) fn blob_bytes(blob: &Blob) -> Result<Vec<u8>> {
	let len = u8::try_from(blob.0.len()).map_err(|_| CodecError::delegation("Blob", "payload too long"))?;
	let mut out = vec![len];
	out.extend_from_slice(&blob.0);
	Ok(out)
}

pub(crate) fn parse_blob(bytes: &[u8]) -> Result<(Blob, usize)> {
	let Some((&len, rest)) = bytes.split_first() else {
		return Err(CodecError::delegation("Blob", "missing length"));
	};
	let len = usize::from(len);
	let payload = rest.get(..len).ok_or_else(|| CodecError::delegation("Blob", "short payload"))?;
	Ok((Blob(payload.to_vec()), len + 1))
}

/// Registry covering every strategy and handle form.
pub(crate) fn sample_registry() -> Registry {
	let mut registry = Registry::new();
	registry
		.register_self_serializing::<Blob, _, _>("Blob", blob_bytes, parse_blob)
		.register_state::<Counter, _, _>(
			"Counter",
			|counter| Ok(Value::from(counter.0)),
			|state| {
				let value = state
					.as_numeric()
					.and_then(|array| array.to_vec::<f64>())
					.and_then(|items| items.first().copied())
					.ok_or_else(|| CodecError::delegation("Counter", "state is not a double"))?;
				Ok(Counter(value))
			},
		)
		.register_structural::<Point, _>("Point", |point| Record::scalar(vec![("x", Value::from(point.x)), ("y", Value::from(point.y))]))
		.register_callable::<Callable, _>(|callable| {
			Ok(match callable {
				Callable::Named(name) => HandleRepr::Named { name: name.clone() },
				Callable::Closure(name, captured) => HandleRepr::Closure {
					name: name.clone(),
					captured: captured.clone(),
				},
				Callable::Wrapped(inner, wrapper) => HandleRepr::Parented {
					chain: vec![wrapper.clone(), Value::Handle(HostRef::new((**inner).clone()))],
				},
			})
		})
		.register_function("sin", HostRef::new(Callable::Named("sin".to_owned())))
		.with_closure_builder(|name, captured| Ok(HostRef::new(Callable::Closure(name.to_owned(), captured))))
		.with_wrapper(|inner, wrapper| {
			let inner = inner
				.downcast_ref::<Callable>()
				.cloned()
				.ok_or_else(|| CodecError::delegation("Callable", "foreign inner handle"))?;
			Ok(HostRef::new(Callable::Wrapped(Box::new(inner), wrapper.clone())))
		});
	registry
}
