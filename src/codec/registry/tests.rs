use crate::codec::test_support::{Blob, Callable, Counter, Point, sample_registry};
use crate::codec::{CodecError, HandleRepr, HostRef, ObjectModel, Registry, Strategy, Value};

#[test]
fn registered_types_report_class_and_strategy() {
	let registry = sample_registry();
	let cases = [
		(HostRef::new(Blob(vec![1])), "Blob", Strategy::SelfSerializing),
		(HostRef::new(Counter(1.0)), "Counter", Strategy::State),
		(HostRef::new(Point { x: 0.0, y: 0.0 }), "Point", Strategy::Structural),
	];
	for (object, class_name, strategy) in cases {
		assert_eq!(registry.class_name(&object).expect("class"), class_name);
		assert_eq!(registry.strategy(&object).expect("strategy"), strategy);
	}
}

#[test]
fn hooks_are_not_interchangeable() {
	let registry = sample_registry();
	let counter = HostRef::new(Counter(1.0));
	assert!(matches!(registry.self_serialize(&counter), Err(CodecError::Delegation { class_name, .. }) if class_name == "Counter"));
	assert!(registry.to_structural(&counter).is_err());
	assert!(registry.self_deserialize("Counter", &[0]).is_err());
	assert!(registry.from_state_value("Blob", Value::empty()).is_err());
}

#[test]
fn unknown_types_and_names_fail() {
	let registry = Registry::new();
	assert!(matches!(registry.class_name(&HostRef::new(Blob(Vec::new()))), Err(CodecError::Delegation { .. })));
	assert!(matches!(registry.resolve_callable("sin"), Err(CodecError::Delegation { class_name, .. }) if class_name == "sin"));
	assert!(registry.rebuild_anonymous("@(x) x", Value::empty()).is_err());
	assert!(registry.describe_handle(&HostRef::new(Callable::Named("f".to_owned()))).is_err());
}

#[test]
fn callables_describe_and_resolve() {
	let registry = sample_registry();
	let repr = registry.describe_handle(&HostRef::new(Callable::Named("cos".to_owned()))).expect("describe");
	assert_eq!(repr, HandleRepr::Named { name: "cos".to_owned() });

	let resolved = registry.resolve_callable("sin").expect("resolve");
	assert_eq!(resolved.downcast_ref::<Callable>(), Some(&Callable::Named("sin".to_owned())));
}

#[test]
fn debug_lists_registered_names() {
	let rendered = format!("{:?}", sample_registry());
	assert!(rendered.contains("\"Blob\""));
	assert!(rendered.contains("\"sin\""));
}
