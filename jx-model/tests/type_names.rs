//! End-to-end checks of the public type model API.

use jx_model::{AssembleMode, ClassName, Error, TypeName};

#[test]
fn test_render_parse_round_trip() {
    let canonical = [
        "java.lang.String",
        "T",
        "int",
        "void",
        "long[][]",
        "java.util.List<java.lang.String>",
        "androidx.lifecycle.LiveData<java.util.List<java.lang.String>>",
        "java.util.Map<java.lang.String, java.util.Map<a.K, a.V[]>>",
        "java.lang.Class<?>",
        "java.util.List<? extends java.lang.Number>",
        "java.util.Comparator<? super T>",
        "java.util.List<? extends a.B[]>",
        "java.util.Map<? super int[], ? extends T[][]>",
        "com.Observable<T>[]",
    ];
    for s in canonical {
        let parsed = TypeName::parse(s).unwrap();
        assert_eq!(parsed.to_string(), s);
        assert_eq!(parsed.to_string().parse::<TypeName>().unwrap(), parsed);
    }
}

#[test]
fn test_round_trip_after_whitespace_normalization() {
    let parsed: TypeName = "java.util.Map<java.lang.String,java.util.List< a.B >>"
        .parse()
        .unwrap();
    assert_eq!(
        parsed.to_string(),
        "java.util.Map<java.lang.String, java.util.List<a.B>>"
    );
}

#[test]
fn test_disassemble_chain() {
    let d = TypeName::parse("a.b.Outer<c.d.Inner<e.f.Leaf>>").unwrap();

    let first = d.disassemble();
    assert_eq!(first, TypeName::parse("c.d.Inner<e.f.Leaf>").unwrap());

    let second = first.disassemble();
    assert_eq!(second, TypeName::parse("e.f.Leaf").unwrap());

    let third = second.disassemble();
    assert_eq!(third, second);
}

#[test]
fn test_demo_sequence() {
    let live = "androidx.lifecycle.LiveData<java.util.List<java.lang.String>>";
    let string = TypeName::of::<String>();

    assert!(string.contains(&string));
    assert!(TypeName::parse(live).unwrap().contains(&string));
    assert!(
        !TypeName::parse("androidx.lifecycle.Observer")
            .unwrap()
            .contains(&string)
    );

    let peeled = TypeName::parse(live)
        .unwrap()
        .disassemble()
        .disassemble()
        .disassemble()
        .disassemble();
    assert_eq!(peeled.to_string(), "java.lang.String");

    let activity = ClassName::new("com.zeoflow.app", "Activity");
    assert_eq!(
        string
            .assemble_with(&activity, AssembleMode::Replace)
            .unwrap()
            .to_string(),
        "com.zeoflow.app.Activity"
    );
    assert_eq!(
        string
            .assemble_with(&activity, AssembleMode::Wrap)
            .unwrap()
            .to_string(),
        "com.zeoflow.app.Activity<java.lang.String>"
    );
}

#[test]
fn test_assemble_list_of_string() {
    let list = TypeName::of::<String>().assemble("java.util.List").unwrap();
    assert_eq!(list.to_string(), "java.util.List<java.lang.String>");
    assert_eq!(list, TypeName::of::<Vec<String>>());
}

#[test]
fn test_malformed_inputs_never_yield_a_descriptor() {
    for bad in ["a.B<", "a.B<c.D>>", "a.B<,>", "a.", "", "a.B<c.D, >"] {
        let err = TypeName::parse(bad).unwrap_err();
        assert!(
            matches!(*err, Error::MalformedTypeName { .. }),
            "{bad}: {err}"
        );
    }
}

#[test]
fn test_descriptors_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TypeName>();

    let ty = std::sync::Arc::new(TypeName::parse("java.util.List<a.B>").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ty = ty.clone();
            std::thread::spawn(move || ty.disassemble().to_string())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "a.B");
    }
}
