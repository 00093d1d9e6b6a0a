use super::{SchemaError, build_schema};
use domain::DomainType;
use schema::{Arity, Builtin, OptionRef, ShadowPolicy, Signature};

fn signature() -> Signature {
    Signature::new("Sample", DomainType::Unit)
        .param("n", DomainType::Int64)
        .param("numQubits", DomainType::Int64)
        .param("nested", DomainType::Bool)
        .param("names", DomainType::array_of(DomainType::String))
        .param("span", DomainType::Range)
}

#[test]
fn derives_names_and_aliases_in_declaration_order() {
    let schema = build_schema(&signature(), ShadowPolicy::Rename).unwrap();
    let options = schema.options();

    assert_eq!(options[0].long, "n");
    assert_eq!(options[0].short, Some('n'));
    assert_eq!(options[1].long, "num-qubits");
    assert_eq!(options[1].short, None);
    assert_eq!(options[2].long, "nested");
    assert_eq!(options[2].short, None);
    assert_eq!(options[3].long, "names");
    assert_eq!(options[3].short, None);
    assert_eq!(options[4].long, "span");
    assert_eq!(options[4].short, Some('s'));
}

#[test]
fn arity_follows_type() {
    let schema = build_schema(&signature(), ShadowPolicy::Rename).unwrap();
    let arities: Vec<_> = schema.options().iter().map(|option| option.arity).collect();

    assert_eq!(
        arities,
        [
            Arity::Single,
            Arity::Single,
            Arity::Flag,
            Arity::Greedy,
            Arity::Greedy
        ]
    );
}

#[test]
fn lookup_resolves_flags() {
    let schema = build_schema(&signature(), ShadowPolicy::Rename).unwrap();

    assert_eq!(schema.lookup("--num-qubits"), Some(OptionRef::Parameter(1)));
    assert_eq!(schema.lookup("--NUM-QUBITS"), Some(OptionRef::Parameter(1)));
    assert_eq!(schema.lookup("-n"), Some(OptionRef::Parameter(0)));
    assert_eq!(schema.lookup("--n"), Some(OptionRef::Parameter(0)));
    assert_eq!(schema.lookup("-N"), None);
    assert_eq!(schema.lookup("--numQubits"), None);
    assert_eq!(schema.lookup("num-qubits"), None);
    assert_eq!(schema.lookup("-5"), None);
}

#[test]
fn parameter_alias_beats_builtin_alias() {
    // "span" took '-s' first, so the simulator keeps only its long name
    let schema = build_schema(&signature(), ShadowPolicy::Rename).unwrap();
    let simulator = schema.builtin(Builtin::Simulator).unwrap();

    assert_eq!(simulator.long, "simulator");
    assert!(simulator.shorts.is_empty());
    assert_eq!(schema.lookup("-s"), Some(OptionRef::Parameter(4)));
    assert_eq!(schema.lookup("--simulator"), Some(OptionRef::Builtin(Builtin::Simulator)));
    assert_eq!(schema.lookup("-?"), Some(OptionRef::Builtin(Builtin::Help)));
    assert!(schema.shadowings().is_empty());
}

#[test]
fn shadowed_builtin_is_renamed() {
    let signature = Signature::new("Sample", DomainType::String)
        .param("simulator", DomainType::String)
        .param("version", DomainType::Int64);
    let schema = build_schema(&signature, ShadowPolicy::Rename).unwrap();

    assert_eq!(schema.lookup("--simulator"), Some(OptionRef::Parameter(0)));
    assert_eq!(schema.lookup("-s"), Some(OptionRef::Parameter(0)));
    assert_eq!(schema.lookup("--version"), Some(OptionRef::Parameter(1)));
    assert_eq!(
        schema.lookup("--driver-simulator"),
        Some(OptionRef::Builtin(Builtin::Simulator))
    );
    assert_eq!(
        schema.lookup("--driver-version"),
        Some(OptionRef::Builtin(Builtin::Version))
    );

    let shadowings = schema.shadowings();
    assert_eq!(shadowings.len(), 2);
    assert_eq!(shadowings[0].builtin, Builtin::Simulator);
    assert_eq!(shadowings[0].parameter, "simulator");
    assert_eq!(shadowings[0].renamed_to.as_deref(), Some("driver-simulator"));
}

#[test]
fn shadowed_builtin_is_omitted() {
    let signature = Signature::new("Sample", DomainType::String).param("help", DomainType::Bool);
    let schema = build_schema(&signature, ShadowPolicy::Omit).unwrap();

    assert_eq!(schema.lookup("--help"), Some(OptionRef::Parameter(0)));
    assert_eq!(schema.lookup("-h"), Some(OptionRef::Parameter(0)));
    assert_eq!(schema.lookup("--driver-help"), None);
    assert_eq!(schema.lookup("-?"), None);
    assert!(schema.builtin(Builtin::Help).is_none());
    assert_eq!(schema.shadowings()[0].renamed_to, None);
}

#[test]
fn rename_falls_back_to_omission_when_alternate_is_taken() {
    let signature = Signature::new("Sample", DomainType::Unit)
        .param("help", DomainType::Bool)
        .param("driverHelp", DomainType::Bool);
    let schema = build_schema(&signature, ShadowPolicy::Rename).unwrap();

    assert_eq!(schema.lookup("--driver-help"), Some(OptionRef::Parameter(1)));
    assert!(schema.builtin(Builtin::Help).is_none());
    assert_eq!(schema.shadowings()[0].renamed_to, None);
}

#[test]
fn later_parameter_loses_contested_alias() {
    let signature = Signature::new("Sample", DomainType::Unit)
        .param("count", DomainType::Int64)
        .param("c", DomainType::Int64);
    let schema = build_schema(&signature, ShadowPolicy::Rename).unwrap();

    assert_eq!(schema.option(0).short, Some('c'));
    assert_eq!(schema.option(1).long, "c");
    assert_eq!(schema.option(1).short, None);
}

#[test]
fn colliding_long_names_are_rejected() {
    let signature = Signature::new("Sample", DomainType::Unit)
        .param("myValue", DomainType::Int64)
        .param("MyValue", DomainType::Int64);

    assert_eq!(
        build_schema(&signature, ShadowPolicy::Rename).unwrap_err(),
        SchemaError::DuplicateOptionName {
            name: "my-value".into(),
            first: "myValue".into(),
            second: "MyValue".into(),
        }
    );
}

#[test]
fn nested_arrays_are_rejected() {
    let ty = DomainType::array_of(DomainType::array_of(DomainType::Int64));
    let signature = Signature::new("Sample", DomainType::Unit).param("grid", ty);

    assert!(matches!(
        build_schema(&signature, ShadowPolicy::Rename),
        Err(SchemaError::UnsupportedType { .. })
    ));
}
