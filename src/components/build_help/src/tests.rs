use super::build_help;
use build_schema::build_schema;
use domain::DomainType;
use indoc::indoc;
use schema::{ShadowPolicy, Signature};

#[test]
fn lists_every_option_with_its_documentation() {
    let signature = Signature::new("Sample", DomainType::Unit)
        .with_summary("Runs a sample.")
        .documented_param("numQubits", DomainType::Int64, "How many qubits to use.")
        .documented_param(
            "basis",
            DomainType::array_of(DomainType::Pauli),
            "Measurement bases,\none per qubit.",
        )
        .param("verbose", DomainType::Bool);

    let schema = build_schema(&signature, ShadowPolicy::Rename).unwrap();

    assert_eq!(
        build_help(&schema, "sample"),
        indoc! {"
            Runs a sample.

            Usage:
              sample [options]

            Options:
              -n, --num-qubits <Int64>    How many qubits to use.
              -b, --basis <Pauli>...      Measurement bases,
                                          one per qubit.
              -v, --verbose [true|false]
              -s, --simulator <String>    The name of the simulator to use.
              --version                   Show version information.
              -h, -?, --help              Show help and usage information.
        "}
    );
}

#[test]
fn explains_shadowed_builtins() {
    let signature = Signature::new("Sample", DomainType::Unit)
        .param("simulator", DomainType::String)
        .param("help", DomainType::Bool);

    let schema = build_schema(&signature, ShadowPolicy::Omit).unwrap();

    assert_eq!(
        build_help(&schema, "sample"),
        indoc! {"
            Usage:
              sample [options]

            Options:
              -s, --simulator <String>
              -h, --help [true|false]
              --version                 Show version information.

            Notes:
              Parameter 'simulator' uses '--simulator', the built-in option is unavailable.
              Parameter 'help' uses '--help', the built-in option is unavailable.
        "}
    );
}

#[test]
fn documentation_is_not_altered() {
    let documentation = "Uses `--raw` *markdown*, keeps  double  spaces.";
    let signature = Signature::new("Sample", DomainType::Unit).documented_param(
        "raw",
        DomainType::String,
        documentation,
    );

    let schema = build_schema(&signature, ShadowPolicy::Rename).unwrap();
    assert!(build_help(&schema, "sample").contains(documentation));
}
