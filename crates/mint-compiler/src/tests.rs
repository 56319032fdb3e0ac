use crate::compile;

struct Example<'a> {
    types: &'a [&'a str],
    diagnostics: &'a [&'a str],
    output: &'a str,
}

fn example(source: &str, example: Example<'_>) {
    let result = compile(source);

    let diagnostics: Vec<String> = result
        .diagnostics
        .iter()
        .map(|diagnostic| diagnostic.kind.to_string())
        .collect();

    assert_eq!(diagnostics, example.diagnostics, "diagnostics mismatch");
    assert_eq!(result.statement_types, example.types, "type list mismatch");
    assert_eq!(result.output, example.output, "output mismatch");
}

#[test]
fn test_annotated_var() {
    example(
        "var x: number = 1",
        Example {
            types: &["number"],
            diagnostics: &[],
            output: "var x = 1",
        },
    );
}

#[test]
fn test_mismatched_initializer() {
    example(
        "var x: number = \"hi\"",
        Example {
            types: &["number"],
            diagnostics: &[
                "Cannot assign initialiser of type 'string' to variable with declared type 'number'.",
            ],
            output: "var x = \"hi\"",
        },
    );
}

#[test]
fn test_type_alias_is_dropped() {
    example(
        "type P = { x: number, y: number }; var p: P = { x: 1, y: 2 }",
        Example {
            types: &["{ x: number, y: number }", "{ x: number, y: number }"],
            diagnostics: &[],
            output: "var p = { x: 1, y: 2 }",
        },
    );
}

#[test]
fn test_generic_call_with_inference() {
    example(
        "var id = function <T>(x: T): T { return x }; id(1)",
        Example {
            types: &["(x: T) => T", "number"],
            diagnostics: &[],
            output: "var id = function (x) { return x };\nid(1)",
        },
    );
}

#[test]
fn test_return_type_mismatch() {
    example(
        "var f = function (x: number): string { return x }",
        Example {
            types: &["(x: number) => string"],
            diagnostics: &["Returned type 'number' does not match declared return type 'string'."],
            output: "var f = function (x) { return x }",
        },
    );
}

#[test]
fn test_argument_type_mismatch() {
    example(
        "var f = function (x: number): number { return x }; f(\"hi\")",
        Example {
            types: &["(x: number) => number", "number"],
            diagnostics: &["Expected argument of type 'number', but got 'string'."],
            output: "var f = function (x) { return x };\nf(\"hi\")",
        },
    );
}

#[test]
fn test_explicit_type_arguments_are_stripped() {
    example(
        "var id = function <T>(x: T): T { return x }; id<string>(\"hi\")",
        Example {
            types: &["(x: T) => T", "string"],
            diagnostics: &[],
            output: "var id = function (x) { return x };\nid(\"hi\")",
        },
    );
}

#[test]
fn test_named_function_keeps_its_name() {
    example(
        "var f = function add(a: number, b: number): number { return a }",
        Example {
            types: &["(a: number, b: number) => number"],
            diagnostics: &[],
            output: "var f = function add(a, b) { return a }",
        },
    );
}

#[test]
fn test_assignment_survives_stripping() {
    example(
        "var x = 1; x = 2",
        Example {
            types: &["number", "number"],
            diagnostics: &[],
            output: "var x = 1;\nx = 2",
        },
    );
}

#[test]
fn test_nested_type_alias_is_dropped() {
    example(
        "var f = function (): number { type N = number; var n: N = 1; return n }",
        Example {
            types: &["() => number"],
            diagnostics: &[],
            output: "var f = function () { var n = 1; return n }",
        },
    );
}

#[test]
fn test_diagnostic_positions_are_line_and_column() {
    let source = "var x = 1;\nvar y: number = \"hi\"";
    let result = compile(source);
    let messages: Vec<String> = result
        .diagnostics
        .iter()
        .map(|diagnostic| diagnostic.message(source))
        .collect();
    assert_eq!(
        messages,
        vec![
            "Cannot assign initialiser of type 'string' to variable with declared type 'number'. at 2:17"
        ]
    );
}

#[test]
fn test_stripped_output_checks_cleanly() {
    for source in [
        "var x: number = 1",
        "type P = { x: number, y: number }; var p: P = { x: 1, y: 2 }",
        "var id = function <T>(x: T): T { return x }; id(1)",
        "var f = function (x: number): number { return x }; f(2)",
    ] {
        let first = compile(source);
        assert!(
            first.diagnostics.is_empty(),
            "unexpected diagnostics for {source:?}"
        );

        let second = compile(&first.output);
        assert!(
            second.diagnostics.is_empty(),
            "stripped output of {source:?} no longer checks: {:?}",
            second
                .diagnostics
                .iter()
                .map(|diagnostic| diagnostic.kind.to_string())
                .collect::<Vec<String>>()
        );
    }
}

#[test]
fn test_emitted_annotations_round_trip() {
    // Emitting before any transform keeps the annotations; the re-parsed
    // program must check to the same type list.
    let source = "type P = { x: number }; var p: P = { x: 1 }";

    let mut db = mint_ast::Database::new();
    let mut diagnostics = mint_diagnostic::Diagnostics::new();
    let module = mint_parser::parse(&mut db, source, &mut diagnostics);
    mint_check::bind(&mut db, module, &mut diagnostics);
    let emitted = crate::emit(&db, module);

    assert_eq!(emitted, "type P = { x: number };\nvar p: P = { x: 1 }");

    let reparsed = compile(&emitted);
    assert!(reparsed.diagnostics.is_empty());
    assert_eq!(
        reparsed.statement_types,
        vec!["{ x: number }", "{ x: number }"]
    );
}
