use bhanai::{BufferConsole, ErrorCode, Interpreter, ScriptError, Value};

fn run(source: &str) -> (Result<(), ScriptError>, Vec<String>) {
    run_with_input(source, Vec::<String>::new())
}

fn run_with_input<I>(source: &str, input: I) -> (Result<(), ScriptError>, Vec<String>)
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut interpreter = Interpreter::new(BufferConsole::with_input(input));
    let result = interpreter.run_source(source);
    (result, interpreter.into_console().into_output())
}

fn error_code(source: &str) -> ErrorCode {
    run(source).0.expect_err("script should fail").code
}

#[test]
fn scenario_a_additive_print() {
    let (result, output) = run("rakha(\"x\", 5)\nbhanai(x + 3)");
    assert!(result.is_ok());
    assert_eq!(output, ["8"]);
}

#[test]
fn scenario_b_constant_cannot_be_rebound() {
    assert_eq!(
        error_code("sadai_rakha(\"PI\", 3)\nrakha(\"PI\", 4)"),
        ErrorCode::Reassignment
    );
    assert_eq!(
        error_code("sadai_rakha(\"PI\", 3)\nsadai_rakha(\"PI\", 3)"),
        ErrorCode::Reassignment
    );
    assert_eq!(
        error_code("rakha(\"n\", 1)\nsadai_rakha(\"n\", 2)"),
        ErrorCode::Reassignment
    );
}

#[test]
fn scenario_c_else_only() {
    let (result, output) = run("yadi 1 > 2:\n    bhanai(\"if\")\naru:\n    bhanai(\"else\")");
    assert!(result.is_ok());
    assert_eq!(output, ["else"]);
}

#[test]
fn scenario_d_keys_in_insertion_order() {
    let mut interpreter = Interpreter::new(BufferConsole::new());
    let keys = interpreter
        .evaluate(r#"chaabiList({"a": 1, "b": 2})"#)
        .unwrap();
    assert_eq!(keys, Value::array(vec!["a".into(), "b".into()]));
}

#[test]
fn scenario_e_multi_line_array_matches_single_line() {
    let (_, split) = run("rakha(\"xs\", [\n  1, \"do\",\n  [3]\n])\nbhanai(xs, lambaiList(xs))");
    let (_, single) = run("rakha(\"xs\", [1, \"do\", [3]])\nbhanai(xs, lambaiList(xs))");
    assert_eq!(split, single);
    assert_eq!(split, [r#"[1,"do",[3]] 3"#]);
}

#[test]
fn additive_mixes_into_concatenation() {
    let (_, output) = run("bhanai(1 + 2 + \"a\", \"a\" + 1, jod(1, 2))");
    assert_eq!(output, ["12a a1 3"]);
}

#[test]
fn push_then_pop_round_trips() {
    let source = "\
rakha(\"xs\", [1, 2])
rakha(\"ys\", xs)
bhanai(hatauList(thapList(ys, 9)) == 9)
bhanai(xs, lambaiList(xs))";
    let (result, output) = run(source);
    assert!(result.is_ok());
    assert_eq!(output, ["true", "[1,2] 2"]);
}

#[test]
fn equality_never_coerces() {
    let (_, output) = run("bhanai(5 == \"5\", 5 == 5, sachho == 1, \"a\" != \"b\")");
    assert_eq!(output, ["false true false true"]);
}

#[test]
fn index_outside_array_is_a_range_error() {
    for index in ["-1", "3", "100"] {
        let source = format!("rakha(\"xs\", [1, 2, 3])\nbhanai(xs[{index}])");
        assert_eq!(error_code(&source), ErrorCode::Range, "index {index}");
    }
    let (_, output) = run("rakha(\"xs\", [1, 2, 3])\nbhanai(xs[0], xs[2])");
    assert_eq!(output, ["1 3"]);
}

#[test]
fn division_by_zero_is_arithmetic_for_any_number() {
    for dividend in ["0", "1", "-7.5"] {
        let source = format!("bhanai(bhaag({dividend}, 0))");
        assert_eq!(error_code(&source), ErrorCode::Arithmetic);
    }
}

#[test]
fn prompts_suspend_until_input_arrives() {
    let source = "\
rakha(\"naam\", sodhString(\"Naam? \"))
rakha(\"umer\", sodhNumber(\"Umer? \"))
bhanai(\"Namaste\", naam, umer + 1)";
    let mut interpreter = Interpreter::new(BufferConsole::with_input(["  Ram \n", " 41 "]));
    interpreter.run_source(source).unwrap();
    let console = interpreter.console();
    assert_eq!(console.prompts(), ["Naam? ", "Umer? "]);
    assert_eq!(console.output(), ["Namaste Ram 42"]);
}

#[test]
fn non_numeric_answer_is_an_input_format_error() {
    let (result, _) = run_with_input("bhanai(sodhNumber(\"n? \"))", ["ek"]);
    assert_eq!(result.unwrap_err().code, ErrorCode::InputFormat);
}

#[test]
fn comments_are_ignored_everywhere() {
    let source = "\
# top
bhanai(\"# not a comment\") # comment
\"\"\"
bhanai(\"hidden\")
\"\"\"
bhanai(\"tippani\") tippani trailing";
    let (result, output) = run(source);
    assert!(result.is_ok());
    assert_eq!(output, ["# not a comment", "tippani"]);
}

#[test]
fn objects_print_indented() {
    let (_, output) =
        run("rakha(\"o\", {naam: \"Sita\", \"umer\": 30})\nbhanai(o)\nbhanai(o.naam)");
    assert_eq!(output, ["{\n  \"naam\": \"Sita\",\n  \"umer\": 30\n}", "Sita"]);
}

#[test]
fn bindings_are_fresh_per_interpreter() {
    let mut first = Interpreter::new(BufferConsole::new());
    first.run_source("rakha(\"x\", 1)").unwrap();
    let mut second = Interpreter::new(BufferConsole::new());
    let err = second.run_source("bhanai(x)").unwrap_err();
    assert_eq!(err.code, ErrorCode::UndefinedName);
}
