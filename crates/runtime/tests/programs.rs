use frontend::lexer::Lexer;
use frontend::parser::Parser;
use pretty_assertions::assert_eq;
use rstest::rstest;

use runtime::environment::EnvError;
use runtime::interpreter::{EvalConfig, Interpreter, InterpreterError};
use runtime::registry::RegistryError;
use runtime::values::ValueError;

struct Run {
    output: String,
    // 0-based line and kind of the runtime error, if any
    error: Option<(u64, InterpreterError)>,
}

fn run_with_depth(source: &str, max_call_depth: usize) -> Run {
    let mut lexer = Lexer::default();
    lexer.tokenize(source.to_string()).unwrap();

    let program = Parser::default().build_ast(lexer.tokens).unwrap();

    let mut interpr = Interpreter::with_config(Vec::new(), EvalConfig { max_call_depth });
    let error = interpr
        .execute_program(&program)
        .err()
        .map(|e| (e.line(), e.into_kind()));

    Run {
        output: String::from_utf8(interpr.into_output()).unwrap(),
        error,
    }
}

fn run(source: &str) -> Run {
    run_with_depth(source, EvalConfig::default().max_call_depth)
}

fn run_ok(source: &str) -> String {
    let res = run(source);
    assert!(res.error.is_none(), "unexpected error: {:?}", res.error);

    res.output
}

#[rstest]
#[case("PRINT \"hi\"", "hi\n")]
#[case("PRINT 'hi'", "hi\n")]
#[case("PRINT \"\"", "\n")]
#[case("PRINT \"it's\"", "it's\n")]
#[case("PRINT 'say \"hi\"'", "say \"hi\"\n")]
fn print_string_strips_one_quote_pair(#[case] stmt: &str, #[case] expected: &str) {
    assert_eq!(run_ok(&format!("MAIN\n{stmt}\nEND")), expected);
}

#[test]
fn declare_then_print() {
    assert_eq!(run_ok("MAIN\nDECLARE x = 5\nPRINT x\nEND"), "5\n");
}

#[rstest]
#[case("x = 5 THEN + 3 THEN - 2", 6)]
#[case("x = 10 THEN / 2 THEN * 5", 25)]
#[case("x = 2 THEN * 3 THEN + 1 THEN * 2", 14)]
#[case("x = -7 THEN / 2", -3)]
#[case("x = 3 THEN == 3", 1)]
#[case("x = 3 THEN > 4", 0)]
#[case("x = 1 THEN AND 0 THEN OR 5", 1)]
#[case("x = true", 1)]
#[case("x = false THEN OR false", 0)]
fn chain_applies_left_to_right(#[case] stmt: &str, #[case] expected: i64) {
    let source = format!("MAIN\n{stmt}\nPRINT x\nEND");

    assert_eq!(run_ok(&source), format!("{expected}\n"));
}

#[test]
fn chain_operands_read_variables() {
    let source = "
MAIN
    DECLARE a = 4
    DECLARE b = 6
    x = a THEN * b THEN - a
    PRINT x
END";

    assert_eq!(run_ok(source), "20\n");
}

#[test]
fn undeclared_function_stops_execution() {
    let source = "
MAIN
    PRINT 'before'
    FOO()
    PRINT 'after'
END";

    let res = run(source);

    assert_eq!(res.output, "before\n");
    assert!(matches!(
        res.error,
        Some((3, InterpreterError::InterpFromRegistry(RegistryError::UndefinedFunction(ref f)))) if f == "FOO"
    ));
}

#[rstest]
#[case("F(1)", 1)]
#[case("F()", 0)]
#[case("F(1, 2, 3)", 3)]
fn arity_mismatch(#[case] call: &str, #[case] found: usize) {
    let source = format!("FUNCTION F(a, b)\nPRINT a\nEND\nMAIN\n{call}\nPRINT 'unreachable'\nEND");

    let res = run(&source);

    assert_eq!(res.output, "");
    assert!(matches!(
        res.error,
        Some((_, InterpreterError::ArityMismatch(ref f, 2, n))) if f == "F" && n == found
    ));
}

#[test]
fn while_counter_runs_five_times() {
    // There is no `<`, `i < 5` is written `5 > i`
    let source = "
MAIN
    DECLARE i = 0
    DECLARE go = true
    WHILE go
        PRINT 'pass'
        i = i THEN + 1
        go = 5 THEN > i
    ENDWHILE
    PRINT i
END";

    assert_eq!(run_ok(source), "pass\npass\npass\npass\npass\n5\n");
}

#[test]
fn callee_resolves_caller_variable() {
    // `limit` is never declared in `inner` nor passed to it
    let source = "
FUNCTION inner()
    PRINT limit
    r = limit THEN * 2
    RETURN r
END

FUNCTION outer()
    DECLARE limit = 21
    got = inner()
    RETURN got
END

MAIN
    x = outer()
    PRINT x
END";

    assert_eq!(run_ok(source), "21\n42\n");
}

#[test]
fn callee_writes_stay_local() {
    assert_eq!(
        run_ok(include_str!("programs/scopes.tally")),
        "report sees\n1\nreport sees\n101\n101\n1\n"
    );
}

#[test]
fn division_by_zero_keeps_earlier_output() {
    let source = "
MAIN
    PRINT 'one'
    DECLARE zero = 0
    x = 9 THEN + 1 THEN / zero THEN + 1
    PRINT 'two'
END";

    let res = run(source);

    assert_eq!(res.output, "one\n");
    assert!(matches!(
        res.error,
        Some((4, InterpreterError::InterpFromValue(ValueError::DivisionByZero(10))))
    ));
}

#[test]
fn recursion() {
    assert_eq!(
        run_ok(include_str!("programs/factorial.tally")),
        "1\n2\n6\n24\n120\n720\n"
    );
}

#[test]
fn unbounded_recursion_hits_depth_limit() {
    let source = "
FUNCTION down(n)
    m = n THEN - 1
    down(m)
END

MAIN
    PRINT 'start'
    down(0)
    PRINT 'unreachable'
END";

    let res = run_with_depth(source, 32);

    assert_eq!(res.output, "start\n");
    // Reported on the innermost call
    assert!(matches!(
        res.error,
        Some((3, InterpreterError::InterpFromEnv(EnvError::RecursionLimitExceeded(32))))
    ));
}

const RUNAWAY: &str = "
FUNCTION down(n)
    m = n THEN - 1
    x = down(m)
    RETURN x
END

MAIN
    r = down(0)
    PRINT r
END";

#[test]
fn default_depth_limit_on_test_thread() {
    let res = run(RUNAWAY);

    assert_eq!(res.output, "");
    assert!(matches!(
        res.error,
        Some((3, InterpreterError::InterpFromEnv(EnvError::RecursionLimitExceeded(512))))
    ));
}

#[rstest]
#[case(2_000)]
#[case(20_000)]
fn large_depth_limit_still_reported(#[case] limit: usize) {
    let res = run_with_depth(RUNAWAY, limit);

    assert!(matches!(
        res.error,
        Some((3, InterpreterError::InterpFromEnv(EnvError::RecursionLimitExceeded(n)))) if n == limit
    ));
}

#[test]
fn last_return_wins() {
    let source = "
FUNCTION pick()
    DECLARE r = 1
    RETURN r
    r = 2
    RETURN r
    PRINT 'after return'
END

MAIN
    x = pick()
    PRINT x
END";

    assert_eq!(run_ok(source), "after return\n2\n");
}

#[test]
fn return_inside_branches() {
    let source = "
FUNCTION sign(n)
    DECLARE s = 0
    pos = n THEN > 0
    IF pos
        s = 1
        RETURN s
    ELSE
        neg = 0 THEN > n
        IF neg
            s = -1
            RETURN s
        ENDIF
    ENDIF
    RETURN s
END

MAIN
    a = sign(7)
    b = sign(-7)
    c = sign(0)
    PRINT a
    PRINT b
    PRINT c
END";

    assert_eq!(run_ok(source), "1\n-1\n0\n");
}

#[test]
fn no_stale_return_value() {
    let source = "
FUNCTION give()
    DECLARE v = 7
    RETURN v
END

FUNCTION nothing()
    PRINT 'nothing'
END

MAIN
    a = give()
    PRINT a
    b = nothing()
    PRINT 'unreachable'
END";

    let res = run(source);

    assert_eq!(res.output, "7\nnothing\n");
    assert!(matches!(
        res.error,
        Some((13, InterpreterError::TypeMismatch(ref f))) if f == "nothing"
    ));
}

#[test]
fn return_reads_only_local_frame() {
    let source = "
FUNCTION leak()
    RETURN outer
END

MAIN
    DECLARE outer = 3
    x = leak()
END";

    let res = run(source);

    assert!(matches!(
        res.error,
        Some((2, InterpreterError::InterpFromEnv(EnvError::UndefinedLocalVariable(ref v)))) if v == "outer"
    ));
}

#[test]
fn print_undeclared_variable() {
    let res = run("MAIN\nPRINT 'ok'\nPRINT ghost\nEND");

    assert_eq!(res.output, "ok\n");
    assert!(matches!(
        res.error,
        Some((2, InterpreterError::InterpFromEnv(EnvError::UndefinedVariable(ref v)))) if v == "ghost"
    ));
}

#[test]
fn functions_may_follow_main() {
    let source = "
MAIN
    later(3)
END

FUNCTION later(n)
    PRINT n
END";

    assert_eq!(run_ok(source), "3\n");
}

#[test]
fn redeclared_function_uses_last_body() {
    let source = "
FUNCTION f()
    PRINT 'first'
END

FUNCTION f()
    PRINT 'second'
END

MAIN
    f()
END";

    assert_eq!(run_ok(source), "second\n");
}

#[test]
fn call_as_operand() {
    let source = "
FUNCTION double(n)
    r = n THEN * 2
    RETURN r
END

MAIN
    DECLARE x = double(4)
    y = x THEN + double(x)
    IF double(0)
        PRINT 'never'
    ELSE
        PRINT y
    ENDIF
END";

    assert_eq!(run_ok(source), "24\n");
}

#[test]
fn arguments_evaluated_in_caller_frame() {
    let source = "
FUNCTION show(a, b)
    PRINT a
    PRINT b
END

MAIN
    DECLARE a = 1
    DECLARE b = 2
    show(b, a)
END";

    assert_eq!(run_ok(source), "2\n1\n");
}
