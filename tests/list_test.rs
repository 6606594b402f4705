mod common;
use common::*;
use container::mach::{Runtime, Val};
use pretty_assertions::assert_eq;

fn run(body: &str) -> Runtime {
    let mut runtime = Runtime::new(&program(body));
    runtime.run().unwrap();
    runtime
}

fn shown(runtime: &Runtime, list: &str) -> Vec<String> {
    runtime
        .list(list)
        .unwrap()
        .iter()
        .map(Val::to_string)
        .collect()
}

#[test]
fn test_filter_keeps_matching_elements() {
    let r = run(r#"
create list("a");
append("a", 1);
append("a", 2);
filter("a", $$ > 1);
"#);
    assert_eq!(shown(&r, "a"), ["2"]);
}

#[test]
fn test_filter_preserves_order() {
    let r = run(r#"
create list("a");
append("a", 5);
append("a", 1);
append("a", 7);
append("a", 3);
filter("a", $$ >= 3);
"#);
    assert_eq!(shown(&r, "a"), ["5", "7", "3"]);
}

#[test]
fn test_filter_strings() {
    let r = run(r#"
create list("words");
append("words", "apple");
append("words", "pear");
append("words", "apple");
filter("words", "$$" != "apple");
"#);
    assert_eq!(shown(&r, "words"), ["pear"]);
}

#[test]
fn test_filter_sees_variables() {
    let r = run(r#"
def var limit = 2;
create list("a");
append("a", 1);
append("a", 2);
append("a", 3);
filter("a", $$ < limit);
"#);
    assert_eq!(shown(&r, "a"), ["1"]);
}

#[test]
fn test_remove_absent_is_noop() {
    let body = r#"
create list("a");
append("a", 1);
append("a", 2);
remove("a", 5);
List a length();
"#;
    assert_eq!(exec(body), "2\n");
}

#[test]
fn test_remove_first_match_only() {
    let r = run(r#"
create list("a");
append("a", 1);
append("a", 2);
append("a", 1.0);
remove("a", 1);
"#);
    assert_eq!(shown(&r, "a"), ["2", "1.0"]);
}

#[test]
fn test_append_evaluates() {
    let r = run(r#"
def var x = 4;
create list("a");
append("a", x * 2);
append("a", "n" + x);
"#);
    assert_eq!(shown(&r, "a"), ["8", "n4"]);
}

#[test]
fn test_length() {
    let body = r#"
create list("a");
List a length();
append("a", 1);
List a length();
create list("a");
List a length();
"#;
    assert_eq!(exec(body), "0\n1\n0\n");
}

#[test]
fn test_separate_namespaces() {
    let body = r#"
def var a = "variable";
create list("a");
append("a", a);
List a length();
console.type(a);
"#;
    assert_eq!(exec(body), "1\nvariable\n");
}

#[test]
fn test_undefined_list() {
    assert_eq!(exec("append(\"b\", 1);"), "List 'b' not defined (line 2)\n");
    assert_eq!(exec("List b length();"), "List 'b' not defined (line 2)\n");
    assert_eq!(
        exec("filter(\"b\", $$ > 1);"),
        "List 'b' not defined (line 2)\n"
    );
}

#[test]
fn test_failed_filter_leaves_list_alone() {
    let mut runtime = Runtime::new(&program(
        "create list(\"a\");\nappend(\"a\", 1);\nappend(\"a\", \"x\");\nfilter(\"a\", $$ > 0);",
    ));
    let e = runtime.run().unwrap_err();
    assert_eq!(e.to_string(), "Cannot order string and integer (line 5)");
    assert_eq!(shown(&runtime, "a"), ["1", "x"]);
}

#[test]
fn test_malformed_list_statements() {
    assert_eq!(exec("create list(a);"), "Invalid create list (line 2)\n");
    assert_eq!(exec("append(\"a\");"), "Invalid append (line 2)\n");
}
