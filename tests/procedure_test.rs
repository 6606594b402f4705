mod common;
use common::*;
use container::mach::{Config, Runtime};
use pretty_assertions::assert_eq;

#[test]
fn test_call_prints_once_per_call() {
    let body = r#"
def procedure p:
    console.type("hi");
End;
call p;
call p;
"#;
    assert_eq!(exec(body), "hi\nhi\n");
}

#[test]
fn test_definition_does_not_run_body() {
    let body = r#"
def procedure p:
    console.type("hi");
End;
console.type("defined");
"#;
    assert_eq!(exec(body), "defined\n");
}

#[test]
fn test_undefined_procedure() {
    assert_eq!(exec("call q;"), "Procedure 'q' not defined (line 2)\n");
}

#[test]
fn test_shared_stores() {
    let body = r#"
def var count = 3;
create list("seen");
def procedure tick:
    append("seen", count);
    def var count = count - 1;
End;
call tick;
call tick;
console.type(count);
List seen length();
"#;
    assert_eq!(exec(body), "1\n2\n");
}

#[test]
fn test_blocks_inside_procedure() {
    let body = r#"
def procedure countdown:
    while n > 0:
        if n == 2:
            console.type("two");
        End;
        else:
            console.type(n);
        End;
        def var n = n - 1;
    End;
End;
def var n = 3;
call countdown;
"#;
    assert_eq!(exec(body), "3\ntwo\n1\n");
}

#[test]
fn test_recursion() {
    let body = r#"
def var n = 3;
def procedure down:
    if n > 0:
        console.type(n);
        def var n = n - 1;
        call down;
    End;
End;
call down;
"#;
    assert_eq!(exec(body), "3\n2\n1\n");
}

#[test]
fn test_runaway_recursion_is_stopped() {
    let body = "def procedure p:\ncall p;\nEnd;\ncall p;";
    assert_eq!(exec(body), "Procedure calls nested too deeply (line 3)\n");
}

#[test]
fn test_call_depth_is_configurable() {
    let body = r#"
def var n = 5;
def procedure down:
    if n > 0:
        def var n = n - 1;
        call down;
    End;
End;
call down;
console.type("ok");
"#;
    let config = Config {
        max_call_depth: 4,
        max_steps: None,
    };
    let mut runtime = Runtime::new(&program(body)).with_config(config);
    let e = runtime.run().unwrap_err();
    assert_eq!(e.to_string(), "Procedure calls nested too deeply (line 7)");

    // Six calls and the five `if` blocks between them.
    let config = Config {
        max_call_depth: 11,
        max_steps: None,
    };
    let mut runtime = Runtime::new(&program(body)).with_config(config);
    runtime.run().unwrap();
    assert_eq!(runtime.output(), "ok\n");
}

#[test]
fn test_blocks_count_toward_call_depth() {
    let mut body = String::from("def procedure p:\n");
    body.push_str(&"if 1:\n".repeat(40));
    body.push_str("call p;\n");
    body.push_str(&"End;\n".repeat(40));
    body.push_str("End;\ncall p;");
    let looping = r#"
def var n = 100000;
def procedure p:
    while n > 0:
        if n > 0:
            def var n = n - 1;
            call p;
        End;
    End;
End;
call p;
"#;
    let outputs = std::thread::spawn(move || (exec(&body), exec(looping)))
        .join()
        .unwrap();
    assert_eq!(outputs.0, "Procedure calls nested too deeply (line 12)\n");
    assert_eq!(outputs.1, "Procedure calls nested too deeply (line 5)\n");
}

#[test]
fn test_redefinition_replaces() {
    let body = r#"
def procedure p:
    console.type(1);
End;
def procedure p:
    console.type(2);
End;
call p;
"#;
    assert_eq!(exec(body), "2\n");
}

#[test]
fn test_nested_definition() {
    let body = "def procedure outer:\ndef procedure inner:\nEnd;\nEnd;";
    assert_eq!(
        exec(body),
        "Procedure definitions cannot be nested (line 3)\n"
    );
}

#[test]
fn test_break_does_not_cross_calls() {
    let body = r#"
def procedure stop:
    break;
End;
while 1:
    call stop;
End;
"#;
    assert_eq!(
        exec(body),
        "break or skip outside of a while loop (line 4)\n"
    );
}

#[test]
fn test_procedure_body_is_stored() {
    let mut runtime = Runtime::new(&program("def procedure p:\nconsole.type(1);\nif 1:\nEnd;\nEnd;"));
    runtime.run().unwrap();
    let texts: Vec<&str> = runtime.procedure("p").unwrap().iter().map(|l| l.text()).collect();
    assert_eq!(texts, ["console.type(1);", "if 1:", "End;"]);
}
