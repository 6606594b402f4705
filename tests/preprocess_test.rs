mod common;
use common::*;
use container::lang::{preprocess, Line};
use pretty_assertions::assert_eq;

fn texts(lines: &[Line]) -> Vec<&str> {
    lines.iter().map(|l| l.text()).collect()
}

#[test]
fn test_comments_vanish() {
    let commented = r#"When container main(int):
# set up
def var x = 1;

//
console.type("hidden");
def var x = 2;
\\
    console.type(x);
# done
End;
"#;
    let plain = r#"When container main(int):
def var x = 1;
console.type(x);
End;
"#;
    assert_eq!(texts(&preprocess(commented)), texts(&preprocess(plain)));
    assert_eq!(exec_source(commented), "1\n");
}

#[test]
fn test_line_numbers_are_physical() {
    let lines = preprocess("\n\n# note\nWhen container main(int):\n\n  console.type(1);\n");
    let numbers: Vec<usize> = lines.iter().map(|l| l.number()).collect();
    assert_eq!(numbers, [4, 6]);
    assert_eq!(
        exec_source("When container main(int):\n\n\n\nconsole.type(y);\n"),
        "Variable 'y' not defined (line 5)\n"
    );
}

#[test]
fn test_hash_inside_block_comment() {
    let lines = preprocess("a;\n//\n# still hidden\nb;\n\\\\\nc;");
    assert_eq!(texts(&lines), ["a;", "c;"]);
}

#[test]
fn test_markers_only_at_line_start() {
    let body = "console.type(\"a // b\");\nconsole.type(\"# c\");";
    assert_eq!(exec(body), "a // b\n# c\n");
}

#[test]
fn test_unclosed_block_comment_hides_the_rest() {
    let source = format!("{}\nconsole.type(1);\n// open\nconsole.type(2);\nEnd;\n", HEADER);
    assert_eq!(exec_source(&source), "1\n");
}
