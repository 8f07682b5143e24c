// Line-mode REPL tests driven through in-memory input and output

use monkey::repl::line;

fn run(input: &str) -> Vec<String> {
    let mut output = Vec::new();
    line::start(input.as_bytes(), &mut output).expect("REPL failed");
    String::from_utf8(output)
        .expect("REPL wrote invalid UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_tokens_are_echoed_one_per_line() {
    let lines = run("!= x\n");
    assert_eq!(
        lines,
        vec![
            ">> {Type:!= Literal:!=}",
            "{Type:IDENT Literal:x}",
            ">> ",
        ]
    );
}

#[test]
fn test_keywords_and_illegal_bytes() {
    let lines = run("fn if else true false return $\n");
    assert_eq!(
        lines,
        vec![
            ">> {Type:FUNCTION Literal:fn}",
            "{Type:IF Literal:if}",
            "{Type:ELSE Literal:else}",
            "{Type:TRUE Literal:true}",
            "{Type:FALSE Literal:false}",
            "{Type:RETURN Literal:return}",
            "{Type:ILLEGAL Literal:$}",
            ">> ",
        ]
    );
}

#[test]
fn test_last_line_without_newline() {
    let lines = run("5");
    assert_eq!(lines, vec![">> {Type:INT Literal:5}", ">> "]);
}

#[test]
fn test_windows_line_endings() {
    let lines = run("a\r\nb\r\n");
    assert_eq!(
        lines,
        vec![
            ">> {Type:IDENT Literal:a}",
            ">> {Type:IDENT Literal:b}",
            ">> ",
        ]
    );
}
