use crate::CodeGenerator;

fn compile(source: &str) -> String {
    let tokens = creek_frontend::lex(source).expect("lex error");
    let expr = creek_frontend::parse(tokens).expect("parse error");

    CodeGenerator::new().run(&expr)
}

/// Executes the emitted text against the stack-machine semantics the
/// generator targets, returning the value left in `rax`.
fn execute(asm: &str) -> i64 {
    let mut stack: Vec<i64> = vec![];
    let mut rax: i64 = 0;
    let mut rdi: i64 = 0;

    for line in asm.lines() {
        match line.trim() {
            ".intel_syntax noprefix" | ".globl main" | "main:" | "cqo" => {}

            "pop rax" => rax = stack.pop().expect("stack underflow"),
            "pop rdi" => rdi = stack.pop().expect("stack underflow"),
            "push rax" => stack.push(rax),

            "add rax, rdi" => rax += rdi,
            "sub rax, rdi" => rax -= rdi,
            "imul rax, rdi" => rax *= rdi,
            "idiv rdi" => rax /= rdi,

            "ret" => break,

            line => {
                let n = line.strip_prefix("push ").expect("unknown instruction");
                stack.push(n.parse().expect("bad push operand"));
            }
        }
    }

    rax
}

fn compile_and_run(source: &str) -> i64 {
    execute(&compile(source))
}

#[test]
fn fixed_output_shape() {
    let asm = compile("42");
    let lines: Vec<&str> = asm.lines().collect();

    assert_eq!(
        lines,
        vec![
            ".intel_syntax noprefix",
            ".globl main",
            "main:",
            "    push 42",
            "    pop rax",
            "    ret",
        ]
    );
}

#[test]
fn binop_instruction_sequence() {
    let asm = compile("1+2");
    let lines: Vec<&str> = asm.lines().map(str::trim).collect();

    assert_eq!(
        lines[3..9],
        [
            "push 1",
            "push 2",
            "pop rdi",
            "pop rax",
            "add rax, rdi",
            "push rax",
        ]
    );
}

#[test]
fn addition() {
    assert_eq!(compile_and_run("1+2"), 3);
}

#[test]
fn precedence() {
    assert_eq!(compile_and_run("2+3*4"), 14);
}

#[test]
fn parens_override_precedence() {
    assert_eq!(compile_and_run("(2+3)*4"), 20);
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(compile_and_run("10-2-3"), 5);
}

#[test]
fn subtraction_preserves_operand_order() {
    assert_eq!(compile_and_run("2-5"), -3);
}

#[test]
fn division_truncates() {
    assert_eq!(compile_and_run("7/2"), 3);
}

#[test]
fn division_is_left_associative() {
    assert_eq!(compile_and_run("100/10/2"), 5);
}

#[test]
fn nested_expression() {
    assert_eq!(compile_and_run("((1+2)*(3+4))/7"), 3);
    assert_eq!(compile_and_run(" 12 + 34 - 5 "), 41);
}
