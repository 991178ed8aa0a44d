use creek_frontend::ast::{BinOp, Expr, ExprKind};

/// Emits x86-64 assembly (Intel syntax) that evaluates an expression tree
/// with a stack discipline: code for every sub-expression leaves its value
/// on top of the hardware stack, and the epilogue pops the final value
/// into `rax`.
#[derive(Default)]
pub struct CodeGenerator {
    output: String,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(mut self, expr: &Expr) -> String {
        self.push_line(0, ".intel_syntax noprefix");
        self.push_line(0, ".globl main");
        self.push_line(0, "main:");

        self.gen_expr(expr);

        self.push_line(1, "pop rax");
        self.push_line(1, "ret");

        self.output
    }

    fn gen_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Integer(n) => self.push_line(1, format!("push {n}")),

            ExprKind::BinOp { op, lhs, rhs } => {
                // lhs is pushed first, so `sub` and `idiv` see it in `rax`
                self.gen_expr(lhs);
                self.gen_expr(rhs);

                self.push_line(1, "pop rdi");
                self.push_line(1, "pop rax");

                match op {
                    BinOp::Add => self.push_line(1, "add rax, rdi"),
                    BinOp::Sub => self.push_line(1, "sub rax, rdi"),
                    BinOp::Mul => self.push_line(1, "imul rax, rdi"),
                    BinOp::Div => {
                        self.push_line(1, "cqo");
                        self.push_line(1, "idiv rdi");
                    }
                }

                self.push_line(1, "push rax");
            }
        }
    }

    fn push_line(&mut self, indent: u8, s: impl AsRef<str>) {
        const INDENT: &str = "    ";

        for _ in 0..indent {
            self.output.push_str(INDENT);
        }

        self.output.push_str(s.as_ref());
        self.output.push('\n');
    }
}
