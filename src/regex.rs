use crate::ast::Expr;
use crate::automata::compiler::compile;
use crate::automata::program::Program;
use crate::errors::Result;
use crate::executor::{Executor, ExecutorType};

/// Compile once, match many. The compiled program is immutable and can
/// be matched against any number of inputs.
pub struct Regex(Program);

impl Regex {
    pub fn new(expr: &Expr) -> Result<Regex> {
        let program = compile(expr)?;
        Ok(Regex(program))
    }

    pub fn matches(&self, s: &str) -> Result<bool> {
        Executor::new(ExecutorType::Threaded).matches(&self.0, s)
    }

    pub fn program(&self) -> &Program {
        &self.0
    }
}
