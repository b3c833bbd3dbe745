use crate::automata::program::{Inst, Program};
use crate::errors::{Error, Result};

/// Lowers a program of `Char` instructions to x86-64 assembly text.
/// Control flow is not lowerable; neither is a non-ASCII char, since
/// `cmpb` compares a single byte.
pub fn lower(program: &Program) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();
    for inst in &program.insts {
        match *inst {
            Inst::Char(c) if c.is_ascii() => {
                // the input is nul-terminated, so one compare rejects
                // both a mismatch and end-of-input
                lines.push(format!("cmpb [rdi], {:#04x}", c as u32));
                lines.push("jne .Lno_match".to_string());
                lines.push("inc rdi".to_string());
            }
            ref inst => return Err(Error::UnsupportedInstruction(inst.to_string())),
        }
    }
    Ok(lines.join("\n"))
}
