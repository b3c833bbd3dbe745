use log::debug;

use crate::ast::Expr;
use crate::automata::program::{Inst, Program};
use crate::errors::{Error, Result};

pub fn compile(expr: &Expr) -> Result<Program> {
    let program = Program::new(c(expr)?);
    debug!("compiled program:\n{}", program);
    Ok(program)
}

fn c(expr: &Expr) -> Result<Vec<Inst>> {
    match *expr {
        Expr::Literal(ref value) => c_literal(value),
        Expr::Sequence(ref left, ref right) => c_sequence(left, right),
        Expr::Alternation(ref left, ref right) => c_alternation(left, right),
        Expr::Optional(_) => Err(Error::UnsupportedConstruct("optional")),
        Expr::ZeroOrMore(_) => Err(Error::UnsupportedConstruct("zero-or-more")),
        Expr::OneOrMore(_) => Err(Error::UnsupportedConstruct("one-or-more")),
    }
}

fn c_literal(value: &str) -> Result<Vec<Inst>> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(vec![Inst::Char(c)]),
        _ => Err(Error::InvalidLiteral(value.to_string())),
    }
}

fn c_sequence(left: &Expr, right: &Expr) -> Result<Vec<Inst>> {
    let mut insts = c(left)?;
    insts.extend(c(right)?);
    Ok(insts)
}

// left|right
//         split 0, len(left)+1
//         <left>
//         jump len(right)
//         <right>
fn c_alternation(left: &Expr, right: &Expr) -> Result<Vec<Inst>> {
    let l = c(left)?;
    let r = c(right)?;
    let mut insts = Vec::with_capacity(l.len() + r.len() + 2);
    insts.push(Inst::Split(0, l.len() as isize + 1));
    insts.extend(l);
    insts.push(Inst::Jump(r.len() as isize));
    insts.extend(r);
    Ok(insts)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::compile;
    use crate::ast::Expr;
    use crate::automata::program::{Inst, Program};
    use crate::errors::{Error, Result};

    fn lit(s: &str) -> Expr {
        Expr::literal(s)
    }

    fn seq(left: Expr, right: Expr) -> Expr {
        Expr::sequence(left, right)
    }

    fn alt(left: Expr, right: Expr) -> Expr {
        Expr::alternation(left, right)
    }

    fn program(insts: Vec<Inst>) -> Result<Program> {
        Ok(Program::new(insts))
    }

    #[test]
    fn literal() {
        assert_eq!(compile(&lit("a")), program(vec![Inst::Char('a')]));
    }

    #[test]
    fn literal_must_be_one_char() {
        assert_eq!(
            compile(&lit("")),
            Err(Error::InvalidLiteral("".to_string()))
        );
        assert_eq!(
            compile(&lit("ab")),
            Err(Error::InvalidLiteral("ab".to_string()))
        );
    }

    #[test]
    fn sequence() {
        assert_eq!(
            compile(&seq(lit("a"), lit("b"))),
            program(vec![Inst::Char('a'), Inst::Char('b')])
        );
    }

    #[test]
    fn nested_sequence() {
        assert_eq!(
            compile(&seq(seq(lit("a"), lit("b")), lit("c"))),
            program(vec![Inst::Char('a'), Inst::Char('b'), Inst::Char('c')])
        );
    }

    #[test]
    fn alternation() {
        assert_eq!(
            compile(&alt(lit("a"), lit("b"))),
            program(vec![
                Inst::Split(0, 2),
                Inst::Char('a'),
                Inst::Jump(1),
                Inst::Char('b'),
            ])
        );
    }

    #[test]
    fn alternation_of_sequences() {
        assert_eq!(
            compile(&alt(seq(lit("a"), lit("b")), seq(lit("c"), lit("d")))),
            program(vec![
                Inst::Split(0, 3),
                Inst::Char('a'),
                Inst::Char('b'),
                Inst::Jump(2),
                Inst::Char('c'),
                Inst::Char('d'),
            ])
        );
    }

    #[test]
    fn alternation_inside_sequence() {
        // a successful left branch must land on the char after the
        // alternation, not past it
        assert_eq!(
            compile(&seq(alt(lit("a"), lit("b")), lit("c"))),
            program(vec![
                Inst::Split(0, 2),
                Inst::Char('a'),
                Inst::Jump(1),
                Inst::Char('b'),
                Inst::Char('c'),
            ])
        );
    }

    #[test]
    fn repetition_is_unsupported() {
        assert_eq!(
            compile(&Expr::optional(lit("a"))),
            Err(Error::UnsupportedConstruct("optional"))
        );
        assert_eq!(
            compile(&Expr::zero_or_more(lit("a"))),
            Err(Error::UnsupportedConstruct("zero-or-more"))
        );
        assert_eq!(
            compile(&Expr::one_or_more(lit("a"))),
            Err(Error::UnsupportedConstruct("one-or-more"))
        );
    }
}
