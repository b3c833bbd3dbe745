use log::trace;

use crate::automata::program::{Inst, Program};
use crate::errors::{Error, Result};

pub const DEFAULT_THREAD_LIMIT: usize = 10;

pub enum ExecutorType {
    Recursive,
    Threaded,
}

pub struct Executor {
    typ: ExecutorType,
    thread_limit: usize,
}

impl Executor {
    pub fn new(typ: ExecutorType) -> Executor {
        Executor::with_thread_limit(typ, DEFAULT_THREAD_LIMIT)
    }

    /// The limit caps pending (not-yet-run) threads in the threaded
    /// strategy; the recursive strategy ignores it.
    pub fn with_thread_limit(typ: ExecutorType, thread_limit: usize) -> Executor {
        Executor { typ, thread_limit }
    }

    pub fn matches(&self, program: &Program, s: &str) -> Result<bool> {
        match self.typ {
            ExecutorType::Recursive => RecursiveExecutor::new(program).matches(s),
            ExecutorType::Threaded => {
                ThreadedExecutor::new(program, self.thread_limit).matches(s)
            }
        }
    }
}

fn target(pc: usize, offset: isize, len: usize) -> Result<usize> {
    let resolved = (pc as isize + 1).saturating_add(offset);
    if resolved < 0 || resolved as usize > len {
        return Err(Error::AddressOutOfBounds(resolved));
    }
    Ok(resolved as usize)
}

struct RecursiveExecutor<'a> {
    program: &'a Program,
}

impl RecursiveExecutor<'_> {
    fn new(program: &Program) -> RecursiveExecutor<'_> {
        RecursiveExecutor { program }
    }

    fn matches(&self, s: &str) -> Result<bool> {
        let text: Vec<char> = s.chars().collect();
        self.run(&text, 0, 0)
    }

    // recursion depth is bounded by the number of splits on one path,
    // not by input length
    fn run(&self, text: &[char], mut pc: usize, mut at: usize) -> Result<bool> {
        let len = self.program.len();
        while pc < len {
            match self.program.insts[pc] {
                Inst::Char(c) => {
                    if at >= text.len() || text[at] != c {
                        return Ok(false);
                    }
                    at += 1;
                    pc += 1;
                }
                Inst::Match => return Ok(true),
                Inst::Jump(offset) => pc = target(pc, offset, len)?,
                Inst::Split(goto1, goto2) => {
                    let eager = target(pc, goto1, len)?;
                    let deferred = target(pc, goto2, len)?;
                    if self.run(text, eager, at)? {
                        return Ok(true);
                    }
                    pc = deferred;
                }
            }
        }
        // fell off the end: implicit accept
        Ok(true)
    }
}

#[derive(Debug, Clone, Copy)]
struct Thread {
    pc: usize,
    at: usize,
}

struct ThreadedExecutor<'a> {
    program: &'a Program,
    thread_limit: usize,
}

impl ThreadedExecutor<'_> {
    fn new(program: &Program, thread_limit: usize) -> ThreadedExecutor<'_> {
        ThreadedExecutor {
            program,
            thread_limit,
        }
    }

    fn matches(&self, s: &str) -> Result<bool> {
        let text: Vec<char> = s.chars().collect();
        let mut pending = vec![Thread { pc: 0, at: 0 }];
        while let Some(thread) = pending.pop() {
            if self.run_thread(&text, thread, &mut pending)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn run_thread(
        &self,
        text: &[char],
        thread: Thread,
        pending: &mut Vec<Thread>,
    ) -> Result<bool> {
        let Thread { mut pc, mut at } = thread;
        let len = self.program.len();
        while pc < len {
            match self.program.insts[pc] {
                Inst::Char(c) => {
                    if at >= text.len() || text[at] != c {
                        return Ok(false);
                    }
                    at += 1;
                    pc += 1;
                }
                Inst::Match => return Ok(true),
                Inst::Jump(offset) => pc = target(pc, offset, len)?,
                Inst::Split(goto1, goto2) => {
                    let eager = target(pc, goto1, len)?;
                    let deferred = target(pc, goto2, len)?;
                    if pending.len() >= self.thread_limit {
                        return Err(Error::ThreadLimitExceeded(self.thread_limit));
                    }
                    trace!("deferring thread pc={} at={}", deferred, at);
                    pending.push(Thread { pc: deferred, at });
                    pc = eager;
                }
            }
        }
        Ok(true)
    }
}
