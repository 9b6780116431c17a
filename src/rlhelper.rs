// Copyright (C) 2020-2026 Andy Kurnia.

use rustyline::completion::{Completer, FilenameCompleter, Pair};

// completes command names first, file names after that.
#[derive(
    rustyline_derive::Helper,
    rustyline_derive::Highlighter,
    rustyline_derive::Hinter,
    rustyline_derive::Validator,
)]
pub struct ShellHelper {
    commands: &'static [&'static str],
    files: FilenameCompleter,
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        if head.contains(char::is_whitespace) {
            return self.files.complete(line, pos, ctx);
        }
        let candidates = self
            .commands
            .iter()
            .filter(|command| command.starts_with(head))
            .map(|command| Pair {
                display: command.to_string(),
                replacement: format!("{} ", command),
            })
            .collect();
        Ok((0, candidates))
    }
}

pub type ShellEditor = rustyline::Editor<ShellHelper, rustyline::history::DefaultHistory>;

pub fn new_rl_editor(commands: &'static [&'static str]) -> rustyline::Result<ShellEditor> {
    let mut rl = ShellEditor::new()?;
    rl.set_helper(Some(ShellHelper {
        commands,
        files: FilenameCompleter::new(),
    }));
    Ok(rl)
}
