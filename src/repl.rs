use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    diagnostics::{Result, ThistleError},
    runtime::Interpreter,
};

pub struct Repl {
    interpreter: Interpreter,
}

impl Repl {
    pub fn new(interpreter: Interpreter) -> Self {
        Self { interpreter }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new().map_err(|err| {
            ThistleError::from(std::io::Error::new(std::io::ErrorKind::Other, err))
        })?;
        println!("Thistle v{}. Type 'quit' to exit.", crate::VERSION);
        loop {
            match editor.readline("thistle> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed == "quit" || trimmed == "exit" {
                        break;
                    }
                    if trimmed.is_empty() {
                        continue;
                    }
                    editor.add_history_entry(trimmed).ok();
                    match self.interpreter.exec_line(trimmed) {
                        Ok(()) => {
                            if let Some(top) = self.interpreter.stack().peek() {
                                println!("→ {top}");
                            }
                        }
                        Err(err) => eprintln!("error: {err}"),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    return Err(ThistleError::from(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        err,
                    )));
                }
            }
        }
        Ok(())
    }
}
