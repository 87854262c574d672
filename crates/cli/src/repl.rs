//! Interactive REPL and stdin pipe mode.

use std::io::BufRead;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::format::{format_error, format_output, OutputMode};
use crate::parse::parse_line;
use crate::state::{Output, SessionState};

const HISTORY_FILE: &str = ".silo_filter_history";

fn history_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(HISTORY_FILE))
}

/// Outcome of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Failed,
    Quit,
}

fn run_line(line: &str, state: &mut SessionState, mode: OutputMode) -> Step {
    let cmd = match parse_line(line) {
        Ok(Some(cmd)) => cmd,
        Ok(None) => return Step::Continue,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            return Step::Failed;
        }
    };
    match state.execute(cmd) {
        Ok(Output::Quit) => Step::Quit,
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            Step::Continue
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            Step::Failed
        }
    }
}

pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return;
        }
    };
    let history = history_path();
    if let Some(path) = &history {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline(&state.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if let Step::Quit = run_line(&line, state, mode) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }

    if let Some(path) = &history {
        let _ = rl.save_history(path);
    }
}

/// Run commands from stdin, one per line.
///
/// Returns 1 if any line failed, 0 otherwise.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = std::io::stdin();
    let mut exit_code = 0;
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("{}", format_error(&e.to_string(), mode));
                return 1;
            }
        };
        match run_line(&line, state, mode) {
            Step::Continue => {}
            Step::Failed => exit_code = 1,
            Step::Quit => break,
        }
    }
    exit_code
}
