// 🖥️ Interactive Shell - ID search loop over the sorted registry
//
// Two states: Running and Exiting. Each iteration reads one
// whitespace-delimited token from input; the sentinel `0` exits, anything
// that parses as an integer becomes a lookup, and end of input is an
// implicit exit. Output lines are a fixed protocol; diagnostics go through
// `log` (stderr), never stdout.

use crate::registry::UserRegistry;
use anyhow::Result;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Id value reserved to terminate the loop instead of a real lookup
pub const EXIT_SENTINEL: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Exiting,
}

// ============================================================================
// TOKEN READER
// ============================================================================

/// Whitespace-delimited tokens pulled lazily from a BufRead, one line at a
/// time, so the loop stays interactive.
struct Tokens<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once input is exhausted.
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

// ============================================================================
// SHELL LOOP
// ============================================================================

/// Run the interactive search loop until the sentinel or end of input.
///
/// Generic over reader and writer so tests can drive it with in-memory
/// buffers.
pub fn run_shell<R: BufRead, W: Write>(
    registry: &UserRegistry,
    input: R,
    output: &mut W,
) -> Result<()> {
    let mut tokens = Tokens::new(input);
    let mut state = ShellState::Running;

    while state == ShellState::Running {
        write!(
            output,
            "\nВведите ID для поиска пользователя (или введите 0 для выхода): "
        )?;
        output.flush()?;

        let token = match tokens.next_token()? {
            Some(token) => token,
            None => {
                // input exhausted: implicit exit
                log::debug!("end of input, exiting shell");
                writeln!(output, "Выход из программы.")?;
                state = ShellState::Exiting;
                continue;
            }
        };

        let id: i32 = match token.parse() {
            Ok(id) => id,
            Err(_) => {
                log::debug!("rejected non-numeric token {:?}", token);
                writeln!(
                    output,
                    "Некорректный ввод: '{}'. Ожидается целое число.",
                    token
                )?;
                continue;
            }
        };

        if id == EXIT_SENTINEL {
            writeln!(output, "Выход из программы.")?;
            state = ShellState::Exiting;
            continue;
        }

        match registry.find_by_id(id) {
            Some(user) => {
                log::debug!("lookup hit for id {}", id);
                writeln!(output, "\nНайден пользователь:")?;
                writeln!(output, "{}", user)?;
            }
            None => {
                log::debug!("lookup miss for id {}", id);
                writeln!(output, "Пользователь с ID {} не найден", id)?;
            }
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
