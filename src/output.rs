// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Human-readable progress lines for whoever runs the import.

/// Line-oriented output sink. Not meant to be parsed.
pub trait Output: Send + Sync {
    fn writeln(&self, line: &str);
}

/// Writes to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn writeln(&self, line: &str) {
        println!("{}", line);
    }
}
