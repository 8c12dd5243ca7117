// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0

//! Rounds input reading.
use anyhow::{Context, Result, anyhow};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// A round line with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The line number.
    pub number: usize,
    /// The line text.
    pub text: String,
}

/// Rounds lines read from a file or stdin.
#[derive(Debug)]
pub struct Input {
    /// The input name used in error messages.
    pub name: String,
    /// The non blank lines.
    pub lines: Vec<Line>,
}

impl Input {
    /// Reads the lines from the given path, or from stdin if the path is
    /// missing or `-`.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path != Path::new("-") => {
                let file = File::open(path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => anyhow!("File {} not found", path.display()),
                    _ => anyhow::Error::new(e).context(format!("Cannot open {}", path.display())),
                })?;
                Self::read(path.display().to_string(), BufReader::new(file))
            }
            _ => Self::read("stdin".to_string(), io::stdin().lock()),
        }
    }

    /// Reads the lines from a reader skipping blank lines.
    pub fn read<R: BufRead>(name: String, reader: R) -> Result<Self> {
        let mut lines = Vec::new();

        for (idx, text) in reader.lines().enumerate() {
            let text = text.with_context(|| format!("{name}:{} read error", idx + 1))?;
            if text.trim().is_empty() {
                continue;
            }

            lines.push(Line {
                number: idx + 1,
                text,
            });
        }

        Ok(Self { name, lines })
    }

    /// Returns the lines text.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Returns the number of the first line with the given text.
    pub fn line_number(&self, text: &str) -> Option<usize> {
        self.lines.iter().find(|l| l.text == text).map(|l| l.number)
    }
}
