// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0

//! Pokerhands CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use pokerhands_eval::{
    CARDS_PER_LINE, Deck, Player, Round, count_wins, par_count_wins, tokenize,
};

mod input;
use input::Input;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Logs each round hands and winner.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Counts the rounds won by a player.
    Count {
        /// The rounds file, reads from stdin if missing or `-`.
        file: Option<PathBuf>,
        /// The player to count wins for.
        #[clap(long, short, value_enum, default_value_t = PlayerArg::One)]
        player: PlayerArg,
        /// Number of evaluation threads.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
        tasks: u16,
    },
    /// Deals random rounds.
    Deal {
        /// Number of rounds.
        #[clap(long, short, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
        rounds: u32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerArg {
    /// The player with the first five cards.
    One,
    /// The player with the last five cards.
    Two,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::One => Player::PlayerOne,
            PlayerArg::Two => Player::PlayerTwo,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let res = match cli.command {
        Command::Count {
            file,
            player,
            tasks,
        } => count(file, player.into(), tasks as usize),
        Command::Deal { rounds } => deal(rounds as usize),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the number of rounds won by a player.
fn count(file: Option<PathBuf>, player: Player, tasks: usize) -> Result<()> {
    let input = Input::open(file.as_deref())?;
    let wins = count_input(&input, player, tasks)?;

    info!("{player} won {wins} of {} rounds", input.lines.len());
    println!("{wins}");

    Ok(())
}

/// Counts the input rounds won by a player, errors name the input and the
/// failing line number.
fn count_input(input: &Input, player: Player, tasks: usize) -> Result<usize> {
    let texts = input.texts();

    let res = if tasks > 1 {
        par_count_wins(player, &texts, tasks)
    } else {
        count_wins(player, &texts)
    };

    res.map_err(|e| {
        let number = input.line_number(e.line()).unwrap_or_default();
        anyhow::Error::new(e).context(format!("{}:{number}", input.name))
    })
}

/// Prints random rounds, tied rounds are dealt again.
fn deal(rounds: usize) -> Result<()> {
    let mut rng = rand::rng();
    let mut out = BufWriter::new(io::stdout().lock());

    let mut dealt = 0;
    while dealt < rounds {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let line = (0..CARDS_PER_LINE)
            .filter_map(|_| deck.deal())
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let tokens = tokenize(&line).with_context(|| format!("Dealt invalid line {line}"))?;
        let round = Round::new(&tokens);
        if round.hand(Player::PlayerOne) == round.hand(Player::PlayerTwo) {
            continue;
        }

        writeln!(out, "{line}")?;
        dealt += 1;
    }

    out.flush()?;
    Ok(())
}
