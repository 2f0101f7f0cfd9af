//! # knockout-cli
//!
//! Command-line interface for the knockout tournament notation.
//!
//! Loads a tournament file, runs it through the lexer and parser, and exposes
//! token dumps, validation, statistics reports, and Graphviz bracket export
//! as subcommands.

mod errors;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use knockout::prelude::*;
use knockout_stats::{StandingRow, Summary, TopScorerRow, standings, summary, top_scorers};
use knockout_syntax::{ParseError, Token, TokenKind};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use errors::enhance_error;

#[derive(Parser)]
#[command(name = "knockout")]
#[command(about = "Tournament notation parser, statistics and bracket export", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the token table, lexical errors listed separately
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Tokenize and parse, reporting every error found
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Standings table ranked by wins and goal difference
    Standings {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Top scorers with their goal minutes
    Scorers {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Tournament-wide summary figures
    Summary {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Export the bracket as a Graphviz DOT document
    Graph {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Write the DOT output here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokens { file } => cmd_tokens(&file),
        Commands::Check { file } => cmd_check(&file),
        Commands::Standings { file } => {
            let tournament = load_statistics(&file)?;
            print!("{}", render_standings(&standings(&tournament)));
            Ok(())
        }
        Commands::Scorers { file } => {
            let tournament = load_statistics(&file)?;
            print!("{}", render_scorers(&top_scorers(&tournament)));
            Ok(())
        }
        Commands::Summary { file } => {
            let tournament = load_statistics(&file)?;
            print!("{}", render_summary(&summary(&tournament)));
            Ok(())
        }
        Commands::Graph { file, output } => cmd_graph(&file, output.as_deref()),
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read tournament file {:?}", path))
}

/// Runs the full front end. Lexical errors and fatal parse failures are
/// displayed and terminate the process; recoverable parse errors come back
/// as warnings next to the model.
fn load_model(path: &Path) -> Result<(Tournament, Vec<ParseError>)> {
    let source = read_source(path)?;
    let tokens = tokenize(&source);

    let lexical: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Error)
        .collect();
    if !lexical.is_empty() {
        for token in &lexical {
            let detail = token.detail.as_deref().unwrap_or("invalid input");
            enhance_error(
                format!("{}: '{}'", detail, token.text),
                Some(path.display().to_string()),
                Some(source.clone()),
            )
            .with_position(token.line, token.column)
            .display();
            eprintln!();
        }
        eprintln!(
            "{} {} lexical error(s), parsing skipped",
            "x".red().bold(),
            lexical.len()
        );
        std::process::exit(1);
    }

    let outcome = parse(tokens);
    if !outcome.success {
        for error in &outcome.errors {
            enhance_error(
                error.description.clone(),
                Some(path.display().to_string()),
                Some(source.clone()),
            )
            .with_position(error.line, error.column)
            .display();
            eprintln!();
        }
        std::process::exit(1);
    }

    let tournament = outcome
        .tournament
        .context("parse succeeded without producing a tournament")?;
    Ok((tournament, outcome.errors))
}

/// Full pipeline for the report commands: parse, warn, derive.
fn load_statistics(path: &Path) -> Result<Tournament> {
    let (tournament, warnings) = load_model(path)?;
    print_warnings(&warnings);
    Ok(derive_statistics(&tournament))
}

fn print_warnings(warnings: &[ParseError]) {
    if warnings.is_empty() {
        return;
    }
    eprintln!("{}", "Warnings:".yellow().bold());
    for warning in warnings {
        eprintln!("  {} {}", "!".yellow().bold(), warning);
    }
    eprintln!();
}

fn cmd_tokens(path: &Path) -> Result<()> {
    let source = read_source(path)?;
    let tokens = tokenize(&source);

    let (errors, valid): (Vec<&Token>, Vec<&Token>) =
        tokens.iter().partition(|t| t.kind == TokenKind::Error);

    println!("{}", "Tokens:".cyan().bold());
    print!("{}", render_token_table(&valid));

    if !errors.is_empty() {
        println!();
        println!("{}", "Lexical errors:".red().bold());
        print!("{}", render_token_table(&errors));
    }

    println!();
    println!(
        "{} tokens, {} lexical error(s)",
        valid.len(),
        errors.len()
    );
    Ok(())
}

fn cmd_check(path: &Path) -> Result<()> {
    let (tournament, warnings) = load_model(path)?;
    print_warnings(&warnings);

    let match_count: usize = tournament.phases.iter().map(|p| p.matches.len()).sum();
    println!(
        "{} {} {}",
        "ok:".green().bold(),
        tournament.name.bold(),
        format!(
            "({} teams, {} phases, {} matches)",
            tournament.teams.len(),
            tournament.phases.len(),
            match_count
        )
        .dimmed()
    );
    if !warnings.is_empty() {
        println!(
            "{}",
            format!("{} entry(ies) were dropped or ignored", warnings.len()).yellow()
        );
    }
    Ok(())
}

fn cmd_graph(path: &Path, output: Option<&Path>) -> Result<()> {
    let tournament = load_statistics(path)?;
    let dot = render_dot(&tournament);

    match output {
        Some(out) => {
            fs::write(out, &dot)
                .with_context(|| format!("Failed to write DOT output to {:?}", out))?;
            println!(
                "{} Wrote bracket graph to {}",
                "ok:".green().bold(),
                out.display()
            );
        }
        None => print!("{dot}"),
    }
    Ok(())
}

fn render_token_table(tokens: &[&Token]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<12} {:<28} {:>5} {:>7}",
        "#", "KIND", "LEXEME", "LINE", "COLUMN"
    );
    for (i, token) in tokens.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<5} {:<12} {:<28} {:>5} {:>7}",
            i + 1,
            kind_name(token.kind),
            token.text,
            token.line,
            token.column
        );
    }
    out
}

fn kind_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::BraceOpen => "brace-open",
        TokenKind::BraceClose => "brace-close",
        TokenKind::BracketOpen => "bracket-open",
        TokenKind::BracketClose => "bracket-close",
        TokenKind::Colon => "colon",
        TokenKind::Comma => "comma",
        TokenKind::Str => "string",
        TokenKind::Number => "number",
        TokenKind::Keyword => "keyword",
        TokenKind::Ident => "identifier",
        TokenKind::Error => "error",
    }
}

fn render_standings(rows: &[StandingRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<24} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5}  {}",
        "POS", "TEAM", "P", "W", "L", "GF", "GA", "GD", "PHASE"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<4} {:<24} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+5}  {}",
            row.position,
            row.team,
            row.matches_played,
            row.matches_won,
            row.matches_lost,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            row.reached_phase
        );
    }
    out
}

fn render_scorers(rows: &[TopScorerRow]) -> String {
    if rows.is_empty() {
        return "No goals scored yet.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<24} {:<24} {:>5}  {}",
        "POS", "PLAYER", "TEAM", "GOALS", "MINUTES"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<4} {:<24} {:<24} {:>5}  {}",
            row.position,
            row.player,
            row.team,
            row.goals,
            row.minutes_display()
        );
    }
    out
}

fn render_summary(s: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tournament:     {}", s.tournament_name);
    let _ = writeln!(out, "Venue:          {}", s.venue);
    let _ = writeln!(out, "Declared teams: {}", s.declared_team_count);
    let _ = writeln!(
        out,
        "Matches:        {} ({} completed)",
        s.total_matches, s.completed_matches
    );
    let _ = writeln!(
        out,
        "Goals:          {} ({:.2} per match)",
        s.total_goals, s.average_goals_per_match
    );
    let _ = writeln!(out, "Average age:    {:.1}", s.average_player_age);
    let _ = writeln!(out, "Current phase:  {}", s.current_phase);
    out
}
