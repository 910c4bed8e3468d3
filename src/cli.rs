use anyhow::{Context, Result};
use cardgoal::{PuzzleGenerator, PuzzleSolver, check_final_expr};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use serde::Serialize;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Cardgoal - Combine every card with + − × ÷ to reach the goal
#[derive(Parser, Debug)]
#[command(name = "cardgoal")]
#[command(about = "Generate, solve and check card arithmetic puzzles")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Draw a random solvable puzzle
    Generate,
    /// Report whether the cards can reach the goal
    Check {
        goal: i64,
        #[arg(required = true)]
        cards: Vec<u32>,
    },
    /// List every distinct solution
    Solve {
        goal: i64,
        #[arg(required = true)]
        cards: Vec<u32>,
    },
    /// Check a final expression against the cards and goal
    Validate {
        goal: i64,
        expr: String,
        #[arg(required = true)]
        cards: Vec<u32>,
    },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Command,
    pub log_level: LogLevel,
    pub json: bool,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    if let Command::Check { cards, .. } | Command::Solve { cards, .. } = &args.command {
        PuzzleSolver::check_cards(cards).context("Invalid cards")?;
    }

    Ok(CliConfig {
        command: args.command,
        log_level: args.log_level,
        json: args.json,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

#[derive(Serialize)]
struct CheckReport<'a> {
    goal: i64,
    cards: &'a [u32],
    solvable: bool,
}

#[derive(Serialize)]
struct SolveReport<'a> {
    goal: i64,
    cards: &'a [u32],
    solutions: &'a [String],
}

#[derive(Serialize)]
struct ValidateReport<'a> {
    expr: &'a str,
    valid: bool,
    reason: Option<String>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = PuzzleSolver::new();

    match &config.command {
        Command::Generate => {
            let puzzle = PuzzleGenerator::default().generate();
            info!("Generated puzzle {:?}", puzzle);
            if config.json {
                print_json(&puzzle)?;
            } else {
                let cards: Vec<String> = puzzle.cards.iter().map(u32::to_string).collect();
                println!("Goal {}: {}", puzzle.goal, cards.join(" "));
            }
        }
        Command::Check { goal, cards } => {
            let solvable = solver
                .try_has_solution(cards, *goal)
                .context("Could not search the cards")?;
            if config.json {
                print_json(&CheckReport {
                    goal: *goal,
                    cards,
                    solvable,
                })?;
            } else if solvable {
                println!("Solvable.");
            } else {
                println!("No solution.");
            }
        }
        Command::Solve { goal, cards } => {
            let solutions = solver
                .try_solve(cards, *goal)
                .context("Could not search the cards")?;
            if solutions.is_empty() {
                warn!("No solution for {:?} -> {}", cards, goal);
            }
            if config.json {
                print_json(&SolveReport {
                    goal: *goal,
                    cards,
                    solutions: &solutions,
                })?;
            } else if solutions.is_empty() {
                println!("No solution.");
            } else {
                for solution in &solutions {
                    println!("{}", solution);
                }
            }
        }
        Command::Validate { goal, expr, cards } => {
            let outcome = check_final_expr(expr, cards, *goal);
            if config.json {
                print_json(&ValidateReport {
                    expr,
                    valid: outcome.is_ok(),
                    reason: outcome.as_ref().err().map(ToString::to_string),
                })?;
            } else {
                match &outcome {
                    Ok(()) => println!("Correct."),
                    Err(e) => println!("Incorrect: {}", e),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<CliArgs> {
        CliArgs::try_parse_from(args).ok()
    }

    #[test]
    fn test_parse_solve_command() {
        let args = parse(&["cardgoal", "solve", "24", "1", "2", "3", "4"]);
        assert!(args.is_some());
        if let Some(args) = args {
            assert_eq!(
                args.command,
                Command::Solve {
                    goal: 24,
                    cards: vec![1, 2, 3, 4]
                }
            );
            assert!(!args.json);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_parse_validate_command_with_global_flags() {
        let args = parse(&[
            "cardgoal",
            "validate",
            "20",
            "(2 + 3) * 4",
            "2",
            "3",
            "4",
            "--json",
            "--log-level",
            "debug",
        ]);
        assert!(args.is_some());
        if let Some(args) = args {
            assert_eq!(
                args.command,
                Command::Validate {
                    goal: 20,
                    expr: "(2 + 3) * 4".to_string(),
                    cards: vec![2, 3, 4]
                }
            );
            assert!(args.json);
            assert!(matches!(args.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_cards_are_required() {
        assert!(parse(&["cardgoal", "check", "24"]).is_none());
        assert!(parse(&["cardgoal", "check", "24", "x"]).is_none());
        assert!(parse(&["cardgoal"]).is_none());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_report_json() {
        let report = CheckReport {
            goal: 24,
            cards: &[1, 2, 3, 4],
            solvable: true,
        };
        let json = serde_json::to_string(&report).unwrap_or_default();
        assert_eq!(json, r#"{"goal":24,"cards":[1,2,3,4],"solvable":true}"#);
    }
}
