//! piece-paths - shortest move sequences for a single chess piece.
//!
//! Runs the built-in demo, answers ad-hoc path and move queries, or replays
//! scenarios stored in the config file.

mod config;
mod report;
mod scenario;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use config::{BoardConfig, PathsConfig};
use piece_core::{Board, PieceKind, Square};
use piece_paths::generate_moves;
use report::{MovesReport, PathReport};
use scenario::Query;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "piece-paths")]
#[command(about = "Find shortest move sequences for a single chess piece")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value_os_t = PathsConfig::default_path())]
    config: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in examples
    Demo,
    /// Find a shortest path between two squares
    Path {
        /// Piece to move (king, rook, bishop, knight)
        #[arg(short, long)]
        piece: PieceKind,
        /// Start square as ROW,COL
        #[arg(long, value_name = "ROW,COL", allow_hyphen_values = true)]
        from: Square,
        /// Goal square as ROW,COL
        #[arg(long, value_name = "ROW,COL", allow_hyphen_values = true)]
        to: Square,
        #[command(flatten)]
        board: BoardArgs,
    },
    /// List the squares a piece can reach in one move
    Moves {
        /// Piece to move (king, rook, bishop, knight)
        #[arg(short, long)]
        piece: PieceKind,
        /// Square the piece stands on, as ROW,COL
        #[arg(long, value_name = "ROW,COL", allow_hyphen_values = true)]
        at: Square,
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Run a scenario from the config file
    Scenario {
        /// Scenario name
        name: String,
    },
}

#[derive(Args)]
struct BoardArgs {
    /// Occupied square as ROW,COL (repeatable)
    #[arg(long = "block", value_name = "ROW,COL", allow_hyphen_values = true)]
    blocked: Vec<Square>,
    /// Board rows (overrides the config file)
    #[arg(long)]
    rows: Option<u16>,
    /// Board columns (overrides the config file)
    #[arg(long)]
    cols: Option<u16>,
}

impl BoardArgs {
    fn build(self, defaults: BoardConfig) -> anyhow::Result<Board> {
        let size = BoardConfig {
            rows: self.rows.unwrap_or(defaults.rows),
            cols: self.cols.unwrap_or(defaults.cols),
        };
        Ok(Board::build(size.dimensions()?, self.blocked))
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_path(query: &Query, json: bool) -> anyhow::Result<()> {
    tracing::info!(
        "{}: {} from {} to {}",
        query.title,
        query.piece,
        query.start,
        query.goal
    );
    let result = query.run();
    if json {
        println!("{}", serde_json::to_string_pretty(&PathReport::new(query, &result))?);
    } else {
        println!("{}", report::path_text(query, &result));
    }
    Ok(())
}

fn run_moves(board: &Board, piece: PieceKind, at: Square, json: bool) -> anyhow::Result<()> {
    let result = generate_moves(board, at, piece);
    if let Err(e) = &result {
        tracing::info!("moves from {}: {}", at, e);
    }
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&MovesReport::new(piece, at, &result))?
        );
    } else {
        println!("{}", report::moves_text(board, piece, at, &result));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PathsConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Commands::Demo => {
            for query in scenario::demo() {
                run_path(&query, cli.json)?;
            }
        }
        Commands::Path {
            piece,
            from,
            to,
            board,
        } => {
            let query = Query {
                title: "path".to_string(),
                piece,
                start: from,
                goal: to,
                board: board.build(config.board)?,
            };
            run_path(&query, cli.json)?;
        }
        Commands::Moves { piece, at, board } => {
            let board = board.build(config.board)?;
            run_moves(&board, piece, at, cli.json)?;
        }
        Commands::Scenario { name } => {
            let query = config.scenario(&name)?.to_query(&name, config.board)?;
            run_path(&query, cli.json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_path_command() {
        let cli = Cli::try_parse_from([
            "piece-paths", "path", "--piece", "KNIGHT", "--from", "4,1", "--to", "2,5",
            "--block", "2,2", "--block", "3,3", "--rows", "10",
        ])
        .unwrap();
        match cli.command {
            Commands::Path { piece, from, to, board } => {
                assert_eq!(piece, PieceKind::Knight);
                assert_eq!(from, Square::new(4, 1));
                assert_eq!(to, Square::new(2, 5));
                assert_eq!(board.blocked, vec![Square::new(2, 2), Square::new(3, 3)]);
                let board = board.build(BoardConfig::default()).unwrap();
                assert_eq!(board.dimensions().rows(), 10);
                assert_eq!(board.dimensions().cols(), 8);
            }
            _ => panic!("expected path command"),
        }
    }

    #[test]
    fn rejects_unknown_piece() {
        let result = Cli::try_parse_from(["piece-paths", "moves", "--piece", "queen", "--at", "0,0"]);
        assert!(result.is_err());
    }

    #[test]
    fn accepts_negative_squares() {
        let cli = Cli::try_parse_from(["piece-paths", "moves", "-p", "king", "--at", "-1,2"]).unwrap();
        match cli.command {
            Commands::Moves { at, .. } => assert_eq!(at, Square::new(-1, 2)),
            _ => panic!("expected moves command"),
        }
    }

    #[test]
    fn global_flags() {
        let cli = Cli::try_parse_from(["piece-paths", "demo", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("paths.toml"));
    }
}
