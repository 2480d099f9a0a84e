//! Reference command-line front end for the solver.
//!
//! Reads a board in the textual format described in [`ricochet_board::ascii`] and either solves a
//! full multi-robot puzzle or finds a single robot's route on an otherwise empty board.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use ricochet_board::{ascii, PositionEncoding, Robot, RobotPositions};
use ricochet_solver::{find_route, solve};

/// Solves Ricochet Robots puzzles read from a textual board description.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Increase log verbosity; repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a full puzzle: bring one robot onto a goal cell, other robots may be used as blockers.
    Solve {
        /// Path to a board file in the ascii board format.
        board: PathBuf,
        /// The robot that has to reach `goal`.
        #[arg(value_enum)]
        robot: RobotArg,
        /// The cell `robot` has to reach, given as `column,row`.
        goal: PositionArg,
        /// Starting positions of red, blue, green and yellow, each given as `column,row`.
        #[arg(num_args = 4)]
        start: Vec<PositionArg>,
    },
    /// Find the shortest route for a single robot moving alone on the board.
    Route {
        /// Path to a board file in the ascii board format.
        board: PathBuf,
        /// Starting cell, given as `column,row`.
        start: PositionArg,
        /// Target cell, given as `column,row`.
        end: PositionArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RobotArg {
    Red,
    Blue,
    Green,
    Yellow,
}

impl From<RobotArg> for Robot {
    fn from(robot: RobotArg) -> Self {
        match robot {
            RobotArg::Red => Robot::Red,
            RobotArg::Blue => Robot::Blue,
            RobotArg::Green => Robot::Green,
            RobotArg::Yellow => Robot::Yellow,
        }
    }
}

/// A `column,row` pair parsed from a single command-line argument.
#[derive(Clone, Copy)]
struct PositionArg(PositionEncoding, PositionEncoding);

impl FromStr for PositionArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (col, row) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `column,row`, found {s:?}"))?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| format!("invalid column in {s:?}"))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| format!("invalid row in {s:?}"))?;
        Ok(PositionArg(col, row))
    }
}

impl From<PositionArg> for ricochet_board::Position {
    fn from(pos: PositionArg) -> Self {
        ricochet_board::Position::new(pos.0, pos.1)
    }
}

impl fmt::Display for PositionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
            "ricli={level},ricochet_solver={level}"
        )))
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(message) = run(cli.command) {
        error!("{message}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Solve {
            board,
            robot,
            goal,
            start,
        } => run_solve(board, robot, goal, start),
        Command::Route { board, start, end } => run_route(board, start, end),
    }
}

fn read_board(path: PathBuf) -> Result<ricochet_board::Board, String> {
    let text = fs::read_to_string(&path).map_err(|e| format!("failed to read {path:?}: {e}"))?;
    let (board, _targets) = ascii::parse(&text).map_err(|e| format!("failed to parse {path:?}: {e}"))?;
    Ok(board)
}

fn run_solve(
    board_path: PathBuf,
    robot: RobotArg,
    goal: PositionArg,
    start: Vec<PositionArg>,
) -> Result<(), String> {
    let board = read_board(board_path)?;

    let positions: [(PositionEncoding, PositionEncoding); 4] = [
        (start[0].0, start[0].1),
        (start[1].0, start[1].1),
        (start[2].0, start[2].1),
        (start[3].0, start[3].1),
    ];
    let state = RobotPositions::from_tuples(&positions);

    info!(%goal, "solving");
    let solution = solve(&board, state, robot.into(), goal.into()).map_err(|e| e.to_string())?;

    println!("{}", solution.length());
    for (i, mv) in solution.moves().iter().enumerate() {
        println!(
            " {:>2}  {:<8}{:?} -> {:?}",
            i + 1,
            format!("{:?}", mv.robot()),
            mv.start(),
            mv.end()
        );
    }
    Ok(())
}

fn run_route(board_path: PathBuf, start: PositionArg, end: PositionArg) -> Result<(), String> {
    let board = read_board(board_path)?;

    info!(%start, %end, "finding route");
    let route = find_route(&board, start.into(), end.into()).map_err(|e| e.to_string())?;

    println!("{}", route.length());
    for (i, dir) in route.directions().iter().enumerate() {
        println!(" {:>2}  {}", i + 1, dir);
    }
    Ok(())
}
