use std::io::{self, BufRead, Write};
use std::process;

use logical_sudoku::{Board, Outcome};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    print!("Input boardstring:");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let mut board = Board::from_str_line(line.trim())?;
    println!("Loaded board:");
    println!("{}", board);

    let outcome = board.solve_with(|board, _pass| println!("{}", board))?;
    match outcome {
        Outcome::Solved => println!("Solved!"),
        Outcome::Stalled => {
            let blanks = board.cells().len() - board.n_assigned();
            println!("Stalled with {} blank cells left", blanks);
        }
    }
    Ok(())
}
