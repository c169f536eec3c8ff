extern crate search_lib;

use search_lib::boards::tic_tac_toe::{
    Action, Mark, TicTacToeBoard, initial_state, minimax, player, result, terminal, utility, winner,
};
use search_lib::minimax::MinimaxSearch;
use search_lib::random::{RandomGenerator, StandardRandomGenerator};
use tracing_subscriber::EnvFilter;

fn main() -> search_lib::Result<()> {
    // RUST_LOG=search_lib=debug shows every search
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Evaluate the opening position
    let outcome = MinimaxSearch::new(initial_state()).search()?;
    println!(
        "Opening: best move {:?}, value {}, {} positions searched",
        outcome.best_move, outcome.value, outcome.nodes_visited
    );

    // The engine against itself
    let last = play(&mut |board| minimax(board), &mut |board| minimax(board))?;
    report("Engine vs engine", &last)?;

    // A random X against the engine
    let mut random = StandardRandomGenerator;
    let last = play(&mut |board| Ok(random.choose_action(board)), &mut |board| {
        minimax(board)
    })?;
    report("Random vs engine", &last)?;
    assert!(utility(&last)? <= 0, "the engine must never lose");

    Ok(())
}

type Chooser<'a> = dyn FnMut(&TicTacToeBoard) -> search_lib::Result<Option<Action>> + 'a;

fn play(x: &mut Chooser<'_>, o: &mut Chooser<'_>) -> search_lib::Result<TicTacToeBoard> {
    let mut board = initial_state();
    while !terminal(&board) {
        let mover = player(&board);
        let chosen = match mover {
            Mark::X => x(&board)?,
            Mark::O => o(&board)?,
        };
        let Some(action) = chosen else {
            break;
        };
        board = result(&board, action)?;
        println!("{mover} plays {action}\n{board}\n");
    }
    Ok(board)
}

fn report(title: &str, board: &TicTacToeBoard) -> search_lib::Result<()> {
    match winner(board) {
        Some(mark) => println!("{title}: {mark} wins (utility {})", utility(board)?),
        None => println!("{title}: draw"),
    }
    Ok(())
}
