use std::env;
use std::process;

use chess_rules::board::Color;
use chess_rules::game::{Game, GameError, GameOptions, MoveRequest};

fn play(moves: &[String]) -> Result<Game, (usize, GameError)> {
    let mut game = Game::new(GameOptions::default());
    for (ply, text) in moves.iter().enumerate() {
        let side = game.next_to_move();
        text.parse::<MoveRequest>()
            .and_then(|request| game.submit(side, request))
            .map_err(|e| (ply, e))?;
    }
    Ok(game)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return;
    }

    let game = match play(&args[1..]) {
        Ok(game) => game,
        Err((ply, e)) => {
            eprintln!("error at move {} ({}): {e}", ply + 1, args[ply + 1]);
            process::exit(1);
        }
    };

    let position = game.position();
    let side = position.side_to_move();
    let report = position
        .legal_move_count()
        .and_then(|count| Ok((count, position.in_check(side)?, position.in_checkmate(side)?)));
    let (legal_moves, in_check, in_checkmate) = match report {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    println!(
        "side_to_move: {}",
        if side == Color::White { "white" } else { "black" }
    );
    println!("legal_moves: {legal_moves}");
    println!("check: {in_check}");
    println!("checkmate: {in_checkmate}");
    if let Some(outcome) = game.outcome() {
        println!("outcome: {outcome}");
    }
    print!("{}", position.render(side));
}
