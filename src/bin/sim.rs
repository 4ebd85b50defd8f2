use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{choose_target, Fleet, Game, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    sea_battle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let player = Fleet::random(&mut rng)?;
    let opponent = Fleet::random(&mut rng)?;
    let mut game = Game::with_fleets(player, opponent);

    // The simulated player uses the same hunt-and-target heuristic as
    // the opponent, so the game is AI vs AI.
    let mut turns = 0usize;
    while !game.is_over() {
        let sunk = game.sunk_squares(Side::Opponent);
        let Some(target) = choose_target(game.bombs(Side::Player), &sunk, &mut rng) else {
            break;
        };
        turns += 1;
        game.play_turn(target, &mut rng)?;
    }

    let winner = game.winner().map(|side| match side {
        Side::Player => "player",
        Side::Opponent => "opponent",
    });
    let result = json!({
        "seed": seed,
        "turns": turns,
        "winner": winner,
        "player_bombs": game.bombs(Side::Player).len(),
        "opponent_bombs": game.bombs(Side::Opponent).len(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
