use std::io::{self, BufRead, Write};

use anyhow::bail;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::{
    BombResult, Coordinate, Fleet, Game, Orientation, Placement, ShipType, TurnOutcome,
};

#[derive(Parser)]
#[command(author, version, about = "Turn-based sea battle against the computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Enter your own fleet instead of receiving a random one.
        #[arg(long)]
        manual_fleet: bool,
    },
}

fn main() -> anyhow::Result<()> {
    sea_battle::init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed, manual_fleet } => play(seed, manual_fleet),
    }
}

fn play(seed: Option<u64>, manual_fleet: bool) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let player_fleet = if manual_fleet {
        read_fleet(&mut input)?
    } else {
        Fleet::random(&mut rng)?
    };
    let opponent_fleet = Fleet::random(&mut rng)?;
    let mut game = Game::with_fleets(player_fleet, opponent_fleet);

    println!("Sink 'em all! Enter a target square (e.g. A1) to drop a bomb.");
    let mut line = String::new();
    while !game.is_over() {
        print!("target> ");
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let target: Coordinate = match line.trim().parse() {
            Ok(square) => square,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match game.play_turn(target, &mut rng) {
            Ok(turn) => report(&turn),
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

fn report(turn: &TurnOutcome) {
    match turn.player.result {
        BombResult::Hit => println!("{}: Hit!", turn.player.target),
        BombResult::Miss => println!("{}: Miss.", turn.player.target),
    }
    if let Some(ship) = turn.player.sunk {
        println!("You sank the opponent's {ship}!");
    }
    if turn.player.game_over {
        println!("You won!");
        return;
    }
    for shot in &turn.opponent {
        let result = match shot.result {
            BombResult::Hit => "Hit",
            BombResult::Miss => "Miss",
        };
        println!("Opponent bombs {}: {result}.", shot.target);
        if let Some(ship) = shot.sunk {
            println!("Your {ship} went down!");
        }
        if shot.game_over {
            println!("You lose!");
        }
    }
}

fn read_fleet(input: &mut impl BufRead) -> anyhow::Result<Fleet> {
    println!("Enter 10 ships as '<type> <square> <v|h>', e.g. 'battleship A1 h'.");
    println!("Required: 1 Battleship, 2 Cruisers, 3 Destroyers, 4 Submarines.");
    let mut placements = Vec::new();
    let mut line = String::new();
    while placements.len() < 10 {
        print!("ship {}> ", placements.len() + 1);
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the fleet was complete");
        }
        match parse_placement(line.trim()) {
            Ok(placement) => placements.push(placement),
            Err(e) => println!("{e}"),
        }
    }
    Ok(Fleet::from_placements(&placements)?)
}

fn parse_placement(line: &str) -> anyhow::Result<Placement> {
    let mut parts = line.split_whitespace();
    let (Some(type_text), Some(square), Some(orient), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        bail!("expected '<type> <square> <v|h>'");
    };
    // Accept both names and the numeric wire codes.
    let ship_type = match type_text.parse::<u8>() {
        Ok(code) => ShipType::try_from(code)?,
        Err(_) => type_text.parse::<ShipType>()?,
    };
    let start: Coordinate = square.parse()?;
    let orientation = match orient {
        "v" | "V" | "vertical" => Orientation::Vertical,
        "h" | "H" | "horizontal" => Orientation::Horizontal,
        other => match other.parse::<u8>().ok().and_then(Orientation::from_code) {
            Some(orientation) => orientation,
            None => bail!("orientation must be v or h"),
        },
    };
    Ok(Placement {
        ship_type,
        start,
        orientation,
    })
}
