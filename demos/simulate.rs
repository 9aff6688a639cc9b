//! Elevens simulation example.
//!
//! Plays a number of games with auto-play and reports how many were won.
//! Pass the number of games as the first argument (default 1000).

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use elevens::{Board, BoardOptions, Elevens};

const DEFAULT_GAMES: u64 = 1000;

fn main() {
    let games = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .filter(|&games| games > 0)
        .unwrap_or(DEFAULT_GAMES);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut board: Board<Elevens> = Board::new(BoardOptions::default().quiet(), seed);
    let mut wins = 0u64;

    for game in 0..games {
        if game > 0 {
            board.new_game();
        }
        while board.play_if_possible() {}
        if board.game_is_won() {
            wins += 1;
        }
    }

    println!("Board at end of last game:\n{board}");
    println!("Games won:    {wins}");
    println!("Games played: {games}");
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for game counts"
    )]
    let rate = wins as f64 / games as f64 * 100.0;
    println!("Win rate:     {rate:.2}%");
}
