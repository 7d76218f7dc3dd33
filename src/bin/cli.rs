use std::io::{self, BufRead};

use clap::Parser;
use tracing::info;

use ttt_rewind::{config::Config, Command, Mark, Session, Timeline};

fn print_timeline(timeline: &Timeline) {
    println!("{}", timeline.current());
    println!("{}", timeline.status());
    if timeline.winner().is_none() && timeline.current().is_full() {
        println!("It's a draw!");
    }
    println!();
    for entry in timeline.entries() {
        let marker = if entry.step == timeline.step() {
            '>'
        } else {
            ' '
        };
        println!("{} [{}] {}", marker, entry.step, entry);
    }
    println!();
}

fn main() -> io::Result<()> {
    let config = Config::parse();
    config.init_logging(None, "warn")?;

    let session = Session::new();
    let game = session.game();

    let _listeners = vec![
        game.placed.listen(|(index, mark): &(usize, Mark)| {
            println!("\n{}s took space {}:", mark, index + 1)
        }),
        game.timeline
            .updates()
            .listen(|timeline: &Timeline| print_timeline(timeline)),
    ];

    println!("Welcome to Tic Tac Toe!\n");
    println!("Type 1-9 to play a square, \"jump N\" to revisit move N, \"quit\" to leave.\n");
    print_timeline(&session.timeline());

    info!("reading moves from stdin");
    for line in io::stdin().lock().lines() {
        match line?.parse::<Command>() {
            Ok(command) => {
                if !command.dispatch(&session) {
                    break;
                }
            }
            Err(err) => println!("{}", err),
        }
    }
    Ok(())
}
