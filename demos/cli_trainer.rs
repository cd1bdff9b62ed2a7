//! CLI basic-strategy drill.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjdrill::{Card, Decision, Round, Stats, Trainer, TrainerOptions};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack strategy drill (type 'a' to toggle ace mode, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut trainer = Trainer::new(TrainerOptions::default(), seed);

    loop {
        let round = trainer.next_hand();
        print_round(round);

        let decision = loop {
            println!("{}", format_actions());
            let input = prompt_line("Action: ");
            match input.as_str() {
                "q" | "quit" => return,
                "a" | "ace" => {
                    let on = trainer.toggle_ace_mode();
                    println!("Ace mode {} (applies from the next hand).", if on { "on" } else { "off" });
                }
                _ => match input.parse::<Decision>() {
                    Ok(decision) => break decision,
                    Err(err) => println!("{err}"),
                },
            }
        };

        match trainer.answer(decision) {
            Ok(feedback) => {
                if let Some(round) = trainer.round() {
                    print_dealer(round);
                }
                if feedback.is_correct() {
                    println!("{}", colorize("Correct! Well done!", "32"));
                } else {
                    println!(
                        "{}",
                        colorize(
                            &format!("Incorrect. The correct decision was {}.", feedback.correct),
                            "31"
                        )
                    );
                }
            }
            Err(err) => println!("Answer error: {err}"),
        }

        print_stats(trainer.stats());
        thread::sleep(trainer.options().advance_delay);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_round(round: &Round) {
    println!();
    print_dealer(round);
    println!(
        "You:    {} (value {})",
        format_cards(round.player().cards()),
        round.player().value()
    );
}

fn print_dealer(round: &Round) {
    let mut view = format_cards(round.visible_dealer_cards());
    if !round.is_dealer_revealed() {
        view.push_str(" ??");
    }
    println!("Dealer: {view}");
}

fn print_stats(stats: &Stats) {
    println!(
        "Score: {} | Correct: {}/{} | Accuracy: {:.1}%",
        stats.score(),
        stats.correct(),
        stats.total(),
        stats.accuracy_percent()
    );
}

fn format_actions() -> String {
    let parts: Vec<String> = Decision::ALL
        .into_iter()
        .map(|decision| {
            let name = decision.name();
            let key = if decision == Decision::Split { "p" } else { &name[..1] };
            colorize(&format!("[{key}]{name}"), "32")
        })
        .collect();
    format!("Actions: {}", parts.join(" "))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let code = if card.suit.is_red() { "31" } else { "34" };
            colorize(&card.to_string(), code)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
