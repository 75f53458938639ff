use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{Card, Suit};

const GRID_RANKS: [char; 13] = [
    'A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2',
];

/// 13x13 starting-hand grid: `open` hands green, `mixed` hands yellow,
/// everything else dimmed. Suited hands above the diagonal, offsuit below.
pub fn range_grid(open: &[String], mixed: &[String], title: &str) -> String {
    let open_set: std::collections::HashSet<&str> = open.iter().map(|s| s.as_str()).collect();
    let mixed_set: std::collections::HashSet<&str> = mixed.iter().map(|s| s.as_str()).collect();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    for &r in &GRID_RANKS {
        header.push(Cell::new(r).set_alignment(CellAlignment::Center));
    }
    table.set_header(header);

    for (i, &r1) in GRID_RANKS.iter().enumerate() {
        let mut row = vec![Cell::new(format!("{}", r1).bold().to_string())];
        for (j, &r2) in GRID_RANKS.iter().enumerate() {
            let hand = if i == j {
                format!("{}{}", r1, r2)
            } else if i < j {
                format!("{}{}s", r1, r2)
            } else {
                format!("{}{}o", r2, r1)
            };

            let cell = if open_set.contains(hand.as_str()) {
                Cell::new(hand.green().bold().to_string())
            } else if mixed_set.contains(hand.as_str()) {
                Cell::new(hand.yellow().to_string())
            } else {
                Cell::new(hand.dimmed().to_string())
            };
            row.push(cell.set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }

    format!("  {}\n{}", title.bold(), table)
}

/// Colored bar for an equity fraction in [0, 1].
pub fn equity_bar(equity: f64, width: usize) -> String {
    let filled = ((equity * width as f64) as usize).min(width);
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.1}%", equity * 100.0);

    if equity >= 0.6 {
        format!("{} {}", bar.green(), pct)
    } else if equity >= 0.4 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.red(), pct)
    }
}

pub fn board_display(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let face = card.pretty();
            match card.suit {
                Suit::Spades => face.white().to_string(),
                Suit::Hearts => face.red().to_string(),
                Suit::Diamonds => face.blue().to_string(),
                Suit::Clubs => face.green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn styled_action(action: &str) -> String {
    match action.to_uppercase().as_str() {
        "RAISE" => action.red().bold().to_string(),
        "CALL" => action.green().bold().to_string(),
        "FOLD" => action.dimmed().bold().to_string(),
        _ => action.bold().to_string(),
    }
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
