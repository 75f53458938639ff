use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::analysis::{analyze_hand, recommend_for};
use crate::cards::{parse_board, parse_hole_cards, simplify_hand, Card};
use crate::charts::{chart_for, tier_of, tiers};
use crate::decision::{decide, Profile, Spot};
use crate::display::{board_display, equity_bar, print_error, range_grid, styled_action};
use crate::equity::estimate_equity_par;
use crate::evaluator::evaluate_seven;
use crate::math;
use crate::position::Position;

#[derive(Parser)]
#[command(
    name = "bss",
    version = "1.0.0",
    about = "BSS starting-hand advisor: hand analysis, opening charts, equity, and practice decisions."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum ProfileArg {
    Tight,
    Loose,
    Aggressive,
    Passive,
    Balanced,
}

impl ProfileArg {
    fn to_profile(&self) -> Profile {
        match self {
            ProfileArg::Tight => Profile::Tight,
            ProfileArg::Loose => Profile::Loose,
            ProfileArg::Aggressive => Profile::Aggressive,
            ProfileArg::Passive => Profile::Passive,
            ProfileArg::Balanced => Profile::Balanced,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a starting hand and recommend a preflop action
    Analyze {
        /// Your hand (e.g., AhKs, QdQc)
        hand: String,
        /// Your position (UTG, UTG+1, MP, MP+1, CO, BTN, SB, BB)
        position: String,
        /// Community cards (e.g., AsKd5c)
        #[arg(short, long)]
        board: Option<String>,
    },
    /// Show the opening chart for a position
    Chart {
        /// Position (UTG, UTG+1, MP, MP+1, CO, BTN, SB, BB)
        position: String,
    },
    /// Estimate equity against one random hand
    Equity {
        /// Your hand (e.g., AhAs)
        hand: String,
        /// Community cards (e.g., AsKd5c)
        #[arg(short, long)]
        board: Option<String>,
        /// Number of simulations
        #[arg(short = 'n', long, default_value = "30000")]
        sims: u32,
    },
    /// Ask a practice opponent profile what it would do
    Decide {
        /// Your hand (e.g., AhKs)
        hand: String,
        /// Your position
        #[arg(long, default_value = "BTN")]
        position: String,
        /// Opponent behavioral profile
        #[arg(long, value_enum, default_value = "balanced")]
        profile: ProfileArg,
        /// Current pot size
        #[arg(long)]
        pot: f64,
        /// Amount required to call
        #[arg(long)]
        bet: f64,
        /// Remaining stack
        #[arg(long, default_value = "1000")]
        stack: f64,
        /// Community cards (e.g., AsKd5c)
        #[arg(short, long)]
        board: Option<String>,
    },
    /// Calculate pot odds and EV of a call
    Odds {
        /// Current pot size
        pot: f64,
        /// Bet size to call
        bet: f64,
        /// Your equity (0-1) to calculate EV
        #[arg(short, long)]
        equity: Option<f64>,
    },
    /// Show the hand-tier reference groupings
    Tiers,
}

pub fn run() {
    let cli = Cli::parse();
    dispatch(cli);
}

fn dispatch(cli: Cli) {
    match cli.command {
        Commands::Analyze {
            hand,
            position,
            board,
        } => cmd_analyze(hand, position, board),
        Commands::Chart { position } => cmd_chart(position),
        Commands::Equity { hand, board, sims } => cmd_equity(hand, board, sims),
        Commands::Decide {
            hand,
            position,
            profile,
            pot,
            bet,
            stack,
            board,
        } => cmd_decide(hand, position, profile.to_profile(), pot, bet, stack, board),
        Commands::Odds { pot, bet, equity } => cmd_odds(pot, bet, equity),
        Commands::Tiers => cmd_tiers(),
    }
}

fn parse_inputs(hand: &str, board: &Option<String>) -> Option<([Card; 2], Vec<Card>)> {
    let hole = match parse_hole_cards(hand) {
        Ok(c) => c,
        Err(e) => {
            print_error(&e.to_string());
            return None;
        }
    };
    let board_cards = match board {
        Some(b) => match parse_board(b) {
            Ok(c) => c,
            Err(e) => {
                print_error(&e.to_string());
                return None;
            }
        },
        None => Vec::new(),
    };
    if board_cards.len() > 5 {
        print_error("Board cannot have more than 5 cards");
        return None;
    }
    Some((hole, board_cards))
}

fn cmd_analyze(hand: String, position: String, board: Option<String>) {
    let Some((hole, board_cards)) = parse_inputs(&hand, &board) else {
        return;
    };
    let position = match Position::parse(&position) {
        Ok(p) => p,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    let mut rng = rand::thread_rng();
    let Some(analysis) = analyze_hand(&hole, &board_cards, &mut rng) else {
        print_error("Hand must be exactly 2 cards");
        return;
    };
    let notation = simplify_hand(&hole).unwrap_or_default();

    println!();
    println!(
        "  {} {}  {} {}",
        "Hand:".bold(),
        board_display(&hole),
        "Position:".bold(),
        position
    );
    if !board_cards.is_empty() {
        println!("  {} {}", "Board:".bold(), board_display(&board_cards));
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new(""), Cell::new("")]);
    table.add_row(vec![
        Cell::new("Hand Type".bold().to_string()),
        Cell::new(analysis.hand_type),
    ]);
    let tier_label = match tier_of(&notation) {
        Some(name) => format!("{} ({})", analysis.tier(), name),
        None => analysis.tier(),
    };
    table.add_row(vec![
        Cell::new("BSS Tier".bold().to_string()),
        Cell::new(tier_label),
    ]);
    if !board_cards.is_empty() {
        let mut all = hole.to_vec();
        all.extend_from_slice(&board_cards);
        table.add_row(vec![
            Cell::new("Made Hand".bold().to_string()),
            Cell::new(evaluate_seven(&all).category().to_string()),
        ]);
    }
    table.add_row(vec![
        Cell::new("Strength".bold().to_string()),
        Cell::new(equity_bar(analysis.strength / 100.0, 30)),
    ]);
    table.add_row(vec![
        Cell::new("vs Random".bold().to_string()),
        Cell::new(format!("{:.1}%", analysis.vs_random)),
    ]);
    table.add_row(vec![
        Cell::new("vs Premium".bold().to_string()),
        Cell::new(format!("{:.1}%", analysis.vs_premium)),
    ]);
    let ev_str = if analysis.expected_value >= 0.0 {
        format!("+{:.2} BB", analysis.expected_value).green().to_string()
    } else {
        format!("{:.2} BB", analysis.expected_value).red().to_string()
    };
    table.add_row(vec![Cell::new("EV".bold().to_string()), Cell::new(ev_str)]);
    println!("{}", table);

    if board_cards.is_empty() {
        let rec = recommend_for(analysis.strength, analysis.hand_type, &notation, position);
        println!();
        match rec.sizing {
            Some(sizing) => println!(
                "  Action: {}  {}",
                styled_action(&rec.action.to_string()),
                sizing
            ),
            None => println!("  Action: {}", styled_action(&rec.action.to_string())),
        }
        println!("  {}", rec.description.bold());
        println!("  {}", rec.reasoning);
        if let Some(vs3bet) = rec.vs_three_bet {
            println!("  {} {}", "vs 3-bet:".bold(), vs3bet);
        }
    }
    println!();
}

fn cmd_chart(position: String) {
    let position = match Position::parse(&position) {
        Ok(p) => p,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };
    let chart = chart_for(position);

    println!();
    if chart.open.is_empty() {
        println!("  {}", format!("{} Opening Chart", position).bold());
        println!();
        println!("  {}", chart.strategy);
        println!();
        return;
    }

    println!(
        "{}",
        range_grid(
            &chart.open,
            &chart.mixed,
            &format!("{} Opening Chart", position)
        )
    );
    println!();
    println!(
        "  {} open | {} mixed | {} combos | {}% of hands",
        chart.open.len().to_string().bold(),
        chart.mixed.len().to_string().bold(),
        chart.combos.to_string().bold(),
        chart.percentage.to_string().bold(),
    );
    println!();
    println!("  {} {}", "Pairs:  ".bold(), chart.breakdown.pairs);
    println!("  {} {}", "Suited: ".bold(), chart.breakdown.suited);
    println!("  {} {}", "Offsuit:".bold(), chart.breakdown.offsuit);
    println!();
    println!("  {}", chart.strategy);
    println!();
}

fn cmd_equity(hand: String, board: Option<String>, sims: u32) {
    let Some((hole, board_cards)) = parse_inputs(&hand, &board) else {
        return;
    };

    println!();
    let board_str = if board_cards.is_empty() {
        String::new()
    } else {
        format!(" on {}", board_display(&board_cards))
    };
    println!(
        "  {} vs random hand{}",
        board_display(&hole).bold(),
        board_str
    );
    println!("  Running {} simulations...\n", sims.to_string().bold());

    let result = estimate_equity_par(&hole, &board_cards, sims);
    let equity = result.percent() / 100.0;

    println!("  Hero:    {}", equity_bar(equity, 30));
    println!("  Villain: {}", equity_bar(1.0 - equity, 30));
    println!();

    let total = result.trials.max(1) as f64;
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new(""), Cell::new("")]);
    table.add_row(vec![
        Cell::new("Win".bold().to_string()),
        Cell::new(format!("{:.1}%", result.wins as f64 / total * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Tie".bold().to_string()),
        Cell::new(format!("{:.1}%", result.ties as f64 / total * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Lose".bold().to_string()),
        Cell::new(format!("{:.1}%", result.losses as f64 / total * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Equity".bold().to_string()),
        Cell::new(format!("{:.1}%", result.percent()).bold().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Sims".bold().to_string()),
        Cell::new(format!("{}", result.trials)),
    ]);
    println!("{}", table);
    println!();
}

fn cmd_decide(
    hand: String,
    position: String,
    profile: Profile,
    pot: f64,
    bet: f64,
    stack: f64,
    board: Option<String>,
) {
    let Some((hole, board_cards)) = parse_inputs(&hand, &board) else {
        return;
    };
    let position = match Position::parse(&position) {
        Ok(p) => p,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };
    let pot_odds = match math::pot_odds(pot, bet) {
        Ok(v) => v,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    let mut rng = rand::thread_rng();
    let strength = crate::equity::calculate_hand_strength(&hole, &board_cards, &mut rng);
    let spot = Spot {
        strength,
        position,
        pot_odds,
        to_call: bet,
        stack,
        board_cards: board_cards.len(),
    };
    let decision = decide(profile, &spot, &mut rng);

    println!();
    println!(
        "  {} {}  {} {}  {} {} ({})",
        "Hand:".bold(),
        board_display(&hole),
        "Position:".bold(),
        position,
        "Profile:".bold(),
        profile.persona(),
        profile.description(),
    );
    if !board_cards.is_empty() {
        println!("  {} {}", "Board:".bold(), board_display(&board_cards));
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new(""), Cell::new("")]);
    table.add_row(vec![
        Cell::new("Equity".bold().to_string()),
        Cell::new(equity_bar(strength / 100.0, 30)),
    ]);
    table.add_row(vec![
        Cell::new("Pot Odds".bold().to_string()),
        Cell::new(format!("{:.1}%", pot_odds * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("To Call".bold().to_string()),
        Cell::new(format!("{:.0}", bet)),
    ]);
    table.add_row(vec![
        Cell::new("Stack".bold().to_string()),
        Cell::new(format!("{:.0}", stack)),
    ]);
    println!("{}", table);
    println!();

    match decision.amount {
        Some(amount) => println!(
            "  Action: {}  {:.0}",
            styled_action(&decision.action.to_string()),
            amount
        ),
        None => println!("  Action: {}", styled_action(&decision.action.to_string())),
    }
    println!("  {}", decision.reasoning);
    println!();
}

fn cmd_odds(pot: f64, bet: f64, equity: Option<f64>) {
    let needed = match math::pot_odds(pot, bet) {
        Ok(v) => v,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Metric".bold().to_string()),
        Cell::new("Value").set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![Cell::new("Pot"), Cell::new(format!("${:.0}", pot))]);
    table.add_row(vec![Cell::new("Bet"), Cell::new(format!("${:.0}", bet))]);
    table.add_row(vec![
        Cell::new("Pot Odds"),
        Cell::new(format!("{:.1}%", needed * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Total Pot"),
        Cell::new(format!("${:.0}", pot + bet + bet)),
    ]);
    if let Ok(be) = math::break_even_pct(pot, bet) {
        table.add_row(vec![
            Cell::new("Break-Even"),
            Cell::new(format!("{:.1}%", be * 100.0)),
        ]);
    }

    if let Some(eq) = equity {
        let ev_val = math::ev(eq, pot, bet);
        let ev_str = if ev_val >= 0.0 {
            format!("${:.2}", ev_val).green().to_string()
        } else {
            format!("${:.2}", ev_val).red().to_string()
        };
        table.add_row(vec![
            Cell::new("Your Equity"),
            Cell::new(format!("{:.1}%", eq * 100.0)),
        ]);
        table.add_row(vec![Cell::new("EV of Call"), Cell::new(ev_str)]);
        let verdict = if ev_val >= 0.0 {
            "CALL".green().bold().to_string()
        } else {
            "FOLD".red().bold().to_string()
        };
        table.add_row(vec![Cell::new("Verdict"), Cell::new(verdict)]);
    }

    println!("{}", table);
    println!();
}

fn cmd_tiers() {
    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Tier".bold().to_string()),
        Cell::new("Hands"),
    ]);
    for (name, hands) in tiers().named() {
        table.add_row(vec![
            Cell::new(name.bold().to_string()),
            Cell::new(hands.join(", ")),
        ]);
    }
    println!("{}", table);
    println!();
}
