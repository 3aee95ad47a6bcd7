//! Borealis - Entry Point
//!
//! Headless driver for the simulation engine: queue orders, advance turns,
//! inspect the state, and watch the ending evaluator call the game. All
//! rendering here is plain text; the engine itself never prints.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use borealis::content::{leader_name, leader_of, LeaderReactions, ReactionContext, StaticReactions};
use borealis::core::config::EngineConfig;
use borealis::core::error::Result;
use borealis::core::types::{FactionId, ZoneId};
use borealis::sim::{advance_turn, Action, EventDeck, EventLog, GameState, ResourceGauge};

#[derive(Parser, Debug)]
#[command(name = "borealis", about = "Turn-based Arctic geopolitics simulation")]
struct Args {
    /// Faction to play (usa, russia, canada, norway, china)
    #[arg(long, default_value = "canada")]
    faction: String,

    /// Optional TOML file overriding engine tuning constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the event deck seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("borealis=info")
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.event_seed = seed;
    }

    let player = FactionId::from_key(&args.faction).unwrap_or_else(|| {
        eprintln!("Unknown faction '{}', defaulting to canada", args.faction);
        FactionId::Canada
    });

    let mut state = GameState::new(player, &config)?;
    let mut deck = EventDeck::new(&config);
    let mut log = EventLog::new();
    let mut queued: Vec<Action> = Vec::new();

    tracing::info!(player = ?player, "game started");

    println!("\n=== BOREALIS ===");
    println!("Turn-based contest for the Arctic. You play {}.", state.faction(player)?.name);
    println!();
    println!("Commands:");
    println!("  status / s           - Faction standings and climate");
    println!("  relations / r        - Tension table for your faction");
    println!("  claim <zone>         - Queue a territorial claim");
    println!("  war <faction>        - Queue a declaration of war");
    println!("  accord <faction>     - Queue a diplomatic accord");
    println!("  invest <amount>      - Queue economic investment");
    println!("  mitigate             - Queue climate mitigation funding");
    println!("  turn / t             - Commit queued orders, advance one turn");
    println!("  run <n>              - Advance n turns with no orders");
    println!("  save <path>          - Write a JSON snapshot");
    println!("  quit / q             - Exit");
    println!();

    loop {
        display_status(&state);

        if state.is_terminal() {
            display_ending(&state);
            break;
        }

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "turn" || input == "t" {
            match advance_turn(&state, &queued, &config, &mut deck) {
                Ok(next) => {
                    log.record_all(&next.pending_events);
                    state = next;
                    queued.clear();
                }
                Err(e) => println!("Turn rejected: {e}"),
            }
            continue;
        }

        if let Some(n) = input.strip_prefix("run ") {
            match n.parse::<u32>() {
                Ok(n) => {
                    for _ in 0..n {
                        if state.is_terminal() {
                            break;
                        }
                        match advance_turn(&state, &[], &config, &mut deck) {
                            Ok(next) => {
                                log.record_all(&next.pending_events);
                                state = next;
                            }
                            Err(e) => {
                                println!("Turn rejected: {e}");
                                break;
                            }
                        }
                    }
                }
                Err(_) => println!("Usage: run <number>"),
            }
            continue;
        }

        if input == "status" || input == "s" {
            display_detailed_status(&state);
            continue;
        }

        if input == "relations" || input == "r" {
            display_relations(&state);
            continue;
        }

        if let Some(zone) = input.strip_prefix("claim ") {
            match ZoneId::from_key(zone.trim()) {
                Some(zone) => {
                    queued.push(Action::ClaimZone { faction: player, zone });
                    println!("Queued claim on {}.", state.zone(zone)?.name);
                }
                None => println!("Unknown zone '{zone}'. Zone keys: barents, kara, laptev, east-siberian, chukchi, beaufort, nw-passage, greenland, svalbard, central-basin, bering, sea-route"),
            }
            continue;
        }

        if let Some(target) = input.strip_prefix("war ") {
            match FactionId::from_key(target.trim()) {
                Some(target) if target != player => {
                    queued.push(Action::DeclareWar { aggressor: player, target });
                    println!("Queued declaration of war against {}.", state.faction(target)?.name);
                }
                Some(_) => println!("You cannot declare war on yourself."),
                None => println!("Unknown faction '{target}'."),
            }
            continue;
        }

        if let Some(partner) = input.strip_prefix("accord ") {
            match FactionId::from_key(partner.trim()) {
                Some(partner) if partner != player => {
                    queued.push(Action::BrokerAccord { a: player, b: partner });
                    println!("Queued accord with {}.", state.faction(partner)?.name);
                }
                Some(_) => println!("An accord needs a partner."),
                None => println!("Unknown faction '{partner}'."),
            }
            continue;
        }

        if let Some(amount) = input.strip_prefix("invest ") {
            match amount.trim().parse::<f64>() {
                Ok(amount) if amount > 0.0 => {
                    queued.push(Action::AdjustResource {
                        faction: player,
                        gauge: ResourceGauge::EconomicOutput,
                        delta: amount,
                    });
                    println!("Queued investment of {amount}.");
                }
                _ => println!("Usage: invest <positive amount>"),
            }
            continue;
        }

        if input == "mitigate" {
            queued.push(Action::FundClimateMitigation { faction: player });
            println!("Queued climate mitigation funding.");
            continue;
        }

        if let Some(path) = input.strip_prefix("save ") {
            let json = serde_json::to_string_pretty(&state)?;
            std::fs::write(path.trim(), json)?;
            println!("Snapshot written to {}.", path.trim());
            continue;
        }

        println!("Unknown command. Try: status, relations, claim, war, accord, invest, mitigate, turn, run <n>, save <path>, quit");
    }

    println!(
        "\nGoodbye. {} turns played, {} events logged.",
        state.turn - 1,
        log.len()
    );
    Ok(())
}

/// One-line-per-faction summary plus the climate gauge
fn display_status(state: &GameState) {
    println!();
    println!(
        "--- Turn {} | {} {} | Ice {:.0}% ---",
        state.turn,
        state.season.label(),
        state.year,
        state.global_ice_extent
    );

    let mut ids: Vec<FactionId> = FactionId::ALL.to_vec();
    ids.sort_by_key(|&id| std::cmp::Reverse(state.zones_controlled(id)));
    for id in ids.iter().take(5) {
        if let Ok(faction) = state.faction(*id) {
            let marker = if *id == state.player_faction { "*" } else { " " };
            println!(
                " {marker}{:<8} zones {:<2} points {:<3} output {:.0}",
                faction.short_name,
                faction.zone_count(),
                faction.victory_points,
                faction.resources.economic_output
            );
        }
    }

    for event in &state.pending_events {
        println!("  ! {}", event.headline);
    }
    println!();
}

fn display_detailed_status(state: &GameState) {
    println!();
    println!("=== Standings (Turn {}) ===", state.turn);
    for id in FactionId::ALL {
        if let Ok(faction) = state.faction(id) {
            let marker = if id == state.player_faction { "*" } else { " " };
            let r = &faction.resources;
            println!(
                " {marker}{:<22} zones {:<2} pts {:<3} infl {:<5.0} econ {:<5.0} brk {:<2} mil {:<4.0} legit {:.0}",
                faction.name,
                faction.zone_count(),
                faction.victory_points,
                r.influence_points,
                r.economic_output,
                r.icebreaker_capacity,
                r.military_readiness,
                r.legitimacy
            );
        }
    }
    println!();
}

fn display_relations(state: &GameState) {
    println!();
    println!("=== Relations of {:?} ===", state.player_faction);
    for relation in state
        .relations
        .iter()
        .filter(|r| r.involves(state.player_faction))
    {
        if let Some(partner) = relation.partner_of(state.player_faction) {
            println!(
                "  {:<14} {:>5.1}  {}",
                format!("{partner:?}"),
                relation.tension_value,
                relation.tension_level.label()
            );
        }
    }
    println!();
}

fn display_ending(state: &GameState) {
    let Some(report) = &state.ending else {
        return;
    };
    let reactions = StaticReactions;

    println!();
    println!("=== GAME OVER ===");
    println!("{}", report.description);
    println!("{}", report.epilogue);

    match report.winner {
        Some(winner) => {
            let leader = leader_of(winner);
            println!(
                "{}: \"{}\"",
                leader_name(leader),
                reactions.reaction(leader, ReactionContext::Victory)
            );
            if winner != state.player_faction {
                let player_leader = leader_of(state.player_faction);
                println!(
                    "{}: \"{}\"",
                    leader_name(player_leader),
                    reactions.reaction(player_leader, ReactionContext::Defeat)
                );
            }
        }
        None => {
            let player_leader = leader_of(state.player_faction);
            println!(
                "{}: \"{}\"",
                leader_name(player_leader),
                reactions.reaction(player_leader, ReactionContext::Defeat)
            );
        }
    }
}
