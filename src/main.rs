//! Composition root: owns the single economy state, the accrual clock, and
//! the save lifecycle, and serializes player commands with the tick on one
//! thread.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use chrono::Utc;
use rand::Rng;

use grandline::build_info;
use grandline::constants::{
    AUTOSAVE_INTERVAL_SECONDS, DRAW_SAMPLE_MAX, MAX_CREW_SIZE, TICK_INTERVAL_MS,
};
use grandline::economy::{accrual_tick, draw, level_up, open_chest, set_crew};
use grandline::rarity::draw_rates;
use grandline::sagas::get_all_sagas;
use grandline::{EconomyState, SaveManager};

fn print_help() {
    println!("Grand Line Idle - Idle Collector\n");
    println!("Usage: grandline [command]\n");
    println!("Commands:");
    println!("  export     Print the saved state as JSON");
    println!("  --version  Show version information");
    println!("  --help     Show this help message");
}

fn print_commands() {
    println!("Commands:");
    println!("  status           Show balances, crew, and roster");
    println!("  chest            Open the treasure chest");
    println!("  draw [free]      Draw a recruit (10 diamonds, or the free draw)");
    println!("  crew <id>        Toggle a character in or out of the crew");
    println!("  level <id> [n]   Buy n levels (default 1)");
    println!("  rates            Show draw rates per rarity");
    println!("  sagas            Show saga and arc unlocks");
    println!("  help             Show this list");
    println!("  quit             Save and exit");
}

/// Resolves a typed id against the roster: exact id, unique id prefix, or
/// exact name (case-insensitive).
fn resolve_character_id(state: &EconomyState, query: &str) -> Option<String> {
    if state.characters.contains_key(query) {
        return Some(query.to_string());
    }
    let prefix_matches: Vec<&String> = state
        .characters
        .keys()
        .filter(|id| id.starts_with(query))
        .collect();
    if let [only] = prefix_matches.as_slice() {
        return Some((*only).clone());
    }
    state
        .characters
        .values()
        .find(|c| c.name.eq_ignore_ascii_case(query))
        .map(|c| c.id.clone())
}

fn print_status(state: &EconomyState) {
    println!(
        "Berries: {} (+{:.1}/s) | Diamonds: {} | Crew: {}/{}",
        state.berries as u64,
        state.bps,
        state.diamonds,
        state.crew.len(),
        MAX_CREW_SIZE
    );
    println!("Roster ({}):", state.characters.len());
    let mut roster: Vec<_> = state.characters.values().collect();
    roster.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    for character in roster {
        let aboard = if state.is_in_crew(&character.id) {
            " [crew]"
        } else {
            ""
        };
        println!(
            "  {:<8} {} {} ({}) lvl {}/{}{}",
            &character.id[..8.min(character.id.len())],
            character.icon,
            character.name,
            character.rarity.code(),
            character.level,
            character.max_level(),
            aboard
        );
    }
}

fn print_rates() {
    println!("Draw rates:");
    for (rarity, weight) in draw_rates() {
        println!("  {:<16} ({:<3}) {}%", rarity.name(), rarity.code(), weight);
    }
}

fn print_sagas(state: &EconomyState) {
    for saga in get_all_sagas() {
        let marker = if state.is_saga_unlocked(saga.id) {
            "open"
        } else {
            "locked"
        };
        println!("{} [{}]", saga.name, marker);
        for arc in &saga.arcs {
            let marker = if state.is_arc_unlocked(arc.id) {
                "open"
            } else {
                "locked"
            };
            println!("  {:<16} [{}]", arc.name, marker);
        }
    }
}

/// Applies one player command. Returns true when the state was mutated and
/// needs a save.
fn handle_command(state: &mut EconomyState, line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    let now_ms = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();

    match words.as_slice() {
        [] => false,
        ["status"] => {
            print_status(state);
            false
        }
        ["chest"] => match open_chest(state, now_ms) {
            Ok(event) => {
                println!("{}", event.message());
                true
            }
            Err(err) => {
                println!("{}", err);
                false
            }
        },
        ["draw"] | ["draw", "free"] => {
            let is_free = words.len() == 2;
            let sample = rng.gen_range(0.0..DRAW_SAMPLE_MAX);
            match draw(state, now_ms, sample, is_free, &mut rng) {
                Ok(event) => {
                    println!("{}", event.message());
                    true
                }
                Err(err) => {
                    println!("{}", err);
                    false
                }
            }
        }
        ["crew", query] => {
            let Some(id) = resolve_character_id(state, query) else {
                println!("no such character: {}", query);
                return false;
            };
            let selected = !state.is_in_crew(&id);
            match set_crew(state, &id, selected) {
                Ok(event) => {
                    println!("{}", event.message());
                    true
                }
                Err(err) => {
                    println!("{}", err);
                    false
                }
            }
        }
        ["level", query] | ["level", query, _] => {
            let levels = match words.get(2) {
                Some(count) => match count.parse::<u32>() {
                    Ok(parsed) => parsed,
                    Err(_) => {
                        println!("level count must be a number, got '{}'", count);
                        return false;
                    }
                },
                None => 1,
            };
            let Some(id) = resolve_character_id(state, query) else {
                println!("no such character: {}", query);
                return false;
            };
            match level_up(state, &id, levels) {
                Ok(event) => {
                    println!("{}", event.message());
                    true
                }
                Err(err) => {
                    println!("{}", err);
                    false
                }
            }
        }
        ["rates"] => {
            print_rates();
            false
        }
        ["sagas"] => {
            print_sagas(state);
            false
        }
        ["help"] => {
            print_commands();
            false
        }
        _ => {
            println!("unknown command: {} (try 'help')", line.trim());
            false
        }
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "export" => {
                let manager = SaveManager::new()?;
                let state = manager.load()?;
                let json = serde_json::to_string_pretty(&state)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                println!("{}", json);
                return Ok(());
            }
            "--version" | "-v" => {
                println!(
                    "grandline {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'grandline --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let manager = SaveManager::new()?;
    let mut state = if manager.save_exists() {
        match manager.load() {
            Ok(loaded) => loaded,
            Err(err) => {
                println!("Warning: could not load save ({}), starting fresh.", err);
                EconomyState::new()
            }
        }
    } else {
        EconomyState::new()
    };

    println!("Welcome aboard! Type 'help' for commands.");
    print_status(&state);

    // Stdin reader thread; commands drain into the same loop as the accrual
    // tick so ticks and transactions never interleave.
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    if tx.send(line.trim().to_string()).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut last_tick = Instant::now();
    let mut last_autosave = Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(line) => {
                if matches!(line.as_str(), "quit" | "exit" | "q") {
                    manager.save(&state)?;
                    println!("Saved. See you on the seas!");
                    break;
                }
                // Save after every mutation; a failed write never rolls back
                // the in-memory change.
                if handle_command(&mut state, &line) {
                    if let Err(err) = manager.save(&state) {
                        eprintln!("Warning: save failed: {}", err);
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                manager.save(&state)?;
                break;
            }
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            accrual_tick(&mut state);
            last_tick = Instant::now();
        }

        if last_autosave.elapsed() >= Duration::from_secs(AUTOSAVE_INTERVAL_SECONDS) {
            if let Err(err) = manager.save(&state) {
                eprintln!("Warning: autosave failed: {}", err);
            }
            last_autosave = Instant::now();
        }
    }

    Ok(())
}
