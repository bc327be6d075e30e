// Double Vision: two avatars, one keyboard.
// Controls: arrow keys or W/A/S/D move the selected avatar, Space swaps avatars, R restarts, Q quits.
// Modes: interactive (default), check, export, custom <levels.json>. Add --level N to start elsewhere.

use doublevision::console_interface::ConsoleInput::*;
use doublevision::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use doublevision::core::{Cue, EXPORT_FILE, Game, GameEvent, LOG_FILE, step};
use doublevision::levels::{LevelCatalog, builtin_levels, definitions_from_json, definitions_to_json};
use doublevision::logging::init_logger;
use doublevision::models::GameRenderState;
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut positional = Vec::new();
    let mut start_level = 0;
    let mut args_iter = args.iter();
    while let Some(arg) = args_iter.next() {
        if arg == "--level" {
            let value = args_iter.next().ok_or("--level needs a level number")?;
            start_level = value.parse::<usize>()?;
        } else {
            positional.push(arg.as_str());
        }
    }
    let switch = positional.first().copied().unwrap_or("interactive");

    init_logger(LOG_FILE)?;

    match switch {
        "check" => {
            run_check()?;
        }
        "export" => {
            run_export()?;
        }
        "custom" => {
            let path = positional.get(1).ok_or("custom mode needs a path to a levels json file")?;
            let json = std::fs::read_to_string(path)?;
            let catalog = LevelCatalog::compile(&definitions_from_json(&json)?)?;
            run_interactive(catalog, start_level)?;
        }
        "interactive" => {
            run_interactive(LevelCatalog::builtin()?, start_level)?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive', 'check', 'export' or 'custom'. defaulting to interactive",
                switch
            );
            run_interactive(LevelCatalog::builtin()?, start_level)?;
        }
    }

    Ok(())
}

fn run_check() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = LevelCatalog::builtin()?;
    for (index, level) in catalog.iter().enumerate() {
        let size = level.size();
        println!(
            "{}: {} ({}x{}, {} plates, {} glyphs)",
            index,
            level.name,
            size.x,
            size.y,
            level.plates.len(),
            level.glyphs.len()
        );
    }
    println!("{} levels ok", catalog.len());
    Ok(())
}

fn run_export() -> Result<(), Box<dyn std::error::Error>> {
    let json = definitions_to_json(&builtin_levels())?;
    std::fs::create_dir_all("exports")?;
    std::fs::write(EXPORT_FILE, json)?;
    println!("Level catalog exported to {}", EXPORT_FILE);
    Ok(())
}

fn run_interactive(catalog: LevelCatalog, start_level: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = Game::new(catalog);
    if start_level != 0 {
        game.load_level(start_level);
    }
    game.drain_events();
    info!("starting on level {} '{}'", game.current_level(), game.level_name());

    let mut terminal = setup_terminal()?;
    let result = play(&mut terminal, &mut game);
    cleanup_terminal()?;
    result
}

fn play(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
) -> Result<(), Box<dyn std::error::Error>> {
    let first_render = GameRenderState {
        game: &*game,
        messages: Vec::new(),
        last_cues: Vec::new(),
        last_update: None,
    };
    render_game(terminal, &first_render)?;

    loop {
        match handle_input()? {
            Quit => break,
            UserAction(user_action) => {
                let update = step(game, user_action);
                let mut messages = Vec::new();
                let mut last_cues: Vec<Cue> = Vec::new();
                for event in game.drain_events() {
                    match event {
                        GameEvent::Status(status) => messages.push(status),
                        GameEvent::Cue(cue) => last_cues.push(cue),
                        _ => {}
                    }
                }
                let to_render = GameRenderState {
                    game: &*game,
                    messages,
                    last_cues,
                    last_update: Some(update),
                };
                render_game(terminal, &to_render)?;
            }
            Timeout | Unknown => {}
        }
    }

    Ok(())
}
