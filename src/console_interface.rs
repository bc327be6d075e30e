use crate::core::{Board, Direction, Occupant, UserAction, Vec2};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const FLOOR_COLORS: [Color; 5] = [
    Color::Rgb(0xDC, 0xC4, 0x9A),
    Color::Rgb(0xE7, 0xD6, 0xB8),
    Color::Rgb(0xD7, 0xBB, 0x8C),
    Color::Rgb(0xE4, 0xCA, 0x7A),
    Color::Rgb(0xEA, 0xBD, 0x73),
];
const WALL_COLORS: [Color; 5] = [
    Color::Rgb(0x54, 0x54, 0x54),
    Color::Rgb(0x3C, 0x3C, 0x3C),
    Color::Rgb(0x50, 0x50, 0x50),
    Color::Rgb(0x44, 0x44, 0x44),
    Color::Rgb(0x46, 0x46, 0x46),
];
const BLUE_AVATAR_COLOR: Color = Color::Rgb(0x30, 0x3D, 0x74);
const GREEN_AVATAR_COLOR: Color = Color::Rgb(0x4B, 0x83, 0x07);
const GOAL_COLOR: Color = Color::Rgb(0xFF, 0xC9, 0x0E);
const BOX_COLOR: Color = Color::Rgb(0x76, 0x52, 0x00);
const SWITCH_COLOR: Color = Color::Rgb(0xC3, 0xC3, 0xC3);
const DOOR_COLOR: Color = Color::Rgb(0x47, 0x47, 0x47);

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    let game = state.game;
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(f.area());

        let title = format!("Double Vision - {}", game.level_name());
        let game_paragraph = Paragraph::new(board_lines(state))
            .block(Block::default().borders(Borders::ALL).title(title))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status = if state.messages.is_empty() {
            game.status().to_string()
        } else {
            state.messages.join(" | ")
        };
        let mut controls = format!(
            "Arrows/WASD move, Space swaps, R restarts, Q quits | Controlling: {}",
            game.controlling()
        );
        if !state.last_cues.is_empty() {
            let cues: Vec<&str> = state.last_cues.iter().map(|cue| cue.sound_name()).collect();
            controls = format!("{} | Sound: {}", controls, cues.join(", "));
        }
        if let Some(update) = &state.last_update {
            controls = format!("{} | Last: {:?}", controls, update);
        }

        let instruction_paragraph = Paragraph::new(vec![Line::from(status), Line::from(controls)])
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

fn board_lines(state: &GameRenderState) -> Vec<Line<'static>> {
    let game = state.game;
    let board = game.board();
    let controlled = game.avatar(game.controlling());
    (0..board.height())
        .map(|y| {
            let spans: Vec<Span> = (0..board.width())
                .map(|x| {
                    let pos = Vec2::new(x, y);
                    let occupant = board.get(&pos).unwrap_or(Occupant::Wall);
                    let shade = board.shade(&pos).unwrap_or(0);
                    let text = if pos == controlled {
                        "[]".to_string()
                    } else if let Some(glyph) = game.overlay(&pos) {
                        format!("{} ", glyph)
                    } else {
                        "  ".to_string()
                    };
                    Span::styled(text, Style::default().fg(Color::Black).bg(cell_color(occupant, shade)))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn cell_color(occupant: Occupant, shade: u8) -> Color {
    let shade = shade as usize;
    match occupant {
        Occupant::Floor => FLOOR_COLORS[shade % FLOOR_COLORS.len()],
        Occupant::Wall => WALL_COLORS[shade % WALL_COLORS.len()],
        Occupant::BlueAvatar | Occupant::BlueSwitch => BLUE_AVATAR_COLOR,
        Occupant::GreenAvatar | Occupant::GreenSwitch => GREEN_AVATAR_COLOR,
        Occupant::BlueGoal | Occupant::GreenGoal => GOAL_COLOR,
        Occupant::Box => BOX_COLOR,
        Occupant::BoxSwitch => SWITCH_COLOR,
        Occupant::Door => DOOR_COLOR,
    }
}

/// Plain-text rendering of the board using the level legend, one row per line
pub fn render_board_to_string(board: &Board) -> String {
    let mut result = String::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            let occupant = board.get(&Vec2::new(x, y)).unwrap_or(Occupant::Wall);
            result.push(occupant.to_char());
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(map_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}

fn map_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        KeyCode::Char(' ') => ConsoleInput::UserAction(UserAction::SwapControl),
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Restart),
        _ => ConsoleInput::Unknown,
    }
}
