use crate::core::{Cue, Game, GameUpdate};

/// Everything the terminal host draws for one frame
pub struct GameRenderState<'a> {
    pub game: &'a Game,
    pub messages: Vec<String>,
    pub last_cues: Vec<Cue>,
    pub last_update: Option<GameUpdate>,
}
