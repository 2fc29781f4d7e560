use tic_tac_toe_engine::{GameEvent, Mark, WinningLine, DEFAULT_NAME_O, DEFAULT_NAME_X};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    NameEntry,
    Game,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Turn { mark: Mark, name: String },
    Won { mark: Mark, name: String },
    Draw,
}

/// What the window shows, rebuilt purely from engine notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub screen: Screen,
    pub name_x: String,
    pub name_o: String,
    pub score_x: u32,
    pub score_o: u32,
    pub status: Option<Status>,
    pub winning_line: Option<WinningLine>,
    celebrate: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            screen: Screen::NameEntry,
            name_x: DEFAULT_NAME_X.to_string(),
            name_o: DEFAULT_NAME_O.to_string(),
            score_x: 0,
            score_o: 0,
            status: None,
            winning_line: None,
            celebrate: false,
        }
    }
}

impl ViewState {
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::SessionStarted { name_x, name_o } => {
                self.screen = Screen::Game;
                self.name_x = name_x.clone();
                self.name_o = name_o.clone();
                self.winning_line = None;
            }
            GameEvent::TurnChanged { mark, name } => {
                // A new turn also follows a restart, so any old strike-through goes.
                self.winning_line = None;
                self.status = Some(Status::Turn {
                    mark: *mark,
                    name: name.clone(),
                });
            }
            GameEvent::Won { mark, name, line } => {
                self.winning_line = Some(*line);
                self.celebrate = true;
                self.status = Some(Status::Won {
                    mark: *mark,
                    name: name.clone(),
                });
            }
            GameEvent::Draw => self.status = Some(Status::Draw),
            GameEvent::ScoreUpdated { mark, score } => match mark {
                Mark::X => self.score_x = *score,
                Mark::O => self.score_o = *score,
            },
            GameEvent::SessionEnded => self.screen = Screen::NameEntry,
        }
    }

    /// Returns true once per win.
    pub fn take_celebration(&mut self) -> bool {
        std::mem::take(&mut self.celebrate)
    }

    pub fn active_turn(&self) -> Option<Mark> {
        match &self.status {
            Some(Status::Turn { mark, .. }) => Some(*mark),
            _ => None,
        }
    }

    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.name_x,
            Mark::O => &self.name_o,
        }
    }

    pub fn score(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.score_x,
            Mark::O => self.score_o,
        }
    }

    pub fn status_text(&self) -> Option<String> {
        self.status.as_ref().map(|status| match status {
            Status::Turn { name, .. } => format!("🕐 {}'s turn", name),
            Status::Won { mark, name } => format!("🎉 {} ({}) wins! 🎉", name, mark),
            Status::Draw => "It's a draw!".to_string(),
        })
    }
}
