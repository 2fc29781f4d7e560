use tracing::{debug, info};

use super::error::MoveError;
use super::message::{EventSink, GameEvent};
use super::models::{Board, Mark, Player, RoundOutcome, BOARD_SIZE};

/// Board, turn and score state for one local two-player session.
///
/// Every state change is reported to the sink `S`; the engine itself has no
/// knowledge of how (or whether) anything is drawn.
#[derive(Debug, Clone)]
pub struct GameEngine<S: EventSink = Vec<GameEvent>> {
    board: Board,
    current_turn: Mark,
    round_active: bool,
    session_open: bool,
    outcome: RoundOutcome,
    player_x: Player,
    player_o: Player,
    rounds_completed: u32,
    sink: S,
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new(Vec::new())
    }
}

impl<S: EventSink> GameEngine<S> {
    pub fn new(sink: S) -> Self {
        GameEngine {
            board: Board::new(),
            current_turn: Mark::X,
            round_active: false,
            session_open: false,
            outcome: RoundOutcome::InProgress,
            player_x: Player::new(Mark::X, ""),
            player_o: Player::new(Mark::O, ""),
            rounds_completed: 0,
            sink,
        }
    }

    /// Opens a session with fresh scores and starts its first round.
    ///
    /// Blank names (after trimming) are replaced by the per-mark defaults.
    pub fn start_session(&mut self, name_x: &str, name_o: &str) {
        self.player_x = Player::new(Mark::X, name_x);
        self.player_o = Player::new(Mark::O, name_o);
        self.rounds_completed = 0;
        self.session_open = true;

        info!(
            "Session started: {} (X) vs {} (O)",
            self.player_x.name, self.player_o.name
        );

        self.sink.notify(GameEvent::SessionStarted {
            name_x: self.player_x.name.clone(),
            name_o: self.player_o.name.clone(),
        });
        for mark in [Mark::X, Mark::O] {
            self.sink.notify(GameEvent::ScoreUpdated { mark, score: 0 });
        }

        self.start_round();
    }

    /// Clears the board and hands the first move to X. Scores are kept.
    pub fn start_round(&mut self) {
        self.board.clear();
        self.current_turn = Mark::X;
        self.round_active = true;
        self.outcome = RoundOutcome::InProgress;

        debug!("Round started. First player: {:?}", self.current_turn);

        self.notify_turn();
    }

    /// Places the current player's mark on `index`.
    ///
    /// Rejected moves leave every field untouched and emit nothing; the error
    /// only says why.
    pub fn place_mark(&mut self, index: usize) -> Result<RoundOutcome, MoveError> {
        if !self.round_active {
            debug!("Move rejected: round is not active.");
            return Err(MoveError::RoundInactive);
        }
        if index >= BOARD_SIZE {
            debug!("Move rejected: cell {} is out of range.", index);
            return Err(MoveError::OutOfRange(index));
        }
        if !self.board.is_empty(index) {
            debug!("Move rejected: cell {} already taken.", index);
            return Err(MoveError::CellOccupied(index));
        }

        let mark = self.current_turn;
        self.board.set(index, mark);

        if let Some((winner, line)) = self.board.winning_line() {
            self.round_active = false;
            self.rounds_completed += 1;
            self.outcome = RoundOutcome::Won { mark: winner, line };

            let name = self.player(winner).name.clone();
            info!("Round over: {} ({}) wins on {:?}.", name, winner, line.cells());
            self.sink.notify(GameEvent::Won {
                mark: winner,
                name,
                line,
            });

            let player = self.player_mut(winner);
            player.score += 1;
            let score = player.score;
            self.sink.notify(GameEvent::ScoreUpdated {
                mark: winner,
                score,
            });
        } else if self.board.is_full() {
            self.round_active = false;
            self.rounds_completed += 1;
            self.outcome = RoundOutcome::Draw;

            info!("Round over: draw.");
            self.sink.notify(GameEvent::Draw);
        } else {
            self.current_turn = mark.opponent();
            debug!("Turn switched: now it's {:?}'s turn.", self.current_turn);
            self.notify_turn();
        }

        Ok(self.outcome)
    }

    /// Closes the session and freezes the current round. Names, scores and
    /// the board are left as they are.
    pub fn end_session(&mut self) {
        self.session_open = false;
        self.round_active = false;

        info!(
            "Session ended. Final score: {} {} : {} {}",
            self.player_x.name, self.player_x.score, self.player_o.score, self.player_o.name
        );

        self.sink.notify(GameEvent::SessionEnded);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    pub fn is_round_active(&self) -> bool {
        self.round_active
    }

    pub fn is_session_open(&self) -> bool {
        self.session_open
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Rounds that reached a win or a draw since the session started.
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    pub fn score(&self, mark: Mark) -> u32 {
        self.player(mark).score
    }

    pub fn name(&self, mark: Mark) -> &str {
        &self.player(mark).name
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn player_mut(&mut self, mark: Mark) -> &mut Player {
        match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        }
    }

    fn notify_turn(&mut self) {
        let mark = self.current_turn;
        let name = self.player(mark).name.clone();
        self.sink.notify(GameEvent::TurnChanged { mark, name });
    }
}
