use thiserror::Error;

/// Why a placement was ignored. None of these change engine state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("round is not active")]
    RoundInactive,
    #[error("cell {0} is out of range")]
    OutOfRange(usize),
    #[error("cell {0} is already taken")]
    CellOccupied(usize),
}
