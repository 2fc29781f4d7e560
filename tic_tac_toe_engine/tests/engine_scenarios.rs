use proptest::prelude::*;
use tic_tac_toe_engine::{
    FnSink, GameEngine, GameEvent, Mark, MoveError, RoundOutcome, WinningLine, BOARD_SIZE,
    DEFAULT_NAME_X, WINNING_LINES,
};

fn session() -> GameEngine {
    let mut engine: GameEngine = GameEngine::default();
    engine.start_session("", "");
    engine.sink_mut().clear();
    engine
}

fn play(engine: &mut GameEngine, moves: &[usize]) {
    for &index in moves {
        engine
            .place_mark(index)
            .unwrap_or_else(|e| panic!("move {index} rejected: {e}"));
    }
}

#[test]
fn top_row_win_for_x() {
    let mut engine = session();
    play(&mut engine, &[0, 3, 1, 4, 2]);

    let line: WinningLine = WINNING_LINES[0];
    assert_eq!(line.cells(), [0, 1, 2]);
    assert_eq!(
        engine.outcome(),
        RoundOutcome::Won {
            mark: Mark::X,
            line
        }
    );
    assert!(engine.sink().contains(&GameEvent::Won {
        mark: Mark::X,
        name: DEFAULT_NAME_X.to_string(),
        line,
    }));
    assert_eq!(engine.score(Mark::X), 1);
    assert_eq!(engine.score(Mark::O), 0);
    assert!(!engine.is_round_active());
}

#[test]
fn full_board_without_line_is_a_draw() {
    let mut engine = session();
    play(&mut engine, &[0, 1, 2, 3, 5, 4, 6, 8, 7]);

    assert_eq!(engine.outcome(), RoundOutcome::Draw);
    assert_eq!(engine.sink().last(), Some(&GameEvent::Draw));
    assert!(!engine
        .sink()
        .iter()
        .any(|e| matches!(e, GameEvent::ScoreUpdated { .. } | GameEvent::Won { .. })));
    assert_eq!(engine.score(Mark::X), 0);
    assert_eq!(engine.score(Mark::O), 0);
    assert!(engine.board().is_full());
}

#[test]
fn win_on_last_cell_beats_draw() {
    let mut engine = session();
    // X completes the 2-4-6 diagonal with the ninth mark.
    play(&mut engine, &[0, 1, 2, 3, 4, 8, 5, 7, 6]);

    assert_eq!(
        engine.outcome(),
        RoundOutcome::Won {
            mark: Mark::X,
            line: WINNING_LINES[7]
        }
    );
    assert!(!engine.sink().contains(&GameEvent::Draw));
}

#[test]
fn same_cell_twice_is_a_no_op() {
    let mut engine = session();
    engine.place_mark(0).unwrap();
    let board = *engine.board();
    let events = engine.sink().len();

    assert_eq!(engine.place_mark(0), Err(MoveError::CellOccupied(0)));
    assert_eq!(*engine.board(), board);
    assert_eq!(engine.current_turn(), Mark::O);
    assert_eq!(engine.sink().len(), events);
}

#[test]
fn new_session_resets_scores() {
    let mut engine = session();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    engine.start_round();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    assert_eq!(engine.score(Mark::X), 2);

    engine.end_session();
    engine.start_session("Ada", "Grace");

    assert_eq!(engine.score(Mark::X), 0);
    assert_eq!(engine.score(Mark::O), 0);
    assert_eq!(engine.rounds_completed(), 0);
    assert!(engine.is_round_active());
}

#[test]
fn closure_sink_receives_turns() {
    let mut turns = Vec::new();
    {
        let mut engine = GameEngine::new(FnSink(|event: GameEvent| {
            if let GameEvent::TurnChanged { mark, .. } = event {
                turns.push(mark);
            }
        }));
        engine.start_session("a", "b");
        engine.place_mark(4).unwrap();
        engine.place_mark(0).unwrap();
    }
    assert_eq!(turns, vec![Mark::X, Mark::O, Mark::X]);
}

proptest! {
    #[test]
    fn board_holds_exactly_the_placed_marks(moves in prop::collection::vec(0usize..12, 0..20)) {
        let mut engine = session();
        let mut expected = [None; BOARD_SIZE];
        let mut turn = Mark::X;

        for index in moves {
            let before = *engine.board();
            let events_before = engine.sink().len();
            let active = engine.is_round_active();

            match engine.place_mark(index) {
                Ok(outcome) => {
                    prop_assert!(active);
                    expected[index] = Some(turn);
                    if !outcome.is_terminal() {
                        turn = turn.opponent();
                    }
                }
                Err(_) => {
                    prop_assert_eq!(*engine.board(), before);
                    prop_assert_eq!(engine.sink().len(), events_before);
                }
            }

            prop_assert_eq!(engine.board().cells(), &expected);
            prop_assert!(engine.board().mark_count() <= BOARD_SIZE);
            prop_assert_eq!(engine.current_turn(), turn);
        }
    }

    #[test]
    fn turns_alternate_from_x(moves in Just((0..BOARD_SIZE).collect::<Vec<_>>()).prop_shuffle()) {
        let mut engine = session();
        let mut expected = Mark::X;

        for index in moves {
            if !engine.is_round_active() {
                break;
            }
            prop_assert_eq!(engine.current_turn(), expected);
            engine.place_mark(index).unwrap();
            expected = expected.opponent();
        }

        let turns: Vec<Mark> = engine
            .sink()
            .iter()
            .filter_map(|e| match e {
                GameEvent::TurnChanged { mark, .. } => Some(*mark),
                _ => None,
            })
            .collect();
        for (i, mark) in turns.iter().enumerate() {
            let want = if i % 2 == 0 { Mark::O } else { Mark::X };
            prop_assert_eq!(*mark, want);
        }
    }

    #[test]
    fn win_reported_iff_a_line_is_uniform(moves in Just((0..BOARD_SIZE).collect::<Vec<_>>()).prop_shuffle()) {
        let mut engine = session();

        for index in moves {
            if engine.place_mark(index).is_err() {
                break;
            }
            let board = engine.board();
            let uniform = WINNING_LINES.iter().any(|line| {
                let [a, b, c] = line.cells();
                board.get(a).is_some() && board.get(a) == board.get(b) && board.get(b) == board.get(c)
            });
            match engine.outcome() {
                RoundOutcome::Won { .. } => prop_assert!(uniform),
                RoundOutcome::Draw => {
                    prop_assert!(!uniform);
                    prop_assert!(board.is_full());
                }
                RoundOutcome::InProgress => {
                    prop_assert!(!uniform);
                    prop_assert!(!board.is_full());
                }
            }
        }

        let wins = engine.sink().iter().filter(|e| matches!(e, GameEvent::Won { .. })).count() as u32;
        prop_assert_eq!(engine.score(Mark::X) + engine.score(Mark::O), wins);
        prop_assert!(wins <= 1);
    }
}
