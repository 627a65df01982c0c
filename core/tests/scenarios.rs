use sweeper_core::*;

fn corner_mine() -> (Board, MineSet) {
    FixedBoardGenerator::new([(0, 0)])
        .generate(GameConfig::new(3, 3, 1))
        .unwrap()
}

#[test]
fn open_region_click_wins_in_one_move() {
    let (mut board, mines) = corner_mine();

    let result = reveal_cell(&mut board, &mines, (2, 2)).unwrap();

    assert_eq!(result.outcome, RevealOutcome::Won);
    assert_eq!(result.newly_revealed.len(), 8);
    assert_eq!(remaining_flags(board.mine_count(), &board), 1);
}

#[test]
fn mine_click_loses() {
    let (mut board, mines) = corner_mine();

    let result = reveal_cell(&mut board, &mines, (0, 0)).unwrap();

    assert_eq!(result.outcome, RevealOutcome::Lost);
    assert!(board[(0, 0)].revealed);
    assert_eq!(board.state(), GameState::Lost);
}

#[test]
fn marks_come_back_to_clear() {
    for cycle in [MarkCycle::FlagOnly, MarkCycle::FlagQuestion] {
        let (mut board, _) = corner_mine();
        let mut last = Mark::Clear;
        for _ in 0..cycle.period() {
            last = cycle_mark(&mut board, (1, 2), cycle).unwrap();
        }
        assert_eq!(last, Mark::Clear, "{cycle:?}");
    }
}

#[test]
fn presets_use_lowercase_names() {
    assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");

    let hard: Difficulty = serde_json::from_str("\"hard\"").unwrap();
    assert_eq!(GameConfig::from(hard), GameConfig::new(24, 20, 99));
}

#[test]
fn session_survives_a_json_trip() {
    let mut session =
        Session::with_difficulty(Difficulty::Easy, MarkCycle::FlagQuestion, 3).unwrap();
    let safe = session
        .board()
        .iter()
        .find(|(_, cell)| cell.value.count() == Some(1))
        .map(|(pos, _)| pos)
        .unwrap();
    session.reveal(safe).unwrap();

    let stored = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&stored).unwrap();

    assert_eq!(restored, session);
    assert_eq!(restored.state(), GameState::InProgress);
}

#[test]
fn loaded_board_ignores_stale_counters() {
    let (board, mines) = corner_mine();
    let mut stored = serde_json::to_value(&board).unwrap();
    stored["hidden_safe"] = serde_json::json!(2);
    stored["mine_count"] = serde_json::json!(0);

    let mut loaded: Board = serde_json::from_value(stored).unwrap();

    assert_eq!(loaded, board);
    assert_eq!(loaded.state(), GameState::NotStarted);
    let result = reveal_cell(&mut loaded, &mines, (2, 2)).unwrap();
    assert_eq!(result.outcome, RevealOutcome::Won);
}

#[test]
fn loaded_board_with_wrong_counts_is_rejected() {
    let (board, _) = corner_mine();
    let mut stored = serde_json::to_value(&board).unwrap();
    // row-major index 8 is (2, 2), a zero cell
    stored["cells"]["data"][8]["value"] = serde_json::json!({ "Safe": 4 });

    assert!(serde_json::from_value::<Board>(stored).is_err());
}
