use super::*;

fn ussd_steps() -> Vec<ConversationStep> {
    vec![
        ConversationStep::new(1, "Dial *123# to begin", "Welcome to NaijaCare. Choose: 1) Maternal 2) Child 3) General"),
        ConversationStep::new(2, "1", "Maternal health. Symptoms? 1) Headache 2) Swelling 3) Fever"),
        ConversationStep::new(3, "2", "Risk tip: Sudden swelling can signal preeclampsia."),
        ConversationStep::new(4, "1", "Connecting you to a clinician…"),
        ConversationStep::new(5, "—", "Thanks! A nurse will call shortly. Save: 0800-NAIJACARE"),
    ]
}

fn numbered_steps(n: u32) -> Vec<ConversationStep> {
    (1..=n).map(|i| ConversationStep::new(i, format!("p{i}"), format!("r{i}"))).collect()
}

// =============================================================================
// Script validation
// =============================================================================

#[test]
fn script_rejects_empty_steps() {
    assert_eq!(Script::new(Vec::new()), Err(WidgetError::EmptyScript));
}

#[test]
fn script_rejects_sequence_gap() {
    let mut steps = numbered_steps(3);
    steps[2].sequence_index = 4;
    let err = Script::new(steps).expect_err("gap should be rejected");
    assert_eq!(err, WidgetError::StepOutOfOrder { position: 2, expected: 3, found: 4 });
}

#[test]
fn script_rejects_duplicate_index() {
    let mut steps = numbered_steps(3);
    steps[1].sequence_index = 1;
    assert!(matches!(Script::new(steps), Err(WidgetError::StepOutOfOrder { position: 1, .. })));
}

#[test]
fn script_rejects_blank_reply() {
    let mut steps = numbered_steps(2);
    steps[1].system_reply = "   ".to_owned();
    assert_eq!(Script::new(steps), Err(WidgetError::BlankStep { index: 2, field: "reply" }));
}

#[test]
fn script_rejects_blank_prompt() {
    let mut steps = numbered_steps(2);
    steps[0].user_prompt = String::new();
    assert_eq!(Script::new(steps), Err(WidgetError::BlankStep { index: 1, field: "prompt" }));
}

#[test]
fn script_deserializes_through_validation() {
    let script: Script = serde_json::from_str(
        r#"[{"sequence_index":1,"user_prompt":"hi","system_reply":"hello"},
            {"sequence_index":2,"user_prompt":"1","system_reply":"bye"}]"#,
    )
    .expect("valid script");
    assert_eq!(script.len(), 2);
    assert_eq!(script.steps()[1].system_reply, "bye");
}

#[test]
fn script_deserialize_rejects_empty_array() {
    let err = serde_json::from_str::<Script>("[]").expect_err("empty script must fail");
    assert!(err.to_string().contains("no steps"));
}

// =============================================================================
// Player navigation
// =============================================================================

#[test]
fn player_from_steps_fails_fast_on_empty_script() {
    assert_eq!(ConversationPlayer::from_steps(Vec::new()), Err(WidgetError::EmptyScript));
}

#[test]
fn player_starts_at_first_step() {
    let player = ConversationPlayer::from_steps(ussd_steps()).expect("player");
    assert_eq!(player.current_index(), 0);
    assert_eq!(player.visible_steps().len(), 1);
    assert!(!player.can_retreat());
    assert!(player.can_advance());
}

#[test]
fn five_step_script_walks_to_final_reply() {
    let mut player = ConversationPlayer::from_steps(ussd_steps()).expect("player");
    for _ in 0..4 {
        player.advance();
    }
    assert_eq!(player.current_index(), 4);
    assert_eq!(player.visible_steps().len(), 5);
    assert_eq!(
        player.visible_steps().last().map(|s| s.system_reply.as_str()),
        Some("Thanks! A nurse will call shortly. Save: 0800-NAIJACARE")
    );
    assert!(!player.can_advance());

    player.advance();
    assert_eq!(player.current_index(), 4);
}

#[test]
fn advance_is_idempotent_at_upper_bound_for_any_length() {
    for n in 1..=8 {
        let mut player = ConversationPlayer::from_steps(numbered_steps(n)).expect("player");
        for _ in 1..n {
            player.advance();
        }
        let last = (n - 1) as usize;
        assert_eq!(player.current_index(), last, "length {n}");
        player.advance();
        player.advance();
        assert_eq!(player.current_index(), last, "length {n}");
    }
}

#[test]
fn retreat_at_first_step_is_noop() {
    let mut player = ConversationPlayer::from_steps(numbered_steps(3)).expect("player");
    player.retreat();
    assert_eq!(player.current_index(), 0);
}

#[test]
fn advance_then_retreat_round_trips_from_interior() {
    let mut player = ConversationPlayer::from_steps(numbered_steps(6)).expect("player");
    for start in 1..5 {
        while player.current_index() < start {
            player.advance();
        }
        player.advance();
        player.retreat();
        assert_eq!(player.current_index(), start);
    }
}

#[test]
fn visible_steps_track_current_index() {
    let steps = numbered_steps(4);
    let mut player = ConversationPlayer::from_steps(steps.clone()).expect("player");
    loop {
        let visible = player.visible_steps();
        assert_eq!(visible.len(), player.current_index() + 1);
        assert_eq!(visible.last(), Some(&steps[player.current_index()]));
        assert_eq!(player.current_step(), &steps[player.current_index()]);
        assert_eq!(visible, &steps[..visible.len()]);
        if !player.can_advance() {
            break;
        }
        player.advance();
    }
}

#[test]
fn single_step_script_cannot_move() {
    let mut player = ConversationPlayer::from_steps(numbered_steps(1)).expect("player");
    assert!(!player.can_advance());
    assert!(!player.can_retreat());
    player.advance();
    player.retreat();
    assert_eq!(player.current_index(), 0);
}

#[test]
fn players_sharing_a_script_are_independent() {
    let script = Arc::new(Script::new(numbered_steps(3)).expect("script"));
    let mut a = ConversationPlayer::new(Arc::clone(&script));
    let b = ConversationPlayer::new(Arc::clone(&script));
    a.advance();
    a.advance();
    assert_eq!(a.current_index(), 2);
    assert_eq!(b.current_index(), 0);
}

#[test]
fn validated_scripts_and_players_are_never_empty() {
    let player = ConversationPlayer::from_steps(numbered_steps(1)).expect("player");
    assert!(!player.script().is_empty());
    assert!(!player.is_empty());
    assert_eq!(player.len(), 1);
}
