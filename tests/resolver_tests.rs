use readalong::kernel::rate::RateModel;
use readalong::kernel::resolver::{
    resolve_word_state, segment_progress, StateTracker, TransitionWindows, VisualState,
};
use readalong::kernel::scheduler::{ScriptScheduler, Segment, Turn, Word, WordId};
use readalong::script::demo_script;

fn word(start: f64, end: f64) -> Word {
    Word {
        text: "word".to_string(),
        start,
        end,
        char_count: 4,
    }
}

#[test]
fn test_five_state_boundaries() {
    let w = word(1.0, 2.0);
    let windows = TransitionWindows::new(0.25, 0.5).unwrap();

    assert_eq!(resolve_word_state(&w, 0.0, windows), VisualState::Future);
    assert_eq!(resolve_word_state(&w, 0.74, windows), VisualState::Future);
    assert_eq!(resolve_word_state(&w, 0.75, windows), VisualState::TransitioningIn);
    assert_eq!(resolve_word_state(&w, 0.99, windows), VisualState::TransitioningIn);
    assert_eq!(resolve_word_state(&w, 1.0, windows), VisualState::Active);
    assert_eq!(resolve_word_state(&w, 1.99, windows), VisualState::Active);
    assert_eq!(resolve_word_state(&w, 2.0, windows), VisualState::TransitioningOut);
    assert_eq!(resolve_word_state(&w, 2.49, windows), VisualState::TransitioningOut);
    assert_eq!(resolve_word_state(&w, 2.5, windows), VisualState::Past);
    assert_eq!(resolve_word_state(&w, 1e9, windows), VisualState::Past);
}

#[test]
fn test_zero_windows_degenerate_to_three_states() {
    let w = word(1.0, 2.0);
    let none = TransitionWindows::NONE;

    assert_eq!(resolve_word_state(&w, 0.999, none), VisualState::Future);
    assert_eq!(resolve_word_state(&w, 1.0, none), VisualState::Active);
    assert_eq!(resolve_word_state(&w, 2.0, none), VisualState::Past);
}

#[test]
fn test_negative_and_nan_time_is_future() {
    let w = word(0.0, 0.5);
    assert_eq!(resolve_word_state(&w, -3.0, TransitionWindows::NONE), VisualState::Future);
    assert_eq!(resolve_word_state(&w, f64::NAN, TransitionWindows::NONE), VisualState::Future);

    // A lead window reaches into negative time
    let windows = TransitionWindows::new(0.1, 0.0).unwrap();
    assert_eq!(resolve_word_state(&w, -0.05, windows), VisualState::TransitioningIn);
}

#[test]
fn test_hi_there_at_fifty_ms() {
    let timeline = ScriptScheduler::build_timeline(
        &[Turn::new("A", "Hi there")],
        RateModel::new(1000.0).unwrap(),
    );
    let words = &timeline.segments()[0].words;

    assert_eq!(resolve_word_state(&words[0], 0.05, TransitionWindows::NONE), VisualState::Active);
    assert_eq!(resolve_word_state(&words[1], 0.05, TransitionWindows::NONE), VisualState::Future);
}

#[test]
fn test_states_never_regress_while_time_advances() {
    let timeline = ScriptScheduler::build_timeline(&demo_script(), RateModel::default());
    let total = timeline.total_duration();

    for windows in [
        TransitionWindows::NONE,
        TransitionWindows::new(0.05, 0.6).unwrap(),
        TransitionWindows::new(0.3, 0.0).unwrap(),
    ] {
        for (_, w) in timeline.words() {
            let mut previous = VisualState::Future;
            let mut t = 0.0;
            while t <= total + 1.0 {
                let state = resolve_word_state(w, t, windows);
                assert!(state >= previous, "{:?} regressed to {:?} at {}", previous, state, t);
                if windows.in_window() == 0.0 {
                    assert_ne!(state, VisualState::TransitioningIn);
                }
                if windows.out_window() == 0.0 {
                    assert_ne!(state, VisualState::TransitioningOut);
                }
                previous = state;
                t += 0.01;
            }
            assert_eq!(previous, VisualState::Past, "Every word ends read");
        }
    }
}

#[test]
fn test_invalid_windows_rejected() {
    assert!(TransitionWindows::new(-0.1, 0.0).is_err());
    assert!(TransitionWindows::new(0.0, f64::NAN).is_err());
    assert!(TransitionWindows::new(0.0, 0.0).is_ok());
}

#[test]
fn test_segment_progress_clamps() {
    let segment = Segment {
        speaker: "A".into(),
        text: "x".into(),
        start: 2.0,
        end: 4.0,
        words: vec![],
    };
    assert_eq!(segment_progress(&segment, 0.0), 0.0);
    assert_eq!(segment_progress(&segment, 3.0), 0.5);
    assert_eq!(segment_progress(&segment, 4.0), 1.0);
    assert_eq!(segment_progress(&segment, 100.0), 1.0);

    let empty = Segment {
        speaker: "B".into(),
        text: " ".into(),
        start: 4.0,
        end: 4.0,
        words: vec![],
    };
    assert_eq!(segment_progress(&empty, 3.9), 0.0);
    assert_eq!(segment_progress(&empty, 4.0), 1.0);
}

#[test]
fn test_tracker_reports_only_changes() {
    let timeline = ScriptScheduler::build_timeline(
        &[Turn::new("A", "Hi there")],
        RateModel::new(1000.0).unwrap(),
    );
    let mut tracker = StateTracker::new(&timeline);
    let none = TransitionWindows::NONE;

    let (words, segments) = tracker.recompute(&timeline, 0.05, none, true);
    assert_eq!(words.len(), 1, "Only 'Hi' changed");
    assert_eq!(words[0].id, WordId::new(0, 0));
    assert_eq!(words[0].state, VisualState::Active);
    assert_eq!(segments.len(), 1);

    let (words, _) = tracker.recompute(&timeline, 0.06, none, true);
    assert!(words.is_empty(), "No word changed between 0.05 and 0.06");

    let (words, segments) = tracker.recompute(&timeline, 0.06, none, false);
    assert_eq!(words.len(), 2, "Forced recompute reports everything");
    assert_eq!(segments.len(), 1);

    let (words, segments) = tracker.fill(VisualState::Future, 0.0);
    assert!(words.iter().all(|u| u.state == VisualState::Future));
    assert!(segments.iter().all(|s| s.progress == 0.0 && !s.complete));
    assert_eq!(tracker.word_state(WordId::new(0, 0)), Some(VisualState::Future));
}

#[test]
fn test_windows_deserialize_through_validation() {
    let windows: TransitionWindows =
        serde_json::from_str(r#"{"in_window":0.1,"out_window":0.4}"#).unwrap();
    assert_eq!(windows, TransitionWindows::new(0.1, 0.4).unwrap());

    let negative_in = r#"{"in_window":-1.0,"out_window":0.4}"#;
    let negative_out = r#"{"in_window":0.0,"out_window":-0.5}"#;
    assert!(serde_json::from_str::<TransitionWindows>(negative_in).is_err());
    assert!(serde_json::from_str::<TransitionWindows>(negative_out).is_err());
}

#[test]
fn test_deserialized_zero_rate_is_rejected() {
    let rate = serde_json::from_str::<RateModel>(r#"{"characters_per_minute":0}"#);
    assert!(rate.is_err(), "a zero rate would give blank turns a NaN duration");

    let rate: RateModel = serde_json::from_str(r#"{"characters_per_minute":1000}"#).unwrap();
    let timeline = ScriptScheduler::build_timeline(&[Turn::new("A", "   ")], rate);
    assert_eq!(timeline.total_duration(), 0.0);
}
