use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, Some(5));
    assert!(limits.move_time.is_none());
    assert!(limits.clock.is_none());
}

#[test]
fn test_search_limits_from_go_picks_side_clock() {
    let go = GoParams {
        depth: None,
        movetime: None,
        wtime: Some(60_000),
        btime: Some(30_000),
    };
    let white = SearchLimits::from_go(&go, Color::White);
    let black = SearchLimits::from_go(&go, Color::Black);
    assert_eq!(white.clock, Some(Duration::from_secs(60)));
    assert_eq!(black.clock, Some(Duration::from_secs(30)));
    assert_eq!(white.depth, None);
}

#[test]
fn test_search_limits_from_go_movetime() {
    let go = GoParams {
        depth: Some(2),
        movetime: Some(150),
        ..GoParams::default()
    };
    let limits = SearchLimits::from_go(&go, Color::Black);
    assert_eq!(limits.depth, Some(2));
    assert_eq!(limits.move_time, Some(Duration::from_millis(150)));
    assert_eq!(limits.clock, None);
}

#[test]
fn test_time_control_expiry() {
    let tc = TimeControl::start(Some(Duration::from_millis(10)));
    assert_eq!(tc.budget(), Some(Duration::from_millis(10)));
    assert!(!tc.is_exhausted());

    // Wait for time to expire
    thread::sleep(Duration::from_millis(20));
    assert!(tc.is_exhausted());
    assert_eq!(tc.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_time_control_no_limit() {
    let tc = TimeControl::start(None);
    assert_eq!(tc.budget(), None);
    thread::sleep(Duration::from_millis(10));
    assert!(!tc.is_exhausted());
    assert!(tc.remaining().is_none());
    assert!(tc.elapsed() >= Duration::from_millis(10));
}

#[test]
fn test_zero_budget_is_exhausted_immediately() {
    let tc = TimeControl::start(Some(Duration::ZERO));
    assert!(tc.is_exhausted());
}
