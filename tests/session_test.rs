//! Tests for concurrent session management.

use std::thread;
use tictactoe_engine::{EngineConfig, Mark, Outcome, SessionError, SessionManager};

#[test]
fn test_sessions_are_isolated() {
    let manager = SessionManager::new();
    let config = EngineConfig::new(false, Some(Mark::X));
    manager.create_session("a".into(), &config).unwrap();
    manager.create_session("b".into(), &config).unwrap();

    manager
        .with_session("a", |engine| {
            for index in [0, 3, 1, 4, 2] {
                engine.apply_move(index).unwrap();
            }
        })
        .unwrap();

    let a = manager.with_session("a", |engine| engine.scores()).unwrap();
    let b = manager.with_session("b", |engine| engine.scores()).unwrap();
    assert_eq!(a.x_wins, 1);
    assert_eq!(b.x_wins, 0);
    assert_eq!(
        manager.list_sessions().unwrap(),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn test_parallel_sessions() {
    let manager = SessionManager::new();
    let config = EngineConfig::new(true, Some(Mark::X));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let manager = manager.clone();
            thread::spawn(move || {
                let id = format!("session-{}", i);
                manager.create_session(id.clone(), &config).unwrap();
                manager
                    .with_session(&id, |engine| engine.apply_move(i).unwrap().outcome())
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let outcome: Option<Outcome> = handle.join().unwrap();
        assert_eq!(outcome, None);
    }
    assert_eq!(manager.list_sessions().unwrap().len(), 4);
}

#[test]
fn test_removed_session_is_gone() {
    let manager = SessionManager::new();
    manager.create_session("a".into(), &EngineConfig::default()).unwrap();
    manager.remove_session("a").unwrap();
    assert_eq!(
        manager.remove_session("a").unwrap_err(),
        SessionError::NotFound("a".into())
    );
}
