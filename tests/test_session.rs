use alien_invasion::input::Input;
use alien_invasion::session::{FrameOutcome, Phase, Session};
use alien_invasion::settings::Settings;

fn active_session() -> Session {
    let mut s = Session::default();
    s.handle_input(Input::Action);
    assert_eq!(s.phase(), Phase::Active);
    s
}

/// Put bullet `bi` right on top of alien `ai` so the next frame's movement
/// still leaves them overlapping.
fn aim(s: &mut Session, bi: usize, ai: usize) {
    let alien = s.fleet().aliens()[ai].clone();
    let bullet = &mut s.bullets_mut()[bi];
    bullet.x = alien.x + 15.0;
    bullet.y = alien.y + 20.0;
}

/// Shoot down every alien, one per frame.
fn clear_level(s: &mut Session) -> FrameOutcome {
    loop {
        assert!(s.fire_bullet() || !s.bullets().is_empty());
        aim(s, 0, 0);
        let outcome = s.update();
        if outcome != FrameOutcome::Continued {
            return outcome;
        }
    }
}

// ── Phases ────────────────────────────────────────────────────────────────────

#[test]
fn new_session_is_idle_at_level_one() {
    let s = Session::default();
    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(s.level(), 1);
    assert!(s.fleet().is_empty());
    assert!(s.bullets().is_empty());
}

#[test]
fn action_while_idle_starts_level_one() {
    let s = active_session();
    assert_eq!(s.fleet().len(), 30);
    assert_eq!(s.fleet().speed(), 1.0);
    assert!(s.bullets().is_empty());
}

#[test]
fn nothing_moves_outside_active() {
    let mut s = Session::default();
    s.handle_input(Input::Right(true));
    let x = s.ship().x;
    assert_eq!(s.update(), FrameOutcome::Skipped);
    assert_eq!(s.ship().x, x);
}

#[test]
fn quit_input_leaves_session_alone() {
    let mut s = active_session();
    s.handle_input(Input::Quit);
    assert_eq!(s.phase(), Phase::Active);
}

// ── Firing ────────────────────────────────────────────────────────────────────

#[test]
fn fire_is_capped_at_three() {
    let mut s = active_session();
    for _ in 0..5 {
        s.handle_input(Input::Action);
    }
    assert_eq!(s.bullets().len(), 3);
    assert!(!s.fire_bullet());
}

#[test]
fn fire_allowed_again_after_bullet_leaves() {
    let mut s = active_session();
    for _ in 0..3 {
        s.fire_bullet();
    }
    s.bullets_mut()[0].y = 0.0;
    s.update();
    assert_eq!(s.bullets().len(), 2);
    assert!(s.fire_bullet());
    assert_eq!(s.bullets().len(), 3);
}

#[test]
fn fire_is_noop_when_not_active() {
    let mut s = Session::default();
    assert!(!s.fire_bullet());
    assert!(s.bullets().is_empty());
}

#[test]
fn bullets_never_exceed_cap_during_play() {
    let mut s = active_session();
    for frame in 0..300 {
        if frame % 2 == 0 {
            s.handle_input(Input::Action);
        }
        s.update();
        if s.phase() != Phase::Active {
            break;
        }
        assert!(s.bullets().len() <= 3);
    }
}

#[test]
fn missed_bullet_flies_off_the_top() {
    let mut s = active_session();
    // Move the ship clear of the fleet so the shot has nothing to hit
    s.ship_mut().x = 1100.0;
    s.fire_bullet();
    for _ in 0..60 {
        s.update();
    }
    assert!(s.bullets().is_empty());
    assert_eq!(s.fleet().len(), 30);
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn movement_flags_follow_key_edges() {
    let mut s = active_session();
    s.handle_input(Input::Left(true));
    s.update();
    assert_eq!(s.ship().x, 560.0);
    s.handle_input(Input::Left(false));
    s.update();
    assert_eq!(s.ship().x, 560.0);
    s.handle_input(Input::Right(true));
    s.update();
    assert_eq!(s.ship().x, 575.0);
}

// ── Bullet vs alien ───────────────────────────────────────────────────────────

#[test]
fn one_hit_removes_one_bullet_and_one_alien() {
    let mut s = active_session();
    s.fire_bullet();
    aim(&mut s, 0, 4);
    assert_eq!(s.update(), FrameOutcome::Continued);
    assert_eq!(s.fleet().len(), 29);
    assert!(s.bullets().is_empty());
}

#[test]
fn overlapping_aliens_lose_only_the_first() {
    let mut s = active_session();
    // Stack alien 7 exactly on alien 3; a bullet over both kills only 3.
    let (x, y) = {
        let a = &s.fleet().aliens()[3];
        (a.x, a.y)
    };
    let moved = &mut s.fleet_mut().aliens_mut()[7];
    moved.x = x;
    moved.y = y;
    s.fire_bullet();
    aim(&mut s, 0, 3);
    s.update();

    assert_eq!(s.fleet().len(), 29);
    assert!(s.bullets().is_empty());
    // The survivor sitting where alien 3 was is the old alien 7.
    assert!(s.fleet().aliens().iter().any(|a| a.y == y && (a.x - x).abs() < 2.0));
}

#[test]
fn two_bullets_on_one_alien_kill_it_once() {
    let mut s = active_session();
    s.fire_bullet();
    s.fire_bullet();
    aim(&mut s, 0, 0);
    aim(&mut s, 1, 0);
    s.update();
    assert_eq!(s.fleet().len(), 29);
    // Second bullet found nothing left to hit and keeps flying
    assert_eq!(s.bullets().len(), 1);
}

#[test]
fn two_bullets_on_two_aliens() {
    let mut s = active_session();
    s.fire_bullet();
    s.fire_bullet();
    aim(&mut s, 0, 0);
    aim(&mut s, 1, 25);
    s.update();
    assert_eq!(s.fleet().len(), 28);
    assert!(s.bullets().is_empty());
}

// ── Level progression ─────────────────────────────────────────────────────────

#[test]
fn clearing_level_one_moves_to_level_two() {
    let mut s = active_session();
    let outcome = clear_level(&mut s);
    assert_eq!(outcome, FrameOutcome::LevelCleared { next: 2 });
    assert_eq!(s.level(), 2);
    assert_eq!(s.phase(), Phase::Active);
    assert_eq!(s.fleet().len(), 40);
    assert_eq!(s.fleet().speed(), 1.5);
    assert!(s.bullets().is_empty());
}

#[test]
fn level_clear_discards_stray_bullets() {
    let mut s = active_session();
    while s.fleet().len() > 1 {
        s.fire_bullet();
        aim(&mut s, 0, 0);
        s.update();
    }
    s.fire_bullet();
    s.fire_bullet();
    aim(&mut s, 0, 0);
    assert_eq!(s.bullets().len(), 2);
    assert_eq!(s.update(), FrameOutcome::LevelCleared { next: 2 });
    assert!(s.bullets().is_empty());
}

#[test]
fn clearing_all_five_levels_wins() {
    let mut s = active_session();
    let expected = [(2, 40), (3, 50), (4, 60), (5, 60)];
    for (next, count) in expected {
        assert_eq!(clear_level(&mut s), FrameOutcome::LevelCleared { next });
        assert_eq!(s.fleet().len(), count);
    }
    assert_eq!(clear_level(&mut s), FrameOutcome::Won);
    assert_eq!(s.phase(), Phase::Won);
    assert_eq!(s.level(), 6);
    assert!(s.fleet().is_empty());
    assert!(s.bullets().is_empty());
    assert_eq!(s.update(), FrameOutcome::Skipped);
}

#[test]
fn shorter_campaign_from_settings() {
    let settings = Settings {
        max_level: 1,
        ..Settings::default()
    };
    let mut s = Session::new(settings);
    s.handle_input(Input::Action);
    assert_eq!(clear_level(&mut s), FrameOutcome::Won);
}

// ── Ship hit ──────────────────────────────────────────────────────────────────

#[test]
fn alien_reaching_bottom_ends_game() {
    let mut s = active_session();
    let alien = &mut s.fleet_mut().aliens_mut()[12];
    alien.x = 100.0;
    alien.y = 800.0 - 30.0;
    assert_eq!(s.update(), FrameOutcome::ShipHit);
    assert_eq!(s.phase(), Phase::GameOver);
    assert_eq!(s.fleet().len(), 30);
}

#[test]
fn alien_touching_ship_ends_game() {
    let mut s = active_session();
    let ship = s.ship().bounds();
    let alien = &mut s.fleet_mut().aliens_mut()[0];
    alien.x = ship.x;
    alien.y = ship.y - 20.0;
    assert_eq!(s.update(), FrameOutcome::ShipHit);
    assert_eq!(s.phase(), Phase::GameOver);
}

#[test]
fn next_fleet_spawning_on_ship_ends_game_same_frame() {
    // On a short screen the level-two grid's fourth row lands on the ship.
    let settings = Settings {
        screen_height: 250.0,
        ..Settings::default()
    };
    let mut s = Session::new(settings);
    s.handle_input(Input::Action);
    assert_eq!(clear_level(&mut s), FrameOutcome::ShipHit);
    assert_eq!(s.phase(), Phase::GameOver);
    assert_eq!(s.level(), 2);
    assert_eq!(s.fleet().len(), 40);
}

#[test]
fn unattended_fleet_eventually_lands() {
    let mut s = active_session();
    let mut outcome = FrameOutcome::Continued;
    for _ in 0..100_000 {
        outcome = s.update();
        if outcome != FrameOutcome::Continued {
            break;
        }
    }
    assert_eq!(outcome, FrameOutcome::ShipHit);
    assert_eq!(s.phase(), Phase::GameOver);
    assert_eq!(s.level(), 1);
}

// ── Restart ───────────────────────────────────────────────────────────────────

#[test]
fn restart_after_game_over() {
    let mut s = active_session();
    clear_level(&mut s);
    s.fire_bullet();
    s.ship_mut().x = 20.0;
    let alien = &mut s.fleet_mut().aliens_mut()[0];
    alien.y = 790.0;
    s.update();
    assert_eq!(s.phase(), Phase::GameOver);
    assert_eq!(s.level(), 2);

    s.handle_input(Input::Action);
    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(s.level(), 1);
    assert!(s.fleet().is_empty());
    assert!(s.bullets().is_empty());
    assert_eq!(s.ship().x, 575.0);
    assert_eq!(s.ship().y, 740.0);

    s.handle_input(Input::Action);
    assert_eq!(s.phase(), Phase::Active);
    assert_eq!(s.fleet().len(), 30);
    assert_eq!(s.fleet().speed(), 1.0);
    assert!(s.fire_bullet());
}

#[test]
fn restart_after_win() {
    let mut s = active_session();
    for _ in 0..5 {
        clear_level(&mut s);
    }
    assert_eq!(s.phase(), Phase::Won);

    s.handle_input(Input::Action);
    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(s.level(), 1);

    s.handle_input(Input::Action);
    assert_eq!(s.phase(), Phase::Active);
    assert_eq!(s.fleet().len(), 30);
}
