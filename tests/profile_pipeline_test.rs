//! Mission-to-profile pipeline: finished runs feed the ledger and everything
//! it owns (XP, levels, streaks, achievements) in one transaction.

use batyrbol::domain::{Character, Language};
use batyrbol::generator::FallbackSource;
use batyrbol::mission::{DifficultyProfile, MissionEngine, RewardPolicy};
use batyrbol::profile::{ProfileDb, ProfileLedger};
use tempfile::TempDir;

fn ledger(dir: &TempDir) -> ProfileLedger {
    let db = ProfileDb::open(&dir.path().join("profile.db")).unwrap();
    ProfileLedger::new(db)
}

/// Play one mission to the end, answering every scenario correctly when
/// `win` is set and always wrongly otherwise.
fn play_mission(ledger: &ProfileLedger, character: Character, win: bool) {
    let level = ledger.snapshot().unwrap().level;
    let mut engine = MissionEngine::new(
        Box::new(FallbackSource),
        RewardPolicy::Stars,
        Language::Kazakh,
    );
    ledger.mark_mission_started(character).unwrap();
    engine.start(character, DifficultyProfile::get(1), level);

    loop {
        let scenario = engine.current_scenario().unwrap();
        let id = if win {
            scenario.correct_option.clone()
        } else {
            scenario
                .options
                .iter()
                .find(|o| !o.is_correct)
                .unwrap()
                .id
                .clone()
        };
        let outcome = engine.submit_answer(&id).unwrap();
        if outcome.mission_ended {
            break;
        }
        engine.advance(level).unwrap();
    }

    let report = engine.finish().unwrap();
    ledger.record_mission(&report).unwrap();
}

#[test]
fn one_win_seeds_the_whole_profile() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger(&dir);

    play_mission(&ledger, Character::AbylaiKhan, true);

    let snapshot = ledger.snapshot().unwrap();
    assert_eq!(snapshot.missions_completed, 1);
    assert_eq!(snapshot.missions_won, 1);
    assert_eq!(snapshot.perfect_missions, 1);
    assert_eq!(snapshot.current_streak, 1);
    assert!(snapshot.unlocked.contains(&"first_mission".to_string()));
    assert!(snapshot.unlocked.contains(&"perfect_mission".to_string()));
    // Mission XP (50 + 45 + 5) plus achievement rewards pushed past level 2.
    assert!(snapshot.level >= 2);
    assert!(snapshot.total_xp >= 100);

    assert_eq!(snapshot.characters.len(), 1);
    assert_eq!(snapshot.characters[0].character, Character::AbylaiKhan);
    assert_eq!(snapshot.characters[0].wins, 1);

    // The pending marker was consumed by the recorded mission.
    assert!(ledger.check_abandoned().unwrap().is_none());
}

#[test]
fn streak_achievement_needs_five_consecutive_wins() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger(&dir);

    for _ in 0..4 {
        play_mission(&ledger, Character::Abai, true);
    }
    play_mission(&ledger, Character::Abai, false);
    let snapshot = ledger.snapshot().unwrap();
    assert!(!snapshot.unlocked.contains(&"streak_5".to_string()));
    assert_eq!(snapshot.current_streak, 0);
    assert_eq!(snapshot.best_streak, 4);

    for _ in 0..5 {
        play_mission(&ledger, Character::Abai, true);
    }
    let snapshot = ledger.snapshot().unwrap();
    assert!(snapshot.unlocked.contains(&"streak_5".to_string()));
    assert_eq!(snapshot.best_streak, 5);
}

#[test]
fn historian_needs_three_wins_with_every_character() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger(&dir);

    for _ in 0..3 {
        play_mission(&ledger, Character::AbylaiKhan, true);
        play_mission(&ledger, Character::Abai, true);
    }
    assert!(!ledger
        .snapshot()
        .unwrap()
        .unlocked
        .contains(&"historian".to_string()));

    for _ in 0..3 {
        play_mission(&ledger, Character::AitekeBi, true);
    }
    assert!(ledger
        .snapshot()
        .unwrap()
        .unlocked
        .contains(&"historian".to_string()));
}

#[test]
fn level_achievement_unlocks_with_the_mission_that_reaches_it() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger(&dir);

    // Reaching level 5 costs 100+300+600+1000 XP in total.
    ledger.add_xp(1995).unwrap();
    assert_eq!(ledger.snapshot().unwrap().level, 4);
    assert!(!ledger
        .snapshot()
        .unwrap()
        .unlocked
        .contains(&"level_5".to_string()));

    // The next win carries the player over the threshold.
    play_mission(&ledger, Character::AbylaiKhan, true);
    let snapshot = ledger.snapshot().unwrap();
    assert!(snapshot.level >= 5);
    assert!(snapshot.unlocked.contains(&"level_5".to_string()));
}

#[test]
fn losses_award_no_xp_under_stars() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger(&dir);

    play_mission(&ledger, Character::AitekeBi, false);

    let snapshot = ledger.snapshot().unwrap();
    assert_eq!(snapshot.missions_completed, 1);
    assert_eq!(snapshot.missions_won, 0);
    // Only the FirstMission reward lands.
    assert_eq!(snapshot.total_xp, 10);
    assert!(snapshot.unlocked.contains(&"first_mission".to_string()));
    assert!(!snapshot.unlocked.contains(&"perfect_mission".to_string()));
}

#[test]
fn reset_returns_to_a_fresh_player() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger(&dir);

    for _ in 0..3 {
        play_mission(&ledger, Character::AbylaiKhan, true);
    }
    assert!(ledger.snapshot().unwrap().missions_completed > 0);

    ledger.reset().unwrap();
    let snapshot = ledger.snapshot().unwrap();
    assert_eq!(snapshot.level, 1);
    assert_eq!(snapshot.xp, 0);
    assert_eq!(snapshot.total_xp, 0);
    assert!(snapshot.unlocked.is_empty());
    assert!(snapshot.characters.is_empty());
    assert!(ledger.recent_missions(10).unwrap().is_empty());
}
