//! Game controller integration tests.
//!
//! These tests play through rounds the way a front end would:
//! select, resolve, wait for the reveal delay, clear, restart.

use memory_pairs::cards::{Deck, ImageRef};
use memory_pairs::core::{GameConfig, GamePhase, ImageFetchError};
use memory_pairs::game::{GameController, IgnoreReason, LoadStatus, SelectOutcome};
use memory_pairs::images::{ImageSource, StaticImageSource};

fn controller() -> GameController {
    GameController::new(GameConfig::new().with_seed(42).with_pair_count(2))
}

fn abab() -> Deck {
    Deck::from_images(["A", "B", "A", "B"])
}

/// Select a pair and immediately redeem the clear ticket.
fn play_pair(game: &mut GameController, a: usize, b: usize) -> SelectOutcome {
    assert_eq!(game.select_card(a), SelectOutcome::Revealed);
    let outcome = game.select_card(b);
    let ticket = outcome.ticket().expect("second card resolves the pair");
    assert!(game.clear_selection(ticket));
    outcome
}

/// Matching pair: both matched, no mismatch, still playing.
#[test]
fn test_matching_pair() {
    let mut game = controller();
    assert!(game.deal(abab()));

    game.select_card(0);
    let outcome = game.select_card(2);

    assert!(matches!(outcome, SelectOutcome::Matched { game_over: false, .. }));
    assert!(game.deck().get(0).unwrap().matched);
    assert!(game.deck().get(2).unwrap().matched);
    assert_eq!(game.mismatch_count(), 0);
    assert_eq!(game.phase(), GamePhase::Playing);
}

/// Mismatching pair: count goes up, nothing matched, selection clears on ticket.
#[test]
fn test_mismatching_pair() {
    let mut game = controller();
    game.deal(abab());

    game.select_card(0);
    let outcome = game.select_card(1);

    assert!(matches!(outcome, SelectOutcome::Mismatched { .. }));
    assert_eq!(game.mismatch_count(), 1);
    assert!(game.deck().iter().all(|c| !c.matched));
    assert_eq!(game.selection().len(), 2);

    assert!(game.clear_selection(outcome.ticket().unwrap()));
    assert!(game.selection().is_empty());
}

/// Clicking a matched card does nothing.
#[test]
fn test_matched_card_ignored() {
    let mut game = controller();
    game.deal(abab());
    play_pair(&mut game, 0, 2);

    assert_eq!(
        game.select_card(0),
        SelectOutcome::Ignored(IgnoreReason::AlreadyMatched)
    );
    assert!(game.selection().is_empty());
}

/// Full playthrough, then restart.
#[test]
fn test_full_playthrough_and_restart() {
    let mut game = controller();
    game.deal(abab());

    play_pair(&mut game, 0, 1);
    play_pair(&mut game, 0, 2);
    let last = play_pair(&mut game, 1, 3);

    assert!(matches!(last, SelectOutcome::Matched { game_over: true, .. }));
    assert_eq!(game.phase(), GamePhase::Ended);
    assert_eq!(game.mismatch_count(), 1);

    let view = game.view();
    assert_eq!(view.status_message().as_deref(), Some("You were wrong 1 times!"));
    assert!(view.can_restart());

    let pool = vec![ImageRef::from("A"), ImageRef::from("B")];
    assert!(game.restart(&pool));

    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.mismatch_count(), 0);
    assert_eq!(game.deck().len(), 4);
    assert!(game.deck().is_well_formed());
    assert!(game.deck().iter().all(|c| !c.matched));
    assert!(game.selection().is_empty());
}

/// start is allowed again once a round has ended.
#[test]
fn test_start_from_ended() {
    let mut game = controller();
    let pool = vec![ImageRef::from("A"), ImageRef::from("B")];
    game.deal(Deck::from_images(["A", "A"]));
    play_pair(&mut game, 0, 1);
    assert_eq!(game.phase(), GamePhase::Ended);

    assert!(game.start(&pool));

    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.mismatch_count(), 0);
    assert_eq!(game.deck().len(), 4);
    assert!(game.deck().is_well_formed());
    assert!(game.selection().is_empty());
}

/// Play every pair of the current deck by looking up partners.
fn solve(game: &mut GameController) {
    let len = game.deck().len();
    for i in 0..len {
        if game.deck().get(i).unwrap().matched {
            continue;
        }
        let partner = (i + 1..len)
            .find(|&j| game.deck().get(j).unwrap().image == game.deck().get(i).unwrap().image)
            .expect("well-formed deck has a partner");
        play_pair(game, i, partner);
    }
}

/// Restart deals a freshly shuffled deck from the same pool.
#[test]
fn test_restart_reshuffles() {
    let pool = StaticImageSource::placeholder(20).fetch_images().unwrap();
    let mut game = GameController::new(GameConfig::new().with_seed(2024));
    assert!(game.start(&pool));
    assert_eq!(game.deck().len(), 20);

    let first = game.deck().clone();
    solve(&mut game);
    assert_eq!(game.phase(), GamePhase::Ended);
    assert_eq!(game.mismatch_count(), 0);

    assert!(game.restart(&pool));

    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.deck().len(), 20);
    assert!(game.deck().is_well_formed());
    assert!(game.deck().iter().all(|c| !c.matched));

    let first_faces: Vec<&ImageRef> = first.iter().map(|c| &c.image).collect();
    let second_faces: Vec<&ImageRef> = game.deck().iter().map(|c| &c.image).collect();
    assert_ne!(first_faces, second_faces);
}

/// A configured pair count above ten still deals twenty cards.
#[test]
fn test_configured_pair_count_capped() {
    let pool = StaticImageSource::placeholder(30).fetch_images().unwrap();
    let mut game = GameController::new(GameConfig::new().with_seed(3).with_pair_count(15));

    assert!(game.start(&pool));
    assert_eq!(game.deck().len(), 20);
}

/// check_ended is idempotent once the round is over.
#[test]
fn test_check_ended_idempotent() {
    let mut game = controller();
    game.deal(Deck::from_images(["A", "A"]));
    play_pair(&mut game, 0, 1);

    assert_eq!(game.phase(), GamePhase::Ended);
    for _ in 0..3 {
        assert!(game.check_ended());
        assert_eq!(game.phase(), GamePhase::Ended);
    }
    assert_eq!(game.mismatch_count(), 0);
}

/// check_ended while cards remain does nothing.
#[test]
fn test_check_ended_mid_round() {
    let mut game = controller();
    game.deal(abab());
    play_pair(&mut game, 0, 2);

    assert!(!game.check_ended());
    assert_eq!(game.phase(), GamePhase::Playing);
}

/// Restart and start are rejected while a round is in progress.
#[test]
fn test_invalid_transitions() {
    let mut game = controller();
    let pool = vec![ImageRef::from("A"), ImageRef::from("B")];

    assert!(!game.restart(&pool), "restart from Loading");
    assert!(game.start(&pool));
    assert!(!game.start(&pool), "start while Playing");
    assert!(!game.restart(&pool), "restart while Playing");
    assert!(!game.deal(abab()), "deal while Playing");
}

/// Selections after the round ended are ignored.
#[test]
fn test_select_after_end() {
    let mut game = controller();
    game.deal(Deck::from_images(["A", "A"]));
    play_pair(&mut game, 0, 1);

    assert_eq!(
        game.select_card(0),
        SelectOutcome::Ignored(IgnoreReason::NotPlaying)
    );
}

/// A reveal timer that fires after a restart must not touch the new round.
#[test]
fn test_stale_ticket_after_restart() {
    let mut game = controller();
    let pool = vec![ImageRef::from("A")];
    game.start(&pool);

    game.select_card(0);
    let stale = game.select_card(1).ticket().unwrap();
    assert_eq!(game.phase(), GamePhase::Ended);

    assert!(game.restart(&pool));
    game.select_card(1);

    assert!(!game.clear_selection(stale));
    assert_eq!(game.selection().as_slice(), &[1]);
}

/// Start from a source, the way a front end boots.
#[test]
fn test_start_from_source() {
    let source = StaticImageSource::placeholder(20);
    let mut game = GameController::new(GameConfig::new().with_seed(5));

    let pool = source.fetch_images().unwrap();
    assert!(game.start(&pool));

    assert_eq!(game.load_status(), &LoadStatus::Ready);
    assert_eq!(game.deck().len(), 20);
    assert!(game.deck().is_well_formed());
}

/// A failed fetch leaves the game unstartable and shows the error text.
#[test]
fn test_failed_fetch() {
    let mut game = controller();
    let err = StaticImageSource::default().fetch_images().unwrap_err();
    assert!(matches!(err, ImageFetchError::Empty));

    game.fail_loading(&err);

    assert_eq!(game.phase(), GamePhase::Loading);
    assert_eq!(
        game.view().status_message().as_deref(),
        Some("Something went wrong :(")
    );
    assert!(game.select_card(0).is_ignored());
}

/// Same seed, same deals, round after round.
#[test]
fn test_seeded_sessions_reproduce() {
    let pool: Vec<ImageRef> = StaticImageSource::placeholder(20).fetch_images().unwrap();

    let mut a = GameController::new(GameConfig::new().with_seed(77));
    let mut b = GameController::new(GameConfig::new().with_seed(77));
    a.start(&pool);
    b.start(&pool);

    assert_eq!(a.deck(), b.deck());
    assert_eq!(a.rng_state(), b.rng_state());
}
