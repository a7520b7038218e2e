//! Root coordinator invariants checked over generated action sequences.
//!
//! Sequences come from a seeded RNG so failures reproduce. After every step:
//! - navigation leaves at most one modal open, and it is the target's modal
//! - the reported edges match the before/after visibility exactly
//! - the draw order holds each open modal exactly once

use aura::state::{Action, ModalId, NavTarget, RootState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEQUENCES: u64 = 200;
const STEPS: usize = 40;

fn random_action(rng: &mut StdRng) -> Action {
    match rng.gen_range(0..4) {
        0 => Action::OpenModal(ModalId::ALL[rng.gen_range(0..ModalId::ALL.len())]),
        1 => Action::CloseModal(ModalId::ALL[rng.gen_range(0..ModalId::ALL.len())]),
        2 => Action::Navigate(NavTarget::ALL[rng.gen_range(0..NavTarget::ALL.len())]),
        _ => Action::CloseTop,
    }
}

fn assert_consistent(state: &RootState) {
    let order = state.draw_order();
    assert_eq!(order.len(), state.visibility().open_count());
    for id in ModalId::ALL {
        let occurrences = order.iter().filter(|o| **o == id).count();
        assert_eq!(occurrences, usize::from(state.is_open(id)), "{} in draw order", id);
    }
    assert_eq!(state.top(), order.last().copied());
}

#[test]
fn test_navigate_always_leaves_at_most_target_open() {
    for seed in 0..SEQUENCES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = RootState::new();
        for _ in 0..STEPS {
            let action = random_action(&mut rng);
            let (next, _) = state.reduce(action);
            if let Action::Navigate(target) = action {
                assert!(next.visibility().open_count() <= 1, "seed {}", seed);
                assert_eq!(next.nav(), target);
                match target.modal() {
                    Some(id) => assert_eq!(next.top(), Some(id)),
                    None => assert!(next.top().is_none()),
                }
            }
            state = next;
        }
    }
}

#[test]
fn test_transition_edges_match_visibility_diff() {
    for seed in 0..SEQUENCES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = RootState::new();
        for _ in 0..STEPS {
            let action = random_action(&mut rng);
            let (next, transition) = state.reduce(action);
            for id in ModalId::ALL {
                let opened = !state.is_open(id) && next.is_open(id);
                let closed = state.is_open(id) && !next.is_open(id);
                assert_eq!(transition.opened.contains(&id), opened, "seed {} {:?}", seed, action);
                assert_eq!(transition.closed.contains(&id), closed, "seed {} {:?}", seed, action);
            }
            assert_consistent(&next);
            state = next;
        }
    }
}

#[test]
fn test_reduce_does_not_mutate_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = RootState::new();
    for _ in 0..STEPS {
        let before = state.clone();
        let (next, _) = state.reduce(random_action(&mut rng));
        assert_eq!(state, before);
        state = next;
    }
}

#[test]
fn test_open_and_close_are_idempotent_everywhere() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut state = RootState::new();
    for _ in 0..STEPS {
        state = state.reduce(random_action(&mut rng)).0;
        for id in ModalId::ALL {
            let (once, _) = state.reduce(Action::OpenModal(id));
            let (twice, edges) = once.reduce(Action::OpenModal(id));
            assert_eq!(once, twice);
            assert!(edges.is_empty());

            let (once, _) = state.reduce(Action::CloseModal(id));
            let (twice, edges) = once.reduce(Action::CloseModal(id));
            assert_eq!(once, twice);
            assert!(edges.is_empty());
        }
    }
}

#[test]
fn test_direct_opens_never_touch_nav() {
    let mut state = RootState::new().reduce(Action::Navigate(NavTarget::Resources)).0;
    for id in ModalId::ALL {
        state = state.reduce(Action::OpenModal(id)).0;
        assert_eq!(state.nav(), NavTarget::Resources);
    }
    assert_eq!(state.visibility().open_count(), ModalId::ALL.len());
    // Resources was already open, so it stays at the bottom
    assert_eq!(state.draw_order()[0], ModalId::Resources);
    assert_eq!(state.top(), Some(ModalId::Crisis));
}
