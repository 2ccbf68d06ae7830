//! # Seed Data
//!
//! Generators for realistic-shaped sample posts, drawn from fixed pools.
//! Pure functions over a caller-supplied or seeded RNG; no global random
//! state, so a fixed seed makes the output fully deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::store::{Author, NewPost};

const TITLES: &[&str] = &[
    "Hangman",
    "The Quiet Harbor",
    "Notes from a Small Kitchen",
    "On Keeping a Journal",
    "A Field Guide to Rain",
    "Letters Never Sent",
    "The Long Way Home",
    "Midnight at the Archive",
];

const CONTENTS: &[&str] = &[
    "Dead men don't talk.",
    "The tide was out when we arrived, and the boats leaned on their keels.",
    "Start with what you have; the rest arrives while you work.",
    "Every entry is a small argument with forgetting.",
    "It rained for three days and nobody minded.",
    "Some letters are written only to be kept.",
    "We took the long way home and were glad of it.",
    "The archive closes at midnight, but the catalog never sleeps.",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Mary", "Jules", "Edgar", "Agatha", "Raymond", "Ursula", "Octavia",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Shelley", "Verne", "Allan", "Christie", "Chandler", "Le Guin", "Butler",
];

/// One random post from the pools.
pub fn sample_post(rng: &mut impl Rng) -> NewPost {
    let author = Author {
        first_name: pick(rng, FIRST_NAMES),
        last_name: pick(rng, LAST_NAMES),
    };
    NewPost::new(pick(rng, TITLES), pick(rng, CONTENTS), author)
}

/// `count` random posts from a thread-local RNG.
pub fn sample_posts(count: usize) -> Vec<NewPost> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| sample_post(&mut rng)).collect()
}

/// Deterministic variant: the same seed always yields the same posts.
pub fn sample_posts_seeded(count: usize, seed: u64) -> Vec<NewPost> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| sample_post(&mut rng)).collect()
}

fn pick(rng: &mut impl Rng, pool: &[&str]) -> String {
    pool[rng.gen_range(0..pool.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_valid_inputs() {
        for post in sample_posts(25) {
            post.validate().expect("generated post must validate");
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = sample_posts_seeded(10, 42);
        let b = sample_posts_seeded(10, 42);
        assert_eq!(a, b);

        let c = sample_posts_seeded(10, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_requested_count_is_honored() {
        assert_eq!(sample_posts(0).len(), 0);
        assert_eq!(sample_posts_seeded(10, 7).len(), 10);
    }
}
