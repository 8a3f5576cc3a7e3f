//! Shared fixture: a 25-word board over a hand-built embedding space.
//!
//! Every board word owns one axis, plus a final padding axis. Clue words
//! are built from those axes so their similarities are known exactly:
//! - single clues: 0.8 towards one agent word
//! - pair clues: 0.6 towards two agent words
//! - distractors that the filter must reject

#![allow(dead_code)]

use codenames::{EmbeddingSpace, GameConfig};

pub const AGENTS: [&str; 8] = [
    "whale", "piano", "rocket", "castle", "tiger", "apple", "engine", "glacier",
];

pub const OTHERS: [&str; 17] = [
    "bank", "chair", "doctor", "lemon", "mirror", "needle", "opera", "pencil", "queen", "ruler",
    "saddle", "tunnel", "umbrella", "violin", "wizard", "yacht", "zipper",
];

/// Single-agent clues, in vocabulary order, with the agent they point at.
pub const SINGLES: [(&str, &str); 8] = [
    ("ocean", "whale"),
    ("melody", "piano"),
    ("orbit", "rocket"),
    ("knight", "castle"),
    ("jungle", "tiger"),
    ("orchard", "apple"),
    ("motor", "engine"),
    ("ice", "glacier"),
];

/// Two-agent clues, in vocabulary order.
pub const PAIRS: [(&str, &str, &str); 2] = [
    ("arctic", "whale", "glacier"),
    ("launch", "rocket", "engine"),
];

const DIM: usize = 26;
const PAD: usize = DIM - 1;

pub fn board() -> Vec<String> {
    AGENTS
        .iter()
        .chain(OTHERS.iter())
        .map(|w| w.to_string())
        .collect()
}

pub fn agents() -> Vec<String> {
    AGENTS.iter().map(|w| w.to_string()).collect()
}

pub fn config() -> GameConfig {
    GameConfig::default()
}

fn axis(word: &str) -> usize {
    board()
        .iter()
        .position(|w| w == word)
        .expect("fixture word is on the board")
}

fn vector(parts: &[(usize, f32)]) -> Vec<f32> {
    let mut v = vec![0.0; DIM];
    for &(i, x) in parts {
        v[i] = x;
    }
    v
}

pub fn space() -> EmbeddingSpace {
    let mut pairs: Vec<(String, Vec<f32>)> = board()
        .into_iter()
        .map(|w| {
            let v = vector(&[(axis(&w), 1.0)]);
            (w, v)
        })
        .collect();

    for (clue, agent) in SINGLES {
        pairs.push((clue.to_string(), vector(&[(axis(agent), 0.8), (PAD, 0.6)])));
    }
    for (clue, a, b) in PAIRS {
        pairs.push((
            clue.to_string(),
            vector(&[(axis(a), 0.6), (axis(b), 0.6), (PAD, 0.529_15)]),
        ));
    }

    // Related to an agent word, but closer to a non-agent word.
    pairs.push((
        "bankrupt".to_string(),
        vector(&[(axis("bank"), 0.6), (axis("whale"), 0.5), (PAD, 0.6245)]),
    ));
    // Spelling variants of agent words.
    pairs.push(("whales".to_string(), vector(&[(axis("whale"), 0.9), (PAD, 0.4359)])));
    pairs.push(("rocketing".to_string(), vector(&[(axis("rocket"), 0.9), (PAD, 0.4359)])));
    // Unrelated to everything on the board.
    pairs.push(("noise".to_string(), vector(&[(PAD, 1.0)])));

    EmbeddingSpace::from_pairs(pairs).expect("fixture space is aligned")
}
