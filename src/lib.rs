//! Crate root module declarations for the Plum Checkers rules engine.
//!
//! This file exposes the game state model, move generation and turn
//! handling, the line session used by transports, and notation/debug helpers
//! so binaries, tests, and benchmarks can import stable module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod capture_search;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod protocol {
    pub mod session;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}
