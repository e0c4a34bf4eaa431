// src/models/character_stats.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub total_chars: usize,
    pub chars_no_spaces: usize,
    pub alphabetic_chars: usize,
    pub numeric_chars: usize,
    pub spaces: usize,
    pub punctuation: usize,
}
