//! Static content for each quest: questions, badge pool and lesson cards.

pub mod copyrights;
pub mod five_pillars;
pub mod neutral_point;
pub mod no_original_research;
pub mod not_wikipedia;
pub mod verifiability;
