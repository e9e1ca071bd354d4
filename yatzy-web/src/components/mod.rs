pub mod header;
pub mod player_setup;
pub mod score_table;
