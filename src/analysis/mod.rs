pub mod sentiment;
pub mod technicals;
