pub mod ranker;
pub mod scorer;
