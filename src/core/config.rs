/// Maximum number of results returned from a top-K query.
pub const MAX_K: usize = 5;

/// Relevance-equality threshold used when breaking ranking ties.
pub const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct Config {
    /// Results truncated to at most this many entries.
    pub max_k: usize,
    /// Scores within this distance of each other are treated as equal.
    pub epsilon: f64,
    /// Bucket count for the concurrent sharded map used by the parallel
    /// query evaluator. spec.md suggests ~100 shards for typical corpora.
    pub shard_count: usize,
    /// Worker count for parallel evaluation and removal. `SearchServer`
    /// passes this to `rayon::ThreadPoolBuilder::num_threads` when it is
    /// constructed, sizing rayon's global pool on first use.
    pub worker_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_k: MAX_K,
            epsilon: EPSILON,
            shard_count: 100,
            worker_count: num_cpus::get(),
        }
    }
}
