use skein_core::graph::PathStrategy;

/// Parse shortest-path strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<PathStrategy, String> {
    s.parse::<PathStrategy>()
}
