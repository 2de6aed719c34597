use prettytable::{Cell, Row, Table};

/// Counters accumulated across one search.
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Region selections performed (search tree nodes entered).
    pub nodes_visited: u64,
    /// Branches abandoned after a candidate failed.
    pub backtracks: u64,
    /// Tentative tile applications.
    pub applies: u64,
    /// Reverted tile applications.
    pub undos: u64,
    /// Arc revisions attempted during propagation.
    pub revisions: u64,
    /// Arc revisions that shrank a domain.
    pub prunings: u64,
    /// Time spent inside arc revisions.
    pub propagation_micros: u64,
}

/// Renders the counters as a bordered table for the CLI.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Counter"), Cell::new("Value")]));

    for (name, value) in [
        ("Nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
        ("Tiles applied", stats.applies),
        ("Tiles reverted", stats.undos),
        ("Arc revisions", stats.revisions),
        ("Domain prunings", stats.prunings),
    ] {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&value.to_string()),
        ]));
    }
    table.add_row(Row::new(vec![
        Cell::new("Propagation time (ms)"),
        Cell::new(&format!("{:.2}", stats.propagation_micros as f64 / 1000.0)),
    ]));

    table.to_string()
}
