// Teams: extraction from the roster, the per-run board, greedy balancing.

pub mod balance;
pub mod board;
pub mod extract;
