// Player roster input: typed records and CSV loading.

pub mod loader;
pub mod record;
