// Adapters layer: concrete implementations for the collaborators the core
// only knows as traits (input files, console output, CSV export).

pub mod console;
pub mod export;
pub mod input;
