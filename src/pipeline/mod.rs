// Run-cycle orchestration and the interactive menu that drives it.

pub mod cycle;
pub mod menu;
