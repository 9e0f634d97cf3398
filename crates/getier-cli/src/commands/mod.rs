//! One module per subcommand, each exposing a `run` function.

/// Print the boundary sentinel layout.
pub mod layout;
/// Run the headless creature simulation.
pub mod simulate;
