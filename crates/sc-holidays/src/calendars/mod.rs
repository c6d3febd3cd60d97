//! Country-specific holiday tables.

/// United States federal holidays.
pub mod united_states;
