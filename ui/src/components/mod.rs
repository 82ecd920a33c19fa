//! Shared components: Pico.css wrappers plus the transaction grid and its toolbar.
pub mod data_grid;
pub mod empty_state;
pub mod grid_toolbar;
pub mod pico;
