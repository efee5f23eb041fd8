//! Presentation collaborators for the simulation.
//!
//! - **[`app`]** — terminal UI built on [ratatui](https://github.com/ratatui-org/ratatui):
//!   draws each frame, paces the run, and turns `q` / `Esc` / `Ctrl-C` into a quit request
//! - **[`panes`]** — stateless render functions for each visible pane (towers, counter,
//!   move log, status bar)
//! - **[`text`]** — plain line-oriented renderer for headless runs
//! - **[`palette`]** — color wheel giving each disk its color
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! Both [`App`] and [`TextRenderer`] implement [`Renderer`], so either can be
//! handed to [`Simulation::run`].
//!
//! [`Renderer`]: crate::puzzle::Renderer
//! [`Simulation::run`]: crate::puzzle::Simulation::run

pub mod app;
pub mod palette;
pub mod panes;
pub mod text;
pub mod theme;

pub use app::App;
pub use text::TextRenderer;
