//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod homepage;
pub mod transition;
pub mod view_state;

// Re-export commonly used types
pub use homepage::{render_initial, HomepageProps, HomepageRender, HomepageView, IntroRender, ResultsRender, SearchFormRender};
pub use transition::{EXIT_TRANSITION, IntroPresence, IntroTransition, LEAVE_CLASS};
pub use view_state::{DisplayMode, ViewState};
