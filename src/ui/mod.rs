pub mod cooking;
pub mod keybindings;
pub mod overview;
pub mod terminal_guard;

mod help;

pub use cooking::CookingScreen;
pub use help::HelpOverlay;
pub use overview::OverviewScreen;
pub use terminal_guard::{install_panic_hook, TerminalGuard};
