//! Responsive navigation shell: state machine and derived layout.

mod layout;
mod state;

pub use layout::{BrandLabel, ContentSlot, LayoutDecision, SidebarPresentation};
pub use state::{NavigationState, ShellEvent, ShellMode};
