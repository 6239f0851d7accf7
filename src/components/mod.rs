// ABOUTME: UI components for the demo TUI: toast stack, help overlay and layout

pub mod toast_stack;
pub mod help;
pub mod layout;

pub use toast_stack::ToastStackComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
