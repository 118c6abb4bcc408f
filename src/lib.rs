//! kiln - a component design system for gpui applications
//!
//! The crate is layered leaf-first:
//! - [`tokens`]: colors, spacing, typography and other design constants
//! - [`state`]: controlled/uncontrolled values, context scopes and the
//!   state machines behind every interactive component
//! - [`floating`]: placement math and the [`FloatingPanel`] lifecycle
//! - [`notifications`]: the toast store, timers and toast lifecycle
//! - [`ui`]: gpui rendering of all of the above
//! - [`config`] and [`app`]: settings and the gallery application
//!
//! Everything below [`ui`] runs without a window and is tested as plain Rust.

pub mod app;
pub mod config;
pub mod floating;
pub mod notifications;
pub mod state;
pub mod tokens;
pub mod ui;

pub use app::App;
pub use floating::{FloatingPanel, FloatingPosition, Placement};
pub use notifications::{
    NotificationStore, StoreSnapshot, ToastEntry, ToastId, ToastLifecycle, ToastOptions,
    ToastPosition, ToastVariant,
};
pub use state::{
    AccordionHandle, AccordionItem, AccordionKind, AccordionState, CheckedState, ContextError,
    Controllable, DismissReason, ModalState, PinInputState, PinMode, Radio, RadioGroupHandle,
    RadioGroupState, Subscription, TabPanel, TabTrigger, TabsHandle, TabsState, ToggleState,
};
pub use ui::components;
