//! Framework-independent component state.
//!
//! Everything here is plain Rust over `Rc<RefCell<_>>` and can be driven
//! from tests without a window. The gpui components in [`crate::ui`]
//! render this state and forward input into it.

pub mod accordion;
pub mod context;
pub mod controllable;
pub mod dismiss;
pub mod emitter;
pub mod events;
pub mod modal;
pub mod pin_input;
pub mod radio;
pub mod tabs;
pub mod toggle;

pub use accordion::{AccordionHandle, AccordionItem, AccordionKind, AccordionState};
pub use context::ContextError;
pub use controllable::{Controllable, Mode, PendingChange};
pub use dismiss::{DismissReason, Dismissible, LayoutEvent};
pub use emitter::{Emitter, Subscription};
pub use events::{Key, ViewportEvent};
pub use modal::ModalState;
pub use pin_input::{PinInputState, PinMode};
pub use radio::{Radio, RadioGroupHandle, RadioGroupState};
pub use tabs::{TabPanel, TabTrigger, TabsHandle, TabsState};
pub use toggle::{CheckedState, ToggleState};
