//! Reusable UI components.
//!
//! Display primitives are stateless [`RenderOnce`](gpui::RenderOnce)
//! elements styled from the theme. Interactive components are entities that
//! render a state machine from [`crate::state`] or [`crate::floating`].

pub mod accordion;
pub mod avatar;
pub mod badge;
pub mod button;
pub mod checkbox;
pub mod divider;
pub mod icon;
pub mod information;
pub mod modal;
pub mod pin_input;
pub mod popover;
pub mod progress;
pub mod radio;
pub mod skeleton;
pub mod switch;
pub mod tabs;
pub mod toast;
pub mod tooltip;

pub use accordion::{Accordion, AccordionSection};
pub use avatar::{Avatar, AvatarShape, AvatarSize, AvatarStatus};
pub use badge::{Badge, BadgeSize, BadgeVariant, CountBadge};
pub use button::{Button, ButtonSize, ButtonVariant, IconButton};
pub use checkbox::Checkbox;
pub use divider::{Divider, Orientation};
pub use icon::{Icon, IconName, IconSize};
pub use information::Information;
pub use modal::Modal;
pub use pin_input::PinInput;
pub use popover::Popover;
pub use progress::Progress;
pub use radio::{RadioGroup, RadioOption};
pub use skeleton::{Skeleton, SkeletonShape};
pub use switch::Switch;
pub use tabs::{TabSpec, Tabs};
pub use toast::{visible_groups, Toast, ToastContainer};
pub use tooltip::Tooltip;
