//! Toast notifications.
//!
//! - [`entry`]: ids, variants, positions, [`ToastOptions`] and [`ToastEntry`]
//! - [`store`]: the [`NotificationStore`] list with subscribe/publish
//! - [`timer`]: the [`TimerHost`] abstraction over tokio and gpui timers
//! - [`lifecycle`]: [`ToastLifecycle`], auto-dismiss and close for one toast
//!
//! ```no_run
//! use kiln::notifications::{NotificationStore, ToastOptions};
//!
//! let store = NotificationStore::global();
//! store.success("Saved");
//! store.show(ToastOptions::error("Upload failed").description("Check your connection"));
//! ```

pub mod entry;
pub mod lifecycle;
pub mod store;
pub mod timer;

pub use entry::{
    ParsePositionError, ToastDefaults, ToastEntry, ToastId, ToastOptions, ToastPosition,
    ToastVariant,
};
pub use lifecycle::ToastLifecycle;
pub use store::{NotificationStore, StoreSnapshot};
pub use timer::{GpuiTimers, TimerCallback, TimerHandle, TimerHost, TokioTimers};
