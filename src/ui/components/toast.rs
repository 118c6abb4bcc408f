//! Toast rendering.
//!
//! [`ToastContainer`] is the one long-lived view that mirrors a
//! [`NotificationStore`]. It keeps a [`ToastLifecycle`] per visible toast so
//! auto-dismiss timers run exactly while a toast is on screen.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::channel::mpsc;
use futures::StreamExt;
use gpui::{
    div, prelude::FluentBuilder, px, ClickEvent, Context, Div, ElementId, InteractiveElement,
    IntoElement, ParentElement, Render, RenderOnce, SharedString, Styled, Task, Window,
};

use crate::notifications::{
    GpuiTimers, NotificationStore, ToastEntry, ToastId, ToastLifecycle, ToastPosition,
};
use crate::state::Subscription;
use crate::tokens::{radius, spacing, typography};
use crate::ui::components::button::{ClickHandler, IconButton};
use crate::ui::components::icon::{Icon, IconName, IconSize};
use crate::ui::theme::ThemeColors;

const TOAST_WIDTH: f32 = 340.0;

/// One rendered toast.
#[derive(IntoElement)]
pub struct Toast {
    id: ElementId,
    entry: ToastEntry,
    on_close: Option<ClickHandler>,
}

impl Toast {
    pub fn new(entry: ToastEntry) -> Self {
        Self {
            id: SharedString::from(format!("toast-{}", entry.id)).into(),
            entry,
            on_close: None,
        }
    }

    pub fn on_close(
        mut self,
        handler: impl Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Toast {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::current(cx);
        let (accent, _) = colors.status(self.entry.variant);
        let toast_id = self.entry.id.to_string();

        let mut close = IconButton::new(
            SharedString::from(format!("toast-close-{}", toast_id)),
            IconName::Close.symbol(),
        );
        if let Some(handler) = self.on_close {
            close = close.on_click(handler);
        }

        div()
            .id(self.id)
            .w(px(TOAST_WIDTH))
            .flex()
            .items_start()
            .gap(px(spacing::MD))
            .p(px(spacing::MD))
            .rounded(px(radius::LG))
            .border_1()
            .border_color(colors.border)
            .bg(colors.surface_elevated)
            .child(
                Icon::from_name(
                    SharedString::from(format!("toast-icon-{}", toast_id)),
                    self.entry.icon_name(),
                )
                .size(IconSize::Medium)
                .color(accent),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap(px(spacing::XXS))
                    .when_some(self.entry.title, |this, title| {
                        this.child(
                            div()
                                .text_size(px(typography::SIZE_MD))
                                .font_weight(gpui::FontWeight::SEMIBOLD)
                                .text_color(colors.text_primary)
                                .child(SharedString::from(title)),
                        )
                    })
                    .when_some(self.entry.description, |this, description| {
                        this.child(
                            div()
                                .text_size(px(typography::SIZE_SM))
                                .text_color(colors.text_secondary)
                                .child(SharedString::from(description)),
                        )
                    }),
            )
            .child(close)
    }
}

/// Groups entries by position, keeping the newest `max_visible` of each.
///
/// Groups come in [`ToastPosition::ALL`] order and keep insertion order
/// inside. Empty positions are skipped.
pub fn visible_groups(
    entries: &[ToastEntry],
    max_visible: usize,
) -> Vec<(ToastPosition, Vec<ToastEntry>)> {
    ToastPosition::ALL
        .iter()
        .filter_map(|&position| {
            let group: Vec<&ToastEntry> = entries
                .iter()
                .filter(|entry| entry.position == position)
                .collect();
            if group.is_empty() {
                return None;
            }
            let skip = group.len().saturating_sub(max_visible);
            Some((
                position,
                group.into_iter().skip(skip).cloned().collect(),
            ))
        })
        .collect()
}

/// Pins a toast stack to its corner or edge of the window.
fn anchor(stack: Div, position: ToastPosition) -> Div {
    let stack = stack.absolute().flex().flex_col().gap(px(spacing::SM)).p(px(spacing::LG));
    match position {
        ToastPosition::TopLeft => stack.top_0().left_0(),
        ToastPosition::TopCenter => stack.top_0().left_0().right_0().items_center(),
        ToastPosition::TopRight => stack.top_0().right_0(),
        ToastPosition::MiddleLeft => stack.top_0().bottom_0().left_0().justify_center(),
        ToastPosition::MiddleRight => stack.top_0().bottom_0().right_0().justify_center(),
        ToastPosition::BottomLeft => stack.bottom_0().left_0(),
        ToastPosition::BottomCenter => stack.bottom_0().left_0().right_0().items_center(),
        ToastPosition::BottomRight => stack.bottom_0().right_0(),
    }
}

/// Mirrors a notification store on screen.
pub struct ToastContainer {
    store: NotificationStore,
    timers: GpuiTimers,
    entries: Arc<Vec<ToastEntry>>,
    lifecycles: HashMap<ToastId, ToastLifecycle>,
    max_visible: usize,
    _subscription: Subscription,
    _updates: Task<()>,
}

impl ToastContainer {
    pub fn new(store: NotificationStore, max_visible: usize, cx: &mut Context<Self>) -> Self {
        let (tx, mut rx) = mpsc::unbounded::<Arc<Vec<ToastEntry>>>();
        let subscription = store.subscribe(move |snapshot| {
            // The receiver only goes away with the container.
            let _ = tx.unbounded_send(Arc::clone(&snapshot.entries));
        });

        let updates = cx.spawn(async move |this, cx| {
            while let Some(entries) = rx.next().await {
                if this
                    .update(cx, |this, cx| this.apply(entries, cx))
                    .is_err()
                {
                    break;
                }
            }
        });

        let mut container = Self {
            timers: GpuiTimers::new(cx.background_executor().clone()),
            entries: Arc::new(Vec::new()),
            lifecycles: HashMap::new(),
            max_visible: max_visible.max(1),
            _subscription: subscription,
            _updates: updates,
            store,
        };
        let initial = container.store.snapshot();
        container.apply(initial, cx);
        container
    }

    /// Number of toasts with a mounted lifecycle.
    pub fn mounted(&self) -> usize {
        self.lifecycles.len()
    }

    fn apply(&mut self, entries: Arc<Vec<ToastEntry>>, cx: &mut Context<Self>) {
        let visible: Vec<ToastEntry> = visible_groups(&entries, self.max_visible)
            .into_iter()
            .flat_map(|(_, group)| group)
            .collect();
        let ids: HashSet<&ToastId> = visible.iter().map(|entry| &entry.id).collect();

        self.lifecycles.retain(|id, _| ids.contains(id));
        for entry in &visible {
            if !self.lifecycles.contains_key(&entry.id) {
                let lifecycle = ToastLifecycle::mount(entry, &self.store, &self.timers);
                self.lifecycles.insert(entry.id.clone(), lifecycle);
            }
        }

        tracing::trace!(
            total = entries.len(),
            mounted = self.lifecycles.len(),
            "toast container updated"
        );
        self.entries = entries;
        cx.notify();
    }

    fn close(&mut self, id: &ToastId) {
        if let Some(lifecycle) = self.lifecycles.get_mut(id) {
            lifecycle.close();
        }
    }
}

impl Render for ToastContainer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let groups = visible_groups(&self.entries, self.max_visible);

        let stacks = groups
            .into_iter()
            .map(|(position, group)| {
                let toasts = group
                    .into_iter()
                    .map(|entry| {
                        let id = entry.id.clone();
                        Toast::new(entry).on_close(cx.listener(
                            move |this, _event: &ClickEvent, _window, _cx| this.close(&id),
                        ))
                    })
                    .collect::<Vec<_>>();
                anchor(div(), position).children(toasts)
            })
            .collect::<Vec<_>>();

        div()
            .id("toast-container")
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .children(stacks)
    }
}
