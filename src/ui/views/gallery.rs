//! Component gallery.
//!
//! The root view of the gallery window. It shows every component and
//! forwards window input to the shared [`Viewport`] so open overlays can
//! react to outside clicks, Escape, scroll and resize.

use std::cell::Cell;
use std::rc::Rc;

use gpui::{
    div, px, App, AppContext, ClickEvent, Context, Entity, InteractiveElement, IntoElement,
    KeyDownEvent, MouseDownEvent, ParentElement, Render, ScrollWheelEvent, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::{ClearToasts, ToggleTheme};
use crate::floating::{FloatingPanel, Placement};
use crate::notifications::{NotificationStore, ToastOptions, ToastPosition, ToastVariant};
use crate::state::{
    AccordionState, ContextError, Controllable, ModalState, PinInputState, PinMode,
    RadioGroupState, TabsState, ToggleState,
};
use crate::tokens::{spacing, typography};
use crate::ui::components::{
    Accordion, AccordionSection, Avatar, AvatarShape, AvatarSize, AvatarStatus, Badge,
    BadgeVariant, Button, ButtonVariant, Checkbox, CountBadge, Divider, IconName, Information,
    Modal, PinInput, Popover, Progress, RadioGroup, RadioOption, Skeleton, Switch, TabSpec, Tabs,
    ToastContainer, Tooltip,
};
use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::viewport::Viewport;

/// The gallery's interactive components, built before the window opens.
pub struct GalleryDemos {
    accordion: Entity<Accordion>,
    tabs: Entity<Tabs>,
    modal: Entity<Modal>,
    newsletter: Entity<Checkbox>,
    terms: Entity<Checkbox>,
    terms_accepted: Rc<Cell<bool>>,
    notifications: Entity<Switch>,
    plan: Entity<RadioGroup>,
    pin: Entity<PinInput>,
    popover: Entity<Popover>,
    tooltip: Entity<Tooltip>,
}

impl GalleryDemos {
    pub fn new(
        viewport: &Viewport,
        store: &NotificationStore,
        placement: Placement,
        gap: f32,
        cx: &mut App,
    ) -> Result<Self, ContextError> {
        let events = viewport.events();

        let accordion = Accordion::new(
            "faq",
            AccordionState::single(Controllable::uncontrolled(vec!["shipping".to_string()])),
            vec![
                AccordionSection::new("shipping", "Shipping", "Orders ship within two days."),
                AccordionSection::new(
                    "returns",
                    "Returns",
                    "Unused items can be returned for 30 days.",
                ),
                AccordionSection::new("support", "Support", "Write to us any time."),
            ],
        )?;

        let tabs = Tabs::new(
            "settings-tabs",
            TabsState::new(Controllable::uncontrolled("account".to_string())),
            vec![
                TabSpec::new("account", "Account", "Name, email and avatar."),
                TabSpec::new("billing", "Billing", "Invoices and payment methods.").disabled(true),
                TabSpec::new("team", "Team", "Members and roles."),
            ],
            cx,
        )?;

        let plan = RadioGroup::new(
            "plan",
            RadioGroupState::new(Controllable::uncontrolled(Some("monthly".to_string()))),
            vec![
                RadioOption::new("monthly", "Monthly"),
                RadioOption::new("yearly", "Yearly"),
                RadioOption::new("lifetime", "Lifetime").disabled(true),
            ],
            cx,
        )?;

        let terms_accepted = Rc::new(Cell::new(false));
        let accepted = Rc::clone(&terms_accepted);
        let terms = Checkbox::new(
            "terms",
            "I accept the terms (controlled)",
            ToggleState::new(
                Controllable::controlled(false).on_change(move |next| accepted.set(*next)),
            ),
        );

        let pin_store = store.clone();
        let pin = PinInput::new(
            "pin",
            PinInputState::new(6, Controllable::uncontrolled(String::new()))
                .mode(PinMode::Numeric)
                .on_complete(move |code| {
                    pin_store.show(ToastOptions::success("Code entered").description(code));
                }),
            cx,
        );

        let modal = Modal::new(
            "confirm",
            "Delete project?",
            "This removes the project and all of its files. Press Escape or click outside to cancel.",
            ModalState::new(events, Controllable::uncontrolled(false)),
        );

        let popover = Popover::new(
            "details",
            "Show details",
            "Popovers follow their trigger through scroll and resize.",
            FloatingPanel::closed(events).placement(placement).gap(gap),
        );

        let tooltip = Tooltip::new(
            "hint",
            "Hover me",
            "Tooltips close when the pointer leaves.",
            FloatingPanel::closed(events).placement(Placement::Top).gap(gap),
        );

        Ok(Self {
            accordion: cx.new(|_| accordion),
            tabs: cx.new(|_| tabs),
            modal: cx.new(|_| modal),
            newsletter: cx.new(|_| {
                Checkbox::new(
                    "newsletter",
                    "Newsletter",
                    ToggleState::new(Controllable::uncontrolled(false)).indeterminate(true),
                )
            }),
            terms: cx.new(|_| terms),
            terms_accepted,
            notifications: cx.new(|_| {
                Switch::new(
                    "notifications",
                    "Notifications",
                    ToggleState::new(Controllable::uncontrolled(true)),
                )
            }),
            plan: cx.new(|_| plan),
            pin: cx.new(|_| pin),
            popover: cx.new(|_| popover),
            tooltip: cx.new(|_| tooltip),
        })
    }
}

pub struct Gallery {
    viewport: Viewport,
    store: NotificationStore,
    demos: GalleryDemos,
    toasts: Entity<ToastContainer>,
    _subscriptions: Vec<gpui::Subscription>,
}

impl Gallery {
    pub fn new(
        viewport: Viewport,
        store: NotificationStore,
        demos: GalleryDemos,
        max_visible: usize,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let toasts = cx.new(|cx| ToastContainer::new(store.clone(), max_visible, cx));
        let subscriptions = vec![
            cx.observe_window_bounds(window, |this, _window, _cx| this.viewport.resized()),
            cx.observe(&demos.terms, |_, _, cx| cx.notify()),
        ];

        Self {
            viewport,
            store,
            demos,
            toasts,
            _subscriptions: subscriptions,
        }
    }

    fn on_pointer_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        self.viewport.pointer_down(event);
        window.refresh();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, _cx: &mut Context<Self>) {
        self.viewport.key_down(event);
        window.refresh();
    }

    fn on_scroll(
        &mut self,
        _event: &ScrollWheelEvent,
        window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        self.viewport.scrolled();
        window.refresh();
    }

    fn toggle_theme(&mut self, _: &ToggleTheme, window: &mut Window, cx: &mut Context<Self>) {
        let mut theme = cx.try_global::<Theme>().cloned().unwrap_or_default();
        theme.toggle();
        tracing::info!(mode = ?theme.mode, "theme toggled");
        cx.set_global(theme);
        window.refresh();
    }

    fn clear_toasts(&mut self, _: &ClearToasts, _window: &mut Window, _cx: &mut Context<Self>) {
        self.store.clear();
    }

    fn next_position(
        &mut self,
        _event: &ClickEvent,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        let current = self.store.position();
        let index = ToastPosition::ALL
            .iter()
            .position(|position| *position == current)
            .unwrap_or(0);
        let next = ToastPosition::ALL[(index + 1) % ToastPosition::ALL.len()];
        self.store.set_position(next);
        self.store.information(format!("Toasts now appear {}", next));
    }

    fn render_section(
        &self,
        title: &str,
        colors: &ThemeColors,
        content: impl IntoElement,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap(px(spacing::MD))
            .child(
                div()
                    .text_size(px(typography::SIZE_LG))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(colors.text_primary)
                    .child(SharedString::from(title.to_string())),
            )
            .child(content)
    }

    fn render_toast_buttons(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let buttons: Vec<Button> = ToastVariant::ALL
            .iter()
            .map(|&variant| {
                let show = cx.listener(move |this, _event: &ClickEvent, _window, _cx| {
                    this.store.show(
                        ToastOptions::new(variant)
                            .title(format!("{} toast", variant))
                            .description("Closes itself after five seconds."),
                    );
                });
                Button::new(
                    SharedString::from(format!("toast-{}", variant)),
                    variant.to_string(),
                )
                .variant(ButtonVariant::Secondary)
                .on_click(show)
            })
            .collect();

        let persistent = cx.listener(|this, _event: &ClickEvent, _window, _cx| {
            this.store
                .show(ToastOptions::warning("Stays until closed").persistent());
        });
        let clear = cx.listener(|this, _event: &ClickEvent, _window, _cx| this.store.clear());

        div()
            .flex()
            .flex_wrap()
            .gap(px(spacing::SM))
            .children(buttons)
            .child(
                Button::new("toast-persistent", "persistent")
                    .variant(ButtonVariant::Secondary)
                    .on_click(persistent),
            )
            .child(
                Button::new("toast-position", format!("position: {}", self.store.position()))
                    .variant(ButtonVariant::Ghost)
                    .on_click(cx.listener(Self::next_position)),
            )
            .child(
                Button::new("toast-clear", "clear")
                    .variant(ButtonVariant::Danger)
                    .on_click(clear),
            )
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = ThemeColors::current(cx);

        // Controlled checkbox: the gallery owns the value.
        let accepted = self.demos.terms_accepted.get();
        self.demos
            .terms
            .update(cx, |checkbox, _cx| checkbox.sync(Some(accepted)));

        let open_modal = {
            let modal = self.demos.modal.clone();
            move |_event: &ClickEvent, _window: &mut Window, cx: &mut App| {
                modal.update(cx, |modal, cx| modal.open(cx));
            }
        };

        let display = div()
            .flex()
            .flex_wrap()
            .items_center()
            .gap(px(spacing::MD))
            .child(Avatar::from_name("avatar-ada", "Ada Lovelace").status(AvatarStatus::Online))
            .child(
                Avatar::from_name("avatar-grace", "Grace Hopper")
                    .size(AvatarSize::Large)
                    .shape(AvatarShape::Square),
            )
            .child(Badge::new("badge-new", "New").variant(BadgeVariant::Brand))
            .child(Badge::new("badge-ok", "Passing").variant(BadgeVariant::Success).pill())
            .child(CountBadge::new("badge-count", 128))
            .child(Button::new("button-primary", "Primary"))
            .child(Button::new("button-ghost", "Ghost").variant(ButtonVariant::Ghost))
            .child(
                Button::new("button-icon", "Verified")
                    .variant(ButtonVariant::Secondary)
                    .icon(IconName::Check),
            )
            .child(Button::new("button-loading", "Saving").loading(true))
            .child(Button::new("button-disabled", "Disabled").disabled(true));

        let loading = div()
            .flex()
            .flex_col()
            .gap(px(spacing::MD))
            .child(Progress::new(64.0).variant(ToastVariant::Success))
            .child(
                div()
                    .flex()
                    .gap(px(spacing::MD))
                    .child(Skeleton::circle(40.0))
                    .child(div().flex_1().child(Skeleton::text(3))),
            )
            .child(
                Information::new("info-sync", "Sync paused")
                    .variant(ToastVariant::Warning)
                    .description("Changes are saved locally until you reconnect."),
            );

        let inputs = div()
            .flex()
            .flex_col()
            .gap(px(spacing::MD))
            .child(self.demos.newsletter.clone())
            .child(self.demos.terms.clone())
            .child(self.demos.notifications.clone())
            .child(Divider::horizontal().label("plan"))
            .child(self.demos.plan.clone())
            .child(Divider::horizontal().label("verification code"))
            .child(self.demos.pin.clone());

        let overlays = div()
            .flex()
            .items_center()
            .gap(px(spacing::MD))
            .child(self.demos.popover.clone())
            .child(self.demos.tooltip.clone())
            .child(
                Button::new("open-modal", "Open dialog")
                    .variant(ButtonVariant::Danger)
                    .on_click(open_modal),
            );

        let content = div()
            .id("gallery-content")
            .size_full()
            .overflow_y_scroll()
            .on_scroll_wheel(cx.listener(Self::on_scroll))
            .child(
                div()
                    .max_w(px(720.0))
                    .flex()
                    .flex_col()
                    .gap(px(spacing::XXL))
                    .p(px(spacing::XXL))
                    .child(
                        div()
                            .text_size(px(typography::SIZE_XXL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(colors.text_primary)
                            .child(SharedString::from("kiln")),
                    )
                    .child(self.render_section("Display", &colors, display))
                    .child(self.render_section("Feedback", &colors, loading))
                    .child(self.render_section("Accordion", &colors, self.demos.accordion.clone()))
                    .child(self.render_section("Tabs", &colors, self.demos.tabs.clone()))
                    .child(self.render_section("Inputs", &colors, inputs))
                    .child(self.render_section("Overlays", &colors, overlays))
                    .child(self.render_section("Toasts", &colors, self.render_toast_buttons(cx))),
            );

        div()
            .id("gallery")
            .relative()
            .size_full()
            .bg(colors.background)
            .text_color(colors.text_primary)
            .capture_any_mouse_down(cx.listener(Self::on_pointer_down))
            .on_key_down(cx.listener(Self::on_key_down))
            .on_action(cx.listener(Self::toggle_theme))
            .on_action(cx.listener(Self::clear_toasts))
            .child(content)
            .child(self.demos.modal.clone())
            .child(self.toasts.clone())
    }
}
