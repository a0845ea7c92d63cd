//! Modal confirmation for wiping the application.
//!
//! The destructive button stays inert until the input spells the
//! confirmation token; everything underneath the scrim is blocked while
//! the dialog is up.

use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, stack, text, text_input, Id, Space,
};
use iced::{Element, Length, Padding, Task};

use coffer_core::locale;
use coffer_core::reset::RESET_TOKEN;

use crate::app::{CofferApp, Message};
use crate::theme;

const ID_CONFIRM: &str = "reset_confirm";

/// Focus task for the confirmation input, fired when the dialog opens.
pub fn focus_confirmation_input() -> Task<Message> {
    iced::widget::operation::focus(Id::new(ID_CONFIRM))
}

/// Stacks the dialog over the unlock screen behind a click-to-dismiss
/// scrim.
pub fn overlay<'a>(base: Element<'a, Message>, app: &'a CofferApp) -> Element<'a, Message> {
    let title = text(locale::message("form__reset_app"))
        .size(20)
        .color(theme::text_primary());
    let description = text(locale::message("modal__reset_app_desc"))
        .size(13)
        .color(theme::text_dim())
        .wrapping(text::Wrapping::Word);

    let confirm_input = text_input(RESET_TOKEN, app.reset.typed())
        .id(Id::new(ID_CONFIRM))
        .on_input(Message::ResetTypedChanged)
        .on_submit(Message::ResetConfirmPressed)
        .style(theme::input_style)
        .padding(Padding::from([10, 12]))
        .size(14);

    let delete_label = if app.reset.is_in_flight() {
        "Deleting..."
    } else {
        locale::message("action__delete")
    };
    let delete_btn = if app.reset.confirm_enabled() {
        button(text(delete_label).size(14))
            .on_press(Message::ResetConfirmPressed)
            .style(theme::danger_button_style)
            .padding(Padding::from([8, 24]))
    } else {
        button(text(delete_label).size(14))
            .style(theme::muted_button_style)
            .padding(Padding::from([8, 24]))
    };

    let cancel_btn = button(text("Cancel").size(14))
        .on_press(Message::ResetCancelPressed)
        .style(theme::ghost_button_style)
        .padding(Padding::from([8, 16]));

    let mut dialog = column![
        title,
        Space::new().height(8),
        description,
        Space::new().height(16),
        confirm_input,
        Space::new().height(16),
        row![
            Space::new().width(Length::Fill),
            cancel_btn,
            Space::new().width(8),
            delete_btn,
        ]
        .spacing(0),
    ]
    .spacing(0)
    .padding(24)
    .width(420);

    if let Some(ref reason) = app.reset_error {
        dialog = dialog.push(Space::new().height(12));
        dialog = dialog.push(text(reason.as_str()).size(12).color(theme::reject_red()));
    }

    let panel = container(dialog).style(theme::panel_style);

    stack![
        base,
        opaque(
            mouse_area(center(opaque(panel)).style(theme::scrim_style))
                .on_press(Message::ResetCancelPressed)
        )
    ]
    .into()
}
