//! The unlock screen: wordmark, staged-in credential form, and the
//! entry point into the reset dialog.

use iced::widget::{button, column, container, row, text, text_input, Id, Space};
use iced::{Element, Length, Padding, Task};

use coffer_core::gate::GatePhase;
use coffer_core::locale;
use coffer_core::reveal::RevealPhase;

use crate::app::{CofferApp, Message};
use crate::theme;

const ID_PASSWORD: &str = "unlock_pw";

/// Focus task for the password field, fired when the reveal completes.
pub fn focus_password_input() -> Task<Message> {
    iced::widget::operation::focus(Id::new(ID_PASSWORD))
}

pub fn view(app: &CofferApp) -> Element<'_, Message> {
    let phase = app.reveal.phase();
    let tagline_alpha = if phase >= RevealPhase::TitleRevealed {
        1.0
    } else {
        0.0
    };
    // The form is mounted and interactive from the first frame; only its
    // paint fades in behind the title.
    let form_alpha = match phase {
        RevealPhase::Initial => 0.0,
        RevealPhase::TitleRevealed => 0.45,
        RevealPhase::FormRevealed => 1.0,
    };

    let title = text("Coffer").size(28).color(theme::text_primary());
    let tagline = text(locale::message("content__unlock_tagline"))
        .size(14)
        .color(theme::faded(theme::text_dim(), tagline_alpha));

    let verifying = app.gate.phase() == GatePhase::Verifying;

    let password_field = text_input("Password", &app.password)
        .id(Id::new(ID_PASSWORD))
        .on_input(Message::PasswordChanged)
        .on_submit(Message::UnlockPressed)
        .secure(true)
        .style(move |t, s| theme::faded_input_style(t, s, form_alpha))
        .padding(Padding::from([12, 14]))
        .size(15);

    let unlock_label = if verifying {
        "Unlocking..."
    } else {
        locale::message("action__unlock")
    };
    let unlock_enabled = !app.password.is_empty() && !verifying;
    let unlock_btn = if unlock_enabled {
        button(text(unlock_label).size(14))
            .on_press(Message::UnlockPressed)
            .style(move |t, s| theme::fade_button(theme::primary_button_style(t, s), form_alpha))
            .padding(Padding::from([10, 32]))
    } else {
        button(text(unlock_label).size(14))
            .style(move |t, s| theme::fade_button(theme::muted_button_style(t, s), form_alpha))
            .padding(Padding::from([10, 32]))
    };

    let forget_btn = button(
        text(locale::message("action__forget_password"))
            .size(12)
            .color(theme::faded(theme::text_dim(), form_alpha)),
    )
    .on_press(Message::ForgetPasswordPressed)
    .style(move |t, s| theme::fade_button(theme::ghost_button_style(t, s), form_alpha))
    .padding(Padding::from([4, 0]));

    let mut content = column![
        title,
        Space::new().height(4),
        tagline,
        Space::new().height(24),
        password_field,
        Space::new().height(16),
        row![Space::new().width(Length::Fill), unlock_btn].spacing(0),
    ]
    .spacing(0)
    .padding(40)
    .width(420);

    if let Some(err) = app.gate.error() {
        content = content.push(Space::new().height(12));
        content = content.push(
            text(locale::message(err.message_key()))
                .size(13)
                .color(theme::reject_red()),
        );
    }

    if app.biometric_available() {
        let label = if app.biometric_in_flight {
            "Waiting for biometrics..."
        } else {
            "Unlock with biometrics"
        };
        let mut biometric_btn = button(text(label).size(12))
            .style(move |t, s| theme::fade_button(theme::ghost_button_style(t, s), form_alpha))
            .padding(Padding::from([4, 0]));
        if !app.biometric_in_flight {
            biometric_btn = biometric_btn.on_press(Message::BiometricPressed);
        }
        content = content.push(Space::new().height(12));
        content = content.push(biometric_btn);
    }

    content = content.push(Space::new().height(16));
    content = content.push(forget_btn);

    container(container(content).style(theme::panel_style))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::dark_background)
        .into()
}
