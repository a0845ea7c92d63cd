//! Dark palette and widget styles for the unlock shell.

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

pub fn background() -> Color {
    Color::from_rgb8(0x0e, 0x0e, 0x10)
}

pub fn surface() -> Color {
    Color::from_rgb8(0x14, 0x14, 0x18)
}

pub fn surface_input() -> Color {
    Color::from_rgb8(0x1b, 0x1b, 0x20)
}

pub fn border_dim() -> Color {
    Color::from_rgb8(0x2a, 0x2a, 0x30)
}

pub fn text_primary() -> Color {
    Color::from_rgb8(0xe0, 0xe0, 0xe0)
}

pub fn text_dim() -> Color {
    Color::from_rgb8(0x8a, 0x8a, 0x92)
}

pub fn accent_blue() -> Color {
    Color::from_rgb8(0x5a, 0x9f, 0xd4)
}

pub fn reject_red() -> Color {
    Color::from_rgb8(0xe0, 0x7c, 0x6a)
}

/// `color` scaled to `alpha`, for widgets mid-reveal.
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

pub fn dark_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background())),
        ..container::Style::default()
    }
}

pub fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface())),
        border: Border {
            color: border_dim(),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Translucent backdrop behind the reset dialog.
pub fn scrim_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.6,
            ..Color::BLACK
        })),
        ..container::Style::default()
    }
}

pub fn input_style(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let focused = matches!(status, text_input::Status::Focused { .. });
    text_input::Style {
        background: Background::Color(surface_input()),
        border: Border {
            color: if focused { accent_blue() } else { border_dim() },
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: text_dim(),
        placeholder: text_dim(),
        value: text_primary(),
        selection: faded(accent_blue(), 0.35),
    }
}

/// [`input_style`] with every color scaled for the reveal fade.
pub fn faded_input_style(
    theme: &Theme,
    status: text_input::Status,
    alpha: f32,
) -> text_input::Style {
    let mut style = input_style(theme, status);
    if let Background::Color(color) = style.background {
        style.background = Background::Color(faded(color, alpha));
    }
    style.border.color = faded(style.border.color, alpha);
    style.icon = faded(style.icon, alpha);
    style.placeholder = faded(style.placeholder, alpha);
    style.value = faded(style.value, alpha);
    style.selection = faded(style.selection, alpha);
    style
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgb8(0x6f, 0xae, 0xdd),
        _ => accent_blue(),
    };
    button::Style {
        background: Some(Background::Color(fill)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Look of an action that is present but not currently pressable.
pub fn muted_button_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::from_rgb8(0x22, 0x22, 0x28))),
        text_color: text_dim(),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

pub fn ghost_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let color = match status {
        button::Status::Hovered | button::Status::Pressed => text_primary(),
        _ => text_dim(),
    };
    button::Style {
        background: None,
        text_color: color,
        ..Default::default()
    }
}

pub fn danger_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgb8(0xe8, 0x92, 0x82),
        _ => reject_red(),
    };
    button::Style {
        background: Some(Background::Color(fill)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Scales a button style's colors for the reveal fade.
pub fn fade_button(mut style: button::Style, alpha: f32) -> button::Style {
    if let Some(Background::Color(color)) = style.background {
        style.background = Some(Background::Color(faded(color, alpha)));
    }
    style.text_color = faded(style.text_color, alpha);
    style.border.color = faded(style.border.color, alpha);
    style
}
