// Palette e stili condivisi dalle view
use iced::{Color, Font};
use iced::widget::container::Appearance;

pub const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
pub const PANEL_BG: Color = Color::from_rgb(0.10, 0.11, 0.24); // Sidebars and headers
pub const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for card bodies
pub const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
pub const BORDER: Color = Color::from_rgb(0.25, 0.26, 0.40);
pub const ACCENT: Color = Color::from_rgb(0.15, 0.39, 0.92); // Blue
pub const ACCENT_ALT: Color = Color::from_rgb(0.49, 0.23, 0.93); // Purple, balance card
pub const SUCCESS: Color = Color::from_rgb(0.29, 0.87, 0.50);
pub const WARNING: Color = Color::from_rgb(0.98, 0.80, 0.08);
pub const DANGER: Color = Color::from_rgb(0.97, 0.44, 0.44);
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
pub const TEXT_MUTED: Color = Color::from_rgb(0.5, 0.5, 0.6);

pub const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn flat(background: Color, radius: f32, border: Option<Color>) -> Appearance {
    Appearance {
        background: Some(iced::Background::Color(background)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: if border.is_some() { 1.0 } else { 0.0 },
            color: border.unwrap_or(Color::TRANSPARENT),
            radius: radius.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

pub fn bg_main_appearance(_: &iced::Theme) -> Appearance {
    flat(BG_MAIN, 0.0, None)
}

pub fn panel_appearance(_: &iced::Theme) -> Appearance {
    flat(PANEL_BG, 0.0, Some(BORDER))
}

pub fn card_appearance(_: &iced::Theme) -> Appearance {
    Appearance {
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
        ..flat(CARD_BG, 16.0, None)
    }
}

pub fn row_appearance(_: &iced::Theme) -> Appearance {
    flat(INPUT_BG, 10.0, None)
}

pub fn input_appearance(_: &iced::Theme) -> Appearance {
    flat(INPUT_BG, 12.0, Some(BORDER))
}

pub fn balance_appearance(_: &iced::Theme) -> Appearance {
    Appearance {
        background: Some(iced::Background::Gradient(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::FRAC_PI_2))
                .add_stop(0.0, ACCENT)
                .add_stop(1.0, ACCENT_ALT)
                .into(),
        )),
        ..flat(ACCENT, 16.0, None)
    }
}

/// Filled rounded box in `color`, used for avatars, bubbles and dots.
pub fn filled(color: Color, radius: f32) -> iced::theme::Container {
    iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| flat(color, radius, None)))
}

/// Translucent pill with a border of the same hue, used for status badges.
pub fn pill(color: Color) -> iced::theme::Container {
    iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| Appearance {
        text_color: Some(color),
        ..flat(Color { a: 0.2, ..color }, 10.0, Some(Color { a: 0.3, ..color }))
    }))
}
