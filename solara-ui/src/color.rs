use iced::Color;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x16 as f32 / 255.0,
    0x15 as f32 / 255.0,
    0x12 as f32 / 255.0,
);
pub const GREY_7: Color = Color::from_rgb(
    0x3F as f32 / 255.0,
    0x3D as f32 / 255.0,
    0x38 as f32 / 255.0,
);
pub const GREY_6: Color = Color::from_rgb(
    0x22 as f32 / 255.0,
    0x21 as f32 / 255.0,
    0x1D as f32 / 255.0,
);
pub const GREY_5: Color = Color::from_rgb(
    0x29 as f32 / 255.0,
    0x28 as f32 / 255.0,
    0x23 as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x45 as f32 / 255.0,
    0x43 as f32 / 255.0,
    0x3D as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x74 as f32 / 255.0,
    0x72 as f32 / 255.0,
    0x6C as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCA as f32 / 255.0,
    0xC4 as f32 / 255.0,
);
pub const WHITE: Color = iced::Color::WHITE;
pub const AMBER: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0xB3 as f32 / 255.0,
    0x21 as f32 / 255.0,
);
pub const TRANSPARENT_AMBER: Color = Color::from_rgba(
    0xFF as f32 / 255.0,
    0xB3 as f32 / 255.0,
    0x21 as f32 / 255.0,
    0.3,
);
pub const GREEN: Color = Color::from_rgb(
    0x2E as f32 / 255.0,
    0xBD as f32 / 255.0,
    0x59 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);

pub const ORANGE: Color =
    Color::from_rgb(0xFF as f32 / 255.0, 0xa7 as f32 / 255.0, 0x0 as f32 / 255.0);
