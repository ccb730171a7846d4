pub mod color;
pub mod component;
pub mod font;
pub mod theme;
pub mod widget;
