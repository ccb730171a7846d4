use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub pills: Pills,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub rule: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub transparent: Button,
    pub primary: Button,
    pub secondary: Button,
    pub menu: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub modal: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pills {
    pub simple: ContainerPalette,
    pub success: ContainerPalette,
    pub warning: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub pending: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BLACK,
                foreground: color::GREY_6,
                scrollable: color::GREY_7,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_3,
                warning: color::ORANGE,
                success: color::GREEN,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::AMBER,
                        text: color::LIGHT_BLACK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT_AMBER,
                        text: color::WHITE,
                        border: color::AMBER.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::LIGHT_BLACK,
                        text: color::AMBER,
                        border: color::AMBER.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_6,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::GREY_6,
                        text: color::WHITE,
                        border: color::GREY_7.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_5,
                        text: color::WHITE,
                        border: color::GREY_7.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_4,
                        text: color::WHITE,
                        border: color::GREY_7.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_6,
                        text: color::GREY_4,
                        border: color::GREY_6.into(),
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_2,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::AMBER,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::AMBER,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_4,
                        border: None,
                    }),
                },
                menu: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_2,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_6,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_5,
                        text: color::AMBER,
                        border: None,
                    }),
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::GREY_6,
                    text: None,
                    border: None,
                },
                modal: ContainerPalette {
                    background: color::GREY_6,
                    text: None,
                    border: color::GREY_7.into(),
                },
            },
            pills: Pills {
                simple: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: color::GREY_2.into(),
                    border: color::GREY_7.into(),
                },
                success: ContainerPalette {
                    background: color::GREEN,
                    text: color::LIGHT_BLACK.into(),
                    border: None,
                },
                warning: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: color::ORANGE.into(),
                    border: color::ORANGE.into(),
                },
            },
            notifications: Notifications {
                pending: ContainerPalette {
                    background: color::GREY_6,
                    text: color::WHITE.into(),
                    border: color::GREY_7.into(),
                },
                error: ContainerPalette {
                    background: color::RED,
                    text: color::WHITE.into(),
                    border: None,
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::LIGHT_BLACK,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_AMBER,
                        border: Some(color::GREY_7),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT,
                        border: Some(color::GREY_6),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::LIGHT_BLACK,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_AMBER,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT,
                        border: Some(color::RED),
                    },
                },
            },
            rule: color::GREY_7,
        }
    }
}
