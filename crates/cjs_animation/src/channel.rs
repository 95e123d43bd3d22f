//! Animated channels
//!
//! The closed set of numeric properties a keyframe may carry. Names are the
//! camelCase style names used in descriptors (`"scaleX"`, `"paddingTop"`).

use std::fmt;

/// Which part of the presentation a channel drives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelGroup {
    Rotation,
    Scale,
    Translation,
    Inset,
    Padding,
    Margin,
    Radius,
}

impl ChannelGroup {
    /// Whether the group is composed into the transform value
    pub fn is_transform(self) -> bool {
        matches!(
            self,
            ChannelGroup::Rotation | ChannelGroup::Scale | ChannelGroup::Translation
        )
    }
}

/// One animatable numeric property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    RotateX,
    RotateY,
    RotateZ,
    ScaleX,
    ScaleY,
    ScaleZ,
    TranslateX,
    TranslateY,
    TranslateZ,
    Top,
    Right,
    Bottom,
    Left,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    BorderRadius,
}

impl Channel {
    pub const ALL: [Channel; 22] = [
        Channel::RotateX,
        Channel::RotateY,
        Channel::RotateZ,
        Channel::ScaleX,
        Channel::ScaleY,
        Channel::ScaleZ,
        Channel::TranslateX,
        Channel::TranslateY,
        Channel::TranslateZ,
        Channel::Top,
        Channel::Right,
        Channel::Bottom,
        Channel::Left,
        Channel::PaddingTop,
        Channel::PaddingRight,
        Channel::PaddingBottom,
        Channel::PaddingLeft,
        Channel::MarginTop,
        Channel::MarginRight,
        Channel::MarginBottom,
        Channel::MarginLeft,
        Channel::BorderRadius,
    ];

    /// Rotation axes in composition order
    pub const ROTATION: [Channel; 3] = [Channel::RotateX, Channel::RotateY, Channel::RotateZ];
    /// Scale axes in composition order
    pub const SCALE: [Channel; 3] = [Channel::ScaleX, Channel::ScaleY, Channel::ScaleZ];
    /// Translation axes in composition order
    pub const TRANSLATION: [Channel; 3] = [
        Channel::TranslateX,
        Channel::TranslateY,
        Channel::TranslateZ,
    ];

    /// Descriptor name
    pub fn name(self) -> &'static str {
        match self {
            Channel::RotateX => "rotateX",
            Channel::RotateY => "rotateY",
            Channel::RotateZ => "rotateZ",
            Channel::ScaleX => "scaleX",
            Channel::ScaleY => "scaleY",
            Channel::ScaleZ => "scaleZ",
            Channel::TranslateX => "translateX",
            Channel::TranslateY => "translateY",
            Channel::TranslateZ => "translateZ",
            Channel::Top => "top",
            Channel::Right => "right",
            Channel::Bottom => "bottom",
            Channel::Left => "left",
            Channel::PaddingTop => "paddingTop",
            Channel::PaddingRight => "paddingRight",
            Channel::PaddingBottom => "paddingBottom",
            Channel::PaddingLeft => "paddingLeft",
            Channel::MarginTop => "marginTop",
            Channel::MarginRight => "marginRight",
            Channel::MarginBottom => "marginBottom",
            Channel::MarginLeft => "marginLeft",
            Channel::BorderRadius => "borderRadius",
        }
    }

    /// Parse a descriptor name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Channel> {
        Channel::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn group(self) -> ChannelGroup {
        match self {
            Channel::RotateX | Channel::RotateY | Channel::RotateZ => ChannelGroup::Rotation,
            Channel::ScaleX | Channel::ScaleY | Channel::ScaleZ => ChannelGroup::Scale,
            Channel::TranslateX | Channel::TranslateY | Channel::TranslateZ => {
                ChannelGroup::Translation
            }
            Channel::Top | Channel::Right | Channel::Bottom | Channel::Left => ChannelGroup::Inset,
            Channel::PaddingTop
            | Channel::PaddingRight
            | Channel::PaddingBottom
            | Channel::PaddingLeft => ChannelGroup::Padding,
            Channel::MarginTop
            | Channel::MarginRight
            | Channel::MarginBottom
            | Channel::MarginLeft => ChannelGroup::Margin,
            Channel::BorderRadius => ChannelGroup::Radius,
        }
    }

    pub fn is_transform(self) -> bool {
        self.group().is_transform()
    }

    /// Kebab-case style property for non-transform channels
    pub fn css_property(self) -> Option<&'static str> {
        let property = match self {
            Channel::Top => "top",
            Channel::Right => "right",
            Channel::Bottom => "bottom",
            Channel::Left => "left",
            Channel::PaddingTop => "padding-top",
            Channel::PaddingRight => "padding-right",
            Channel::PaddingBottom => "padding-bottom",
            Channel::PaddingLeft => "padding-left",
            Channel::MarginTop => "margin-top",
            Channel::MarginRight => "margin-right",
            Channel::MarginBottom => "margin-bottom",
            Channel::MarginLeft => "margin-left",
            Channel::BorderRadius => "border-radius",
            _ => return None,
        };
        Some(property)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
