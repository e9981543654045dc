use enum_map::Enum;

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuRow {
    #[default]
    LightIndex,
    LightEnable,
    DiffuseRed,
    DiffuseGreen,
    DiffuseBlue,
    SpecularRed,
    SpecularGreen,
    SpecularBlue,
    DirectionX,
    DirectionY,
    DirectionZ,
    AmbientRed,
    AmbientGreen,
    AmbientBlue,
    PreferPerPixelLighting,
}

pub const MENU_ROW_COUNT: usize = MenuRow::LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelField {
    Diffuse,
    Specular,
    Direction,
    Ambient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampPolicy {
    Unit,
    Unbounded,
}

impl ClampPolicy {
    pub fn apply(self, value: f32) -> f32 {
        match self {
            Self::Unit => value.clamp(0.0, 1.0),
            Self::Unbounded => value,
        }
    }
}

impl ChannelField {
    pub fn clamp_policy(self) -> ClampPolicy {
        match self {
            Self::Direction => ClampPolicy::Unbounded,
            Self::Diffuse | Self::Specular | Self::Ambient => ClampPolicy::Unit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    LightIndex,
    LightEnabled,
    Channel { field: ChannelField, axis: Axis },
    PreferPerPixelLighting,
}

impl MenuRow {
    pub fn all() -> impl Iterator<Item = MenuRow> {
        (0..MENU_ROW_COUNT).map(MenuRow::from_usize)
    }

    pub fn index(self) -> usize {
        self.into_usize()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LightIndex => "LightIndex",
            Self::LightEnable => "Light Enable",
            Self::DiffuseRed => "DiffuseColor (Red)",
            Self::DiffuseGreen => "DiffuseColor (Green)",
            Self::DiffuseBlue => "DiffuseColor (Blue)",
            Self::SpecularRed => "SpecularColor (Red)",
            Self::SpecularGreen => "SpecularColor (Green)",
            Self::SpecularBlue => "SpecularColor (Blue)",
            Self::DirectionX => "Direction X",
            Self::DirectionY => "Direction Y",
            Self::DirectionZ => "Direction Z",
            Self::AmbientRed => "AmbientLightColor (Red)",
            Self::AmbientGreen => "AmbientLightColor (Green)",
            Self::AmbientBlue => "AmbientLightColor (Blue)",
            Self::PreferPerPixelLighting => "PreferPerPixelLighting",
        }
    }

    pub fn target(self) -> EditTarget {
        use Axis::{X, Y, Z};
        use ChannelField::{Ambient, Diffuse, Direction, Specular};

        let channel = |field, axis| EditTarget::Channel { field, axis };
        match self {
            Self::LightIndex => EditTarget::LightIndex,
            Self::LightEnable => EditTarget::LightEnabled,
            Self::DiffuseRed => channel(Diffuse, X),
            Self::DiffuseGreen => channel(Diffuse, Y),
            Self::DiffuseBlue => channel(Diffuse, Z),
            Self::SpecularRed => channel(Specular, X),
            Self::SpecularGreen => channel(Specular, Y),
            Self::SpecularBlue => channel(Specular, Z),
            Self::DirectionX => channel(Direction, X),
            Self::DirectionY => channel(Direction, Y),
            Self::DirectionZ => channel(Direction, Z),
            Self::AmbientRed => channel(Ambient, X),
            Self::AmbientGreen => channel(Ambient, Y),
            Self::AmbientBlue => channel(Ambient, Z),
            Self::PreferPerPixelLighting => EditTarget::PreferPerPixelLighting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_ordered_as_displayed() {
        let labels: Vec<&str> = MenuRow::all().map(MenuRow::label).collect();
        assert_eq!(labels.len(), 15);
        assert_eq!(labels[0], "LightIndex");
        assert_eq!(labels[2], "DiffuseColor (Red)");
        assert_eq!(labels[10], "Direction Z");
        assert_eq!(labels[14], "PreferPerPixelLighting");

        for (index, row) in MenuRow::all().enumerate() {
            assert_eq!(row.index(), index);
        }
    }

    #[test]
    fn only_direction_rows_are_unbounded() {
        for row in MenuRow::all() {
            if let EditTarget::Channel { field, .. } = row.target() {
                let unbounded = matches!(
                    row,
                    MenuRow::DirectionX | MenuRow::DirectionY | MenuRow::DirectionZ
                );
                assert_eq!(field.clamp_policy() == ClampPolicy::Unbounded, unbounded);
            }
        }
    }
}
