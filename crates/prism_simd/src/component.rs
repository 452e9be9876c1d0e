use core::fmt::Display;

/// Single element of a [`Lane`](crate::Lane)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Component {
    X,
    Y,
    Z,
    W,
}

impl Component {
    pub const ALL : [Component; 4] = [Component::X, Component::Y, Component::Z, Component::W];

    /// Index of the component inside of a lane
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the component at `idx`, if `idx < 4`
    pub const fn from_index(idx: usize) -> Option<Component> {
        match idx {
            0 => Some(Component::X),
            1 => Some(Component::Y),
            2 => Some(Component::Z),
            3 => Some(Component::W),
            _ => None,
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Component::X => f.write_str("x"),
            Component::Y => f.write_str("y"),
            Component::Z => f.write_str("z"),
            Component::W => f.write_str("w"),
        }
    }
}
