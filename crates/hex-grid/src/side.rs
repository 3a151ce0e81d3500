//! The six sides of a hexagon.

use std::fmt;

use crate::error::GridError;

/// One of the six sides of a hexagon, numbered `1..=6` in cyclic order.
///
/// Side 3 faces "down" (row + 1) and side 6 faces "up" (row - 1). Sides 1 and 2
/// face right, sides 4 and 5 face left. The side opposite `p` is `p + 3`
/// wrapped into `1..=6`.
///
/// # Example
///
/// ```
/// use hex_grid::Side;
///
/// assert_eq!(Side::Three.opposite(), Side::Six);
/// assert_eq!(Side::Five.rotate(2), Side::One);
/// assert_eq!(Side::One.rotate(-1), Side::Six);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(u8)]
pub enum Side {
    /// Upper right.
    One = 1,
    /// Lower right.
    Two = 2,
    /// Bottom.
    Three = 3,
    /// Lower left.
    Four = 4,
    /// Upper left.
    Five = 5,
    /// Top.
    Six = 6,
}

impl Side {
    /// All sides in traversal order `1..=6`.
    pub const ALL: [Self; 6] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
    ];

    /// Converts a 1-based position into a side.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSide`] if `position` is outside `1..=6`.
    ///
    /// # Example
    ///
    /// ```
    /// use hex_grid::Side;
    ///
    /// assert_eq!(Side::from_position(4).unwrap(), Side::Four);
    /// assert!(Side::from_position(0).is_err());
    /// assert!(Side::from_position(7).is_err());
    /// ```
    pub const fn from_position(position: i64) -> Result<Self, GridError> {
        match position {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            other => Err(GridError::InvalidSide(other)),
        }
    }

    /// Returns the 1-based position of this side.
    #[must_use]
    pub const fn position(self) -> u8 {
        self as u8
    }

    /// Returns the 0-based index of this side, suitable for `[T; 6]` storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the side at a 0-based index, wrapping modulo 6.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 6]
    }

    /// Rotates this side by `amount` steps, wrapping into `1..=6`.
    ///
    /// Any integer amount is accepted; multiples of 6 are a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use hex_grid::Side;
    ///
    /// assert_eq!(Side::Two.rotate(0), Side::Two);
    /// assert_eq!(Side::Two.rotate(6), Side::Two);
    /// assert_eq!(Side::Two.rotate(-13), Side::One);
    /// ```
    #[must_use]
    pub const fn rotate(self, amount: i32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let shifted = (self.index() as i32 + amount.rem_euclid(6)).rem_euclid(6) as usize;
        Self::ALL[shifted]
    }

    /// Returns the side facing directly away from this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.rotate(3)
    }

    /// Returns the rotation that carries `self` onto `target`, in `0..6`.
    ///
    /// # Example
    ///
    /// ```
    /// use hex_grid::Side;
    ///
    /// let diff = Side::Five.rotation_to(Side::Two);
    /// assert_eq!(Side::Five.rotate(diff), Side::Two);
    /// ```
    #[must_use]
    pub const fn rotation_to(self, target: Self) -> i32 {
        #[allow(clippy::cast_possible_wrap)]
        (target.position() as i32 - self.position() as i32).rem_euclid(6)
    }
}

impl TryFrom<u8> for Side {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_position(i64::from(value))
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> Self {
        side.position()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position())
    }
}
