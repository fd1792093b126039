//! Seat identification and per-seat storage.
//!
//! Jaipur is strictly a two-player game, so seats are `PlayerId(0)` and
//! `PlayerId(1)` and per-seat data lives in a fixed pair.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// Number of seats at a Jaipur table.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier. `PlayerId(0)` moves first.
///
/// Only seats 0 and 1 can be built, so indexing a [`PlayerMap`] with a
/// `PlayerId` never goes out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

/// A seat number outside the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("seat {0} does not exist, Jaipur has exactly two seats")]
pub struct InvalidSeat(pub u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Jaipur has exactly two seats");
        Self(id)
    }

    /// Checked constructor.
    pub const fn try_new(id: u8) -> Result<Self, InvalidSeat> {
        if (id as usize) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(InvalidSeat(id))
        }
    }

    /// Seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Seat whose move it is at `turn_index`.
    #[must_use]
    pub const fn for_turn(turn_index: u32) -> Self {
        Self((turn_index % PLAYER_COUNT as u32) as u8)
    }

    /// Both seats, in turn order.
    #[must_use]
    pub const fn all() -> [PlayerId; PLAYER_COUNT] {
        [Self::FIRST, Self::SECOND]
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidSeat;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::try_new(id)
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data with O(1) access by [`PlayerId`].
///
/// ```
/// use jaipur_engine::core::{PlayerId, PlayerMap};
///
/// let mut camels: PlayerMap<u32> = PlayerMap::with_value(0);
/// camels[PlayerId::SECOND] += 3;
///
/// assert_eq!(camels[PlayerId::FIRST], 0);
/// assert_eq!(camels[PlayerId::SECOND], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Build both entries from a factory.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all().into_iter().zip(self.data.iter_mut())
    }

    /// Map each entry into a new `PlayerMap`.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|player| f(player, self.get(player)))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
