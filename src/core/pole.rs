//! Disks, pole indices, and pole stacks.
//!
//! ## Disk
//!
//! Disks are numbered `1..=N`. A disk may only rest on a disk with a higher
//! number, so a full pole holds `N` at the bottom and `1` on top.
//!
//! ## PoleId / Poles
//!
//! The three poles are addressed by fixed internal indices (`PoleId`).
//! `Poles` is a fixed array of three stacks indexable by `PoleId`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Number of poles in the puzzle.
pub const POLE_COUNT: usize = 3;

/// A single disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Disk(pub u8);

impl Disk {
    /// Create a disk with the given number.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Get the raw disk number.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Can this disk be placed on top of `below`?
    #[must_use]
    pub const fn fits_on(self, below: Disk) -> bool {
        self.0 < below.0
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disk({})", self.0)
    }
}

/// Internal pole index.
///
/// Index 0 always holds the disks at the start of a run and index 2 must
/// hold them all at the end. Caller-facing names live in `PoleLabels`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoleId(u8);

impl PoleId {
    /// Where the disks start.
    pub const SOURCE: PoleId = PoleId(0);
    /// The spare pole.
    pub const AUXILIARY: PoleId = PoleId(1);
    /// Where the disks must end up.
    pub const DESTINATION: PoleId = PoleId(2);

    /// Create a pole ID. Panics if `id` is not 0, 1 or 2.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < POLE_COUNT, "Pole index must be 0, 1 or 2");
        Self(id)
    }

    /// Get the raw index (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the three pole IDs in index order.
    pub fn all() -> impl Iterator<Item = PoleId> {
        (0..POLE_COUNT as u8).map(PoleId)
    }
}

impl std::fmt::Display for PoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pole({})", self.0)
    }
}

/// A stack of disks. The last element is the top.
///
/// Backed by a `SmallVec` so puzzles of up to 16 disks never allocate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pole {
    disks: SmallVec<[Disk; 16]>,
}

impl Pole {
    /// Create an empty pole.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of disks on the pole.
    #[must_use]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Check if the pole holds no disks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// The top disk, if any.
    #[must_use]
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Place a disk on top.
    ///
    /// Panics if the disk does not fit on the current top disk.
    pub fn push(&mut self, disk: Disk) {
        if let Some(top) = self.top() {
            if !disk.fits_on(top) {
                panic!("{} cannot be placed on {}", disk, top);
            }
        }
        self.disks.push(disk);
    }

    /// Remove and return the top disk.
    pub fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    /// Disks from bottom to top.
    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Check that every disk fits on the one below it.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|w| w[1].fits_on(w[0]))
    }
}

/// The three poles, indexed by `PoleId`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Poles {
    poles: [Pole; POLE_COUNT],
}

impl Poles {
    /// Create three empty poles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack disks `count, count - 1, ..., 1` onto `pole`.
    pub fn stack_disks(&mut self, pole: PoleId, count: u8) {
        for number in (1..=count).rev() {
            self[pole].push(Disk::new(number));
        }
    }

    /// Move the top disk of `from` onto `to` and return it.
    ///
    /// Panics if `from` is empty or the move would break the ordering.
    pub fn transfer(&mut self, from: PoleId, to: PoleId) -> Disk {
        let disk = match self[from].pop() {
            Some(disk) => disk,
            None => panic!("Cannot move a disk from empty {}", from),
        };
        self[to].push(disk);
        disk
    }

    /// Total number of disks across all poles.
    #[must_use]
    pub fn total_disks(&self) -> usize {
        self.poles.iter().map(Pole::len).sum()
    }

    /// Iterate over (PoleId, &Pole) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PoleId, &Pole)> {
        PoleId::all().zip(self.poles.iter())
    }
}

impl Index<PoleId> for Poles {
    type Output = Pole;

    fn index(&self, pole: PoleId) -> &Self::Output {
        &self.poles[pole.index()]
    }
}

impl IndexMut<PoleId> for Poles {
    fn index_mut(&mut self, pole: PoleId) -> &mut Self::Output {
        &mut self.poles[pole.index()]
    }
}
