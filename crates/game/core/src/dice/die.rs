use crate::face::Face;
use crate::rng::RngOracle;

/// A single die: the last face it showed and whether it is held back from rolls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Die {
    face: Option<Face>,
    locked: bool,
}

impl Die {
    /// A die that has not been rolled yet.
    pub const fn new() -> Self {
        Self {
            face: None,
            locked: false,
        }
    }

    /// A die already showing `face`. Used by fixtures and loaders.
    pub const fn showing(face: Face) -> Self {
        Self {
            face: Some(face),
            locked: false,
        }
    }

    /// Rolls the die unless it is locked, returning the face it now shows.
    ///
    /// A locked die that was never rolled stays unset.
    pub fn roll<R>(&mut self, rng: &R, seed: u64) -> Option<Face>
    where
        R: RngOracle + ?Sized,
    {
        if !self.locked {
            self.face = Some(Face::ALL[rng.pick_index(seed, Face::COUNT)]);
        }
        self.face
    }

    #[inline]
    pub fn face(&self) -> Option<Face> {
        self.face
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}
