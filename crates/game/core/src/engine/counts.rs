use crate::face::{Face, FaceCategory};

/// Per-face occurrence counts for one player's roll.
///
/// Favor handlers read and mutate these in place during a resolution; no
/// operation ever drives a count below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceCounts {
    counts: [u32; Face::COUNT],
}

impl FaceCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the rolled faces, ignoring unset slots.
    pub fn from_faces(faces: &[Option<Face>]) -> Self {
        let mut counts = Self::new();
        for face in faces.iter().flatten() {
            counts.add(*face, 1);
        }
        counts
    }

    #[inline]
    pub fn get(&self, face: Face) -> u32 {
        self.counts[face.as_index()]
    }

    pub fn add(&mut self, face: Face, amount: u32) {
        let slot = &mut self.counts[face.as_index()];
        *slot = slot.saturating_add(amount);
    }

    /// Base plus gold count of a category, saturating at `u32::MAX`.
    pub fn total(&self, category: FaceCategory) -> u32 {
        self.get(category.base())
            .saturating_add(self.get(category.gold()))
    }

    /// Number of gold faces across all categories.
    pub fn gold_count(&self) -> u32 {
        Face::ALL
            .iter()
            .filter(|face| face.is_gold())
            .map(|face| self.get(*face))
            .fold(0, u32::saturating_add)
    }

    /// Removes up to `amount` icons of a category, base variant first.
    /// Returns how many were removed.
    pub fn remove_up_to(&mut self, category: FaceCategory, amount: u32) -> u32 {
        let mut removed = 0;
        for face in [category.base(), category.gold()] {
            let slot = &mut self.counts[face.as_index()];
            let take = (*slot).min(amount - removed);
            *slot -= take;
            removed += take;
        }
        removed
    }

    pub fn melee(&self) -> u32 {
        self.total(FaceCategory::Melee)
    }

    pub fn ranged(&self) -> u32 {
        self.total(FaceCategory::Ranged)
    }

    pub fn shields(&self) -> u32 {
        self.total(FaceCategory::Shield)
    }

    pub fn helmets(&self) -> u32 {
        self.total(FaceCategory::Helmet)
    }

    pub fn steals(&self) -> u32 {
        self.total(FaceCategory::Steal)
    }

    /// Category with the highest total; ties go to the earlier entry of
    /// [`FaceCategory::ALL`].
    pub fn majority(&self) -> FaceCategory {
        let mut best = FaceCategory::ALL[0];
        for category in FaceCategory::ALL {
            if self.total(category) > self.total(best) {
                best = category;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ignore_unset_slots() {
        let counts = FaceCounts::from_faces(&[
            Some(Face::Melee),
            None,
            Some(Face::MeleeGold),
            Some(Face::Shield),
        ]);
        assert_eq!(counts.melee(), 2);
        assert_eq!(counts.shields(), 1);
        assert_eq!(counts.gold_count(), 1);
    }

    #[test]
    fn removal_takes_base_before_gold() {
        let mut counts =
            FaceCounts::from_faces(&[Some(Face::Helmet), Some(Face::HelmetGold), Some(Face::HelmetGold)]);
        assert_eq!(counts.remove_up_to(FaceCategory::Helmet, 2), 2);
        assert_eq!(counts.get(Face::Helmet), 0);
        assert_eq!(counts.get(Face::HelmetGold), 1);

        assert_eq!(counts.remove_up_to(FaceCategory::Helmet, 5), 1);
        assert_eq!(counts.helmets(), 0);
    }

    #[test]
    fn majority_prefers_precedence_on_ties() {
        let counts = FaceCounts::from_faces(&[
            Some(Face::Helmet),
            Some(Face::Shield),
            Some(Face::Ranged),
        ]);
        assert_eq!(counts.majority(), FaceCategory::Ranged);

        let shields = FaceCounts::from_faces(&[Some(Face::Shield), Some(Face::ShieldGold)]);
        assert_eq!(shields.majority(), FaceCategory::Shield);

        assert_eq!(FaceCounts::new().majority(), FaceCategory::Melee);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let mut counts = FaceCounts::from_faces(&[Some(Face::Melee), Some(Face::MeleeGold)]);
        counts.add(Face::Melee, u32::MAX);
        assert_eq!(counts.get(Face::Melee), u32::MAX);
        assert_eq!(counts.melee(), u32::MAX);

        counts.add(Face::ShieldGold, u32::MAX);
        assert_eq!(counts.gold_count(), u32::MAX);
    }
}
