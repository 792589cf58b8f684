//! Dice-lock planning.
//!
//! Faces worth holding, in order of consideration:
//! - every gold face (it pays a token regardless of what else happens)
//! - steal faces when behind on tokens and at least one was rolled,
//!   otherwise whichever of melee/ranged shows more (melee on ties)
//! - from the second round on, helmets if last round's helmets did not cover
//!   the opponent's arrows, and shields if last round's shields did not cover
//!   the opponent's axes

use orlog_core::{Face, FaceCategory, FaceCounts};

use super::AiContext;

/// Categories to hold for the dice currently showing.
pub fn kept_categories(ctx: &AiContext<'_>, faces: &[Option<Face>]) -> Vec<FaceCategory> {
    let counts = FaceCounts::from_faces(faces);
    let mut keep = Vec::new();

    if ctx.is_behind_on_tokens() && counts.steals() > 0 {
        keep.push(FaceCategory::Steal);
    } else if counts.melee() >= counts.ranged() {
        keep.push(FaceCategory::Melee);
    } else {
        keep.push(FaceCategory::Ranged);
    }

    if let Some(incoming) = ctx.last_incoming() {
        if incoming.opponent_helmets < incoming.ranged {
            keep.push(FaceCategory::Helmet);
        }
        if incoming.opponent_shields < incoming.melee {
            keep.push(FaceCategory::Shield);
        }
    }
    keep
}

/// Slots to hold before the next roll.
pub fn plan_locks(ctx: &AiContext<'_>) -> Vec<usize> {
    let faces = ctx.me().dice().current_faces();
    let keep = kept_categories(ctx, &faces);

    let slots: Vec<usize> = faces
        .iter()
        .enumerate()
        .filter_map(|(slot, face)| {
            let face = (*face)?;
            (face.is_gold() || keep.contains(&face.category())).then_some(slot)
        })
        .collect();

    tracing::debug!(
        "LockPlanner: {} keeps {:?} -> slots {:?}",
        ctx.seat,
        keep,
        slots
    );
    slots
}
