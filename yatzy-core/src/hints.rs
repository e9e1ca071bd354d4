//! Input hints for the upper section.
//!
//! Par is three dice of every face, which lands exactly on the 63 point bonus
//! threshold. A face scored above par leaves slack that lowers the need on
//! other open faces, cheapest faces first.

use crate::category::Category;
use crate::derive::ScoreCard;

const PAR_DICE: u16 = 3;

/// Points still needed on an open upper category to stay on par for the bonus.
///
/// Returns `None` for lower-section categories and for cells already filled.
#[must_use]
pub fn upper_par_hint(card: &ScoreCard, category: Category) -> Option<u16> {
    let face = u16::from(category.face()?);
    if card.get(category).is_some() {
        return None;
    }

    let mut needed = [PAR_DICE; 6];
    for (idx, upper) in Category::UPPER.into_iter().enumerate() {
        let Some(score) = card.get(upper) else {
            continue;
        };
        let upper_face = u16::from(upper.face().unwrap_or(1));
        let mut surplus = (score / upper_face).saturating_sub(PAR_DICE);
        for (other, slot) in needed.iter_mut().enumerate() {
            if surplus == 0 {
                break;
            }
            if other == idx {
                continue;
            }
            let take = (*slot).min(surplus);
            *slot -= take;
            surplus -= take;
        }
    }

    Some(needed[category.index()] * face)
}
