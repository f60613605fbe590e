use crate::collection::CardCollection;
use crate::error::DealError;

/// Deals `hand_size` cards to each hand, alternating and starting with
/// `first`, always taking the front card of the deck.
///
/// # Errors
///
/// Returns [`DealError::InsufficientCards`] if the deck holds fewer than
/// `2 * hand_size` cards. Nothing is moved in that case.
pub fn deal(
    deck: &mut CardCollection,
    first: &mut CardCollection,
    second: &mut CardCollection,
    hand_size: usize,
) -> Result<(), DealError> {
    let needed = hand_size.saturating_mul(2);
    let available = deck.len();
    if available < needed {
        return Err(DealError::InsufficientCards { needed, available });
    }

    for _ in 0..hand_size {
        for hand in [&mut *first, &mut *second] {
            let card = deck
                .take_front()
                .ok_or(DealError::InsufficientCards { needed, available })?;
            hand.push(card);
        }
    }

    log::debug!(
        "dealt {hand_size} cards to each hand, {} left in the deck",
        deck.len()
    );
    Ok(())
}
