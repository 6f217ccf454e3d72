use crate::{
    calligraph::frame::{Glyph, Offset, ReelFrame, SlotKey},
    config::Drift,
    rotation::ReelSet,
    types::{direction::Direction, identity_map::IdentityMap},
    utils::digit_prefix::digit_prefix_len,
};

/// How far number digits travel vertically when rolling in or out.
pub const DIGIT_DISTANCE: f64 = 8.0;

/// Text glyphs drift apart from the middle of the string, proportionally to
/// how much of the text changed.
#[allow(clippy::cast_precision_loss)]
pub fn text_glyphs(
    characters: &[char],
    keys: &IdentityMap,
    drift: Drift,
    change_ratio: f64,
) -> Vec<Glyph> {
    let last = characters.len().saturating_sub(1);

    characters
        .iter()
        .zip(keys.iter())
        .enumerate()
        .map(|(index, (character, key))| {
            let progress = if last == 0 {
                0.0
            } else {
                index as f64 / last as f64
            };
            let offset = Offset {
                x: (progress - 0.5) * drift.x * change_ratio,
                y: (progress - 0.5) * drift.y * change_ratio,
            };

            Glyph {
                key,
                slot: SlotKey::Character(key),
                character: *character,
                delay: 0.0,
                enter: offset,
                exit: offset,
                reel: None,
                completes: index == last,
            }
        })
        .collect()
}

/// Number glyphs roll in from below and out above when the value grows,
/// the other way around when it shrinks.
#[allow(clippy::cast_precision_loss)]
pub fn number_glyphs(
    characters: &[char],
    keys: &IdentityMap,
    direction: Direction,
    stagger: f64,
) -> Vec<Glyph> {
    let prefix_len = digit_prefix_len(characters);
    let last = characters.len().saturating_sub(1);
    let distance = DIGIT_DISTANCE * direction.spin_sign();

    characters
        .iter()
        .zip(keys.iter())
        .enumerate()
        .map(|(index, (character, key))| {
            let is_prefix = index < prefix_len;
            let (enter, exit) = if !is_prefix && character.is_ascii_digit() {
                (Offset::vertical(distance), Offset::vertical(-distance))
            } else {
                (Offset::ZERO, Offset::ZERO)
            };

            Glyph {
                key,
                slot: slot_key(index, prefix_len, characters.len()),
                character: *character,
                delay: if is_prefix { 0.0 } else { index as f64 * stagger },
                enter,
                exit,
                reel: None,
                completes: index == last,
            }
        })
        .collect()
}

/// Slot glyphs: digits spin on their reels starting with the
/// least-significant one, everything else stays put.
#[allow(clippy::cast_precision_loss)]
pub fn slot_glyphs(
    characters: &[char],
    keys: &IdentityMap,
    reels: &ReelSet,
    direction: Direction,
    stagger: f64,
) -> Vec<Glyph> {
    let prefix_len = digit_prefix_len(characters);
    let digit_count = characters.iter().filter(|c| c.is_ascii_digit()).count();
    let mut digit_index = 0;

    characters
        .iter()
        .zip(keys.iter())
        .enumerate()
        .map(|(index, (character, key))| {
            let slot = slot_key(index, prefix_len, characters.len());
            let column = characters.len() - 1 - index;

            let reel = character
                .is_ascii_digit()
                .then(|| reels.get(column))
                .flatten()
                .map(|reel| ReelFrame {
                    column,
                    digit: reel.current_digit(),
                    from: reel.entrance_offset(direction),
                    target: reel.cumulative_offset(),
                });

            let (delay, completes) = if reel.is_some() {
                let delay = (digit_count - 1 - digit_index) as f64 * stagger;
                let completes = digit_index == digit_count - 1;
                digit_index += 1;
                (delay, completes)
            } else {
                (0.0, false)
            };

            Glyph {
                key,
                slot,
                character: *character,
                delay,
                enter: Offset::ZERO,
                exit: Offset::ZERO,
                reel,
                completes,
            }
        })
        .collect()
}

fn slot_key(index: usize, prefix_len: usize, length: usize) -> SlotKey {
    if index < prefix_len {
        SlotKey::Prefix(index)
    } else {
        SlotKey::Column(length - 1 - index)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::identity_key::IdentityKey;

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    #[test]
    fn test_text_drift_is_symmetric() {
        let characters = chars("abc");
        let (keys, _) = IdentityMap::sequential(3);
        let glyphs = text_glyphs(&characters, &keys, Drift { x: 20.0, y: 10.0 }, 0.5);

        let offsets: Vec<Offset> = glyphs.iter().map(|glyph| glyph.enter).collect();
        assert_eq!(
            offsets,
            vec![
                Offset { x: -5.0, y: -2.5 },
                Offset { x: 0.0, y: 0.0 },
                Offset { x: 5.0, y: 2.5 },
            ]
        );
        assert_eq!(glyphs[1].slot, SlotKey::Character(IdentityKey::new(1)));
        assert!(glyphs[2].completes);
        assert!(!glyphs[0].completes);
    }

    #[test]
    fn test_single_character_drifts_left() {
        let (keys, _) = IdentityMap::sequential(1);
        let glyphs = text_glyphs(&chars("a"), &keys, Drift::default(), 1.0);

        assert_eq!(glyphs[0].enter, Offset { x: -7.5, y: 0.0 });
        assert!(glyphs[0].completes);
    }

    #[test]
    fn test_number_roll() {
        let characters = chars("$1.5");
        let (keys, _) = IdentityMap::sequential(4);
        let glyphs = number_glyphs(&characters, &keys, Direction::Decreasing, 0.1);

        let slots: Vec<SlotKey> = glyphs.iter().map(|glyph| glyph.slot).collect();
        assert_eq!(
            slots,
            vec![
                SlotKey::Prefix(0),
                SlotKey::Column(2),
                SlotKey::Column(1),
                SlotKey::Column(0)
            ]
        );

        assert_eq!(glyphs[0].enter, Offset::ZERO);
        assert_eq!(glyphs[1].enter, Offset::vertical(-8.0));
        assert_eq!(glyphs[1].exit, Offset::vertical(8.0));
        assert_eq!(glyphs[2].enter, Offset::ZERO);
        assert_eq!(glyphs[3].delay, 0.30000000000000004);
        assert!(glyphs[3].completes);
    }

    #[test]
    fn test_unchanged_numbers_roll_upwards() {
        let (keys, _) = IdentityMap::sequential(1);
        let glyphs = number_glyphs(&chars("7"), &keys, Direction::Unchanged, 0.0);

        assert_eq!(glyphs[0].enter, Offset::vertical(8.0));
        assert_eq!(glyphs[0].exit, Offset::vertical(-8.0));
    }

    #[test]
    fn test_slots_stagger_from_the_right() {
        let characters = chars("$1,05");
        let (keys, _) = IdentityMap::sequential(5);
        let mut reels = ReelSet::new();
        reels.sync(&characters, Direction::Unchanged, false);

        let glyphs = slot_glyphs(&characters, &keys, &reels, Direction::Unchanged, 0.5);

        let delays: Vec<f64> = glyphs.iter().map(|glyph| glyph.delay).collect();
        assert_eq!(delays, vec![0.0, 1.0, 0.0, 0.5, 0.0]);

        assert_eq!(
            glyphs[4].reel,
            Some(ReelFrame {
                column: 0,
                digit: 5,
                from: None,
                target: 5.0
            })
        );
        assert!(glyphs[2].reel.is_none());
        assert!(glyphs[4].completes);
        assert_eq!(glyphs.iter().filter(|glyph| glyph.completes).count(), 1);
    }
}
