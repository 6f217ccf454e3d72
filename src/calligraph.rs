mod frame;
mod glyphs;

pub use frame::{Frame, Glyph, Offset, ReelFrame, SlotKey};
pub use glyphs::DIGIT_DISTANCE;
use log::debug;

use crate::{
    config::{CalligraphConfig, ConfigError, Variant},
    reconcile::{reconcile_digits, reconcile_text},
    rotation::{ReelExit, ReelSet},
    types::{
        content::Content, direction::Direction, identity_key::IdentityKey,
        identity_map::IdentityMap,
    },
};

/// State of one animated text or number.
///
/// A `Calligraph` owns everything that has to survive between updates: the
/// committed text, the identity of each of its characters, the counter for
/// minting new identities and, for the slots variant, the reel of every
/// digit column. Each `update` diffs the new text against the last
/// committed one and returns the `Frame` to render.
///
/// ```
/// use calligraph::{Calligraph, CalligraphConfig, IdentityKey};
///
/// let mut calligraph = Calligraph::new("cart", CalligraphConfig::default()).unwrap();
/// let frame = calligraph.update("card");
///
/// assert_eq!(frame.retired, vec![IdentityKey::new(3)]);
/// assert_eq!(frame.glyphs[3].key, IdentityKey::new(4));
/// ```
#[derive(Debug, Clone)]
pub struct Calligraph {
    config: CalligraphConfig,
    text: String,
    keys: IdentityMap,
    next_fresh: IdentityKey,
    change_ratio: f64,
    direction: Direction,
    reels: ReelSet,
    retired: Vec<IdentityKey>,
    retired_reels: Vec<ReelExit>,
}

impl Calligraph {
    /// Mount a new instance showing `content`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `config` doesn't pass validation.
    pub fn new(content: impl Into<Content>, config: CalligraphConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let text = content.into().into_text();
        let characters: Vec<char> = text.chars().collect();
        let (keys, next_fresh) = IdentityMap::sequential(characters.len());

        let mut reels = ReelSet::new();
        if config.variant == Variant::Slots {
            reels.sync(&characters, Direction::Unchanged, config.animate_initial);
        }

        debug!(
            "Mounted {} calligraph with {} characters",
            config.variant,
            characters.len()
        );

        Ok(Self {
            config,
            text,
            keys,
            next_fresh,
            change_ratio: 0.0,
            direction: Direction::Unchanged,
            reels,
            retired: Vec::new(),
            retired_reels: Vec::new(),
        })
    }

    /// Transition to `content` and return the frame to render.
    ///
    /// Updating to the text that's already shown keeps every identity and
    /// reel, and the returned frame retires nothing.
    pub fn update(&mut self, content: impl Into<Content>) -> Frame {
        let text = content.into().into_text();
        if text == self.text {
            self.retired.clear();
            self.retired_reels.clear();
            return self.frame();
        }

        let previous_keys = match self.config.variant {
            Variant::Text => {
                let result = reconcile_text(&self.text, &self.keys, &text, self.next_fresh);
                self.change_ratio = result.change_ratio;
                self.next_fresh = result.next_fresh;
                std::mem::replace(&mut self.keys, result.keys)
            }
            Variant::Number | Variant::Slots => {
                let result = reconcile_digits(&self.text, &self.keys, &text, self.next_fresh);
                self.direction = result.direction;
                self.next_fresh = result.next_fresh;
                std::mem::replace(&mut self.keys, result.keys)
            }
        };

        self.retired = self.keys.retired_since(&previous_keys);
        self.retired_reels = if self.config.variant == Variant::Slots {
            let characters: Vec<char> = text.chars().collect();
            self.reels.sync(&characters, self.direction, true)
        } else {
            Vec::new()
        };

        debug!(
            "Updated {:?} -> {text:?}: {} retired, direction {}, change ratio {}",
            self.text,
            self.retired.len(),
            self.direction,
            self.change_ratio
        );

        self.text = text;

        self.frame()
    }

    /// Project the current state into a renderable frame.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let characters: Vec<char> = self.text.chars().collect();

        let glyphs = match self.config.variant {
            Variant::Text => glyphs::text_glyphs(
                &characters,
                &self.keys,
                self.config.drift,
                self.change_ratio,
            ),
            Variant::Number => glyphs::number_glyphs(
                &characters,
                &self.keys,
                self.direction,
                self.config.stagger,
            ),
            Variant::Slots => glyphs::slot_glyphs(
                &characters,
                &self.keys,
                &self.reels,
                self.direction,
                self.config.stagger,
            ),
        };

        Frame {
            text: self.text.clone(),
            variant: self.config.variant,
            glyphs,
            retired: self.retired.clone(),
            retired_reels: self.retired_reels.clone(),
            change_ratio: self.change_ratio,
            direction: self.direction,
            transition: self.config.transition(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn keys(&self) -> &IdentityMap { &self.keys }

    #[must_use]
    pub fn next_fresh(&self) -> IdentityKey { self.next_fresh }

    #[must_use]
    pub fn change_ratio(&self) -> f64 { self.change_ratio }

    #[must_use]
    pub fn direction(&self) -> Direction { self.direction }

    #[must_use]
    pub fn config(&self) -> &CalligraphConfig { &self.config }

    #[must_use]
    pub fn reels(&self) -> &ReelSet { &self.reels }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn keys(values: &[u64]) -> IdentityMap {
        values.iter().copied().map(IdentityKey::new).collect()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = Calligraph::new("x", CalligraphConfig::default().with_stagger(f64::NAN));

        assert!(matches!(result, Err(ConfigError::InvalidStagger(_))));
    }

    #[test]
    fn test_mount() {
        let calligraph = Calligraph::new("hey", CalligraphConfig::default()).unwrap();
        let frame = calligraph.frame();

        assert_eq!(calligraph.keys(), &keys(&[0, 1, 2]));
        assert_eq!(calligraph.next_fresh(), IdentityKey::new(3));
        assert_eq!(frame.change_ratio, 0.0);
        assert!(frame.retired.is_empty());
        assert!(frame.glyphs.iter().all(|glyph| glyph.enter == Offset::ZERO));
    }

    #[test]
    fn test_same_text_is_a_no_op() {
        let mut calligraph = Calligraph::new("cart", CalligraphConfig::default()).unwrap();
        let first = calligraph.update("card");
        let second = calligraph.update("card");

        assert_eq!(first.retired, vec![IdentityKey::new(3)]);
        assert!(second.retired.is_empty());
        assert_eq!(first.glyphs, second.glyphs);
        assert_eq!(calligraph.next_fresh(), IdentityKey::new(5));
    }

    #[test]
    fn test_same_text_does_not_replay_reel_exits() {
        let config = CalligraphConfig::default().with_variant(Variant::Slots);
        let mut calligraph = Calligraph::new("10", config).unwrap();

        assert_eq!(calligraph.update("9").retired_reels.len(), 1);

        let frame = calligraph.update("9");
        assert!(frame.retired_reels.is_empty());
        assert!(frame.retired.is_empty());
        assert_eq!(frame.glyphs[0].reel.map(|reel| reel.target), Some(-1.0));
    }

    #[test]
    fn test_number_content() {
        let config = CalligraphConfig::default().with_variant(Variant::Number);
        let mut calligraph = Calligraph::new(42, config).unwrap();
        assert_eq!(calligraph.text(), "42");

        let frame = calligraph.update(1999);

        assert_eq!(frame.text, "1999");
        assert_eq!(frame.direction, Direction::Increasing);
        assert_eq!(calligraph.keys(), &keys(&[2, 3, 4, 5]));

        calligraph.update(19.5);
        assert_eq!(calligraph.text(), "19.5");
        assert_eq!(calligraph.direction(), Direction::Decreasing);
        assert_eq!(calligraph.keys(), &keys(&[2, 3, 6, 7]));
    }

    #[test]
    fn test_text_variant_keeps_direction() {
        let mut calligraph = Calligraph::new("1", CalligraphConfig::default()).unwrap();
        calligraph.update("2");

        assert_eq!(calligraph.direction(), Direction::Unchanged);
        assert_eq!(calligraph.change_ratio(), 1.0);
    }

    #[test]
    fn test_number_variant() {
        let config = CalligraphConfig::default().with_variant(Variant::Number);
        let mut calligraph = Calligraph::new("$9.00", config).unwrap();

        let frame = calligraph.update("$10.00");

        assert_eq!(frame.direction, Direction::Increasing);
        assert_eq!(calligraph.keys(), &keys(&[0, 5, 6, 2, 3, 4]));
        assert_eq!(frame.retired, vec![IdentityKey::new(1)]);
        assert_eq!(frame.glyphs[1].slot, SlotKey::Column(4));
        assert_eq!(frame.glyphs[1].enter, Offset::vertical(DIGIT_DISTANCE));
        assert!(frame.retired_reels.is_empty());
        assert!(calligraph.reels().is_empty());
    }

    #[test]
    fn test_slots_initial_animation() {
        let still = Calligraph::new("42", CalligraphConfig::default().with_variant(Variant::Slots))
            .unwrap();
        assert!(
            still
                .frame()
                .glyphs
                .iter()
                .all(|glyph| glyph.reel.is_some_and(|reel| reel.from.is_none()))
        );

        let animated = Calligraph::new(
            "42",
            CalligraphConfig::default()
                .with_variant(Variant::Slots)
                .with_animate_initial(true),
        )
        .unwrap();
        let froms: Vec<Option<f64>> = animated
            .frame()
            .glyphs
            .iter()
            .map(|glyph| glyph.reel.and_then(|reel| reel.from))
            .collect();
        assert_eq!(froms, vec![Some(0.0), Some(-2.0)]);
    }

    #[test]
    fn test_slots_spin_forward_through_rollover() {
        let config = CalligraphConfig::default().with_variant(Variant::Slots);
        let mut calligraph = Calligraph::new("7", config).unwrap();

        let targets: Vec<f64> = ["8", "9", "10"]
            .into_iter()
            .map(|text| {
                let frame = calligraph.update(text);
                frame
                    .glyphs
                    .last()
                    .and_then(|glyph| glyph.reel)
                    .map_or(f64::NAN, |reel| reel.target)
            })
            .collect();

        assert_eq!(targets, vec![8.0, 9.0, 10.0]);

        let frame = calligraph.frame();
        assert_eq!(
            frame.glyphs[0].reel,
            Some(ReelFrame {
                column: 1,
                digit: 1,
                from: Some(-3.0),
                target: 1.0
            })
        );
    }

    #[test]
    fn test_slots_report_dropped_reels() {
        let config = CalligraphConfig::default().with_variant(Variant::Slots);
        let mut calligraph = Calligraph::new("10", config).unwrap();

        let frame = calligraph.update("9");

        assert_eq!(
            frame.retired_reels,
            vec![ReelExit {
                column: 1,
                target: -3.0
            }]
        );
        assert_eq!(calligraph.reels().len(), 1);
    }
}
