//! Hover animation manager using iced_anim
//!
//! Only one element can be under the cursor, so only the active item and the
//! one fading out are tracked.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const HOVER_DURATION: Duration = Duration::from_millis(200);

/// Scale of an element at rest
pub const REST_SCALE: f32 = 1.0;
/// Scale of a hovered element
pub const HOVER_SCALE: f32 = 0.9;

/// Exclusive hover state with animated progress per key
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Hash + Clone> {
    /// Currently hovered key
    active_key: Option<K>,
    active_anim: Animated<f32>,
    /// Previously hovered key, animating back to rest
    fading_key: Option<K>,
    fading_anim: Animated<f32>,
}

impl<K: Eq + Hash + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

impl<K: Eq + Hash + Clone> HoverAnimations<K> {
    pub fn new() -> Self {
        Self {
            active_key: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Set the hovered key, `None` to unhover.
    ///
    /// Repeating the current state is a no-op.
    pub fn set_hovered_exclusive(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        // The fade in flight before this change; re-entering its key resumes it
        let fading = self
            .fading_key
            .take()
            .map(|k| (k, *self.fading_anim.value()));
        let resumed = match (&key, &fading) {
            (Some(new_key), Some((fading_key, value))) if new_key == fading_key => Some(*value),
            _ => None,
        };

        if let Some(old) = self.active_key.take() {
            // Whatever was active starts fading from where it is now
            let current = *self.active_anim.value();
            self.fading_key = Some(old);
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        } else if resumed.is_none() {
            self.fading_key = fading.map(|(k, _)| k);
        }

        if let Some(new_key) = key {
            self.active_key = Some(new_key);
            self.active_anim = Animated::transition(resumed.unwrap_or(0.0), hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Current progress for a key (0.0 to 1.0)
    pub fn get_progress(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    /// Progress a key is heading towards
    pub fn target_progress(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.target()
        } else {
            0.0
        }
    }

    pub fn interpolate_f32(&self, key: &K, from: f32, to: f32) -> f32 {
        let progress = self.get_progress(key);
        from + (to - from) * progress
    }

    /// Current scale of a key
    pub fn scale(&self, key: &K) -> f32 {
        self.interpolate_f32(key, REST_SCALE, HOVER_SCALE)
    }

    /// Scale a key is heading towards
    pub fn target_scale(&self, key: &K) -> f32 {
        if self.target_progress(key) > 0.5 {
            HOVER_SCALE
        } else {
            REST_SCALE
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Forget a fade-out that has finished
    pub fn cleanup_completed(&mut self) {
        if self.fading_key.is_some()
            && *self.fading_anim.value() < 0.01
            && self.fading_anim.value() == self.fading_anim.target()
        {
            self.fading_key = None;
        }
    }

    #[cfg(test)]
    pub fn is_active(&self, key: &K) -> bool {
        self.active_key.as_ref() == Some(key)
    }

    /// Advance both animations; call on every frame while animating
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Card {
        Left,
        Right,
    }

    #[test]
    fn test_scale_target_toggles() {
        let mut anims = HoverAnimations::new();
        assert_eq!(anims.target_scale(&Card::Left), REST_SCALE);

        anims.set_hovered_exclusive(Some(Card::Left));
        assert_eq!(anims.target_scale(&Card::Left), HOVER_SCALE);

        anims.set_hovered_exclusive(None);
        assert_eq!(anims.target_scale(&Card::Left), REST_SCALE);
    }

    #[test]
    fn test_repeated_hover_is_idempotent() {
        let mut anims = HoverAnimations::new();
        anims.set_hovered_exclusive(Some(Card::Left));
        anims.set_hovered_exclusive(Some(Card::Left));
        anims.set_hovered_exclusive(Some(Card::Left));
        assert!(anims.is_active(&Card::Left));
        assert_eq!(anims.target_scale(&Card::Left), HOVER_SCALE);

        anims.set_hovered_exclusive(None);
        anims.set_hovered_exclusive(None);
        assert!(!anims.is_active(&Card::Left));
        assert_eq!(anims.target_scale(&Card::Left), REST_SCALE);
    }

    #[test]
    fn test_exclusive_switch() {
        let mut anims = HoverAnimations::new();
        anims.set_hovered_exclusive(Some(Card::Left));
        anims.set_hovered_exclusive(Some(Card::Right));
        assert!(anims.is_active(&Card::Right));
        assert!(!anims.is_active(&Card::Left));
        assert_eq!(anims.target_scale(&Card::Left), REST_SCALE);
        assert_eq!(anims.target_scale(&Card::Right), HOVER_SCALE);
    }

    #[test]
    fn test_scale_stays_in_range() {
        let mut anims = HoverAnimations::new();
        anims.set_hovered_exclusive(Some(Card::Left));
        anims.tick(Instant::now() + Duration::from_millis(50));
        let scale = anims.scale(&Card::Left);
        assert!((HOVER_SCALE..=REST_SCALE).contains(&scale));
        assert_eq!(anims.scale(&Card::Right), REST_SCALE);
    }

    #[test]
    fn test_reentry_after_switch_resumes_progress() {
        let mut anims = HoverAnimations::new();
        anims.set_hovered_exclusive(Some(Card::Left));
        anims.tick(Instant::now() + Duration::from_millis(150));
        let before = anims.get_progress(&Card::Left);

        anims.set_hovered_exclusive(Some(Card::Right));
        anims.set_hovered_exclusive(Some(Card::Left));
        assert_eq!(anims.get_progress(&Card::Left), before);
        assert_eq!(anims.target_scale(&Card::Left), HOVER_SCALE);
        // Right was only just hovered, so it fades from where it started
        assert_eq!(anims.get_progress(&Card::Right), 0.0);
    }

    #[test]
    fn test_hover_elsewhere_keeps_running_fade() {
        let mut anims = HoverAnimations::new();
        anims.set_hovered_exclusive(Some(Card::Left));
        anims.tick(Instant::now() + Duration::from_millis(150));
        anims.set_hovered_exclusive(None);
        let fading = anims.get_progress(&Card::Left);

        anims.set_hovered_exclusive(Some(Card::Right));
        assert_eq!(anims.get_progress(&Card::Left), fading);
    }
}
