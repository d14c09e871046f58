//! Timed power-up effects applied to the player
//!
//! Expiry is anchored to wall-clock milliseconds supplied by the host, unlike
//! everything else in the simulation which counts ticks.

use serde::{Deserialize, Serialize};

use super::powerup::PowerUpKind;
use crate::consts::{POWER_UP_DURATION_MS, SHIELD_HITS};

/// One timed effect slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSlot {
    pub active: bool,
    /// Wall-clock deadline (ms); the effect lapses once `now > end_time`
    pub end_time: u64,
}

impl EffectSlot {
    fn activate(&mut self, now: u64) {
        self.active = true;
        self.end_time = now + POWER_UP_DURATION_MS;
    }

    fn remaining_ms(&self, now: u64) -> u64 {
        self.end_time.saturating_sub(now)
    }
}

/// Snapshot of one active effect for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    pub remaining_ms: u64,
    /// Only set for the shield
    pub hits_left: Option<u8>,
}

/// Active power-up effects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub rapid_fire: EffectSlot,
    pub shield: EffectSlot,
    pub shield_hits: u8,
    /// Tracked for the HUD; bullets are always lethal so nothing reads it yet
    pub double_damage: EffectSlot,
    pub speed_boost: EffectSlot,
}

impl ActiveEffects {
    pub fn slot(&self, kind: PowerUpKind) -> &EffectSlot {
        match kind {
            PowerUpKind::RapidFire => &self.rapid_fire,
            PowerUpKind::Shield => &self.shield,
            PowerUpKind::DoubleDamage => &self.double_damage,
            PowerUpKind::SpeedBoost => &self.speed_boost,
        }
    }

    fn slot_mut(&mut self, kind: PowerUpKind) -> &mut EffectSlot {
        match kind {
            PowerUpKind::RapidFire => &mut self.rapid_fire,
            PowerUpKind::Shield => &mut self.shield,
            PowerUpKind::DoubleDamage => &mut self.double_damage,
            PowerUpKind::SpeedBoost => &mut self.speed_boost,
        }
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.slot(kind).active
    }

    /// Start (or restart) an effect. Durations never stack.
    pub fn apply(&mut self, kind: PowerUpKind, now: u64) {
        self.slot_mut(kind).activate(now);
        if kind == PowerUpKind::Shield {
            self.shield_hits = SHIELD_HITS;
        }
    }

    /// Spend one shield hit if the shield can still absorb one.
    ///
    /// A shield whose budget ran out earlier in the same tick is still flagged
    /// active until the next expiry pass but no longer absorbs anything.
    pub fn absorb_hit(&mut self) -> bool {
        if self.shield.active && self.shield_hits > 0 {
            self.shield_hits -= 1;
            true
        } else {
            false
        }
    }

    /// Deactivate lapsed effects and return the kinds that just ended.
    ///
    /// Calling this again with nothing active is a no-op.
    pub fn expire(&mut self, now: u64) -> Vec<PowerUpKind> {
        let mut ended = Vec::new();
        for kind in PowerUpKind::ALL {
            let exhausted = kind == PowerUpKind::Shield && self.shield_hits == 0;
            let slot = self.slot_mut(kind);
            if slot.active && (now > slot.end_time || exhausted) {
                slot.active = false;
                ended.push(kind);
            }
        }
        ended
    }

    /// Currently active effects in a stable order
    pub fn snapshot(&self, now: u64) -> Vec<ActiveEffect> {
        PowerUpKind::ALL
            .into_iter()
            .filter(|&kind| self.is_active(kind))
            .map(|kind| ActiveEffect {
                kind,
                remaining_ms: self.slot(kind).remaining_ms(now),
                hits_left: (kind == PowerUpKind::Shield).then_some(self.shield_hits),
            })
            .collect()
    }
}
