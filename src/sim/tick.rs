//! Per-frame simulation tick
//!
//! The host calls [`tick`] once per frame. Order within a live tick:
//! fire, ship, bullets (+ hits on enemies), enemies (+ hits on the ship),
//! power-ups (+ collection), wave director, effect expiry. Decor animates
//! on every tick whether or not a run is live.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::entities_overlap;
use super::effects::ActiveEffect;
use super::enemy::EnemyKind;
use super::entity::Entity;
use super::powerup::{PowerUp, PowerUpKind};
use super::rng::RandomSource;
use super::ship::DirectionalInput;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub direction: DirectionalInput,
    /// A fire action happened since the last tick
    pub fire: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDestroyed {
    pub center: Vec2,
    pub kind: EnemyKind,
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpSpawned {
    pub center: Vec2,
    pub kind: PowerUpKind,
}

/// Things that happened this tick, for sound and visual cues
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameEvents {
    pub enemy_destroyed: Vec<EnemyDestroyed>,
    pub power_up_spawned: Vec<PowerUpSpawned>,
    pub power_up_collected: Vec<PowerUpKind>,
    pub power_up_expired: Vec<PowerUpKind>,
    /// Ship centre where the player died
    pub player_destroyed: Option<Vec2>,
    /// Shield hits left after each absorbed collision
    pub shield_hits: Vec<u8>,
    pub shots_fired: u32,
    /// Number of a wave that began this tick
    pub wave_started: Option<u32>,
}

/// Snapshot handed back to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    pub score: u64,
    pub wave: u32,
    /// Ticks left on the wave banner
    pub wave_announce_ticks: u32,
    pub active_effects: Vec<ActiveEffect>,
    pub terminal: bool,
    pub events: FrameEvents,
}

/// Advance the game state by one tick.
///
/// `now` is the host's wall clock in milliseconds and is only used for
/// power-up timers.
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput, now: u64) -> FrameResult {
    let mut events = FrameEvents::default();

    if state.phase == GamePhase::Playing {
        state.time_ticks += 1;

        if input.fire {
            fire(state, &mut events);
        }
        state.ship.update(&input.direction, &state.playfield);
        update_bullets(state, &mut events);
        update_enemies(state, &mut events);
        update_power_ups(state, now, &mut events);
        update_waves(state, &mut events);
        expire_effects(state, now, &mut events);

        // Terminal only takes hold at the tick boundary
        if events.player_destroyed.is_some() {
            state.phase = GamePhase::GameOver;
            log::info!(
                "Game over: score {} on wave {} after {} ticks",
                state.score,
                state.waves.wave,
                state.time_ticks
            );
        }
    }

    state.decor.update(&state.playfield);

    FrameResult {
        score: state.score,
        wave: state.waves.wave,
        wave_announce_ticks: state.waves.announce_ticks,
        active_effects: state.effects.snapshot(now),
        terminal: state.phase == GamePhase::GameOver,
        events,
    }
}

fn fire<R: RandomSource>(state: &mut GameState<R>, events: &mut FrameEvents) {
    let volley = state
        .ship
        .fire(state.effects.is_active(PowerUpKind::RapidFire));
    events.shots_fired += volley.len() as u32;
    state.bullets.extend(volley);
}

/// Drop every element whose flag is set, keeping the order of the rest
fn compact<T>(items: &mut Vec<T>, removed: &[bool]) {
    debug_assert_eq!(items.len(), removed.len());
    let mut index = 0;
    items.retain(|_| {
        let keep = !removed[index];
        index += 1;
        keep
    });
}

/// Move bullets, prune those off the top, then resolve bullet hits.
///
/// Each bullet destroys at most one enemy (the first it overlaps in spawn
/// order) and each enemy is destroyed at most once. Removals are applied
/// after the pass so no element is skipped.
fn update_bullets<R: RandomSource>(state: &mut GameState<R>, events: &mut FrameEvents) {
    for bullet in &mut state.bullets {
        bullet.advance();
    }
    let playfield = state.playfield;
    state.bullets.retain(|b| !b.is_off_screen(&playfield));

    let mut bullet_spent = vec![false; state.bullets.len()];
    let mut enemy_dead = vec![false; state.enemies.len()];
    let mut kills = Vec::new();

    for (bullet_idx, bullet) in state.bullets.iter().enumerate() {
        let target = state
            .enemies
            .iter()
            .enumerate()
            .find(|&(enemy_idx, enemy)| !enemy_dead[enemy_idx] && entities_overlap(bullet, enemy))
            .map(|(enemy_idx, _)| enemy_idx);
        if let Some(enemy_idx) = target {
            bullet_spent[bullet_idx] = true;
            enemy_dead[enemy_idx] = true;
            kills.push(enemy_idx);
        }
    }

    for enemy_idx in kills {
        let enemy = &state.enemies[enemy_idx];
        let center = enemy.center();
        let points = enemy.points();
        state.score += points;
        events.enemy_destroyed.push(EnemyDestroyed {
            center,
            kind: enemy.kind,
            points,
        });

        if state.rng.chance(POWER_UP_DROP_CHANCE) {
            let kind = PowerUpKind::random(&mut state.rng);
            state.power_ups.push(PowerUp::centered_at(center, kind));
            events.power_up_spawned.push(PowerUpSpawned { center, kind });
        }
        state.decor.explode(center);
    }

    compact(&mut state.bullets, &bullet_spent);
    compact(&mut state.enemies, &enemy_dead);
}

/// Move enemies and resolve contact with the ship.
///
/// Every overlapping enemy is handled in spawn order against the shield as it
/// stands at that moment, so a shield emptied by one enemy lets the next one
/// through on the same tick.
fn update_enemies<R: RandomSource>(state: &mut GameState<R>, events: &mut FrameEvents) {
    let mut removed = vec![false; state.enemies.len()];

    for (idx, enemy) in state.enemies.iter_mut().enumerate() {
        enemy.advance();

        if entities_overlap(&state.ship, &*enemy) {
            removed[idx] = true;
            if state.effects.absorb_hit() {
                log::debug!("Shield absorbed a hit ({} left)", state.effects.shield_hits);
                events.shield_hits.push(state.effects.shield_hits);
            } else if events.player_destroyed.is_none() {
                let center = state.ship.center();
                state.decor.explode(center);
                events.player_destroyed = Some(center);
            }
            continue;
        }

        if enemy.is_off_screen(&state.playfield) {
            removed[idx] = true;
        }
    }

    compact(&mut state.enemies, &removed);
}

fn update_power_ups<R: RandomSource>(state: &mut GameState<R>, now: u64, events: &mut FrameEvents) {
    let mut removed = vec![false; state.power_ups.len()];

    for (idx, power_up) in state.power_ups.iter_mut().enumerate() {
        power_up.advance();

        if entities_overlap(&state.ship, &*power_up) {
            removed[idx] = true;
            state.effects.apply(power_up.kind, now);
            if power_up.kind == PowerUpKind::SpeedBoost {
                state.ship.speed = SHIP_BOOSTED_SPEED;
            }
            log::debug!("Collected {}", power_up.kind.label());
            events.power_up_collected.push(power_up.kind);
        } else if power_up.is_off_screen(&state.playfield) {
            removed[idx] = true;
        }
    }

    compact(&mut state.power_ups, &removed);
}

fn update_waves<R: RandomSource>(state: &mut GameState<R>, events: &mut FrameEvents) {
    let step = state
        .waves
        .update(state.enemies.len(), &mut state.rng, &state.playfield);
    if let Some(enemy) = step.spawned {
        state.enemies.push(enemy);
    }
    if let Some(wave) = step.advanced_to {
        log::info!("Wave {} begins ({} enemies)", wave, state.waves.enemies_in_wave);
        events.wave_started = Some(wave);
    }
}

fn expire_effects<R: RandomSource>(state: &mut GameState<R>, now: u64, events: &mut FrameEvents) {
    let ended = state.effects.expire(now);
    if ended.contains(&PowerUpKind::SpeedBoost) {
        state.ship.speed = SHIP_BASE_SPEED;
    }
    for kind in &ended {
        log::debug!("{} wore off", kind.label());
    }
    events.power_up_expired = ended;
}
