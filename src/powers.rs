//! The two cooldown-gated special powers.
//!
//! Each power is a small state machine:
//! `Idle -> Descending -> Landed -> [Firing] -> Disappearing -> Idle`.
//! Only the ray passes through `Firing`. Leaving `Disappearing` starts the
//! cooldown; a power can only be activated from `Idle` with no cooldown left.

use crate::core::constants::{
    FREEZE_EXIT_FRAMES, FREEZE_HOLD_FRAMES, FREEZE_POWER_COOLDOWN, POWER_DESCENT_SPEED,
    POWER_START_HEIGHT, RAY_FADE_IN_FRAMES, RAY_FADE_OUT_FRAMES, RAY_FULL_POWER_FRAME,
    RAY_HOLD_FRAMES, RAY_LANDED_FRAMES, RAY_POWER_COOLDOWN,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerKind {
    /// Power A: a helper drops in and freezes the room's enemies.
    Freeze,
    /// Power B: a helper drops in and sweeps the room with a ray.
    Ray,
}

impl PowerKind {
    pub fn cooldown(&self) -> u32 {
        match self {
            PowerKind::Freeze => FREEZE_POWER_COOLDOWN,
            PowerKind::Ray => RAY_POWER_COOLDOWN,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PowerKind::Freeze => "Freeze",
            PowerKind::Ray => "Ray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerPhase {
    Idle,
    Descending,
    Landed,
    Firing,
    Disappearing,
}

/// Something the world must react to, produced by a phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerEffect {
    /// Freeze helper landed.
    FreezeEnemies,
    /// Ray reached full intensity.
    RayBlast,
    /// The power left the scene and its cooldown began.
    Finished(PowerKind),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerState {
    pub kind: PowerKind,
    pub phase: PowerPhase,
    /// Frames spent in the current phase.
    pub timer: u32,
    /// Helper height above the floor during descent.
    pub height: f64,
    /// Ray opacity in [0, 1]. Always 0 for the freeze power.
    pub ray_alpha: f64,
    /// Frames before the power can be used again.
    pub cooldown: u32,
}

impl PowerState {
    pub fn new(kind: PowerKind) -> Self {
        Self {
            kind,
            phase: PowerPhase::Idle,
            timer: 0,
            height: POWER_START_HEIGHT,
            ray_alpha: 0.0,
            cooldown: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != PowerPhase::Idle
    }

    pub fn is_ready(&self) -> bool {
        self.phase == PowerPhase::Idle && self.cooldown == 0
    }

    pub fn tick_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Starts the power if it is ready.
    pub fn activate(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.enter(PowerPhase::Descending);
        self.height = POWER_START_HEIGHT;
        self.ray_alpha = 0.0;
        true
    }

    fn enter(&mut self, phase: PowerPhase) {
        self.phase = phase;
        self.timer = 0;
    }

    fn finish(&mut self) -> PowerEffect {
        self.enter(PowerPhase::Idle);
        self.ray_alpha = 0.0;
        self.height = POWER_START_HEIGHT;
        self.cooldown = self.kind.cooldown();
        PowerEffect::Finished(self.kind)
    }

    /// Advances the animation one frame.
    pub fn advance(&mut self) -> Option<PowerEffect> {
        if self.phase == PowerPhase::Idle {
            return None;
        }
        self.timer += 1;

        match (self.phase, self.kind) {
            (PowerPhase::Descending, _) => {
                self.height -= POWER_DESCENT_SPEED;
                if self.height <= 0.0 {
                    self.height = 0.0;
                    self.enter(PowerPhase::Landed);
                    if self.kind == PowerKind::Freeze {
                        return Some(PowerEffect::FreezeEnemies);
                    }
                }
                None
            }
            (PowerPhase::Landed, PowerKind::Freeze) => {
                if self.timer > FREEZE_HOLD_FRAMES {
                    self.enter(PowerPhase::Disappearing);
                }
                None
            }
            (PowerPhase::Landed, PowerKind::Ray) => {
                if self.timer > RAY_LANDED_FRAMES {
                    self.enter(PowerPhase::Firing);
                }
                None
            }
            (PowerPhase::Firing, _) => {
                self.ray_alpha = (self.timer as f64 / RAY_FADE_IN_FRAMES).min(1.0);
                let effect = (self.timer == RAY_FULL_POWER_FRAME).then_some(PowerEffect::RayBlast);
                if self.timer > RAY_HOLD_FRAMES {
                    self.enter(PowerPhase::Disappearing);
                }
                effect
            }
            (PowerPhase::Disappearing, PowerKind::Freeze) => {
                (self.timer > FREEZE_EXIT_FRAMES).then(|| self.finish())
            }
            (PowerPhase::Disappearing, PowerKind::Ray) => {
                self.ray_alpha =
                    (1.0 - self.timer as f64 / RAY_FADE_OUT_FRAMES as f64).max(0.0);
                (self.timer > RAY_FADE_OUT_FRAMES).then(|| self.finish())
            }
            (PowerPhase::Idle, _) => None,
        }
    }
}

/// Both powers of the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Powers {
    pub freeze: PowerState,
    pub ray: PowerState,
}

impl Default for Powers {
    fn default() -> Self {
        Self::new()
    }
}

impl Powers {
    pub fn new() -> Self {
        Self {
            freeze: PowerState::new(PowerKind::Freeze),
            ray: PowerState::new(PowerKind::Ray),
        }
    }

    pub fn get_mut(&mut self, kind: PowerKind) -> &mut PowerState {
        match kind {
            PowerKind::Freeze => &mut self.freeze,
            PowerKind::Ray => &mut self.ray,
        }
    }

    pub fn tick_cooldowns(&mut self) {
        self.freeze.tick_cooldown();
        self.ray.tick_cooldown();
    }

    /// Advances both animations, freeze first.
    pub fn advance(&mut self) -> Vec<PowerEffect> {
        [self.freeze.advance(), self.ray.advance()]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_idle(power: &mut PowerState) -> Vec<(u32, PowerEffect)> {
        let mut effects = Vec::new();
        let mut frame = 0;
        while power.is_active() {
            frame += 1;
            if let Some(effect) = power.advance() {
                effects.push((frame, effect));
            }
            assert!(frame < 10_000, "power never finished");
        }
        effects
    }

    #[test]
    fn test_idle_power_does_nothing() {
        let mut power = PowerState::new(PowerKind::Freeze);
        assert_eq!(power.advance(), None);
        assert_eq!(power.phase, PowerPhase::Idle);
    }

    #[test]
    fn test_freeze_lifecycle() {
        let mut power = PowerState::new(PowerKind::Freeze);
        assert!(power.activate());
        assert_eq!(power.phase, PowerPhase::Descending);
        assert!(!power.activate());

        let effects = run_until_idle(&mut power);
        let kinds: Vec<_> = effects.iter().map(|(_, e)| *e).collect();
        assert_eq!(
            kinds,
            vec![
                PowerEffect::FreezeEnemies,
                PowerEffect::Finished(PowerKind::Freeze)
            ]
        );
        // 134 frames of descent from height 200 at 1.5/frame
        assert_eq!(effects[0].0, 134);
        assert_eq!(power.cooldown, FREEZE_POWER_COOLDOWN);
        assert!(!power.is_ready());
    }

    #[test]
    fn test_ray_lifecycle_blasts_once() {
        let mut power = PowerState::new(PowerKind::Ray);
        assert!(power.activate());
        let effects = run_until_idle(&mut power);
        let blasts = effects
            .iter()
            .filter(|(_, e)| *e == PowerEffect::RayBlast)
            .count();
        assert_eq!(blasts, 1);
        assert_eq!(
            effects.last().map(|(_, e)| *e),
            Some(PowerEffect::Finished(PowerKind::Ray))
        );
        assert_eq!(power.ray_alpha, 0.0);
        assert_eq!(power.cooldown, RAY_POWER_COOLDOWN);
    }

    #[test]
    fn test_ray_alpha_ramps_while_firing() {
        let mut power = PowerState::new(PowerKind::Ray);
        power.activate();
        while power.phase != PowerPhase::Firing {
            power.advance();
        }
        for _ in 0..20 {
            power.advance();
        }
        assert!((power.ray_alpha - 0.5).abs() < 1e-9);
        for _ in 0..30 {
            power.advance();
        }
        assert_eq!(power.ray_alpha, 1.0);
    }

    #[test]
    fn test_cooldown_blocks_reactivation() {
        let mut power = PowerState::new(PowerKind::Freeze);
        power.activate();
        run_until_idle(&mut power);
        assert!(!power.activate());
        for _ in 0..FREEZE_POWER_COOLDOWN {
            power.tick_cooldown();
        }
        assert!(power.activate());
    }

    #[test]
    fn test_powers_advance_independently() {
        let mut powers = Powers::new();
        powers.get_mut(PowerKind::Ray).activate();
        assert!(powers.ray.is_active());
        assert!(!powers.freeze.is_active());
        powers.advance();
        assert_eq!(powers.ray.timer, 1);
        assert_eq!(powers.freeze.timer, 0);
    }
}
