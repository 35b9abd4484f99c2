//! The scripted rescue that plays after the boss falls.
//!
//! Phases run strictly in order and each is entered exactly once:
//! turn toward the cage, fade the cage, walk the companion over, reunion,
//! mission banner, then advance to the next level. On the final level the
//! last phase holds forever behind the game-end banner.

use crate::core::constants::{
    CAGE_FADE_STEP, COMPANION_REACH, COMPANION_SPEED, LEVEL_ADVANCE_DELAY, MISSION_BANNER_FRAMES,
    RESCUE_POINT_X, RESCUE_POINT_Y, REUNION_FRAMES, WIN_TURN_EPSILON, WIN_TURN_RATE,
};
use crate::geometry::{shortest_angle_delta, wrap_degrees, Vec2};
use crate::player::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WinPhase {
    Inactive,
    TurningToCage,
    CageFading,
    CompanionApproach,
    Reunion,
    MissionComplete,
    Advancing,
}

impl WinPhase {
    /// 0 when inactive, 1..=6 through the sequence.
    pub fn ordinal(&self) -> u8 {
        match self {
            WinPhase::Inactive => 0,
            WinPhase::TurningToCage => 1,
            WinPhase::CageFading => 2,
            WinPhase::CompanionApproach => 3,
            WinPhase::Reunion => 4,
            WinPhase::MissionComplete => 5,
            WinPhase::Advancing => 6,
        }
    }
}

/// What the caller should do after a frame of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinStep {
    Continue,
    PhaseChanged(WinPhase),
    /// Load the next level now.
    AdvanceLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinSequence {
    pub phase: WinPhase,
    /// Frames since the current phase began.
    pub timer: u32,
    pub cage_opacity: f64,
    pub companion_position: Vec2,
    /// Whether the rescued companion is drawn (caged or free).
    pub companion_visible: bool,
    pub mission_complete: bool,
    pub level_complete: bool,
    pub game_end: bool,
}

impl Default for WinSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl WinSequence {
    pub fn new() -> Self {
        Self {
            phase: WinPhase::Inactive,
            timer: 0,
            cage_opacity: 1.0,
            companion_position: rescue_point(),
            companion_visible: false,
            mission_complete: false,
            level_complete: false,
            game_end: false,
        }
    }

    /// Begins the sequence. Only the first call has any effect.
    pub fn start(&mut self) -> bool {
        if self.phase != WinPhase::Inactive {
            return false;
        }
        self.enter(WinPhase::TurningToCage);
        true
    }

    pub fn is_running(&self) -> bool {
        self.phase != WinPhase::Inactive
    }

    /// The companion is out of the cage once the approach begins.
    pub fn companion_freed(&self) -> bool {
        self.phase >= WinPhase::CompanionApproach
    }

    /// Runs one frame. `has_next` tells whether another level follows.
    pub fn advance(&mut self, player: &mut Player, has_next: bool) -> WinStep {
        if !self.is_running() {
            return WinStep::Continue;
        }
        self.timer += 1;

        match self.phase {
            WinPhase::Inactive => WinStep::Continue,
            WinPhase::TurningToCage => {
                let target = player.position.bearing_to(rescue_point());
                let error = shortest_angle_delta(player.facing, target);
                if error.abs() > WIN_TURN_EPSILON {
                    player.facing = wrap_degrees(player.facing + error * WIN_TURN_RATE);
                    WinStep::Continue
                } else {
                    self.enter(WinPhase::CageFading)
                }
            }
            WinPhase::CageFading => {
                self.cage_opacity -= CAGE_FADE_STEP;
                if self.cage_opacity > 0.0 {
                    return WinStep::Continue;
                }
                self.cage_opacity = 0.0;
                self.enter(WinPhase::CompanionApproach)
            }
            WinPhase::CompanionApproach => {
                if self.companion_position.distance_to(player.position) > COMPANION_REACH {
                    self.companion_position
                        .step_toward(player.position, COMPANION_SPEED);
                    WinStep::Continue
                } else {
                    self.enter(WinPhase::Reunion)
                }
            }
            WinPhase::Reunion => {
                if self.timer < REUNION_FRAMES {
                    return WinStep::Continue;
                }
                self.mission_complete = true;
                self.enter(WinPhase::MissionComplete)
            }
            WinPhase::MissionComplete => {
                if self.timer < MISSION_BANNER_FRAMES {
                    return WinStep::Continue;
                }
                if has_next {
                    self.level_complete = true;
                } else {
                    self.game_end = true;
                }
                self.enter(WinPhase::Advancing)
            }
            WinPhase::Advancing => {
                if has_next && self.timer >= LEVEL_ADVANCE_DELAY {
                    WinStep::AdvanceLevel
                } else {
                    WinStep::Continue
                }
            }
        }
    }

    fn enter(&mut self, phase: WinPhase) -> WinStep {
        self.phase = phase;
        self.timer = 0;
        WinStep::PhaseChanged(phase)
    }
}

fn rescue_point() -> Vec2 {
    Vec2::new(RESCUE_POINT_X, RESCUE_POINT_Y)
}
