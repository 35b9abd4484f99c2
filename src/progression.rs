//! Room-to-room movement through the far and near doors.
//!
//! Rooms form a line: the far door (at -Y) leads one room deeper and the
//! near door (at +Y) one room back. Room 0 has no near door and the boss
//! room has neither, so a player who reaches the boss cannot leave.

use crate::core::constants::{DOOR_TRIGGER_Y, ROOM_ENTRY_Y};
use crate::core::game_state::World;
use crate::geometry::{clamp_to_room, in_door_band};
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomTransition {
    Advanced { room: usize },
    EnteredBossRoom { room: usize },
    Retreated { room: usize },
}

/// Checks both doors after the player moved. Without a transition the
/// player is clamped back into the room.
pub fn resolve_doors(world: &mut World, player: &mut Player) -> Option<RoomTransition> {
    let last = world.config().boss_room();
    let room = world.room_index;
    let in_band = in_door_band(player.position.x);

    if in_band && player.position.y <= -DOOR_TRIGGER_Y && room < last {
        player.position.y = ROOM_ENTRY_Y;
        if room + 1 == last {
            world.enter_boss_room();
            return Some(RoomTransition::EnteredBossRoom { room: last });
        }
        world.room_index = room + 1;
        world.enemies_frozen = false;
        return Some(RoomTransition::Advanced { room: room + 1 });
    }

    if in_band && player.position.y >= DOOR_TRIGGER_Y && room > 0 && room < last {
        player.position.y = -ROOM_ENTRY_Y;
        world.room_index = room - 1;
        world.enemies_frozen = false;
        return Some(RoomTransition::Retreated { room: room - 1 });
    }

    player.position = clamp_to_room(player.position);
    None
}
