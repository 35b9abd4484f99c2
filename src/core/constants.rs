// Frame timing
pub const FRAME_MS: u64 = 16; // ~60 FPS fixed logical step
pub const FRAMES_PER_SECOND: u32 = 60;

// Room geometry (room centered on the origin, far door at -Y, near door at +Y)
pub const ROOM_HALF_WIDTH: f64 = 280.0;
pub const ROOM_HALF_LENGTH: f64 = 285.0;
pub const PLAYER_COLLISION_RADIUS: f64 = 10.0;
pub const DOOR_BAND_HALF_WIDTH: f64 = 100.0;
pub const DOOR_ZONE_LIMIT: f64 = 295.0;
pub const DOOR_TRIGGER_Y: f64 = 290.0;
pub const ROOM_ENTRY_Y: f64 = 280.0;

// Player
pub const PLAYER_START_X: f64 = 0.0;
pub const PLAYER_START_Y: f64 = 100.0;
pub const PLAYER_START_ANGLE: f64 = 270.0;
pub const MOVE_SPEED: f64 = 0.5;
pub const ROTATION_SPEED: f64 = 0.3;
pub const JUMP_STRENGTH: f64 = 8.0;
pub const GRAVITY: f64 = 0.5;
pub const MAX_HEALTH: u32 = 100;
pub const STARTING_LIVES: u32 = 3;

// Lasso
pub const LASSO_DURATION: u32 = 20;
pub const LASSO_REACH: f64 = 30.0;
pub const LASSO_ENEMY_HIT_RADIUS: f64 = 35.0;
pub const LASSO_BOSS_HIT_RADIUS: f64 = 40.0;
pub const LASSO_BOSS_COOLDOWN: u32 = 30;
pub const LASSO_BOSS_DAMAGE: u32 = 1;
pub const ENEMY_DEFEAT_SCORE: u64 = 50;
pub const BOSS_DEFEAT_SCORE: u64 = 100;

// Enemies
pub const ENEMY_CHASE_SPEED: f64 = 0.2;
pub const ENEMY_CONTACT_RADIUS: f64 = 15.0;
pub const ENEMY_CONTACT_DAMAGE: u32 = 5;
pub const ENEMY_HIT_COOLDOWN: u32 = 60;

// Collectibles
pub const PICKUP_RADIUS: f64 = 25.0;
pub const COIN_SCORE: u64 = 10;

// Level generation
pub const LEVEL_SEED_BASE: u64 = 42;
pub const LEVEL_SEED_STRIDE: u64 = 100;
pub const STAR_CHANCE: f64 = 0.80;
pub const HAT_CHANCE: f64 = 0.55;
pub const STAR_HAT_EXTENT: f64 = 200.0;
pub const COIN_EXTENT: f64 = 220.0;
pub const COIN_COUNT_MIN: usize = 8;
pub const COIN_COUNT_MAX: usize = 12;
pub const ENEMY_X_EXTENT: f64 = 220.0;
pub const ENEMY_Y_MIN: f64 = -220.0;
pub const ENEMY_Y_MAX: f64 = 150.0; // keep clear of the entry edge
// Enemy growth per room past room 1: 1.25 = 5/4
pub const ENEMY_GROWTH_NUMERATOR: usize = 5;
pub const ENEMY_GROWTH_DENOMINATOR: usize = 4;
pub const FURNITURE_LAYOUT_COUNT: usize = 5;

// Boss
pub const BOSS_SPAWN_X: f64 = 0.0;
pub const BOSS_SPAWN_Y: f64 = -100.0;
pub const BOSS_MOVE_SPEED: f64 = 0.15;
pub const BOSS_TURN_INTERVAL: u32 = 200;
pub const BOSS_BOUND: f64 = 270.0;
pub const BOSS_CLOSE_RANGE: f64 = 60.0;
pub const BOSS_FAR_RANGE: f64 = 80.0;
pub const BOSS_PROXIMITY_THRESHOLD: u32 = 240;
pub const BOSS_SWING_COUNTDOWN: u32 = 240;
pub const BOSS_SWING_DURATION: u32 = 20;
pub const BOSS_SWING_DAMAGE: u32 = 10;
pub const BOSS_THROW_COOLDOWN: u32 = 300;
pub const PROJECTILE_SPEED: f64 = 0.5;
pub const PROJECTILE_HIT_RADIUS: f64 = 15.0;
pub const PROJECTILE_DAMAGE: u32 = 5;
pub const PROJECTILE_DESPAWN_EXTENT: f64 = 500.0;

// Special powers
pub const FREEZE_POWER_COOLDOWN: u32 = 3600; // 1 minute
pub const RAY_POWER_COOLDOWN: u32 = 7200; // 2 minutes
pub const POWER_START_HEIGHT: f64 = 200.0;
pub const POWER_DESCENT_SPEED: f64 = 1.5;
pub const FREEZE_HOLD_FRAMES: u32 = 300;
pub const FREEZE_EXIT_FRAMES: u32 = 30;
pub const RAY_LANDED_FRAMES: u32 = 40;
pub const RAY_FADE_IN_FRAMES: f64 = 40.0;
pub const RAY_FULL_POWER_FRAME: u32 = 30;
pub const RAY_HOLD_FRAMES: u32 = 180;
pub const RAY_FADE_OUT_FRAMES: u32 = 60;
pub const RAY_BOSS_DAMAGE: u32 = 10;

// Win sequence
pub const RESCUE_POINT_X: f64 = 0.0;
pub const RESCUE_POINT_Y: f64 = -200.0;
pub const WIN_TURN_RATE: f64 = 0.015;
pub const WIN_TURN_EPSILON: f64 = 0.5;
pub const CAGE_FADE_STEP: f64 = 0.005;
pub const COMPANION_SPEED: f64 = 0.5;
pub const COMPANION_REACH: f64 = 5.0;
pub const REUNION_FRAMES: u32 = 300;
pub const MISSION_BANNER_FRAMES: u32 = 180;
pub const LEVEL_ADVANCE_DELAY: u32 = 120;

// Top-level screens
pub const FADE_FRAMES: u32 = 30;
pub const GAME_OVER_FADE_FRAMES: u32 = 600;
pub const LEVEL_BANNER_FRAMES: u32 = 600;
