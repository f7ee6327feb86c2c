use std::time::Duration;

use ratatui::style::Color;

pub const BOARD_WIDTH: i32 = 360;
pub const BOARD_HEIGHT: i32 = 640;

pub const BIRD_X: i32 = BOARD_WIDTH / 8;
pub const BIRD_Y: i32 = BOARD_HEIGHT / 2;
pub const BIRD_WIDTH: i32 = 34;
pub const BIRD_HEIGHT: i32 = 24;

pub const PIPE_X: i32 = BOARD_WIDTH;
pub const PIPE_Y: i32 = 0;
pub const PIPE_WIDTH: i32 = 64;
pub const PIPE_HEIGHT: i32 = 512;
pub const PIPE_VELOCITY: i32 = -4;
pub const PIPE_GAPS: [i32; 3] = [BOARD_HEIGHT / 4, BOARD_HEIGHT / 7, BOARD_HEIGHT / 8];

pub const GRAVITY: i32 = 1;
pub const JUMP_VELOCITY: i32 = -9;

// Top and bottom pipes are scored separately, so a pair is worth one point.
pub const SCORE_PER_PIPE: f64 = 0.5;

pub const FRAME_RATE: f64 = 60.0;
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(1500);

pub const TEXT_COLOR: Color = Color::White;
