//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Draw everything inside a rectangle of at most this size in the center of
/// the terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of rows of the game screen's display area that are not part of the
/// playing field: the score bar, the bonus line, and two message lines.
pub(crate) const HUD_ROWS: u16 = 4;

/// Minimum height of a playing field, border ring included
pub(crate) const MIN_FIELD_HEIGHT: i32 = 3;

/// Minimum width of a playing field, border ring included
pub(crate) const MIN_FIELD_WIDTH: i32 = 5;

/// Length of the snake at the start of a round
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Maximum number of direction changes buffered between ticks
pub(crate) const MAX_QUEUED_MOVES: usize = 3;

/// Number of random draws made when looking for a free cell before falling
/// back to scanning the whole interior
pub(crate) const MAX_PLACEMENT_ATTEMPTS: usize = 256;

/// Points awarded for eating the regular food
pub(crate) const FOOD_POINTS: u32 = 10;

/// Points awarded for eating the bonus fruit
pub(crate) const BONUS_POINTS: u32 = 15;

/// Probability of spawning a bonus fruit after the regular food is eaten
pub(crate) const BONUS_PROBABILITY: f64 = 0.25;

/// Number of ticks a bonus fruit stays on the field
pub(crate) const BONUS_LIFETIME: u32 = 35;

/// Milliseconds taken off the tick period when a bonus fruit is eaten
pub(crate) const BONUS_SPEEDUP_MS: u64 = 5;

/// The tick period is never lowered below this by eating bonus fruit
pub(crate) const BONUS_SPEED_FLOOR_MS: u64 = 40;

/// Score needed per level; level `n` ends at `n * POINTS_PER_LEVEL`
pub(crate) const POINTS_PER_LEVEL: u32 = 50;

/// Milliseconds taken off the tick period on each level-up
pub(crate) const LEVEL_SPEEDUP_MS: u64 = 7;

/// The tick period is never lowered below this by levelling up
pub(crate) const LEVEL_SPEED_FLOOR_MS: u64 = 30;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the regular food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the bonus fruit
pub(crate) const BONUS_SYMBOL: char = '$';

/// Glyph for obstacles
pub(crate) const OBSTACLE_SYMBOL: char = '█';

/// Glyph for the cell the snake crashed into
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the regular food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the bonus fruit
pub(crate) const BONUS_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::SLOW_BLINK);

/// Style for obstacles
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Gray);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for secondary text such as the bonus countdown and the controls line
pub(crate) const HINT_STYLE: Style = Style::new().add_modifier(Modifier::DIM);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
