//! Text frames for every animated object, measured once at startup.

use crate::error::GameError;

const ROCKET_FRAME_1: &str = r"  .
 .'.
 |o|
.'o'.
|.-.|
'   '
 ( )
  )
 ( )";

const ROCKET_FRAME_2: &str = r"  .
 .'.
 |o|
.'o'.
|.-.|
'   '
  )
 ( )
  (";

const TRASH_SMALL: &str = r" _____
|     |
|_____|";

const TRASH_LARGE: &str = r"   _________
  /        /|
 /________/ |
|  __    |  |
| |__|   | /
|________|/";

const TRASH_X1: &str = r"  ____
 /    \
| () ()|
 \ ^^ /
  ||||";

const DUCK: &str = r"   __
 <(o )___
  ( ._> /
   `---'";

const HUBBLE: &str = r"     _
  _ | |____
 |_||_| :: |=====
     |____|";

const LAMP: &str = r"  ___
 /   \
 \___/
  | |
 _|_|_";

const EXPLOSION_FRAMES: [&str; 4] = [
    r"           (_)
       (  (   (  (
      () (  (  )
        ( )  ()",
    r"           (_)
       (  (   (
         (  (  )
          )  (",
    r"            (
          (   (
         (     (
          )  (",
    r"            (
              (
            (",
];

const GAME_OVER_FRAME: &str = r"  ____                         ___
 / ___| __ _ _ __ ___   ___   / _ \__   _____ _ __
| |  _ / _` | '_ ` _ \ / _ \ | | | \ \ / / _ \ '__|
| |_| | (_| | | | | | |  __/ | |_| |\ V /  __/ |
 \____|\__,_|_| |_| |_|\___|  \___/  \_/ \___|_|";

/// A measured multiline text block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub name: &'static str,
    pub text: &'static str,
    pub rows: i32,
    pub columns: i32,
}

impl Frame {
    pub fn new(name: &'static str, text: &'static str) -> Result<Self, GameError> {
        let (rows, columns) = frame_size(text);
        if rows == 0 || columns == 0 {
            return Err(GameError::EmptyFrame(name));
        }
        Ok(Frame { name, text, rows, columns })
    }
}

/// Rows and columns taken by a text block.
pub fn frame_size(text: &str) -> (i32, i32) {
    let rows = text.lines().count();
    let columns = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
    (rows as i32, columns as i32)
}

pub struct Sprites {
    /// Flight animation, each rocket frame shown for two ticks.
    pub rocket: Vec<Frame>,
    pub garbage: Vec<Frame>,
    pub explosion: Vec<Frame>,
    pub game_over: Frame,
}

impl Sprites {
    pub fn load() -> Result<Self, GameError> {
        let rocket_1 = Frame::new("rocket_frame_1", ROCKET_FRAME_1)?;
        let rocket_2 = Frame::new("rocket_frame_2", ROCKET_FRAME_2)?;

        let garbage = [
            ("trash_small", TRASH_SMALL),
            ("trash_large", TRASH_LARGE),
            ("trash_x1", TRASH_X1),
            ("duck", DUCK),
            ("hubble", HUBBLE),
            ("lamp", LAMP),
        ]
        .into_iter()
        .map(|(name, text)| Frame::new(name, text))
        .collect::<Result<Vec<_>, _>>()?;

        let explosion = EXPLOSION_FRAMES
            .iter()
            .map(|text| Frame::new("explosion", text))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Sprites {
            rocket: vec![rocket_1, rocket_1, rocket_2, rocket_2],
            garbage,
            explosion,
            game_over: Frame::new("game_over", GAME_OVER_FRAME)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_uses_longest_line() {
        assert_eq!(frame_size("ab\nabcd\n"), (2, 4));
        assert_eq!(frame_size("x"), (1, 1));
    }

    #[test]
    fn test_empty_frame_is_rejected() {
        assert!(matches!(Frame::new("blank", ""), Err(GameError::EmptyFrame("blank"))));
        assert!(matches!(Frame::new("newlines", "\n\n"), Err(GameError::EmptyFrame(_))));
    }

    #[test]
    fn test_sprites_load() {
        let sprites = Sprites::load().unwrap();
        assert_eq!(sprites.rocket.len(), 4);
        assert_eq!(sprites.rocket[0], sprites.rocket[1]);
        assert_ne!(sprites.rocket[1], sprites.rocket[2]);
        assert_eq!(sprites.garbage.len(), 6);
        assert_eq!(sprites.explosion.len(), 4);
        assert_eq!(sprites.rocket[0].rows, 9);
        assert_eq!(sprites.rocket[0].columns, 5);
    }
}
