//! Pause state, pacing and editing on top of an owned [`LifeBoard`].

use crate::{
    Coord,
    engine::{LifeBoard, StepReport},
    input,
    render::ColorScheme,
};
use std::time::Duration;
use tracing::{debug, info};

pub const MIN_SCALE: u16 = 1;
pub const MAX_SCALE: u16 = 8;

/// Starting values for a [`Controller`]
#[derive(Debug, Clone)]
pub struct Settings {
    /// Edge length of a drawn cell, in surface units
    pub scale: u16,
    /// Generations per second while running
    pub running_fps: u32,
    /// Input polls per second while paused
    pub paused_fps: u32,
    pub paused: bool,
    pub parallel: bool,
    pub scheme: ColorScheme,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 1,
            running_fps: 30,
            paused_fps: 60,
            paused: false,
            parallel: false,
            scheme: ColorScheme::default(),
        }
    }
}

/// Everything a front end can ask the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    /// Kill every cell and pause
    Clear,
    ScaleUp,
    ScaleDown,
    Faster,
    Slower,
    /// Pointer pressed over a cell
    ToggleAt(Coord),
    /// Pointer dragged over a cell while pressed
    DragTo(Coord),
    /// Pointer released
    Release,
    RandomScheme,
    /// Move the viewport by a number of cells
    Pan(Coord),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Controller {
    board: LifeBoard,
    generation: u64,
    paused: bool,
    parallel: bool,
    scale: u16,
    running_fps: u32,
    paused_fps: u32,
    origin: Coord,
    scheme: ColorScheme,
    // last cell toggled by the current press, so a drag flips each cell once
    last_edit: Option<Coord>,
}

impl Controller {
    pub fn new(board: LifeBoard, settings: Settings) -> Self {
        Self {
            board,
            generation: 0,
            paused: settings.paused,
            parallel: settings.parallel,
            scale: settings.scale.clamp(MIN_SCALE, MAX_SCALE),
            running_fps: settings.running_fps.max(1),
            paused_fps: settings.paused_fps.max(1),
            origin: Coord::zero(),
            scheme: settings.scheme,
            last_edit: None,
        }
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Exit,
            Command::TogglePause => {
                self.paused = !self.paused;
                self.last_edit = None;
                info!(paused = self.paused, generation = self.generation, "pause toggled");
            }
            Command::Clear => {
                self.board.clear();
                self.paused = true;
                self.last_edit = None;
                info!(generation = self.generation, "board cleared");
            }
            Command::ScaleUp if self.scale < MAX_SCALE => {
                self.scale += 1;
                info!(scale = self.scale, "scale changed");
            }
            Command::ScaleDown if self.scale > MIN_SCALE => {
                self.scale -= 1;
                info!(scale = self.scale, "scale changed");
            }
            Command::Faster if self.running_fps <= 100 => {
                self.running_fps *= 2;
                info!(fps = self.running_fps, "rate changed");
            }
            Command::Slower if self.running_fps >= 6 => {
                self.running_fps /= 2;
                info!(fps = self.running_fps, "rate changed");
            }
            Command::ToggleAt(cell) if self.paused => {
                self.edit(cell);
            }
            Command::DragTo(cell) if self.paused && self.last_edit.is_some() => {
                if self.last_edit != Some(cell) {
                    self.edit(cell);
                }
            }
            Command::Release => self.last_edit = None,
            Command::RandomScheme => self.scheme = ColorScheme::random(),
            Command::Pan(delta) => self.origin = self.origin + delta,
            // out of range adjustments and edits while running
            _ => {}
        }
        Flow::Continue
    }

    fn edit(&mut self, cell: Coord) {
        let alive = self.board.toggle(cell);
        self.last_edit = Some(cell);
        debug!(x = cell.x, y = cell.y, alive, "cell toggled");
    }

    /// Advances one generation unless paused
    pub fn tick(&mut self) -> Option<StepReport> {
        if self.paused {
            return None;
        }

        let report = if self.parallel {
            self.board.step_parallel()
        } else {
            self.board.step()
        };
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = report.population,
            examined = report.examined,
            "stepped"
        );
        Some(report)
    }

    /// Time until the next [`Controller::tick`] while running, or the next
    /// input poll while paused
    pub fn frame_interval(&self) -> Duration {
        let fps = if self.paused {
            self.paused_fps
        } else {
            self.running_fps
        };
        Duration::from_secs(1) / fps
    }

    /// The cell drawn under a surface position
    #[inline]
    pub fn cell_at(&self, pixel: (u16, u16)) -> Coord {
        input::pixel_to_coord(pixel, self.scale, self.origin)
    }

    #[inline]
    pub fn board(&self) -> &LifeBoard {
        &self.board
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    #[inline]
    pub fn paused(&self) -> bool {
        self.paused
    }
    #[inline]
    pub fn scale(&self) -> u16 {
        self.scale
    }
    #[inline]
    pub fn running_fps(&self) -> u32 {
        self.running_fps
    }
    #[inline]
    pub fn origin(&self) -> Coord {
        self.origin
    }
    #[inline]
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::GLIDER;

    fn paused() -> Controller {
        let settings = Settings {
            paused: true,
            ..Settings::default()
        };
        Controller::new(LifeBoard::new(), settings)
    }

    #[test]
    fn paused_controller_does_not_step() {
        let mut ctl = Controller::new(
            LifeBoard::from_cells(GLIDER),
            Settings {
                paused: true,
                ..Settings::default()
            },
        );

        assert_eq!(ctl.tick(), None);
        assert_eq!(ctl.generation(), 0);

        ctl.apply(Command::TogglePause);
        assert!(ctl.tick().is_some());
        assert_eq!(ctl.generation(), 1);
    }

    #[test]
    fn edits_only_apply_while_paused() {
        let mut ctl = Controller::new(LifeBoard::new(), Settings::default());
        ctl.apply(Command::ToggleAt(Coord::new(3, 3)));
        assert!(ctl.board().is_empty());

        ctl.apply(Command::TogglePause);
        ctl.apply(Command::ToggleAt(Coord::new(3, 3)));
        assert!(ctl.board().is_alive(Coord::new(3, 3)));
    }

    #[test]
    fn drag_toggles_each_cell_once() {
        let mut ctl = paused();
        ctl.apply(Command::ToggleAt(Coord::new(0, 0)));
        ctl.apply(Command::DragTo(Coord::new(0, 0)));
        ctl.apply(Command::DragTo(Coord::new(1, 0)));
        ctl.apply(Command::DragTo(Coord::new(1, 0)));
        ctl.apply(Command::Release);
        // dragging without a press does nothing
        ctl.apply(Command::DragTo(Coord::new(2, 0)));

        assert_eq!(
            ctl.board().live_cells().sorted(),
            vec![Coord::new(0, 0), Coord::new(1, 0)]
        );
    }

    #[test]
    fn clear_empties_and_pauses() {
        let mut ctl = Controller::new(LifeBoard::from_cells(GLIDER), Settings::default());
        ctl.apply(Command::Clear);

        assert!(ctl.board().is_empty());
        assert!(ctl.paused());
    }

    #[test]
    fn clear_ends_drag() {
        let mut ctl = paused();
        ctl.apply(Command::ToggleAt(Coord::new(0, 0)));
        ctl.apply(Command::Clear);
        ctl.apply(Command::DragTo(Coord::new(1, 0)));

        assert!(ctl.board().is_empty());
    }

    #[test]
    fn rate_doubles_and_halves_within_bounds() {
        let mut ctl = paused();
        for _ in 0..10 {
            ctl.apply(Command::Faster);
        }
        assert_eq!(ctl.running_fps(), 120);

        for _ in 0..10 {
            ctl.apply(Command::Slower);
        }
        assert_eq!(ctl.running_fps(), 3);
    }

    #[test]
    fn scale_is_clamped() {
        let mut ctl = paused();
        ctl.apply(Command::ScaleDown);
        assert_eq!(ctl.scale(), MIN_SCALE);

        for _ in 0..20 {
            ctl.apply(Command::ScaleUp);
        }
        assert_eq!(ctl.scale(), MAX_SCALE);
    }

    #[test]
    fn frame_interval_follows_pause_state() {
        let mut ctl = paused();
        assert_eq!(ctl.frame_interval(), Duration::from_secs(1) / 60);

        ctl.apply(Command::TogglePause);
        assert_eq!(ctl.frame_interval(), Duration::from_secs(1) / 30);
    }

    #[test]
    fn pan_moves_pointer_mapping() {
        let mut ctl = paused();
        ctl.apply(Command::ScaleUp);
        ctl.apply(Command::Pan(Coord::new(-10, 4)));

        assert_eq!(ctl.cell_at((5, 5)), Coord::new(-8, 6));
    }

    #[test]
    fn quit_exits() {
        assert_eq!(paused().apply(Command::Quit), Flow::Exit);
        assert_eq!(paused().apply(Command::Faster), Flow::Continue);
    }
}
