use lifers::{
    Command, Controller, Coord,
    render::{self, Rect, Rgb},
};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal,
};
use std::{io, time::Duration};

pub enum ConsoleEvent {
    Command(Command),
    /// Nothing to do but the screen is stale, e.g. after a resize
    Redraw,
    Ignored,
}

/// Maps a key press to a controller command
pub fn key_command(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Char('c') => Command::Clear,
        KeyCode::Char('r') => Command::RandomScheme,
        KeyCode::Left => Command::Slower,
        KeyCode::Right => Command::Faster,
        KeyCode::Up => Command::ScaleUp,
        KeyCode::Down => Command::ScaleDown,
        KeyCode::Char('h') => Command::Pan(Coord::new(-1, 0)),
        KeyCode::Char('j') => Command::Pan(Coord::new(0, 1)),
        KeyCode::Char('k') => Command::Pan(Coord::new(0, -1)),
        KeyCode::Char('l') => Command::Pan(Coord::new(1, 0)),
        _ => return None,
    };
    Some(command)
}

/// Maps a left-button mouse event on the drawing surface to an edit command
pub fn mouse_command(mouse: MouseEvent, ctl: &Controller, surface: (u16, u16)) -> Option<Command> {
    let pixel = (mouse.column, mouse.row);
    // the status line is not part of the board
    if mouse.row >= surface.1 {
        return None;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Command::ToggleAt(ctl.cell_at(pixel))),
        MouseEventKind::Drag(MouseButton::Left) => Some(Command::DragTo(ctl.cell_at(pixel))),
        MouseEventKind::Up(MouseButton::Left) => Some(Command::Release),
        _ => None,
    }
}

/// The terminal area cells are drawn on: everything but the bottom row
fn surface() -> io::Result<(u16, u16)> {
    let (cols, rows) = terminal::size()?;
    Ok((cols, rows.saturating_sub(1)))
}

#[inline]
fn color(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::Rgb { r, g, b }
}

pub struct ConsoleRender {
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self {
            report: String::new(),
        })
    }

    pub fn render(&self, ctl: &Controller) -> io::Result<()> {
        let surface = surface()?;
        let (scale, origin, scheme) = (ctl.scale(), ctl.origin(), ctl.scheme());
        let mut stdout = io::stdout();
        queue!(
            stdout,
            SetBackgroundColor(color(scheme.dead)),
            terminal::Clear(terminal::ClearType::All)
        )?;

        let br = origin + render::visible_cells(surface, scale);
        for cell in ctl.board().window(origin, br).iter() {
            if let Some(rect) = render::cell_rect(cell, scale, origin, surface) {
                Self::fill(&mut stdout, rect, scheme.alive)?;
            }
        }
        if ctl.paused() {
            for (rect, rgb) in render::pause_icon(surface, scale) {
                Self::fill(&mut stdout, rect, rgb)?;
            }
        }

        // write footer
        let state = if ctl.paused() { "paused" } else { "running" };
        let footer = format!(
            "{} | gen:{} {} {}fps x{} @({},{}) | {}",
            state,
            ctl.generation(),
            ctl.board().population(),
            ctl.running_fps(),
            scale,
            origin.x,
            origin.y,
            self.report
        );
        let footer: String = footer.chars().take(usize::from(surface.0)).collect();
        queue!(
            stdout,
            ResetColor,
            cursor::MoveTo(0, surface.1),
            terminal::Clear(terminal::ClearType::CurrentLine),
            Print(footer)
        )?;

        io::Write::flush(&mut stdout)
    }

    fn fill<W: io::Write>(out: &mut W, rect: Rect, rgb: Rgb) -> io::Result<()> {
        let row = " ".repeat(usize::from(rect.width));
        queue!(out, SetBackgroundColor(color(rgb)))?;
        for dy in 0..rect.height {
            queue!(out, cursor::MoveTo(rect.x, rect.y + dy), Print(&row))?;
        }
        Ok(())
    }

    /// Waits up to `timeout` for one terminal event
    pub fn poll_event(
        &mut self,
        ctl: &Controller,
        timeout: Duration,
    ) -> io::Result<Option<ConsoleEvent>> {
        // make sure an event is present for us to take
        if !event::poll(timeout)? {
            return Ok(None);
        }

        let outp = match event::read()? {
            event::Event::Key(key) => key_command(key).map(ConsoleEvent::Command),
            event::Event::Mouse(mouse) => {
                mouse_command(mouse, ctl, surface()?).map(ConsoleEvent::Command)
            }
            event::Event::Resize(..) => Some(ConsoleEvent::Redraw),
            _ => None,
        };
        Ok(Some(outp.unwrap_or(ConsoleEvent::Ignored)))
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(
            io::stdout(),
            ResetColor,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        ) {
            tracing::error!(?err, "failed to restore terminal");
        }
    }
}
