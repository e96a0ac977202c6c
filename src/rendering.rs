use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::{Attribute, Print, SetAttribute},
};
use log::info;

use crate::constants::BORDER_OFFSET;
use crate::types::Borders;

/// Intensity hint for a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    Dim,
    #[default]
    Normal,
    Bold,
}

// --- ScreenBuffer for simulated rendering ---
pub struct ScreenBuffer {
    pub buffer: Vec<Vec<char>>,
    pub styles: Vec<Vec<Style>>,
    pub width: u16,
    pub height: u16,
    pub beeps: u32,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        ScreenBuffer {
            buffer: vec![vec![' '; width as usize]; height as usize],
            styles: vec![vec![Style::Normal; width as usize]; height as usize],
            width,
            height,
            beeps: 0,
        }
    }

    pub fn set_char(&mut self, row: u16, column: u16, c: char, style: Style) {
        if row < self.height && column < self.width {
            self.buffer[row as usize][column as usize] = c;
            self.styles[row as usize][column as usize] = style;
        }
    }

    #[cfg(test)]
    pub fn char_at(&self, row: u16, column: u16) -> char {
        self.buffer[row as usize][column as usize]
    }

    #[cfg(test)]
    pub fn style_at(&self, row: u16, column: u16) -> Style {
        self.styles[row as usize][column as usize]
    }

    #[cfg(test)]
    pub fn row_text(&self, row: u16) -> String {
        self.buffer[row as usize].iter().collect()
    }

    #[cfg(test)]
    pub fn count_char(&self, c: char) -> usize {
        self.buffer.iter().flatten().filter(|&&cell| cell == c).count()
    }

    pub fn print_to_log(&self) {
        info!("--- Screen Buffer ---");
        for row in &self.buffer {
            info!("{}", row.iter().collect::<String>());
        }
        info!("---------------------");
    }
}

// --- OutputTarget enum to handle stdout or ScreenBuffer ---
pub enum OutputTarget {
    Stdout(io::Stdout),
    ScreenBuffer(ScreenBuffer),
}

impl OutputTarget {
    pub fn execute_other_command(&mut self, command: impl crossterm::Command) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(_) => Ok(()), // Ignore in debug mode
        }
    }
}

/// Fixed-size character grid every actor draws on.
pub struct Canvas {
    target: OutputTarget,
    height: u16,
    width: u16,
    log_frames: bool,
}

impl Canvas {
    pub fn new(target: OutputTarget, width: u16, height: u16) -> Self {
        Canvas { target, height, width, log_frames: false }
    }

    pub fn in_memory(width: u16, height: u16) -> Self {
        Canvas::new(OutputTarget::ScreenBuffer(ScreenBuffer::new(width, height)), width, height)
    }

    /// Dump every refreshed screen into the log, for debug runs.
    pub fn with_frame_logging(mut self, enabled: bool) -> Self {
        self.log_frames = enabled;
        self
    }

    pub fn height(&self) -> i32 {
        self.height as i32
    }

    pub fn width(&self) -> i32 {
        self.width as i32
    }

    pub fn target_mut(&mut self) -> &mut OutputTarget {
        &mut self.target
    }

    #[cfg(test)]
    pub fn screen(&self) -> Option<&ScreenBuffer> {
        match &self.target {
            OutputTarget::ScreenBuffer(sb) => Some(sb),
            OutputTarget::Stdout(_) => None,
        }
    }

    pub fn borders(&self) -> Borders {
        Borders {
            row_min: BORDER_OFFSET,
            row_max: self.height() - BORDER_OFFSET,
            column_min: BORDER_OFFSET,
            column_max: self.width() - BORDER_OFFSET,
        }
    }

    /// Write one cell. Cells off the canvas and the bottom-right corner are skipped.
    pub fn write_cell(&mut self, row: i32, column: i32, c: char, style: Style) -> io::Result<()> {
        if row < 0 || column < 0 || row >= self.height() || column >= self.width() {
            return Ok(());
        }
        // Writing the last cell scrolls a real terminal
        if row == self.height() - 1 && column == self.width() - 1 {
            return Ok(());
        }
        match &mut self.target {
            OutputTarget::Stdout(s) => {
                let attribute = match style {
                    Style::Dim => Attribute::Dim,
                    Style::Normal => Attribute::NormalIntensity,
                    Style::Bold => Attribute::Bold,
                };
                queue!(s, MoveTo(column as u16, row as u16), SetAttribute(attribute), Print(c), SetAttribute(Attribute::Reset))
            }
            OutputTarget::ScreenBuffer(sb) => {
                sb.set_char(row as u16, column as u16, c, style);
                Ok(())
            }
        }
    }

    /// Draw a multiline text fragment, or erase it when `negative` is set.
    ///
    /// Spaces inside the fragment are transparent in both modes, so erasing
    /// a frame only blanks the cells the same frame painted.
    pub fn draw_frame(&mut self, start_row: f64, start_column: f64, text: &str, negative: bool) -> io::Result<()> {
        self.draw_frame_styled(start_row, start_column, text, negative, Style::Normal)
    }

    pub fn draw_frame_styled(
        &mut self,
        start_row: f64,
        start_column: f64,
        text: &str,
        negative: bool,
        style: Style,
    ) -> io::Result<()> {
        let first_row = start_row.round() as i32;
        let first_column = start_column.round() as i32;

        for (row, line) in (first_row..).zip(text.lines()) {
            if row < 0 {
                continue;
            }
            if row >= self.height() {
                break;
            }
            for (column, symbol) in (first_column..).zip(line.chars()) {
                if column < 0 {
                    continue;
                }
                if column >= self.width() {
                    break;
                }
                if symbol == ' ' {
                    continue;
                }
                let symbol = if negative { ' ' } else { symbol };
                self.write_cell(row, column, symbol, style)?;
            }
        }
        Ok(())
    }

    pub fn draw_border(&mut self) -> io::Result<()> {
        let bottom = self.height() - 1;
        let right = self.width() - 1;
        for column in 1..right {
            self.write_cell(0, column, '-', Style::Normal)?;
            self.write_cell(bottom, column, '-', Style::Normal)?;
        }
        for row in 1..bottom {
            self.write_cell(row, 0, '|', Style::Normal)?;
            self.write_cell(row, right, '|', Style::Normal)?;
        }
        for (row, column) in [(0, 0), (0, right), (bottom, 0), (bottom, right)] {
            self.write_cell(row, column, '+', Style::Normal)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> io::Result<()> {
        for row in 0..self.height() {
            for column in 0..self.width() {
                self.write_cell(row, column, ' ', Style::Normal)?;
            }
        }
        Ok(())
    }

    /// Fire-and-forget audible cue.
    pub fn beep(&mut self) -> io::Result<()> {
        match &mut self.target {
            OutputTarget::Stdout(s) => queue!(s, Print('\x07')),
            OutputTarget::ScreenBuffer(sb) => {
                sb.beeps += 1;
                Ok(())
            }
        }
    }

    /// Push everything drawn since the last refresh to the screen.
    pub fn refresh(&mut self) -> io::Result<()> {
        match &mut self.target {
            OutputTarget::Stdout(s) => s.flush(),
            OutputTarget::ScreenBuffer(sb) => {
                if self.log_frames {
                    sb.print_to_log();
                }
                Ok(())
            }
        }
    }
}
