use crate::core::data::grid_size::GridSize;
use crate::core::data::palette::{Palette, PaletteError, PaletteParams};
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::snapshot::RenderSnapshot;
use crate::core::data::viewport::Viewport;
use crate::core::history::{HistoryError, RenderHistory};
use crate::core::render::dispatch::render_dispatch;
use crate::core::render::renderers::RenderError;
use std::error::Error;
use std::fmt;

pub const MIN_PRECISION: u32 = 100;
pub const MAX_PRECISION: u32 = 1000;
pub const PRECISION_STEP: u32 = 100;

#[derive(Debug)]
pub enum SetError {
    Palette(PaletteError),
    Render(RenderError),
    History(HistoryError),
    PrecisionOutOfRange { precision: u32 },
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(err) => write!(f, "palette error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::History(err) => write!(f, "history error: {}", err),
            Self::PrecisionOutOfRange { precision } => {
                write!(
                    f,
                    "precision {} outside of range [{}, {}]",
                    precision, MIN_PRECISION, MAX_PRECISION
                )
            }
        }
    }
}

impl Error for SetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Palette(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::History(err) => Some(err),
            Self::PrecisionOutOfRange { .. } => None,
        }
    }
}

impl From<PaletteError> for SetError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<RenderError> for SetError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<HistoryError> for SetError {
    fn from(err: HistoryError) -> Self {
        Self::History(err)
    }
}

/// A user intent from the input layer, already resolved to an engine
/// operation (the input layer owns hit-testing and the click-to-button
/// mapping).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    ZoomIn(Point),
    ZoomOut,
    IncreasePrecision,
    DecreasePrecision,
    ChangePalette(PaletteParams),
}

/// Facade over the rendering engine: owns the viewport, palette, history and
/// precision, and funnels every mutation through `&mut self` so commands are
/// naturally serialised.
#[derive(Debug)]
pub struct MandelbrotSet {
    size: GridSize,
    viewport: Viewport,
    palette: Palette,
    history: RenderHistory,
    grid: PixelGrid,
    max_iteration: u32,
}

impl MandelbrotSet {
    /// Builds the engine and performs the initial render, which seeds the
    /// history with the zoom-level-1 snapshot.
    pub fn new(
        size: GridSize,
        params: &PaletteParams,
        max_iteration: u32,
    ) -> Result<Self, SetError> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&max_iteration) {
            return Err(SetError::PrecisionOutOfRange {
                precision: max_iteration,
            });
        }

        let palette = Palette::generate(params)?;
        let mut set = Self {
            size,
            viewport: Viewport::initial(),
            palette,
            history: RenderHistory::new(),
            grid: PixelGrid::new(size),
            max_iteration,
        };

        set.render(true)?;
        Ok(set)
    }

    pub fn apply(&mut self, command: Command) -> Result<(), SetError> {
        match command {
            Command::ZoomIn(pixel) => self.zoom_in(pixel),
            Command::ZoomOut => self.zoom_out(),
            Command::IncreasePrecision => self.increase_precision(),
            Command::DecreasePrecision => self.decrease_precision(),
            Command::ChangePalette(params) => self.change_palette(&params),
        }
    }

    /// Zooms in on the clicked pixel and re-renders, growing the history.
    /// Silently ignored at the zoom cap: no render, no duplicate snapshot.
    pub fn zoom_in(&mut self, pixel: Point) -> Result<(), SetError> {
        if !self.viewport.zoom_in(pixel, self.size) {
            return Ok(());
        }

        self.render(true)
    }

    /// Restores the previous rendering from the history, never recomputing.
    /// Silently ignored at zoom level 1, which has nothing to return to.
    pub fn zoom_out(&mut self) -> Result<(), SetError> {
        if self.viewport.zoom() == 1 {
            return Ok(());
        }

        // Discard the current rendering; the one beneath becomes live again
        // while staying on the stack as the new top.
        self.history.pop()?;
        let restored = self.history.top().ok_or(HistoryError::Empty)?.clone();

        self.grid = restored.grid;
        self.viewport = restored.viewport;
        Ok(())
    }

    /// Raises the iteration cap one step and re-renders in place. A precision
    /// change is not an undoable zoom, so the history is untouched.
    pub fn increase_precision(&mut self) -> Result<(), SetError> {
        if self.max_iteration >= MAX_PRECISION {
            return Ok(());
        }

        self.max_iteration += PRECISION_STEP;
        self.render(false)
    }

    pub fn decrease_precision(&mut self) -> Result<(), SetError> {
        if self.max_iteration <= MIN_PRECISION {
            return Ok(());
        }

        self.max_iteration -= PRECISION_STEP;
        self.render(false)
    }

    /// Regenerates the palette and re-renders, replacing the history top in
    /// place so a colour change does not cost the user a zoom-out step.
    pub fn change_palette(&mut self, params: &PaletteParams) -> Result<(), SetError> {
        let palette = Palette::generate(params)?;

        self.history.pop()?;
        self.palette = palette;
        self.render(true)
    }

    fn render(&mut self, push_to_history: bool) -> Result<(), SetError> {
        self.grid = render_dispatch(self.viewport, self.size, &self.palette, self.max_iteration)?;

        if push_to_history {
            self.history.push(RenderSnapshot {
                grid: self.grid.clone(),
                viewport: self.viewport,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn zoom(&self) -> u64 {
        self.viewport.zoom()
    }

    #[must_use]
    pub fn precision(&self) -> u32 {
        self.max_iteration
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Zoom level the display layer shows, e.g. `"3x"`.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{}x", self.viewport.zoom())
    }

    /// Precision as the percentage the display layer shows, e.g. `"10%"`.
    #[must_use]
    pub fn precision_label(&self) -> String {
        format!("{}%", self.max_iteration / 10)
    }
}
