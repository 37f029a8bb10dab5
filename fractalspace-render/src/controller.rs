//! The view/mode state machine.
//!
//! [`ViewState`] holds every user-selectable setting and transitions by
//! value. [`Controller`] pairs a state with the buffers generated from it and
//! exposes one handler per input command. Each successful command reports
//! which buffers changed so a [`RenderSink`] can re-upload only what it must.

use tracing::{debug, info, warn};

use fractalspace_core::{Complex, FractalMode, FractalParams, JuliaPreset, ViewWindow};

use crate::error::RenderError;
use crate::field::{generate, recolor, FieldBuffers, Shading};
use crate::palette::Palette;

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A discrete input command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Reset,
    CycleMode(Direction),
    CycleJulia(Direction),
    CyclePalette(Direction),
    SetMaxIterations(u32),
    /// Zoom toward a target in `[-1, 1]` window space.
    ZoomIn(Complex),
    ZoomOut(Complex),
}

/// Which buffers a command touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferChange {
    Colors,
    PointsAndColors,
}

/// Receiver of finished frames, typically a window that uploads textures.
pub trait RenderSink {
    /// Called after every successful command with a read-only view of the buffers.
    fn present(&mut self, field: &FieldBuffers, change: BufferChange);
}

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// Every user-selectable setting, plus the current view window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub mode: FractalMode,
    pub palette: Palette,
    pub julia: JuliaPreset,
    pub params: FractalParams,
    pub window: ViewWindow,
}

impl ViewState {
    /// Julia mode, HSV palette, first preset, default cap, unzoomed.
    pub fn initial(window: ViewWindow) -> Self {
        Self {
            mode: FractalMode::default(),
            palette: Palette::default(),
            julia: JuliaPreset::default(),
            params: FractalParams::default(),
            window: window.unzoomed(),
        }
    }

    pub fn shading(&self) -> Shading {
        Shading {
            mode: self.mode,
            julia_c: self.julia.constant(),
            params: self.params,
            palette: self.palette,
        }
    }

    /// Default cap and unzoomed window; mode, palette and preset are kept.
    pub fn reset(self) -> Self {
        Self {
            params: FractalParams::default(),
            window: self.window.unzoomed(),
            ..self
        }
    }

    pub fn cycle_mode(self, direction: Direction) -> Self {
        let mode = match direction {
            Direction::Forward => self.mode.next(),
            Direction::Backward => self.mode.prev(),
        };
        Self { mode, ..self }
    }

    pub fn cycle_julia(self, direction: Direction) -> Self {
        let julia = match direction {
            Direction::Forward => self.julia.next(),
            Direction::Backward => self.julia.prev(),
        };
        Self { julia, ..self }
    }

    pub fn cycle_palette(self, direction: Direction) -> Self {
        let palette = match direction {
            Direction::Forward => self.palette.next(),
            Direction::Backward => self.palette.prev(),
        };
        Self { palette, ..self }
    }

    pub fn with_max_iterations(self, max_iterations: u32) -> crate::Result<Self> {
        Ok(Self {
            params: FractalParams::new(max_iterations)?,
            ..self
        })
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Owns the view state and the buffers generated from it.
pub struct Controller {
    state: ViewState,
    field: FieldBuffers,
}

impl Controller {
    /// Validate the window size and generate the first frame.
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        let window = ViewWindow::new(width, height)?;
        let state = ViewState::initial(window);
        info!(width, height, "Generating points");
        let field = generate(&state.window, &state.shading());
        Ok(Self { state, field })
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn field(&self) -> &FieldBuffers {
        &self.field
    }

    /// Apply a command and hand the result to `sink`.
    ///
    /// Failures are logged and returned; the state is left untouched.
    pub fn dispatch<S: RenderSink + ?Sized>(
        &mut self,
        command: Command,
        sink: &mut S,
    ) -> crate::Result<BufferChange> {
        debug!(?command, "Regenerating");
        match self.apply(command) {
            Ok(change) => {
                sink.present(&self.field, change);
                Ok(change)
            }
            Err(e) => {
                warn!("{e}");
                Err(e)
            }
        }
    }

    /// Apply a command without notifying any sink.
    pub fn apply(&mut self, command: Command) -> crate::Result<BufferChange> {
        match command {
            Command::Reset => Ok(self.reset()),
            Command::CycleMode(direction) => Ok(self.cycle_mode(direction)),
            Command::CycleJulia(direction) => Ok(self.cycle_julia(direction)),
            Command::CyclePalette(direction) => Ok(self.cycle_palette(direction)),
            Command::SetMaxIterations(n) => self.set_max_iterations(n),
            Command::ZoomIn(target) => Ok(self.zoom_in(target)),
            Command::ZoomOut(target) => self.zoom_out(target),
        }
    }

    pub fn reset(&mut self) -> BufferChange {
        info!("Resetting view");
        self.regenerate(self.state.reset())
    }

    pub fn cycle_mode(&mut self, direction: Direction) -> BufferChange {
        let next = self.state.cycle_mode(direction);
        info!("Fractal type changed to {}", next.mode);
        self.regenerate(next)
    }

    pub fn cycle_julia(&mut self, direction: Direction) -> BufferChange {
        let next = self.state.cycle_julia(direction);
        info!(
            index = next.julia.index(),
            "Changing Julia constant to {}",
            next.julia.constant()
        );
        self.regenerate(next)
    }

    pub fn cycle_palette(&mut self, direction: Direction) -> BufferChange {
        let next = self.state.cycle_palette(direction);
        info!("Displaying using {}", next.palette);
        self.regenerate(next)
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> crate::Result<BufferChange> {
        let next = self.state.with_max_iterations(max_iterations)?;
        info!("Maximum number of iterations is now {max_iterations}");
        Ok(self.regenerate(next))
    }

    /// Pull every point halfway toward the buffer midpoint, then shift by
    /// `target` scaled by the current zoom. Halves the zoom level.
    pub fn zoom_in(&mut self, target: Complex) -> BufferChange {
        let center = self.field.midpoint();
        let zoom = self.state.window.zoom;
        for point in &mut self.field.points {
            *point = (*point + center) / 2.0 + target * zoom;
        }
        self.state.window.zoom = zoom / 2.0;
        self.after_transform()
    }

    /// Push every point away from the buffer midpoint by a factor of two.
    ///
    /// Rejected, leaving everything unchanged, unless the zoom level is at
    /// most 0.5. The target is not part of the transform.
    pub fn zoom_out(&mut self, target: Complex) -> crate::Result<BufferChange> {
        let zoom = self.state.window.zoom;
        if !self.state.window.can_zoom_out() {
            return Err(RenderError::ZoomOutLimit { zoom });
        }
        debug!(%target, "Zooming out around buffer midpoint");
        let center = self.field.midpoint();
        for point in &mut self.field.points {
            *point = (*point - center) * 2.0 + center;
        }
        self.state.window.zoom = zoom * 2.0;
        Ok(self.after_transform())
    }

    /// Rebuild both buffers from scratch for `next`, resetting the zoom.
    fn regenerate(&mut self, next: ViewState) -> BufferChange {
        let next = ViewState {
            window: next.window.unzoomed(),
            ..next
        };
        let field = generate(&next.window, &next.shading());
        let change = if field.points == self.field.points {
            BufferChange::Colors
        } else {
            BufferChange::PointsAndColors
        };
        self.state = next;
        self.field = field;
        change
    }

    fn after_transform(&mut self) -> BufferChange {
        self.field.colors = recolor(&self.field.points, &self.state.shading());
        self.state.window.center = self.field.midpoint();
        debug!(
            zoom = self.state.window.zoom,
            center = %self.state.window.center,
            "Transformed points"
        );
        BufferChange::PointsAndColors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        Controller::new(8, 8).unwrap()
    }

    #[test]
    fn initial_state() {
        let c = controller();
        let s = c.state();
        assert_eq!(s.mode, FractalMode::Julia);
        assert_eq!(s.palette, Palette::HsvWheel);
        assert_eq!(s.julia.index(), 0);
        assert_eq!(s.params.max_iterations, 100);
        assert_eq!(s.window.zoom, 1.0);
        assert_eq!(c.field().len(), 64);
    }

    #[test]
    fn rejects_empty_window() {
        assert!(matches!(
            Controller::new(0, 8),
            Err(RenderError::Core(_))
        ));
    }

    #[test]
    fn view_state_transitions_are_pure() {
        let s = *controller().state();
        let t = s.cycle_mode(Direction::Forward).cycle_palette(Direction::Backward);
        assert_eq!(s.mode, FractalMode::Julia);
        assert_eq!(t.mode, FractalMode::Mandelbrot);
        assert_eq!(t.palette, Palette::RgbShift25);
        assert_eq!(t.julia, s.julia);
    }

    #[test]
    fn reset_keeps_selections() {
        let mut c = controller();
        c.cycle_mode(Direction::Forward);
        c.cycle_palette(Direction::Forward);
        c.set_max_iterations(7).unwrap();
        c.zoom_in(Complex::ZERO);
        c.reset();
        let s = c.state();
        assert_eq!(s.mode, FractalMode::Mandelbrot);
        assert_eq!(s.palette, Palette::RgbShift23);
        assert_eq!(s.params.max_iterations, 100);
        assert_eq!(s.window.zoom, 1.0);
    }

    #[test]
    fn invalid_cap_is_rejected() {
        let mut c = controller();
        let before = c.field().clone();
        assert!(matches!(
            c.set_max_iterations(0),
            Err(RenderError::Core(_))
        ));
        assert_eq!(c.state().params.max_iterations, 100);
        assert_eq!(c.field(), &before);
    }

    #[test]
    fn regenerate_on_unzoomed_grid_reports_colors_only() {
        let mut c = controller();
        assert_eq!(c.cycle_palette(Direction::Forward), BufferChange::Colors);
        assert_eq!(c.cycle_julia(Direction::Backward), BufferChange::Colors);
    }

    #[test]
    fn regenerate_after_zoom_reports_points() {
        let mut c = controller();
        assert_eq!(c.zoom_in(Complex::new(0.5, 0.5)), BufferChange::PointsAndColors);
        assert_eq!(c.cycle_mode(Direction::Forward), BufferChange::PointsAndColors);
        assert_eq!(c.state().window.zoom, 1.0);
    }

    #[test]
    fn zoom_in_transform() {
        let mut c = controller();
        let before = c.field().points.clone();
        let center = c.field().midpoint();
        let target = Complex::new(0.25, -0.5);
        c.zoom_in(target);
        for (old, new) in before.iter().zip(&c.field().points) {
            assert_eq!(*new, (*old + center) / 2.0 + target * 1.0);
        }
        assert_eq!(c.state().window.zoom, 0.5);
        assert_eq!(c.state().window.center, c.field().midpoint());
    }

    #[test]
    fn zoom_out_rejected_when_unzoomed() {
        let mut c = controller();
        let before = c.field().clone();
        let err = c.zoom_out(Complex::ZERO).unwrap_err();
        assert!(matches!(err, RenderError::ZoomOutLimit { zoom } if zoom == 1.0));
        assert_eq!(c.field(), &before);
        assert_eq!(c.state().window.zoom, 1.0);
    }

    struct CountingSink {
        frames: Vec<BufferChange>,
    }

    impl RenderSink for CountingSink {
        fn present(&mut self, field: &FieldBuffers, change: BufferChange) {
            assert_eq!(field.points.len(), field.colors.len());
            self.frames.push(change);
        }
    }

    #[test]
    fn dispatch_presents_only_on_success() {
        let mut c = controller();
        let mut sink = CountingSink { frames: Vec::new() };
        assert!(c.dispatch(Command::ZoomOut(Complex::ZERO), &mut sink).is_err());
        assert!(sink.frames.is_empty());
        c.dispatch(Command::ZoomIn(Complex::ZERO), &mut sink).unwrap();
        c.dispatch(Command::CyclePalette(Direction::Forward), &mut sink)
            .unwrap();
        assert_eq!(
            sink.frames,
            [BufferChange::PointsAndColors, BufferChange::PointsAndColors]
        );
    }
}
