use lesson_core::ChartSeries;
use tracing::debug;

use crate::error::ChartError;

/// A live chart owned by the charting library.
pub trait ChartHandle {
    /// Release the chart and its canvas bindings.
    fn dispose(&mut self);
}

/// The drawing surface a chart is bound to.
pub trait ChartSurface {
    /// Draw `series` and hand back the live chart.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::CanvasMissing` if there is nothing to draw on, or
    /// `ChartError::Unavailable` if the charting library is not loaded.
    fn draw(&self, series: &ChartSeries) -> Result<Box<dyn ChartHandle>, ChartError>;
}

/// Identifies one scheduled render; only the latest ticket may draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn,
    Skipped(Option<ChartError>),
    Superseded,
}

/// Keeps at most one live chart and decides which deferred render may run.
///
/// Every `schedule` supersedes the previous pending render. A render disposes
/// the previous chart before drawing the new one.
#[derive(Default)]
pub struct ChartController {
    generation: u64,
    pending: Option<(RenderTicket, ChartSeries)>,
    live: Option<Box<dyn ChartHandle>>,
}

impl ChartController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, series: ChartSeries) -> RenderTicket {
        self.generation += 1;
        let ticket = RenderTicket(self.generation);
        self.pending = Some((ticket, series));
        ticket
    }

    /// Drop any pending render without touching the live chart.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self, ticket: RenderTicket) -> bool {
        matches!(self.pending, Some((pending, _)) if pending == ticket)
    }

    #[must_use]
    pub fn has_live_chart(&self) -> bool {
        self.live.is_some()
    }

    pub fn render(&mut self, ticket: RenderTicket, surface: &dyn ChartSurface) -> RenderOutcome {
        let series = match self.pending.take() {
            Some((pending, series)) if pending == ticket => series,
            other => {
                self.pending = other;
                debug!(?ticket, "chart render superseded");
                return RenderOutcome::Superseded;
            }
        };

        self.clear();

        if series.is_empty() {
            debug!("chart render skipped: no data");
            return RenderOutcome::Skipped(None);
        }

        match surface.draw(&series) {
            Ok(handle) => {
                self.live = Some(handle);
                RenderOutcome::Drawn
            }
            Err(err) => {
                debug!(error = %err, "chart render skipped");
                RenderOutcome::Skipped(Some(err))
            }
        }
    }

    /// Dispose the live chart, if any.
    pub fn clear(&mut self) {
        if let Some(mut handle) = self.live.take() {
            handle.dispose();
        }
    }
}
