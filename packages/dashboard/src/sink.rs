//! Output sinks for dashboard snapshots.

use std::io::Write;

use airbnb_dashboard_models::view::{
    BarView, BubbleView, ChartView, DashboardSnapshot, DonutView, MapView, RadialView,
};
use console::style;

use crate::{DashboardError, format};

/// Destination for rendered dashboard snapshots.
pub trait Sink {
    /// Writes one snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if serializing or writing fails.
    fn write(&mut self, snapshot: &DashboardSnapshot) -> Result<(), DashboardError>;
}

/// Writes snapshots as pretty-printed JSON.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    /// Wraps a writer.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for JsonSink<W> {
    fn write(&mut self, snapshot: &DashboardSnapshot) -> Result<(), DashboardError> {
        serde_json::to_writer_pretty(&mut self.out, snapshot)?;
        writeln!(self.out)?;
        Ok(())
    }
}

/// Writes a plain-text summary of every chart for terminals.
pub struct TextSink<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> TextSink<W> {
    /// Wraps a writer. `styled` enables bold headings.
    #[must_use]
    pub const fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    /// Returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn heading(&mut self, text: &str) -> std::io::Result<()> {
        if self.styled {
            writeln!(self.out, "{}", style(text).bold().cyan())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    fn map(&mut self, view: &MapView) -> std::io::Result<()> {
        self.heading(&view.title)?;
        for region in &view.regions {
            let marker = if region.highlighted { "*" } else { " " };
            match &region.stats {
                Some(stats) => writeln!(
                    self.out,
                    " {marker} {:<24} {:>14}  {} listings",
                    region.name,
                    format::dollars(stats.revenue),
                    format::count(stats.listings)
                )?,
                None => writeln!(self.out, " {marker} {:<24} {:>14}", region.name, "no data")?,
            }
        }
        if let Some(legend) = &view.legend {
            writeln!(self.out, "   legend: {} .. {}", legend.min_label, legend.max_label)?;
        }
        Ok(())
    }

    fn radial(&mut self, view: &RadialView) -> std::io::Result<()> {
        self.heading(&view.title)?;
        writeln!(
            self.out,
            "   Number of Bars: {} of {}",
            view.slider.value, view.slider.max
        )?;
        for bar in &view.bars {
            writeln!(
                self.out,
                "   {:<24} {:>14}",
                bar.label,
                format::dollars(bar.revenue)
            )?;
        }
        Ok(())
    }

    fn donut(&mut self, view: &DonutView) -> std::io::Result<()> {
        self.heading(&view.title)?;
        for slice in &view.slices {
            let marker = if slice.selected { "*" } else { " " };
            writeln!(self.out, " {marker} {}", slice.label)?;
        }
        Ok(())
    }

    fn bar(&mut self, view: &BarView) -> std::io::Result<()> {
        self.heading(&view.title)?;
        writeln!(self.out, "   ({} / {})", view.axis.x, view.axis.y)?;
        for (i, bar) in view.bars.iter().enumerate() {
            let marker = if bar.selected { "*" } else { " " };
            writeln!(
                self.out,
                " {marker} {:>2}. {:<24} {:>14}",
                i + 1,
                bar.label,
                format::abbreviate(bar.stats.total_revenue)
            )?;
        }
        if !view.interactive {
            writeln!(self.out, "   (not clickable while a city is selected)")?;
        }
        Ok(())
    }

    fn bubble(&mut self, view: &BubbleView) -> std::io::Result<()> {
        if let Some(placeholder) = &view.placeholder {
            self.heading("Reviews")?;
            writeln!(self.out, "   {placeholder}")?;
        } else {
            self.heading(&view.title)?;
        }
        for bubble in &view.bubbles {
            writeln!(
                self.out,
                "   {:<24} {:>10} reviews",
                bubble.caption,
                format::count(bubble.reviews)
            )?;
        }
        if view.back_visible {
            writeln!(self.out, "   [back]")?;
        }
        Ok(())
    }
}

impl<W: Write> Sink for TextSink<W> {
    fn write(&mut self, snapshot: &DashboardSnapshot) -> Result<(), DashboardError> {
        let selection = &snapshot.selection;
        writeln!(
            self.out,
            "Selection: country={} city={} room type={}",
            selection.country().unwrap_or("-"),
            selection.city().unwrap_or("-"),
            selection.room_type().unwrap_or("-")
        )?;
        writeln!(
            self.out,
            "Country dropdown: {} of {} countries",
            if snapshot.dropdown.value.is_empty() {
                "(none)"
            } else {
                snapshot.dropdown.value.as_str()
            },
            snapshot.dropdown.options.len()
        )?;

        for chart in &snapshot.charts {
            writeln!(self.out)?;
            match chart {
                ChartView::Map(view) => self.map(view)?,
                ChartView::Radial(view) => self.radial(view)?,
                ChartView::Donut(view) => self.donut(view)?,
                ChartView::Bar(view) => self.bar(view)?,
                ChartView::Bubble(view) => self.bubble(view)?,
            }
        }
        Ok(())
    }
}
