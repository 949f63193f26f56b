// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use parallax_core::time::HostTime;
use parallax_core::trace::{
    DegenerateSizeEvent, LevelAddedEvent, ResetEvent, ResetReason, SettleFrameEvent,
    TiltAppliedEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn host_us(t: HostTime) -> f64 {
    t.as_nanos() as f64 / 1000.0
}

fn reason_name(reason: ResetReason) -> &'static str {
    match reason {
        ResetReason::PointerUp => "up",
        ResetReason::PointerCancel => "cancel",
        ResetReason::Explicit => "explicit",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_level_added(&mut self, e: &LevelAddedEvent) {
        let _ = writeln!(
            self.writer,
            "[level] level={} views={}",
            e.level, e.views_at_level,
        );
    }

    fn on_tilt_applied(&mut self, e: &TiltAppliedEvent) {
        let _ = writeln!(
            self.writer,
            "[tilt] at=({:.1}, {:.1}) norm=({:.3}, {:.3}) pressure={:.3}° levels={}",
            e.point.x,
            e.point.y,
            e.sample.x_norm,
            e.sample.y_norm,
            e.sample.pressure,
            e.levels,
        );
    }

    fn on_reset(&mut self, e: &ResetEvent) {
        let mode = if e.animated { "settle" } else { "snap" };
        let _ = writeln!(self.writer, "[reset] {} {mode}", reason_name(e.reason));
    }

    fn on_settle_frame(&mut self, e: &SettleFrameEvent) {
        let done = if e.finished { " done" } else { "" };
        let _ = writeln!(
            self.writer,
            "[settle] at {:.1}µs progress={:.3}{done}",
            host_us(e.now),
            e.progress,
        );
    }

    fn on_degenerate_size(&mut self, e: &DegenerateSizeEvent) {
        let _ = writeln!(
            self.writer,
            "[degenerate] size={}x{}",
            e.size.width, e.size.height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parallax_core::kurbo::{Point, Size};
    use parallax_core::tilt::TiltSample;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_tilt() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_tilt_applied(&TiltAppliedEvent {
            point: Point::new(150.0, 50.0),
            sample: TiltSample {
                x_norm: 0.5,
                y_norm: 0.5,
                pressure: 2.121_320_343_559_642,
            },
            levels: 2,
        });
        let output = output(sink);
        assert!(output.starts_with("[tilt]"), "got: {output}");
        assert!(output.contains("at=(150.0, 50.0)"), "got: {output}");
        assert!(output.contains("pressure=2.121"), "got: {output}");
        assert!(output.contains("levels=2"), "got: {output}");
    }

    #[test]
    fn pretty_print_reset_and_settle() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_reset(&ResetEvent {
            reason: ResetReason::PointerCancel,
            animated: true,
        });
        sink.on_settle_frame(&SettleFrameEvent {
            now: HostTime(2_500),
            progress: 1.0,
            finished: true,
        });
        let output = output(sink);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines, ["[reset] cancel settle", "[settle] at 2.5µs progress=1.000 done"]);
    }

    #[test]
    fn pretty_print_level_and_degenerate() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_level_added(&LevelAddedEvent {
            level: 3,
            views_at_level: 2,
        });
        sink.on_degenerate_size(&DegenerateSizeEvent {
            size: Size::new(0.0, 40.0),
        });
        let output = output(sink);
        assert!(output.contains("[level] level=3 views=2"), "got: {output}");
        assert!(output.contains("[degenerate] size=0x40"), "got: {output}");
    }
}
