// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].

use parallax_core::kurbo::{Point, Size};
use parallax_core::tilt::TiltSample;
use parallax_core::time::HostTime;
use parallax_core::trace::{
    DegenerateSizeEvent, LevelAddedEvent, ResetEvent, ResetReason, SettleFrameEvent,
    TiltAppliedEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_LEVEL_ADDED: u8 = 1;
const TAG_TILT_APPLIED: u8 = 2;
const TAG_RESET: u8 = 3;
const TAG_SETTLE_FRAME: u8 = 4;
const TAG_DEGENERATE_SIZE: u8 = 5;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_count(&mut self, v: usize) {
        self.write_u64(u64::try_from(v).unwrap_or(u64::MAX));
    }

    fn write_reason(&mut self, r: ResetReason) {
        self.write_u8(match r {
            ResetReason::PointerUp => 0,
            ResetReason::PointerCancel => 1,
            ResetReason::Explicit => 2,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_level_added(&mut self, e: &LevelAddedEvent) {
        self.write_u8(TAG_LEVEL_ADDED);
        self.write_u32(e.level);
        self.write_count(e.views_at_level);
    }

    fn on_tilt_applied(&mut self, e: &TiltAppliedEvent) {
        self.write_u8(TAG_TILT_APPLIED);
        self.write_f64(e.point.x);
        self.write_f64(e.point.y);
        self.write_f64(e.sample.x_norm);
        self.write_f64(e.sample.y_norm);
        self.write_f64(e.sample.pressure);
        self.write_count(e.levels);
    }

    fn on_reset(&mut self, e: &ResetEvent) {
        self.write_u8(TAG_RESET);
        self.write_reason(e.reason);
        self.write_u8(u8::from(e.animated));
    }

    fn on_settle_frame(&mut self, e: &SettleFrameEvent) {
        self.write_u8(TAG_SETTLE_FRAME);
        self.write_u64(e.now.as_nanos());
        self.write_f64(e.progress);
        self.write_u8(u8::from(e.finished));
    }

    fn on_degenerate_size(&mut self, e: &DegenerateSizeEvent) {
        self.write_u8(TAG_DEGENERATE_SIZE);
        self.write_f64(e.size.width);
        self.write_f64(e.size.height);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`LevelAddedEvent`].
    LevelAdded(LevelAddedEvent),
    /// A [`TiltAppliedEvent`].
    TiltApplied(TiltAppliedEvent),
    /// A [`ResetEvent`].
    Reset(ResetEvent),
    /// A [`SettleFrameEvent`].
    SettleFrame(SettleFrameEvent),
    /// A [`DegenerateSizeEvent`].
    DegenerateSize(DegenerateSizeEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
///
/// Stops at the first unknown tag or truncated record.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.take().map(f64::from_le_bytes)
    }

    fn read_count(&mut self) -> Option<usize> {
        Some(usize::try_from(self.read_u64()?).unwrap_or(usize::MAX))
    }

    fn read_bool(&mut self) -> Option<bool> {
        Some(self.read_u8()? != 0)
    }

    fn read_reason(&mut self) -> Option<ResetReason> {
        Some(match self.read_u8()? {
            0 => ResetReason::PointerUp,
            1 => ResetReason::PointerCancel,
            _ => ResetReason::Explicit,
        })
    }

    fn decode_level_added(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::LevelAdded(LevelAddedEvent {
            level: self.read_u32()?,
            views_at_level: self.read_count()?,
        }))
    }

    fn decode_tilt_applied(&mut self) -> Option<RecordedEvent> {
        let point = Point::new(self.read_f64()?, self.read_f64()?);
        let sample = TiltSample {
            x_norm: self.read_f64()?,
            y_norm: self.read_f64()?,
            pressure: self.read_f64()?,
        };
        Some(RecordedEvent::TiltApplied(TiltAppliedEvent {
            point,
            sample,
            levels: self.read_count()?,
        }))
    }

    fn decode_reset(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Reset(ResetEvent {
            reason: self.read_reason()?,
            animated: self.read_bool()?,
        }))
    }

    fn decode_settle_frame(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::SettleFrame(SettleFrameEvent {
            now: HostTime(self.read_u64()?),
            progress: self.read_f64()?,
            finished: self.read_bool()?,
        }))
    }

    fn decode_degenerate_size(&mut self) -> Option<RecordedEvent> {
        let size = Size::new(self.read_f64()?, self.read_f64()?);
        Some(RecordedEvent::DegenerateSize(DegenerateSizeEvent { size }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_LEVEL_ADDED => self.decode_level_added(),
            TAG_TILT_APPLIED => self.decode_tilt_applied(),
            TAG_RESET => self.decode_reset(),
            TAG_SETTLE_FRAME => self.decode_settle_frame(),
            TAG_DEGENERATE_SIZE => self.decode_degenerate_size(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use parallax_core::backend::Presenter;
    use parallax_core::config::TiltConfig;
    use parallax_core::container::TiltContainer;
    use parallax_core::kurbo::Affine;
    use parallax_core::trace::Tracer;
    use parallax_core::transform::Transform3d;

    struct NullPresenter(Size);

    impl Presenter for NullPresenter {
        type View = ();

        fn size(&self) -> Size {
            self.0
        }

        fn attach_child(&mut self, _: &()) {}

        fn set_container_transform(&mut self, _: Transform3d) {}

        fn set_child_transform(&mut self, _: &(), _: Affine) {}
    }

    #[test]
    fn records_a_container_session() {
        let mut rec = RecorderSink::new();
        let mut c = TiltContainer::new(NullPresenter(Size::new(200.0, 200.0)), TiltConfig::new());
        {
            let mut tracer = Tracer::new(&mut rec);
            c.add_child_at_level_traced((), 1, &mut tracer);
            c.press_traced(Point::new(150.0, 50.0), &mut tracer);
            c.release_traced(HostTime(0), ResetReason::PointerUp, &mut tracer);
            c.advance_traced(HostTime(1_000_000_000), &mut tracer);
        }

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0],
            RecordedEvent::LevelAdded(LevelAddedEvent {
                level: 1,
                views_at_level: 1,
            })
        );
        match &events[1] {
            RecordedEvent::TiltApplied(e) => {
                assert_eq!(e.point, Point::new(150.0, 50.0));
                assert!((e.sample.x_norm - 0.5).abs() < 1e-12);
                assert!((e.sample.y_norm - 0.5).abs() < 1e-12);
                assert_eq!(e.levels, 1);
            }
            other => panic!("expected TiltApplied, got {other:?}"),
        }
        assert_eq!(
            events[2],
            RecordedEvent::Reset(ResetEvent {
                reason: ResetReason::PointerUp,
                animated: true,
            })
        );
        assert_eq!(
            events[3],
            RecordedEvent::SettleFrame(SettleFrameEvent {
                now: HostTime(1_000_000_000),
                progress: 1.0,
                finished: true,
            })
        );
    }

    #[test]
    fn degenerate_size_round_trips() {
        let mut rec = RecorderSink::new();
        rec.on_degenerate_size(&DegenerateSizeEvent {
            size: Size::new(0.0, 12.5),
        });
        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(
            events,
            [RecordedEvent::DegenerateSize(DegenerateSizeEvent {
                size: Size::new(0.0, 12.5),
            })]
        );
    }

    #[test]
    fn truncated_record_stops_decoding() {
        let mut rec = RecorderSink::new();
        rec.on_reset(&ResetEvent {
            reason: ResetReason::Explicit,
            animated: false,
        });
        rec.on_settle_frame(&SettleFrameEvent {
            now: HostTime(5),
            progress: 0.25,
            finished: false,
        });
        let bytes = rec.into_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 3]).collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], RecordedEvent::Reset(_)));
    }

    #[test]
    fn unknown_tag_stops_decoding() {
        let events: Vec<_> = decode(&[0xFF, 1, 2, 3]).collect();
        assert!(events.is_empty());
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }
}
