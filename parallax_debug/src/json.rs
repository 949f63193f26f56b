// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter for recorded sessions.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes a JSON array with one object per event. Each object carries a
//! sequence number, the event name, and its fields under `args`.

use std::io::{self, Write};

use serde_json::{Value, json};

use parallax_core::trace::ResetReason;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = decode(bytes)
        .enumerate()
        .map(|(seq, recorded)| event_json(seq, &recorded))
        .collect();

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn event_json(seq: usize, recorded: &RecordedEvent) -> Value {
    match recorded {
        RecordedEvent::LevelAdded(e) => json!({
            "seq": seq,
            "name": "LevelAdded",
            "args": {
                "level": e.level,
                "views_at_level": e.views_at_level,
            }
        }),
        RecordedEvent::TiltApplied(e) => json!({
            "seq": seq,
            "name": "TiltApplied",
            "args": {
                "x": e.point.x,
                "y": e.point.y,
                "x_norm": e.sample.x_norm,
                "y_norm": e.sample.y_norm,
                "pressure": e.sample.pressure,
                "levels": e.levels,
            }
        }),
        RecordedEvent::Reset(e) => json!({
            "seq": seq,
            "name": "Reset",
            "args": {
                "reason": reason_name(e.reason),
                "animated": e.animated,
            }
        }),
        RecordedEvent::SettleFrame(e) => json!({
            "seq": seq,
            "name": "SettleFrame",
            "args": {
                "now_ns": e.now.as_nanos(),
                "progress": e.progress,
                "finished": e.finished,
            }
        }),
        RecordedEvent::DegenerateSize(e) => json!({
            "seq": seq,
            "name": "DegenerateSize",
            "args": {
                "width": e.size.width,
                "height": e.size.height,
            }
        }),
    }
}

fn reason_name(reason: ResetReason) -> &'static str {
    match reason {
        ResetReason::PointerUp => "PointerUp",
        ResetReason::PointerCancel => "PointerCancel",
        ResetReason::Explicit => "Explicit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use parallax_core::kurbo::Point;
    use parallax_core::tilt::TiltSample;
    use parallax_core::time::HostTime;
    use parallax_core::trace::{
        LevelAddedEvent, ResetEvent, SettleFrameEvent, TiltAppliedEvent, TraceSink,
    };

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_level_added(&LevelAddedEvent {
            level: 1,
            views_at_level: 1,
        });
        rec.on_tilt_applied(&TiltAppliedEvent {
            point: Point::new(150.0, 50.0),
            sample: TiltSample {
                x_norm: 0.5,
                y_norm: 0.5,
                pressure: 2.0,
            },
            levels: 1,
        });
        rec.on_reset(&ResetEvent {
            reason: ResetReason::PointerUp,
            animated: true,
        });
        rec.on_settle_frame(&SettleFrameEvent {
            now: HostTime(16_000_000),
            progress: 0.05,
            finished: false,
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 4);

        assert_eq!(parsed[0]["seq"], 0);
        assert_eq!(parsed[0]["name"], "LevelAdded");
        assert_eq!(parsed[0]["args"]["level"], 1);

        assert_eq!(parsed[1]["name"], "TiltApplied");
        assert_eq!(parsed[1]["args"]["x_norm"], 0.5);
        assert_eq!(parsed[1]["args"]["pressure"], 2.0);

        assert_eq!(parsed[2]["name"], "Reset");
        assert_eq!(parsed[2]["args"]["reason"], "PointerUp");
        assert_eq!(parsed[2]["args"]["animated"], true);

        assert_eq!(parsed[3]["seq"], 3);
        assert_eq!(parsed[3]["args"]["now_ns"], 16_000_000);
        assert_eq!(parsed[3]["args"]["finished"], false);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
