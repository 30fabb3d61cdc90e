//! Line-oriented schedule text format.
//!
//! # Format
//!
//! One entity per line, no header:
//!
//! ```text
//! 0,300000,600000,900000
//! 1,300000,600000,905123.5
//! ```
//!
//! The first field is the entity id (base-10 `u32`); the rest are event times
//! in milliseconds, written in the shortest decimal form that parses back to
//! the same `f64` (`300000`, not `300000.0`; never exponent notation).
//! Lines end in `\n` on output; `\n`, `\r\n` and bare `\r` are all accepted
//! on input, and the last line may omit its terminator.  An empty input is
//! an empty set.
//!
//! Decoding is all-or-nothing: the first malformed line aborts with a
//! [`ScheduleError::Parse`] that names the 1-based line number.

use std::io::{Read, Write};

use jt_core::EntityId;

use crate::{Entity, EntitySet, ScheduleError, ScheduleResult};

// ── Encoding ──────────────────────────────────────────────────────────────────

/// Render one entity as `id,t0,t1,...,tn` (no terminator).
pub fn encode(entity: &Entity) -> String {
    let mut line = entity.id().0.to_string();
    for at_ms in entity.schedule() {
        line.push(',');
        line.push_str(&at_ms.to_string());
    }
    line
}

/// Render a whole set, one `\n`-terminated line per entity.
pub fn encode_all(set: &EntitySet) -> String {
    let mut text = String::new();
    for entity in set {
        text.push_str(&encode(entity));
        text.push('\n');
    }
    text
}

/// Write `set` to `writer`.  Each line, terminator included, goes out in a
/// single `write_all` call.
pub fn write_entities<W: Write>(set: &EntitySet, mut writer: W) -> ScheduleResult<()> {
    for entity in set {
        let mut line = encode(entity);
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

// ── Decoding ──────────────────────────────────────────────────────────────────

/// Parse a single line (without terminator).
///
/// Errors report line 1; [`decode_all`] substitutes the real line number.
pub fn decode(line: &str) -> ScheduleResult<Entity> {
    parse_record(line).map_err(|message| ScheduleError::Parse { line: 1, message })
}

/// Parse a whole document.  Returns no entities at all if any line fails.
pub fn decode_all(text: &str) -> ScheduleResult<EntitySet> {
    let set = records(text)
        .enumerate()
        .map(|(i, line)| {
            parse_record(line).map_err(|message| ScheduleError::Parse { line: i + 1, message })
        })
        .collect::<ScheduleResult<EntitySet>>()?;

    tracing::trace!(entities = set.len(), "decoded schedule text");
    Ok(set)
}

/// Read all of `reader` and decode it with [`decode_all`].
pub fn read_entities<R: Read>(mut reader: R) -> ScheduleResult<EntitySet> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    decode_all(&text)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(line: &str) -> Result<Entity, String> {
    let mut fields = line.split(',');

    // `split` always yields at least one item.
    let id_field = fields.next().unwrap_or_default();
    if id_field.is_empty() {
        return Err("empty record: expected an entity id".into());
    }
    let id = id_field
        .parse::<u32>()
        .map(EntityId)
        .map_err(|e| format!("invalid entity id {id_field:?}: {e}"))?;

    let schedule = fields
        .enumerate()
        .map(|(i, field)| {
            field
                .parse::<f64>()
                .map_err(|e| format!("invalid timestamp {field:?} in field {}: {e}", i + 2))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    Entity::from_schedule(id, schedule, 0.0).map_err(|_| format!("{id} has no timestamps"))
}

/// Split on `\n`, `\r\n` or `\r`.  The empty remainder after a final
/// terminator is not a record; any other empty line is.
fn records(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                Some(line)
            }
        }
    })
}
