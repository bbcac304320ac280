//! SVG template loading and per-line text substitution.
//!
//! The template is parsed exactly once into an owned sequence of XML events.
//! The substitution target is the first text node directly inside the first
//! `flowPara` element in document order. Substitution never mutates the
//! loaded template: each call clones the event sequence, swaps the target
//! text node, and serializes the whole document, so a run can never observe a
//! half-updated template.

use crate::error::{CardpressError, Result};
use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};
use std::path::Path;

/// Element whose first text child receives the replacement text.
const TARGET_TAG: &[u8] = b"flowPara";

/// A parsed, immutable SVG template.
#[derive(Debug)]
pub struct Template {
    events: Vec<Event<'static>>,
    /// Index into `events` of the substitution-target text node, if the
    /// document has one. Checked at substitution time, not load time.
    slot: Option<usize>,
}

impl Template {
    /// Load and parse a template SVG from disk.
    ///
    /// Fails with a parse error if the file is missing, unreadable, or not
    /// well-formed XML. A well-formed document without a substitution target
    /// loads fine; the shape error surfaces on the first [`substitute`] call.
    ///
    /// [`substitute`]: Template::substitute
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CardpressError::Parse(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// Parse a template from an XML string.
    pub fn parse(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        let mut events: Vec<Event<'static>> = Vec::new();
        let mut slot = None;
        // Set after the first target-tag start event; only the event
        // immediately following it can be the substitution slot, matching the
        // reference's "first child node" lookup.
        let mut expect_slot_text = false;
        let mut seen_target = false;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| CardpressError::Parse(format!("malformed XML: {}", e)))?;

            match event {
                Event::Eof => break,
                event => {
                    if expect_slot_text {
                        if matches!(&event, Event::Text(_)) {
                            slot = Some(events.len());
                        }
                        expect_slot_text = false;
                    }
                    if !seen_target {
                        match &event {
                            Event::Start(e) if e.local_name().as_ref() == TARGET_TAG => {
                                seen_target = true;
                                expect_slot_text = true;
                            }
                            // A self-closing target still claims the first
                            // position in document order; it just has no slot.
                            Event::Empty(e) if e.local_name().as_ref() == TARGET_TAG => {
                                seen_target = true;
                            }
                            _ => {}
                        }
                    }
                    events.push(event.into_owned());
                }
            }
        }

        Ok(Self { events, slot })
    }

    /// Current text of the substitution target, unescaped.
    ///
    /// Returns `None` if the template has no target node.
    pub fn target_text(&self) -> Option<String> {
        let slot = self.slot?;
        match &self.events[slot] {
            Event::Text(text) => text.unescape().ok().map(|t| t.into_owned()),
            _ => None,
        }
    }

    /// Serialize a copy of the template with the target text replaced.
    ///
    /// The replacement is used verbatim; the serializer performs the only
    /// escaping. Fails with a shape error if the document has no text-bearing
    /// target element.
    pub fn substitute(&self, text: &str) -> Result<String> {
        let slot = self.slot.ok_or_else(|| {
            CardpressError::TemplateShape(
                "template has no text-bearing <flowPara> element".to_string(),
            )
        })?;

        let mut writer = Writer::new(Vec::new());
        for (i, event) in self.events.iter().enumerate() {
            let event = if i == slot {
                Event::Text(BytesText::new(text).into_owned())
            } else {
                event.clone()
            };
            writer.write_event(event).map_err(|e| {
                CardpressError::Io(format!("failed to serialize template copy: {}", e))
            })?;
        }

        String::from_utf8(writer.into_inner())
            .map_err(|e| CardpressError::Parse(format!("serialized template is not UTF-8: {}", e)))
    }
}
