//! Typed SVG document model.
//!
//! The root `<svg>` element is lifted into [`SvgRoot`] with named fields for
//! the attributes the resizer reads or writes. Everything else (prolog,
//! children, trailing content, untouched root attributes) is kept as raw
//! XML events or raw attribute text and written back verbatim.

use std::borrow::Cow;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::{Reader, Writer};

use crate::svg::error::{Result, SvgError};
use crate::svg::viewbox::ViewBox;

const ROOT_NAME: &str = "svg";

/// Position of a root attribute in the serialized start tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrSlot {
    ViewBox,
    Width,
    Height,
    Other(usize),
}

/// The root `<svg>` element.
///
/// Attribute values are stored exactly as they appear in the source
/// (still escaped), so untouched attributes round-trip byte for byte.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgRoot {
    view_box: Option<String>,
    width: Option<String>,
    height: Option<String>,
    others: Vec<(String, String)>,
    order: Vec<AttrSlot>,
    self_closing: bool,
}

impl SvgRoot {
    fn from_start(start: &BytesStart<'_>, self_closing: bool) -> Result<Self> {
        let name = start.name();
        if name.as_ref() != ROOT_NAME.as_bytes() {
            return Err(SvgError::malformed(format!(
                "root element is <{}>, expected <svg>",
                String::from_utf8_lossy(name.as_ref())
            )));
        }

        let mut root = Self {
            view_box: None,
            width: None,
            height: None,
            others: Vec::new(),
            order: Vec::new(),
            self_closing,
        };

        for attr in start.attributes() {
            let attr = attr?;
            let key = utf8(attr.key.as_ref())?;
            let value = utf8(&attr.value)?;
            let slot = match key.as_str() {
                "viewBox" => {
                    root.view_box = Some(value);
                    AttrSlot::ViewBox
                }
                "width" => {
                    root.width = Some(value);
                    AttrSlot::Width
                }
                "height" => {
                    root.height = Some(value);
                    AttrSlot::Height
                }
                _ => {
                    root.others.push((key, value));
                    AttrSlot::Other(root.others.len() - 1)
                }
            };
            root.order.push(slot);
        }

        Ok(root)
    }

    /// Raw `viewBox` attribute text, if present.
    pub fn view_box_attr(&self) -> Option<&str> {
        self.view_box.as_deref()
    }

    /// Parsed `viewBox`, if present and well-formed.
    pub fn view_box(&self) -> Option<ViewBox> {
        self.view_box.as_deref().and_then(ViewBox::parse)
    }

    pub fn width(&self) -> Option<&str> {
        self.width.as_deref()
    }

    pub fn height(&self) -> Option<&str> {
        self.height.as_deref()
    }

    /// Look up any root attribute by name, raw value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "viewBox" => self.view_box_attr(),
            "width" => self.width(),
            "height" => self.height(),
            _ => self
                .others
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
        }
    }

    /// Overwrite `width`/`height`. Existing attributes keep their position,
    /// new ones go after everything else.
    pub fn set_size(&mut self, width: f64, height: f64) {
        if self.width.is_none() {
            self.order.push(AttrSlot::Width);
        }
        if self.height.is_none() {
            self.order.push(AttrSlot::Height);
        }
        self.width = Some(format_dimension(width));
        self.height = Some(format_dimension(height));
    }

    fn to_start(&self) -> BytesStart<'_> {
        let mut start = BytesStart::new(ROOT_NAME);
        for slot in &self.order {
            let (key, value) = match *slot {
                AttrSlot::ViewBox => ("viewBox", self.view_box.as_deref()),
                AttrSlot::Width => ("width", self.width.as_deref()),
                AttrSlot::Height => ("height", self.height.as_deref()),
                AttrSlot::Other(i) => {
                    let (key, value) = &self.others[i];
                    (key.as_str(), Some(value.as_str()))
                }
            };
            if let Some(value) = value {
                // Values are already escaped; push the bytes untouched.
                start.push_attribute(Attribute {
                    key: QName(key.as_bytes()),
                    value: double_quoted(value),
                });
            }
        }
        start
    }
}

/// A parsed SVG document: verbatim prolog, typed root, verbatim remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    prolog: Vec<Event<'static>>,
    root: SvgRoot,
    rest: Vec<Event<'static>>,
}

impl SvgDocument {
    /// Parse SVG markup, rejecting anything that is not well-formed XML with
    /// a single `<svg>` root element.
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = Reader::from_str(text);
        reader
            .trim_text(false)
            .expand_empty_elements(false)
            .check_end_names(true);

        let mut prolog = Vec::new();
        let mut root: Option<SvgRoot> = None;
        let mut rest = Vec::new();
        let mut depth = 0usize;

        loop {
            let event = reader.read_event()?;
            match &event {
                Event::Eof => break,
                Event::Start(start) | Event::Empty(start) => {
                    let self_closing = matches!(event, Event::Empty(_));
                    if root.is_none() {
                        root = Some(SvgRoot::from_start(start, self_closing)?);
                        if !self_closing {
                            depth = 1;
                        }
                        continue;
                    }
                    if depth == 0 {
                        return Err(SvgError::malformed("multiple root elements"));
                    }
                    for attr in start.attributes() {
                        attr?;
                    }
                    if !self_closing {
                        depth += 1;
                    }
                }
                Event::End(end) => {
                    if depth == 0 {
                        return Err(SvgError::malformed(format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(end.name().as_ref())
                        )));
                    }
                    depth -= 1;
                }
                Event::Text(content) if depth == 0 => {
                    if !content.iter().all(u8::is_ascii_whitespace) {
                        return Err(SvgError::malformed("text outside the root element"));
                    }
                }
                Event::CData(_) if depth == 0 => {
                    return Err(SvgError::malformed("CDATA outside the root element"));
                }
                _ => {}
            }

            if root.is_none() {
                prolog.push(event.into_owned());
            } else {
                rest.push(event.into_owned());
            }
        }

        if depth != 0 {
            return Err(SvgError::malformed("unclosed <svg> element"));
        }
        let root = root.ok_or_else(|| SvgError::malformed("missing <svg> root element"))?;

        Ok(Self { prolog, root, rest })
    }

    pub fn root(&self) -> &SvgRoot {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut SvgRoot {
        &mut self.root
    }

    /// Serialize back to markup.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());

        for event in &self.prolog {
            writer.write_event(event).map_err(write_error)?;
        }

        let start = self.root.to_start();
        let root_event = if self.root.self_closing {
            Event::Empty(start)
        } else {
            Event::Start(start)
        };
        writer.write_event(root_event).map_err(write_error)?;

        for event in &self.rest {
            writer.write_event(event).map_err(write_error)?;
        }

        String::from_utf8(writer.into_inner())
            .map_err(|e| SvgError::malformed(format!("serialized output is not UTF-8: {e}")))
    }
}

/// Shortest decimal form that round-trips, without exponent notation.
pub fn format_dimension(value: f64) -> String {
    format!("{value}")
}

/// Raw value made safe for a double-quoted attribute. A value read from a
/// single-quoted attribute may hold a bare `"`.
fn double_quoted(value: &str) -> Cow<'_, [u8]> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "&quot;").into_bytes())
    } else {
        Cow::Borrowed(value.as_bytes())
    }
}

fn utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| SvgError::malformed(e.to_string()))
}

fn write_error(err: impl std::fmt::Display) -> SvgError {
    SvgError::malformed(format!("failed to serialize: {err}"))
}
