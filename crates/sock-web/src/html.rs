//! Minimal HTML generation on top of `quick-xml`'s writer.
//!
//! Text and attribute values are escaped by the writer. Boolean attributes
//! are written as `name=""`, which HTML treats the same as a bare `name`.

use axum::response::{Html, IntoResponse, Response};
use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::error::Result;

/// A rendered piece of HTML, safe to embed in another document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
  pub fn as_str(&self) -> &str { &self.0 }
}

impl IntoResponse for Fragment {
  fn into_response(self) -> Response { Html(self.0).into_response() }
}

pub struct HtmlWriter {
  writer: Writer<Vec<u8>>,
}

impl Default for HtmlWriter {
  fn default() -> Self { Self::new() }
}

impl HtmlWriter {
  pub fn new() -> Self {
    Self {
      writer: Writer::new(Vec::new()),
    }
  }

  /// `<!DOCTYPE html>`
  pub fn doctype(&mut self) -> Result<&mut Self> {
    self
      .writer
      .write_event(Event::DocType(BytesText::from_escaped("html")))?;
    Ok(self)
  }

  pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<&mut Self> {
    let mut start = BytesStart::new(tag);
    for attr in attrs {
      start.push_attribute(*attr);
    }
    self.writer.write_event(Event::Start(start))?;
    Ok(self)
  }

  pub fn close(&mut self, tag: &str) -> Result<&mut Self> {
    self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(self)
  }

  /// A void element such as `<meta>` or `<link>`.
  pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<&mut Self> {
    let mut start = BytesStart::new(tag);
    for attr in attrs {
      start.push_attribute(*attr);
    }
    self.writer.write_event(Event::Empty(start))?;
    Ok(self)
  }

  pub fn text(&mut self, text: &str) -> Result<&mut Self> {
    self.writer.write_event(Event::Text(BytesText::new(text)))?;
    Ok(self)
  }

  /// `<tag attrs>text</tag>`
  pub fn element(
    &mut self,
    tag: &str,
    attrs: &[(&str, &str)],
    text: &str,
  ) -> Result<&mut Self> {
    self.open(tag, attrs)?.text(text)?.close(tag)
  }

  /// Splice in an already rendered fragment verbatim.
  pub fn fragment(&mut self, fragment: &Fragment) -> Result<&mut Self> {
    self.writer.get_mut().extend_from_slice(fragment.0.as_bytes());
    Ok(self)
  }

  pub fn finish(self) -> Result<Fragment> {
    Ok(Fragment(String::from_utf8(self.writer.into_inner())?))
  }
}
