//! View rendering: the sock form, the sock list and the page shell.

use sock_core::{
  sock::{Sock, format_date},
  vocab::{self, HUES, MOODS, RATINGS, SIZES, STYLES},
};

use crate::{
  error::Result,
  html::{Fragment, HtmlWriter},
};

pub const PAGE_TITLE: &str = "Sock Tracker";

const PICO_CSS: &str =
  "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@2.0.4";

/// htmx swap targets; the home page gives these ids to its two containers.
const FORM_TARGET: &str = "#sock-form";
const LIST_TARGET: &str = "#sock-list";

pub const EMPTY_DRAWER: &str =
  "Your sock drawer is empty. Add some socks to get started!";

const CARE_TIPS: [&str; 6] = [
  "Listen up, sock enthusiasts! Turn those bad boys inside out before washing. It's like giving them a suit of armor.",
  "Cold water and mild detergent are your friends. We're not trying to create sock-sized Hulks here.",
  "Bleach? That's a hard pass. It's like kryptonite for socks, and we're not in the business of creating sock villains.",
  "Air drying is the way to go. If you must use a dryer, keep it on low. We're not launching these socks into orbit.",
  "Sort your socks by color. It's not rocket science, but it'll prevent a civil war in your sock drawer.",
  "Upgrade your sock arsenal every 6-12 months. Even the best tech needs replacing sometimes.",
];

// ─── Messages ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
  Plain,
  Success,
  Error,
}

/// A one-line status paragraph.
pub fn message(tone: Tone, text: &str) -> Result<Fragment> {
  let mut w = HtmlWriter::new();
  match tone {
    Tone::Plain => w.element("p", &[], text)?,
    Tone::Success => w.element("p", &[("style", "color: green;")], text)?,
    Tone::Error => w.element("p", &[("style", "color: red;")], text)?,
  };
  w.finish()
}

/// Wrap fragments in a single `<div>` so they swap in as one unit.
pub fn stack(parts: &[&Fragment]) -> Result<Fragment> {
  let mut w = HtmlWriter::new();
  w.open("div", &[])?;
  for part in parts {
    w.fragment(part)?;
  }
  w.close("div")?;
  w.finish()
}

/// A status message followed by another fragment.
pub fn with_message(tone: Tone, text: &str, rest: &Fragment) -> Result<Fragment> {
  stack(&[&message(tone, text)?, rest])
}

// ─── Form ────────────────────────────────────────────────────────────────────

/// The create form when `sock` is `None`, otherwise the edit form for it.
pub fn sock_form(sock: Option<&Sock>) -> Result<Fragment> {
  let action = match sock {
    Some(s) => format!("/edit/{}", s.id),
    None => "/add_sock".to_owned(),
  };
  let current = sock.map(|s| &s.fields);
  let rating = current.map(|f| f.superhero_rating.to_string());

  let mut w = HtmlWriter::new();
  // Results (success message and list, or the form again with its error)
  // land in the list container.
  w.open("form", &[
    ("method", "post"),
    ("action", action.as_str()),
    ("hx-post", action.as_str()),
    ("hx-target", LIST_TARGET),
  ])?;
  w.open("fieldset", &[])?;

  select(
    &mut w,
    "Style",
    "style",
    "Select Style",
    STYLES
      .iter()
      .map(|(style, desc)| (style.to_string(), format!("{style}: {desc}"))),
    current.map(|f| f.style.as_str()),
  )?;
  select(
    &mut w,
    "Hue",
    "hue",
    "Select Hue",
    HUES
      .iter()
      .map(|(emoji, color)| (color.to_string(), format!("{emoji} {color}"))),
    current.map(|f| f.hue.as_str()),
  )?;
  select(
    &mut w,
    "Size",
    "size",
    "Select Size",
    SIZES
      .iter()
      .map(|(code, label)| (code.to_string(), format!("{code} - {label}"))),
    current.map(|f| f.size.as_str()),
  )?;
  select(
    &mut w,
    "Mood",
    "mood",
    "Select Mood",
    MOODS.iter().map(|m| (m.to_string(), m.to_string())),
    current.map(|f| f.mood.as_str()),
  )?;
  select(
    &mut w,
    "Superhero Rating",
    "superhero_rating",
    "Select Rating",
    RATINGS.map(|r| (r.to_string(), r.to_string())),
    rating.as_deref(),
  )?;

  w.close("fieldset")?;
  w.element("button", &[("type", "submit")], "Save")?;
  w.close("form")?;
  w.finish()
}

/// A labelled `<select>` with a disabled placeholder. `current` is `None` in
/// create mode, which is the only time the placeholder is selected.
fn select(
  w: &mut HtmlWriter,
  label: &str,
  name: &str,
  placeholder: &str,
  options: impl Iterator<Item = (String, String)>,
  current: Option<&str>,
) -> Result<()> {
  w.open("label", &[])?.text(label)?;
  w.open("select", &[("name", name), ("required", "")])?;

  let mut attrs = vec![("value", ""), ("disabled", "")];
  if current.is_none() {
    attrs.push(("selected", ""));
  }
  w.element("option", &attrs, placeholder)?;

  for (value, text) in options {
    let mut attrs = vec![("value", value.as_str())];
    if current == Some(value.as_str()) {
      attrs.push(("selected", ""));
    }
    w.element("option", &attrs, &text)?;
  }

  w.close("select")?.close("label")?;
  Ok(())
}

// ─── List ────────────────────────────────────────────────────────────────────

/// One line per sock with inline edit and delete controls.
pub fn sock_list(socks: &[Sock]) -> Result<Fragment> {
  if socks.is_empty() {
    return message(Tone::Plain, EMPTY_DRAWER);
  }

  let mut w = HtmlWriter::new();
  w.open("ul", &[])?;
  for sock in socks {
    w.open("li", &[])?.text(&describe(sock))?;

    let edit = format!("/edit/{}", sock.id);
    let delete = format!("/delete/{}", sock.id);
    w.open("div", &[])?;
    w.open("form", &[
      ("method", "get"),
      ("action", edit.as_str()),
      ("hx-get", edit.as_str()),
      ("hx-target", FORM_TARGET),
      ("style", "display: inline-block; margin-right: 10px;"),
    ])?;
    w.element("button", &[("type", "submit")], "Edit")?;
    w.close("form")?;
    w.open("form", &[
      ("method", "post"),
      ("action", delete.as_str()),
      ("hx-post", delete.as_str()),
      ("hx-target", LIST_TARGET),
      ("style", "display: inline-block;"),
    ])?;
    w.element(
      "button",
      &[
        ("type", "submit"),
        (
          "onclick",
          "return confirm('Are you sure you want to delete this sock?');",
        ),
      ],
      "Delete",
    )?;
    w.close("form")?.close("div")?.close("li")?;
  }
  w.close("ul")?;
  w.finish()
}

/// The summary line shown for a sock in the list.
pub fn describe(sock: &Sock) -> String {
  let f = &sock.fields;
  format!(
    "{} - {} {} - {} - Last adventure: {} - Mood: {} - Superhero Rating: {}",
    f.style,
    vocab::hue_emoji(&f.hue),
    f.hue,
    f.size,
    format_date(sock.last_adventure),
    f.mood,
    f.superhero_rating,
  )
}

// ─── Pages ───────────────────────────────────────────────────────────────────

/// A complete HTML document whose `<title>` and `<h1>` are both `title`.
pub fn page(title: &str, body: &Fragment) -> Result<Fragment> {
  let mut w = HtmlWriter::new();
  w.doctype()?;
  w.open("html", &[("lang", "en")])?;

  w.open("head", &[])?;
  w.void("meta", &[("charset", "utf-8")])?;
  w.void("meta", &[
    ("name", "viewport"),
    ("content", "width=device-width, initial-scale=1"),
  ])?;
  w.element("title", &[], title)?;
  w.void("link", &[("rel", "stylesheet"), ("href", PICO_CSS)])?;
  w.element("script", &[("src", HTMX_JS)], "")?;
  w.close("head")?;

  w.open("body", &[])?;
  w.open("main", &[("class", "container")])?;
  w.element("h1", &[], title)?;
  w.fragment(body)?;
  w.close("main")?.close("body")?.close("html")?;
  w.finish()
}

/// Body of the home page: the create form above the current list.
pub fn home(form: &Fragment, list: &Fragment) -> Result<Fragment> {
  let mut w = HtmlWriter::new();
  w.element(
    "p",
    &[],
    "Welcome to the Sock Tracker! Keep your socks organized.",
  )?;
  w.element("a", &[("href", "/care_tips")], "Sock Care Tips")?;
  w.element("h2", &[], "Add a new sock")?;
  w.open("div", &[("id", "sock-form")])?
    .fragment(form)?
    .close("div")?;
  w.element("h2", &[], "Your sock collection")?;
  w.open("div", &[("id", "sock-list")])?
    .fragment(list)?
    .close("div")?;
  w.finish()
}

/// The static care tips page.
pub fn care_tips() -> Result<Fragment> {
  let mut body = HtmlWriter::new();
  body.open("ul", &[])?;
  for tip in CARE_TIPS {
    body.element("li", &[], tip)?;
  }
  body.close("ul")?;
  body.element("a", &[("href", "/")], "Back to Sock Tracker")?;
  page("Sock Care Tips", &body.finish()?)
}
