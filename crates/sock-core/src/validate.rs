//! Form validation against the domain vocabulary.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::{sock::SockFields, vocab};

/// Why a submitted sock was rejected. The display text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("All fields are required.")]
  Missing,
  #[error("Invalid sock style selected.")]
  Style,
  #[error("Invalid sock hue selected.")]
  Hue,
  #[error("Invalid sock size selected.")]
  Size,
  #[error("Invalid sock mood selected.")]
  Mood,
  #[error("Invalid superhero rating selected.")]
  Rating,
}

/// Check a submission. Empty strings count as missing.
///
/// Fields are checked in form order; the first offender wins.
pub fn validate(
  style: Option<&str>,
  hue: Option<&str>,
  size: Option<&str>,
  mood: Option<&str>,
  superhero_rating: Option<i64>,
) -> Result<(), ValidationError> {
  fn present(v: Option<&str>) -> Option<&str> { v.filter(|s| !s.is_empty()) }

  let (Some(style), Some(hue), Some(size), Some(mood), Some(rating)) = (
    present(style),
    present(hue),
    present(size),
    present(mood),
    superhero_rating,
  ) else {
    return Err(ValidationError::Missing);
  };

  if !vocab::is_style(style) {
    return Err(ValidationError::Style);
  }
  if !vocab::is_hue(hue) {
    return Err(ValidationError::Hue);
  }
  if !vocab::is_size(size) {
    return Err(ValidationError::Size);
  }
  if !vocab::is_mood(mood) {
    return Err(ValidationError::Mood);
  }
  if !vocab::is_rating(rating) {
    return Err(ValidationError::Rating);
  }
  Ok(())
}

/// A raw form submission; any field may be absent.
///
/// An empty `superhero_rating` deserialises to `None`; a non-numeric one is a
/// deserialisation error, so it never reaches [`validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SockInput {
  pub style:            Option<String>,
  pub hue:              Option<String>,
  pub size:             Option<String>,
  pub mood:             Option<String>,
  #[serde(default, deserialize_with = "blank_as_none")]
  pub superhero_rating: Option<i64>,
}

fn blank_as_none<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw: Option<String> = Option::deserialize(de)?;
  match raw.as_deref().map(str::trim) {
    None | Some("") => Ok(None),
    Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
  }
}

impl SockInput {
  /// Validate and convert into the typed record fields.
  pub fn into_fields(self) -> Result<SockFields, ValidationError> {
    validate(
      self.style.as_deref(),
      self.hue.as_deref(),
      self.size.as_deref(),
      self.mood.as_deref(),
      self.superhero_rating,
    )?;
    match (self.style, self.hue, self.size, self.mood, self.superhero_rating) {
      (Some(style), Some(hue), Some(size), Some(mood), Some(superhero_rating)) => {
        Ok(SockFields { style, hue, size, mood, superhero_rating })
      }
      _ => Err(ValidationError::Missing),
    }
  }
}

impl From<&SockFields> for SockInput {
  fn from(f: &SockFields) -> Self {
    Self {
      style:            Some(f.style.clone()),
      hue:              Some(f.hue.clone()),
      size:             Some(f.size.clone()),
      mood:             Some(f.mood.clone()),
      superhero_rating: Some(f.superhero_rating),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::vocab::{HUES, MOODS, RATINGS, SIZES, STYLES};

  fn crew() -> SockInput {
    SockInput {
      style:            Some("Crew".into()),
      hue:              Some("Navy".into()),
      size:             Some("M".into()),
      mood:             Some("Cozy".into()),
      superhero_rating: Some(7),
    }
  }

  #[test]
  fn every_vocabulary_combination_is_valid() {
    for (style, _) in STYLES {
      for (_, hue) in HUES {
        for (size, _) in SIZES {
          for mood in MOODS {
            for rating in RATINGS {
              assert_eq!(
                validate(Some(style), Some(hue), Some(size), Some(mood), Some(rating)),
                Ok(()),
              );
            }
          }
        }
      }
    }
  }

  #[test]
  fn empty_field_is_missing() {
    let input = SockInput { mood: Some(String::new()), ..crew() };
    let err = input.into_fields().unwrap_err();
    assert_eq!(err, ValidationError::Missing);
    assert_eq!(err.to_string(), "All fields are required.");
  }

  #[test]
  fn blank_strings_are_missing() {
    assert_eq!(
      validate(Some("Crew"), Some(""), Some("M"), Some("Cozy"), Some(7)),
      Err(ValidationError::Missing),
    );
    assert_eq!(
      validate(Some(""), None, None, None, None),
      Err(ValidationError::Missing),
    );
  }

  #[test]
  fn absent_rating_is_missing() {
    let input = SockInput { superhero_rating: None, ..crew() };
    assert_eq!(input.into_fields(), Err(ValidationError::Missing));
  }

  #[test]
  fn missing_wins_over_invalid() {
    let input = SockInput {
      style: Some("Sandal".into()),
      hue: None,
      ..crew()
    };
    assert_eq!(input.into_fields(), Err(ValidationError::Missing));
  }

  #[test]
  fn each_field_reports_its_own_error() {
    let cases = [
      (SockInput { style: Some("Sandal".into()), ..crew() }, ValidationError::Style),
      (SockInput { hue: Some("Chartreuse".into()), ..crew() }, ValidationError::Hue),
      (SockInput { size: Some("XXXL".into()), ..crew() }, ValidationError::Size),
      (SockInput { mood: Some("Grumpy".into()), ..crew() }, ValidationError::Mood),
      (SockInput { superhero_rating: Some(11), ..crew() }, ValidationError::Rating),
      (SockInput { superhero_rating: Some(0), ..crew() }, ValidationError::Rating),
    ];
    for (input, expected) in cases {
      let err = input.into_fields().unwrap_err();
      assert_eq!(err, expected);
      assert!(!err.to_string().is_empty());
    }
  }

  #[test]
  fn first_invalid_field_wins() {
    let input = SockInput {
      hue: Some("Chartreuse".into()),
      mood: Some("Grumpy".into()),
      ..crew()
    };
    assert_eq!(input.into_fields(), Err(ValidationError::Hue));
  }

  #[test]
  fn valid_input_converts() {
    let fields = crew().into_fields().unwrap();
    assert_eq!(fields.style, "Crew");
    assert_eq!(fields.superhero_rating, 7);
    assert_eq!(SockInput::from(&fields).into_fields().unwrap(), fields);
  }
}
