//! Plutchik mood model
//!
//! A character's emotional state is a primary emotion, an intensity level and a
//! supporting set of emotions (the "axis"), all drawn from Plutchik's eight
//! basic emotions.
//!
//! `Mood` is a value type: every edit returns a new record and leaves the
//! original untouched. The `set_*`/`add_to_axis` variants accept raw strings
//! (form input, wire data) and fail with `DomainError::InvalidMoodValue` for
//! anything outside the canonical sets.
//!
//! Membership of the primary emotion in the axis is deliberately not enforced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::DomainError;

// ============================================================================
// Emotion
// ============================================================================

/// One of Plutchik's eight basic emotions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Trust,
    Fear,
    Surprise,
    Sadness,
    Disgust,
    Anger,
    Anticipation,
}

impl Emotion {
    /// All emotions in wheel order, for pickers
    pub fn all() -> &'static [Emotion] {
        &[
            Emotion::Joy,
            Emotion::Trust,
            Emotion::Fear,
            Emotion::Surprise,
            Emotion::Sadness,
            Emotion::Disgust,
            Emotion::Anger,
            Emotion::Anticipation,
        ]
    }

    /// Wire/display name (lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Trust => "trust",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Sadness => "sadness",
            Emotion::Disgust => "disgust",
            Emotion::Anger => "anger",
            Emotion::Anticipation => "anticipation",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "joy" => Ok(Emotion::Joy),
            "trust" => Ok(Emotion::Trust),
            "fear" => Ok(Emotion::Fear),
            "surprise" => Ok(Emotion::Surprise),
            "sadness" => Ok(Emotion::Sadness),
            "disgust" => Ok(Emotion::Disgust),
            "anger" => Ok(Emotion::Anger),
            "anticipation" => Ok(Emotion::Anticipation),
            _ => Err(DomainError::invalid_mood_value("emotion", s)),
        }
    }
}

// ============================================================================
// Intensity
// ============================================================================

/// How strongly the primary emotion is felt, ordered from `Low` to `Extreme`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Moderate,
    High,
    Extreme,
}

impl Intensity {
    /// All levels in ascending order
    pub fn all() -> &'static [Intensity] {
        &[
            Intensity::Low,
            Intensity::Moderate,
            Intensity::High,
            Intensity::Extreme,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
            Intensity::Extreme => "extreme",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intensity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Intensity::Low),
            "moderate" => Ok(Intensity::Moderate),
            "high" => Ok(Intensity::High),
            "extreme" => Ok(Intensity::Extreme),
            _ => Err(DomainError::invalid_mood_value("intensity", s)),
        }
    }
}

// ============================================================================
// EmotionAxis
// ============================================================================

/// Supporting emotions of a mood.
///
/// Behaves as a set (no duplicates, order-insensitive equality) but keeps
/// insertion order for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Emotion>", into = "Vec<Emotion>")]
pub struct EmotionAxis(Vec<Emotion>);

impl EmotionAxis {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, emotion: Emotion) -> bool {
        self.0.contains(&emotion)
    }

    pub fn iter(&self) -> impl Iterator<Item = Emotion> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Emotion] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy with `emotion` appended; no-op if already present.
    pub fn with(&self, emotion: Emotion) -> Self {
        let mut next = self.clone();
        if !next.contains(emotion) {
            next.0.push(emotion);
        }
        next
    }

    /// Returns a copy without `emotion`; no-op if absent.
    pub fn without(&self, emotion: Emotion) -> Self {
        Self(self.0.iter().copied().filter(|e| *e != emotion).collect())
    }

    /// Emotions joined for display, e.g. `"joy, trust"`
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(Emotion::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn mask(&self) -> u8 {
        self.0.iter().fold(0, |acc, e| acc | e.bit())
    }
}

impl FromIterator<Emotion> for EmotionAxis {
    fn from_iter<I: IntoIterator<Item = Emotion>>(iter: I) -> Self {
        iter.into_iter()
            .fold(EmotionAxis::new(), |axis, emotion| axis.with(emotion))
    }
}

impl From<Vec<Emotion>> for EmotionAxis {
    fn from(emotions: Vec<Emotion>) -> Self {
        emotions.into_iter().collect()
    }
}

impl From<EmotionAxis> for Vec<Emotion> {
    fn from(axis: EmotionAxis) -> Self {
        axis.0
    }
}

impl PartialEq for EmotionAxis {
    fn eq(&self, other: &Self) -> bool {
        self.mask() == other.mask()
    }
}

impl Eq for EmotionAxis {}

impl Hash for EmotionAxis {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mask().hash(state);
    }
}

// ============================================================================
// Mood
// ============================================================================

/// A character's emotional state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mood {
    primary_emotion: Emotion,
    intensity: Intensity,
    #[serde(rename = "plutchik_axis")]
    axis: EmotionAxis,
}

impl Mood {
    /// Create a mood whose axis holds just the primary emotion.
    pub fn new(primary_emotion: Emotion, intensity: Intensity) -> Self {
        Self {
            primary_emotion,
            intensity,
            axis: EmotionAxis::new().with(primary_emotion),
        }
    }

    /// Create a mood with an explicit axis. Duplicate axis entries collapse.
    pub fn from_parts(
        primary_emotion: Emotion,
        intensity: Intensity,
        axis: impl IntoIterator<Item = Emotion>,
    ) -> Self {
        Self {
            primary_emotion,
            intensity,
            axis: axis.into_iter().collect(),
        }
    }

    /// Build a mood from raw strings (wire data, form input).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMoodValue` naming the first component that
    /// is outside its canonical set.
    pub fn parse<S: AsRef<str>>(
        primary_emotion: &str,
        intensity: &str,
        axis: &[S],
    ) -> Result<Self, DomainError> {
        let primary = primary_emotion
            .parse::<Emotion>()
            .map_err(|_| DomainError::invalid_mood_value("primary_emotion", primary_emotion))?;
        let intensity = intensity.parse::<Intensity>()?;
        let axis = axis
            .iter()
            .map(|raw| {
                raw.as_ref()
                    .parse::<Emotion>()
                    .map_err(|_| DomainError::invalid_mood_value("plutchik_axis", raw.as_ref()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_parts(primary, intensity, axis))
    }

    pub fn primary_emotion(&self) -> Emotion {
        self.primary_emotion
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn axis(&self) -> &EmotionAxis {
        &self.axis
    }

    // -------------------------------------------------------------------------
    // Typed edits (infallible)
    // -------------------------------------------------------------------------

    /// Replace the primary emotion. The axis is left as is.
    pub fn with_primary_emotion(&self, emotion: Emotion) -> Self {
        Self {
            primary_emotion: emotion,
            ..self.clone()
        }
    }

    pub fn with_intensity(&self, intensity: Intensity) -> Self {
        Self {
            intensity,
            ..self.clone()
        }
    }

    pub fn with_axis_emotion(&self, emotion: Emotion) -> Self {
        Self {
            axis: self.axis.with(emotion),
            ..self.clone()
        }
    }

    pub fn without_axis_emotion(&self, emotion: Emotion) -> Self {
        Self {
            axis: self.axis.without(emotion),
            ..self.clone()
        }
    }

    // -------------------------------------------------------------------------
    // Raw edits (validated)
    // -------------------------------------------------------------------------

    pub fn set_primary_emotion(&self, raw: &str) -> Result<Self, DomainError> {
        let emotion = raw
            .parse::<Emotion>()
            .map_err(|_| DomainError::invalid_mood_value("primary_emotion", raw))?;
        Ok(self.with_primary_emotion(emotion))
    }

    pub fn set_intensity(&self, raw: &str) -> Result<Self, DomainError> {
        Ok(self.with_intensity(raw.parse()?))
    }

    pub fn add_to_axis(&self, raw: &str) -> Result<Self, DomainError> {
        let emotion = raw
            .parse::<Emotion>()
            .map_err(|_| DomainError::invalid_mood_value("plutchik_axis", raw))?;
        Ok(self.with_axis_emotion(emotion))
    }

    /// Remove an emotion by name. A name outside the canonical set can never
    /// be present, so it is a no-op like any other absent emotion.
    pub fn remove_from_axis(&self, raw: &str) -> Self {
        match raw.parse::<Emotion>() {
            Ok(emotion) => self.without_axis_emotion(emotion),
            Err(_) => self.clone(),
        }
    }

    /// Short label, e.g. `"joy (moderate)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.primary_emotion, self.intensity)
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::new(Emotion::Joy, Intensity::Moderate)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.primary_emotion, self.intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_parse_is_case_insensitive() {
        assert_eq!("Joy".parse::<Emotion>(), Ok(Emotion::Joy));
        assert_eq!(" ANTICIPATION ".parse::<Emotion>(), Ok(Emotion::Anticipation));
        assert!("smug".parse::<Emotion>().is_err());
    }

    #[test]
    fn test_intensity_is_ordered() {
        assert!(Intensity::Low < Intensity::Moderate);
        assert!(Intensity::High < Intensity::Extreme);
        assert_eq!(Intensity::all().len(), 4);
    }

    #[test]
    fn test_default_mood_matches_creation_form() {
        let mood = Mood::default();
        assert_eq!(mood.primary_emotion(), Emotion::Joy);
        assert_eq!(mood.intensity(), Intensity::Moderate);
        assert_eq!(mood.axis().as_slice(), &[Emotion::Joy]);
    }

    #[test]
    fn test_every_canonical_value_is_accepted_and_idempotent() {
        let base = Mood::default();
        for emotion in Emotion::all() {
            let once = base.set_primary_emotion(emotion.as_str()).expect("valid");
            let twice = once.set_primary_emotion(emotion.as_str()).expect("valid");
            assert_eq!(once.primary_emotion(), *emotion);
            assert_eq!(once, twice);
            // primary change does not touch the axis
            assert_eq!(once.axis(), base.axis());
        }
        for level in Intensity::all() {
            let once = base.set_intensity(level.as_str()).expect("valid");
            let twice = once.set_intensity(level.as_str()).expect("valid");
            assert_eq!(once.intensity(), *level);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_invalid_values_are_rejected_and_state_unchanged() {
        let mood = Mood::new(Emotion::Fear, Intensity::High);
        let before = mood.clone();

        let err = mood.set_primary_emotion("smug").expect_err("non-canonical");
        assert_eq!(err, DomainError::invalid_mood_value("primary_emotion", "smug"));

        let err = mood.set_intensity("apocalyptic").expect_err("undefined level");
        assert!(err.is_invalid_mood_value());

        let err = mood.add_to_axis("ennui").expect_err("non-canonical");
        assert_eq!(err, DomainError::invalid_mood_value("plutchik_axis", "ennui"));

        assert_eq!(mood, before);
    }

    #[test]
    fn test_add_to_axis_is_idempotent_and_preserves_order() {
        let mood = Mood::new(Emotion::Joy, Intensity::Low)
            .with_axis_emotion(Emotion::Trust)
            .with_axis_emotion(Emotion::Anticipation);

        let once = mood.with_axis_emotion(Emotion::Trust);
        assert_eq!(once, mood);
        assert_eq!(
            once.axis().as_slice(),
            &[Emotion::Joy, Emotion::Trust, Emotion::Anticipation]
        );
    }

    #[test]
    fn test_remove_from_axis_absent_is_noop() {
        let mood = Mood::from_parts(
            Emotion::Anger,
            Intensity::Extreme,
            [Emotion::Anger, Emotion::Disgust, Emotion::Fear],
        );

        assert_eq!(mood.without_axis_emotion(Emotion::Joy), mood);
        assert_eq!(mood.remove_from_axis("ennui"), mood);

        let removed = mood.remove_from_axis("disgust");
        assert_eq!(removed.axis().as_slice(), &[Emotion::Anger, Emotion::Fear]);
    }

    #[test]
    fn test_primary_need_not_be_in_axis() {
        let mood = Mood::new(Emotion::Sadness, Intensity::Low).without_axis_emotion(Emotion::Sadness);
        assert_eq!(mood.primary_emotion(), Emotion::Sadness);
        assert!(mood.axis().is_empty());
    }

    #[test]
    fn test_axis_equality_ignores_order() {
        let a: EmotionAxis = vec![Emotion::Joy, Emotion::Trust].into();
        let b: EmotionAxis = vec![Emotion::Trust, Emotion::Joy, Emotion::Trust].into();
        assert_eq!(a, b);
        assert_eq!(b.len(), 2);
        assert_eq!(b.joined(), "trust, joy");
    }

    #[test]
    fn test_mood_wire_shape() {
        let mood = Mood::from_parts(Emotion::Joy, Intensity::Moderate, [Emotion::Joy, Emotion::Trust]);
        let json = serde_json::to_value(&mood).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "primary_emotion": "joy",
                "intensity": "moderate",
                "plutchik_axis": ["joy", "trust"]
            })
        );
    }

    #[test]
    fn test_parse_reports_offending_field() {
        let err = Mood::parse("joy", "moderate", &["trust", "glee"]).expect_err("bad axis");
        assert_eq!(err, DomainError::invalid_mood_value("plutchik_axis", "glee"));

        let mood = Mood::parse("Fear", "HIGH", &["fear", "surprise"]).expect("valid");
        assert_eq!(mood.label(), "fear (high)");
    }
}
