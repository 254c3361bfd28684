//! Candidate entity

use super::mode::ScoringMode;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Gender as recorded in the reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Attributes a fair model must not take into account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProtectedAttributes {
    pub gender: Gender,
    pub age: u32,
}

/// A job candidate with both pre-authored scores
///
/// Text fields borrow for the static reference pool and own their data for
/// candidates built at runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub name: Cow<'static, str>,
    pub experience_years: u32,
    pub education: Cow<'static, str>,
    pub skills: Cow<'static, [Cow<'static, str>]>,
    pub protected: ProtectedAttributes,
    /// Score based on qualifications only
    pub fair_score: f64,
    /// Score learned from historical hiring decisions
    pub historically_biased_score: f64,
}

impl Candidate {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        protected: ProtectedAttributes,
        fair_score: f64,
        historically_biased_score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            experience_years: 0,
            education: Cow::Borrowed(""),
            skills: Cow::Borrowed(&[]),
            protected,
            fair_score,
            historically_biased_score,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    pub fn with_education(mut self, education: impl Into<Cow<'static, str>>) -> Self {
        self.education = education.into();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.skills = skills.into_iter().map(Into::into).collect::<Vec<_>>().into();
        self
    }

    // ==================== Accessors ====================

    /// The score that is active under `mode`
    pub fn score(&self, mode: ScoringMode) -> f64 {
        match mode {
            ScoringMode::Fair => self.fair_score,
            ScoringMode::HistoricallyBiased => self.historically_biased_score,
        }
    }

    /// How far the biased model moved this candidate away from the fair score
    pub fn bias_delta(&self) -> f64 {
        self.historically_biased_score - self.fair_score
    }

    pub fn gender(&self) -> Gender {
        self.protected.gender
    }

    pub fn age(&self) -> u32 {
        self.protected.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Candidate {
        Candidate::new(
            "Test Person",
            ProtectedAttributes {
                gender: Gender::Female,
                age: 30,
            },
            88.0,
            80.0,
        )
        .with_experience(4)
        .with_education("BS Mathematics")
        .with_skills(["Rust", "SQL"])
    }

    #[test]
    fn test_score_follows_mode() {
        let c = sample();
        assert_eq!(c.score(ScoringMode::Fair), 88.0);
        assert_eq!(c.score(ScoringMode::HistoricallyBiased), 80.0);
    }

    #[test]
    fn test_builder_accepts_owned_text() {
        let skill = String::from("Go");
        let c = Candidate::new(format!("Candidate {}", 7), sample().protected, 70.0, 65.0)
            .with_education(String::from("BA Economics"))
            .with_skills(vec![skill, "Excel".to_string()]);

        assert_eq!(c.name, "Candidate 7");
        assert_eq!(c.education, "BA Economics");
        assert_eq!(c.skills.len(), 2);
        assert_eq!(c.skills[0], "Go");
        assert_eq!(c.experience_years, 0);
    }

    #[test]
    fn test_sample_fields() {
        let c = sample();
        assert_eq!(c.experience_years, 4);
        assert_eq!(c.education, "BS Mathematics");
        assert_eq!(c.skills.as_ref(), &[Cow::Borrowed("Rust"), Cow::Borrowed("SQL")]);
    }

    #[test]
    fn test_bias_delta() {
        assert_eq!(sample().bias_delta(), -8.0);
    }

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::Male.to_string(), "Male");
        assert_eq!(Gender::Female.to_string(), "Female");
    }
}
