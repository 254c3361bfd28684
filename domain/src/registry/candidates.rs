use crate::hiring::{Candidate, Gender, ProtectedAttributes};
use std::borrow::Cow;

#[allow(clippy::too_many_arguments)]
const fn candidate(
    name: &'static str,
    experience_years: u32,
    education: &'static str,
    skills: &'static [Cow<'static, str>],
    gender: Gender,
    age: u32,
    fair_score: f64,
    historically_biased_score: f64,
) -> Candidate {
    Candidate {
        name: Cow::Borrowed(name),
        experience_years,
        education: Cow::Borrowed(education),
        skills: Cow::Borrowed(skills),
        protected: ProtectedAttributes { gender, age },
        fair_score,
        historically_biased_score,
    }
}

static CANDIDATES: [Candidate; 6] = [
    candidate(
        "Alex Johnson",
        8,
        "BS Computer Science",
        &[Cow::Borrowed("React"), Cow::Borrowed("Node.js"), Cow::Borrowed("AWS")],
        Gender::Male,
        32,
        87.0,
        92.0,
    ),
    candidate(
        "Sarah Martinez",
        9,
        "MS Software Engineering",
        &[Cow::Borrowed("Python"), Cow::Borrowed("ML"), Cow::Borrowed("Docker")],
        Gender::Female,
        34,
        91.0,
        79.0,
    ),
    candidate(
        "Marcus Chen",
        6,
        "BS Computer Engineering",
        &[Cow::Borrowed("Java"), Cow::Borrowed("Spring"), Cow::Borrowed("Kubernetes")],
        Gender::Male,
        28,
        82.0,
        85.0,
    ),
    candidate(
        "Emily Rodriguez",
        10,
        "PhD Computer Science",
        &[Cow::Borrowed("AI/ML"), Cow::Borrowed("Research"), Cow::Borrowed("Python")],
        Gender::Female,
        38,
        94.0,
        81.0,
    ),
    candidate(
        "James Wilson",
        7,
        "BS Information Systems",
        &[Cow::Borrowed("JavaScript"), Cow::Borrowed("React"), Cow::Borrowed("SQL")],
        Gender::Male,
        55,
        85.0,
        76.0,
    ),
    candidate(
        "Priya Patel",
        5,
        "MS Data Science",
        &[Cow::Borrowed("Python"), Cow::Borrowed("TensorFlow"), Cow::Borrowed("SQL")],
        Gender::Female,
        26,
        79.0,
        72.0,
    ),
];

/// The six candidates of the hiring demonstration, in authored order
pub fn reference_candidates() -> &'static [Candidate] {
    &CANDIDATES
}
