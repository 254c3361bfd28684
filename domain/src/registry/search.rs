use crate::search::{ResultMode, SearchResult, Stance, Topic};

const fn result(
    title: &'static str,
    source: &'static str,
    snippet: &'static str,
    stance: Stance,
) -> SearchResult {
    SearchResult {
        title,
        source,
        snippet,
        stance,
    }
}

static CLIMATE_BALANCED: [SearchResult; 4] = [
    result(
        "Climate Change: Scientific Consensus and Evidence",
        "Nature",
        "Comprehensive analysis of peer-reviewed climate studies shows 97% agreement on human-caused warming...",
        Stance::Neutral,
    ),
    result(
        "Economic Impacts of Climate Policy",
        "World Bank",
        "Evaluating both costs and benefits of climate action across different economic models...",
        Stance::Neutral,
    ),
    result(
        "Renewable Energy: Progress and Challenges",
        "IEEE",
        "Technical assessment of renewable energy deployment, grid integration challenges, and cost trends...",
        Stance::Neutral,
    ),
    result(
        "Climate Skeptics Raise Valid Questions on Models",
        "Science Debate",
        "Some researchers question certainty levels in long-term climate projections and feedback loops...",
        Stance::Con,
    ),
];

static CLIMATE_BUBBLE: [SearchResult; 4] = [
    result(
        "Climate Crisis: Act Now or Face Disaster",
        "EcoWarrior",
        "We have only months left to save the planet. Anyone denying this is complicit in destruction...",
        Stance::Pro,
    ),
    result(
        "Green Energy Will Save Humanity",
        "Solar Future",
        "Renewable energy is perfect and has no downsides. Oil companies are pure evil...",
        Stance::Pro,
    ),
    result(
        "Why Climate Activists Are Right About Everything",
        "GreenVoice",
        "Every climate protest is justified. Anyone questioning methods is anti-science...",
        Stance::Pro,
    ),
    result(
        "Climate Action: The Only Moral Choice",
        "Earth Guardian",
        "Supporting any fossil fuel use makes you morally bankrupt. No compromise is acceptable...",
        Stance::Pro,
    ),
];

static HEALTHCARE_BALANCED: [SearchResult; 4] = [
    result(
        "Comparing Healthcare Systems Worldwide",
        "WHO",
        "Analysis of universal healthcare, private systems, and hybrid models across 50 countries...",
        Stance::Neutral,
    ),
    result(
        "Healthcare Policy: Trade-offs and Outcomes",
        "JAMA",
        "Examining cost, access, and quality outcomes across different healthcare policy approaches...",
        Stance::Neutral,
    ),
    result(
        "Medicare Expansion: Budget and Coverage Analysis",
        "CBO",
        "Independent analysis of costs, coverage expansion, and fiscal implications of policy proposals...",
        Stance::Neutral,
    ),
    result(
        "Private Healthcare: Efficiency and Innovation",
        "Health Economics",
        "Market-based approaches to healthcare have shown both successes and failures...",
        Stance::Neutral,
    ),
];

static HEALTHCARE_BUBBLE: [SearchResult; 4] = [
    result(
        "Universal Healthcare: The Only Humane Option",
        "HealthForAll",
        "Anyone opposing universal healthcare wants poor people to die. There is no debate...",
        Stance::Pro,
    ),
    result(
        "Why Private Healthcare Is Always Better",
        "FreeMarketHealth",
        "Government healthcare is socialist tyranny. Markets solve everything perfectly...",
        Stance::Con,
    ),
    result(
        "Insurance Companies Are Evil Corporations",
        "PatientFirst",
        "Private insurance exists only to deny care and profit from suffering...",
        Stance::Pro,
    ),
    result(
        "Government Healthcare Means Death Panels",
        "Liberty Health",
        "Universal healthcare will lead to rationing, waiting lists, and government control of life decisions...",
        Stance::Con,
    ),
];

static AI_BALANCED: [SearchResult; 4] = [
    result(
        "AI Progress: Capabilities and Limitations",
        "MIT Technology Review",
        "Current AI systems excel at pattern recognition but struggle with reasoning and common sense...",
        Stance::Neutral,
    ),
    result(
        "AI Safety Research: Current State and Challenges",
        "AI Alignment Forum",
        "Researchers work on alignment problems while acknowledging uncertainty about timelines...",
        Stance::Neutral,
    ),
    result(
        "AI in Healthcare: Promise and Pitfalls",
        "Nature Medicine",
        "AI diagnostic tools show potential but require careful validation and human oversight...",
        Stance::Neutral,
    ),
    result(
        "Economic Impact of AI Automation",
        "Brookings",
        "AI will displace some jobs while creating others. Policy responses matter greatly...",
        Stance::Neutral,
    ),
];

static AI_BUBBLE: [SearchResult; 4] = [
    result(
        "AI Will Destroy Humanity Unless We Stop Now",
        "AI Doomers",
        "Artificial general intelligence is imminent and will certainly kill us all. Shut it all down...",
        Stance::Con,
    ),
    result(
        "AI Is Humanity's Salvation",
        "Techno-Optimist",
        "AI will solve every problem: disease, poverty, climate change. No concerns are valid...",
        Stance::Pro,
    ),
    result(
        "Why AI Skeptics Are Luddites",
        "Future Now",
        "Anyone worried about AI safety is a fearmonger trying to hold back progress...",
        Stance::Pro,
    ),
    result(
        "AI Apocalypse: The End Is Near",
        "Tech Alarmist",
        "Every AI advance brings us closer to extinction. Anyone building AI is reckless...",
        Stance::Con,
    ),
];

/// Authored results for `(topic, mode)`
pub fn search_results(topic: Topic, mode: ResultMode) -> &'static [SearchResult] {
    match (topic, mode) {
        (Topic::Climate, ResultMode::Balanced) => &CLIMATE_BALANCED,
        (Topic::Climate, ResultMode::FilterBubble) => &CLIMATE_BUBBLE,
        (Topic::Healthcare, ResultMode::Balanced) => &HEALTHCARE_BALANCED,
        (Topic::Healthcare, ResultMode::FilterBubble) => &HEALTHCARE_BUBBLE,
        (Topic::Ai, ResultMode::Balanced) => &AI_BALANCED,
        (Topic::Ai, ResultMode::FilterBubble) => &AI_BUBBLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_unique_across_registry() {
        let mut titles: Vec<_> = Topic::ALL
            .into_iter()
            .flat_map(|t| ResultMode::ALL.into_iter().map(move |m| (t, m)))
            .flat_map(|(t, m)| search_results(t, m).iter().map(|r| r.title))
            .collect();
        let total = titles.len();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), total);
        assert_eq!(total, 24);
    }
}
