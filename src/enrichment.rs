/// Synthetic lead enrichment.
///
/// The payload is derived entirely from the lead itself: a profile link
/// built from the name plus a fixed set of placeholder facts. No external
/// lookup happens, so enriching the same lead twice produces an identical
/// payload.
use crate::models::EnrichmentData;

const COMPANY_REVENUE: &str = "$1M - $10M";
const RECENT_FUNDING: &str = "Series A - $5M";
const TECHNOLOGIES: [&str; 3] = ["Python", "React", "AWS"];
const DECISION_MAKER_SCORE: u32 = 85;

/// Lowercases a name and replaces spaces with hyphens for use in a
/// profile URL ("Ann Lee" -> "ann-lee").
pub fn profile_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Derives the enrichment payload for a lead with the given name.
pub fn build_enrichment(name: &str) -> EnrichmentData {
    EnrichmentData {
        linkedin_url: format!("https://linkedin.com/in/{}", profile_slug(name)),
        company_size_verified: true,
        company_revenue: COMPANY_REVENUE.to_string(),
        technologies_used: TECHNOLOGIES.iter().map(|t| t.to_string()).collect(),
        recent_funding: RECENT_FUNDING.to_string(),
        decision_maker_score: DECISION_MAKER_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(profile_slug("Ann Lee"), "ann-lee");
        assert_eq!(profile_slug("John Doe"), "john-doe");
        assert_eq!(profile_slug("Bob"), "bob");
    }

    #[test]
    fn slug_handles_multiple_spaces() {
        assert_eq!(profile_slug("Mary Ann Lee"), "mary-ann-lee");
        assert_eq!(profile_slug("a  b"), "a--b");
    }

    #[test]
    fn payload_embeds_profile_link() {
        let data = build_enrichment("Ann Lee");
        assert_eq!(data.linkedin_url, "https://linkedin.com/in/ann-lee");
    }

    #[test]
    fn payload_carries_fixed_facts() {
        let data = build_enrichment("John Doe");
        assert!(data.company_size_verified);
        assert_eq!(data.company_revenue, "$1M - $10M");
        assert_eq!(data.technologies_used, vec!["Python", "React", "AWS"]);
        assert_eq!(data.recent_funding, "Series A - $5M");
        assert_eq!(data.decision_maker_score, 85);
    }

    #[test]
    fn payload_is_deterministic() {
        assert_eq!(build_enrichment("Jane Smith"), build_enrichment("Jane Smith"));
    }
}
