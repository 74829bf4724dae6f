/// Priority scoring for enriched leads.
///
/// Weights decision-maker strength, company size and industry into a
/// single number used to order outreach. Un-enriched leads score 0.
use crate::models::Lead;

fn headcount_score(headcount: &str) -> f64 {
    match headcount {
        "1-10" => 10.0,
        "11-50" => 25.0,
        "51-200" => 50.0,
        "201-500" => 75.0,
        "500+" => 100.0,
        _ => 0.0,
    }
}

fn industry_weight(industry: &str) -> f64 {
    match industry {
        "Technology" => 1.2,
        "Finance" => 1.15,
        "Healthcare" => 1.1,
        "Manufacturing" => 1.0,
        "Logistics" => 0.95,
        "Construction" => 0.9,
        _ => 1.0,
    }
}

/// Calculates the priority score for a lead.
pub fn calculate_priority_score(lead: &Lead) -> u32 {
    let data = match (&lead.enrichment_data, lead.enriched) {
        (Some(data), true) => data,
        _ => return 0,
    };

    let decision_maker = f64::from(data.decision_maker_score);
    let raw = decision_maker * 0.5
        + headcount_score(&lead.headcount) * 0.3
        + industry_weight(&lead.industry) * 20.0;

    raw.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::build_enrichment;
    use crate::models::Lead;

    fn lead(industry: &str, headcount: &str, enriched: bool) -> Lead {
        let name = "Test Person";
        Lead {
            id: "test-id".to_string(),
            name: name.to_string(),
            job_title: "CEO".to_string(),
            phone_number: "+62800000000".to_string(),
            company: "TestCo".to_string(),
            email: "test@testco.com".to_string(),
            headcount: headcount.to_string(),
            industry: industry.to_string(),
            enriched,
            enrichment_data: enriched.then(|| build_enrichment(name)),
            priority_score: 0,
        }
    }

    #[test]
    fn unenriched_lead_scores_zero() {
        assert_eq!(calculate_priority_score(&lead("Technology", "11-50", false)), 0);
    }

    #[test]
    fn enriched_technology_lead() {
        // 85*0.5 + 25*0.3 + 1.2*20 = 42.5 + 7.5 + 24 = 74
        assert_eq!(calculate_priority_score(&lead("Technology", "11-50", true)), 74);
    }

    #[test]
    fn enriched_finance_lead_rounds_up() {
        // 42.5 + 100*0.3 + 1.15*20 = 42.5 + 30 + 23 = 95.5 -> 96
        assert_eq!(calculate_priority_score(&lead("Finance", "500+", true)), 96);
    }

    #[test]
    fn unknown_headcount_contributes_nothing() {
        // 42.5 + 0 + 1.0*20 = 62.5 -> 63
        assert_eq!(calculate_priority_score(&lead("Retail", "huge", true)), 63);
    }
}
