use serde::{Deserialize, Serialize};

// ============ Core Models ============

/// A prospective contact/business record managed by the registry.
///
/// Identity fields (`name` through `industry`) are fixed at creation; only
/// `enriched`, `enrichment_data` and `priority_score` change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Server-generated unique identifier (canonical UUIDv4 string).
    pub id: String,
    /// Full name of the contact.
    pub name: String,
    /// Job title at the company.
    pub job_title: String,
    /// Phone number, free-form.
    pub phone_number: String,
    /// Company name.
    pub company: String,
    /// Email address, free-form (duplicates allowed).
    pub email: String,
    /// Company headcount band (e.g. "11-50").
    pub headcount: String,
    /// Industry sector (e.g. "Technology").
    pub industry: String,
    /// Whether the lead has been enriched.
    pub enriched: bool,
    /// Enrichment payload; present exactly when `enriched` is true.
    pub enrichment_data: Option<EnrichmentData>,
    /// Computed priority score; 0 until the lead is enriched.
    pub priority_score: u32,
}

/// Synthetic enrichment payload derived from a lead.
///
/// Fixed, named fields rather than a loose JSON map so the wire shape is
/// checked at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentData {
    pub linkedin_url: String,
    pub company_size_verified: bool,
    pub company_revenue: String,
    pub technologies_used: Vec<String>,
    pub recent_funding: String,
    pub decision_maker_score: u32,
}

// ============ API Request/Response Models ============

/// Request payload for creating a lead. All seven fields are required;
/// the JSON extractor rejects bodies that are missing any of them.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLead {
    pub name: String,
    pub job_title: String,
    pub phone_number: String,
    pub company: String,
    pub email: String,
    pub headcount: String,
    pub industry: String,
}

/// Query parameters for lead listing.
#[derive(Debug, Default, Deserialize)]
pub struct LeadQueryParams {
    /// Filter by industry (case-insensitive exact match).
    pub industry: Option<String>,
    /// Filter by headcount band (case-sensitive exact match).
    pub headcount: Option<String>,
}

/// Response payload for `GET /leads`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LeadListResponse {
    pub leads: Vec<Lead>,
    pub total: usize,
}

/// Response payload for operations that return a message plus the
/// affected lead (create, enrich, score).
#[derive(Debug, Serialize, Deserialize)]
pub struct LeadMutationResponse {
    pub message: String,
    pub lead: Lead,
}

/// Static catalog of recognized filter values for client-side forms.
/// Independent of what leads currently exist in the store.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterOptions {
    pub industries: Vec<String>,
    pub headcounts: Vec<String>,
}
