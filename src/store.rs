/// In-memory lead storage.
///
/// The store owns every `Lead` for the process lifetime. It is constructed
/// once at startup, seeded with demo records, and handed to the handlers
/// through shared state rather than reached into globally. A single
/// `RwLock` serializes writes, so the enrichment flag and payload of a
/// record always change together.
use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::models::{CreateLead, Lead, LeadQueryParams};

/// Process-lifetime mapping from lead id to record.
pub struct LeadStore {
    leads: RwLock<HashMap<String, Lead>>,
}

impl LeadStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            leads: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store pre-populated with the three demo leads.
    pub fn seeded() -> Self {
        let store = Self::new();
        for lead in seed_leads() {
            store.insert(lead);
        }
        store
    }

    /// Stores a new lead under a freshly generated identifier and returns
    /// the full record.
    pub fn insert(&self, req: CreateLead) -> Lead {
        let lead = Lead {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            job_title: req.job_title,
            phone_number: req.phone_number,
            company: req.company,
            email: req.email,
            headcount: req.headcount,
            industry: req.industry,
            enriched: false,
            enrichment_data: None,
            priority_score: 0,
        };

        let mut leads = self.leads.write().unwrap();
        leads.insert(lead.id.clone(), lead.clone());
        lead
    }

    /// Looks up a lead by exact identifier match.
    pub fn get(&self, id: &str) -> Option<Lead> {
        let leads = self.leads.read().unwrap();
        leads.get(id).cloned()
    }

    /// Returns all leads matching the supplied filters.
    ///
    /// Filters combine with AND semantics. `industry` matches
    /// case-insensitively; `headcount` matches case-sensitively. The
    /// asymmetry is inherited from the upstream service and kept as-is.
    pub fn list(&self, params: &LeadQueryParams) -> Vec<Lead> {
        let leads = self.leads.read().unwrap();
        leads
            .values()
            .filter(|lead| match &params.industry {
                Some(industry) => lead.industry.to_lowercase() == industry.to_lowercase(),
                None => true,
            })
            .filter(|lead| match &params.headcount {
                Some(headcount) => &lead.headcount == headcount,
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Applies a mutation to an existing record in place, returning the
    /// updated record, or `None` if the id is unknown.
    pub fn update<F>(&self, id: &str, mutate: F) -> Option<Lead>
    where
        F: FnOnce(&mut Lead),
    {
        let mut leads = self.leads.write().unwrap();
        let lead = leads.get_mut(id)?;
        mutate(lead);
        Some(lead.clone())
    }

    /// Number of stored leads.
    pub fn len(&self) -> usize {
        self.leads.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LeadStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The three demo leads present at startup.
fn seed_leads() -> Vec<CreateLead> {
    vec![
        CreateLead {
            name: "John Doe".to_string(),
            job_title: "CEO".to_string(),
            phone_number: "+62812345678".to_string(),
            company: "Tech Startup".to_string(),
            email: "john@techstartup.com".to_string(),
            headcount: "11-50".to_string(),
            industry: "Technology".to_string(),
        },
        CreateLead {
            name: "Jane Smith".to_string(),
            job_title: "Marketing Director".to_string(),
            phone_number: "+62887654321".to_string(),
            company: "Construction Co".to_string(),
            email: "jane@constructco.com".to_string(),
            headcount: "51-200".to_string(),
            industry: "Construction".to_string(),
        },
        CreateLead {
            name: "Bob Wilson".to_string(),
            job_title: "CTO".to_string(),
            phone_number: "+62811112222".to_string(),
            company: "Logistics Plus".to_string(),
            email: "bob@logisticsplus.com".to_string(),
            headcount: "201-500".to_string(),
            industry: "Logistics".to_string(),
        },
    ]
}
