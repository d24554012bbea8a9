// src/service/assistant_service.rs
use std::cmp::Ordering;
use std::sync::Arc;

use crate::{
    config::Config,
    db::{
        bookingdb::BookingExt, contractordb::ContractorExt, db::DBClient, disputedb::DisputeExt,
        jobdb::JobExt,
    },
    models::{
        bookingmodel::BookingWithContractor, contractormodel::Contractor, disputemodel::Dispute,
        jobmodel::Job,
    },
    service::error::ServiceError,
};

const SYSTEM_PROMPT: &str = "You are the HouseConnect Pro assistant for a local-services \
marketplace in India. Answer only questions about the contractors, bookings, disputes and job \
posts in the data snapshot you are given, or about how to use the platform. Politely decline \
anything else. Keep answers short and concrete, quote prices in rupees as listed.";

/// Read-only view of the marketplace handed to the responder. The assistant
/// never mutates state.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    pub contractors: Vec<Contractor>,
    pub bookings: Vec<BookingWithContractor>,
    pub disputes: Vec<Dispute>,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone)]
pub struct AssistantService {
    db_client: Arc<DBClient>,
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl AssistantService {
    pub fn new(db_client: Arc<DBClient>, config: &Config) -> Self {
        Self {
            db_client,
            http: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }

    /// Answer a user message. With an API key the snapshot and message go to
    /// Gemini; without one, or when the API call fails, the local keyword
    /// responder answers from the same snapshot.
    pub async fn chat(&self, message: &str) -> Result<String, ServiceError> {
        let snapshot = self.load_snapshot().await?;

        if let Some(api_key) = self.api_key.clone() {
            let prompt = format!(
                "Current marketplace data:\n{}\n\nUser question: {}",
                snapshot_text(&snapshot),
                message
            );
            match self.gemini_generate(&api_key, &prompt).await {
                Ok(reply) => return Ok(reply),
                Err(err) => {
                    tracing::warn!("Gemini request failed, using local responder: {}", err);
                }
            }
        }

        Ok(fallback_reply(message, &snapshot))
    }

    /// Draft a listing description for a new contractor or job post.
    pub async fn generate_description(
        &self,
        service: &str,
        location: &str,
        title: Option<&str>,
    ) -> Result<String, ServiceError> {
        if let Some(api_key) = self.api_key.clone() {
            let prompt = format!(
                "Write a two to three sentence marketing description for a {} service listing \
                 in {}, India.{} Mention reliability and transparent pricing. Plain text only.",
                service,
                location,
                title
                    .map(|t| format!(" The listing title is \"{}\".", t))
                    .unwrap_or_default()
            );
            match self.gemini_generate(&api_key, &prompt).await {
                Ok(description) => return Ok(description),
                Err(err) => {
                    tracing::warn!("Gemini request failed, using template description: {}", err);
                }
            }
        }

        Ok(template_description(service, location, title))
    }

    async fn load_snapshot(&self) -> Result<MarketSnapshot, ServiceError> {
        Ok(MarketSnapshot {
            contractors: self.db_client.get_contractors(None).await?,
            bookings: self.db_client.get_bookings().await?,
            disputes: self.db_client.get_disputes().await?,
            jobs: self.db_client.get_jobs().await?,
        })
    }

    async fn gemini_generate(&self, api_key: &str, prompt: &str) -> Result<String, ServiceError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, api_key
        );

        let payload = serde_json::json!({
            "system_instruction": { "parts": [{ "text": SYSTEM_PROMPT }] },
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": 0.4, "maxOutputTokens": 512 }
        });

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| ServiceError::Assistant(e.to_string()))?;

        let response_body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ServiceError::Assistant(e.to_string()))?;

        let text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        text.ok_or_else(|| {
            ServiceError::Assistant(
                response_body["error"]["message"]
                    .as_str()
                    .unwrap_or("Gemini returned no text")
                    .to_string(),
            )
        })
    }
}

/// Plain-text snapshot fed to Gemini as grounding context.
fn snapshot_text(snapshot: &MarketSnapshot) -> String {
    let mut out = String::from("Contractors:\n");
    for c in &snapshot.contractors {
        out.push_str(&format!(
            "- {} | {} | {} | {} | rated {:.1} ({} reviews) | {} jobs done | {} | {}\n",
            c.name,
            c.service,
            c.location,
            c.price,
            c.rating,
            c.reviews,
            c.completed_jobs,
            if c.available { "available" } else { "booked" },
            if c.verified { "verified" } else { "unverified" },
        ));
    }

    out.push_str(&format!("\nBookings ({} total):\n", snapshot.bookings.len()));
    for b in snapshot.bookings.iter().take(20) {
        out.push_str(&format!(
            "- #{} with {} on {} at {}, status {:?}\n",
            b.booking.id, b.contractor_name, b.booking.date, b.booking.time, b.booking.status
        ));
    }

    out.push_str(&format!("\nOpen job posts ({} total):\n", snapshot.jobs.len()));
    for j in snapshot.jobs.iter().take(10) {
        out.push_str(&format!(
            "- {} needed in {} ({:?})\n",
            j.service, j.location, j.urgency
        ));
    }

    out.push_str(&format!("\nDisputes on file: {}\n", snapshot.disputes.len()));
    out
}

/// Keyword-matching responder used when no Gemini key is configured (or the
/// API call fails). Pure function over the snapshot so it is easy to test.
pub fn fallback_reply(message: &str, snapshot: &MarketSnapshot) -> String {
    let msg = message.to_lowercase();
    let contractors = &snapshot.contractors;

    if msg.contains("how many") || msg.contains("count") {
        let available = contractors.iter().filter(|c| c.available).count();
        let verified = contractors.iter().filter(|c| c.verified).count();
        let mut services: Vec<&str> = contractors.iter().map(|c| c.service.as_str()).collect();
        services.sort_unstable();
        services.dedup();
        return format!(
            "We currently list {} professionals across {} services — {} available right now and \
             {} verified. There are {} bookings and {} open job posts.",
            contractors.len(),
            services.len(),
            available,
            verified,
            snapshot.bookings.len(),
            snapshot.jobs.len()
        );
    }

    if msg.contains("how") && (msg.contains("book") || msg.contains("hire") || msg.contains("work"))
    {
        return "Open the professional you like, choose a date and a time slot, and confirm the \
                booking. The contractor is reserved for that slot immediately. You can cancel or \
                pay from the My Bookings page, and report any issue through the dispute form."
            .to_string();
    }

    // Checked before the price branch: "rating" would otherwise match "rate".
    if contains_any(&msg, &["rating", "best", "top", "recommend"]) {
        let mut by_rating: Vec<&Contractor> = contractors.iter().collect();
        by_rating.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        if by_rating.is_empty() {
            return "No professionals are listed yet.".to_string();
        }
        return format!(
            "Highest rated professionals:\n{}",
            list_contractors(by_rating.iter().take(3).copied())
        );
    }

    if contains_any(&msg, &["price", "cost", "cheap", "rate", "charge", "budget"]) {
        let mut by_price: Vec<&Contractor> = contractors.iter().collect();
        by_price.sort_by(|a, b| {
            let pa = parse_price(&a.price).unwrap_or(f64::MAX);
            let pb = parse_price(&b.price).unwrap_or(f64::MAX);
            pa.partial_cmp(&pb).unwrap_or(Ordering::Equal)
        });
        if by_price.is_empty() {
            return "No professionals are listed yet.".to_string();
        }
        return format!(
            "Most affordable options:\n{}",
            list_contractors(by_price.iter().take(3).copied())
        );
    }

    if contains_any(&msg, &["available", "availability", "free"]) {
        let available: Vec<&Contractor> = contractors.iter().filter(|c| c.available).collect();
        if available.is_empty() {
            return "Every professional is fully booked right now. Check back after a booking \
                    completes or is cancelled."
                .to_string();
        }
        return format!(
            "Available right now:\n{}",
            list_contractors(available.iter().take(5).copied())
        );
    }

    if contains_any(&msg, &["verified", "verification", "trusted", "background"]) {
        let verified: Vec<&Contractor> = contractors.iter().filter(|c| c.verified).collect();
        if verified.is_empty() {
            return "None of the current listings carry a verification badge yet.".to_string();
        }
        return format!(
            "Verified professionals:\n{}",
            list_contractors(verified.iter().take(5).copied())
        );
    }

    // Service category, matched on a short stem so "plumber" finds "Plumbing".
    let by_service: Vec<&Contractor> = contractors
        .iter()
        .filter(|c| msg.contains(&service_stem(&c.service)))
        .collect();
    if !by_service.is_empty() {
        return format!(
            "{} professionals:\n{}",
            by_service[0].service,
            list_contractors(by_service.iter().take(5).copied())
        );
    }

    // Neighbourhood or city mentioned in the message.
    let by_location: Vec<&Contractor> = contractors
        .iter()
        .filter(|c| {
            c.location
                .split(',')
                .map(|part| part.trim().to_lowercase())
                .any(|part| part.len() > 2 && msg.contains(&part))
        })
        .collect();
    if !by_location.is_empty() {
        return format!(
            "Professionals in that area:\n{}",
            list_contractors(by_location.iter().take(5).copied())
        );
    }

    // A contractor mentioned by name.
    if let Some(c) = contractors.iter().find(|c| {
        c.name
            .split_whitespace()
            .any(|token| token.len() > 2 && msg.contains(&token.to_lowercase()))
    }) {
        return format!(
            "{} — {} in {}. {} with a {:.1} rating over {} reviews, {} completed jobs. {}{}",
            c.name,
            c.service,
            c.location,
            c.price,
            c.rating,
            c.reviews,
            c.completed_jobs,
            if c.available {
                "Available now."
            } else {
                "Currently booked."
            },
            c.description
                .as_deref()
                .map(|d| format!(" {}", d))
                .unwrap_or_default()
        );
    }

    "I can help you compare prices, find top-rated or verified professionals, check who is \
     available, or look up a contractor by service, area or name. Try \"cheapest plumber\" or \
     \"best cleaner in Indiranagar\"."
        .to_string()
}

/// Deterministic description used when Gemini is not configured.
pub fn template_description(service: &str, location: &str, title: Option<&str>) -> String {
    let lead = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("{} — ", t))
        .unwrap_or_default();

    format!(
        "{}Professional {} services in {}. Background-checked experts, transparent pricing and \
         on-time arrival. Book a convenient slot online and pay only when the work is done.",
        lead,
        service.trim().to_lowercase(),
        location.trim()
    )
}

fn contains_any(msg: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| msg.contains(needle))
}

fn list_contractors<'a>(items: impl Iterator<Item = &'a Contractor>) -> String {
    items
        .map(|c| {
            format!(
                "• {} — {}, {} — {}, rated {:.1} ({} reviews)",
                c.name, c.service, c.location, c.price, c.rating, c.reviews
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First few characters of the lowercased service name: long enough to be
/// specific, short enough that "plumber" still matches "Plumbing".
fn service_stem(service: &str) -> String {
    let lower = service.to_lowercase();
    lower.chars().take(5).collect()
}

/// Pull the numeric part out of a display price like "₹299/hr".
fn parse_price(price: &str) -> Option<f64> {
    let digits: String = price
        .chars()
        .take_while(|c| *c != '/')
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn contractor(
        id: i64,
        name: &str,
        service: &str,
        location: &str,
        price: &str,
        rating: f64,
        available: bool,
        verified: bool,
    ) -> Contractor {
        Contractor {
            id,
            name: name.to_string(),
            service: service.to_string(),
            location: location.to_string(),
            price: price.to_string(),
            rating,
            reviews: 40,
            completed_jobs: 60,
            available,
            verified,
            description: Some("Reliable and punctual.".to_string()),
            image: Some("🔧".to_string()),
            created_at: Utc::now(),
        }
    }

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot {
            contractors: vec![
                contractor(
                    1,
                    "Rajesh Kumar",
                    "Plumbing",
                    "Koramangala, Bengaluru",
                    "₹299/hr",
                    4.8,
                    true,
                    true,
                ),
                contractor(
                    2,
                    "Priya Sharma",
                    "Cleaning",
                    "Indiranagar, Bengaluru",
                    "₹199/hr",
                    4.9,
                    false,
                    true,
                ),
                contractor(
                    3,
                    "Sunita Reddy",
                    "Painting",
                    "Whitefield, Bengaluru",
                    "₹249/hr",
                    4.2,
                    true,
                    false,
                ),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("₹299/hr"), Some(299.0));
        assert_eq!(parse_price("₹1,299/visit"), Some(1299.0));
        assert_eq!(parse_price("free"), None);
    }

    #[test]
    fn price_query_leads_with_cheapest() {
        let reply = fallback_reply("who is the cheapest?", &snapshot());
        let priya = reply.find("Priya").unwrap();
        let sunita = reply.find("Sunita").unwrap();
        assert!(priya < sunita, "cheapest should be listed first: {reply}");
    }

    #[test]
    fn rating_query_leads_with_top_rated() {
        let reply = fallback_reply("who do you recommend?", &snapshot());
        assert!(reply.find("Priya").unwrap() < reply.find("Rajesh").unwrap());
    }

    #[test]
    fn availability_query_skips_booked_contractors() {
        let reply = fallback_reply("who is available today?", &snapshot());
        assert!(reply.contains("Rajesh"));
        assert!(reply.contains("Sunita"));
        assert!(!reply.contains("Priya"));
    }

    #[test]
    fn verified_query_lists_badged_only() {
        let reply = fallback_reply("show me verified pros", &snapshot());
        assert!(reply.contains("Rajesh"));
        assert!(reply.contains("Priya"));
        assert!(!reply.contains("Sunita"));
    }

    #[test]
    fn service_query_matches_on_stem() {
        let reply = fallback_reply("i need a plumber", &snapshot());
        assert!(reply.contains("Plumbing"));
        assert!(reply.contains("Rajesh"));
        assert!(!reply.contains("Priya"));
    }

    #[test]
    fn location_query_filters_by_area() {
        let reply = fallback_reply("anyone in whitefield?", &snapshot());
        assert!(reply.contains("Sunita"));
        assert!(!reply.contains("Rajesh"));
    }

    #[test]
    fn name_query_returns_profile() {
        let reply = fallback_reply("tell me about rajesh", &snapshot());
        assert!(reply.contains("Plumbing"));
        assert!(reply.contains("4.8"));
    }

    #[test]
    fn count_query_reports_totals() {
        let reply = fallback_reply("how many contractors do you have?", &snapshot());
        assert!(reply.contains("3 professionals"));
        assert!(reply.contains("2 available"));
    }

    #[test]
    fn how_to_query_explains_booking() {
        let reply = fallback_reply("how do I book someone?", &snapshot());
        assert!(reply.contains("time slot"));
    }

    #[test]
    fn unknown_query_gets_help_text() {
        let reply = fallback_reply("what is the weather like?", &snapshot());
        assert!(reply.contains("I can help"));
    }

    #[test]
    fn test_template_description() {
        let desc = template_description("Plumbing", "Koramangala", Some("Fast fixes"));
        assert!(desc.starts_with("Fast fixes — "));
        assert!(desc.contains("plumbing services in Koramangala"));

        let bare = template_description("Cleaning", "HSR Layout", None);
        assert!(bare.starts_with("Professional cleaning services"));
    }
}
