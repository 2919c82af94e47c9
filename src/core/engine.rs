use crate::core::filter::{Facet, FilterCriteria};
use crate::core::pagination::PageWindow;
use crate::core::rng::daily_seed;
use crate::core::shuffle::seeded_shuffle;
use crate::core::slug::{decode_slug, listing_slug};
use crate::domain::model::{DirectoryView, Listing};
use crate::domain::ports::ListingStore;
use crate::utils::error::{DirectoryError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Composes the pure pipeline (filter -> daily shuffle -> pagination) over a
/// listing store, and resolves slug tokens to single listings. Holds no state
/// of its own beyond the store handle; every call works on its own snapshot.
pub struct DirectoryEngine<S: ListingStore> {
    store: S,
}

impl<S: ListingStore> DirectoryEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Evaluate one directory-listing request for the given calendar day.
    /// Same criteria, window and date always produce the same view.
    pub async fn directory_view(
        &self,
        criteria: &FilterCriteria,
        window: &PageWindow,
        date: NaiveDate,
    ) -> Result<DirectoryView> {
        let snapshot = self.store.fetch_visible_listings().await?;
        let filtered = criteria.apply(&snapshot);
        let shuffled = seeded_shuffle(&filtered, daily_seed(date));

        tracing::debug!(
            snapshot = snapshot.len(),
            filtered = filtered.len(),
            disclosed = window.disclosed(),
            "directory view evaluated"
        );

        Ok(DirectoryView {
            has_more: window.has_more(shuffled.len()),
            listings: window.visible_slice(&shuffled).to_vec(),
        })
    }

    /// Shorthand over a caller-owned [`DirectoryState`].
    pub async fn view(&self, state: &DirectoryState, date: NaiveDate) -> Result<DirectoryView> {
        self.directory_view(&state.criteria, &state.window, date)
            .await
    }

    /// Resolve a URL token to one listing. Tokens shaped like a raw storage
    /// id short-circuit to a direct lookup (old share links predate slugs);
    /// everything else goes through slug decode and a keyed code lookup.
    pub async fn detail_view(&self, token: &str) -> Result<Listing> {
        if looks_like_raw_id(token) {
            if let Some(listing) = self.store.find_by_id(token).await? {
                return Ok(listing);
            }
            tracing::debug!(token, "raw id lookup missed, falling back to slug decode");
        }

        let code = decode_slug(token)?;
        self.store
            .find_by_registration_code(&code)
            .await?
            .ok_or(DirectoryError::RegistrationCodeNotFound { code })
    }

    /// Canonical slug for share links.
    pub fn share_slug(&self, listing: &Listing) -> String {
        listing_slug(&listing.display_name, &listing.registration_code)
    }
}

fn looks_like_raw_id(token: &str) -> bool {
    static UUID_RE: OnceLock<Regex> = OnceLock::new();
    let re = UUID_RE.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
            .unwrap()
    });
    re.is_match(token)
}

/// Caller-owned view state: the current criteria plus the disclosure window.
/// Every criteria mutation resets the window before the next evaluation, so
/// a narrowed search never keeps a stale disclosed count.
#[derive(Debug, Clone)]
pub struct DirectoryState {
    criteria: FilterCriteria,
    window: PageWindow,
}

impl DirectoryState {
    pub fn new(page_size: usize) -> Result<Self> {
        Ok(Self {
            criteria: FilterCriteria::default(),
            window: PageWindow::new(page_size)?,
        })
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.window.reset();
    }

    pub fn set_facet(&mut self, facet: Facet, values: Vec<String>) {
        *self.criteria.selected_mut(facet) = values;
        self.window.reset();
    }

    pub fn add_filter(&mut self, facet: Facet, value: impl Into<String>) {
        let value = value.into();
        let selected = self.criteria.selected_mut(facet);
        if !selected.contains(&value) {
            selected.push(value);
        }
        self.window.reset();
    }

    pub fn remove_filter(&mut self, facet: Facet, value: &str) {
        self.criteria.selected_mut(facet).retain(|v| v != value);
        self.window.reset();
    }

    pub fn load_more(&mut self) {
        self.window.load_more();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};

    struct MockStore {
        listings: Vec<Listing>,
    }

    #[async_trait]
    impl ListingStore for MockStore {
        async fn fetch_visible_listings(&self) -> Result<Vec<Listing>> {
            Ok(self.listings.clone())
        }

        async fn find_by_registration_code(&self, code: &str) -> Result<Option<Listing>> {
            Ok(self
                .listings
                .iter()
                .find(|l| l.registration_code == code)
                .cloned())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Listing>> {
            Ok(self.listings.iter().find(|l| l.id == id).cloned())
        }
    }

    fn sample_listings(count: usize) -> Vec<Listing> {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        (0..count)
            .map(|i| Listing {
                id: format!("id-{:03}", i),
                display_name: format!("Profissional {:03}", i),
                registration_code: format!("23/{:06}", i),
                bio: String::new(),
                formation_text: String::new(),
                areas: if i % 2 == 0 {
                    vec!["Infância".to_string()]
                } else {
                    vec!["Casais".to_string()]
                },
                approaches: vec![],
                audiences: vec![],
                contact_handle: String::new(),
                created_at: base - Duration::days(i as i64),
                visible: true,
            })
            .collect()
    }

    fn engine(count: usize) -> DirectoryEngine<MockStore> {
        DirectoryEngine::new(MockStore {
            listings: sample_listings(count),
        })
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn view_is_stable_within_a_day() {
        let engine = engine(30);
        let state = DirectoryState::new(10).unwrap();
        let today = date(2026, 8, 25);

        let first = engine.view(&state, today).await.unwrap();
        let second = engine.view(&state, today).await.unwrap();

        let ids = |v: &DirectoryView| -> Vec<String> {
            v.listings.iter().map(|l| l.id.clone()).collect()
        };
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.listings.len(), 10);
        assert!(first.has_more);
    }

    #[tokio::test]
    async fn view_reorders_across_days() {
        let engine = engine(30);
        let state = DirectoryState::new(30).unwrap();

        let monday = engine.view(&state, date(2026, 8, 24)).await.unwrap();
        let tuesday = engine.view(&state, date(2026, 8, 25)).await.unwrap();

        let ids = |v: &DirectoryView| -> Vec<String> {
            v.listings.iter().map(|l| l.id.clone()).collect()
        };
        // Both days expose the same set.
        let mut a = ids(&monday);
        let mut b = ids(&tuesday);
        a.sort();
        b.sort();
        assert_eq!(a, b);
        assert_ne!(ids(&monday), ids(&tuesday));
    }

    #[tokio::test]
    async fn filtering_happens_before_shuffle_and_pagination() {
        let engine = engine(20);
        let mut state = DirectoryState::new(5).unwrap();
        state.add_filter(Facet::Areas, "Infância");

        let view = engine.view(&state, date(2026, 8, 25)).await.unwrap();
        assert_eq!(view.listings.len(), 5);
        assert!(view.has_more);
        assert!(view
            .listings
            .iter()
            .all(|l| l.areas.contains(&"Infância".to_string())));
    }

    #[tokio::test]
    async fn load_more_extends_and_criteria_change_resets() {
        let engine = engine(25);
        let mut state = DirectoryState::new(10).unwrap();
        let today = date(2026, 8, 25);

        state.load_more();
        assert_eq!(state.window().disclosed(), 20);
        let view = engine.view(&state, today).await.unwrap();
        assert_eq!(view.listings.len(), 20);
        assert!(view.has_more);

        state.set_query("profissional");
        assert_eq!(state.window().disclosed(), 10);

        state.load_more();
        state.add_filter(Facet::Areas, "Casais");
        assert_eq!(state.window().disclosed(), 10);

        state.load_more();
        state.remove_filter(Facet::Areas, "Casais");
        assert_eq!(state.window().disclosed(), 10);

        state.load_more();
        state.set_facet(Facet::Audiences, vec!["Adultos".to_string()]);
        assert_eq!(state.window().disclosed(), 10);
    }

    #[tokio::test]
    async fn detail_view_round_trips_through_the_share_slug() {
        let engine = engine(5);
        let listing = sample_listings(5).into_iter().nth(2).unwrap();

        let slug = engine.share_slug(&listing);
        let resolved = engine.detail_view(&slug).await.unwrap();
        assert_eq!(resolved.registration_code, listing.registration_code);
        assert_eq!(resolved.id, listing.id);
    }

    #[tokio::test]
    async fn detail_view_rejects_plain_text() {
        let engine = engine(5);
        let err = engine.detail_view("totally-plain-text").await.unwrap_err();
        assert!(matches!(err, DirectoryError::MalformedSlug { .. }));
    }

    #[tokio::test]
    async fn detail_view_distinguishes_unknown_codes() {
        let engine = engine(5);
        let err = engine
            .detail_view("alguem-crp-99999999")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::RegistrationCodeNotFound { .. }
        ));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn uuid_tokens_short_circuit_to_id_lookup() {
        let mut listings = sample_listings(2);
        listings[0].id = "123e4567-e89b-12d3-a456-426614174000".to_string();
        let engine = DirectoryEngine::new(MockStore { listings });

        let resolved = engine
            .detail_view("123e4567-e89b-12d3-a456-426614174000")
            .await
            .unwrap();
        assert_eq!(resolved.registration_code, "23/000000");
    }

    #[tokio::test]
    async fn unknown_uuid_falls_back_to_slug_decode() {
        let engine = engine(2);
        let err = engine
            .detail_view("123e4567-e89b-12d3-a456-426614174000")
            .await
            .unwrap_err();
        // No such id, and the token carries no slug marker either.
        assert!(matches!(err, DirectoryError::MalformedSlug { .. }));
    }
}
