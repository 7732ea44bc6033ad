//! The two-pass search pipeline: classifier → name pass → category pass →
//! enrichment.
//!
//! The executor is behind the [`PlaceSearch`] seam so the pass policy can be
//! tested with a recording fake instead of a live mirror.

use cafehop_core::{Place, SearchQuery};
use cafehop_overpass::{OverpassClient, OverpassError, SearchParams};
use cafehop_yelp::{enrich_thumbnails, YelpClient};

/// Name-filtered passes use a tighter radius; an exact-name match close by
/// beats a far-away one, and the category pass covers the full radius anyway.
const NAME_PASS_MAX_RADIUS_KM: f64 = 1.5;

/// One executor invocation. Implemented by [`OverpassClient`] in production.
pub(crate) trait PlaceSearch {
    async fn search_places(&self, params: &SearchParams) -> Result<Vec<Place>, OverpassError>;
}

impl PlaceSearch for OverpassClient {
    async fn search_places(&self, params: &SearchParams) -> Result<Vec<Place>, OverpassError> {
        self.search(params).await
    }
}

/// The pipeline result, keeping "nothing matched" distinct from "upstream
/// was unreachable" so the handler can decide the degradation policy.
#[derive(Debug)]
pub(crate) enum SearchOutcome {
    Found(Vec<Place>),
    Unavailable { reason: String },
}

pub struct SearchService<B> {
    backend: B,
    yelp: Option<YelpClient>,
}

impl<B: PlaceSearch> SearchService<B> {
    pub(crate) fn new(backend: B, yelp: Option<YelpClient>) -> Self {
        Self { backend, yelp }
    }

    /// Runs the full search for one request.
    pub(crate) async fn run(&self, query: &SearchQuery) -> SearchOutcome {
        let mut places = match self.fetch(query).await {
            Ok(places) => places,
            Err(err) => {
                tracing::error!(term = %query.term, error = %err, "upstream search failed");
                return SearchOutcome::Unavailable {
                    reason: err.to_string(),
                };
            }
        };

        if let Some(yelp) = &self.yelp {
            enrich_thumbnails(yelp, &mut places, query.center, query.radius_km).await;
        }

        SearchOutcome::Found(places)
    }

    /// Precision-first pass policy: a non-empty name-filtered pass
    /// short-circuits; otherwise the broad category pass decides.
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<Place>, OverpassError> {
        if !query.is_generic() {
            let name_pass = SearchParams {
                center: query.center,
                radius_km: query.radius_km.min(NAME_PASS_MAX_RADIUS_KM),
                name_filter: Some(query.term.clone()),
                restrict_amenity: false,
            };
            let found = self.backend.search_places(&name_pass).await?;
            if !found.is_empty() {
                return Ok(found);
            }
        }

        let category_pass = SearchParams {
            center: query.center,
            radius_km: query.radius_km,
            name_filter: None,
            restrict_amenity: true,
        };
        self.backend.search_places(&category_pass).await
    }
}
