use crate::domain::model::Listing;

/// One independently filterable tag dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Areas,
    Approaches,
    Audiences,
}

/// Active search and facet selection. Evaluation is a pure function over the
/// snapshot: original relative order is preserved, nothing is mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub areas: Vec<String>,
    pub approaches: Vec<String>,
    pub audiences: Vec<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.areas.is_empty()
            && self.approaches.is_empty()
            && self.audiences.is_empty()
    }

    pub fn selected(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Areas => &self.areas,
            Facet::Approaches => &self.approaches,
            Facet::Audiences => &self.audiences,
        }
    }

    pub fn selected_mut(&mut self, facet: Facet) -> &mut Vec<String> {
        match facet {
            Facet::Areas => &mut self.areas,
            Facet::Approaches => &mut self.approaches,
            Facet::Audiences => &mut self.audiences,
        }
    }

    /// A listing passes when it matches the free-text query (if any) AND
    /// every non-empty facet selection.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_with_term(listing, &self.lowered_term())
    }

    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        // Lower the search term once per pass, not once per listing.
        let term = self.lowered_term();
        listings
            .iter()
            .filter(|listing| self.matches_with_term(listing, &term))
            .cloned()
            .collect()
    }

    fn lowered_term(&self) -> String {
        self.query.trim().to_lowercase()
    }

    fn matches_with_term(&self, listing: &Listing, term: &str) -> bool {
        if !term.is_empty() && !text_match(listing, term) {
            return false;
        }

        facet_match(&self.areas, &listing.areas)
            && facet_match(&self.approaches, &listing.approaches)
            && facet_match(&self.audiences, &listing.audiences)
    }
}

// Case-insensitive substring match over the name, formation text and every
// tag value. The bio is intentionally not searched.
fn text_match(listing: &Listing, term: &str) -> bool {
    listing.display_name.to_lowercase().contains(term)
        || listing.formation_text.to_lowercase().contains(term)
        || any_tag_contains(&listing.approaches, term)
        || any_tag_contains(&listing.areas, term)
        || any_tag_contains(&listing.audiences, term)
}

fn any_tag_contains(tags: &[String], term: &str) -> bool {
    tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

// OR within a facet: an empty selection passes everything, otherwise the
// listing's tags must intersect the selection.
fn facet_match(selected: &[String], tags: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|wanted| tags.contains(wanted))
}
