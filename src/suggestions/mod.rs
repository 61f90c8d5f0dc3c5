//! Suggestion sources for building queries.

pub mod index;

pub use index::{
    facet_term, filter_candidates, link_candidates, property_facets, related_links,
    suggestion_term, PropertyFacets,
};
