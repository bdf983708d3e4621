// Traits
pub use crate::entity_source::EntitySource;

// Structs and enums
pub use crate::api::WikidataApi;
pub use crate::claim::{Claim, ClaimValue};
pub use crate::claims::{extract_entity_refs, Claims};
pub use crate::config::WikidataProperty;
pub use crate::enricher::{enrich_stub, Enricher};
pub use crate::entity::Entity;
pub use crate::entity_cache::EntityCache;
pub use crate::error::EnricherError;
pub use crate::stub::Stub;
pub use crate::time_value::{parse_date, TimePrecision, TimeValue};
