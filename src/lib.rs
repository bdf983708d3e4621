#![forbid(unsafe_code)]
#![warn(
    clippy::cognitive_complexity,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::doc_link_with_quotes,
    clippy::doc_markdown,
    clippy::empty_line_after_outer_attr,
    clippy::empty_structs_with_brackets,
    keyword_idents,
    clippy::missing_const_for_fn,
    missing_copy_implementations,
    missing_debug_implementations,
    clippy::missing_panics_doc,
    clippy::mod_module_files,
    non_ascii_idents,
    noop_method_call,
    clippy::option_if_let_else,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::semicolon_if_nothing_returned,
    clippy::unseparated_literal_suffix,
    clippy::shadow_unrelated,
    clippy::similar_names,
    unused_extern_crates,
    unused_import_braces,
    clippy::unused_self,
    clippy::use_debug,
    clippy::used_underscore_binding,
    clippy::useless_let_if_seq,
    clippy::wildcard_dependencies,
    clippy::wildcard_imports
)]

//! **Wikidata enricher** fills in the missing fields of a game metadata stub
//! (title, description, release date, languages) from the stub's
//! [Wikidata](https://www.wikidata.org) entity, using the `wbgetentities`
//! module of the [action API](https://www.wikidata.org/w/api.php).
//!
//! Enrichment is additive: a field that already has a value is never changed,
//! and a failed lookup leaves the stub as it was.

pub mod api;
pub mod api_builder;
pub mod claim;
pub mod claims;
pub mod config;
pub mod enricher;
pub mod entity;
pub mod entity_cache;
pub mod entity_source;
pub mod error;
pub mod language;
pub mod language_strings;
pub mod prelude;
pub mod stub;
pub mod time_value;

pub use api::WikidataApi;
pub use api_builder::WikidataApiBuilder;
pub use claim::{Claim, ClaimValue};
pub use claims::Claims;
pub use config::WikidataProperty;
pub use enricher::{enrich_stub, Enricher};
pub use entity::Entity;
pub use entity_cache::EntityCache;
pub use entity_source::EntitySource;
pub use error::EnricherError;
pub use language_strings::LanguageStrings;
pub use stub::Stub;
pub use time_value::{parse_date, TimePrecision, TimeValue};
