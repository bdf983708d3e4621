use crate::{
    config::{entity_page_url, WikidataProperty},
    entity_cache::EntityCache,
    entity_source::EntitySource,
    language::language_codes,
    stub::{self, Stub},
    time_value::parse_date,
    Entity,
};

/// Fills in the empty fields of a stub from the stub's Wikidata entity.
#[derive(Debug)]
pub struct Enricher<S> {
    cache: EntityCache<S>,
}

impl<S: EntitySource> Enricher<S> {
    pub fn new(source: S) -> Self {
        Self {
            cache: EntityCache::new(source),
        }
    }

    pub const fn cache(&self) -> &EntityCache<S> {
        &self.cache
    }

    /// Returns an enriched copy of `stub`. Fields that already have a value are
    /// never changed. If the stub has no Wikidata key, or the entity cannot be
    /// loaded, the copy is identical to the input.
    pub async fn enrich_stub(&mut self, stub: &Stub) -> Stub {
        let Some(key) = stub.wikidata_key() else {
            tracing::info!("No {} found in stub, skipping enrichment", stub::WIKIDATA_KEY);
            return stub.clone();
        };

        tracing::info!("Fetching data from Wikidata for {key}...");
        let Some(entity) = self.cache.get_entity(key).await else {
            tracing::warn!("Failed to fetch Wikidata entity {key}");
            return stub.clone();
        };

        let mut enriched = stub.clone();
        self.enrich_title(&mut enriched, &entity);
        self.enrich_description(&mut enriched, &entity);
        Self::enrich_release_date(&mut enriched, &entity);
        Self::enrich_languages(&mut enriched, &entity);
        if enriched.add_external_url(stub::WIKIDATA_URL_KEY, entity_page_url(key)) {
            tracing::info!("Added Wikidata URL");
        }
        for property in WikidataProperty::CURATED {
            self.report_curated(&entity, property).await;
        }
        enriched
    }

    fn enrich_title(&self, stub: &mut Stub, entity: &Entity) {
        if !stub.is_empty_field(stub::TITLE) {
            return;
        }
        if let Some(label) = entity.label(self.cache.language()).filter(|s| !s.is_empty()) {
            tracing::info!("Title: {label}");
            stub.set(stub::TITLE, label);
        }
    }

    fn enrich_description(&self, stub: &mut Stub, entity: &Entity) {
        if !stub.is_empty_field(stub::DESCRIPTION) {
            return;
        }
        if let Some(description) = entity
            .description(self.cache.language())
            .filter(|s| !s.is_empty())
        {
            tracing::info!("Description: {description}");
            stub.set(stub::DESCRIPTION, description);
        }
    }

    fn enrich_release_date(stub: &mut Stub, entity: &Entity) {
        if !stub.is_empty_field(stub::RELEASE_DATE) {
            return;
        }
        let release_date = entity
            .claims()
            .time_values(WikidataProperty::PublicationDate.id())
            .into_iter()
            .find_map(parse_date);
        if let Some(release_date) = release_date {
            tracing::info!("ReleaseDate: {release_date}");
            stub.set(stub::RELEASE_DATE, release_date);
        }
    }

    fn enrich_languages(stub: &mut Stub, entity: &Entity) {
        if !stub.is_empty_field(stub::LANGUAGES) {
            return;
        }
        let ids = entity
            .claims()
            .entity_refs(WikidataProperty::LanguageOfWork.id());
        let codes = language_codes(&ids);
        if !codes.is_empty() {
            tracing::info!("Languages: {}", codes.join(", "));
            stub.set_languages(codes);
        }
    }

    /// Logs the labels behind a genre/developer/publisher property. The stub
    /// stores internal IDs for these, and there is no Wikidata-to-internal
    /// mapping yet, so they are left for manual curation.
    async fn report_curated(&mut self, entity: &Entity, property: WikidataProperty) -> Vec<String> {
        let mut labels = vec![];
        for id in entity.claims().entity_refs(property.id()) {
            if let Some(label) = self.cache.get_label(&id).await.filter(|s| !s.is_empty()) {
                labels.push(label);
            }
        }
        if !labels.is_empty() {
            tracing::info!(
                "{} found (not auto-mapped): {}",
                property.plural_name(),
                labels.join(", ")
            );
        }
        labels
    }
}

/// Enriches a single stub with a fresh cache.
pub async fn enrich_stub<S: EntitySource>(source: S, stub: &Stub) -> Stub {
    Enricher::new(source).enrich_stub(stub).await
}
