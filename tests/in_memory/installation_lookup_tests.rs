//! In-memory integration tests for installation lookup and link building.

use std::sync::Arc;

use super::helpers::{lookup_for, production_installation, staging_installation, store};
use rstest::rstest;
use sonar_installations::installation::{
    adapters::memory::InMemoryInstallationStore,
    domain::{InstallationSettings, SonarInstallation},
    ports::InstallationProviderError,
};

#[rstest]
fn default_lookup_resolves_first_configured(store: Arc<InMemoryInstallationStore>) {
    store
        .replace_all([production_installation(), staging_installation()])
        .expect("configuration save should succeed");
    let lookup = lookup_for(&store);

    let installation = lookup.get(None).expect("default installation");

    assert_eq!(installation.name(), Some("production"));
    assert_eq!(installation.database_password().as_deref(), Some("s3cret"));
    assert_eq!(
        installation.project_link("org.example", "shop", Some("release")),
        "https://sonar.example.com/project/index/org.example:shop:release"
    );
}

#[rstest]
fn named_lookup_returns_disabled_installation_untouched(store: Arc<InMemoryInstallationStore>) {
    store
        .replace_all([production_installation(), staging_installation()])
        .expect("configuration save should succeed");
    let lookup = lookup_for(&store);

    let staging = lookup.get(Some("staging")).expect("staging installation");

    assert!(staging.is_disabled());
    assert_eq!(
        staging.component_link("org.example", "shop"),
        "http://staging:9000/components/index/org.example:shop"
    );
}

#[rstest]
fn build_steps_can_skip_disabled_installations(store: Arc<InMemoryInstallationStore>) {
    store
        .replace_all([staging_installation(), production_installation()])
        .expect("configuration save should succeed");
    let lookup = lookup_for(&store);

    let enabled: Vec<SonarInstallation> = lookup
        .all()
        .into_iter()
        .filter(|installation| !installation.is_disabled())
        .collect();

    assert_eq!(enabled.len(), 1);
    assert_eq!(
        enabled.first().and_then(SonarInstallation::name),
        Some("production")
    );
}

#[rstest]
fn duplicate_names_are_rejected_on_save(store: Arc<InMemoryInstallationStore>) {
    let result = store.replace_all([production_installation(), production_installation()]);

    assert!(matches!(
        result,
        Err(InstallationProviderError::DuplicateName(name)) if name == "production"
    ));
    assert!(lookup_for(&store).all().is_empty());
}

#[rstest]
fn host_outage_hides_installations(store: Arc<InMemoryInstallationStore>) {
    store
        .add(production_installation())
        .expect("add should succeed");
    let lookup = lookup_for(&store);

    store.mark_unavailable().expect("flag should be set");
    assert!(lookup.all().is_empty());
    assert!(lookup.get(Some("production")).is_none());

    store.mark_available().expect("flag should be cleared");
    assert!(lookup.get(Some("production")).is_some());
}

#[rstest]
fn migrated_public_url_changes_links(store: Arc<InMemoryInstallationStore>) {
    let mut legacy = SonarInstallation::new(
        InstallationSettings::named("legacy").with_server_url("http://legacy:9000"),
    );
    assert_eq!(legacy.server_link(), "http://legacy:9000");

    legacy.set_server_public_url(Some("https://legacy.example.com".to_owned()));
    store.add(legacy).expect("add should succeed");

    let resolved = lookup_for(&store)
        .get(Some("legacy"))
        .expect("legacy installation");
    assert_eq!(
        resolved.project_link("g", "a", None),
        "https://legacy.example.com/project/index/g:a"
    );
}

#[rstest]
fn configuration_round_trips_through_json(store: Arc<InMemoryInstallationStore>) {
    let json = serde_json::to_string(&[production_installation(), staging_installation()])
        .expect("serialization should succeed");
    assert!(!json.contains("s3cret"));

    let restored: Vec<SonarInstallation> =
        serde_json::from_str(&json).expect("deserialization should succeed");
    store
        .replace_all(restored)
        .expect("configuration load should succeed");

    let production = lookup_for(&store)
        .get(Some("production"))
        .expect("production installation");
    assert_eq!(production, production_installation());
    assert_eq!(production.database_password().as_deref(), Some("s3cret"));
}
