use domain::{CallerIdentity, CategorySet, FilterField, FilterSet};
use reports_engine::{InMemoryEngineFactory, MetricsEngineFactory, OccurrenceStore};
use serde_json::{Value, json};
use std::sync::Arc;

fn sample_store() -> Arc<OccurrenceStore> {
    Arc::new(OccurrenceStore::new(vec![
        json!({
            "metadata": { "survey": { "id": 5 }, "created_by_id": 42 },
            "taxon": {
                "accepted_taxon_id": "t1", "species_taxon_id": "t1",
                "accepted_name": "Bombus terrestris", "taxon_rank_sort_order": 300
            },
            "occurrence": { "media": [{}, {}] }
        }),
        json!({
            "metadata": { "survey": { "id": 5 }, "created_by_id": 42 },
            "taxon": {
                "accepted_taxon_id": "t1", "species_taxon_id": "t1",
                "accepted_name": "Bombus terrestris", "taxon_rank_sort_order": 300
            }
        }),
        json!({
            "metadata": { "survey": { "id": 5 }, "created_by_id": 7 },
            "taxon": {
                "accepted_taxon_id": "g1", "accepted_name": "Bombus",
                "taxon_rank_sort_order": 180
            },
            "occurrence": { "media": [{}] }
        }),
        json!({
            "metadata": { "survey": { "id": 5 }, "created_by_id": 7 },
            "taxon": {
                "accepted_taxon_id": "t2", "species_taxon_id": "t2",
                "accepted_name": "Bombus lapidarius", "taxon_rank_sort_order": 300
            }
        }),
        json!({
            "metadata": { "survey": { "id": 6 }, "created_by_id": 7 },
            "taxon": { "accepted_taxon_id": "t3", "species_taxon_id": "t3" }
        }),
    ]))
}

fn survey(id: &str) -> FilterSet {
    let mut filters = FilterSet::new();
    filters.insert(FilterField::SurveyId, id);
    filters
}

#[tokio::test]
async fn counts_only_requested_categories() {
    let engine = InMemoryEngineFactory::new(sample_store()).for_caller(&CallerIdentity::new("42"));
    let categories = CategorySet::parse_list("species,photos,recorders").expect("categories");
    let output = engine
        .compute_counts(&survey("5"), &categories)
        .await
        .expect("counts");
    assert_eq!(output, json!({ "species": 2, "photos": 3, "recorders": 2 }));
}

#[tokio::test]
async fn user_metrics_are_for_the_caller() {
    let factory = InMemoryEngineFactory::new(sample_store());
    let output = factory
        .for_caller(&CallerIdentity::new("42"))
        .compute_user_metrics(&survey("5"))
        .await
        .expect("metrics");
    assert_eq!(output["records"], 2);
    assert_eq!(output["species"], 1);
    assert_eq!(output["rank"], 1);
    assert_eq!(output["recorders"], 2);

    let output = factory
        .for_caller(&CallerIdentity::new("99"))
        .compute_user_metrics(&survey("5"))
        .await
        .expect("metrics");
    assert_eq!(output["records"], 0);
    assert_eq!(output["rank"], Value::Null);
}

#[tokio::test]
async fn taxa_list_sorted_and_species_only() {
    let engine = InMemoryEngineFactory::new(sample_store()).for_caller(&CallerIdentity::new("42"));
    let all = engine
        .compute_recorded_taxa_list(&survey("5"), false)
        .await
        .expect("taxa");
    let names: Vec<&str> = all
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["taxon"].as_str().expect("taxon"))
        .collect();
    assert_eq!(names, vec!["Bombus terrestris", "Bombus", "Bombus lapidarius"]);
    assert_eq!(all[0]["count"], 2);

    let species = engine
        .compute_recorded_taxa_list(&survey("5"), true)
        .await
        .expect("taxa");
    assert_eq!(species.as_array().expect("array").len(), 2);
}

#[test]
fn fixture_file_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures/occurrences.json");
    let store = OccurrenceStore::from_path(&path).expect("fixture");
    assert_eq!(store.len(), 4);
}

#[test]
fn missing_fixture_is_an_error() {
    let result = OccurrenceStore::from_path(std::path::Path::new("does/not/exist.json"));
    assert!(result.is_err());
}
