use super::test_harness::{setup_grid_harness, setup_home_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_topic_cards() {
    let mut harness = setup_home_harness(None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Cell Structure (Biology)"), "missing card in {html}");
    assert!(html.contains("Photosynthesis (Biology)"), "missing card in {html}");
    assert_eq!(html.matches("Open lesson").count(), 2, "cards in {html}");
    assert!(html.contains("loginBtn"), "missing login control in {html}");
    assert!(!html.contains("questionText"), "detail rendered early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_opens_initial_lesson() {
    let mut harness = setup_home_harness(Some("cell-structure"));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("What is the powerhouse of the cell?"), "missing question in {html}");
    assert_eq!(html.matches("smallBtn").count(), 4, "choices in {html}");
    for choice in ["Nucleus", "Mitochondrion", "Ribosome", "Cell wall"] {
        assert!(html.contains(choice), "missing {choice} in {html}");
    }
    assert!(html.contains("Mitochondria make energy in many cells (ATP)."), "missing step in {html}");
    assert!(html.contains("It produces ATP."), "missing hint text in {html}");
    assert!(
        html.contains(r#"href="https://scholar.google.com""#),
        "link href rewritten in {html}"
    );
    assert!(html.contains("noopener"), "missing rel in {html}");
    assert!(html.contains("_blank"), "missing target in {html}");
    assert!(html.contains("demoChart"), "missing canvas in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_ignores_unknown_initial_lesson() {
    let mut harness = setup_home_harness(Some("no-such-id"));
    harness.rebuild();
    let html = harness.render();

    assert!(!html.contains("questionText"), "unexpected detail in {html}");
    assert!(html.contains("Cell Structure (Biology)"), "missing card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_grid_smoke_reports_empty_search() {
    let mut harness = setup_grid_harness("quantum", false);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No topics match that search."), "missing empty state in {html}");

    let mut harness = setup_grid_harness("MITO", false);
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("No topics match that search."), "unexpected empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_tears_down_with_open_lesson() {
    let mut harness = setup_home_harness(Some("photosynthesis-basic"));
    harness.rebuild();
    assert!(harness.render().contains("Chloroplast"));
    drop(harness);
}
