use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::controllers::fixtures::{author_json, banner_is, item_ids, list_body, repo, views};
use crate::net::transport::Method;

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_replaces_items_and_sends_token() {
    let (repo, transport) = repo(Some("T1"));
    let views = views();
    transport.reply(200, list_body(&["A1", "A2"]));

    let outcome = block_on(refresh(&repo, &views));

    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(item_ids(&views), vec!["A1", "A2"]);
    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, "/autores");
    assert_eq!(sent[0].token.as_deref(), Some("T1"));
}

#[test]
fn refresh_failure_keeps_items_and_shows_message() {
    let (repo, transport) = repo(Some("T1"));
    let views = views();
    transport.reply(200, list_body(&["A1"]));
    block_on(refresh(&repo, &views));

    transport.reply(500, json!({ "message": "db down" }));
    let outcome = block_on(refresh(&repo, &views));

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    assert_eq!(item_ids(&views), vec!["A1"]);
    assert!(banner_is(&views, "db down", Tone::Error));
}

#[test]
fn refresh_failure_without_message_uses_fallback() {
    let (repo, transport) = repo(Some("T1"));
    let views = views();
    transport.reply(500, json!({}));

    block_on(refresh(&repo, &views));

    assert!(banner_is(&views, "Error cargando autores", Tone::Error));
    assert!(item_ids(&views).is_empty());
}

#[test]
fn refresh_after_reset_is_discarded() {
    let (repo, transport) = repo(Some("T1"));
    let views = views();
    transport.reply(200, list_body(&["A1"]));

    // Reset lands between begin_load and the response.
    let ticket = views.authors.update_with(AuthorsState::begin_load).unwrap();
    views.authors.update_with(AuthorsState::reset);
    let result = block_on(repo.list());
    let outcome = views.authors.update_with(|s| s.finish_load(ticket, result)).unwrap();

    assert_eq!(outcome, LoadOutcome::Stale);
    assert!(item_ids(&views).is_empty());
}

// =============================================================
// show_detail
// =============================================================

#[test]
fn show_detail_switches_view_and_announces() {
    let (repo, transport) = repo(Some("T1"));
    let views = views();
    transport.reply(200, json!({ "data": author_json("A1", "Ana") }));

    let outcome = block_on(show_detail(&repo, &views, "A1"));

    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(transport.requests()[0].path, "/autores/A1");
    let shown = views.detail.read_with(|d| d.author.clone()).flatten().unwrap();
    assert_eq!(shown.first_name, "Ana");
    assert!(matches!(views.view.read_with(Clone::clone), Some(ViewState::ShowingDetail(_))));
    assert!(banner_is(&views, DETAIL_LOADED_MESSAGE, Tone::Success));
}

#[test]
fn show_detail_failure_keeps_previous_author() {
    let (repo, transport) = repo(Some("T1"));
    let views = views();
    transport.reply(200, json!({ "data": author_json("A1", "Ana") }));
    block_on(show_detail(&repo, &views, "A1"));

    transport.reply(404, json!({ "message": "no existe" }));
    let outcome = block_on(show_detail(&repo, &views, "A9"));

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    let detail = views.detail.read_with(Clone::clone).unwrap();
    assert_eq!(detail.author.map(|a| a.id).as_deref(), Some("A1"));
    assert!(detail.loading.is_none());
    assert!(banner_is(&views, "no existe", Tone::Error));
}

// =============================================================
// delete_author
// =============================================================

#[test]
fn delete_confirmed_calls_delete_then_refetches() {
    let (repo, transport) = repo(Some("T1"));
    let views = views();
    transport.reply(200, list_body(&["A1", "A2"]));
    block_on(refresh(&repo, &views));

    transport.reply(200, json!({ "message": "ok" }));
    transport.reply(200, list_body(&["A2"]));
    let mut prompt = String::new();
    let outcome = block_on(delete_author(&repo, &views, "A1", |text| {
        prompt = text.to_owned();
        true
    }));

    assert_eq!(outcome, DeleteOutcome::Deleted(LoadOutcome::Applied));
    assert_eq!(prompt, "¿Estás seguro de que deseas eliminar al autor con ID: A1?");
    let sent = transport.requests();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[1].method, Method::Delete);
    assert_eq!(sent[1].path, "/autores/A1");
    assert_eq!(sent[2].method, Method::Get);
    assert_eq!(item_ids(&views), vec!["A2"]);
    assert!(banner_is(&views, DELETED_MESSAGE, Tone::Success));
}

#[test]
fn delete_not_found_leaves_table_unchanged() {
    let (repo, transport) = repo(Some("T1"));
    let views = views();
    transport.reply(200, list_body(&["A1"]));
    block_on(refresh(&repo, &views));

    transport.reply(404, json!({ "message": "not found" }));
    let outcome = block_on(delete_author(&repo, &views, "A1", |_| true));

    assert!(matches!(outcome, DeleteOutcome::Failed(ApiError::Api { status: 404, .. })));
    assert_eq!(transport.request_count(), 2);
    assert_eq!(item_ids(&views), vec!["A1"]);
    assert!(banner_is(&views, "not found", Tone::Error));
}

#[test]
fn delete_declined_sends_nothing() {
    let (repo, transport) = repo(Some("T1"));
    let views = views();

    let outcome = block_on(delete_author(&repo, &views, "A1", |_| false));

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn delete_of_shown_author_clears_detail() {
    let (repo, transport) = repo(Some("T1"));
    let views = views();
    transport.reply(200, json!({ "data": author_json("A1", "Ana") }));
    block_on(show_detail(&repo, &views, "A1"));

    transport.reply(200, json!({}));
    transport.reply(200, list_body(&[]));
    block_on(delete_author(&repo, &views, "A1", |_| true));

    assert!(views.detail.read_with(|d| d.author.is_none()).unwrap());
    assert_eq!(views.view.read_with(Clone::clone), Some(ViewState::Listing));
}
