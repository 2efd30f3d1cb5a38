use super::*;
use crate::net::mock_transport::MockTransport;
use crate::state::session::MemoryStorage;
use futures::executor::block_on;
use serde_json::json;

fn repo_with_token(token: Option<&str>) -> (MockTransport, AuthorRepository<MockTransport, MemoryStorage>) {
    let transport = MockTransport::new();
    let session = Session::new(MemoryStorage::default());
    if let Some(token) = token {
        session.set_token(token);
    }
    (transport.clone(), AuthorRepository::new(transport, session))
}

fn author_json(id: &str) -> serde_json::Value {
    json!({ "_id": id, "first_name": "Ana", "last_name": "Ruiz" })
}

fn fields(first: &str, last: &str) -> AuthorFields {
    AuthorFields {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        ..AuthorFields::default()
    }
}

// =============================================================
// list
// =============================================================

#[test]
fn list_gets_collection_with_bearer_token() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(200, json!({ "data": [author_json("A1"), author_json("A2")] }));

    let authors = block_on(repo.list()).unwrap();

    assert_eq!(authors.len(), 2);
    assert_eq!(authors[1].id, "A2");
    let req = &mock.requests()[0];
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/autores");
    assert_eq!(req.token.as_deref(), Some("T1"));
    assert!(req.body.is_none());
}

#[test]
fn list_without_session_sends_no_token() {
    let (mock, repo) = repo_with_token(None);
    mock.reply(200, json!({ "data": [] }));
    assert!(block_on(repo.list()).unwrap().is_empty());
    assert!(mock.requests()[0].token.is_none());
}

#[test]
fn list_failure_uses_server_message() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(500, json!({ "message": "db down" }));
    assert_eq!(
        block_on(repo.list()),
        Err(ApiError::Api { status: 500, message: "db down".to_owned() })
    );
}

#[test]
fn list_failure_without_message_uses_fallback() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(500, json!({}));
    assert_eq!(block_on(repo.list()).unwrap_err().to_string(), "Error cargando autores");
}

#[test]
fn list_non_json_body_is_transport_error() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply_raw(502, "<html>Bad Gateway</html>");
    assert!(matches!(block_on(repo.list()), Err(ApiError::Transport(_))));
}

#[test]
fn list_success_without_data_is_transport_error() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(200, json!({ "message": "ok" }));
    assert!(matches!(block_on(repo.list()), Err(ApiError::Transport(_))));
}

#[test]
fn list_network_failure_passes_through() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.fail("offline");
    assert_eq!(block_on(repo.list()), Err(ApiError::Transport("offline".to_owned())));
}

// =============================================================
// get / create / update
// =============================================================

#[test]
fn get_fetches_item_path() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(200, json!({ "data": author_json("A7") }));
    assert_eq!(block_on(repo.get("A7")).unwrap().id, "A7");
    assert_eq!(mock.requests()[0].path, "/autores/A7");
}

#[test]
fn get_failure_fallback_is_detail_message() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(404, json!({ "message": "" }));
    assert_eq!(block_on(repo.get("A7")).unwrap_err().to_string(), "Error cargando detalle");
}

#[test]
fn create_posts_required_fields_only() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(201, json!({ "data": author_json("NEW") }));

    let created = block_on(repo.create(&fields("J", "D"))).unwrap();

    assert_eq!(created.id, "NEW");
    let req = &mock.requests()[0];
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/autores");
    assert_eq!(req.body, Some(json!({ "first_name": "J", "last_name": "D" })));
}

#[test]
fn create_includes_optional_fields_when_present() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(201, json!({ "data": author_json("NEW") }));
    let mut input = fields("J", "D");
    input.biography = Some("Bio".to_owned());
    input.image = Some("  ".to_owned());

    block_on(repo.create(&input)).unwrap();

    assert_eq!(
        mock.requests()[0].body,
        Some(json!({ "first_name": "J", "last_name": "D", "biography": "Bio" }))
    );
}

#[test]
fn update_puts_item_path() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(200, json!({ "data": author_json("A1") }));
    block_on(repo.update("A1", &fields("Ana", "Ruiz"))).unwrap();
    let req = &mock.requests()[0];
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/autores/A1");
    assert_eq!(req.body, Some(json!({ "first_name": "Ana", "last_name": "Ruiz" })));
}

#[test]
fn update_failure_fallback() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(400, json!({}));
    assert_eq!(
        block_on(repo.update("A1", &fields("Ana", "Ruiz"))).unwrap_err().to_string(),
        "Error al actualizar autor"
    );
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_accepts_success_without_data() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(200, json!({ "message": "Autor eliminado" }));
    let ack = block_on(repo.delete("A1")).unwrap();
    assert_eq!(ack.message.as_deref(), Some("Autor eliminado"));
    let req = &mock.requests()[0];
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.path, "/autores/A1");
}

#[test]
fn delete_accepts_empty_body() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply_raw(204, "");
    assert_eq!(block_on(repo.delete("A1")).unwrap(), Ack { message: None });
}

#[test]
fn delete_not_found_surfaces_message() {
    let (mock, repo) = repo_with_token(Some("T1"));
    mock.reply(404, json!({ "message": "not found" }));
    let err = block_on(repo.delete("A1")).unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "not found");
}

// =============================================================
// login
// =============================================================

fn credentials() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

#[test]
fn login_posts_credentials_without_token() {
    let mock = MockTransport::new();
    mock.reply(200, json!({ "status": true, "token": "T1", "user": { "first_name": "Ana" } }));

    let ok = block_on(login(&mock, &credentials())).unwrap();

    assert_eq!(ok.token, "T1");
    assert_eq!(ok.user.first_name, "Ana");
    let req = &mock.requests()[0];
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/usuarios/login");
    assert_eq!(req.body, Some(json!({ "email": "a@b.com", "password": "x" })));
    assert!(req.token.is_none());
}

#[test]
fn login_status_false_uses_msg() {
    let mock = MockTransport::new();
    mock.reply(200, json!({ "status": false, "msg": "Contraseña incorrecta" }));
    assert_eq!(
        block_on(login(&mock, &credentials())),
        Err(ApiError::Api { status: 200, message: "Contraseña incorrecta".to_owned() })
    );
}

#[test]
fn login_http_failure_falls_back() {
    let mock = MockTransport::new();
    mock.reply(401, json!({}));
    assert_eq!(block_on(login(&mock, &credentials())).unwrap_err().to_string(), "Error al iniciar sesión");
}

#[test]
fn login_success_without_token_is_transport_error() {
    let mock = MockTransport::new();
    mock.reply(200, json!({ "status": true, "user": { "first_name": "Ana" } }));
    assert!(matches!(block_on(login(&mock, &credentials())), Err(ApiError::Transport(_))));
}
