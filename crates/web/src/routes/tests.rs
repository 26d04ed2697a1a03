use axum::{
    Router,
    body::Body,
    http::{
        Request, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
};
use serde_json::{Value, json};
use storage::Repositories;
use tower::ServiceExt;

use super::router;
use crate::middleware::auth::ApiKeys;

const BOUNDARY: &str = "league-upload-boundary";

fn app() -> Router {
    router(Repositories::in_memory(), ApiKeys::default())
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn upload_request(uri: &str, field: &str, csv: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"fixtures.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {csv}\r\n\
         --{BOUNDARY}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn create_league(app: &Router, name: &str) -> String {
    let (status, body) = send(
        app,
        json_request("POST", "/api/leagues", json!({ "name": name, "season": "2024/25" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn add_team(app: &Router, league_id: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            &format!("/api/leagues/{league_id}/teams"),
            json!({ "name": name }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_root_and_store_status() {
    let app = app();

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Football Information API running");

    let (status, body) = send(&app, get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "memory");
    assert_eq!(body["connection_status"], "Connected");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = send(&app(), get("/api/nowhere")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Resource not found");
}

#[tokio::test]
async fn test_create_and_list_leagues() {
    let app = app();
    let first = create_league(&app, "Premier").await;
    let second = create_league(&app, "First Division").await;

    let (status, body) = send(&app, get("/api/leagues")).await;
    assert_eq!(status, StatusCode::OK);
    let leagues = body.as_array().unwrap();
    assert_eq!(leagues.len(), 2);
    assert_eq!(leagues[0]["id"], second.as_str());
    assert_eq!(leagues[1]["id"], first.as_str());
    assert_eq!(leagues[0]["country"], "Malta");
}

#[tokio::test]
async fn test_league_name_is_required() {
    let (status, body) = send(
        &app(),
        json_request("POST", "/api/leagues", json!({ "name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

#[tokio::test]
async fn test_team_routes_reject_bad_and_unknown_ids() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request("POST", "/api/leagues/not-an-id/teams", json!({ "name": "HIBS" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid ID format");

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            &format!("/api/leagues/{missing}/teams"),
            json!({ "name": "HIBS" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let league_id = create_league(&app, "Premier").await;
    let (status, _) = send(&app, get(&format!("/api/leagues/{league_id}/teams/{missing}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_reads_of_unknown_league_are_empty() {
    let app = app();
    let missing = uuid::Uuid::new_v4();

    for path in ["standings", "matches/upcoming", "matches/results", "teams"] {
        let (status, body) = send(&app, get(&format!("/api/leagues/{missing}/{path}"))).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, json!([]), "{path}");
    }
}

#[tokio::test]
async fn test_limit_must_be_in_range() {
    let app = app();
    let league_id = create_league(&app, "Premier").await;

    for limit in ["0", "101", "abc"] {
        let (status, _) = send(
            &app,
            get(&format!("/api/leagues/{league_id}/matches/upcoming?limit={limit}")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "limit={limit}");
    }

    let (status, _) = send(
        &app,
        get(&format!("/api/leagues/{league_id}/matches/results?limit=100")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_season_flow_from_seed_to_standings() {
    let app = app();

    let (status, body) = send(&app, empty_post("/api/seed/maltese-youth-league")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["teams"].as_array().unwrap().len(), 10);
    let league_id = body["league_id"].as_str().unwrap().to_string();

    let (_, standings) = send(&app, get(&format!("/api/leagues/{league_id}/standings"))).await;
    let names: Vec<&str> = standings
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["team_name"].as_str().unwrap())
        .collect();
    assert_eq!(names[0], "BALZAN");
    assert_eq!(names[9], "ZABBAR");

    let csv = "home_team,away_team,match_date,venue\n\
               HIBS,BALZAN,2025-03-01,Centenary Stadium\n\
               GOZO,UNKNOWN FC,2025-03-02,Gozo Stadium\n\
               QORMI,NAXXAR,2025-02-20,\n";
    let (status, body) = send(
        &app,
        upload_request(&format!("/api/leagues/{league_id}/fixtures/upload"), "file", csv),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inserted"], 2);

    let (_, upcoming) = send(
        &app,
        get(&format!("/api/leagues/{league_id}/matches/upcoming")),
    )
    .await;
    let upcoming = upcoming.as_array().unwrap();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0]["home"], "QORMI");
    assert_eq!(upcoming[1]["home"], "HIBS");
    assert_eq!(upcoming[1]["venue"], "Centenary Stadium");
    let match_id = upcoming[1]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/matches/{match_id}"),
            json!({ "home_score": 3, "away_score": 1, "status": "played" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "played");
    assert!(body["updated_at"].is_string());

    let (_, standings) = send(&app, get(&format!("/api/leagues/{league_id}/standings"))).await;
    let rows = standings.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["team_name"], "HIBS");
    assert_eq!(rows[0]["Pts"], 3);
    assert_eq!(rows[0]["GD"], 2);
    assert_eq!(rows[0]["position"], 1);
    assert_eq!(rows[9]["team_name"], "BALZAN");
    assert_eq!(rows[9]["L"], 1);
    assert_eq!(rows[1]["team_name"], "BIRKIRKARA");
    assert_eq!(rows[1]["P"], 0);

    let (_, results) = send(
        &app,
        get(&format!("/api/leagues/{league_id}/matches/results?limit=5")),
    )
    .await;
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["home"], "HIBS");
    assert_eq!(results[0]["away"], "BALZAN");
    assert_eq!(results[0]["score"], "3 - 1");

    let (_, teams) = send(&app, get(&format!("/api/leagues/{league_id}/teams"))).await;
    let hibs = teams
        .as_array()
        .unwrap()
        .iter()
        .find(|team| team["name"] == "HIBS")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();
    let (status, detail) = send(&app, get(&format!("/api/leagues/{league_id}/teams/{hibs}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["results"].as_array().unwrap().len(), 1);
    assert!(detail["upcoming"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_played_without_scores_is_rejected() {
    let app = app();
    let league_id = create_league(&app, "Premier").await;
    add_team(&app, &league_id, "HIBS").await;
    add_team(&app, &league_id, "GOZO").await;

    let csv = "home_team,away_team,match_date,venue\nHIBS,GOZO,2025-04-01,Victor Tedesco\n";
    send(
        &app,
        upload_request(&format!("/api/leagues/{league_id}/fixtures/upload"), "file", csv),
    )
    .await;
    let (_, upcoming) = send(
        &app,
        get(&format!("/api/leagues/{league_id}/matches/upcoming")),
    )
    .await;
    let match_id = upcoming[0]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/matches/{match_id}"),
            json!({ "status": "played" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/matches/{match_id}"),
            json!({ "home_score": -2 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/matches/{match_id}"),
            json!({ "status": "postponed" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "postponed");

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(
        &app,
        json_request("PATCH", &format!("/api/matches/{missing}"), json!({ "home_score": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_input_gets_json_error() {
    let app = app();
    let league_id = create_league(&app, "Premier").await;
    add_team(&app, &league_id, "HIBS").await;
    add_team(&app, &league_id, "GOZO").await;

    let csv = "home_team,away_team\nHIBS,GOZO\n";
    send(
        &app,
        upload_request(&format!("/api/leagues/{league_id}/fixtures/upload"), "file", csv),
    )
    .await;
    let (_, upcoming) = send(
        &app,
        get(&format!("/api/leagues/{league_id}/matches/upcoming")),
    )
    .await;
    let match_id = upcoming[0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/matches/{match_id}"),
            json!({ "status": "finished" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(
        &app,
        get(&format!("/api/leagues/{league_id}/matches/results?limit=abc")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let req = Request::builder()
        .method("POST")
        .uri("/api/leagues")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_upload_requires_file_field() {
    let app = app();
    let league_id = create_league(&app, "Premier").await;

    let (status, body) = send(
        &app,
        upload_request(
            &format!("/api/leagues/{league_id}/fixtures/upload"),
            "attachment",
            "home_team,away_team\n",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'file' field");
}

#[tokio::test]
async fn test_enforce_teams_reports_counts() {
    let app = app();
    let league_id = create_league(&app, "Premier").await;
    add_team(&app, &league_id, "HIBS").await;
    add_team(&app, &league_id, "Valletta").await;

    let uri = format!("/api/leagues/{league_id}/enforce-teams");
    let (status, body) = send(&app, empty_post(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_non_allowed"], 1);
    assert_eq!(body["created_missing"], 9);
    assert_eq!(body["allowed"].as_array().unwrap().len(), 10);

    let (_, body) = send(&app, empty_post(&uri)).await;
    assert_eq!(body["deleted_non_allowed"], 0);
    assert_eq!(body["created_missing"], 0);

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(&app, empty_post(&format!("/api/leagues/{missing}/enforce-teams"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_routes_require_key_when_configured() {
    let app = router(
        Repositories::in_memory(),
        ApiKeys::from_comma_separated("s3cret"),
    );

    let (status, _) = send(
        &app,
        json_request("POST", "/api/leagues", json!({ "name": "Premier" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let mut req = json_request("POST", "/api/leagues", json!({ "name": "Premier" }));
    req.headers_mut()
        .insert(AUTHORIZATION, "Bearer wrong".parse().unwrap());
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let mut req = json_request("POST", "/api/leagues", json!({ "name": "Premier" }));
    req.headers_mut()
        .insert(AUTHORIZATION, "Bearer s3cret".parse().unwrap());
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, get("/api/leagues")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}
