#![cfg(feature = "quiz-client")]

use std::sync::Arc;

use hoop_story_back::{
    client::{ApiClient, ClientError},
    config::AppConfig,
    dao::player_store::memory::MemoryPlayerStore,
    game::TeamAnswerCheck,
    routes,
    services::import_service::{import_players, roster},
    state::AppState,
    ui::{QuizMode, Submission, TerminalView, UiController},
};
use tokio::net::TcpListener;

/// Serve the API over real TCP and return its base URL.
async fn spawn_api() -> String {
    let store = MemoryPlayerStore::new();
    import_players(&store, roster().unwrap()).await;
    let app = routes::router(AppState::new(Arc::new(store), AppConfig::default()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn catalog_loads_once_and_drives_a_team_quiz() {
    let base_url = spawn_api().await;
    let client = ApiClient::new(&base_url).unwrap();
    let catalog = client.fetch_catalog().await.unwrap();
    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.names().next(), Some("Chucky Brown"));

    let mut controller = UiController::new(catalog, TerminalView::new(Vec::new()));
    controller.initialize();
    controller.set_mode(QuizMode::Team);
    controller.handle_team_selection("SAC").unwrap();

    let submission = controller
        .submit(&["hassan whiteside", "Garrett Temple", "nobody"])
        .unwrap();
    let Submission::Team(TeamAnswerCheck { check, matched }) = submission else {
        panic!("expected a team submission");
    };
    assert_eq!(check.total, 3);
    assert_eq!(check.correct, 2);
    assert_eq!(matched, vec!["Hassan Whiteside", "Garrett Temple"]);
}

#[tokio::test]
async fn unknown_route_is_a_status_error() {
    let base_url = spawn_api().await;
    let client = ApiClient::new(&format!("{base_url}/nowhere")).unwrap();
    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, ClientError::Status { .. }));
}
