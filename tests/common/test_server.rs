use std::path::PathBuf;
use std::sync::Arc;

use space_rangers::auth::UserDirectory;
use space_rangers::server::{AppState, create_router};
use space_rangers::store::{JsonFileStorage, MissionStore};
use tempfile::TempDir;
use tokio::task::JoinHandle;

pub struct TestServer {
    pub temp_dir: TempDir,
    pub base_url: String,
    pub store: Arc<MissionStore>,
    server_task: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Serves a freshly seeded store from a temp directory on an ephemeral port.
    pub async fn start() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let data_file = temp_dir.path().join("db.json");

        let store = Arc::new(
            MissionStore::open(JsonFileStorage::new(&data_file)).expect("open mission store"),
        );
        let state = Arc::new(AppState::new(store.clone(), UserDirectory::default()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let port = listener.local_addr().expect("local addr").port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let server_task = tokio::spawn(async move {
            axum::serve(listener, create_router(state))
                .await
                .expect("serve");
        });

        Self {
            temp_dir,
            base_url,
            store,
            server_task: Some(server_task),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.temp_dir.path().join("db.json")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(task) = self.server_task.take() {
            task.abort();
        }
    }
}
