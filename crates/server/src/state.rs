use service::DirectoryService;

/// Shared handler state. Cloning is cheap: the service holds an `Arc` to its store.
#[derive(Clone)]
pub struct AppState {
    pub directory: DirectoryService,
}

impl AppState {
    pub fn new(directory: DirectoryService) -> Self { Self { directory } }
}
