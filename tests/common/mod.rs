#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use club_manager::domain::player::Player;
use club_manager::domain::types::PlayerId;
use club_manager::pagination::PageResult;
use club_manager::repository::errors::{SourceError, SourceResult};
use club_manager::repository::memory::InMemorySource;
use club_manager::repository::{PageRequest, PageSource};

pub type PlayerPage = SourceResult<PageResult<Player>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn player(id: i32, name: &str, club: &str) -> Player {
    Player {
        id: PlayerId::new(id).expect("valid player id"),
        name: name.to_string(),
        position: "Centrocampista".to_string(),
        club: Some(club.to_string()),
        nationality: Some("España".to_string()),
        market_value: Some(i64::from(id) * 1_000_000),
        salary: Some(i64::from(id) * 100_000),
    }
}

pub fn squad() -> Vec<Player> {
    vec![
        player(1, "Pedri", "FC Barcelona"),
        player(2, "Gavi", "FC Barcelona"),
        player(3, "Rodri", "Manchester City"),
        player(4, "Nico Williams", "Athletic Club"),
        player(5, "Dani Olmo", "FC Barcelona"),
        player(6, "Mikel Merino", "Arsenal"),
        player(7, "Fabian Ruiz", "PSG"),
        player(8, "Alvaro Morata", "AC Milan"),
        player(9, "Unai Simon", "Athletic Club"),
        player(10, "Pedro Porro", "Tottenham"),
        player(11, "Pau Cubarsi", "FC Barcelona"),
        player(12, "Alex Baena", "Villarreal"),
    ]
}

pub fn page_of(names: &[&str]) -> PageResult<Player> {
    let items: Vec<Player> = names
        .iter()
        .zip(1..)
        .map(|(name, id)| player(id, name, "Selección"))
        .collect();
    let total = items.len();
    PageResult::new(items, 1, 10, total)
}

pub fn names(players: &[Player]) -> Vec<String> {
    players.iter().map(|p| p.name.clone()).collect()
}

/// Source whose answers are released by the test, one query at a time.
#[derive(Default)]
pub struct GatedSource {
    pending: Mutex<HashMap<String, oneshot::Sender<PlayerPage>>>,
}

impl GatedSource {
    /// Yields until a request for `query` is waiting.
    pub async fn wait_for(&self, query: &str) {
        while !self.pending.lock().contains_key(query) {
            tokio::task::yield_now().await;
        }
    }

    pub fn release(&self, query: &str, result: PlayerPage) {
        let sender = self
            .pending
            .lock()
            .remove(query)
            .expect("request is waiting");
        sender.send(result).ok().expect("load still awaiting");
    }
}

#[async_trait]
impl PageSource for GatedSource {
    type Item = Player;

    async fn fetch_page(&self, request: PageRequest) -> PlayerPage {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().insert(request.query_str().to_string(), tx);
        rx.await
            .unwrap_or_else(|_| Err(SourceError::Transport("gate dropped".to_string())))
    }
}

/// Fixture source that remembers every request it served.
pub struct RecordingSource {
    fixtures: InMemorySource<Player>,
    requests: Mutex<Vec<PageRequest>>,
}

impl RecordingSource {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            fixtures: InMemorySource::new(players),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl PageSource for RecordingSource {
    type Item = Player;

    async fn fetch_page(&self, request: PageRequest) -> PlayerPage {
        self.requests.lock().push(request.clone());
        self.fixtures.fetch_page(request).await
    }
}
