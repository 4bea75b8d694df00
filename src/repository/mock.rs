//! Mock sources for isolating list controllers in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::club::Club;
use crate::domain::player::Player;
use crate::pagination::PageResult;
use crate::repository::errors::SourceResult;
use crate::repository::{PageRequest, PageSource};

mock! {
    pub PlayerSource {}

    #[async_trait]
    impl PageSource for PlayerSource {
        type Item = Player;

        async fn fetch_page(&self, request: PageRequest) -> SourceResult<PageResult<Player>>;
    }
}

mock! {
    pub ClubSource {}

    #[async_trait]
    impl PageSource for ClubSource {
        type Item = Club;

        async fn fetch_page(&self, request: PageRequest) -> SourceResult<PageResult<Club>>;
    }
}
