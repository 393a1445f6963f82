#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;

use domain_manager::application::services::DomainService;
use domain_manager::domain::entities::{Domain, NewDomain, UpdateDomain};
use domain_manager::domain::repositories::DomainRepository;
use domain_manager::error::AppError;
use domain_manager::state::AppState;

mockall::mock! {
    pub DomainRepo {}

    #[async_trait]
    impl DomainRepository for DomainRepo {
        async fn create(&self, new_domain: NewDomain) -> Result<Domain, AppError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<Domain>, AppError>;
        async fn list(&self) -> Result<Vec<Domain>, AppError>;
        async fn update(&self, id: i64, update: UpdateDomain) -> Result<Option<Domain>, AppError>;
        async fn delete(&self, id: i64) -> Result<(), AppError>;
    }
}

pub fn create_test_state(repo: MockDomainRepo) -> AppState {
    AppState {
        domain_service: Arc::new(DomainService::new(Arc::new(repo))),
    }
}

pub fn test_domain(id: i64, name: &str, tld: &str) -> Domain {
    Domain::new(id, name.to_string(), tld.to_string())
}
