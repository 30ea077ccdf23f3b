//! Trait-object usage of `PortfolioStore`.

use async_trait::async_trait;
use serde_json::Value;
use prism_core::records::{PortfolioListing, RawPortfolio};
use prism_traits::{PortfolioStore, SourceInfo, SourceKind, TraitError};

struct SingleStore;

#[async_trait]
impl PortfolioStore for SingleStore {
    fn source(&self) -> SourceInfo {
        SourceInfo::new(SourceKind::FallbackLocal).with_detail("message", "test")
    }

    async fn list_portfolios(&self) -> Result<Vec<PortfolioListing>, TraitError> {
        Ok(vec![PortfolioListing {
            id: "only".into(),
            name: "Only".into(),
            as_of: "2026-01-31".into(),
        }])
    }

    async fn fetch_portfolio(&self, id: &str) -> Result<RawPortfolio, TraitError> {
        if id == "only" {
            Ok(RawPortfolio {
                id: Some(Value::from(id)),
                ..RawPortfolio::default()
            })
        } else {
            Err(TraitError::not_found(format!("no portfolio '{id}'")))
        }
    }
}

#[tokio::test]
async fn boxed_store_delegates() {
    let store: Box<dyn PortfolioStore> = Box::new(SingleStore);

    assert_eq!(store.source().source, SourceKind::FallbackLocal);

    let listings = store.list_portfolios().await.unwrap();
    assert_eq!(listings.len(), 1);

    let raw = store.fetch_portfolio(&listings[0].id).await.unwrap();
    assert!(raw.holdings().is_empty());

    let err = store.fetch_portfolio("missing").await.unwrap_err();
    assert_eq!(err.to_string(), "no portfolio 'missing'");
}
