//! Delivery search entry point

use std::sync::Arc;

use crate::capability::{ContentPreview, Preview, Published};
use crate::documents::Documents;
use crate::transport::SearchTransport;

type TransportFactory = dyn Fn() -> Arc<dyn SearchTransport> + Send + Sync;

/// Hands out search sessions, each with its own transport
///
/// Routing flags such as preview mode live on the transport, so sessions
/// never share one.
#[derive(Clone)]
pub struct DeliverySearch {
    factory: Arc<TransportFactory>,
}

impl DeliverySearch {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Arc<dyn SearchTransport> + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }

    fn transport(&self) -> Arc<dyn SearchTransport> {
        (self.factory)()
    }

    pub fn assets(&self) -> Documents<Preview> {
        Documents::assets(self.transport())
    }

    pub fn categories(&self) -> Documents<Published> {
        Documents::categories(self.transport())
    }

    pub fn content_items(&self) -> Documents<ContentPreview> {
        Documents::content_items(self.transport())
    }

    pub fn content_types(&self) -> Documents<Published> {
        Documents::content_types(self.transport())
    }

    /// Session over every document kind
    pub fn documents(&self) -> Documents<Published> {
        Documents::new(self.transport())
    }
}

impl std::fmt::Debug for DeliverySearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliverySearch").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::DocumentKind;
    use crate::transport::MockSearchTransport;
    use mockall::predicate::eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_sessions_are_seeded() {
        let search = DeliverySearch::new(|| Arc::new(MockSearchTransport::new()) as Arc<dyn SearchTransport>);

        assert_eq!(search.assets().kind(), DocumentKind::Asset);
        assert_eq!(search.categories().kind(), DocumentKind::Category);
        assert_eq!(search.content_items().kind(), DocumentKind::Content);
        assert_eq!(search.content_types().kind(), DocumentKind::ContentType);
        assert_eq!(search.documents().kind(), DocumentKind::Document);
        assert!(!search.documents().query().has_filters());
    }

    #[test]
    fn test_each_session_gets_own_transport() {
        let created = Arc::new(AtomicUsize::new(0));
        let counter = created.clone();

        let search = DeliverySearch::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let mut transport = MockSearchTransport::new();
            transport.expect_set_preview().with(eq(true)).return_const(());
            Arc::new(transport) as Arc<dyn SearchTransport>
        });

        let mut assets = search.assets();
        assets.include_draft(true);
        let _items = search.content_items();

        assert_eq!(created.load(Ordering::SeqCst), 2);
    }
}
