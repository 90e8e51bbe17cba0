use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::remote::RemoteSource;
use crate::store::StorageBackend;
use crate::sync::{SyncEngine, SyncOutcome};

/// Run one reconciliation cycle and turn its outcome into notification
/// messages. Sync failures become messages rather than errors: the caller's
/// loop (or next invocation) retries naturally, nothing halts.
pub fn run<S: StorageBackend, R: RemoteSource>(
    book: &mut QuoteBook<S>,
    engine: &mut SyncEngine,
    remote: &R,
    default_category: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match engine.reconcile(book, remote, default_category) {
        Ok(SyncOutcome::InSync) => {
            result.add_message(CmdMessage::info(format!(
                "Already in sync with remote ({} quotes).",
                book.all().len()
            )));
        }
        Ok(SyncOutcome::Replaced { count }) => {
            result.add_message(CmdMessage::warning(format!(
                "Local quotes were overwritten by the remote ({} quotes).",
                count
            )));
        }
        Err(e) => {
            result.add_message(CmdMessage::error(format!("Sync failed: {}", e)));
        }
    }
    Ok(result)
}

/// One-way push of the local collection to the remote endpoint.
pub fn push<S: StorageBackend, R: RemoteSource>(
    book: &QuoteBook<S>,
    engine: &SyncEngine,
    remote: &R,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match engine.push_local(book, remote) {
        Ok(count) => {
            result.add_message(CmdMessage::success(format!(
                "Pushed {} quotes to the remote.",
                count
            )));
        }
        Err(e) => {
            result.add_message(CmdMessage::error(format!("Push failed: {}", e)));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::QuotzError;
    use crate::model::Quote;
    use crate::remote::RemotePost;
    use crate::store::memory::InMemoryStore;

    struct StaticRemote {
        posts: Option<Vec<RemotePost>>,
    }

    impl RemoteSource for StaticRemote {
        fn fetch(&self) -> crate::error::Result<Vec<RemotePost>> {
            self.posts
                .clone()
                .ok_or_else(|| QuotzError::SyncUnavailable("down".to_string()))
        }

        fn push(&self, _quotes: &[Quote]) -> crate::error::Result<()> {
            if self.posts.is_none() {
                return Err(QuotzError::SyncUnavailable("down".to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_run_reports_overwrite_as_warning() {
        let mut book = QuoteBook::initialize(InMemoryStore::new());
        let mut engine = SyncEngine::new();
        let remote = StaticRemote {
            posts: Some(vec![RemotePost {
                title: "Hi".to_string(),
                body: "World wide".to_string(),
            }]),
        };

        let result = run(&mut book, &mut engine, &remote, "Server").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("overwritten"));
    }

    #[test]
    fn test_run_converts_unavailable_to_error_message() {
        let mut book = QuoteBook::initialize(InMemoryStore::new());
        let before = book.all().to_vec();
        let mut engine = SyncEngine::new();
        let remote = StaticRemote { posts: None };

        let result = run(&mut book, &mut engine, &remote, "Server").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(book.all(), before.as_slice());
    }

    #[test]
    fn test_push_reports_count() {
        let book = QuoteBook::initialize(InMemoryStore::new());
        let engine = SyncEngine::new();
        let remote = StaticRemote { posts: Some(Vec::new()) };

        let result = push(&book, &engine, &remote).unwrap();
        assert!(result.messages[0].content.contains("3 quotes"));
    }
}
