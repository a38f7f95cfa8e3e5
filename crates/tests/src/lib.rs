//! # Integration Tests
//!
//! End-to-end tests across the workspace crates.
//!
//! Covers:
//! - Generator -> Dispatcher -> HttpSubmitter against a mock save-fact API
//! - Failure isolation under mixed server responses
//! - Config text -> LoadPlan -> run

#[cfg(test)]
mod e2e_tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::Credential;
    use dispatcher::{DispatchState, Dispatcher, DispatcherConfig};
    use generator::FactGenerator;
    use submitter::HttpSubmitter;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

    /// Answers 200 and 500 in turn
    struct Alternating {
        calls: AtomicUsize,
    }

    impl Respond for Alternating {
        fn respond(&self, _request: &Request) -> ResponseTemplate {
            if self.calls.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
                ResponseTemplate::new(200)
            } else {
                ResponseTemplate::new(500)
            }
        }
    }

    /// Records the `comment` form field of every request
    struct CommentRecorder {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl Respond for CommentRecorder {
        fn respond(&self, request: &Request) -> ResponseTemplate {
            let body = String::from_utf8_lossy(&request.body).to_string();
            let comment = body
                .split("name=\"comment\"")
                .nth(1)
                .and_then(|part| part.split("\r\n\r\n").nth(1))
                .and_then(|value| value.lines().next())
                .unwrap_or_default()
                .trim()
                .to_string();
            self.seen.lock().unwrap().push(comment);
            ResponseTemplate::new(200)
        }
    }

    /// End-to-end: every fact of every pass reaches the server
    #[tokio::test]
    async fn test_e2e_generator_to_http() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/_api/facts/save_fact"))
            .and(header("authorization", "Bearer e2e-token"))
            .respond_with(ResponseTemplate::new(200))
            .expect(30)
            .mount(&server)
            .await;

        let facts = FactGenerator::default().generate(10);
        let submitter =
            HttpSubmitter::new("e2e", &format!("{}/_api/facts/save_fact", server.uri())).unwrap();
        let dispatcher = Dispatcher::new(
            submitter,
            Credential::bearer("e2e-token"),
            DispatcherConfig::with_passes(3),
        );
        let state = dispatcher.state();

        let report = dispatcher.run(&facts).await.unwrap();

        assert_eq!(report.enqueued, 30);
        assert_eq!(report.attempted, 30);
        assert_eq!(report.succeeded, 30);
        assert!(report.is_clean());
        assert_eq!(*state.borrow(), DispatchState::Done);
    }

    /// Server failures are counted but never stop the run
    #[tokio::test]
    async fn test_e2e_mixed_responses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(Alternating {
                calls: AtomicUsize::new(0),
            })
            .mount(&server)
            .await;

        let facts = generator::generate(20);
        let submitter = HttpSubmitter::new("e2e", &server.uri()).unwrap();
        let report = dispatcher::dispatch(submitter, Credential::bearer("t"), &facts, 2)
            .await
            .unwrap();

        assert_eq!(report.attempted, 40);
        assert_eq!(report.succeeded, 20);
        assert_eq!(report.failed, 20);
    }

    /// Each pass replays the fact set in generation order
    #[tokio::test]
    async fn test_e2e_pass_order() {
        let server = MockServer::start().await;
        let seen = Arc::new(Mutex::new(Vec::new()));
        Mock::given(method("POST"))
            .respond_with(CommentRecorder {
                seen: Arc::clone(&seen),
            })
            .mount(&server)
            .await;

        let facts = generator::generate(5);
        let submitter = HttpSubmitter::new("e2e", &server.uri()).unwrap();
        dispatcher::dispatch(submitter, Credential::bearer("t"), &facts, 2)
            .await
            .unwrap();

        let expected: Vec<String> = (1..=5)
            .chain(1..=5)
            .map(|i| format!("Buffer: {i}"))
            .collect();
        assert_eq!(*seen.lock().unwrap(), expected);
    }

    /// Config text drives the whole run
    #[tokio::test]
    async fn test_e2e_config_to_run() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer from-config"))
            .respond_with(ResponseTemplate::new(200))
            .expect(12)
            .mount(&server)
            .await;

        let config = format!(
            r#"
[api]
endpoint = "{}/save"
token = "from-config"

[facts]
count = 4
comment_prefix = "E2E"
indicator_to_mo_id = 42

[dispatch]
passes = 3
queue_capacity = 2
"#,
            server.uri()
        );
        let plan = ConfigLoader::load_from_str(&config, ConfigFormat::Toml).unwrap();
        assert_eq!(plan.total_submissions(), 12);

        let facts = FactGenerator::new(plan.facts.template.clone()).generate(plan.facts.count);
        assert_eq!(facts[3].comment, "E2E: 4");
        assert!(facts.iter().all(|f| f.indicator_to_mo_id == 42));

        let credential = plan.api.token.clone().unwrap();
        let submitter = HttpSubmitter::new("e2e", &plan.api.endpoint).unwrap();
        let report = Dispatcher::new(submitter, credential, DispatcherConfig::from(plan.dispatch))
            .run(&facts)
            .await
            .unwrap();

        assert_eq!(report.succeeded, 12);

        let values: HashMap<i64, usize> =
            facts.iter().fold(HashMap::new(), |mut acc, f| {
                *acc.entry(f.value).or_default() += 1;
                acc
            });
        assert_eq!(values.len(), 4);
    }
}
