pub mod attendance;
pub mod dashboard;
pub mod employee;

use actix_web::error::ErrorBadRequest;
use chrono::NaiveDate;
use serde_json::json;

/// Empty means "no date filter"; anything else must be `YYYY-MM-DD`.
pub(crate) fn parse_date_param(raw: Option<&str>) -> actix_web::Result<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ErrorBadRequest(json!({ "message": "date must be YYYY-MM-DD" }))),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;
    use std::sync::Arc;

    use actix_web::{
        App, Error,
        body::MessageBody,
        dev::{ServiceFactory, ServiceRequest, ServiceResponse},
        test::TestRequest,
        web,
    };
    use chrono::{TimeZone, Utc};

    use crate::attendance::clock::testing::FixedClock;
    use crate::attendance::manager::ClockSessionManager;
    use crate::attendance::session_store::testing::MemorySessionStore;
    use crate::attendance::submitter::testing::FakeSubmitter;
    use crate::config::Config;
    use crate::directory::{Directory, init_directory};
    use crate::routes;

    /// Full router over the bundled snapshot, with a fake sheet and a clock
    /// parked at 2024-01-15 09:00 UTC.
    pub struct TestApp {
        pub manager: web::Data<ClockSessionManager>,
        pub directory: web::Data<Directory>,
        pub submitter: Arc<FakeSubmitter>,
        pub clock: Arc<FixedClock>,
        pub config: Config,
    }

    impl TestApp {
        pub fn new() -> Self {
            let submitter = Arc::new(FakeSubmitter::accepting());
            let clock = Arc::new(FixedClock::new(
                Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            ));
            let manager = ClockSessionManager::new(
                Arc::new(MemorySessionStore::default()),
                submitter.clone(),
                clock.clone(),
            );
            let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");

            Self {
                manager: web::Data::new(manager),
                directory: web::Data::new(init_directory(&data_dir).unwrap()),
                submitter,
                clock,
                config: Config::for_tests(),
            }
        }

        /// Owns clones of the shared state so the app outlives the borrow.
        pub fn app(
            &self,
        ) -> App<
            impl ServiceFactory<
                ServiceRequest,
                Response = ServiceResponse<impl MessageBody + use<>>,
                Config = (),
                InitError = (),
                Error = Error,
            > + use<>,
        > {
            let config = self.config.clone();
            App::new()
                .app_data(self.manager.clone())
                .app_data(self.directory.clone())
                .configure(move |cfg| routes::configure(cfg, &config))
        }

        // the rate limiters key on the peer address
        fn with_peer(req: TestRequest, path: &str) -> TestRequest {
            req.uri(path)
                .peer_addr("127.0.0.1:40000".parse().unwrap())
        }

        pub fn get(&self, path: &str) -> TestRequest {
            Self::with_peer(TestRequest::get(), path)
        }

        pub fn post(&self, path: &str) -> TestRequest {
            Self::with_peer(TestRequest::post(), path)
        }

        pub fn delete(&self, path: &str) -> TestRequest {
            Self::with_peer(TestRequest::delete(), path)
        }
    }
}
