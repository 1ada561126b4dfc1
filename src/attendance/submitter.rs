use std::time::Duration;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use futures::future::LocalBoxFuture;
use tracing::{debug, error, info};

use crate::error::SubmitError;
use crate::model::session::Identity;

/// One clock-in or clock-out as the attendance sheet records it.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceEvent {
    pub identity: Identity,
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    pub date: NaiveDate,
    pub total_hours: Option<f64>,
}

impl AttendanceEvent {
    /// Form fields in the order the sheet script reads them. Optional fields
    /// are left out entirely rather than sent empty.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.identity.name.clone()),
            ("email", self.identity.email.clone()),
            ("clockIn", iso_timestamp(self.clock_in)),
        ];
        if let Some(clock_out) = self.clock_out {
            fields.push(("clockOut", iso_timestamp(clock_out)));
        }
        fields.push(("date", self.date.format("%Y-%m-%d").to_string()));
        if let Some(hours) = self.total_hours {
            fields.push(("totalHours", format!("{:.2}", hours)));
        }
        fields
    }
}

fn iso_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The remote attendance sink. One attempt per call: no retry, no queue.
pub trait AttendanceSubmitter: Send + Sync {
    fn submit<'a>(&'a self, event: &'a AttendanceEvent) -> LocalBoxFuture<'a, Result<(), SubmitError>>;
}

/// Posts events to a spreadsheet-backed web form endpoint. Any 2xx counts as
/// recorded; the response body is never read.
pub struct SheetSubmitter {
    endpoint: String,
    timeout: Duration,
}

impl SheetSubmitter {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        install_crypto_provider();
        Self {
            endpoint: endpoint.to_string(),
            timeout,
        }
    }
}

/// awc's rustls connector needs a process-wide provider before the first
/// client is built. Installing twice is harmless.
pub fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }
}

impl AttendanceSubmitter for SheetSubmitter {
    fn submit<'a>(&'a self, event: &'a AttendanceEvent) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
        Box::pin(async move {
            // awc::Client is !Send, the submitter is shared across workers
            let client = awc::Client::builder().timeout(self.timeout).finish();

            let response = client
                .post(self.endpoint.as_str())
                .send_form(&event.form_fields())
                .await
                .map_err(|e| {
                    error!(error = %e, email = %event.identity.email, "Error submitting to attendance sheet");
                    SubmitError::Network(e.to_string())
                })?;

            let status = response.status();
            if !status.is_success() {
                error!(status = status.as_u16(), email = %event.identity.email, "Attendance sheet rejected submission");
                return Err(SubmitError::RemoteRejected {
                    status: status.as_u16(),
                });
            }

            info!(email = %event.identity.email, clock_out = event.clock_out.is_some(), "Submitted to attendance sheet");
            Ok(())
        })
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every event and answers with the configured outcome.
    pub struct FakeSubmitter {
        outcome: Mutex<Result<(), SubmitError>>,
        pub events: Mutex<Vec<AttendanceEvent>>,
    }

    impl FakeSubmitter {
        pub fn accepting() -> Self {
            Self {
                outcome: Mutex::new(Ok(())),
                events: Mutex::new(Vec::new()),
            }
        }

        pub fn fail_with(&self, err: SubmitError) {
            *self.outcome.lock().unwrap() = Err(err);
        }

        pub fn accept(&self) {
            *self.outcome.lock().unwrap() = Ok(());
        }

        pub fn events(&self) -> Vec<AttendanceEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl AttendanceSubmitter for FakeSubmitter {
        fn submit<'a>(&'a self, event: &'a AttendanceEvent) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
            self.events.lock().unwrap().push(event.clone());
            let outcome = self.outcome.lock().unwrap().clone();
            Box::pin(async move { outcome })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn identity() -> Identity {
        Identity::new("A", "a@x.com").unwrap()
    }

    #[test]
    fn clock_in_event_omits_optional_fields() {
        let event = AttendanceEvent {
            identity: identity(),
            clock_in: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            clock_out: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            total_hours: None,
        };

        assert_eq!(
            event.form_fields(),
            vec![
                ("name", "A".to_string()),
                ("email", "a@x.com".to_string()),
                ("clockIn", "2024-01-15T09:00:00.000Z".to_string()),
                ("date", "2024-01-15".to_string()),
            ]
        );
    }

    #[test]
    fn clock_out_event_carries_hours_with_two_decimals() {
        let event = AttendanceEvent {
            identity: identity(),
            clock_in: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            clock_out: Some(Utc.with_ymd_and_hms(2024, 1, 15, 17, 30, 0).unwrap()),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            total_hours: Some(8.5),
        };

        let fields = event.form_fields();
        assert!(fields.contains(&("clockOut", "2024-01-15T17:30:00.000Z".to_string())));
        assert!(fields.contains(&("totalHours", "8.50".to_string())));
    }

    #[test]
    fn zero_hours_are_still_sent() {
        let event = AttendanceEvent {
            identity: identity(),
            clock_in: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            clock_out: Some(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            total_hours: Some(0.0),
        };
        assert!(event.form_fields().contains(&("totalHours", "0.00".to_string())));
    }

    #[actix_web::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let submitter = SheetSubmitter::new("http://127.0.0.1:9/exec", Duration::from_secs(2));
        let event = AttendanceEvent {
            identity: identity(),
            clock_in: Utc::now(),
            clock_out: None,
            date: Utc::now().date_naive(),
            total_hours: None,
        };

        let result = submitter.submit(&event).await;
        assert!(matches!(result, Err(SubmitError::Network(_))));

        // a second client in the same process reuses the installed provider
        let again = SheetSubmitter::new("http://127.0.0.1:9/exec", Duration::from_secs(2));
        assert!(matches!(
            again.submit(&event).await,
            Err(SubmitError::Network(_))
        ));
    }
}
