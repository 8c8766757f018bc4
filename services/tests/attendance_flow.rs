//! End-to-end flow over a file-backed store: login, rotate, scan, confirm,
//! claim, report, and survive a "reload".

use chrono::Utc;
use db::ledger::Ledger;
use db::models::user::Role;
use db::store::{JsonFileStore, KeyValueStore};
use services::auth::{AuthService, LoginRequest};
use services::claim::ClaimService;
use services::directory::{AcceptAllVerifier, MockDirectory};
use services::error::{ClaimRejected, ServiceError};
use services::report::ReportService;
use services::rotation::RotationController;
use services::scanner::ScanIntake;
use services::session::SessionHandle;
use services::token::TokenGenerator;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn member_scans_the_displayed_code_and_is_counted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal-store.json");

    {
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path).unwrap());
        let auth = AuthService::new(
            Arc::new(MockDirectory::seeded()),
            Arc::new(AcceptAllVerifier),
            SessionHandle::new(store.clone()),
        )
        .with_latency(Duration::ZERO);

        let user = auth
            .login(&LoginRequest {
                username: "member1".into(),
                password: "anything".into(),
                role: Role::Member,
            })
            .await
            .unwrap();
        assert_eq!(user.attendance, 15);

        // admin side: one active token on display
        let controller = RotationController::start(TokenGenerator);
        let display = controller.display();

        // member side: scan it, drop the duplicate frame, confirm
        let intake = ScanIntake::new();
        assert!(intake.on_decoded(&display.encodable_value));
        assert!(!intake.on_decoded(&display.encodable_value));
        let candidate = intake.confirm().unwrap();
        assert_eq!(candidate, display.encodable_value);

        let claims = ClaimService::new(
            Ledger::new(store.clone()),
            SessionHandle::new(store.clone()),
        );
        let now = Utc::now();
        let accepted = claims.claim(&user, &candidate, now).unwrap();
        assert_eq!(accepted.user.attendance, 16);

        // a rescan the same day is turned away
        let again = claims.claim(&accepted.user, &candidate, now).unwrap_err();
        assert!(matches!(
            again,
            ServiceError::Claim(ClaimRejected::AlreadyClaimedToday)
        ));

        let report = ReportService::new(Ledger::new(store.clone()));
        let today = accepted.record.taken_on();
        assert_eq!(report.headcount(today).unwrap(), 1);
        assert_eq!(report.daily_presence(today).unwrap()[0].name, "John Smith");

        controller.shutdown();
    }

    // "reload": a fresh store over the same file sees the session and ledger
    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path).unwrap());
    let session = SessionHandle::new(store.clone());
    let restored = session.current().unwrap().unwrap();
    assert_eq!(restored.attendance, 16);

    let ledger = Ledger::new(store.clone());
    assert_eq!(ledger.query_all().unwrap().count(), 1);

    // logout ends the session but leaves the ledger alone
    session.destroy().unwrap();
    assert!(session.current().unwrap().is_none());
    assert_eq!(ledger.query_all().unwrap().count(), 1);
}
