//! Tests for the itinerary services.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{FixtureItineraryRepository, MockItineraryRepository};
use crate::domain::{DestinationSnapshot, ErrorCode, ItineraryTitle};

struct FixtureClock(DateTime<Utc>);

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 2, 8, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn draft() -> ItineraryDraft {
    ItineraryDraft {
        user_id: None,
        title: ItineraryTitle::new("Capitals").expect("valid title"),
        description: Some("Two weeks".to_owned()),
        destinations: vec![
            DestinationSnapshot::new("paris", "Paris", "France"),
            DestinationSnapshot::new("london", "London", "United Kingdom"),
        ],
    }
}

fn command_service(
    repo: MockItineraryRepository,
    now: DateTime<Utc>,
) -> ItineraryCommandService<MockItineraryRepository> {
    ItineraryCommandService::new(Arc::new(repo), Arc::new(FixtureClock(now)))
}

#[rstest]
#[tokio::test]
async fn create_stamps_id_and_clock_time(draft: ItineraryDraft, now: DateTime<Utc>) {
    let mut repo = MockItineraryRepository::new();
    repo.expect_insert().times(1).return_once(|_| Ok(()));

    let created = command_service(repo, now)
        .create_itinerary(draft.clone())
        .await
        .expect("create succeeds");

    assert_eq!(created.created_at(), now);
    assert_eq!(created.title(), "Capitals");
    assert_eq!(created.description(), Some("Two weeks"));
    assert_eq!(created.destinations(), draft.destinations.as_slice());
}

#[rstest]
#[tokio::test]
async fn create_assigns_distinct_ids(draft: ItineraryDraft, now: DateTime<Utc>) {
    let service = ItineraryCommandService::new(
        Arc::new(FixtureItineraryRepository),
        Arc::new(FixtureClock(now)),
    );

    let first = service.create_itinerary(draft.clone()).await.expect("first");
    let second = service.create_itinerary(draft).await.expect("second");

    assert_ne!(first.id(), second.id());
}

#[rstest]
#[tokio::test]
async fn create_maps_store_failures_to_internal(draft: ItineraryDraft, now: DateTime<Utc>) {
    let mut repo = MockItineraryRepository::new();
    repo.expect_insert()
        .return_once(|_| Err(ItineraryRepositoryError::lock("poisoned")));

    let err = command_service(repo, now)
        .create_itinerary(draft)
        .await
        .expect_err("store failure");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[case(true, None)]
#[case(false, Some(ErrorCode::NotFound))]
#[tokio::test]
async fn delete_reports_missing_itineraries(
    now: DateTime<Utc>,
    #[case] existed: bool,
    #[case] expected: Option<ErrorCode>,
) {
    let mut repo = MockItineraryRepository::new();
    repo.expect_delete().times(1).return_once(move |_| Ok(existed));

    let outcome = command_service(repo, now)
        .delete_itinerary(&ItineraryId::random())
        .await;

    assert_eq!(outcome.err().map(|err| err.code()), expected);
}

#[rstest]
#[tokio::test]
async fn get_missing_itinerary_is_not_found() {
    let service = ItineraryQueryService::new(Arc::new(FixtureItineraryRepository));

    let err = service
        .get_itinerary(&ItineraryId::random())
        .await
        .expect_err("missing itinerary");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "Itinerary not found");
}

#[rstest]
#[tokio::test]
async fn list_without_owner_reads_everything() {
    let mut repo = MockItineraryRepository::new();
    repo.expect_list_all().times(1).return_once(|| Ok(Vec::new()));
    repo.expect_list_by_user().never();

    let listed = ItineraryQueryService::new(Arc::new(repo))
        .list_itineraries(None)
        .await
        .expect("list succeeds");

    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test]
async fn list_with_owner_uses_the_scoped_query() {
    let owner = UserId::random();
    let mut repo = MockItineraryRepository::new();
    repo.expect_list_all().never();
    repo.expect_list_by_user()
        .withf(move |user_id| *user_id == owner)
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    ItineraryQueryService::new(Arc::new(repo))
        .list_itineraries(Some(owner))
        .await
        .expect("list succeeds");
}
