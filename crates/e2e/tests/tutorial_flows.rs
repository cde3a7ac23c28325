//! Tutorial CRUD scenarios, replayed through the data-access layer
//! against a live mock backend.

use std::sync::Arc;

use schooltour_client::{Dashboard, MessageLog, SchoolDetail, SchoolList, SchoolService};
use schooltour_common::School;
use schooltour_e2e::ServerHandle;

fn service_for(server: &ServerHandle) -> Arc<SchoolService> {
    Arc::new(SchoolService::new(
        server.base_url(),
        Arc::new(MessageLog::new()),
    ))
}

#[tokio::test]
async fn initial_list_shows_the_ten_seed_schools() {
    let server = ServerHandle::start().await.unwrap();
    let service = service_for(&server);

    let mut list = SchoolList::new(service.clone());
    list.refresh().await;

    assert_eq!(list.schools().len(), 10);
    assert_eq!(list.schools()[0], School::new(11, "Mr. Nice"));
    assert_eq!(list.schools()[4], School::new(15, "Magneta"));

    let messages = service.messages().messages();
    assert_eq!(messages, vec!["SchoolService: fetched schools"]);
}

#[tokio::test]
async fn dashboard_has_four_top_schools_with_magneta_last() {
    let server = ServerHandle::start().await.unwrap();
    let mut dashboard = Dashboard::new(service_for(&server));

    dashboard.refresh().await;

    let names: Vec<&str> = dashboard.top_schools().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Narco", "Bombasto", "Celeritas", "Magneta"]);
    assert_eq!(dashboard.top_schools()[3].id, 15);
}

#[tokio::test]
async fn get_school_returns_the_requested_id() {
    let server = ServerHandle::start().await.unwrap();
    let service = service_for(&server);

    for id in [11, 15, 20] {
        let school = service.get_school(id).await.unwrap().unwrap();
        assert_eq!(school.id, id);
    }
}

#[tokio::test]
async fn get_unknown_school_surfaces_not_found() {
    let server = ServerHandle::start().await.unwrap();
    let service = service_for(&server);

    let err = service.get_school(99).await.unwrap_err();
    assert!(err.is_not_found());

    let messages = service.messages().messages();
    assert_eq!(messages, vec!["SchoolService: did not find school id=99"]);
}

#[tokio::test]
async fn existence_check_answers_without_a_not_found_error() {
    let server = ServerHandle::start().await.unwrap();
    let service = service_for(&server);

    assert_eq!(service.find_school(15).await, Some(School::new(15, "Magneta")));
    assert_eq!(service.find_school(99).await, None);
}

#[tokio::test]
async fn detail_edit_saves_and_is_visible_in_the_list() {
    let server = ServerHandle::start().await.unwrap();
    let service = service_for(&server);

    let mut detail = SchoolDetail::new(service.clone());
    detail.load(15).await.unwrap();
    assert_eq!(detail.school().unwrap().name, "Magneta");

    detail.set_name("MagnetaX");
    detail.save().await;
    // Saving navigates back, success or not.
    assert!(detail.school().is_none());

    let school = service.get_school(15).await.unwrap().unwrap();
    assert_eq!(school, School::new(15, "MagnetaX"));

    let mut list = SchoolList::new(service);
    list.refresh().await;
    assert_eq!(list.schools()[4].name, "MagnetaX");
}

#[tokio::test]
async fn update_then_fetch_round_trips_field_for_field() {
    let server = ServerHandle::start().await.unwrap();
    let service = service_for(&server);

    let edited = School::new(13, "Bombasto Prime");
    assert_eq!(service.update_school(&edited).await, Some(()));

    let fetched = service.get_school(13).await.unwrap().unwrap();
    assert_eq!(fetched, edited);
}

#[tokio::test]
async fn deleting_magneta_leaves_nine_schools_in_order() {
    let server = ServerHandle::start().await.unwrap();
    let service = service_for(&server);

    let mut list = SchoolList::new(service.clone());
    list.refresh().await;
    let before: Vec<School> = list.schools().to_vec();

    let target = before[4].clone();
    assert_eq!(target, School::new(15, "Magneta"));
    list.delete(&target).await;

    assert_eq!(list.schools().len(), 9);
    assert!(list.schools().iter().all(|s| s.id != 15));
    let expected: Vec<School> = before.into_iter().filter(|s| s.id != 15).collect();
    assert_eq!(list.schools(), expected.as_slice());

    // The backend agrees with the optimistic cache.
    assert_eq!(service.get_schools().await, expected);
}

#[tokio::test]
async fn adding_alice_appends_with_the_next_id() {
    let server = ServerHandle::start().await.unwrap();
    let service = service_for(&server);

    let mut list = SchoolList::new(service.clone());
    list.refresh().await;
    let before: Vec<School> = list.schools().to_vec();
    let max_id = before.iter().map(|s| s.id).max().unwrap();
    assert_eq!(max_id, 20);

    list.add("  Alice  ").await;

    assert_eq!(list.schools().len(), before.len() + 1);
    assert_eq!(&list.schools()[..before.len()], before.as_slice());
    assert_eq!(
        list.schools().last(),
        Some(&School::new(max_id + 1, "Alice"))
    );

    // The append shows up at the end of a fresh fetch too.
    let schools = service.get_schools().await;
    assert_eq!(schools.last(), Some(&School::new(21, "Alice")));
}

#[tokio::test]
async fn delete_then_add_reuses_the_freed_id() {
    let server = ServerHandle::start().await.unwrap();
    let service = service_for(&server);

    let mut list = SchoolList::new(service.clone());
    list.refresh().await;
    let tornado = list.schools().last().unwrap().clone();
    list.delete(&tornado).await;

    list.add("Alice").await;
    assert_eq!(list.schools().last(), Some(&School::new(20, "Alice")));
}
