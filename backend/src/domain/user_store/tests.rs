//! Tests for the in-memory user store.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::AgeBracket;

fn alice() -> UserDraft {
    UserDraft::new("Alice", "alice@x.com", 22)
}

fn bob() -> UserDraft {
    UserDraft::new("Bob", "bob@x.com", 35)
}

#[fixture]
fn seeded_store() -> UserStore {
    let store = UserStore::new();
    store.create(alice()).expect("create Alice");
    store.create(bob()).expect("create Bob");
    store
}

#[rstest]
fn new_store_is_empty() {
    let store = UserStore::new();
    assert!(store.is_empty());
    assert!(store.list().is_empty());
}

#[rstest]
fn create_assigns_sequential_ids(seeded_store: UserStore) {
    let ids: Vec<i64> = seeded_store.list().iter().map(|u| u.id().get()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(seeded_store.len(), 2);
}

#[rstest]
fn create_returns_supplied_fields() {
    let store = UserStore::new();
    let user = store.create(alice()).expect("create Alice");
    assert_eq!(user.name(), "Alice");
    assert_eq!(user.email(), "alice@x.com");
    assert_eq!(user.age(), 22);
}

#[rstest]
fn duplicate_email_on_create_is_rejected_without_mutation(seeded_store: UserStore) {
    let before = seeded_store.list();

    let err = seeded_store
        .create(UserDraft::new("X", "alice@x.com", 30))
        .expect_err("duplicate email");

    assert_eq!(err, UserStoreError::duplicate_email("alice@x.com"));
    assert_eq!(seeded_store.list(), before);

    let next = seeded_store
        .create(UserDraft::new("Carol", "carol@x.com", 41))
        .expect("create Carol");
    assert_eq!(next.id(), UserId::new(3), "failed create must not consume an id");
}

#[rstest]
fn ids_are_never_reused_after_delete(seeded_store: UserStore) {
    seeded_store.delete(UserId::new(2)).expect("delete Bob");

    let carol = seeded_store
        .create(UserDraft::new("Carol", "carol@x.com", 41))
        .expect("create Carol");
    assert_eq!(carol.id(), UserId::new(3));
}

#[rstest]
fn deleted_email_becomes_available(seeded_store: UserStore) {
    seeded_store.delete(UserId::new(1)).expect("delete Alice");

    let again = seeded_store.create(alice()).expect("re-register Alice");
    assert_eq!(again.id(), UserId::new(3));
}

#[rstest]
fn get_returns_matching_record(seeded_store: UserStore) {
    let user = seeded_store.get(UserId::new(1)).expect("Alice exists");
    assert_eq!(user.email(), "alice@x.com");
}

#[rstest]
fn get_missing_id_is_not_found(seeded_store: UserStore) {
    let err = seeded_store.get(UserId::new(99)).expect_err("missing user");
    assert_eq!(err, UserStoreError::not_found(99_i64));
    assert_eq!(err.to_string(), "user 99 not found");
}

#[rstest]
fn update_replaces_fields_and_preserves_id(seeded_store: UserStore) {
    let updated = seeded_store
        .update(UserId::new(2), UserDraft::new("Bobby", "bob@x.com", 36))
        .expect("update Bob");

    assert_eq!(updated.id(), UserId::new(2));
    assert_eq!(updated.name(), "Bobby");
    assert_eq!(updated.email(), "bob@x.com");
    assert_eq!(updated.age(), 36);
    assert_eq!(seeded_store.get(UserId::new(2)).expect("Bob exists"), updated);
}

#[rstest]
fn update_keeps_insertion_position(seeded_store: UserStore) {
    seeded_store
        .update(UserId::new(1), UserDraft::new("Alicia", "alicia@x.com", 23))
        .expect("update Alice");

    let names: Vec<String> = seeded_store
        .list()
        .iter()
        .map(|u| u.name().to_owned())
        .collect();
    assert_eq!(names, vec!["Alicia", "Bob"]);
}

#[rstest]
fn update_releases_previous_email(seeded_store: UserStore) {
    seeded_store
        .update(UserId::new(1), UserDraft::new("Alice", "alice@y.com", 22))
        .expect("change Alice's email");

    let reused = seeded_store
        .create(UserDraft::new("Other", "alice@x.com", 40))
        .expect("old email is free");
    assert_eq!(reused.id(), UserId::new(3));
    let err = seeded_store
        .create(UserDraft::new("Other", "alice@y.com", 40))
        .expect_err("new email is taken");
    assert!(matches!(err, UserStoreError::DuplicateEmail { .. }));
}

#[rstest]
fn update_to_other_records_email_is_rejected(seeded_store: UserStore) {
    let before = seeded_store.list();

    let err = seeded_store
        .update(UserId::new(2), UserDraft::new("Bob", "alice@x.com", 35))
        .expect_err("email owned by Alice");

    assert_eq!(err, UserStoreError::duplicate_email("alice@x.com"));
    assert_eq!(seeded_store.list(), before);
}

#[rstest]
fn update_missing_id_is_not_found_before_email_check(seeded_store: UserStore) {
    let before = seeded_store.list();

    let err = seeded_store
        .update(UserId::new(99), UserDraft::new("X", "alice@x.com", 30))
        .expect_err("missing user");

    assert_eq!(err, UserStoreError::not_found(99_i64));
    assert_eq!(seeded_store.list(), before);
}

#[rstest]
fn delete_returns_removed_record(seeded_store: UserStore) {
    let removed = seeded_store.delete(UserId::new(1)).expect("delete Alice");
    assert_eq!(removed.name(), "Alice");

    let remaining = seeded_store.list();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining.first().map(User::name), Some("Bob"));
}

#[rstest]
fn delete_missing_id_is_not_found(seeded_store: UserStore) {
    let before = seeded_store.list();
    let err = seeded_store.delete(UserId::new(99)).expect_err("missing user");
    assert_eq!(err, UserStoreError::not_found(99_i64));
    assert_eq!(seeded_store.list(), before);
}

#[rstest]
fn stats_follow_reference_scenario(seeded_store: UserStore) {
    seeded_store
        .update(UserId::new(2), UserDraft::new("Bobby", "bob@x.com", 36))
        .expect("update Bob");

    let stats = seeded_store.stats();
    assert_eq!(stats.total_users, 2);
    assert!((stats.average_age - 29.0).abs() < f64::EPSILON);
    let groups = stats.users_by_age_group;
    assert_eq!(groups.get(AgeBracket::EighteenToTwentyFive), 1);
    assert_eq!(groups.get(AgeBracket::TwentySixToThirtyFive), 0);
    assert_eq!(groups.get(AgeBracket::ThirtySixToFifty), 1);
    assert_eq!(groups.get(AgeBracket::OverFifty), 0);
}

#[rstest]
fn stats_total_matches_list_length(seeded_store: UserStore) {
    seeded_store
        .create(UserDraft::new("Kid", "kid@x.com", 12))
        .expect("create minor");

    let stats = seeded_store.stats();
    assert_eq!(stats.total_users, seeded_store.list().len());
    assert!(stats.users_by_age_group.total() < stats.total_users);
}

#[rstest]
fn concurrent_creates_receive_distinct_gap_free_ids() {
    const THREADS: i64 = 8;
    const PER_THREAD: i64 = 25;

    let store = Arc::new(UserStore::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..PER_THREAD)
                    .map(|i| {
                        store
                            .create(UserDraft::new("u", format!("u{t}-{i}@x.com"), 30))
                            .expect("unique email")
                            .id()
                            .get()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("worker thread") {
            assert!(ids.insert(id), "id {id} handed out twice");
        }
    }

    let expected: HashSet<i64> = (1..=THREADS * PER_THREAD).collect();
    assert_eq!(ids, expected);
    assert_eq!(store.len(), usize::try_from(THREADS * PER_THREAD).expect("fits"));
}

#[rstest]
fn concurrent_creates_with_same_email_admit_exactly_one() {
    let store = Arc::new(UserStore::new());
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.create(UserDraft::new("Dup", "dup@x.com", 30)).is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().expect("worker thread"))
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(UserId::new(1)).expect("winner").email(), "dup@x.com");
}

#[rstest]
fn negative_ids_are_not_found(seeded_store: UserStore) {
    let before = seeded_store.list();

    assert_eq!(
        seeded_store.get(UserId::new(-1)).expect_err("no negative ids"),
        UserStoreError::not_found(-1_i64)
    );
    assert!(seeded_store.update(UserId::new(-1), alice()).is_err());
    assert!(seeded_store.delete(UserId::new(0)).is_err());
    assert_eq!(seeded_store.list(), before);
}

#[rstest]
fn negative_ages_are_stored_verbatim() {
    let store = UserStore::new();
    let user = store
        .create(UserDraft::new("Kid", "kid@x.com", -5))
        .expect("any integer age is accepted");

    assert_eq!(user.age(), -5);
    let stats = store.stats();
    assert_eq!(stats.total_users, 1);
    assert_eq!(stats.users_by_age_group.total(), 0);
}

#[rstest]
fn racing_updates_and_creates_leave_one_holder_per_email() {
    const CONTESTED: &str = "shared@x.com";
    const UPDATERS: i64 = 8;
    const CREATORS: usize = 8;

    let store = Arc::new(UserStore::new());
    for n in 0..UPDATERS {
        store
            .create(UserDraft::new(format!("u{n}"), format!("u{n}@x.com"), 30))
            .expect("seed record");
    }

    let barrier = Arc::new(std::sync::Barrier::new(
        usize::try_from(UPDATERS).expect("fits") + CREATORS,
    ));
    let updaters = (1..=UPDATERS).map(|id| {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            store
                .update(UserId::new(id), UserDraft::new(format!("u{id}"), CONTESTED, 31))
                .is_ok()
        })
    });
    let creators = (0..CREATORS).map(|n| {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            store
                .create(UserDraft::new(format!("c{n}"), CONTESTED, 40))
                .is_ok()
        })
    });
    let handles: Vec<_> = updaters.chain(creators).collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().expect("worker thread"))
        .filter(|ok| *ok)
        .count();
    assert_eq!(successes, 1, "exactly one writer may claim the email");

    let users = store.list();
    let holders = users.iter().filter(|u| u.email() == CONTESTED).count();
    assert_eq!(holders, 1);
    let emails: HashSet<&str> = users.iter().map(User::email).collect();
    assert_eq!(emails.len(), users.len(), "emails must stay unique");

    // Every listed email resolves to its own record through the index, and
    // released seed emails are free again.
    for user in &users {
        let err = store
            .create(UserDraft::new("dup", user.email(), 1))
            .expect_err("listed email is registered");
        assert_eq!(err, UserStoreError::duplicate_email(user.email()));
    }
    for n in 0..UPDATERS {
        let email = format!("u{n}@x.com");
        if !emails.contains(email.as_str()) {
            store
                .create(UserDraft::new("late", email, 1))
                .expect("released email is free");
        }
    }
}

#[rstest]
fn racing_updates_to_one_email_admit_exactly_one() {
    let store = Arc::new(UserStore::new());
    store.create(alice()).expect("create Alice");
    store.create(bob()).expect("create Bob");

    let handles: Vec<_> = [1, 2]
        .into_iter()
        .flat_map(|id| std::iter::repeat_n(id, 8))
        .map(|id| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .update(UserId::new(id), UserDraft::new("X", "taken@x.com", 50))
                    .map(|user| user.id())
            })
        })
        .collect();

    let winners: HashSet<UserId> = handles
        .into_iter()
        .filter_map(|h| h.join().expect("worker thread").ok())
        .collect();
    assert_eq!(winners.len(), 1, "only one record may own the email");

    let holders: Vec<UserId> = store
        .list()
        .iter()
        .filter(|u| u.email() == "taken@x.com")
        .map(User::id)
        .collect();
    assert_eq!(holders.len(), 1);
    assert!(holders.first().is_some_and(|id| winners.contains(id)));
}
