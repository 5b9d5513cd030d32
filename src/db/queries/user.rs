use tracing::{info, warn};

use crate::db::error::{StoreError, StoreResult};
use crate::db::models::user::{NewUser, User};
use crate::db::queries::{active_filter, contains_lowered};
use crate::db::store::Store;

/// All users in storage order, or those whose name contains `query`.
pub async fn list_users(store: &Store, query: Option<&str>) -> Vec<User> {
    let data = store.read().await;
    match active_filter(query) {
        None => data.users.clone(),
        Some(q) => {
            let needle = q.to_lowercase();
            data.users
                .iter()
                .filter(|user| contains_lowered(&user.name, &needle))
                .cloned()
                .collect()
        }
    }
}

/// First user with the given id.
pub async fn find_user(store: &Store, id: &str) -> Option<User> {
    let data = store.read().await;
    data.users.iter().find(|user| user.id == id).cloned()
}

/// Fails with `EmailTaken` when another user already has this email.
pub async fn create_user(store: &Store, new_user: NewUser) -> StoreResult<User> {
    let mut data = store.write().await;

    if data.users.iter().any(|user| user.email == new_user.email) {
        warn!("❌ createUser rejected, email already taken: {}", new_user.email);
        return Err(StoreError::EmailTaken(new_user.email));
    }

    let id = store.fresh_id(|id| data.users.iter().any(|existing| existing.id == id))?;
    let user = new_user.into_user(id);
    data.users.push(user.clone());
    info!("✅ Created user {} ({})", user.id, user.email);

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::test_support::{empty_store, seeded_store};
    use tokio_test::{assert_err, assert_ok};

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            age: None,
        }
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[tokio::test]
    async fn no_query_returns_everyone_in_order() {
        let store = seeded_store();
        let users = list_users(&store, None).await;
        assert_eq!(names(&users), vec!["Matt", "Sarah", "Mike"]);
    }

    #[tokio::test]
    async fn query_filters_by_name_case_insensitively() {
        let store = seeded_store();
        assert_eq!(names(&list_users(&store, Some("M")).await), vec!["Matt", "Mike"]);
        assert_eq!(names(&list_users(&store, Some("SAR")).await), vec!["Sarah"]);
        assert!(list_users(&store, Some("zoe")).await.is_empty());
    }

    #[tokio::test]
    async fn query_does_not_look_at_email() {
        let store = seeded_store();
        assert!(list_users(&store, Some("mail.com")).await.is_empty());
    }

    #[tokio::test]
    async fn find_user_by_id() {
        let store = seeded_store();
        assert_eq!(find_user(&store, "2").await.map(|u| u.name), Some("Sarah".to_string()));
        assert_eq!(find_user(&store, "42").await, None);
    }

    #[tokio::test]
    async fn create_then_duplicate_email() {
        let store = empty_store();
        store.write().await.users.push(User {
            id: "1".into(),
            name: "Matt".into(),
            email: "matt@mail.com".into(),
            age: None,
        });

        let sarah = assert_ok!(create_user(&store, new_user("Sarah", "sarah@mail.com")).await);
        assert_eq!(sarah.id, "new-1");
        assert_eq!(store.counts().await.users, 2);

        let err = assert_err!(create_user(&store, new_user("Dup", "sarah@mail.com")).await);
        assert_eq!(err, StoreError::EmailTaken("sarah@mail.com".into()));
        assert_eq!(store.counts().await.users, 2);
    }

    #[tokio::test]
    async fn new_ids_are_unique_against_existing_ones() {
        let store = seeded_store();
        let before: Vec<String> = list_users(&store, None).await.into_iter().map(|u| u.id).collect();

        let created = assert_ok!(create_user(&store, new_user("Zoe", "zoe@mail.com")).await);
        assert!(!before.contains(&created.id));
        assert_eq!(store.counts().await.users, before.len() + 1);
    }

    #[tokio::test]
    async fn colliding_generator_does_not_duplicate_ids() {
        // ids "1", "2" and "3" already belong to the seeded users
        let store = Store::with_collections(
            crate::db::seed::demo_collections(),
            std::sync::Arc::new(crate::db::id::SequentialIds::new("")),
        );

        let created = assert_ok!(create_user(&store, new_user("Zoe", "zoe@mail.com")).await);
        assert_eq!(created.id, "4");

        let users = list_users(&store, None).await;
        assert_eq!(users.iter().filter(|u| u.id == "1").count(), 1);
        assert_eq!(users.len(), 4);
    }

    #[tokio::test]
    async fn create_user_keeps_optional_age() {
        let store = empty_store();
        let user = assert_ok!(
            create_user(
                &store,
                NewUser {
                    name: "Ann".into(),
                    email: "ann@mail.com".into(),
                    age: Some(29),
                },
            )
            .await
        );
        assert_eq!(user.age, Some(29));
        let stored = find_user(&store, &user.id).await;
        assert_eq!(stored, Some(user));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_creates_with_same_email_admit_one() {
        let store = empty_store();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    create_user(&store, new_user(&format!("racer{i}"), "race@mail.com")).await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.counts().await.users, 1);
    }
}
