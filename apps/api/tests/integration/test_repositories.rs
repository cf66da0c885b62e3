use super::helpers::{insert_user, test_pool};
use aquarium_api::{
    domain::{
        aquarium::{
            comment::Comment,
            entity::{Aquarium, NewAquarium},
            errors::DomainError,
            repository::AquariumRepository,
        },
        user::repository::UserRepository,
    },
    infrastructure::repositories::{
        sqlx_aquarium_repository::SqlxAquariumRepository,
        sqlx_user_repository::SqlxUserRepository,
    },
};
use chrono::{Duration, SubsecRound, Utc};
use uuid::Uuid;

/// Aquarium with a timestamp Postgres stores without rounding.
fn tank(owner: Uuid, name: &str) -> Aquarium {
    let mut aquarium = Aquarium::new(
        owner,
        NewAquarium {
            name: name.to_string(),
            location: Some("Lisbon".to_string()),
            ..NewAquarium::default()
        },
    );
    aquarium.created_at = aquarium.created_at.trunc_subsecs(6);
    aquarium
}

#[tokio::test]
async fn likes_and_comments_survive_a_save() {
    let Some(db) = test_pool().await else { return };
    let repo = SqlxAquariumRepository::new(db.clone());
    let owner = insert_user(&db, "Owner").await;
    let fan = insert_user(&db, "Fan").await;

    let mut aquarium = repo.create(&tank(owner.id, "Reef Tank")).await.unwrap();
    aquarium.like(fan.id).unwrap();
    aquarium.add_comment(Comment::new(&fan, "Nice setup".to_string(), Some(4)));
    repo.save(&aquarium).await.unwrap();

    let stored = repo.find_by_id(aquarium.id).await.unwrap().expect("stored");
    assert_eq!(stored, aquarium);
    assert_eq!(stored.comments[0].user_id, fan.id);
    assert_eq!(stored.comments[0].rating, Some(4));
}

#[tokio::test]
async fn saving_an_unknown_aquarium_is_not_found() {
    let Some(db) = test_pool().await else { return };
    let repo = SqlxAquariumRepository::new(db.clone());
    let owner = insert_user(&db, "Owner").await;

    let err = repo.save(&tank(owner.id, "Never Stored")).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn find_all_lists_newest_first() {
    let Some(db) = test_pool().await else { return };
    let repo = SqlxAquariumRepository::new(db.clone());
    let owner = insert_user(&db, "Owner").await;

    let mut older = tank(owner.id, "Nano Cube");
    older.created_at = (Utc::now() - Duration::hours(1)).trunc_subsecs(6);
    let older = repo.create(&older).await.unwrap();
    let newer = repo.create(&tank(owner.id, "Planted 60L")).await.unwrap();

    let ids: Vec<Uuid> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .filter(|id| *id == older.id || *id == newer.id)
        .collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let Some(db) = test_pool().await else { return };
    let repo = SqlxAquariumRepository::new(db.clone());
    let owner = insert_user(&db, "Owner").await;

    let aquarium = repo.create(&tank(owner.id, "Reef Tank")).await.unwrap();
    repo.delete(aquarium.id).await.unwrap();
    assert!(repo.find_by_id(aquarium.id).await.unwrap().is_none());
}

#[tokio::test]
async fn aquarium_for_missing_user_is_rejected_by_the_store() {
    let Some(db) = test_pool().await else { return };
    let repo = SqlxAquariumRepository::new(db);

    let err = repo.create(&tank(Uuid::now_v7(), "Orphan")).await.unwrap_err();
    assert!(matches!(err, DomainError::InfrastructureError(_)));
}

#[tokio::test]
async fn profile_lookup_reads_name_and_avatar() {
    let Some(db) = test_pool().await else { return };
    let users = SqlxUserRepository::new(db.clone());
    let profile = insert_user(&db, "Coral").await;

    assert_eq!(
        users.find_profile(profile.id).await.unwrap(),
        Some(profile.clone())
    );
    assert_eq!(users.find_profile(Uuid::now_v7()).await.unwrap(), None);
}
