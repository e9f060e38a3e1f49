use super::helpers::{count_rows, create_post, register, spawn_app, unique};
use blog_api::{application::like::dto::LikeRequest, domain::shared::errors::DomainError};

#[tokio::test]
async fn liking_twice_conflicts_and_keeps_one_row() {
    let Some(app) = spawn_app().await else { return };
    let author = register(&app, "author").await;
    let post = create_post(&app, &author, &unique("cat")).await;
    let request = LikeRequest {
        user_id: author.id,
        post_id: post.id,
    };

    let first = app.state.likes.add_like(request).await.unwrap();
    assert!(first.id > 0);
    assert_eq!(first.user.id, author.id);

    assert!(matches!(
        app.state.likes.add_like(request).await,
        Err(DomainError::Conflict(_))
    ));
    assert_eq!(app.state.likes.get_likes_count(post.id).await, Ok(1));
    assert_eq!(count_rows(&app, "likes", post.id).await, 1);
}

#[tokio::test]
async fn remove_like_deletes_only_that_pair() {
    let Some(app) = spawn_app().await else { return };
    let author = register(&app, "author").await;
    let other = register(&app, "other").await;
    let post = create_post(&app, &author, &unique("cat")).await;

    assert!(matches!(
        app.state.likes.remove_like(post.id, author.id).await,
        Err(DomainError::Conflict(_))
    ));

    for user in [&author, &other] {
        app.state
            .likes
            .add_like(LikeRequest {
                user_id: user.id,
                post_id: post.id,
            })
            .await
            .unwrap();
    }

    app.state
        .likes
        .remove_like(post.id, author.id)
        .await
        .unwrap();

    let likers = app
        .state
        .likes
        .get_users_who_liked_post(post.id)
        .await
        .unwrap();
    assert_eq!(
        likers.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![other.id]
    );
    assert!(matches!(
        app.state.likes.remove_like(post.id, author.id).await,
        Err(DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn concurrent_removals_remove_once() {
    let Some(app) = spawn_app().await else { return };
    let author = register(&app, "racer").await;
    let post = create_post(&app, &author, &unique("cat")).await;
    app.state
        .likes
        .add_like(LikeRequest {
            user_id: author.id,
            post_id: post.id,
        })
        .await
        .unwrap();

    let (a, b) = tokio::join!(
        app.state.likes.remove_like(post.id, author.id),
        app.state.likes.remove_like(post.id, author.id)
    );
    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(successes, 1);
    assert_eq!(app.state.likes.get_likes_count(post.id).await, Ok(0));
}
