use super::helpers::{MISSING_ID, create_post, register, spawn_app, unique};
use blog_api::{application::comment::dto::CommentRequest, domain::shared::errors::DomainError};

#[tokio::test]
async fn comment_lifecycle() {
    let Some(app) = spawn_app().await else { return };
    let author = register(&app, "commenter").await;
    let post = create_post(&app, &author, &unique("cat")).await;

    let created = app
        .state
        .comments
        .create_comment(CommentRequest {
            id: None,
            content: Some("Great read".to_string()),
            author_id: Some(author.id),
            post_id: Some(post.id),
        })
        .await
        .unwrap();
    assert_eq!(created.author.username, author.username);

    let updated = app
        .state
        .comments
        .update_comment(CommentRequest {
            id: Some(created.id),
            content: Some("Great read, thanks".to_string()),
            author_id: Some(author.id),
            post_id: Some(post.id),
        })
        .await
        .unwrap()
        .expect("comment should exist");
    assert_eq!(updated.content, "Great read, thanks");
    assert_eq!(
        app.state.comments.get_comments_by_post(post.id).await.unwrap(),
        vec![updated]
    );

    app.state.comments.delete_comment(created.id).await.unwrap();
    assert!(matches!(
        app.state.comments.get_comment_by_id(created.id).await,
        Err(DomainError::NotFound(_))
    ));
    app.state.comments.delete_comment(created.id).await.unwrap();
}

#[tokio::test]
async fn comment_on_missing_post_is_not_found() {
    let Some(app) = spawn_app().await else { return };
    let author = register(&app, "lost").await;

    let err = app
        .state
        .comments
        .create_comment(CommentRequest {
            id: None,
            content: Some("Hello?".to_string()),
            author_id: Some(author.id),
            post_id: Some(MISSING_ID),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}
