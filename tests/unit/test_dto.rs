use blog_api::{
    application::{
        comment::dto::CommentResponse, like::dto::LikeResponse, post::dto::PostResponse,
        shared::dto::UserResponse,
    },
    domain::{
        category::entity::Category, comment::entity::Comment, like::entity::Like,
        post::entity::Post, user::entity::User,
    },
};
use serde_json::{Value, json};

fn author() -> User {
    User {
        id: 1,
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
        password: "$2b$12$secret".to_string(),
        roles: vec!["USER".to_string()],
    }
}

#[test]
fn post_response_nests_author_and_category_without_secrets() {
    let post = Post {
        id: 5,
        title: "Hello".to_string(),
        content: "World".to_string(),
        author: author(),
        category: Category {
            id: 2,
            name: "rust".to_string(),
        },
    };

    let value = serde_json::to_value(PostResponse::from(&post)).expect("serialize");
    assert_eq!(
        value,
        json!({
            "id": 5,
            "title": "Hello",
            "content": "World",
            "author": { "id": 1, "username": "alice", "email": "a@x.com" },
            "category": { "id": 2, "name": "rust" }
        })
    );
}

#[test]
fn comment_response_does_not_nest_post() {
    let comment = Comment {
        id: 9,
        content: "Nice".to_string(),
        author: author(),
        post_id: 5,
    };

    let value = serde_json::to_value(CommentResponse::from(&comment)).expect("serialize");
    assert!(value.get("post").is_none());
    assert!(value.get("post_id").is_none());
    assert_eq!(value["author"]["username"], "alice");
}

#[test]
fn like_response_exposes_user_summary() {
    let like = Like {
        id: 3,
        user: author(),
        post_id: 5,
    };

    let response = LikeResponse::from(&like);
    assert_eq!(
        response.user,
        UserResponse {
            id: 1,
            username: "alice".to_string(),
            email: "a@x.com".to_string()
        }
    );
}

#[test]
fn serialized_user_entity_skips_password() {
    let value: Value = serde_json::to_value(author()).expect("serialize");
    assert!(value.get("password").is_none());
}
