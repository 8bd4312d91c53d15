use internhasha::cli::{handle_command, Command, PostsArgs, ProfileCommand};
use internhasha::core::{ConfigManager, Preferences};
use internhasha::filters::FilterState;
use internhasha::types::Domain;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer, dir: &tempfile::TempDir) -> ConfigManager {
    ConfigManager::with_data_dir(&server.uri(), dir.path().to_path_buf())
}

fn post_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "companyName": "Waffle",
        "employmentEndDate": null,
        "positionTitle": "Backend intern",
        "domain": "FINTECH",
        "slogan": "",
        "headCount": 1,
        "isBookmarked": false
    })
}

#[tokio::test]
async fn test_signup_signs_in_with_returned_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/user"))
        .and(body_json(json!({
            "authType": "APPLICANT",
            "info": {
                "type": "APPLICANT",
                "name": "Kim",
                "email": "kim@snu.ac.kr",
                "password": "pw",
                "successCode": "ok"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": "u1", "userRole": "APPLICANT"},
            "token": "issued-token"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer issued-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "name": "Kim",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z",
            "userRole": "APPLICANT",
            "email": "kim@snu.ac.kr"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config(&server, &dir);
    let command = Command::Signup {
        name: "Kim".to_string(),
        email_id: "kim".to_string(),
        password: "pw".to_string(),
        password_confirm: "pw".to_string(),
    };

    handle_command(command, &config).await.unwrap();

    let stored = config.token_store().get().await.unwrap();
    assert_eq!(stored.as_deref(), Some("issued-token"));
}

#[tokio::test]
async fn test_signup_with_mismatched_passwords_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config(&server, &dir);
    let command = Command::Signup {
        name: "Kim".to_string(),
        email_id: "kim".to_string(),
        password: "pw".to_string(),
        password_confirm: "other".to_string(),
    };

    assert!(handle_command(command, &config).await.is_err());
    assert!(config.token_store().get().await.unwrap().is_none());
}

#[tokio::test]
async fn test_posts_clamps_stale_page_and_saves_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/post"))
        .and(query_param("domains", "FINTECH"))
        .and(query_param("page", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [],
            "paginator": {"lastPage": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/post"))
        .and(query_param("domains", "FINTECH"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [post_json("p1")],
            "paginator": {"lastPage": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config(&server, &dir);
    let store = config.preference_store();
    store
        .save(&Preferences {
            filters: FilterState {
                domains: vec![Domain::Fintech],
                ..Default::default()
            },
            page: 9,
        })
        .await
        .unwrap();

    handle_command(Command::Posts(PostsArgs::default()), &config)
        .await
        .unwrap();

    let saved = store.load().await;
    assert_eq!(saved.page, 2);
    assert_eq!(saved.filters.domains, vec![Domain::Fintech]);
}

#[tokio::test]
async fn test_posts_status_flag_keeps_stored_domains() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/post"))
        .and(query_param("domains", "FINTECH"))
        .and(query_param("isActive", "true"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [post_json("p1")],
            "paginator": {"lastPage": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config(&server, &dir);
    let store = config.preference_store();
    store
        .save(&Preferences {
            filters: FilterState {
                domains: vec![Domain::Fintech],
                ..Default::default()
            },
            page: 2,
        })
        .await
        .unwrap();

    let args = PostsArgs {
        active: true,
        ..Default::default()
    };
    handle_command(Command::Posts(args), &config).await.unwrap();

    let saved = store.load().await;
    assert!(saved.filters.is_active);
    assert_eq!(saved.filters.domains, vec![Domain::Fintech]);
    assert_eq!(saved.page, 0);
}

#[tokio::test]
async fn test_profile_save_in_edit_mode_keeps_existing_cv() {
    let existing_key = "static/private/CV/AbCdEfGhIj_20250301/cv.pdf";
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/applicant/me"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Kim",
            "email": "kim@snu.ac.kr",
            "enrollYear": 2019,
            "department": "컴퓨터공학부",
            "cvKey": existing_key
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/applicant/me"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(json!({
            "enrollYear": 2020,
            "department": "경제학부,컴퓨터공학부",
            "cvKey": existing_key
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Kim",
            "email": "kim@snu.ac.kr",
            "enrollYear": 2020,
            "department": "경제학부,컴퓨터공학부",
            "cvKey": existing_key
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config(&server, &dir);
    config.token_store().set("tok").await.unwrap();

    let command = Command::Profile {
        command: ProfileCommand::Save {
            student_id: "20".to_string(),
            majors: vec!["경제학부".to_string(), "컴퓨터공학부".to_string()],
            cv: None,
        },
    };
    handle_command(command, &config).await.unwrap();
}

#[tokio::test]
async fn test_profile_save_without_cv_fails_when_creating() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/applicant/me"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "APPLICANT_002",
            "message": "profile not found"
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config(&server, &dir);
    config.token_store().set("tok").await.unwrap();

    let command = Command::Profile {
        command: ProfileCommand::Save {
            student_id: "20".to_string(),
            majors: vec!["경제학부".to_string()],
            cv: None,
        },
    };
    assert!(handle_command(command, &config).await.is_err());
}
