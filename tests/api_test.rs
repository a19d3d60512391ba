mod common;

use axum::http::StatusCode;
use job_board::{
    database::seed::seed_jobs,
    dto::application_dto::SubmitApplicationPayload,
    services::application_service::SubmitOutcome,
    AppState,
};
use serde_json::{json, Value as JsonValue};

use common::{database_app, send, unique_tag};

fn job_payload(tag: &str, title: &str, category: &str, location: &str) -> JsonValue {
    json!({
        "title": title,
        "company": format!("Company {}", tag),
        "location": location,
        "category": category,
        "type": "Full-time",
        "salary": "$50,000 - $70,000",
        "description": format!("Role description {}", tag),
        "requirements": "",
        "logo": ""
    })
}

async fn create_job(app: &axum::Router, payload: JsonValue) -> i64 {
    let (status, body) = send(app, "POST", "/api/jobs", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"]["id"].as_i64().unwrap()
}

fn application_payload(job_id: i64, email: &str) -> JsonValue {
    json!({
        "job_id": job_id,
        "name": "Ada Lovelace",
        "email": email,
        "resume_link": "https://example.com/ada.pdf",
        "cover_note": "I would love to join."
    })
}

#[tokio::test]
async fn job_lifecycle_end_to_end() {
    let Some((app, pool)) = database_app().await else {
        return;
    };
    let tag = unique_tag();

    let (status, body) = send(
        &app,
        "POST",
        "/api/jobs",
        Some(job_payload(&tag, "Backend Dev", "Engineering", "Remote")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Job created successfully.");
    assert_eq!(body["data"]["type"], "Full-time");
    assert_eq!(body["data"]["application_count"], 0);
    assert!(body["data"]["requirements"].is_null());
    assert!(body["data"]["logo"].is_null());
    let job_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/api/jobs/{}", job_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["company"], format!("Company {}", tag));

    let email = format!("{}@example.com", tag);
    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(application_payload(job_id, &email)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["message"], "Application submitted successfully.");
    assert_eq!(body["data"]["job_id"], job_id);
    assert_eq!(body["data"]["job"]["id"], job_id);
    assert_eq!(body["data"]["job"]["application_count"], 1);

    let (_, body) = send(&app, "GET", &format!("/api/jobs/{}", job_id), None).await;
    assert_eq!(body["data"]["application_count"], 1);

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(application_payload(job_id, &email)),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "You have already applied for this job.");
    assert!(body.get("errors").is_none());

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(application_payload(job_id, &format!("second-{}@example.com", tag))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/jobs/{}/applications", job_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["data"][0]["email"], format!("second-{}@example.com", tag));

    let (status, body) = send(&app, "DELETE", &format!("/api/jobs/{}", job_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job deleted successfully.");

    let (status, _) = send(&app, "GET", &format!("/api/jobs/{}", job_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/jobs/{}/applications", job_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE job_id = $1")
        .bind(job_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);

    let (status, _) = send(&app, "DELETE", &format!("/api/jobs/{}", job_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_filters_are_conjunctive() {
    let Some((app, _pool)) = database_app().await else {
        return;
    };
    let tag = unique_tag();
    let engineering = format!("Engineering {}", tag);
    let design = format!("Design {}", tag);
    let remote = format!("Remote {}", tag);

    let first = create_job(&app, job_payload(&tag, "Backend Dev", &engineering, &remote)).await;
    create_job(&app, job_payload(&tag, "Backend Dev", &design, &remote)).await;

    let uri = format!(
        "/api/jobs?category=Engineering%20{}&location=remote%20{}",
        tag, tag
    );
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["id"], first);

    let uri = format!("/api/jobs?location=Remote%20{}", tag);
    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["total"], 2);

    let uri = format!("/api/jobs?location=Remote%20{}&type=Internship", tag);
    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["total"], 0);

    let uri = format!("/api/jobs?location=Remote%20{}&type=Nonsense", tag);
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn search_matches_title_company_or_description() {
    let Some((app, _pool)) = database_app().await else {
        return;
    };
    let tag = unique_tag();

    let by_title = create_job(
        &app,
        job_payload(&tag, &format!("Backend{} Engineer", tag), "Engineering", "Dhaka"),
    )
    .await;
    let mut payload = job_payload(&tag, "Designer", "Design", "Dhaka");
    payload["description"] = json!(format!("Work with our BACKEND{} team.", tag));
    let by_description = create_job(&app, payload).await;
    create_job(&app, job_payload(&tag, "Writer", "Marketing", "Dhaka")).await;

    let uri = format!("/api/jobs?search=backend{}", tag);
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|job| job["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![by_description, by_title]);

    let uri = format!("/api/jobs?search=company%20{}", tag);
    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["total"], 3);

    let uri = format!("/api/jobs?search=%25{}", tag);
    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn meta_routes_are_not_captured_by_the_id_route() {
    let Some((app, _pool)) = database_app().await else {
        return;
    };
    let tag = unique_tag();
    let category = format!("Category {}", tag);
    let location = format!("Location {}", tag);
    create_job(&app, job_payload(&tag, "Analyst", &category, &location)).await;
    create_job(&app, job_payload(&tag, "Senior Analyst", &category, &location)).await;

    let (status, body) = send(&app, "GET", "/api/jobs/meta/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    let categories = body["data"].as_array().unwrap();
    assert_eq!(
        categories.iter().filter(|value| **value == json!(category)).count(),
        1
    );

    let (status, body) = send(&app, "GET", "/api/jobs/meta/locations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().contains(&json!(location)));
}

#[tokio::test]
async fn missing_jobs_are_not_found() {
    let Some((app, _pool)) = database_app().await else {
        return;
    };

    let missing = i64::MAX;
    let (status, body) = send(&app, "GET", &format!("/api/jobs/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Job not found.");

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(application_payload(missing, "nobody@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "The selected job does not exist.");
}

#[tokio::test]
async fn email_case_does_not_bypass_the_duplicate_guard() {
    let Some((app, pool)) = database_app().await else {
        return;
    };
    let tag = unique_tag();
    let job_id = create_job(&app, job_payload(&tag, "Casing", "Engineering", "Remote")).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(application_payload(job_id, &format!("Case-{}@Example.com", tag))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["email"], format!("case-{}@example.com", tag));

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(application_payload(job_id, &format!("case-{}@example.com", tag))),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "You have already applied for this job.");

    let (_, body) = send(&app, "GET", &format!("/api/jobs/{}", job_id), None).await;
    assert_eq!(body["data"]["application_count"], 1);

    let inserted = sqlx::query(
        r#"
        INSERT INTO applications (job_id, name, email, resume_link)
        VALUES ($1, 'Direct', $2, 'https://example.com/cv.pdf')
        "#,
    )
    .bind(job_id)
    .bind(format!("CASE-{}@EXAMPLE.COM", tag))
    .execute(&pool)
    .await;
    match inserted {
        Err(sqlx::Error::Database(db_err)) => assert!(db_err.is_unique_violation()),
        other => panic!("expected a unique violation, got {:?}", other),
    }
}

#[tokio::test]
async fn numeric_string_job_id_is_accepted() {
    let Some((app, _pool)) = database_app().await else {
        return;
    };
    let tag = unique_tag();
    let job_id = create_job(&app, job_payload(&tag, "Strings", "Engineering", "Remote")).await;

    let mut payload = application_payload(job_id, &format!("{}@example.com", tag));
    payload["job_id"] = json!(job_id.to_string());
    let (status, body) = send(&app, "POST", "/api/applications", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["job_id"], job_id);
}

#[tokio::test]
async fn concurrent_duplicate_submissions_leave_one_row() {
    let Some((app, pool)) = database_app().await else {
        return;
    };
    let tag = unique_tag();
    let job_id = create_job(&app, job_payload(&tag, "Racer", "Engineering", "Remote")).await;
    let state = AppState::new(pool.clone());
    let email = format!("race-{}@example.com", tag);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = state.application_service.clone();
        let payload = SubmitApplicationPayload {
            job_id: Some(job_id.into()),
            name: Some("Racer".into()),
            email: Some(email.clone().into()),
            resume_link: Some("https://example.com/cv.pdf".into()),
            cover_note: None,
        };
        handles.push(tokio::spawn(async move { service.submit(payload).await }));
    }

    let mut submitted = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            SubmitOutcome::Submitted(_) => submitted += 1,
            SubmitOutcome::Duplicate => duplicates += 1,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
    assert_eq!(submitted, 1);
    assert_eq!(duplicates, 7);

    let rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM applications WHERE job_id = $1 AND email = $2",
    )
    .bind(job_id)
    .bind(&email)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let Some((_app, pool)) = database_app().await else {
        return;
    };

    tokio_test::assert_ok!(seed_jobs(&pool, false).await);
    let second = tokio_test::assert_ok!(seed_jobs(&pool, false).await);
    assert_eq!(second, 0);
}
