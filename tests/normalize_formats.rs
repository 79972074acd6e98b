// tests/normalize_formats.rs
//! Per-format extraction against fixture responses shaped like the real
//! board APIs.

use chrono::{DateTime, Utc};
use serde_json::json;

use job_radar::normalize;
use job_radar::registry::{HttpMethod, ParserKind, ProviderDescriptor};

fn now() -> DateTime<Utc> {
    "2026-08-27T12:00:00Z".parse().unwrap()
}

fn descriptor(parser: ParserKind, id_field: &str, date_field: &str) -> ProviderDescriptor {
    ProviderDescriptor {
        endpoint: "https://example.wd3.myworkdayjobs.com/wday/cxs/example/Careers/jobs".into(),
        method: HttpMethod::Get,
        body: None,
        parser,
        id_field: id_field.into(),
        date_field: date_field.into(),
        team_id: None,
    }
}

#[test]
fn workday_takes_first_bullet_field_and_builds_url_from_host() {
    let desc = descriptor(ParserKind::Workday, "bulletFields", "postedOn");
    let data = json!({
        "jobPostings": [
            {
                "bulletFields": ["abc123"],
                "title": "Senior Engineer",
                "externalPath": "/job/Vancouver/Senior-Engineer_abc123",
                "locationsText": "Vancouver, BC",
                "postedOn": "Posted 3 Days Ago"
            },
            {
                // no identifier -> dropped at normalization
                "bulletFields": [],
                "title": "Engineer"
            }
        ]
    });

    let postings = normalize::normalize("example", &desc, &data, now());
    assert_eq!(postings.len(), 1);
    let p = &postings[0];
    assert_eq!(p.job_id, "abc123");
    assert_eq!(p.title.as_deref(), Some("Senior Engineer"));
    assert_eq!(p.location.as_deref(), Some("Vancouver, BC"));
    assert_eq!(
        p.url.as_deref(),
        Some("https://example.wd3.myworkdayjobs.com/job/Vancouver/Senior-Engineer_abc123")
    );
    let age = now() - p.posted_date.unwrap();
    assert_eq!(age.num_days(), 3);
}

#[test]
fn greenhouse_coerces_numeric_ids_and_reads_nested_location() {
    let desc = descriptor(ParserKind::Greenhouse, "id", "first_published");
    let data = json!({
        "jobs": [
            {
                "id": 4891627008u64,
                "title": "Fullstack Software Developer",
                "absolute_url": "https://job-boards.greenhouse.io/unbounce/jobs/4891627008",
                "location": { "name": "Remote, Canada and US" },
                "first_published": "2025-08-20T16:11:11-04:00"
            },
            { "title": "No id here", "location": { "name": "Remote" } }
        ]
    });

    let postings = normalize::normalize("unbounce", &desc, &data, now());
    assert_eq!(postings.len(), 1);
    let p = &postings[0];
    assert_eq!(p.company, "unbounce");
    assert_eq!(p.job_id, "4891627008");
    assert_eq!(p.location.as_deref(), Some("Remote, Canada and US"));
    assert_eq!(
        p.posted_date.unwrap().to_rfc3339(),
        "2025-08-20T20:11:11+00:00"
    );
}

#[test]
fn greenhouse_requisition_ids_stay_strings() {
    let desc = descriptor(ParserKind::Greenhouse, "requisition_id", "first_published");
    let data = json!({
        "jobs": [{ "requisition_id": "27", "title": "Infrastructure Developer" }]
    });
    let postings = normalize::normalize("take-two", &desc, &data, now());
    assert_eq!(postings[0].job_id, "27");
    assert_eq!(postings[0].posted_date, None);
}

#[test]
fn lever_reads_the_flat_array_directly() {
    let desc = descriptor(ParserKind::Lever, "id", "createdAt");
    let data = json!([
        {
            "id": "f7b2-44aa",
            "text": "Backend Developer",
            "applyUrl": "https://jobs.lever.co/example/f7b2-44aa/apply",
            "categories": { "location": "Remote - Canada" },
            "createdAt": 1_756_000_000_000i64
        },
        { "text": "missing id" }
    ]);

    let postings = normalize::normalize("example", &desc, &data, now());
    assert_eq!(postings.len(), 1);
    let p = &postings[0];
    assert_eq!(p.job_id, "f7b2-44aa");
    assert_eq!(p.title.as_deref(), Some("Backend Developer"));
    assert_eq!(p.location.as_deref(), Some("Remote - Canada"));
    assert_eq!(p.posted_date.unwrap().timestamp(), 1_756_000_000);
}

#[test]
fn ashby_keeps_only_the_target_team() {
    let mut desc = descriptor(ParserKind::Ashby, "id", "publishedAt");
    desc.team_id = Some("eng".into());
    let data = json!([
        { "id": "a1", "teamId": "eng", "title": "Platform Developer", "locationName": "Remote" },
        { "id": "a2", "teamId": "sales", "title": "Account Exec", "locationName": "Remote" },
        { "teamId": "eng", "title": "no id" }
    ]);

    let postings = normalize::normalize("acme", &desc, &data, now());
    assert_eq!(postings.len(), 1);
    assert_eq!(postings[0].job_id, "a1");
    assert_eq!(postings[0].url, None);
}

#[test]
fn wrong_top_level_shape_yields_zero_postings() {
    let desc = descriptor(ParserKind::Workday, "bulletFields", "postedOn");
    assert!(normalize::normalize("x", &desc, &json!({"jobs": []}), now()).is_empty());
    let lever = descriptor(ParserKind::Lever, "id", "createdAt");
    assert!(normalize::normalize("x", &lever, &json!({"not": "an array"}), now()).is_empty());
}
