use async_trait::async_trait;
use contracts::domain::common::{AggregateId, AggregateRoot};
use reqwest::{Method, RequestBuilder, Response};
use std::marker::PhantomData;
use std::time::Duration;

use super::repository::{Repository, RepositoryError, RepositoryResult};

/// Client for the hosted store's REST interface (PostgREST dialect).
///
/// One instance per collection; the table name comes from
/// `AggregateRoot::collection_name`.
pub struct RestRepository<T> {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: AggregateRoot> RestRepository<T> {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Transport(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            _record: PhantomData,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, T::collection_name())
    }

    fn list_url(&self) -> String {
        format!("{}?select=*&order=created_at.desc", self.collection_url())
    }

    fn delete_url(&self, id: T::Id) -> String {
        format!(
            "{}?id=eq.{}",
            self.collection_url(),
            urlencoding::encode(&id.as_string())
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", self.api_key.as_str())
            .header("Authorization", format!("Bearer {}", self.api_key))
    }
}

impl From<reqwest::Error> for RepositoryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RepositoryError::Decode(e.to_string())
        } else if e.is_timeout() {
            RepositoryError::Transport(format!("store did not answer in time: {}", e))
        } else if e.is_connect() {
            RepositoryError::Transport(format!("cannot connect to store: {}", e))
        } else {
            RepositoryError::Transport(e.to_string())
        }
    }
}

/// Maps a non-2xx response to an error, keeping the body for diagnostics
async fn check_status(response: Response) -> RepositoryResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status.as_u16(), body))
}

fn status_error(status: u16, body: String) -> RepositoryError {
    match status {
        400 | 409 | 422 => RepositoryError::Validation(body),
        _ => RepositoryError::Http { status, body },
    }
}

#[async_trait]
impl<T: AggregateRoot> Repository<T> for RestRepository<T> {
    async fn list(&self) -> RepositoryResult<Vec<T>> {
        let response = self.request(Method::GET, &self.list_url()).send().await?;
        let items = check_status(response).await?.json::<Vec<T>>().await?;
        tracing::debug!("{}: fetched {} rows", T::collection_name(), items.len());
        Ok(items)
    }

    async fn create(&self, dto: T::Dto) -> RepositoryResult<T> {
        let response = self
            .request(Method::POST, &self.collection_url())
            .header("Prefer", "return=representation")
            .json(&[dto])
            .send()
            .await?;
        let mut rows = check_status(response).await?.json::<Vec<T>>().await?;
        if rows.is_empty() {
            return Err(RepositoryError::Decode(format!(
                "{}: insert returned no rows",
                T::collection_name()
            )));
        }
        Ok(rows.swap_remove(0))
    }

    async fn delete(&self, id: T::Id) -> RepositoryResult<bool> {
        let response = self
            .request(Method::DELETE, &self.delete_url(id))
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let rows = check_status(response)
            .await?
            .json::<Vec<serde_json::Value>>()
            .await?;
        Ok(!rows.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_content::aggregate::{Content, ContentId};
    use contracts::domain::a003_campaign::aggregate::Campaign;

    fn repo<T: AggregateRoot>() -> RestRepository<T> {
        RestRepository::new("https://demo.supabase.co/", "anon", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_urls() {
        let contents = repo::<Content>();
        assert_eq!(
            contents.collection_url(),
            "https://demo.supabase.co/rest/v1/contents"
        );
        assert_eq!(
            contents.list_url(),
            "https://demo.supabase.co/rest/v1/contents?select=*&order=created_at.desc"
        );
        assert_eq!(
            contents.delete_url(ContentId(17)),
            "https://demo.supabase.co/rest/v1/contents?id=eq.17"
        );
        assert_eq!(
            repo::<Campaign>().collection_url(),
            "https://demo.supabase.co/rest/v1/campaigns"
        );
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            status_error(422, "bad".into()),
            RepositoryError::Validation(body) if body == "bad"
        ));
        assert!(matches!(
            status_error(503, String::new()),
            RepositoryError::Http { status: 503, .. }
        ));
    }

    #[test]
    fn test_auth_headers() {
        let contents = repo::<Content>();
        let request = contents
            .request(Method::GET, &contents.list_url())
            .build()
            .unwrap();
        assert_eq!(request.headers()["apikey"], "anon");
        assert_eq!(request.headers()["Authorization"], "Bearer anon");
    }

    mod wire {
        use super::*;
        use contracts::domain::a001_project::aggregate::{Project, ProjectDto, ProjectId};
        use serde_json::json;
        use wiremock::matchers::{body_json, header, method, path, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        fn project_row(id: i64, name: &str) -> serde_json::Value {
            json!({
                "id": id,
                "name": name,
                "monthly_budget": 5000.0,
                "status": "active",
                "created_at": "2025-01-10T12:00:00Z"
            })
        }

        fn dto() -> ProjectDto {
            ProjectDto {
                name: "Projeto Alpha".into(),
                monthly_budget: 5000.0,
                status: "active".into(),
            }
        }

        fn store(server: &MockServer) -> RestRepository<Project> {
            RestRepository::new(&server.uri(), "anon", Duration::from_secs(5)).unwrap()
        }

        #[tokio::test]
        async fn test_list_decodes_ordered_rows() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/rest/v1/projects"))
                .and(query_param("select", "*"))
                .and(query_param("order", "created_at.desc"))
                .and(header("apikey", "anon"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!([project_row(2, "B"), project_row(1, "A")])),
                )
                .expect(1)
                .mount(&server)
                .await;

            let projects = store(&server).list().await.unwrap();
            let ids: Vec<ProjectId> = projects.iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![ProjectId(2), ProjectId(1)]);
            assert_eq!(projects[0].current_spend, 0.0);
        }

        #[tokio::test]
        async fn test_create_returns_stored_row() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/rest/v1/projects"))
                .and(header("Prefer", "return=representation"))
                .and(body_json(json!([{
                    "name": "Projeto Alpha",
                    "monthly_budget": 5000.0,
                    "status": "active"
                }])))
                .respond_with(
                    ResponseTemplate::new(201)
                        .set_body_json(json!([project_row(5, "Projeto Alpha")])),
                )
                .expect(1)
                .mount(&server)
                .await;

            let project = store(&server).create(dto()).await.unwrap();
            assert_eq!(project.id, ProjectId(5));
            assert_eq!(project.name, "Projeto Alpha");
        }

        #[tokio::test]
        async fn test_empty_insert_reply_is_decode_error() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/rest/v1/projects"))
                .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
                .mount(&server)
                .await;

            let err = store(&server).create(dto()).await.unwrap_err();
            assert!(matches!(err, RepositoryError::Decode(msg) if msg.contains("no rows")));
        }

        #[tokio::test]
        async fn test_delete_reports_whether_a_row_matched() {
            let server = MockServer::start().await;
            Mock::given(method("DELETE"))
                .and(path("/rest/v1/projects"))
                .and(query_param("id", "eq.5"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!([project_row(5, "A")])),
                )
                .mount(&server)
                .await;
            Mock::given(method("DELETE"))
                .and(path("/rest/v1/projects"))
                .and(query_param("id", "eq.6"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
                .mount(&server)
                .await;

            let repo = store(&server);
            assert!(repo.delete(ProjectId(5)).await.unwrap());
            assert!(!repo.delete(ProjectId(6)).await.unwrap());
        }

        #[tokio::test]
        async fn test_rejected_insert_is_validation_error() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/rest/v1/projects"))
                .respond_with(ResponseTemplate::new(422).set_body_string("null value in name"))
                .mount(&server)
                .await;

            let err = store(&server).create(dto()).await.unwrap_err();
            assert!(matches!(
                err,
                RepositoryError::Validation(body) if body == "null value in name"
            ));
        }

        #[tokio::test]
        async fn test_unavailable_store_is_http_error() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/rest/v1/projects"))
                .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
                .mount(&server)
                .await;

            let err = store(&server).list().await.unwrap_err();
            assert!(matches!(
                err,
                RepositoryError::Http { status: 503, ref body } if body == "maintenance"
            ));
        }
    }
}
