//! Shared harness for integration tests.
//!
//! Builds the full application against a real PostgreSQL database, with
//! the three external collaborators replaced by deterministic in-memory
//! stubs. Tests that construct a [`TestApp`] must be `#[ignore]`d so the
//! suite passes without a database.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use adscope_core::config::AppConfig;
use adscope_core::error::AppError;
use adscope_core::result::AppResult;
use adscope_core::traits::{
    AdAnalysis, AdAnalyzer, AdInput, AdLibraryClient, BrandContext, DriveClient, DriveConnector,
    DriveFile, ReportItem, ScrapeOutcome, ScrapedAd,
};
use adscope_database::repositories::{
    AdRepository, AnalysisRepository, BrandRepository, CompetitorRepository, JobRepository,
    SettingsRepository,
};
use adscope_drive::DriveOAuth;
use adscope_entity::brand::CreateBrand;
use adscope_entity::competitor::CreateCompetitor;
use adscope_worker::{JobDispatcher, JobProcessor, TaskContext};

/// Secret configured in `config/test.toml`.
pub const CRON_SECRET: &str = "test-cron-secret";

/// Ad Library URL accepted by the URL parser, page ID `112233445566`.
pub const AD_LIBRARY_URL: &str =
    "https://www.facebook.com/ads/library/?view_all_page_id=112233445566";

/// Scraper stub returning `min(limit, 3)` fixed ads per call.
#[derive(Debug, Default)]
pub struct StubScraper;

#[async_trait]
impl AdLibraryClient for StubScraper {
    async fn fetch_ads(&self, _ad_library_url: &str, limit: usize) -> AppResult<ScrapeOutcome> {
        let ads = (0..limit.min(3))
            .map(|i| ScrapedAd {
                ad_library_id: format!("stub_ad_{}", i + 1),
                ad_copy: Some(format!("Stub ad copy {}", i + 1)),
                headline: Some(format!("Stub headline {}", i + 1)),
                cta: Some("Shop Now".to_string()),
                media_url: None,
                media_type: Some("image".to_string()),
                thumbnail_url: None,
                landing_page: Some("https://example.com".to_string()),
                impression_range: Some("1K-5K".to_string()),
                start_date: Some(chrono::Utc::now()),
                status: "active".to_string(),
            })
            .collect();

        Ok(ScrapeOutcome {
            ads,
            page_id: Some("112233445566".to_string()),
        })
    }
}

/// Analyzer stub producing a fixed analysis and a one-line report.
#[derive(Debug, Default)]
pub struct StubAnalyzer;

#[async_trait]
impl AdAnalyzer for StubAnalyzer {
    async fn analyze_ad(&self, _ad: &AdInput, _brand: &BrandContext) -> AppResult<AdAnalysis> {
        Ok(AdAnalysis {
            framework: "AIDA".to_string(),
            hooks: "Opens with a question".to_string(),
            concepts: "Social proof".to_string(),
            scripts: "Hook, proof, offer".to_string(),
            target_audience: "Online shoppers".to_string(),
            emotional_triggers: "FOMO".to_string(),
            repurposed_idea: "Adapt the hook for our own launch".to_string(),
            strengths_weaknesses: "Strong hook, weak CTA".to_string(),
        })
    }

    async fn generate_report(
        &self,
        competitor_name: &str,
        items: &[ReportItem],
    ) -> AppResult<String> {
        Ok(format!(
            "# Report for {competitor_name}\n\n{} ads analyzed.\n",
            items.len()
        ))
    }
}

/// Analyzer stub that fails for ads whose copy contains a marker and
/// behaves like [`StubAnalyzer`] otherwise.
#[derive(Debug)]
pub struct SelectiveFailAnalyzer {
    pub fail_marker: String,
}

#[async_trait]
impl AdAnalyzer for SelectiveFailAnalyzer {
    async fn analyze_ad(&self, ad: &AdInput, brand: &BrandContext) -> AppResult<AdAnalysis> {
        if ad
            .ad_copy
            .as_deref()
            .unwrap_or("")
            .contains(&self.fail_marker)
        {
            return Err(AppError::external("model rejected the ad"));
        }
        StubAnalyzer.analyze_ad(ad, brand).await
    }

    async fn generate_report(
        &self,
        competitor_name: &str,
        items: &[ReportItem],
    ) -> AppResult<String> {
        StubAnalyzer.generate_report(competitor_name, items).await
    }
}

/// Drive stub recording every uploaded file name.
#[derive(Debug, Default)]
pub struct StubDrive {
    uploads: Mutex<Vec<String>>,
}

impl StubDrive {
    pub fn uploaded_names(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl DriveClient for StubDrive {
    async fn upload_file(
        &self,
        name: &str,
        _content: &[u8],
        _mime_type: &str,
        _parent_id: Option<&str>,
    ) -> AppResult<DriveFile> {
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(name.to_string());
        let id = format!("stub_file_{}", uploads.len());
        Ok(DriveFile {
            web_view_link: format!("https://drive.example.com/{id}"),
            id,
        })
    }

    async fn get_or_create_folder(
        &self,
        name: &str,
        _parent_id: Option<&str>,
    ) -> AppResult<String> {
        Ok(format!("stub_folder_{name}"))
    }
}

/// Connector stub handing out one shared [`StubDrive`].
#[derive(Debug)]
pub struct StubConnector {
    drive: Arc<StubDrive>,
}

impl DriveConnector for StubConnector {
    fn connect(&self, _refresh_token: &str) -> Arc<dyn DriveClient> {
        Arc::clone(&self.drive) as Arc<dyn DriveClient>
    }
}

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db_pool: PgPool,
    /// Application config.
    pub config: AppConfig,

    pub brands: BrandRepository,
    pub competitors: CompetitorRepository,
    pub ads: AdRepository,
    pub analyses: AnalysisRepository,
    pub settings: SettingsRepository,
    pub jobs: JobRepository,

    pub dispatcher: JobDispatcher,
    pub processor: JobProcessor,
    pub tasks: TaskContext,

    /// The shared Drive stub, for asserting on uploads.
    pub drive: Arc<StubDrive>,
}

impl TestApp {
    /// Create a new test application against a clean database.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = adscope_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        adscope_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let brands = BrandRepository::new(db_pool.clone());
        let competitors = CompetitorRepository::new(db_pool.clone());
        let ads = AdRepository::new(db_pool.clone());
        let analyses = AnalysisRepository::new(db_pool.clone());
        let settings = SettingsRepository::new(db_pool.clone());
        let jobs = JobRepository::new(db_pool.clone());

        let drive = Arc::new(StubDrive::default());

        let tasks = TaskContext {
            brands: brands.clone(),
            competitors: competitors.clone(),
            ads: ads.clone(),
            analyses: analyses.clone(),
            settings: settings.clone(),
            scraper: Arc::new(StubScraper),
            analyzer: Arc::new(StubAnalyzer),
            drive: Arc::new(StubConnector {
                drive: Arc::clone(&drive),
            }),
            drive_root: config.drive.root_folder.clone(),
        };

        let dispatcher = JobDispatcher::new(jobs.clone());
        let processor = JobProcessor::new(jobs.clone(), tasks.clone(), config.jobs.clone());

        let app_state = adscope_api::state::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            brands: brands.clone(),
            competitors: competitors.clone(),
            ads: ads.clone(),
            analyses: analyses.clone(),
            settings: settings.clone(),
            jobs: jobs.clone(),
            dispatcher: dispatcher.clone(),
            processor: processor.clone(),
            tasks: tasks.clone(),
            drive_oauth: DriveOAuth::new(&config.drive),
        };

        let router = adscope_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
            brands,
            competitors,
            ads,
            analyses,
            settings,
            jobs,
            dispatcher,
            processor,
            tasks,
            drive,
        }
    }

    /// Task context with the analyzer swapped out, for failure injection.
    pub fn tasks_with_analyzer(&self, analyzer: Arc<dyn AdAnalyzer>) -> TaskContext {
        let mut tasks = self.tasks.clone();
        tasks.analyzer = analyzer;
        tasks
    }

    /// Clean all test data from the database.
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "jobs",
            "analyses",
            "ads",
            "competitors",
            "brands",
            "settings",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a brand directly through the repository.
    pub async fn create_brand(&self, name: &str) -> Uuid {
        let brand = self
            .brands
            .create(&CreateBrand {
                name: name.to_string(),
                description: Some("Test brand".to_string()),
                target_audience: Some("Testers".to_string()),
                tone_of_voice: None,
                product_info: None,
                industry: Some("Software".to_string()),
            })
            .await
            .expect("Failed to create test brand");
        brand.id
    }

    /// Create a competitor with a valid Ad Library URL.
    pub async fn create_competitor(&self, brand_id: Uuid, name: &str) -> Uuid {
        let competitor = self
            .competitors
            .create(&CreateCompetitor {
                brand_id,
                name: name.to_string(),
                ad_library_url: AD_LIBRARY_URL.to_string(),
                page_id: Some("112233445566".to_string()),
            })
            .await
            .expect("Failed to create test competitor");
        competitor.id
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}
