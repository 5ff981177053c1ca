// src/bin/seed.rs
// Populate a running mapalbum-api with a demo map, its markers and their attachments
use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

// --- ANSI colours ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

struct DemoMarker {
    title: &'static str,
    description: &'static str,
    latitude: f64,
    longitude: f64,
    media: &'static [&'static str],
}

const DEMO_MARKERS: &[DemoMarker] = &[
    DemoMarker {
        title: "Basilica del Pilar",
        description: "Baroque basilica on the bank of the Ebro",
        latitude: 41.656_944,
        longitude: -0.878_611,
        media: &["photo_file", "photo_file", "video_file"],
    },
    DemoMarker {
        title: "Aljaferia",
        description: "Fortified Islamic palace",
        latitude: 41.656_5,
        longitude: -0.896_9,
        media: &["photo_file", "text_file"],
    },
    DemoMarker {
        title: "Puente de Piedra",
        description: "Stone bridge over the Ebro",
        latitude: 41.657_8,
        longitude: -0.875_8,
        media: &["photo_file"],
    },
];

/// Only the fields of the envelope the seeder reads
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Created {
    id_map: Option<i64>,
    id_marker: Option<i64>,
    id_multimedia: Option<i64>,
}

struct Seeder {
    base_url: String,
    client: Client,
}

impl Seeder {
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { base_url, client })
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn post(&self, path: &str, body: Value) -> Result<Created> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {} failed", path))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            bail!("HTTP {} - {}", status, body);
        }

        response
            .json::<Created>()
            .await
            .context("failed to parse response JSON")
    }

    async fn run(&self, id_user: i64) -> Result<()> {
        println!("{}🔍 Checking service status...{}", CYAN, RESET);
        if !self.check_service_health().await {
            bail!("service unavailable at {}", self.base_url);
        }

        let created = self
            .post(
                "/maps",
                json!({
                    "name": "Zaragoza highlights",
                    "description": "Demo map created by the seed binary",
                    "privacy": "public",
                    "idUser": id_user
                }),
            )
            .await?;
        let id_map = created.id_map.context("response has no idMap")?;
        println!("{}✅ Map {} created{}", GREEN, id_map, RESET);

        let mut attachments = 0;
        for marker in DEMO_MARKERS {
            let created = self
                .post(
                    "/markers",
                    json!({
                        "title": marker.title,
                        "description": marker.description,
                        "latitude": marker.latitude,
                        "longitude": marker.longitude,
                        "idMap": id_map
                    }),
                )
                .await?;
            let id_marker = created.id_marker.context("response has no idMarker")?;
            println!("  📍 {} ({})", marker.title, id_marker);

            for media_type in marker.media {
                let created = self
                    .post(
                        "/multimedia",
                        json!({ "type": media_type, "idMarker": id_marker }),
                    )
                    .await?;
                if created.id_multimedia.is_some() {
                    attachments += 1;
                }
            }
        }

        println!(
            "\n{}✨ Seeded 1 map, {} markers, {} attachments{}",
            BOLD,
            DEMO_MARKERS.len(),
            attachments,
            RESET
        );
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let base_url =
        env::var("MAPALBUM_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let id_user = env::var("SEED_USER_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);

    let result = match Seeder::new(base_url) {
        Ok(seeder) => seeder.run(id_user).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        println!("{}❌ Seeding failed: {:#}{}", RED, e, RESET);
        std::process::exit(1);
    }
}
