use super::LookupService;
use crate::config::DeckConfig;
use crate::error::{DeckError, Result};
use crate::model::{Creature, CreatureId};
use log::debug;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

/// Name of the stat shown on cards.
pub const SPEED_STAT: &str = "speed";

pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| DeckError::Config(format!("invalid api-url {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(DeckError::Config(format!("invalid api-url {}", base_url)));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn from_config(config: &DeckConfig) -> Result<Self> {
        Self::new(&config.api_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `{base}/{query}` with `query` as one percent-encoded path segment.
    fn url_for(&self, query: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DeckError::Config(format!("invalid api-url {}", self.base_url)))?
            .pop_if_empty()
            .push(query);
        Ok(url)
    }
}

impl LookupService for PokeApiClient {
    async fn lookup(&self, query: &str) -> Result<Creature> {
        let url = self.url_for(query)?;
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("GET {} -> {}", url, status);
            return Err(DeckError::NotFound(query.to_string()));
        }

        let body: PokemonResponse = response.json().await?;
        body.into_creature()
    }
}

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    #[serde(default)]
    sprites: Sprites,
    #[serde(default)]
    stats: Vec<StatEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatEntry {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

impl PokemonResponse {
    fn into_creature(self) -> Result<Creature> {
        let id = CreatureId::new(self.id)
            .ok_or_else(|| DeckError::Api(format!("API returned invalid id {}", self.id)))?;
        let speed = self
            .stats
            .iter()
            .find(|entry| entry.stat.name == SPEED_STAT)
            .map(|entry| entry.base_stat);
        let image_url = self.sprites.front_default.filter(|url| !url.is_empty());

        Ok(Creature {
            id,
            name: self.name,
            image_url,
            speed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "sprites": {
            "front_default": "https://example.test/sprites/25.png",
            "back_default": null
        },
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}},
            {"base_stat": 40, "effort": 0, "stat": {"name": "defense", "url": ""}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-attack", "url": ""}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-defense", "url": ""}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
        ]
    }"#;

    fn parse(raw: &str) -> Result<Creature> {
        let body: PokemonResponse = serde_json::from_str(raw)?;
        body.into_creature()
    }

    #[test]
    fn maps_full_record() {
        let creature = parse(PIKACHU).unwrap();
        assert_eq!(creature.id.get(), 25);
        assert_eq!(creature.name, "pikachu");
        assert_eq!(
            creature.image_url.as_deref(),
            Some("https://example.test/sprites/25.png")
        );
        assert_eq!(creature.speed, Some(90));
    }

    #[test]
    fn speed_is_found_by_name_not_position() {
        let raw = r#"{
            "id": 7, "name": "squirtle", "sprites": {"front_default": null},
            "stats": [
                {"base_stat": 43, "stat": {"name": "speed"}},
                {"base_stat": 44, "stat": {"name": "hp"}}
            ]
        }"#;
        assert_eq!(parse(raw).unwrap().speed, Some(43));
    }

    #[test]
    fn short_or_missing_stats_give_no_speed() {
        let raw = r#"{"id": 1, "name": "bulbasaur", "stats": [{"base_stat": 45, "stat": {"name": "hp"}}]}"#;
        assert_eq!(parse(raw).unwrap().speed, None);

        let raw = r#"{"id": 1, "name": "bulbasaur"}"#;
        let creature = parse(raw).unwrap();
        assert_eq!(creature.speed, None);
        assert_eq!(creature.image_url, None);
    }

    #[test]
    fn zero_id_is_rejected() {
        let raw = r#"{"id": 0, "name": "missingno"}"#;
        assert!(matches!(parse(raw), Err(DeckError::Api(_))));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/pokemon/", None).unwrap();
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2/pokemon");
        assert_eq!(
            client.url_for("25").unwrap().as_str(),
            "https://pokeapi.co/api/v2/pokemon/25"
        );
    }

    #[test]
    fn query_is_a_single_encoded_segment() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/pokemon", None).unwrap();
        assert_eq!(
            client.url_for("#25").unwrap().as_str(),
            "https://pokeapi.co/api/v2/pokemon/%2325"
        );
        assert_eq!(
            client.url_for("a/b?c").unwrap().as_str(),
            "https://pokeapi.co/api/v2/pokemon/a%2Fb%3Fc"
        );
    }

    #[test]
    fn unparseable_base_url_is_a_config_error() {
        assert!(matches!(
            PokeApiClient::new("not a url", None),
            Err(DeckError::Config(_))
        ));
    }

    /// Serves `PIKACHU` for `/pokemon/25` and 404 for any other path, one
    /// response per connection. Returns the base URL.
    fn serve_pikachu() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                let mut header = String::new();
                while reader.read_line(&mut header).unwrap() > 0 && header != "\r\n" {
                    header.clear();
                }

                let path = request_line.split_whitespace().nth(1).unwrap_or("");
                let (status, body) = if path == "/pokemon/25" {
                    ("200 OK", PIKACHU)
                } else {
                    ("404 Not Found", "Not Found")
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).unwrap();
            }
        });
        format!("http://{}/pokemon", addr)
    }

    #[tokio::test]
    async fn lookup_maps_success_response() {
        let client = PokeApiClient::new(&serve_pikachu(), Some(Duration::from_secs(5))).unwrap();

        let creature = client.lookup("25").await.unwrap();

        assert_eq!(creature.id.get(), 25);
        assert_eq!(creature.name, "pikachu");
        assert_eq!(creature.speed, Some(90));
    }

    #[tokio::test]
    async fn lookup_non_success_status_is_not_found() {
        let client = PokeApiClient::new(&serve_pikachu(), Some(Duration::from_secs(5))).unwrap();

        match client.lookup("999999").await {
            Err(DeckError::NotFound(query)) => assert_eq!(query, "999999"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
