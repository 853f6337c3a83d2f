// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use serde::{Deserialize, de::DeserializeOwned};

use crate::{config::StarryConfig, utils::StarryError};

/// Named reference used all over PokéAPI (`{ "name": ..., "url": ... }`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

/// The parts of `/pokemon/{id or name}` we read
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResource {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: PokemonSprites,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    pub height: u32,
    pub weight: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// The parts of `/pokemon-species/{id or name}` we read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeciesResource {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

/// Thin PokéAPI client, one GET per call and nothing cached
#[derive(Debug, Clone)]
pub struct StarryApi {
    client: reqwest::Client,
    base_url: String,
}

impl StarryApi {
    pub fn new(config: &StarryConfig) -> Result<Self, StarryError> {
        let mut builder = reqwest::Client::builder().pool_max_idle_per_host(24);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieve the core entity resource for a name or Pokédex number
    pub async fn get_pokemon(&self, query: &str) -> Result<PokemonResource, StarryError> {
        self.get_json("pokemon", query).await
    }

    /// Retrieve the species (metadata) resource for a name or Pokédex number
    pub async fn get_species(&self, query: &str) -> Result<SpeciesResource, StarryError> {
        self.get_json("pokemon-species", query).await
    }

    /// Downloads raw bytes (sprites), a non-success status is a `NotFound`
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, StarryError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(StarryError::NotFound(url.to_string()));
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &str,
    ) -> Result<T, StarryError> {
        let url = format!("{}/{resource}/{query}", self.base_url);
        tracing::trace!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, %status, "PokéAPI rejected the query");
            return Err(StarryError::NotFound(query.to_string()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_fields_we_read() {
        let body = r#"{
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "sprites": { "front_default": "https://img/25.png", "back_default": null },
            "types": [ { "slot": 1, "type": { "name": "electric", "url": "https://x/13/" } } ],
            "height": 4,
            "weight": 60
        }"#;

        let pokemon: PokemonResource = serde_json::from_str(body).unwrap();
        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.sprites.front_default.as_deref(), Some("https://img/25.png"));
        assert_eq!(pokemon.types[0].type_.name, "electric");
    }

    #[test]
    fn missing_sprite_is_none() {
        let body = r#"{ "id": 10, "name": "caterpie", "sprites": { "front_default": null },
                        "types": [], "height": 3, "weight": 29 }"#;

        let pokemon: PokemonResource = serde_json::from_str(body).unwrap();
        assert!(pokemon.sprites.front_default.is_none());
    }

    #[test]
    fn base_url_is_normalised() {
        let config = StarryConfig {
            api_base_url: String::from("http://127.0.0.1:9000/api/v2/"),
            ..Default::default()
        };

        let api = StarryApi::new(&config).unwrap();
        assert_eq!(api.base_url(), "http://127.0.0.1:9000/api/v2");
    }
}
