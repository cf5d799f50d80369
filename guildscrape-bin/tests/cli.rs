#[cfg(test)]
mod cli {
    use std::{error::Error, fs, path::Path};

    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::str::contains;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tempfile::{TempDir, tempdir};
    use test_utils::{character_json, guild_json, mock_json, mock_regional_endpoints};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    type Result<T> = std::result::Result<T, Box<dyn Error>>;

    /// Write a configuration file pointing the `eu` region at the mock server
    fn write_config(dir: &Path, server: &MockServer, extra: &str) -> Result<()> {
        let config = format!(
            "api_qps_limit: 20\n\
             min_level: 110\n\
             progress_raids: [Uldir]\n\
             endpoints:\n  eu: {}\n\
             guilds:\n  - {{region: EU, realm: Stormrage, name: Big Guild}}\n\
             {extra}",
            server.uri()
        );
        fs::write(dir.join("config.yml"), config)?;
        Ok(())
    }

    async fn guild_server(rexxar_class: u32) -> MockServer {
        let mock_server = MockServer::start().await;
        mock_regional_endpoints!(mock_server);
        mock_json!(
            mock_server,
            "/wow/guild/Stormrage/Big%20Guild",
            guild_json!("Big Guild", [("Jaina", 120), ("Rexxar", 110), ("Alt", 20)])
        );
        mock_json!(
            mock_server,
            "/wow/character/Stormrage/Jaina",
            character_json!("Jaina", 120, 8, 1, 380.0, [("Uldir", [(1, 1, 0), (1, 0, 0)])])
        );
        mock_json!(
            mock_server,
            "/wow/character/Stormrage/Rexxar",
            character_json!("Rexxar", 110, rexxar_class, 2, 300.0, [])
        );
        mock_server
    }

    fn workdir() -> Result<TempDir> {
        Ok(tempdir()?)
    }

    #[tokio::test]
    async fn test_writes_guild_and_published_config() -> Result<()> {
        let mock_server = guild_server(1).await;
        let dir = workdir()?;
        write_config(dir.path(), &mock_server, "api_key: file-key\n")?;

        cargo_bin_cmd!()
            .current_dir(dir.path())
            .env_remove("GUILDSCRAPE_API_KEY")
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stderr(contains("Skipping Alt-Stormrage"))
            .stderr(contains("Done!"));

        let guild: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("build/eu/stormrage/big-guild.json"))?)?;
        assert_eq!(guild["region"], "eu");
        assert_eq!(guild["name"], "Big Guild");
        let mut mates: Vec<_> = guild["mates"].as_object().unwrap().keys().cloned().collect();
        mates.sort();
        assert_eq!(mates, vec!["Jaina".to_string(), "Rexxar".to_string()]);
        assert_eq!(guild["mates"]["Rexxar"]["class"], "Warrior");
        assert_eq!(guild["mates"]["Jaina"]["ilvl"], 380.0);
        assert_eq!(
            guild["mates"]["Jaina"]["progress"]["Uldir"]["heroic"]["downed"],
            1
        );

        let published = fs::read_to_string(dir.path().join("build/config.json"))?;
        assert!(!published.contains("file-key"));
        let published: Value = serde_json::from_str(&published)?;
        assert_eq!(published["guilds"][0]["path"], "eu/stormrage/big-guild.json");
        assert!(published.get("api_key").is_none());
        assert!(published.get("endpoints").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_member_fails_run() -> Result<()> {
        // Class 3 is unknown to the mocked class table
        let mock_server = guild_server(3).await;
        let dir = workdir()?;
        write_config(dir.path(), &mock_server, "api_key: file-key\n")?;

        cargo_bin_cmd!()
            .current_dir(dir.path())
            .env_remove("GUILDSCRAPE_API_KEY")
            .assert()
            .failure()
            .code(1)
            .stderr(contains("Cannot fetch guild Big Guild-Stormrage (eu)"))
            .stderr(contains("Rexxar"));

        assert!(!dir.path().join("build/eu/stormrage/big-guild.json").exists());
        assert!(!dir.path().join("build/config.json").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_api_key_from_env() -> Result<()> {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wow/data/character/races"))
            .and(query_param("apikey", "env-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"races": []})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/wow/data/character/classes"))
            .and(query_param("apikey", "env-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"classes": []})))
            .expect(1)
            .mount(&mock_server)
            .await;
        mock_json!(
            mock_server,
            "/wow/guild/Stormrage/Big%20Guild",
            guild_json!("Big Guild", [])
        );
        let dir = workdir()?;
        write_config(dir.path(), &mock_server, "")?;

        cargo_bin_cmd!()
            .current_dir(dir.path())
            .env("GUILDSCRAPE_API_KEY", "env-key")
            .arg("--outdir")
            .arg("public")
            .assert()
            .success();

        assert!(dir.path().join("public/eu/stormrage/big-guild.json").is_file());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_api_key_is_config_error() -> Result<()> {
        let mock_server = MockServer::start().await;
        let dir = workdir()?;
        write_config(dir.path(), &mock_server, "")?;

        cargo_bin_cmd!()
            .current_dir(dir.path())
            .env_remove("GUILDSCRAPE_API_KEY")
            .assert()
            .failure()
            .code(3)
            .stderr(contains("No API key"));

        assert!(mock_server.received_requests().await.unwrap().is_empty());
        Ok(())
    }

    #[test]
    fn test_zero_qps_limit_is_config_error() -> Result<()> {
        let dir = workdir()?;
        fs::write(
            dir.path().join("guilds.toml"),
            "api_key = \"k\"\napi_qps_limit = 0\n",
        )?;

        cargo_bin_cmd!()
            .current_dir(dir.path())
            .arg("--config")
            .arg("guilds.toml")
            .assert()
            .failure()
            .code(3)
            .stderr(contains("api_qps_limit"));
        Ok(())
    }

    #[test]
    fn test_missing_config_file_is_config_error() -> Result<()> {
        let dir = workdir()?;

        cargo_bin_cmd!()
            .current_dir(dir.path())
            .assert()
            .failure()
            .code(3)
            .stderr(contains("Cannot load configuration file `config.yml`"));
        Ok(())
    }

    #[test]
    fn test_help() {
        cargo_bin_cmd!()
            .arg("--help")
            .assert()
            .success()
            .stdout(contains("--qps-limit"))
            .stdout(contains("--outdir"));
    }
}
