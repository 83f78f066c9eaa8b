// src/main.rs
//
// Command-line front end. Each subcommand stands in for one page:
// search (home), details, favorite toggle, favorites list.

use std::sync::Arc;

use anyhow::{anyhow, bail, Context};

use moviehub::application::commands::*;
use moviehub::application::dto::SearchRequestDto;
use moviehub::application::state::AppState;
use moviehub::config::AppConfig;
use moviehub::db::{
    create_connection_pool, create_connection_pool_at, get_database_stats, initialize_database,
    verify_database_integrity,
};
use moviehub::integrations::{MovieCatalog, TmdbClient};
use moviehub::repositories::{KeyValueStore, SqliteKeyValueStore};
use moviehub::services::{CatalogService, FavoritesLedger, MovieCache};

const USAGE: &str = "usage:
  moviehub search [--title T] [--year Y] [--genre G] [--page N]
  moviehub details <movie-id>
  moviehub favorite <movie-id>
  moviehub favorites";

#[derive(Debug, PartialEq)]
enum Command {
    Search(SearchRequestDto),
    Details(String),
    ToggleFavorite(String),
    Favorites,
}

fn parse_args<I>(mut args: I) -> anyhow::Result<Command>
where
    I: Iterator<Item = String>,
{
    let name = args.next().ok_or_else(|| anyhow!(USAGE))?;

    match name.as_str() {
        "search" => {
            let mut dto = SearchRequestDto::default();
            while let Some(flag) = args.next() {
                let value = args
                    .next()
                    .with_context(|| format!("{} needs a value", flag))?;
                match flag.as_str() {
                    "--title" => dto.title = Some(value),
                    "--genre" => dto.genre = Some(value),
                    "--year" => {
                        let year = value
                            .parse()
                            .with_context(|| format!("invalid year '{}'", value))?;
                        dto.year = Some(year);
                    }
                    "--page" => {
                        let page = value
                            .parse()
                            .with_context(|| format!("invalid page '{}'", value))?;
                        dto.page = Some(page);
                    }
                    other => bail!("unknown option '{}'\n{}", other, USAGE),
                }
            }
            Ok(Command::Search(dto))
        }
        "details" => Ok(Command::Details(single_id(args)?)),
        "favorite" => Ok(Command::ToggleFavorite(single_id(args)?)),
        "favorites" => Ok(Command::Favorites),
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    }
}

fn single_id<I>(mut args: I) -> anyhow::Result<String>
where
    I: Iterator<Item = String>,
{
    let id = args.next().ok_or_else(|| anyhow!("missing movie id\n{}", USAGE))?;
    if args.next().is_some() {
        bail!("expected a single movie id\n{}", USAGE);
    }
    Ok(id)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = parse_args(std::env::args().skip(1))?;
    let config = AppConfig::from_env()?;

    // 1. INFRASTRUCTURE
    let pool = match &config.database_path {
        Some(path) => create_connection_pool_at(path)?,
        None => create_connection_pool()?,
    };
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;

        let stats = get_database_stats(&conn)?;
        log::debug!(
            "Storage ready: {} keys, {} bytes stored, {} bytes on disk",
            stats.key_count,
            stats.stored_bytes,
            stats.size_bytes
        );
    }
    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(Arc::new(pool)));

    // 2. CLIENT STATE
    let favorites = Arc::new(FavoritesLedger::new(store.clone()));
    let movie_cache = Arc::new(match config.cache.max_entries {
        Some(max_entries) => MovieCache::with_capacity_limit(store, max_entries),
        None => MovieCache::new(store),
    });

    // 3. CATALOG
    let catalog: Arc<dyn MovieCatalog> = Arc::new(TmdbClient::new(&config.catalog)?);
    let catalog_service = Arc::new(CatalogService::new(catalog, movie_cache.clone()));

    let state = AppState {
        favorites,
        movie_cache,
        catalog_service,
    };

    let output = match command {
        Command::Search(dto) => search_movies(&state, dto).await.map(to_json),
        Command::Details(id) => get_movie_details(&state, id).await.map(to_json),
        Command::ToggleFavorite(id) => toggle_favorite(&state, id).await.map(to_json),
        Command::Favorites => list_favorites(&state).await.map(to_json),
    }
    .map_err(|e| anyhow!(e))??;

    println!("{}", output);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> impl Iterator<Item = String> + '_ {
        line.split_whitespace().map(str::to_string)
    }

    #[test]
    fn test_parse_search() {
        let command = parse_args(args("search --title Heat --year 1995 --page 2")).unwrap();
        assert_eq!(
            command,
            Command::Search(SearchRequestDto {
                title: Some("Heat".to_string()),
                year: Some(1995),
                genre: None,
                page: Some(2),
            })
        );
    }

    #[test]
    fn test_parse_single_id_commands() {
        assert_eq!(
            parse_args(args("details 42")).unwrap(),
            Command::Details("42".to_string())
        );
        assert_eq!(
            parse_args(args("favorite 42")).unwrap(),
            Command::ToggleFavorite("42".to_string())
        );
        assert_eq!(parse_args(args("favorites")).unwrap(), Command::Favorites);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args("")).is_err());
        assert!(parse_args(args("details")).is_err());
        assert!(parse_args(args("details 1 2")).is_err());
        assert!(parse_args(args("search --year soon")).is_err());
        assert!(parse_args(args("search --title")).is_err());
        assert!(parse_args(args("watch 1")).is_err());
    }
}
