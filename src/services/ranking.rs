use anyhow::Result;
use log::{info, warn};

use crate::config::menus::{get_gender_menu, get_methods_menu};
use crate::config::settings::AppConfig;
use crate::database::{self, SqliteSource};
use crate::output::{table, MenuItem, MenusResponse, WarListItem, WarResponse};
use crate::rating::{GenderFilter, Method, RatingSource, WarAggregator};

pub struct RankingService {
    config: AppConfig,
}

impl RankingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run_rank(&self, method: Method, gender: GenderFilter, json: bool) -> Result<()> {
        let source = self.open_source()?;
        let response = self.build_response(&source, method, gender, true)?;
        print_response(&response, json, table::render_ranking)
    }

    pub fn run_lists(&self, method: Method, gender: GenderFilter, json: bool) -> Result<()> {
        let source = self.open_source()?;
        let response = self.build_response(&source, method, gender, false)?;
        print_response(&response, json, table::render_lists)
    }

    pub fn run_menus(&self, json: bool) -> Result<()> {
        let menus = menus();
        if json {
            println!("{}", serde_json::to_string_pretty(&menus)?);
        } else {
            print!("{}", table::render_menus(&menus));
        }
        Ok(())
    }

    /// Ranked items are only produced when every window is complete
    pub fn build_response<S: RatingSource>(
        &self,
        source: &S,
        method: Method,
        gender: GenderFilter,
        with_items: bool,
    ) -> Result<WarResponse> {
        let war = WarAggregator::new(source, method, gender, &self.config.war);

        let year = war.latest_common_year()?;
        let available = war.is_available()?;
        let lists = war.lists()?.cloned();

        let items = match (&lists, available && with_items) {
            (Some(lists), true) => war
                .players()?
                .iter()
                .enumerate()
                .map(|(idx, row)| WarListItem::from_row(idx + 1, row, lists))
                .collect(),
            _ => Vec::new(),
        };

        if !available {
            warn!("Rating lists incomplete for method {}", method.key());
        } else if with_items {
            info!("Ranked {} players", items.len());
        }

        Ok(WarResponse {
            method,
            gender,
            year,
            available,
            lists,
            items,
        })
    }

    fn open_source(&self) -> Result<SqliteSource> {
        let pool = database::create_pool(&self.config.database.path)?;
        Ok(SqliteSource::new(pool))
    }
}

pub fn menus() -> MenusResponse {
    MenusResponse {
        methods: get_methods_menu().iter().map(MenuItem::from).collect(),
        genders: get_gender_menu().iter().map(MenuItem::from).collect(),
    }
}

fn print_response(
    response: &WarResponse,
    json: bool,
    render: fn(&WarResponse) -> String,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        print!("{}", render(response));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::rating::source::fake::{FakeDomestic, FakeInternational, FakeSource};

    fn date(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 6, 1).unwrap()
    }

    fn source(years: &[i32]) -> FakeSource {
        let ratings: Vec<_> = years.iter().map(|&y| (date(y), 2000)).collect();
        FakeSource {
            domestic: vec![FakeDomestic::new(1, &ratings), FakeDomestic::new(2, &ratings)],
            international: vec![FakeInternational {
                domestic_id: Some(2),
                ratings: years.iter().map(|&y| (date(y), 2200)).collect(),
            }],
            queries: Default::default(),
        }
    }

    #[test]
    fn test_response_ranks_available_data() {
        let service = RankingService::new(AppConfig::new());
        let response = service
            .build_response(&source(&[2021, 2022, 2023]), Method::Weighted, GenderFilter::All, true)
            .unwrap();

        assert!(response.available);
        assert_eq!(response.year, Some(2023));
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].player_id, 2);
        assert_eq!(response.items[0].rank, 1);
        assert_eq!(response.items[1].rank, 2);
    }

    #[test]
    fn test_incomplete_window_yields_no_items() {
        let service = RankingService::new(AppConfig::new());
        let response = service
            .build_response(&source(&[2022, 2023]), Method::Weighted, GenderFilter::All, true)
            .unwrap();

        assert!(!response.available);
        assert!(response.lists.is_some());
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_lists_response_skips_ranking() {
        let service = RankingService::new(AppConfig::new());
        let source = source(&[2023]);
        let response = service
            .build_response(&source, Method::Simple, GenderFilter::All, false)
            .unwrap();

        assert!(response.available);
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_menus() {
        let menus = menus();
        assert_eq!(menus.methods.len(), 2);
        assert_eq!(menus.genders[1].key, "F");
    }
}
