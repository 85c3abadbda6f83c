use chrono::Local;

use tour_server::cache::{CacheConfig, CachedWeatherClient};
use tour_server::catalog::demo_catalog;
use tour_server::domain::TransportCatalog;
use tour_server::planner::{FixedDistanceEstimator, PlanRequest, Planner};
use tour_server::weather::{WeatherClient, WeatherConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Built-in demo catalog and the standard transport options
    let catalog = demo_catalog();
    let transport = TransportCatalog::standard();
    let estimator = FixedDistanceEstimator::default();
    let planner = Planner::new(&catalog, &transport, &estimator);

    let request = PlanRequest::new("Rome", ["historical", "relaxing"], "09:00", 50.0);

    let tour = match planner.plan(&request) {
        Ok(tour) => tour,
        Err(e) => {
            eprintln!("Planning failed: {e}");
            std::process::exit(1);
        }
    };

    println!("One-day tour of {} ({} stops)", tour.city, tour.visits.len());
    println!();

    for visit in &tour.visits {
        let transport = visit
            .transport
            .as_ref()
            .map(|m| m.as_str())
            .unwrap_or("unassigned");

        match &visit.hop {
            Some(hop) => println!(
                "  {}-{}  {} [{}]  ({} from previous stop, {:.1} km, cost {:.2})",
                visit.start, visit.end, visit.name, visit.category, transport, hop.distance_km, hop.cost
            ),
            None => println!(
                "  {}-{}  {} [{}]  (starting point, on foot)",
                visit.start, visit.end, visit.name, visit.category
            ),
        }
    }

    println!();
    println!(
        "Entry cost: {:.2}  Transport spend: {:.2} (budget {:.2})",
        tour.entry_cost(),
        tour.transport_spend(),
        request.budget
    );

    // Weather is optional: only fetched when an API key is configured
    match std::env::var("WEATHER_API_KEY") {
        Ok(key) if !key.is_empty() => {
            let client =
                WeatherClient::new(WeatherConfig::new(&key)).expect("Failed to create weather client");
            let weather = CachedWeatherClient::new(client, &CacheConfig::default());
            let today = Local::now().date_naive();

            match weather.day_summary(&tour.city, today).await {
                Ok(summary) => {
                    println!();
                    println!(
                        "Weather for {}: {:.1}°C, {}",
                        summary.date, summary.average_temp_c, summary.condition
                    );
                    println!("{}", summary.recommendation);
                }
                Err(e) => eprintln!("Failed to fetch weather: {e}"),
            }
        }
        _ => {
            println!();
            println!("WEATHER_API_KEY not set; skipping the weather summary.");
        }
    }
}
